#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use privy_bridge as bridge;
pub use privy_cfg as cfg;
