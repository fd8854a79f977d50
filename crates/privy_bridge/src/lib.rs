//! Typed access to non-public members through explicit friend lists.
//!
//! A friend list is declared with [`friends!`] in the module that owns a type
//! (or below it), where privacy already allows naming its private members.
//! For every listed member it captures a pointer in a zero-sized tag type
//! implementing [`Bridge`], and generates a plain accessor function that can
//! be called from wherever the generated module is visible.
//!
//! ```
//! mod shapes {
//!     pub struct A {
//!         m_i: i32,
//!     }
//!
//!     impl A {
//!         pub fn new() -> Self {
//!             A { m_i: 3 }
//!         }
//!
//!         fn m_f(&self, x: i32) -> i32 {
//!             x + self.m_i
//!         }
//!     }
//!
//!     privy_bridge::friends! {
//!         pub mod friend for A {
//!             field m_i: i32;
//!             fn m_f(&self, i32) -> i32;
//!         }
//!     }
//! }
//!
//! let mut a = shapes::A::new();
//! *shapes::friend::m_i(&mut a) += 1;
//! assert_eq!(shapes::friend::m_f(&a, 1), 5);
//! ```
//!
//! Nothing happens at runtime beyond the call through the captured pointer.
//! With the `debug` feature in a debug build every accessor call is traced
//! through `log` at `trace` level; with the `audit` feature every exposure is
//! registered in [`audit`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    privy_cfg::define_alias! {
        #[cfg(feature = "audit")] => audit,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Code generated by `friends!` names this crate as `::privy_bridge` when the
// caller does not depend on it, which is the case for our own tests.
extern crate self as privy_bridge;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod bridge;

pub mod audit;
pub mod info;
pub mod member;
pub mod overload;

#[cfg(test)]
mod tests;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use bridge::{Bridge, retrieve};
pub use privy_bridge_derive::friends;
