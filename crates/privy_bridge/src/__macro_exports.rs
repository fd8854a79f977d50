//! Items used by code that `friends!` generates. Not a public API.

use crate::info::ExposureInfo;

/// Called at the start of every generated accessor.
#[inline(always)]
pub fn trace(info: &ExposureInfo) {
    crate::cfg::debug! {
        if {
            log::trace!(
                target: "privy",
                "{} access {}::{} via {}::{}",
                info.kind,
                info.owner,
                info.member,
                info.module_path,
                info.accessor,
            );
        } else {
            let _ = info;
        }
    }
}

pub mod audit {
    pub use crate::audit::Record;

    crate::cfg::audit! {
        pub use inventory;
    }
}
