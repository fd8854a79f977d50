//! A process-wide list of every exposure.
//!
//! Friend lists are meant to stay small and reviewable. With the `audit`
//! feature each exposure registers its [`ExposureInfo`] through `inventory`,
//! so a test can assert exactly which private members are reachable.
//!
//! Without the feature every query sees an empty list. Each generated friend
//! module still carries its own `EXPOSURES` constant either way.
//!
//! ## Platform Support
//!
//! Registration relies on `inventory`, which supports Linux, macOS, Windows,
//! iOS, Android and Web. Elsewhere the list stays empty.

use alloc::string::ToString;

use crate::info::ExposureInfo;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub use error::AuditError;

// -----------------------------------------------------------------------------
// Registry

/// One registered exposure.
#[doc(hidden)]
pub struct Record(pub &'static ExposureInfo);

crate::cfg::audit! {
    inventory::collect!(Record);
}

/// Iterates every registered exposure, in no particular order.
#[cfg(feature = "audit")]
pub fn exposures() -> impl Iterator<Item = &'static ExposureInfo> {
    inventory::iter::<Record>.into_iter().map(|record| record.0)
}

/// Iterates every registered exposure, in no particular order.
///
/// The `audit` feature is disabled, so this is always empty.
#[cfg(not(feature = "audit"))]
pub fn exposures() -> impl Iterator<Item = &'static ExposureInfo> {
    core::iter::empty()
}

/// Returns `true` if registration is active.
#[inline(always)]
pub const fn is_enabled() -> bool {
    crate::cfg::audit!()
}

/// Number of registered exposures.
pub fn count() -> usize {
    exposures().count()
}

/// Finds the single exposure of `owner::member`.
///
/// `owner` may be the full path as written in the friend list or its last
/// segment, see [`ExposureInfo::is`].
///
/// # Examples
///
/// ```
/// use privy_bridge::audit::{self, AuditError};
///
/// if !audit::is_enabled() {
///     let err = audit::find("A", "m_i").unwrap_err();
///     assert!(matches!(err, AuditError::NotExposed { .. }));
/// }
/// ```
pub fn find(owner: &str, member: &str) -> Result<&'static ExposureInfo, AuditError> {
    let mut found = None;
    let mut count = 0;
    for info in exposures().filter(|info| info.is(owner, member)) {
        found = Some(info);
        count += 1;
    }

    match (found, count) {
        (Some(info), 1) => Ok(info),
        (None, _) => Err(AuditError::NotExposed {
            owner: owner.to_string(),
            member: member.to_string(),
        }),
        (Some(_), count) => {
            log::warn!("`{owner}::{member}` is exposed by {count} friend lists");
            Err(AuditError::Ambiguous {
                owner: owner.to_string(),
                member: member.to_string(),
                count,
            })
        }
    }
}

/// Iterates the exposures of one owner.
pub fn of_owner(owner: &str) -> impl Iterator<Item = &'static ExposureInfo> + '_ {
    exposures().filter(move |info| info.owner_is(owner))
}

/// Writes every registered exposure to the log at `debug` level.
pub fn log_exposures() {
    let mut total = 0usize;
    for info in exposures() {
        log::debug!(target: "privy", "exposed: {info}");
        total += 1;
    }
    log::debug!(target: "privy", "{total} exposures registered");
}
