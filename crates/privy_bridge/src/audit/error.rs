use alloc::string::String;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failure of an audit query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuditError {
    #[error("`{owner}::{member}` is not exposed by any registered friend list")]
    NotExposed { owner: String, member: String },

    #[error("`{owner}::{member}` is exposed {count} times")]
    Ambiguous {
        owner: String,
        member: String,
        count: usize,
    },
}
