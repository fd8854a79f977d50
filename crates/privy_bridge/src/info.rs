//! Static descriptions of exposures.
//!
//! Every tag carries an [`ExposureInfo`] in [`Bridge::INFO`](crate::Bridge::INFO),
//! and every generated friend module lists them in its `EXPOSURES` constant.

use core::fmt;

// -----------------------------------------------------------------------------
// ExposureKind

/// The four ways a member can be exposed, with fields split by mutability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExposureKind {
    /// `field name: T`, shared and mutable projection.
    Field,
    /// `field const name: T`, shared projection only.
    ConstField,
    /// `fn name(&self, ..)`, any receiver.
    Method,
    /// `static NAME: T` or `const NAME: T`.
    StaticField,
    /// `static fn name(..)`, an associated function without receiver.
    StaticFn,
}

impl ExposureKind {
    /// A short lowercase name, as written in `friends!`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ExposureKind::Field => "field",
            ExposureKind::ConstField => "const field",
            ExposureKind::Method => "fn",
            ExposureKind::StaticField => "static",
            ExposureKind::StaticFn => "static fn",
        }
    }

    /// Returns `true` for kinds that need an owner instance.
    pub const fn needs_instance(self) -> bool {
        matches!(
            self,
            ExposureKind::Field | ExposureKind::ConstField | ExposureKind::Method
        )
    }
}

impl fmt::Display for ExposureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// ExposureInfo

/// Where and how one member was exposed.
///
/// `owner` is the owning type as written in the friend list with whitespace
/// removed, e.g. `ns::B` or `TemplateA<i32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExposureInfo {
    pub owner: &'static str,
    pub member: &'static str,
    /// The wrapper name; differs from `member` for `.. as name` entries.
    pub accessor: &'static str,
    pub kind: ExposureKind,
    /// `module_path!()` of the friend list.
    pub module_path: &'static str,
}

impl ExposureInfo {
    /// Returns `true` if this describes `owner::member`.
    ///
    /// The owner matches either exactly or by its last path segment, so
    /// `"B"` finds `ns::B`.
    pub fn is(&self, owner: &str, member: &str) -> bool {
        self.member == member && self.owner_is(owner)
    }

    /// Returns `true` if the owner is `owner`, by full path or last segment.
    pub fn owner_is(&self, owner: &str) -> bool {
        owner_matches(self.owner, owner)
    }
}

fn owner_matches(recorded: &str, query: &str) -> bool {
    if recorded == query {
        return true;
    }
    // Compare the part before generics, by last segment.
    let base = recorded.split('<').next().unwrap_or(recorded);
    let generics = &recorded[base.len()..];
    let short = base.rsplit("::").next().unwrap_or(base);
    query.len() == short.len() + generics.len()
        && query.starts_with(short)
        && query.ends_with(generics)
}

impl fmt::Display for ExposureInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}::{}", self.kind, self.owner, self.member)?;
        if self.accessor != self.member {
            write!(f, " as {}", self.accessor)?;
        }
        write!(f, " in {}", self.module_path)
    }
}
