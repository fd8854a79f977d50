use crate::info::ExposureInfo;

// -----------------------------------------------------------------------------
// Bridge

/// A tag type carrying one captured pointer to a non-public member.
///
/// Implementations are written by [`friends!`](crate::friends) inside the
/// owning type's module, the only place where privacy lets the member be
/// named. The captured [`PTR`](Bridge::PTR) is a constant, so it can be
/// retrieved from anywhere the tag is visible without granting anything
/// beyond that single member.
///
/// Each tag has exactly one implementation; a second one for the same tag is
/// rejected by coherence.
///
/// # Examples
///
/// ```
/// use privy_bridge::retrieve;
///
/// mod counter {
///     pub struct Counter {
///         hits: u32,
///     }
///
///     impl Counter {
///         pub fn new() -> Self {
///             Self { hits: 7 }
///         }
///     }
///
///     #[derive(Clone, Copy, Default)]
///     pub struct HitsTag;
///
///     impl privy_bridge::Bridge for HitsTag {
///         type Owner = Counter;
///         type Ptr = fn(&Counter) -> u32;
///         const PTR: Self::Ptr = {
///             fn hits(owner: &Counter) -> u32 {
///                 owner.hits
///             }
///             hits
///         };
///         const INFO: privy_bridge::info::ExposureInfo = privy_bridge::info::ExposureInfo {
///             owner: "Counter",
///             member: "hits",
///             accessor: "hits",
///             kind: privy_bridge::info::ExposureKind::Method,
///             module_path: module_path!(),
///         };
///     }
/// }
///
/// let counter = counter::Counter::new();
/// assert_eq!(retrieve(counter::HitsTag)(&counter), 7);
/// ```
pub trait Bridge: Copy + 'static {
    /// The type whose member is exposed.
    ///
    /// For statics this is the type the static is declared for.
    type Owner: ?Sized;

    /// The pointer type: a [`FieldPtr`], [`ConstFieldPtr`], [`StaticPtr`] or a
    /// plain function pointer.
    ///
    /// [`FieldPtr`]: crate::member::FieldPtr
    /// [`ConstFieldPtr`]: crate::member::ConstFieldPtr
    /// [`StaticPtr`]: crate::member::StaticPtr
    type Ptr: Copy;

    /// The pointer captured where the member was declared a friend.
    const PTR: Self::Ptr;

    /// Describes the exposure, for tracing and auditing.
    const INFO: ExposureInfo;
}

/// Returns the pointer captured by `tag`.
///
/// This never has side effects; every call returns the same constant.
#[inline(always)]
pub fn retrieve<B: Bridge>(tag: B) -> B::Ptr {
    let _ = tag;
    B::PTR
}
