//! Typed pointers to members and the receivers that apply them.
//!
//! Rust has no pointer-to-member, so a field is captured as a pair of
//! projection functions written where the field is visible. They compile to
//! a single offset computation and inline away at every call site.
//!
//! Methods and associated functions need no wrapper here: a method path
//! coerces directly to a function pointer such as `fn(&Owner, i32) -> i32`.

use core::fmt;

// -----------------------------------------------------------------------------
// FieldPtr

/// A captured field with shared and mutable projection.
///
/// # Examples
///
/// ```
/// use privy_bridge::member::FieldPtr;
///
/// struct Point { x: i32 }
///
/// const X: FieldPtr<Point, i32> = {
///     fn get(p: &Point) -> &i32 { &p.x }
///     fn get_mut(p: &mut Point) -> &mut i32 { &mut p.x }
///     FieldPtr::new(get, get_mut)
/// };
///
/// let mut p = Point { x: 1 };
/// *X.get_mut(&mut p) += 1;
/// assert_eq!(*X.get(&p), 2);
/// ```
pub struct FieldPtr<C: ?Sized, T: ?Sized> {
    get: fn(&C) -> &T,
    get_mut: fn(&mut C) -> &mut T,
}

impl<C: ?Sized, T: ?Sized> FieldPtr<C, T> {
    /// Creates a field pointer from its two projections.
    ///
    /// Both functions must project to the same field.
    #[inline(always)]
    pub const fn new(get: fn(&C) -> &T, get_mut: fn(&mut C) -> &mut T) -> Self {
        Self { get, get_mut }
    }

    /// Projects a shared reference to the field.
    #[inline(always)]
    pub fn get<'a>(self, owner: &'a C) -> &'a T {
        (self.get)(owner)
    }

    /// Projects a mutable reference to the field.
    #[inline(always)]
    pub fn get_mut<'a>(self, owner: &'a mut C) -> &'a mut T {
        (self.get_mut)(owner)
    }

    /// Drops the mutable projection.
    #[inline(always)]
    pub const fn into_const(self) -> ConstFieldPtr<C, T> {
        ConstFieldPtr::new(self.get)
    }
}

impl<C: ?Sized, T: ?Sized> Clone for FieldPtr<C, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, T: ?Sized> Copy for FieldPtr<C, T> {}

impl<C: ?Sized, T: ?Sized> fmt::Debug for FieldPtr<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPtr")
            .field("owner", &core::any::type_name::<C>())
            .field("field", &core::any::type_name::<T>())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ConstFieldPtr

/// A captured field with shared projection only.
///
/// Exposing a field as `field const` makes every accessor return `&T`,
/// even when given `&mut C`.
pub struct ConstFieldPtr<C: ?Sized, T: ?Sized> {
    get: fn(&C) -> &T,
}

impl<C: ?Sized, T: ?Sized> ConstFieldPtr<C, T> {
    /// Creates a read-only field pointer.
    #[inline(always)]
    pub const fn new(get: fn(&C) -> &T) -> Self {
        Self { get }
    }

    /// Projects a shared reference to the field.
    #[inline(always)]
    pub fn get<'a>(self, owner: &'a C) -> &'a T {
        (self.get)(owner)
    }
}

impl<C: ?Sized, T: ?Sized> Clone for ConstFieldPtr<C, T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized, T: ?Sized> Copy for ConstFieldPtr<C, T> {}

impl<C: ?Sized, T: ?Sized> fmt::Debug for ConstFieldPtr<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstFieldPtr")
            .field("owner", &core::any::type_name::<C>())
            .field("field", &core::any::type_name::<T>())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// StaticPtr

/// A captured `static` item or associated `const`.
///
/// There is no owner indirection; the pointer yields the same `&'static T`
/// on every call. Mutation goes through the static's own interior
/// mutability.
pub struct StaticPtr<T: ?Sized + 'static> {
    get: fn() -> &'static T,
}

impl<T: ?Sized + 'static> StaticPtr<T> {
    /// Creates a static pointer.
    #[inline(always)]
    pub const fn new(get: fn() -> &'static T) -> Self {
        Self { get }
    }

    /// Returns the static.
    #[inline(always)]
    pub fn get(self) -> &'static T {
        (self.get)()
    }
}

impl<T: ?Sized + 'static> Clone for StaticPtr<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + 'static> Copy for StaticPtr<T> {}

impl<T: ?Sized + 'static> fmt::Debug for StaticPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticPtr")
            .field("target", &core::any::type_name::<T>())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// FieldReceiver

/// A receiver a field pointer `P` can be applied to.
///
/// This is what gives a field accessor its overload set:
///
/// | receiver  | `FieldPtr<C, T>` | `ConstFieldPtr<C, T>` |
/// |-----------|------------------|-----------------------|
/// | `&C`      | `&T`             | `&T`                  |
/// | `&mut C`  | `&mut T`         | `&T`                  |
///
/// No other receiver type implements it, so an accessor cannot be called
/// with an instance of the wrong type, and a shared receiver never yields a
/// mutable reference.
pub trait FieldReceiver<P> {
    type Output;

    fn project(self, ptr: P) -> Self::Output;
}

impl<'a, C: ?Sized, T: ?Sized + 'a> FieldReceiver<FieldPtr<C, T>> for &'a C {
    type Output = &'a T;

    #[inline(always)]
    fn project(self, ptr: FieldPtr<C, T>) -> Self::Output {
        ptr.get(self)
    }
}

impl<'a, C: ?Sized, T: ?Sized + 'a> FieldReceiver<FieldPtr<C, T>> for &'a mut C {
    type Output = &'a mut T;

    #[inline(always)]
    fn project(self, ptr: FieldPtr<C, T>) -> Self::Output {
        ptr.get_mut(self)
    }
}

impl<'a, C: ?Sized, T: ?Sized + 'a> FieldReceiver<ConstFieldPtr<C, T>> for &'a C {
    type Output = &'a T;

    #[inline(always)]
    fn project(self, ptr: ConstFieldPtr<C, T>) -> Self::Output {
        ptr.get(self)
    }
}

impl<'a, C: ?Sized, T: ?Sized + 'a> FieldReceiver<ConstFieldPtr<C, T>> for &'a mut C {
    type Output = &'a T;

    #[inline(always)]
    fn project(self, ptr: ConstFieldPtr<C, T>) -> Self::Output {
        ptr.get(&*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::any::type_name_of_val;
    use core::sync::atomic::{AtomicU32, Ordering};

    struct Pair {
        left: u32,
        right: [u8; 2],
    }

    const LEFT: FieldPtr<Pair, u32> = {
        fn get(p: &Pair) -> &u32 {
            &p.left
        }
        fn get_mut(p: &mut Pair) -> &mut u32 {
            &mut p.left
        }
        FieldPtr::new(get, get_mut)
    };

    const RIGHT: ConstFieldPtr<Pair, [u8]> = {
        fn get(p: &Pair) -> &[u8] {
            &p.right
        }
        ConstFieldPtr::new(get)
    };

    static HITS: AtomicU32 = AtomicU32::new(404);

    const HITS_PTR: StaticPtr<AtomicU32> = {
        fn get() -> &'static AtomicU32 {
            &HITS
        }
        StaticPtr::new(get)
    };

    fn project<R: FieldReceiver<P>, P>(owner: R, ptr: P) -> R::Output {
        owner.project(ptr)
    }

    #[test]
    fn field_projection_is_same_storage() {
        let mut pair = Pair {
            left: 3,
            right: [1, 2],
        };

        *project(&mut pair, LEFT) += 1;
        assert_eq!(pair.left, 4);
        assert!(core::ptr::eq(project(&pair, LEFT), &pair.left));
    }

    #[test]
    fn mutability_follows_receiver() {
        let mut pair = Pair {
            left: 3,
            right: [1, 2],
        };

        let shared: &u32 = project(&pair, LEFT);
        assert_eq!(type_name_of_val(&shared), "&u32");

        let unique: &mut u32 = project(&mut pair, LEFT);
        assert_eq!(type_name_of_val(&unique), "&mut u32");

        let read_only: &[u8] = project(&mut pair, RIGHT);
        assert_eq!(type_name_of_val(&read_only), "&[u8]");
        assert_eq!(read_only, &[1, 2]);
    }

    #[test]
    fn into_const_keeps_storage() {
        let pair = Pair {
            left: 8,
            right: [0, 0],
        };
        let read_only = LEFT.into_const();
        assert!(core::ptr::eq(read_only.get(&pair), &pair.left));
    }

    #[test]
    fn static_pointer() {
        assert_eq!(HITS_PTR.get().load(Ordering::Relaxed), 404);
        assert!(core::ptr::eq(HITS_PTR.get(), &HITS));
    }
}
