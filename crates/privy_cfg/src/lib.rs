//! Compilation-control aliases shared by the `privy` crates.
//!
//! [`define_alias!`] turns a `#[cfg(...)]` predicate into a named macro that
//! either keeps or drops its input, so crates can write
//! `crate::cfg::debug! { ... }` instead of repeating the predicate.
//!
//! # Examples
//!
//! ```
//! mod cfg {
//!     privy_cfg::define_alias! {
//!         #[cfg(debug_assertions)] => debug,
//!         #[cfg(any())] => never,
//!     }
//! }
//!
//! let flag = cfg::never! { if { 1 } else { 2 } };
//! assert_eq!(flag, 2);
//! assert!(!cfg::never!());
//!
//! cfg::never! {
//!     compile_error!("dropped");
//! }
//! ```
#![no_std]

/// Keeps its input.
///
/// - `enabled!()` is `true`.
/// - `enabled! { if { a } else { b } }` expands to `a`.
/// - `enabled! { tokens }` expands to `tokens`.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Drops its input.
///
/// - `disabled!()` is `false`.
/// - `disabled! { if { a } else { b } }` expands to `b`.
/// - `disabled! { tokens }` expands to nothing.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Define one alias macro per `#[cfg(...)] => name` pair.
///
/// Each alias is a re-export of [`enabled!`] or [`disabled!`], chosen by the
/// predicate, so it must be invoked through the module that defined it
/// (`crate::cfg::name! { ... }`).
#[macro_export]
macro_rules! define_alias {
    () => {};
    (
        #[cfg($meta:meta)] => $p:ident
        $(, $($rest:tt)*)?
    ) => {
        #[cfg($meta)]
        #[doc(hidden)]
        #[allow(unused_imports)]
        pub use $crate::enabled as $p;

        #[cfg(not($meta))]
        #[doc(hidden)]
        #[allow(unused_imports)]
        pub use $crate::disabled as $p;

        $($crate::define_alias! { $($rest)* })?
    };
}

#[cfg(test)]
mod tests {
    mod cfg {
        crate::define_alias! {
            #[cfg(all())] => always,
            #[cfg(any())] => never,
        }
    }

    #[test]
    fn aliases_follow_predicate() {
        assert!(cfg::always!());
        assert!(!cfg::never!());

        let a = cfg::always! { if { 1 } else { 2 } };
        let b = cfg::never! { if { 1 } else { 2 } };
        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn statements_are_kept_or_dropped() {
        let mut hits = 0;
        cfg::always! { hits += 1; }
        cfg::never! { hits += 10; }
        assert_eq!(hits, 1);
    }
}
