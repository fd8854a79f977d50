//! See [`friends!`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::parse_macro_input;

// -----------------------------------------------------------------------------
// Modules

mod emit;
mod lifetimes;
mod parse;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Friend Lists
///
/// Declares which non-public members of a type may be reached from outside
/// its module, and generates a module of plain accessor functions for them.
///
/// The macro must be invoked where privacy already allows naming the members:
/// the owner's module or one of its descendants (typically `mod tests`).
///
/// ```rust, ignore
/// mod shapes {
///     pub struct A {
///         m_i: i32,
///     }
///
///     impl A {
///         fn m_f(&self, x: i32) -> i32 {
///             self.m_i + x
///         }
///     }
///
///     privy_bridge::friends! {
///         pub mod friend for A {
///             field m_i: i32;
///             fn m_f(&self, i32) -> i32;
///         }
///     }
/// }
///
/// let mut a = /* ... */;
/// *shapes::friend::m_i(&mut a) = 3;
/// assert_eq!(shapes::friend::m_f(&a, 1), 4);
/// ```
///
/// One invocation may contain several `vis mod name for Owner { .. }` blocks.
/// Outer attributes on a block (e.g. `#[cfg(test)]`) are put on the generated
/// module.
///
/// ## Entries
///
/// | entry                             | accessor                                  |
/// |-----------------------------------|-------------------------------------------|
/// | `field name: T;`                  | `name(&o) -> &T`, `name(&mut o) -> &mut T` |
/// | `field const name: T;`            | `name(&o) -> &T`, `name(&mut o) -> &T`    |
/// | `fn name(&self, A, B) -> R;`      | `name(&o, a, b) -> R`                     |
/// | `fn name(&mut self, A) -> R;`     | `name(&mut o, a) -> R`                    |
/// | `fn name(self) -> R;`             | `name(o) -> R`                            |
/// | `static NAME: T;`                 | `NAME() -> &'static T`                    |
/// | `static NAME: T = path::NAME;`    | `NAME() -> &'static T`                    |
/// | `const NAME: T;`                  | `NAME() -> &'static T`                    |
/// | `static fn name(A, B) -> R;`      | `name(a, b) -> R`                         |
///
/// Parameters may be named (`x: i32`) or not (`i32`); `this` and `arg0`,
/// `arg1`, .. are reserved for the generated bindings. Tuple fields need an
/// accessor name: `field 0: u8 as first;`.
///
/// A `static` without `= path` is the static of that name in the invoking
/// module. A `const` is an associated constant of the owner, copied into a
/// static, so its type must be `Sync`.
///
/// Entry attributes, such as doc comments, are put on the accessor.
/// `#[cfg]` is not accepted on entries; put it on the block instead.
///
/// ## Overloads
///
/// Rust has no overloading, so distinct members are exposed under one
/// accessor name with `as`. Such an accessor takes its arguments as a tuple
/// and dispatches on the tuple type:
///
/// ```rust, ignore
/// privy_bridge::friends! {
///     pub mod friend for A {
///         fn m_f(&self, i32) -> i32;
///         fn m_f_pair(&self, i32, i32) -> i32 as m_f;
///         static fn s_f_char(char, u8) -> char as s_f;
///         static fn s_f_str(&str, &str) -> String as s_f;
///     }
/// }
///
/// assert_eq!(friend::m_f(&a, (1,)), 4);
/// assert_eq!(friend::m_f(&a, (1, 2)), 7);
/// assert_eq!(friend::s_f(('A', 25)), 'Z');
/// assert_eq!(friend::s_f(("Hello", "World")), "HelloWorld");
/// ```
///
/// All members of one set are methods, or all are associated functions. Two
/// members with the same receiver and argument types conflict (E0119).
/// A `&self` member also accepts `&mut Owner`, unless a `&mut self` member
/// of the set takes the same arguments.
///
/// ## Generated Items
///
/// - `tag::{Owner}_{member}_{n}`: one zero-sized tag per entry implementing
///   `Bridge`, visible in the invoking module only;
/// - `overload::{name}`: one marker per shared accessor name;
/// - one accessor function per name;
/// - `EXPOSURES`: the `ExposureInfo` of every entry, in declaration order.
///
/// With the `audit` feature every entry is also registered in
/// `privy_bridge::audit`.
///
/// ## Limitations
///
/// - The owner must be a concrete named type: `A`, `ns::B`, `TemplateA<i32>`.
/// - Types and paths are resolved through `use super::*`, so they cannot start
///   with `self::` or `super::`; use `crate::` paths instead.
/// - Signatures name the owner type itself; `Self` would refer to the tag.
/// - Generic methods and `static mut` items cannot be exposed.
#[proc_macro]
pub fn friends(input: TokenStream) -> TokenStream {
    let list = parse_macro_input!(input as parse::FriendList);

    let privy_bridge_path = path::privy_bridge();

    match emit::friend_list(&list, &privy_bridge_path) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
