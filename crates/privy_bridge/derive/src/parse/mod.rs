//! Parser of the `friends!` input.
//!
//! Format:
//!
//! ```text
//! #[attrs]*
//! vis mod name for Owner {
//!     field m_i: i32;
//!     field const m_c: i32;
//!     fn m_f(&self, i32) -> i32;
//!     fn m_g(&mut self, i32, i32) -> i32 as m_f;
//!     static S_I: AtomicI32;
//!     const S_C: i32;
//!     static fn s_f(i32) -> i32;
//! }
//! ```

use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Attribute, Ident, Token, Type, Visibility, braced};

mod entry;

pub(crate) use entry::{Entry, EntryKind, Receiver, Signature};

// -----------------------------------------------------------------------------
// FriendList

/// The whole macro input: one or more blocks.
pub(crate) struct FriendList {
    pub blocks: Vec<FriendBlock>,
}

impl Parse for FriendList {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut blocks = Vec::new();
        while !input.is_empty() {
            blocks.push(input.parse()?);
        }
        if blocks.is_empty() {
            return Err(input.error("expected `mod name for Type { ... }`"));
        }
        Ok(FriendList { blocks })
    }
}

// -----------------------------------------------------------------------------
// FriendBlock

/// `#[attrs] vis mod name for Owner { entries }`
pub(crate) struct FriendBlock {
    /// Applied to the generated module.
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub module: Ident,
    pub owner: Type,
    /// Last path segment of `owner`, used to name tags.
    pub owner_ident: Ident,
    pub entries: Vec<Entry>,
}

impl FriendBlock {
    /// The owner as recorded in `ExposureInfo`, without whitespace.
    pub fn owner_str(&self) -> String {
        use quote::ToTokens;

        self.owner
            .to_token_stream()
            .to_string()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }
}

impl Parse for FriendBlock {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis: Visibility = input.parse()?;
        input.parse::<Token![mod]>()?;
        let module: Ident = input.parse()?;
        input.parse::<Token![for]>()?;
        let owner: Type = input.parse()?;
        let owner_ident = owner_ident(&owner)?;

        let content;
        braced!(content in input);
        let mut entries = Vec::new();
        while !content.is_empty() {
            entries.push(content.parse::<Entry>()?);
        }
        if entries.is_empty() {
            return Err(syn::Error::new(
                module.span(),
                format!("friend list `{module}` exposes nothing"),
            ));
        }

        Ok(FriendBlock {
            attrs,
            vis,
            module,
            owner,
            owner_ident,
            entries,
        })
    }
}

fn owner_ident(owner: &Type) -> syn::Result<Ident> {
    match owner {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.clone())
            .ok_or_else(|| syn::Error::new(owner.span(), "expected a type path")),
        Type::Group(group) => owner_ident(&group.elem),
        _ => Err(syn::Error::new(
            owner.span(),
            "the owner must be a named type such as `A`, `ns::B` or `TemplateA<i32>`",
        )),
    }
}
