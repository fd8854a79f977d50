//! Code generation for parsed friend lists.
//!
//! Each block becomes one module:
//!
//! ```text
//! #[attrs] vis mod name {
//!     use super::*;
//!     pub(super) mod tag { /* one unit struct per entry */ }
//!     pub mod overload { /* one marker per shared accessor name */ }
//!     impl Bridge for tag::Owner_member_N { .. }
//!     pub fn accessor(..) { .. }
//!     pub const EXPOSURES: &[ExposureInfo] = &[..];
//! }
//! ```
//!
//! Tags are visible in the invoking module and nowhere else, so a private
//! owner never appears in a more visible interface. Overload markers show up
//! in accessor signatures and are public like the accessors.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote, quote_spanned};
use syn::{Ident, LitStr};

use crate::parse::{Entry, EntryKind, FriendBlock, FriendList};

mod field;
mod function;
mod statics;

// -----------------------------------------------------------------------------
// Context

/// What every emitter needs to know about the current block.
pub(crate) struct BlockCtx<'a> {
    pub privy_bridge_path: &'a syn::Path,
    pub block: &'a FriendBlock,
}

/// One entry with its tag.
pub(crate) struct Exposure<'a> {
    pub entry: &'a Entry,
    pub tag: Ident,
}

/// The pieces of a `Bridge` impl that depend on the entry kind.
pub(crate) struct Pointer {
    pub ty: TokenStream,
    pub value: TokenStream,
    /// An `ExposureKind` variant.
    pub kind: &'static str,
}

impl BlockCtx<'_> {
    /// `<tag::X as Bridge>::INFO`
    pub fn info(&self, tag: &Ident) -> TokenStream {
        let bridge_ = crate::path::bridge_(self.privy_bridge_path);
        quote! { <tag::#tag as #bridge_>::INFO }
    }

    /// The first statement of every accessor.
    pub fn trace(&self, tag: &Ident) -> TokenStream {
        let trace_ = crate::path::trace_(self.privy_bridge_path);
        let info = self.info(tag);
        quote! { #trace_(&#info); }
    }

    /// `retrieve(tag::X)`
    pub fn retrieve(&self, tag: &Ident) -> TokenStream {
        let retrieve_ = crate::path::retrieve_(self.privy_bridge_path);
        quote! { #retrieve_(tag::#tag) }
    }
}

// -----------------------------------------------------------------------------
// Entry point

pub(crate) fn friend_list(
    list: &FriendList,
    privy_bridge_path: &syn::Path,
) -> syn::Result<TokenStream> {
    let mut output = TokenStream::new();
    for block in &list.blocks {
        let ctx = BlockCtx {
            privy_bridge_path,
            block,
        };
        output.extend(friend_block(&ctx)?);
    }
    Ok(output)
}

fn friend_block(ctx: &BlockCtx) -> syn::Result<TokenStream> {
    let block = ctx.block;
    let groups = group_by_accessor(&block.entries)?;

    let exposures: Vec<Exposure> = block
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| Exposure {
            entry,
            tag: format_ident!(
                "{}_{}_{}",
                block.owner_ident,
                entry.member_str(),
                index,
                span = entry.span
            ),
        })
        .collect();

    let tags = exposures.iter().map(|exposure| &exposure.tag);

    let markers = groups
        .iter()
        .filter(|group| group.len() > 1)
        .map(|group| block.entries[group[0]].accessor());

    let bridge_impls = exposures.iter().map(|exposure| bridge_impl(ctx, exposure));

    let mut accessors = Vec::with_capacity(groups.len());
    for group in &groups {
        let members: Vec<&Exposure> = group.iter().map(|&index| &exposures[index]).collect();
        accessors.push(accessor(ctx, &members));
    }

    let audit = exposures.iter().map(|exposure| audit_submit(ctx, exposure));

    let exposure_info_ = crate::path::exposure_info_(ctx.privy_bridge_path);
    let infos = exposures.iter().map(|exposure| ctx.info(&exposure.tag));

    let attrs = &block.attrs;
    let vis = &block.vis;
    let module = &block.module;
    let owner_str = block.owner_str();
    let module_doc = format!("Friend list of `{owner_str}`.");

    Ok(quote! {
        #[doc = #module_doc]
        #(#attrs)*
        #[allow(
            non_camel_case_types,
            non_snake_case,
            private_interfaces,
            private_bounds,
            dead_code,
            clippy::needless_lifetimes
        )]
        #vis mod #module {
            use super::*;

            /// One tag per exposed member.
            pub(super) mod tag {
                #(
                    #[derive(Clone, Copy, Debug, Default)]
                    pub(in super::super) struct #tags;
                )*
            }

            /// One marker per accessor name shared by several members.
            pub mod overload {
                #(
                    pub enum #markers {}
                )*
            }

            #(#bridge_impls)*

            #(#accessors)*

            #(#audit)*

            /// Every member this module exposes, in declaration order.
            pub const EXPOSURES: &[#exposure_info_] = &[#(#infos),*];
        }
    })
}

// -----------------------------------------------------------------------------
// Grouping

/// Indices of entries sharing one accessor name, in declaration order.
fn group_by_accessor(entries: &[Entry]) -> syn::Result<Vec<Vec<usize>>> {
    let mut groups: Vec<(Ident, Vec<usize>)> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let accessor = entry.accessor();
        if accessor == "EXPOSURES" {
            return Err(syn::Error::new(
                accessor.span(),
                "`EXPOSURES` is reserved for the list of exposures",
            ));
        }

        let Some(position) = groups.iter().position(|(name, _)| *name == accessor) else {
            groups.push((accessor, vec![index]));
            continue;
        };

        let group = &mut groups[position].1;
        let first = &entries[group[0]];
        let compatible = matches!(
            (&first.kind, &entry.kind),
            (EntryKind::Method { .. }, EntryKind::Method { .. })
                | (EntryKind::StaticFn { .. }, EntryKind::StaticFn { .. })
        );
        if !compatible {
            let message = if first.is_function() && entry.is_function() {
                format!("accessor `{accessor}` mixes methods and associated functions")
            } else {
                format!(
                    "accessor `{accessor}` is already defined, \
                     only functions of one kind can share a name; use `as` to rename"
                )
            };
            return Err(syn::Error::new(entry.span, message));
        }
        group.push(index);
    }

    Ok(groups.into_iter().map(|(_, group)| group).collect())
}

// -----------------------------------------------------------------------------
// Bridge impl

fn bridge_impl(ctx: &BlockCtx, exposure: &Exposure) -> TokenStream {
    let entry = exposure.entry;
    let pointer = match &entry.kind {
        EntryKind::Field { ty, read_only } => field::pointer(ctx, entry, ty, *read_only),
        EntryKind::Method { receiver, sig } => function::pointer(ctx, entry, Some(*receiver), sig),
        EntryKind::StaticFn { sig } => function::pointer(ctx, entry, None, sig),
        EntryKind::Static { ty, path } => statics::pointer(ctx, entry, ty, path.as_ref()),
        EntryKind::Const { ty } => statics::const_pointer(ctx, entry, ty),
    };

    let bridge_ = crate::path::bridge_(ctx.privy_bridge_path);
    let exposure_info_ = crate::path::exposure_info_(ctx.privy_bridge_path);
    let exposure_kind_ = crate::path::exposure_kind_(ctx.privy_bridge_path);

    let tag = &exposure.tag;
    let owner = &ctx.block.owner;
    let Pointer { ty, value, kind } = pointer;
    let kind = Ident::new(kind, Span::call_site());

    let owner_str = LitStr::new(&ctx.block.owner_str(), Span::call_site());
    let member_str = LitStr::new(&entry.member_str(), Span::call_site());
    let accessor_str = LitStr::new(&entry.accessor().to_string(), Span::call_site());

    quote_spanned! { entry.span =>
        impl #bridge_ for tag::#tag {
            type Owner = #owner;
            type Ptr = #ty;
            const PTR: Self::Ptr = #value;
            const INFO: #exposure_info_ = #exposure_info_ {
                owner: #owner_str,
                member: #member_str,
                accessor: #accessor_str,
                kind: #exposure_kind_::#kind,
                module_path: ::core::module_path!(),
            };
        }
    }
}

// -----------------------------------------------------------------------------
// Accessors

fn accessor(ctx: &BlockCtx, members: &[&Exposure]) -> TokenStream {
    let first = members[0].entry;
    let attrs = members.iter().flat_map(|exposure| &exposure.entry.attrs);
    let has_doc = members
        .iter()
        .flat_map(|exposure| &exposure.entry.attrs)
        .any(|attr| attr.path().is_ident("doc"));
    let default_doc = (!has_doc).then(|| default_doc(ctx, members));

    let body = if let [single] = members {
        match &first.kind {
            EntryKind::Field { ty, read_only } => field::accessor(ctx, single, ty, *read_only),
            EntryKind::Method { receiver, sig } => {
                function::accessor(ctx, single, Some(*receiver), sig)
            }
            EntryKind::StaticFn { sig } => function::accessor(ctx, single, None, sig),
            EntryKind::Static { ty, .. } | EntryKind::Const { ty } => {
                statics::accessor(ctx, single, ty)
            }
        }
    } else {
        function::overload_set(ctx, members)
    };

    quote! {
        #default_doc
        #(#attrs)*
        #body
    }
}

fn default_doc(ctx: &BlockCtx, members: &[&Exposure]) -> TokenStream {
    let owner = ctx.block.owner_str();
    let names: Vec<String> = members
        .iter()
        .map(|exposure| format!("`{owner}::{}`", exposure.entry.member_str()))
        .collect();
    let doc = format!("Accesses {}.", names.join(", "));
    quote! { #[doc = #doc] }
}

// -----------------------------------------------------------------------------
// Audit

#[cfg(feature = "audit")]
fn audit_submit(ctx: &BlockCtx, exposure: &Exposure) -> TokenStream {
    let audit_ = crate::path::audit_(ctx.privy_bridge_path);
    let info = ctx.info(&exposure.tag);
    quote! {
        #audit_::inventory::submit! {
            #audit_::Record(&#info)
        }
    }
}

#[cfg(not(feature = "audit"))]
fn audit_submit(_: &BlockCtx, _: &Exposure) -> TokenStream {
    TokenStream::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(text: &str) -> syn::Result<String> {
        let list: FriendList = syn::parse_str(text)?;
        let path: syn::Path = syn::parse_quote!(::privy_bridge);
        friend_list(&list, &path).map(|tokens| tokens.to_string().replace(' ', ""))
    }

    fn error(text: &str) -> String {
        match expand(text) {
            Ok(_) => panic!("`{text}` should not expand"),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn tags_are_numbered_per_entry() {
        let code = expand(
            "pub mod friend for ns::A {
                field m_i: i32;
                fn m_f(&self, i32) -> i32;
                fn m_f_pair(&self, i32, i32) -> i32 as m_f;
            }",
        )
        .unwrap();
        assert!(code.contains("structA_m_i_0;"));
        assert!(code.contains("structA_m_f_1;"));
        assert!(code.contains("structA_m_f_pair_2;"));
        assert!(code.contains("pubenumm_f{}"));
        assert!(code.contains("owner:\"ns::A\""));
        assert!(code.contains("accessor:\"m_f\""));
        assert!(code.contains("pubconstEXPOSURES"));
    }

    #[test]
    fn field_projections_name_their_lifetime() {
        let code = expand("mod f for Named<'static> { field name: &'static str; }").unwrap();
        assert!(code.contains("fnget<'__o>(owner:&'__oNamed<'static>)->&'__o&'staticstr"));
        assert!(code.contains("fnget_mut<'__o>(owner:&'__omutNamed<'static>)->&'__omut&'staticstr"));
    }

    #[test]
    fn single_accessor_has_no_marker() {
        let code = expand("mod friend for A { field m_i: i32; }").unwrap();
        assert!(code.contains("modoverload{}"));
        assert!(code.contains("FieldReceiver"));
    }

    #[test]
    fn default_docs_name_the_member() {
        let code = expand("mod friend for A { field m_i: i32; }").unwrap();
        assert!(code.contains("\"Accesses`A::m_i`.\""));

        let code = expand("mod friend for A { /// Mine. \n field m_i: i32; }").unwrap();
        assert!(!code.contains("Accesses"));
    }

    #[test]
    fn accessor_name_conflicts() {
        assert!(
            error("mod f for A { field m_i: i32; field m_j: i32 as m_i; }").contains("already defined")
        );
        assert!(
            error("mod f for A { fn m_f(&self); static fn s_f() as m_f; }").contains("mixes methods")
        );
        assert!(error("mod f for A { field m_i: i32 as EXPOSURES; }").contains("reserved"));
    }
}
