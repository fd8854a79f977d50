use proc_macro2::TokenStream;
use quote::quote;
use syn::{Path, Type};

use super::{BlockCtx, Exposure, Pointer};
use crate::parse::Entry;

/// `static NAME: T [= path]`
///
/// Without a path the static is looked up in the invoking module.
pub(super) fn pointer(ctx: &BlockCtx, entry: &Entry, ty: &Type, path: Option<&Path>) -> Pointer {
    let place = match path {
        Some(path) => quote! { #path },
        None => {
            let member = &entry.member;
            quote! { super::#member }
        }
    };

    static_ptr(ctx, ty, quote! { &#place })
}

/// `const NAME: T`, an associated constant copied into a local static.
pub(super) fn const_pointer(ctx: &BlockCtx, entry: &Entry, ty: &Type) -> Pointer {
    let owner = &ctx.block.owner;
    let name = &entry.member;

    static_ptr(
        ctx,
        ty,
        quote! {
            static VALUE: #ty = <#owner>::#name;
            &VALUE
        },
    )
}

fn static_ptr(ctx: &BlockCtx, ty: &Type, body: TokenStream) -> Pointer {
    let static_ptr_ = crate::path::static_ptr_(ctx.privy_bridge_path);
    Pointer {
        ty: quote! { #static_ptr_<#ty> },
        value: quote! {{
            fn get() -> &'static #ty {
                #body
            }
            #static_ptr_::new(get)
        }},
        kind: "StaticField",
    }
}

/// `name() -> &'static T`
pub(super) fn accessor(ctx: &BlockCtx, exposure: &Exposure, ty: &Type) -> TokenStream {
    let name = exposure.entry.accessor();
    let trace = ctx.trace(&exposure.tag);
    let retrieve = ctx.retrieve(&exposure.tag);

    quote! {
        #[inline(always)]
        pub fn #name() -> &'static #ty {
            #trace
            #retrieve.get()
        }
    }
}
