use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::{BlockCtx, Exposure, Pointer};
use crate::parse::Entry;

/// `FieldPtr` or `ConstFieldPtr` built from local projection functions.
///
/// The projections name their lifetime, since the owner type may carry its own.
pub(super) fn pointer(ctx: &BlockCtx, entry: &Entry, ty: &Type, read_only: bool) -> Pointer {
    let owner = &ctx.block.owner;
    let member = &entry.member;
    let ptr_ty = ptr_type(ctx, ty, read_only);

    let value = if read_only {
        let const_field_ptr_ = crate::path::const_field_ptr_(ctx.privy_bridge_path);
        quote! {{
            fn get<'__o>(owner: &'__o #owner) -> &'__o #ty {
                &owner.#member
            }
            #const_field_ptr_::new(get)
        }}
    } else {
        let field_ptr_ = crate::path::field_ptr_(ctx.privy_bridge_path);
        quote! {{
            fn get<'__o>(owner: &'__o #owner) -> &'__o #ty {
                &owner.#member
            }
            fn get_mut<'__o>(owner: &'__o mut #owner) -> &'__o mut #ty {
                &mut owner.#member
            }
            #field_ptr_::new(get, get_mut)
        }}
    };

    Pointer {
        ty: ptr_ty,
        value,
        kind: if read_only { "ConstField" } else { "Field" },
    }
}

/// `name(&owner) -> &T`, `name(&mut owner) -> &mut T`
pub(super) fn accessor(
    ctx: &BlockCtx,
    exposure: &Exposure,
    ty: &Type,
    read_only: bool,
) -> TokenStream {
    let field_receiver_ = crate::path::field_receiver_(ctx.privy_bridge_path);
    let name = exposure.entry.accessor();
    let ptr_ty = ptr_type(ctx, ty, read_only);
    let trace = ctx.trace(&exposure.tag);
    let retrieve = ctx.retrieve(&exposure.tag);

    quote! {
        #[inline(always)]
        pub fn #name<__PrivyR>(owner: __PrivyR) -> <__PrivyR as #field_receiver_<#ptr_ty>>::Output
        where
            __PrivyR: #field_receiver_<#ptr_ty>,
        {
            #trace
            <__PrivyR as #field_receiver_<#ptr_ty>>::project(owner, #retrieve)
        }
    }
}

fn ptr_type(ctx: &BlockCtx, ty: &Type, read_only: bool) -> TokenStream {
    let owner = &ctx.block.owner;
    if read_only {
        let const_field_ptr_ = crate::path::const_field_ptr_(ctx.privy_bridge_path);
        quote! { #const_field_ptr_<#owner, #ty> }
    } else {
        let field_ptr_ = crate::path::field_ptr_(ctx.privy_bridge_path);
        quote! { #field_ptr_<#owner, #ty> }
    }
}
