//! Paths of the `privy_bridge` items used by generated code.
//!
//! Kept in one place so that moving an item in `privy_bridge` only needs a
//! change here.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `privy_bridge` crate.
///
/// 1. For crates that depend on `privy_bridge`, `::privy_bridge` is returned.
/// 2. For crates that depend on `privy`, `::privy::bridge` is returned.
/// 3. Otherwise `::privy_bridge` is returned, which may be incorrect.
///
/// This reads the caller's `Cargo.toml`, so it is called once per invocation
/// and the result is passed around.
pub(crate) fn privy_bridge() -> syn::Path {
    match privy_macro_utils::Manifest::load() {
        Some(manifest) => manifest.get_crate_path("privy_bridge"),
        None => syn::parse_quote!(::privy_bridge),
    }
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn bridge_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::Bridge
    }
}

#[inline(always)]
pub(crate) fn retrieve_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::retrieve
    }
}

#[inline(always)]
pub(crate) fn field_ptr_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::member::FieldPtr
    }
}

#[inline(always)]
pub(crate) fn const_field_ptr_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::member::ConstFieldPtr
    }
}

#[inline(always)]
pub(crate) fn static_ptr_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::member::StaticPtr
    }
}

#[inline(always)]
pub(crate) fn field_receiver_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::member::FieldReceiver
    }
}

#[inline(always)]
pub(crate) fn method_overload_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::overload::MethodOverload
    }
}

#[inline(always)]
pub(crate) fn static_overload_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::overload::StaticOverload
    }
}

#[inline(always)]
pub(crate) fn exposure_info_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::info::ExposureInfo
    }
}

#[inline(always)]
pub(crate) fn exposure_kind_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::info::ExposureKind
    }
}

#[inline(always)]
pub(crate) fn trace_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::__macro_exports::trace
    }
}

#[cfg(feature = "audit")]
#[inline(always)]
pub(crate) fn audit_(privy_bridge_path: &syn::Path) -> TokenStream {
    quote! {
        #privy_bridge_path::__macro_exports::audit
    }
}
