//! Methods and associated functions.
//!
//! The pointer is the member itself coerced to a function pointer, with every
//! lifetime named (see [`crate::lifetimes`]). A name used by one entry gets a
//! plain wrapper with the member's own parameter list; a name shared by
//! several entries becomes an overload set dispatched on the argument tuple.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::Ident;

use super::{BlockCtx, Exposure, Pointer};
use crate::lifetimes::{self, Normalized};
use crate::parse::{Entry, EntryKind, Receiver, Signature};

/// A normalized signature with the receiver type resolved.
struct Shape {
    normalized: Normalized,
    /// `&'__r Owner`, `&'__r mut Owner` or `Owner`.
    receiver: Option<TokenStream>,
    args: Vec<Ident>,
}

impl Shape {
    fn new(ctx: &BlockCtx, receiver: Option<Receiver>, sig: &Signature) -> Self {
        let normalized = lifetimes::normalize(receiver, sig);
        let owner = &ctx.block.owner;
        let receiver = receiver.map(|receiver| {
            let lifetime = &normalized.receiver;
            match receiver {
                Receiver::Ref => quote! { &#lifetime #owner },
                Receiver::RefMut => quote! { &#lifetime mut #owner },
                Receiver::Value => quote! { #owner },
            }
        });
        let args = sig
            .inputs
            .iter()
            .enumerate()
            .map(|(index, param)| match &param.name {
                Some(name) => name.clone(),
                None => format_ident!("arg{}", index),
            })
            .collect();

        Shape {
            normalized,
            receiver,
            args,
        }
    }

    /// `<'__r, '__a0>`, or nothing.
    fn generics(&self) -> Option<TokenStream> {
        let lifetimes = &self.normalized.lifetimes;
        (!lifetimes.is_empty()).then(|| quote! { <#(#lifetimes),*> })
    }

    /// `-> R`, or nothing for `()`.
    fn ret(&self) -> Option<TokenStream> {
        self.normalized.output.as_ref().map(|output| quote! { -> #output })
    }

    /// `R`, or `()`.
    fn output(&self) -> TokenStream {
        match &self.normalized.output {
            Some(output) => quote! { #output },
            None => quote! { () },
        }
    }

    /// `(A, B,)`
    fn args_tuple(&self) -> TokenStream {
        let inputs = &self.normalized.inputs;
        quote! { (#(#inputs,)*) }
    }

    /// `for<'__r> fn(&'__r Owner, A, B) -> R`
    fn fn_ptr(&self) -> TokenStream {
        let lifetimes = &self.normalized.lifetimes;
        let binder = (!lifetimes.is_empty()).then(|| quote! { for<#(#lifetimes),*> });
        let params = self
            .receiver
            .iter()
            .cloned()
            .chain(self.normalized.inputs.iter().map(|ty| quote! { #ty }));
        let ret = self.ret();
        quote! { #binder fn(#(#params),*) #ret }
    }

    /// `this: &'__r Owner, a: A, b: B`
    fn params(&self) -> TokenStream {
        let this = self.receiver.iter().map(|ty| quote! { this: #ty });
        let args = self
            .args
            .iter()
            .zip(&self.normalized.inputs)
            .map(|(arg, ty)| quote! { #arg: #ty });
        let params = this.chain(args);
        quote! { #(#params),* }
    }

    /// `this, a, b`
    fn call_args(&self) -> TokenStream {
        let this = self.receiver.iter().map(|_| quote! { this });
        let args = self.args.iter().map(|arg| quote! { #arg });
        let call_args = this.chain(args);
        quote! { #(#call_args),* }
    }
}

pub(super) fn pointer(
    ctx: &BlockCtx,
    entry: &Entry,
    receiver: Option<Receiver>,
    sig: &Signature,
) -> Pointer {
    let owner = &ctx.block.owner;
    let member = &entry.member;
    let shape = Shape::new(ctx, receiver, sig);

    Pointer {
        ty: shape.fn_ptr(),
        value: quote! { <#owner>::#member },
        kind: if receiver.is_some() { "Method" } else { "StaticFn" },
    }
}

/// `name(this, a, b) -> R` or `name(a, b) -> R`
pub(super) fn accessor(
    ctx: &BlockCtx,
    exposure: &Exposure,
    receiver: Option<Receiver>,
    sig: &Signature,
) -> TokenStream {
    let name = exposure.entry.accessor();
    let shape = Shape::new(ctx, receiver, sig);

    let generics = shape.generics();
    let params = shape.params();
    let ret = shape.ret();
    let call_args = shape.call_args();
    let trace = ctx.trace(&exposure.tag);
    let retrieve = ctx.retrieve(&exposure.tag);

    quote! {
        #[inline(always)]
        pub fn #name #generics (#params) #ret {
            #trace
            (#retrieve)(#call_args)
        }
    }
}

/// One `MethodOverload` or `StaticOverload` impl per member, plus the
/// generic wrapper.
pub(super) fn overload_set(ctx: &BlockCtx, members: &[&Exposure]) -> TokenStream {
    let first = members[0].entry;
    let name = first.accessor();
    let is_method = matches!(first.kind, EntryKind::Method { .. });

    let shapes: Vec<(&Exposure<'_>, Option<Receiver>, Shape)> = members
        .iter()
        .filter_map(|exposure| match &exposure.entry.kind {
            EntryKind::Method { receiver, sig } => {
                Some((*exposure, Some(*receiver), Shape::new(ctx, Some(*receiver), sig)))
            }
            EntryKind::StaticFn { sig } => Some((*exposure, None, Shape::new(ctx, None, sig))),
            _ => None,
        })
        .collect();

    // `&mut Owner` does not coerce through the generic wrapper, so a `&self`
    // member also answers `&mut` calls unless a `&mut self` member takes the
    // same arguments.
    let mut_args: Vec<String> = shapes
        .iter()
        .filter(|(_, receiver, _)| *receiver == Some(Receiver::RefMut))
        .map(|(_, _, shape)| shape.args_tuple().to_string())
        .collect();

    let impls = shapes.iter().map(|(exposure, receiver, shape)| {
        let generics = shape.generics();
        let args_tuple = shape.args_tuple();
        let args = &shape.args;
        let output = shape.output();
        let call_args = shape.call_args();
        let trace = ctx.trace(&exposure.tag);
        let retrieve = ctx.retrieve(&exposure.tag);

        if is_method {
            let method_overload_ = crate::path::method_overload_(ctx.privy_bridge_path);
            let this_ty = &shape.receiver;
            let forward = (*receiver == Some(Receiver::Ref)
                && !mut_args.contains(&args_tuple.to_string()))
            .then(|| {
                let owner = &ctx.block.owner;
                let lifetime = &shape.normalized.receiver;
                quote! {
                    impl #generics #method_overload_<&#lifetime mut #owner, #args_tuple> for overload::#name {
                        type Output = #output;

                        #[inline(always)]
                        fn call(this: &#lifetime mut #owner, (#(#args,)*): #args_tuple) -> Self::Output {
                            let this: #this_ty = this;
                            #trace
                            (#retrieve)(#call_args)
                        }
                    }
                }
            });
            quote! {
                impl #generics #method_overload_<#this_ty, #args_tuple> for overload::#name {
                    type Output = #output;

                    #[inline(always)]
                    fn call(this: #this_ty, (#(#args,)*): #args_tuple) -> Self::Output {
                        #trace
                        (#retrieve)(#call_args)
                    }
                }
                #forward
            }
        } else {
            let static_overload_ = crate::path::static_overload_(ctx.privy_bridge_path);
            quote! {
                impl #generics #static_overload_<#args_tuple> for overload::#name {
                    type Output = #output;

                    #[inline(always)]
                    fn call((#(#args,)*): #args_tuple) -> Self::Output {
                        #trace
                        (#retrieve)(#call_args)
                    }
                }
            }
        }
    });

    let wrapper = if is_method {
        let method_overload_ = crate::path::method_overload_(ctx.privy_bridge_path);
        quote! {
            #[inline(always)]
            pub fn #name<__PrivyR, __PrivyArgs>(
                owner: __PrivyR,
                args: __PrivyArgs,
            ) -> <overload::#name as #method_overload_<__PrivyR, __PrivyArgs>>::Output
            where
                overload::#name: #method_overload_<__PrivyR, __PrivyArgs>,
            {
                <overload::#name as #method_overload_<__PrivyR, __PrivyArgs>>::call(owner, args)
            }
        }
    } else {
        let static_overload_ = crate::path::static_overload_(ctx.privy_bridge_path);
        quote! {
            #[inline(always)]
            pub fn #name<__PrivyArgs>(
                args: __PrivyArgs,
            ) -> <overload::#name as #static_overload_<__PrivyArgs>>::Output
            where
                overload::#name: #static_overload_<__PrivyArgs>,
            {
                <overload::#name as #static_overload_<__PrivyArgs>>::call(args)
            }
        }
    };

    quote! {
        #(#impls)*
        #wrapper
    }
}
