//! Make every lifetime of an exposed signature explicit.
//!
//! A wrapper does not take `self`, and an overload impl cannot use elided
//! lifetimes in its associated types, so the signature is rewritten before
//! emission:
//!
//! - an elided input lifetime (`&T` or `'_`) gets a fresh name `'__a{n}`;
//! - an elided output lifetime binds to the receiver (`'__r`), or to the only
//!   input lifetime if there is exactly one, as Rust's elision rules do;
//! - otherwise an elided output lifetime is left alone and rustc reports it.
//!
//! Function-pointer types and `Fn(..)` sugar open their own binder and are
//! not touched.

use proc_macro2::Span;
use syn::visit::Visit;
use syn::visit_mut::{self, VisitMut};
use syn::{Lifetime, ParenthesizedGenericArguments, Type, TypeBareFn, TypeReference};

use crate::parse::{Receiver, Signature};

const RECEIVER_LIFETIME: &str = "'__r";

/// A signature with only named lifetimes.
pub(crate) struct Normalized {
    /// `'__r` when the receiver is a reference.
    pub receiver: Option<Lifetime>,
    /// Every lifetime to declare, receiver first.
    pub lifetimes: Vec<Lifetime>,
    pub inputs: Vec<Type>,
    pub output: Option<Type>,
}

pub(crate) fn normalize(receiver: Option<Receiver>, sig: &Signature) -> Normalized {
    let receiver = match receiver {
        Some(Receiver::Ref | Receiver::RefMut) => {
            Some(Lifetime::new(RECEIVER_LIFETIME, Span::call_site()))
        }
        _ => None,
    };

    let mut namer = InputNamer::default();
    let inputs: Vec<Type> = sig
        .inputs
        .iter()
        .map(|param| {
            let mut ty = param.ty.clone();
            namer.visit_type_mut(&mut ty);
            ty
        })
        .collect();

    let mut inputs_lifetimes: Vec<Lifetime> = Vec::new();
    for ty in &inputs {
        collect_named(ty, &mut inputs_lifetimes);
    }

    let target = receiver.clone().or_else(|| match inputs_lifetimes.as_slice() {
        [only] => Some(only.clone()),
        _ => None,
    });

    let output = sig.output.clone().map(|mut ty| {
        if let Some(target) = &target {
            OutputBinder { target }.visit_type_mut(&mut ty);
        }
        ty
    });

    let mut lifetimes: Vec<Lifetime> = receiver.iter().cloned().collect();
    for lifetime in inputs_lifetimes {
        push_unique(&mut lifetimes, lifetime);
    }
    if let Some(output) = &output {
        let mut output_lifetimes = Vec::new();
        collect_named(output, &mut output_lifetimes);
        for lifetime in output_lifetimes {
            push_unique(&mut lifetimes, lifetime);
        }
    }

    Normalized {
        receiver,
        lifetimes,
        inputs,
        output,
    }
}

fn push_unique(list: &mut Vec<Lifetime>, lifetime: Lifetime) {
    if !list.iter().any(|l| l.ident == lifetime.ident) {
        list.push(lifetime);
    }
}

fn is_anonymous(lifetime: &Lifetime) -> bool {
    lifetime.ident == "_"
}

// -----------------------------------------------------------------------------
// Visitors

#[derive(Default)]
struct InputNamer {
    next: usize,
}

impl InputNamer {
    fn fresh(&mut self) -> Lifetime {
        let lifetime = Lifetime::new(&format!("'__a{}", self.next), Span::call_site());
        self.next += 1;
        lifetime
    }
}

impl VisitMut for InputNamer {
    fn visit_type_reference_mut(&mut self, node: &mut TypeReference) {
        if node.lifetime.is_none() {
            node.lifetime = Some(self.fresh());
        }
        visit_mut::visit_type_reference_mut(self, node);
    }

    fn visit_lifetime_mut(&mut self, node: &mut Lifetime) {
        if is_anonymous(node) {
            *node = self.fresh();
        }
    }

    fn visit_type_bare_fn_mut(&mut self, _: &mut TypeBareFn) {}

    fn visit_parenthesized_generic_arguments_mut(&mut self, _: &mut ParenthesizedGenericArguments) {}
}

struct OutputBinder<'a> {
    target: &'a Lifetime,
}

impl VisitMut for OutputBinder<'_> {
    fn visit_type_reference_mut(&mut self, node: &mut TypeReference) {
        if node.lifetime.is_none() {
            node.lifetime = Some(self.target.clone());
        }
        visit_mut::visit_type_reference_mut(self, node);
    }

    fn visit_lifetime_mut(&mut self, node: &mut Lifetime) {
        if is_anonymous(node) {
            *node = self.target.clone();
        }
    }

    fn visit_type_bare_fn_mut(&mut self, _: &mut TypeBareFn) {}

    fn visit_parenthesized_generic_arguments_mut(&mut self, _: &mut ParenthesizedGenericArguments) {}
}

struct Collector<'a> {
    out: &'a mut Vec<Lifetime>,
}

impl<'ast> Visit<'ast> for Collector<'_> {
    fn visit_lifetime(&mut self, node: &'ast Lifetime) {
        if node.ident != "static" && !is_anonymous(node) {
            push_unique(self.out, node.clone());
        }
    }

    fn visit_type_bare_fn(&mut self, _: &'ast TypeBareFn) {}

    fn visit_parenthesized_generic_arguments(&mut self, _: &'ast ParenthesizedGenericArguments) {}
}

/// Named lifetimes of `ty`, in order of appearance.
fn collect_named(ty: &Type, out: &mut Vec<Lifetime>) {
    Collector { out }.visit_type(ty);
}
