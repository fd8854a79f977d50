use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, Member, Path, Token, Type, parenthesized};

mod kw {
    syn::custom_keyword!(field);
}

// -----------------------------------------------------------------------------
// Entry

/// One line of a friend list.
pub(crate) struct Entry {
    /// Outer attributes, forwarded to the accessor.
    pub attrs: Vec<Attribute>,
    pub member: Member,
    /// The `as name` override.
    pub alias: Option<Ident>,
    pub kind: EntryKind,
    pub span: Span,
}

pub(crate) enum EntryKind {
    /// `field [const|mut] name: T`
    Field { ty: Type, read_only: bool },
    /// `fn name(&self, A, B) -> R`
    Method { receiver: Receiver, sig: Signature },
    /// `static NAME: T [= path]`
    Static { ty: Type, path: Option<Path> },
    /// `const NAME: T`, an associated constant.
    Const { ty: Type },
    /// `static fn name(A, B) -> R`
    StaticFn { sig: Signature },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Receiver {
    Ref,
    RefMut,
    Value,
}

/// Parameter types and return type of an exposed function.
pub(crate) struct Signature {
    pub inputs: Vec<Param>,
    pub output: Option<Type>,
}

pub(crate) struct Param {
    pub name: Option<Ident>,
    pub ty: Type,
}

impl Entry {
    /// The name of the generated accessor.
    pub fn accessor(&self) -> Ident {
        match (&self.alias, &self.member) {
            (Some(alias), _) => alias.clone(),
            (None, Member::Named(ident)) => ident.clone(),
            // Rejected while parsing.
            (None, Member::Unnamed(index)) => Ident::new(&format!("field_{}", index.index), self.span),
        }
    }

    /// The member as written, e.g. `m_i` or `0`.
    pub fn member_str(&self) -> String {
        match &self.member {
            Member::Named(ident) => ident.to_string(),
            Member::Unnamed(index) => index.index.to_string(),
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, EntryKind::Method { .. } | EntryKind::StaticFn { .. })
    }
}

impl Parse for Entry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        for attr in &attrs {
            if attr.path().is_ident("cfg") || attr.path().is_ident("cfg_attr") {
                return Err(syn::Error::new(
                    attr.span(),
                    "conditional entries are not supported, put `#[cfg]` on the friend module",
                ));
            }
        }

        let span = input.span();
        let lookahead = input.lookahead1();
        let (member, kind) = if lookahead.peek(kw::field) {
            input.parse::<kw::field>()?;
            let read_only = if input.peek(Token![const]) {
                input.parse::<Token![const]>()?;
                true
            } else {
                if input.peek(Token![mut]) {
                    input.parse::<Token![mut]>()?;
                }
                false
            };
            let member: Member = input.parse()?;
            input.parse::<Token![:]>()?;
            let ty: Type = input.parse()?;
            (member, EntryKind::Field { ty, read_only })
        } else if lookahead.peek(Token![fn]) {
            input.parse::<Token![fn]>()?;
            let name: Ident = input.parse()?;
            let (receiver, sig) = parse_signature(input, true)?;
            let Some(receiver) = receiver else {
                return Err(syn::Error::new(
                    name.span(),
                    "a method needs `&self`, `&mut self` or `self` as its first parameter, \
                     use `static fn` for associated functions",
                ));
            };
            (Member::Named(name), EntryKind::Method { receiver, sig })
        } else if lookahead.peek(Token![static]) {
            input.parse::<Token![static]>()?;
            if input.peek(Token![fn]) {
                input.parse::<Token![fn]>()?;
                let name: Ident = input.parse()?;
                let (_, sig) = parse_signature(input, false)?;
                (Member::Named(name), EntryKind::StaticFn { sig })
            } else {
                let name: Ident = input.parse()?;
                input.parse::<Token![:]>()?;
                let ty: Type = input.parse()?;
                let path = if input.peek(Token![=]) {
                    input.parse::<Token![=]>()?;
                    Some(Path::parse_mod_style(input)?)
                } else {
                    None
                };
                (Member::Named(name), EntryKind::Static { ty, path })
            }
        } else if lookahead.peek(Token![const]) {
            input.parse::<Token![const]>()?;
            let name: Ident = input.parse()?;
            input.parse::<Token![:]>()?;
            let ty: Type = input.parse()?;
            (Member::Named(name), EntryKind::Const { ty })
        } else {
            return Err(lookahead.error());
        };

        let alias = if input.peek(Token![as]) {
            input.parse::<Token![as]>()?;
            Some(input.parse::<Ident>()?)
        } else {
            None
        };
        input.parse::<Token![;]>()?;

        if alias.is_none()
            && let Member::Unnamed(index) = &member
        {
            return Err(syn::Error::new(
                index.span,
                "tuple fields need an accessor name, e.g. `field 0: i32 as first;`",
            ));
        }

        Ok(Entry {
            attrs,
            member,
            alias,
            kind,
            span,
        })
    }
}

// -----------------------------------------------------------------------------
// Signature

/// Format: `(receiver?, T, name: U, ...) -> R`
fn parse_signature(
    input: ParseStream,
    allow_receiver: bool,
) -> syn::Result<(Option<Receiver>, Signature)> {
    let content;
    parenthesized!(content in input);

    let receiver = parse_receiver(&content)?;
    match (receiver, allow_receiver) {
        (Some(_), false) => {
            return Err(content.error("associated functions take no receiver, use `fn` for methods"));
        }
        (Some(_), true) if !content.is_empty() => {
            content.parse::<Token![,]>()?;
        }
        _ => {}
    }

    let params = Punctuated::<Param, Token![,]>::parse_terminated(&content)?;
    check_param_names(&params)?;
    let output = if input.peek(Token![->]) {
        input.parse::<Token![->]>()?;
        Some(input.parse::<Type>()?)
    } else {
        None
    };

    Ok((
        receiver,
        Signature {
            inputs: params.into_iter().collect(),
            output,
        },
    ))
}

/// Unnamed parameters are bound as `arg{index}` and the receiver as `this`,
/// so named ones must not take those names or repeat each other.
fn check_param_names(params: &Punctuated<Param, Token![,]>) -> syn::Result<()> {
    let names: Vec<&Ident> = params.iter().filter_map(|param| param.name.as_ref()).collect();
    for (index, name) in names.iter().enumerate() {
        let text = name.to_string();
        let positional = text
            .strip_prefix("arg")
            .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()));
        if text == "this" || positional {
            return Err(syn::Error::new(
                name.span(),
                format!("`{text}` is reserved for generated bindings, rename the parameter"),
            ));
        }
        if names[..index].iter().any(|prev| **prev == **name) {
            return Err(syn::Error::new(
                name.span(),
                format!("parameter `{text}` is declared twice"),
            ));
        }
    }
    Ok(())
}

/// Format: `&self`, `&mut self`, `self` or `mut self`.
fn parse_receiver(input: ParseStream) -> syn::Result<Option<Receiver>> {
    if input.peek(Token![&]) {
        if input.peek2(syn::Lifetime) {
            let fork = input.fork();
            fork.parse::<Token![&]>()?;
            fork.parse::<syn::Lifetime>()?;
            if fork.peek(Token![mut]) {
                fork.parse::<Token![mut]>()?;
            }
            if fork.peek(Token![self]) {
                return Err(input.error("receiver lifetimes are implicit, write `&self`"));
            }
            return Ok(None);
        }
        let is_self = input.peek2(Token![self])
            || (input.peek2(Token![mut]) && input.peek3(Token![self]));
        if !is_self {
            return Ok(None);
        }
        input.parse::<Token![&]>()?;
        let receiver = if input.peek(Token![mut]) {
            input.parse::<Token![mut]>()?;
            Receiver::RefMut
        } else {
            Receiver::Ref
        };
        input.parse::<Token![self]>()?;
        return Ok(Some(receiver));
    }

    if input.peek(Token![self]) {
        input.parse::<Token![self]>()?;
        return Ok(Some(Receiver::Value));
    }

    if input.peek(Token![mut]) && input.peek2(Token![self]) {
        input.parse::<Token![mut]>()?;
        input.parse::<Token![self]>()?;
        return Ok(Some(Receiver::Value));
    }

    Ok(None)
}

impl Parse for Param {
    /// Format: `T` or `name: T`
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.peek(Ident) && input.peek2(Token![:]) && !input.peek2(Token![::]) {
            let name: Ident = input.parse()?;
            input.parse::<Token![:]>()?;
            Some(name)
        } else {
            None
        };
        let ty: Type = input.parse()?;
        Ok(Param { name, ty })
    }
}
