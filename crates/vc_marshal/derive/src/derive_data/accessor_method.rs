use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{GenericParam, Ident, ImplItemFn, ReturnType, Signature, Type};

use super::AccessorAttributes;
use crate::naming;

/// What a method is registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AccessorKind {
    Getter { opaque: bool },
    Setter,
}

/// A method of the annotated block that is registered as an accessor.
#[derive(Debug)]
pub(crate) struct AccessorMethod {
    /// The registered identifier, e.g. `getAppName`.
    pub ident: String,
    /// Where the identifier comes from, for diagnostics.
    pub ident_span: Span,
    /// The Rust method, e.g. `get_app_name`.
    pub method: Ident,
    pub kind: AccessorKind,
}

/// The receiver and arity of a signature, regardless of its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Read,
    Write,
    Other,
}

impl Shape {
    fn of(sig: &Signature) -> Self {
        let generic = sig
            .generics
            .params
            .iter()
            .any(|param| !matches!(param, GenericParam::Lifetime(_)));
        if generic || sig.asyncness.is_some() || sig.unsafety.is_some() || sig.variadic.is_some() {
            return Self::Other;
        }

        let Some(receiver) = sig.receiver() else {
            return Self::Other;
        };
        if receiver.reference.is_none() || receiver.colon_token.is_some() {
            return Self::Other;
        }

        match (receiver.mutability.is_some(), sig.inputs.len()) {
            (false, 1) if returns_value(&sig.output) => Self::Read,
            (true, 2) => Self::Write,
            _ => Self::Other,
        }
    }
}

fn returns_value(output: &ReturnType) -> bool {
    match output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => !matches!(&**ty, Type::Tuple(tuple) if tuple.elems.is_empty()),
    }
}

impl AccessorMethod {
    /// Classifies `method`, stripping its `#[accessor]` attributes.
    ///
    /// `Ok(None)` for methods that are not accessors. A method carrying
    /// options that cannot apply to it is an error.
    pub fn from_method(method: &mut ImplItemFn) -> syn::Result<Option<Self>> {
        let attrs = AccessorAttributes::take_attrs(&mut method.attrs)?;
        if attrs.skip.is_some() {
            return Ok(None);
        }

        let sig = &method.sig;
        let (ident, ident_span) = match &attrs.name {
            Some(name) => (name.value(), name.span()),
            None => (naming::accessor_ident(&sig.ident.to_string()), sig.ident.span()),
        };

        let kind = match Shape::of(sig) {
            Shape::Read if naming::is_getter_ident(&ident) => Some(AccessorKind::Getter {
                opaque: attrs.opaque.is_some(),
            }),
            Shape::Write if naming::is_setter_ident(&ident) => Some(AccessorKind::Setter),
            _ => None,
        };

        match kind {
            Some(AccessorKind::Setter) if attrs.opaque.is_some() => Err(syn::Error::new(
                attrs.opaque.unwrap_or_else(|| sig.span()),
                "`opaque` only applies to getters",
            )),
            Some(kind) => Ok(Some(Self {
                ident,
                ident_span,
                method: sig.ident.clone(),
                kind,
            })),
            None if attrs.span.is_some() => Err(syn::Error::new(
                attrs.span.unwrap_or_else(|| sig.span()),
                format!(
                    "`{ident}` is neither a getter (`&self`, no arguments, a return value, \
                     named `get*` or `is*`) nor a setter (`&mut self`, one argument, named `set*`)"
                ),
            )),
            None => Ok(None),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
