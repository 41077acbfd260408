//! Paths into `vc_marshal` used by generated code.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// The path to `vc_marshal` as seen from the invoking crate.
///
/// `::vc_marshal` for direct dependents, `::vc_props::marshal` through the
/// facade. See [`vc_macro_utils::Manifest`].
///
/// Reads the caller's `Cargo.toml`, so it is resolved once per invocation.
pub(crate) fn vc_marshal() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_marshal"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn accessible_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::__macro_exports::Accessible
    }
}

#[inline(always)]
pub(crate) fn accessor_table_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::__macro_exports::AccessorTable
    }
}

#[inline(always)]
pub(crate) fn getter_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::__macro_exports::Getter
    }
}

#[inline(always)]
pub(crate) fn setter_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::__macro_exports::Setter
    }
}

#[inline(always)]
pub(crate) fn into_property_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::__macro_exports::IntoProperty
    }
}

#[inline(always)]
pub(crate) fn property_value_(vc_marshal_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_marshal_path::__macro_exports::PropertyValue
    }
}
