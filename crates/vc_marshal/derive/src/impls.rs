use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{ImplItem, ItemImpl};

use crate::derive_data::{AccessorKind, AccessorMethod};

/// Re-emits `item` followed by its `Accessible` implementation.
pub(crate) fn impl_accessible(mut item: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, trait_path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            trait_path,
            "`#[accessors]` applies to inherent impl blocks only",
        ));
    }

    let mut accessors = Vec::new();
    let mut errors: Option<syn::Error> = None;
    for impl_item in &mut item.items {
        let ImplItem::Fn(method) = impl_item else {
            continue;
        };
        match AccessorMethod::from_method(method) {
            Ok(Some(accessor)) => accessors.push(accessor),
            Ok(None) => {}
            Err(err) => match &mut errors {
                Some(first) => first.combine(err),
                None => errors = Some(err),
            },
        }
    }
    if let Some(err) = errors {
        return Err(err);
    }

    let vc_marshal_path = crate::path::vc_marshal();
    let accessible_ = crate::path::accessible_(&vc_marshal_path);
    let accessor_table_ = crate::path::accessor_table_(&vc_marshal_path);

    let entries = accessors
        .iter()
        .map(|accessor| registration(&vc_marshal_path, accessor));

    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    Ok(quote! {
        #item

        impl #impl_generics #accessible_ for #self_ty #where_clause {
            fn accessor_table() -> #accessor_table_<Self> {
                let mut table = #accessor_table_::new();
                #(#entries)*
                table
            }
        }
    })
}

/// One `push_getter` or `push_setter` statement.
fn registration(vc_marshal_path: &syn::Path, accessor: &AccessorMethod) -> TokenStream {
    let AccessorMethod {
        ident,
        ident_span,
        method,
        kind,
    } = accessor;

    match kind {
        AccessorKind::Getter { opaque } => {
            let getter_ = crate::path::getter_(vc_marshal_path);
            let read = if *opaque {
                let property_value_ = crate::path::property_value_(vc_marshal_path);
                quote_spanned! { *ident_span=> #property_value_::opaque(Self::#method(this)) }
            } else {
                let into_property_ = crate::path::into_property_(vc_marshal_path);
                quote_spanned! { *ident_span=> #into_property_::into_property(Self::#method(this)) }
            };
            quote! {
                table.push_getter(#getter_::new(#ident, |this: &Self| #read));
            }
        }
        AccessorKind::Setter => {
            let setter_ = crate::path::setter_(vc_marshal_path);
            let write = quote_spanned! { *ident_span=> #setter_::<Self>::typed(#ident, Self::#method) };
            quote! {
                table.push_setter(#write);
            }
        }
    }
}
