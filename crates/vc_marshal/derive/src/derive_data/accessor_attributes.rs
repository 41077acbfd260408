use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitStr};

use crate::ACCESSOR_ATTRIBUTE_NAME;

/// Options given with `#[accessor(...)]` on one method.
#[derive(Debug, Default)]
pub(crate) struct AccessorAttributes {
    /// `name = "getURL"`: overrides the derived identifier.
    pub name: Option<LitStr>,
    /// `skip`: never an accessor.
    pub skip: Option<Span>,
    /// `opaque`: getter persisted through `Display`.
    pub opaque: Option<Span>,
    /// Span of the first `#[accessor]`, for errors about the method as a whole.
    pub span: Option<Span>,
}

impl AccessorAttributes {
    /// Parses and removes every `#[accessor(...)]` from `attrs`.
    ///
    /// The attributes are consumed so the re-emitted method compiles.
    pub fn take_attrs(attrs: &mut Vec<Attribute>) -> syn::Result<Self> {
        let mut this = Self::default();
        let mut result = Ok(());

        attrs.retain(|attr| {
            if !attr.path().is_ident(ACCESSOR_ATTRIBUTE_NAME) {
                return true;
            }
            if let Err(err) = this.parse_attr(attr) {
                match &mut result {
                    Ok(()) => result = Err(err),
                    Err(first) => first.combine(err),
                }
            }
            false
        });

        result.map(|()| this)
    }

    fn parse_attr(&mut self, attr: &Attribute) -> syn::Result<()> {
        self.span.get_or_insert_with(|| attr.path().span());

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                if !is_identifier(&lit.value()) {
                    return Err(syn::Error::new(
                        lit.span(),
                        "accessor name must be an identifier",
                    ));
                }
                if self.name.replace(lit).is_some() {
                    return Err(meta.error("duplicate `name`"));
                }
                Ok(())
            } else if meta.path.is_ident("skip") {
                Self::set_flag(&mut self.skip, &meta)
            } else if meta.path.is_ident("opaque") {
                Self::set_flag(&mut self.opaque, &meta)
            } else {
                Err(meta.error("expected `name = \"...\"`, `skip` or `opaque`"))
            }
        })?;

        if let Some(skip) = self.skip
            && (self.name.is_some() || self.opaque.is_some())
        {
            return Err(syn::Error::new(skip, "`skip` cannot be combined with other options"));
        }
        Ok(())
    }

    fn set_flag(flag: &mut Option<Span>, meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
        if flag.replace(meta.path.span()).is_some() {
            return Err(meta.error("duplicate option"));
        }
        Ok(())
    }
}

/// Letters, digits and `_`, not starting with a digit.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use syn::{ImplItemFn, parse_quote};

    use super::{AccessorAttributes, is_identifier};

    #[test]
    fn parse_and_strip() {
        let mut method: ImplItemFn = parse_quote! {
            #[inline]
            #[accessor(name = "getURL")]
            #[accessor(opaque)]
            fn url(&self) -> Url { self.url.clone() }
        };
        let attrs = AccessorAttributes::take_attrs(&mut method.attrs).unwrap();

        assert_eq!(attrs.name.unwrap().value(), "getURL");
        assert!(attrs.opaque.is_some());
        assert!(attrs.skip.is_none());
        assert_eq!(method.attrs.len(), 1);
        assert!(method.attrs[0].path().is_ident("inline"));
    }

    #[test]
    fn rejected() {
        let cases: [ImplItemFn; 6] = [
            parse_quote! { #[accessor(rename = "x")] fn a(&self) -> i32 { 0 } },
            parse_quote! { #[accessor(skip, opaque)] fn a(&self) -> i32 { 0 } },
            parse_quote! { #[accessor(skip)] #[accessor(skip)] fn a(&self) -> i32 { 0 } },
            parse_quote! { #[accessor(name = "")] fn a(&self) -> i32 { 0 } },
            parse_quote! { #[accessor(name = "getB c")] fn a(&self) -> i32 { 0 } },
            parse_quote! { #[accessor(name = "1get")] fn a(&self) -> i32 { 0 } },
        ];
        for mut method in cases {
            assert!(AccessorAttributes::take_attrs(&mut method.attrs).is_err());
        }
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("getURL"));
        assert!(is_identifier("_raw"));
        assert!(is_identifier("getGröße2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("getB c"));
        assert!(!is_identifier("get-x"));
        assert!(!is_identifier("9x"));
    }
}
