//! See [`accessors`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{ItemImpl, parse_macro_input};

static ACCESSOR_ATTRIBUTE_NAME: &str = "accessor";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod naming;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Accessor Registration
///
/// `#[accessors]` is placed on an inherent `impl` block. The block is kept as
/// written and an `Accessible` implementation is generated from the methods
/// that follow the accessor conventions, in declaration order.
///
/// ```rust, ignore
/// #[derive(Default)]
/// struct Window {
///     title: String,
///     width: i32,
///     maximized: bool,
/// }
///
/// #[accessors]
/// impl Window {
///     fn get_title(&self) -> &str { &self.title }
///     fn set_title(&mut self, title: String) { self.title = title; }
///
///     fn get_width(&self) -> i32 { self.width }
///     fn set_width(&mut self, width: i32) { self.width = width; }
///
///     fn is_maximized(&self) -> bool { self.maximized }
///     fn set_maximized(&mut self, maximized: bool) { self.maximized = maximized; }
/// }
/// ```
///
/// ## Conventions
///
/// Accessor identifiers are the lowerCamel form of the method name, so
/// `get_title` is registered as `getTitle` and persisted as the `title`
/// property.
///
/// - A **getter** takes `&self` only, returns a value, and its identifier
///   starts with `get` or `is` followed by at least one character.
/// - A **setter** takes `&mut self` and exactly one argument, and its
///   identifier starts with `set`. It may return `()` or a `Result`; an
///   `Err` means the value was refused.
///
/// Methods with type or const parameters, `async` and `unsafe` methods, and
/// methods matching neither shape are ignored.
///
/// The parameter of a setter must be a supported scalar type and a getter
/// must return one (or a reference to one). Anything else fails to compile
/// unless the method is skipped or, for getters, marked `opaque`.
///
/// ## Attributes
///
/// ### Renaming
///
/// Identifiers can be given explicitly. This is how acronyms are spelled,
/// and how a property gets setters for both the plain and the optional
/// form of a type, since two methods cannot share a name:
///
/// ```rust, ignore
/// #[accessors]
/// impl Invoice {
///     #[accessor(name = "getURL")]
///     fn url(&self) -> &str { &self.url }
///
///     #[accessor(name = "setAmount")]
///     fn set_amount(&mut self, amount: f64) { self.amount = amount; }
///
///     #[accessor(name = "setAmount")]
///     fn set_amount_or_none(&mut self, amount: Option<f64>) { self.amount = amount.unwrap_or_default(); }
/// }
/// ```
///
/// A named method must have a getter or setter shape.
///
/// ### Skipping
///
/// `#[accessor(skip)]` leaves a method out of the table.
///
/// ### Opaque getters
///
/// `#[accessor(opaque)]` persists a getter of any `Display` type. The
/// element's type is the Rust type name, so it is written but never read
/// back.
///
/// ```rust, ignore
/// #[accessors]
/// impl Window {
///     #[accessor(opaque)]
///     fn get_position(&self) -> Position { self.position }
/// }
/// ```
#[proc_macro_attribute]
pub fn accessors(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let attr = proc_macro2::TokenStream::from(attr);
        return syn::Error::new_spanned(attr, "`#[accessors]` takes no arguments")
            .into_compile_error()
            .into();
    }

    let item = parse_macro_input!(item as ItemImpl);

    match impls::impl_accessible(item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
