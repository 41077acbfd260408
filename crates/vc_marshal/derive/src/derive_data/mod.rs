//! Parsing of the annotated `impl` block into accessor descriptions.

// -----------------------------------------------------------------------------
// Modules

mod accessor_attributes;
mod accessor_method;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use accessor_attributes::AccessorAttributes;
pub(crate) use accessor_method::{AccessorKind, AccessorMethod};
