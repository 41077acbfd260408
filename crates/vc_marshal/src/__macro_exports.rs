//! Paths used by code generated from `#[accessors]`.
//!
//! Not a stable API.

pub use crate::access::{Accessible, AccessorTable, Getter, Setter};
pub use crate::codec::{IntoProperty, PropertyValue};
