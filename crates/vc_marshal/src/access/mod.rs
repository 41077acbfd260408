//! Accessor discovery: naming conventions and per-type accessor tables.
//!
//! ## Menu
//!
//! - [`setter_name`], [`property_name`], [`is_getter`]:
//!   the naming convention linking property names to accessors.
//! - [`Getter`], [`Setter`], [`AccessorTable`]: the accessors a type exposes.
//! - [`Accessible`]: implemented by types that can be saved and loaded.
//!
//! Tables are registered per type at compile time, usually through
//! [`#[accessors]`](crate::accessors). There is no runtime introspection and
//! no inheritance: a table holds exactly the accessors declared for the type.

// -----------------------------------------------------------------------------
// Modules

mod naming;
mod table;

// -----------------------------------------------------------------------------
// Exports

pub use naming::{capitalize, decapitalize};
pub use naming::{is_getter, property_name, setter_name};
pub use naming::{BOOLEAN_GETTER_PREFIX, GETTER_PREFIX, SETTER_PREFIX};
pub use table::{Accessible, AccessorTable, Getter, Setter, SetterOutcome};
