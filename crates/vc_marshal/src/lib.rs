//! Convention-based persistence of plain Rust objects to XML property documents.
//!
//! ## Menu
//!
//! - [`codec`]: the closed set of supported scalar types and their textual form.
//! - [`access`]: accessor naming conventions and per-type accessor tables.
//! - [`document`]: the element tree, its parser and its writer.
//! - [`report`]: the side channel used for document-level failures.
//! - [`PropertyMapper`]: binds a file path and drives `save`/`load`.
//!
//! A type takes part by implementing [`Accessible`](access::Accessible),
//! usually through the [`accessors`] attribute macro.
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code refers to `::vc_marshal`, which must also resolve
// inside this crate's own tests.
extern crate self as vc_marshal;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod mapper;

pub mod access;
pub mod codec;
pub mod document;
pub mod report;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::{DocumentError, LoadError, SaveError};
pub use mapper::{LoadSummary, PropertyMapper};
pub use mapper::{ROOT_NAME, TYPE_ATTRIBUTE, VALUE_ATTRIBUTE};
pub use mapper::{apply_document, to_document};

#[cfg(feature = "derive")]
pub use vc_marshal_derive as derive;

#[cfg(feature = "derive")]
pub use vc_marshal_derive::accessors;
