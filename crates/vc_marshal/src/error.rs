use alloc::string::String;
use core::str::Utf8Error;
use std::io;
use std::path::PathBuf;

use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// A failure to read, parse, render or write a whole document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("malformed escape sequence: {0}")]
    Escape(#[from] EscapeError),

    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("document has no root element")]
    MissingRoot,

    #[error("document has more than one root element, found `{0}` after the root")]
    MultipleRoots(String),

    #[error("element `{0}` is never closed")]
    UnclosedElement(String),

    #[error("closing tag `{0}` has no matching opening tag")]
    UnexpectedEnd(String),

    #[error("`{0}` is not a valid XML name")]
    InvalidName(String),
}

/// Saving a document to its backing file failed.
#[derive(Debug, Error)]
#[error("failed to save properties to `{}`: {source}", .path.display())]
pub struct SaveError {
    pub path: PathBuf,
    #[source]
    pub source: DocumentError,
}

/// Loading a document from its backing file failed.
#[derive(Debug, Error)]
#[error("failed to load properties from `{}`: {source}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: DocumentError,
}
