//! A minimal XML element tree with a parser and an indenting writer.
//!
//! Only what property documents need is modelled: elements, attributes,
//! text and CDATA. Declarations, comments, processing instructions and
//! doctypes are dropped while parsing.

// -----------------------------------------------------------------------------
// Modules

mod parse;
mod write;

// -----------------------------------------------------------------------------
// Exports

pub use write::INDENT_WIDTH;

use alloc::string::String;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Names

/// Whether `name` is an XML 1.0 `Name`, usable as an element or attribute name.
pub fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_name_start_char) && chars.all(is_name_char)
}

fn is_name_start_char(c: char) -> bool {
    matches!(c,
        ':' | 'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}'
    )
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}'
        )
}

// -----------------------------------------------------------------------------
// Node

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Unescaped character data.
    Text(String),
    /// Verbatim content of a CDATA section.
    CData(String),
}

// -----------------------------------------------------------------------------
// Element

/// A named element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes and no children.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Sets attribute `key`, replacing an existing value in place.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(name, _)| *name == key) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[inline]
    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    #[inline]
    pub fn with_child(mut self, node: Node) -> Self {
        self.push(node);
        self
    }

    /// Direct element children; text and CDATA are skipped.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// The character data held directly by this element.
    ///
    /// If there is any CDATA child, the CDATA sections are concatenated and
    /// surrounding text (usually indentation) is ignored. Otherwise the text
    /// children are concatenated. Empty if there is neither.
    pub fn character_data(&self) -> String {
        let has_cdata = self.children.iter().any(|node| matches!(node, Node::CData(_)));

        let mut data = String::new();
        for node in &self.children {
            match node {
                Node::CData(text) => data.push_str(text),
                Node::Text(text) if !has_cdata => data.push_str(text),
                _ => {}
            }
        }
        data
    }
}

// -----------------------------------------------------------------------------
// Document

/// A document with at most one root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    root: Option<Element>,
}

impl Document {
    /// Creates a document without a root.
    #[inline]
    pub const fn new() -> Self {
        Self { root: None }
    }

    #[inline]
    pub const fn with_root(root: Element) -> Self {
        Self { root: Some(root) }
    }

    #[inline]
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    #[inline]
    pub fn root_mut(&mut self) -> Option<&mut Element> {
        self.root.as_mut()
    }

    #[inline]
    pub fn into_root(self) -> Option<Element> {
        self.root
    }
}

// -----------------------------------------------------------------------------
// Tests
