use alloc::string::{String, ToString};
use alloc::vec::Vec;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{Document, Element, Node, is_name};
use crate::DocumentError;

/// Spaces per nesting level in rendered documents.
pub const INDENT_WIDTH: usize = 2;

const CDATA_END: &str = "]]>";

impl Document {
    /// Renders the document as UTF-8 with an XML declaration.
    ///
    /// Elements whose children are all elements are laid out one per line,
    /// indented by [`INDENT_WIDTH`] spaces per level. Anything holding
    /// character data is written inline so the data round-trips unchanged.
    ///
    /// Fails with [`DocumentError::InvalidName`] when an element or attribute
    /// name could not be read back.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DocumentError> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        newline(&mut writer, 0)?;
        if let Some(root) = &self.root {
            write_element(&mut writer, root, 0)?;
            newline(&mut writer, 0)?;
        }
        Ok(writer.into_inner())
    }
}

fn newline(writer: &mut Writer<Vec<u8>>, depth: usize) -> Result<(), DocumentError> {
    let mut text = String::with_capacity(1 + depth * INDENT_WIDTH);
    text.push('\n');
    text.extend(core::iter::repeat_n(' ', depth * INDENT_WIDTH));
    writer.write_event(Event::Text(BytesText::from_escaped(text)))?;
    Ok(())
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &Element,
    depth: usize,
) -> Result<(), DocumentError> {
    if !is_name(element.name()) {
        return Err(DocumentError::InvalidName(element.name().to_string()));
    }
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        if !is_name(key) {
            return Err(DocumentError::InvalidName(key.to_string()));
        }
        start.push_attribute((key, value));
    }

    if !element.has_children() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }
    writer.write_event(Event::Start(start))?;

    let block = element
        .children()
        .iter()
        .all(|child| matches!(child, Node::Element(_)));

    for child in element.children() {
        match child {
            Node::Element(nested) => {
                if block {
                    newline(writer, depth + 1)?;
                }
                write_element(writer, nested, depth + 1)?;
            }
            Node::Text(text) => {
                writer.write_event(Event::Text(BytesText::new(text)))?;
            }
            Node::CData(data) => write_cdata(writer, data)?,
        }
    }

    if block {
        newline(writer, depth)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}

/// Writes `data` as one or more adjacent CDATA sections.
///
/// A section cannot contain `]]>`, so the data is split between `]]` and `>`.
fn write_cdata(writer: &mut Writer<Vec<u8>>, data: &str) -> Result<(), DocumentError> {
    let mut rest = data;
    while let Some(at) = rest.find(CDATA_END) {
        let (head, tail) = rest.split_at(at + 2);
        writer.write_event(Event::CData(BytesCData::new(head)))?;
        rest = tail;
    }
    writer.write_event(Event::CData(BytesCData::new(rest)))?;
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests
