use alloc::string::ToString;
use alloc::vec::Vec;
use core::str;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::{Document, Element, Node};
use crate::DocumentError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl Document {
    /// Parses a UTF-8 document. A leading byte order mark is accepted.
    pub fn parse(bytes: &[u8]) -> Result<Self, DocumentError> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        Self::parse_str(str::from_utf8(bytes)?)
    }

    /// Parses a document held in a string.
    pub fn parse_str(text: &str) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_str(text);
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => open.push(element_from_start(&start)?),
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    attach(&mut open, &mut root, element)?;
                }
                Event::End(end) => {
                    let Some(element) = open.pop() else {
                        let name = end.name();
                        let name = str::from_utf8(name.as_ref())?;
                        return Err(DocumentError::UnexpectedEnd(name.to_string()));
                    };
                    attach(&mut open, &mut root, element)?;
                }
                Event::Text(text) => {
                    // Text outside the root is whitespace or ignorable noise.
                    if let Some(parent) = open.last_mut() {
                        parent.push(Node::Text(text.unescape()?.into_owned()));
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = open.last_mut() {
                        let data = str::from_utf8(&data)?;
                        parent.push(Node::CData(data.to_string()));
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctypes.
                _ => {}
            }
        }

        if let Some(element) = open.pop() {
            return Err(DocumentError::UnclosedElement(element.name));
        }

        match root {
            Some(root) => Ok(Self::with_root(root)),
            None => Err(DocumentError::MissingRoot),
        }
    }
}

impl str::FromStr for Document {
    type Err = DocumentError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse_str(text)
    }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, DocumentError> {
    let name = start.name();
    let name = str::from_utf8(name.as_ref())?;
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute?;
        let key = str::from_utf8(attribute.key.as_ref())?;
        let value = attribute.unescape_value()?;
        element.set_attribute(key, value.into_owned());
    }
    Ok(element)
}

/// Hands a closed element to its parent, or makes it the root.
fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DocumentError> {
    if let Some(parent) = open.last_mut() {
        parent.push(Node::Element(element));
        return Ok(());
    }
    if root.is_some() {
        return Err(DocumentError::MultipleRoots(element.name));
    }
    *root = Some(element);
    Ok(())
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::DocumentError;
    use crate::document::{Document, Node};

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<!-- written by hand -->
<properties>
  <width type="int" value="800"/>
  <title type="java.lang.String"><![CDATA[a < b & "c"]]></title>
  <note type="java.lang.String">x &amp; y</note>
  <mode type="fancy" value="&lt;1&gt;"></mode>
</properties>
"#;

    #[test]
    fn parse_sample() {
        let document: Document = SAMPLE.parse().unwrap();
        let root = document.root().unwrap();
        assert_eq!(root.name(), "properties");

        let elements: Vec<_> = root.elements().collect();
        assert_eq!(elements.len(), 4);

        assert_eq!(elements[0].name(), "width");
        assert_eq!(elements[0].attribute("type"), Some("int"));
        assert_eq!(elements[0].attribute("value"), Some("800"));
        assert!(!elements[0].has_children());

        assert_eq!(elements[1].children(), [Node::CData(r#"a < b & "c""#.into())]);
        assert_eq!(elements[2].character_data(), "x & y");
        assert_eq!(elements[3].attribute("value"), Some("<1>"));
        assert!(!elements[3].has_children());
    }

    #[test]
    fn byte_order_mark() {
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend_from_slice(b"<properties/>");
        let document = Document::parse(&bytes).unwrap();
        assert_eq!(document.root().unwrap().name(), "properties");
    }

    #[test]
    fn malformed_documents() {
        assert!(matches!(Document::parse_str(""), Err(DocumentError::MissingRoot)));
        assert!(matches!(
            Document::parse_str("<!-- only a comment -->"),
            Err(DocumentError::MissingRoot)
        ));
        assert!(matches!(
            Document::parse_str("<a/><b/>"),
            Err(DocumentError::MultipleRoots(name)) if name == "b"
        ));
        assert!(Document::parse_str("<properties><a></properties>").is_err());
        assert!(Document::parse_str("<properties>").is_err());
        assert!(Document::parse_str("<properties/></properties>").is_err());
        assert!(Document::parse_str("<properties a=\"1></properties>").is_err());
        assert!(matches!(
            Document::parse(b"<p>\xFF</p>"),
            Err(DocumentError::Utf8(_))
        ));
    }
}
