//! quick-xml based document parser
//!
//! Character data goes through XML end-of-line handling (`\r\n` and lone
//! `\r` become `\n`) before entity references are expanded, so a `&#13;`
//! reference still yields a carriage return. Comments and processing
//! instructions are not kept, but like child elements they end an
//! element's leading text. The doctype is skipped.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use semdom_domain::{XmlDocument, XmlElement};
use std::borrow::Cow;
use thiserror::Error;

const BOM: char = '\u{feff}';

/// Errors that can occur while parsing a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlParseError {
    #[error("XML syntax error near byte {position}: {message}")]
    Syntax { position: u64, message: String },

    #[error("Closing tag without matching opening tag near byte {position}")]
    UnexpectedEnd { position: u64 },

    #[error("Element <{0}> is never closed")]
    Unclosed(String),

    #[error("Second root element <{name}> near byte {position}")]
    MultipleRoots { name: String, position: u64 },

    #[error("Document has no root element")]
    NoRoot,
}

/// Strip a leading UTF-8 byte-order mark
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

/// Parse a complete XML document
pub fn parse_document(text: &str) -> Result<XmlDocument, XmlParseError> {
    let mut reader = Reader::from_str(strip_bom(text));
    reader.config_mut().check_end_names = true;

    let mut open: Vec<OpenElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| XmlParseError::Syntax {
            position,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => open.push(OpenElement::new(start_element(&start, position)?)),
            Event::Empty(start) => {
                let element = start_element(&start, position)?;
                attach(element, &mut open, &mut root, position)?;
            }
            Event::End(_) => {
                let closed = open
                    .pop()
                    .ok_or(XmlParseError::UnexpectedEnd { position })?;
                attach(closed.element, &mut open, &mut root, position)?;
            }
            Event::Text(text) => {
                // Whitespace outside the root element carries nothing.
                if let Some(current) = open.last_mut() {
                    let raw = utf8(&text, position)?;
                    let normalized = normalize_line_ends(raw);
                    let unescaped = unescape(&normalized).map_err(|e| XmlParseError::Syntax {
                        position,
                        message: e.to_string(),
                    })?;
                    current.append_text(&unescaped);
                }
            }
            Event::CData(cdata) => {
                if let Some(current) = open.last_mut() {
                    let raw = utf8(&cdata, position)?;
                    current.append_text(&normalize_line_ends(raw));
                }
            }
            Event::Comment(_) | Event::PI(_) => {
                if let Some(current) = open.last_mut() {
                    current.text_closed = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(XmlParseError::Unclosed(unclosed.element.name().to_string()));
    }
    root.map(XmlDocument::new).ok_or(XmlParseError::NoRoot)
}

/// An element whose end tag has not been read yet
struct OpenElement {
    element: XmlElement,
    /// Set once a comment or processing instruction has been seen; later
    /// character data is tail text
    text_closed: bool,
}

impl OpenElement {
    fn new(element: XmlElement) -> Self {
        Self {
            element,
            text_closed: false,
        }
    }

    fn append_text(&mut self, text: &str) {
        if !self.text_closed {
            self.element.append_text(text);
        }
    }
}

fn start_element(start: &BytesStart<'_>, position: u64) -> Result<XmlElement, XmlParseError> {
    let name = start.name();
    let mut element = XmlElement::new(utf8(name.as_ref(), position)?);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| XmlParseError::Syntax {
            position,
            message: e.to_string(),
        })?;
        let key = utf8(attribute.key.as_ref(), position)?;
        let value = attribute
            .unescape_value()
            .map_err(|e| XmlParseError::Syntax {
                position,
                message: e.to_string(),
            })?;
        element.set_attribute(key, value.into_owned());
    }

    Ok(element)
}

/// Hand a closed element to its parent, or make it the root
fn attach(
    element: XmlElement,
    open: &mut [OpenElement],
    root: &mut Option<XmlElement>,
    position: u64,
) -> Result<(), XmlParseError> {
    if let Some(parent) = open.last_mut() {
        parent.element.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(XmlParseError::MultipleRoots {
            name: element.name().to_string(),
            position,
        });
    }
    *root = Some(element);
    Ok(())
}

fn utf8(bytes: &[u8], position: u64) -> Result<&str, XmlParseError> {
    std::str::from_utf8(bytes).map_err(|e| XmlParseError::Syntax {
        position,
        message: e.to_string(),
    })
}

fn normalize_line_ends(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- semantic domains -->
<list>
  <option guid="63403699">
    <key>1</key>
    <name><form ws="en">Universe, creation</form></name>
    <option><key>1.1</key></option>
  </option>
</list>"#;

        let doc = parse_document(xml).unwrap();
        assert_eq!(doc.root().name(), "list");

        let keys: Vec<_> = doc
            .elements_named("option")
            .filter_map(|o| o.child("key").and_then(XmlElement::text))
            .collect();
        assert_eq!(keys, vec!["1", "1.1"]);

        let option = doc.elements_named("option").next().unwrap();
        assert_eq!(option.attribute("guid"), Some("63403699"));
        let form = option.child("name").and_then(|n| n.child("form")).unwrap();
        assert_eq!(form.attribute("ws"), Some("en"));
        assert_eq!(form.text(), Some("Universe, creation"));
    }

    #[test]
    fn test_strips_byte_order_mark() {
        let doc = parse_document("\u{feff}<root>x</root>").unwrap();
        assert_eq!(doc.root().text(), Some("x"));
        assert_eq!(strip_bom("abc"), "abc");
    }

    #[test]
    fn test_entities_and_cdata() {
        let doc = parse_document(
            r#"<q a="&quot;x&quot;">Tom &amp; Jerry &lt;3 <![CDATA[<raw>]]></q>"#,
        )
        .unwrap();
        assert_eq!(doc.root().attribute("a"), Some("\"x\""));
        assert_eq!(doc.root().text(), Some("Tom & Jerry <3 <raw>"));
    }

    #[test]
    fn test_line_end_handling() {
        let doc = parse_document("<q>What is X?\r\nMore\rEnd&#13;</q>").unwrap();
        assert_eq!(doc.root().text(), Some("What is X?\nMore\nEnd\r"));
    }

    #[test]
    fn test_empty_element_has_no_text() {
        let doc = parse_document("<d><question/><question></question></d>").unwrap();
        assert!(doc.root().children().iter().all(|q| q.text().is_none()));
    }

    #[test]
    fn test_comment_ends_leading_text() {
        let doc = parse_document("<q>Before<!-- note -->After<?pi data?>More</q>").unwrap();
        assert_eq!(doc.root().text(), Some("Before"));

        let doc = parse_document("<q><!-- note -->After</q>").unwrap();
        assert_eq!(doc.root().text(), None);

        let doc = parse_document("<list><q>Inner</q><!-- note --></list>").unwrap();
        assert_eq!(doc.root().child("q").and_then(XmlElement::text), Some("Inner"));
    }

    #[test]
    fn test_non_ascii_text() {
        let doc = parse_document(r#"<form ws="zh-CN">天空</form>"#).unwrap();
        assert_eq!(doc.root().text(), Some("天空"));
    }

    #[test]
    fn test_mismatched_end_tag() {
        let err = parse_document("<a><b></a></b>").unwrap_err();
        assert!(matches!(err, XmlParseError::Syntax { .. }));
    }

    #[test]
    fn test_unclosed_element() {
        let err = parse_document("<a><b></b>").unwrap_err();
        assert!(matches!(
            err,
            XmlParseError::Unclosed(_) | XmlParseError::Syntax { .. }
        ));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_document("  ").unwrap_err(), XmlParseError::NoRoot);
    }

    #[test]
    fn test_multiple_roots() {
        let err = parse_document("<a/><b/>").unwrap_err();
        assert!(matches!(err, XmlParseError::MultipleRoots { ref name, .. } if name == "b"));
    }
}
