//! Parsed XML documents
//!
//! A minimal, owned element tree carrying exactly what the extractors need:
//! element names, attributes, leading text and child elements. Parsing
//! lives in the infrastructure layer; this module only models the result.

pub mod element;

pub use element::{Descendants, XmlDocument, XmlElement};
