//! XML document parsing
//!
//! Turns UTF-8 XML text into the domain's [`XmlDocument`](semdom_domain::XmlDocument)
//! using `quick-xml`.

mod parser;

pub use parser::{XmlParseError, parse_document, strip_bom};
