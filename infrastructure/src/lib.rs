//! Infrastructure layer for semdom-data
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: XML parsing, file-system document loading,
//! atomic artifact writing and configuration file loading.

pub mod artifacts;
pub mod config;
pub mod documents;
pub mod xml;


// Re-export commonly used types
pub use artifacts::LocalArtifactWriter;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileInputConfig, FileLanguagesConfig,
    FileNameTemplate, FileOutputConfig,
};
pub use documents::LocalDocumentSource;
pub use xml::{XmlParseError, parse_document};
