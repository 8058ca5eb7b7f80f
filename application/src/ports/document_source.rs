//! Document source port
//!
//! Defines how the application obtains parsed XML source documents.

use semdom_domain::{LanguageCode, XmlDocument};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source document
#[derive(Error, Debug)]
pub enum DocumentSourceError {
    #[error("Source document not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl DocumentSourceError {
    /// Path of the document that failed to load
    pub fn path(&self) -> &PathBuf {
        match self {
            DocumentSourceError::NotFound { path }
            | DocumentSourceError::Io { path, .. }
            | DocumentSourceError::Encoding { path }
            | DocumentSourceError::Parse { path, .. } => path,
        }
    }
}

/// Source of the XML documents the extractors run on
///
/// Implementations (adapters) live in the infrastructure layer.
pub trait DocumentSource: Send + Sync {
    /// The definitions document shared by every language
    fn load_definitions(&self) -> Result<XmlDocument, DocumentSourceError>;

    /// The questions document for `language`
    fn load_questions(&self, language: &LanguageCode) -> Result<XmlDocument, DocumentSourceError>;
}
