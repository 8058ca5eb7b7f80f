//! Local file system document source
//!
//! Reads the definitions document and the per-language questions documents
//! from one input directory. Files must be UTF-8; a leading byte-order mark
//! is accepted.

use crate::config::FileNameTemplate;
use crate::xml::parse_document;
use semdom_application::{DocumentSource, DocumentSourceError};
use semdom_domain::{LanguageCode, XmlDocument};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Document source that reads from the local file system.
#[derive(Debug, Clone)]
pub struct LocalDocumentSource {
    directory: PathBuf,
    definitions_file: String,
    questions_file: FileNameTemplate,
}

impl LocalDocumentSource {
    pub fn new(
        directory: impl Into<PathBuf>,
        definitions_file: impl Into<String>,
        questions_file: FileNameTemplate,
    ) -> Self {
        Self {
            directory: directory.into(),
            definitions_file: definitions_file.into(),
            questions_file,
        }
    }

    pub fn definitions_path(&self) -> PathBuf {
        self.directory.join(&self.definitions_file)
    }

    pub fn questions_path(&self, language: &LanguageCode) -> PathBuf {
        self.directory.join(self.questions_file.render(language))
    }

    fn read_document(path: &Path) -> Result<XmlDocument, DocumentSourceError> {
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => DocumentSourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DocumentSourceError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let text = String::from_utf8(bytes).map_err(|_| DocumentSourceError::Encoding {
            path: path.to_path_buf(),
        })?;

        debug!("Parsing {} ({} bytes)", path.display(), text.len());
        parse_document(&text).map_err(|e| DocumentSourceError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

impl DocumentSource for LocalDocumentSource {
    fn load_definitions(&self) -> Result<XmlDocument, DocumentSourceError> {
        Self::read_document(&self.definitions_path())
    }

    fn load_questions(&self, language: &LanguageCode) -> Result<XmlDocument, DocumentSourceError> {
        Self::read_document(&self.questions_path(language))
    }
}
