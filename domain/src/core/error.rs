//! Domain error types

use crate::semantic_domain::entities::ScalarField;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid language code: '{0}'")]
    InvalidLanguageCode(String),
}

/// Structural problems found while projecting an XML document into records.
///
/// Every variant is fatal for the language being processed: the source
/// documents are expected to be complete for the default language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("option #{position} has no <key> text")]
    MissingKey { position: usize },

    #[error(
        "domain '{key}' has no <{field}> form for language '{language}' \
         or default language '{default_language}'"
    )]
    MissingLocalizedField {
        key: String,
        field: ScalarField,
        language: String,
        default_language: String,
    },

    #[error("semantic-domain #{position} has no 'id' attribute")]
    MissingDomainId { position: usize },
}
