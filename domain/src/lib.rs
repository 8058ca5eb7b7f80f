//! Domain layer for semdom-data
//!
//! This crate contains the core transformation logic: the parsed XML
//! document model, the language value object, the two extractors and the
//! artifact renderer. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Catalogs
//!
//! - **Domain catalog**: `<option>` records of the shared definitions
//!   document, projected into one language with a default-language fallback
//! - **Question catalog**: `<semantic-domain>` records of a per-language
//!   questions document
//!
//! ## Artifacts
//!
//! Each catalog is rendered into a JavaScript file that assigns it to a
//! per-language variable.

pub mod artifact;
pub mod core;
pub mod document;
pub mod semantic_domain;

// Re-export commonly used types
pub use artifact::{ArtifactKind, RenderError, render_artifact};
pub use crate::core::{
    error::{DomainError, ExtractionError},
    language::LanguageCode,
};
pub use document::{XmlDocument, XmlElement};
pub use semantic_domain::{
    DomainCatalog, DomainRecord, QuestionCatalog, ScalarField, extract_domain_definitions,
    extract_questions,
};
