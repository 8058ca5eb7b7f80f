//! Application layer for semdom-data
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{LanguagePlan, LanguagePlanError};
pub use ports::{
    artifact_sink::{ArtifactSink, ArtifactSinkError},
    document_source::{DocumentSource, DocumentSourceError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::build_data::{
    BuildDataError, BuildDataInput, BuildDataOutput, BuildDataUseCase, WrittenArtifact,
};
