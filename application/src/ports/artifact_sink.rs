//! Artifact sink port

use semdom_domain::{ArtifactKind, LanguageCode};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while storing an artifact
#[derive(Error, Debug)]
pub enum ArtifactSinkError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Destination for rendered artifacts
///
/// `write_artifact` receives the complete artifact text and must make it
/// visible as a single unit: readers see either the previous file or the
/// whole new one, never a partial write.
pub trait ArtifactSink: Send + Sync {
    /// Store `contents` and return the location it was written to
    fn write_artifact(
        &self,
        kind: ArtifactKind,
        language: &LanguageCode,
        contents: &str,
    ) -> Result<PathBuf, ArtifactSinkError>;
}
