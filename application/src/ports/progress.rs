//! Progress notification port
//!
//! Defines the interface for reporting progress during a data build.

use semdom_domain::{ArtifactKind, LanguageCode};
use std::path::Path;

/// Callback for progress updates during a data build
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called once, before any document is parsed
    fn on_run_start(&self, languages: &[LanguageCode]);

    /// Called when processing of a language begins
    fn on_language_start(&self, language: &LanguageCode);

    /// Called after an artifact has been written
    fn on_artifact_written(&self, kind: ArtifactKind, language: &LanguageCode, path: &Path);

    /// Called after every artifact has been written
    fn on_run_complete(&self, _artifact_count: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_run_start(&self, _languages: &[LanguageCode]) {}
    fn on_language_start(&self, _language: &LanguageCode) {}
    fn on_artifact_written(&self, _kind: ArtifactKind, _language: &LanguageCode, _path: &Path) {}
}
