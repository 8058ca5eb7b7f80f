//! Local file system artifact writer
//!
//! Each artifact is written to a temporary file next to its target and then
//! renamed over it, so a reader sees either the old file or the complete new
//! one.

use crate::config::FileNameTemplate;
use semdom_application::{ArtifactSink, ArtifactSinkError};
use semdom_domain::{ArtifactKind, LanguageCode};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Artifact sink that writes into one output directory.
#[derive(Debug, Clone)]
pub struct LocalArtifactWriter {
    directory: PathBuf,
    domains_file: FileNameTemplate,
    questions_file: FileNameTemplate,
}

impl LocalArtifactWriter {
    pub fn new(
        directory: impl Into<PathBuf>,
        domains_file: FileNameTemplate,
        questions_file: FileNameTemplate,
    ) -> Self {
        Self {
            directory: directory.into(),
            domains_file,
            questions_file,
        }
    }

    pub fn artifact_path(&self, kind: ArtifactKind, language: &LanguageCode) -> PathBuf {
        let template = match kind {
            ArtifactKind::Domains => &self.domains_file,
            ArtifactKind::Questions => &self.questions_file,
        };
        self.directory.join(template.render(language))
    }
}

impl ArtifactSink for LocalArtifactWriter {
    fn write_artifact(
        &self,
        kind: ArtifactKind,
        language: &LanguageCode,
        contents: &str,
    ) -> Result<PathBuf, ArtifactSinkError> {
        let path = self.artifact_path(kind, language);
        write_atomically(&path, contents.as_bytes()).map_err(|source| ArtifactSinkError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Replaced {}", path.display());
        Ok(path)
    }
}

fn write_atomically(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory)?;

    let mut file = NamedTempFile::new_in(directory)?;
    file.write_all(bytes)?;
    file.flush()?;

    // Temp files are created owner-only; artifacts are served as static assets.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
