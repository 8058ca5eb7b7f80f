//! Artifact rendering
//!
//! The catalog is written as pretty-printed JSON (4-space indent, `": "`
//! key separator, insertion order, non-ASCII kept literal) between a fixed
//! preamble and `;\n`. Identical input always renders identical bytes.

use super::kind::ArtifactKind;
use crate::core::language::LanguageCode;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

const INDENT: &[u8] = b"    ";

/// Text written after the serialized catalog
pub const ARTIFACT_TERMINATOR: &str = ";\n";

/// Errors that can occur while rendering an artifact
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize {kind} data for {language}: {source}")]
    Serialize {
        kind: ArtifactKind,
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialized {kind} data for {language} is not valid UTF-8")]
    Encoding {
        kind: ArtifactKind,
        language: String,
    },
}

fn preamble(kind: ArtifactKind, language: &LanguageCode) -> String {
    format!(
        "'use strict';\n\
         \n\
         // THIS FILE IS AUTOMATICALLY GENERATED.\n\
         // Do not make changes to this file; they will be overwritten.\n\
         \n\
         // input systems languages data\n\
         var {} = ",
        kind.variable_name(language)
    )
}

/// Render `data` as the complete artifact text for `kind` and `language`
pub fn render_artifact<T>(
    kind: ArtifactKind,
    language: &LanguageCode,
    data: &T,
) -> Result<String, RenderError>
where
    T: Serialize + ?Sized,
{
    let mut json = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer)
        .map_err(|source| RenderError::Serialize {
            kind,
            language: language.to_string(),
            source,
        })?;

    let json = String::from_utf8(json).map_err(|_| RenderError::Encoding {
        kind,
        language: language.to_string(),
    })?;

    let mut artifact = preamble(kind, language);
    artifact.push_str(&json);
    artifact.push_str(ARTIFACT_TERMINATOR);
    Ok(artifact)
}
