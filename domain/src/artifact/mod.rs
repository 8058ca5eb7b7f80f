//! Generated data artifacts
//!
//! An artifact is a JavaScript file that assigns one catalog to a
//! per-language variable, e.g. `var semanticDomains_zh_CN = {...};`.

pub mod kind;
pub mod render;

pub use kind::ArtifactKind;
pub use render::{ARTIFACT_TERMINATOR, RenderError, render_artifact};
