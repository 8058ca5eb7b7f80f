//! Presentation layer for semdom-data
//!
//! This crate contains the CLI definition and the progress reporters.

pub mod cli;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use progress::reporter::{ProgressReporter, SimpleProgress, format_language_list};
