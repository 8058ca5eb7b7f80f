//! Configuration file loading for semdom-data
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./semdom.toml` or `./.semdom.toml`
//! 3. Global: `<config dir>/semdom-data/config.toml`
//! 4. Default values

mod file_config;
mod loader;
mod template;

pub use file_config::{
    ConfigValidationError, DEFAULT_FALLBACK_LANGUAGE, DEFAULT_LANGUAGES, FileConfig,
    FileInputConfig, FileLanguagesConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
pub use template::{FileNameTemplate, LANGUAGE_PLACEHOLDER, TemplateError};
