//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Defaults reproduce the stock Ddp4 layout: every supported language,
//! English as the fallback, inputs and outputs in the working directory.
//!
//! ```toml
//! [languages]
//! supported = ["en", "es", "fr"]
//! process = ["fr"]
//! default = "en"
//!
//! [input]
//! directory = "data/semdom"
//! definitions_file = "Ddp4.xml"
//! questions_file = "Ddp4Questions-{lang}.xml"
//!
//! [output]
//! directory = "build/semdom"
//! domains_file = "semanticDomains_{lang}.js"
//! questions_file = "semanticDomainQuestions_{lang}.js"
//! ```

use super::template::{FileNameTemplate, TemplateError};
use semdom_application::{LanguagePlan, LanguagePlanError};
use semdom_domain::{DomainError, LanguageCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_LANGUAGES: [&str; 11] = [
    "en", "es", "fr", "hi", "id", "km", "ne", "ru", "th", "ur", "zh-CN",
];
pub const DEFAULT_FALLBACK_LANGUAGE: &str = "en";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("no supported languages configured")]
    NoLanguages,

    #[error(transparent)]
    InvalidLanguage(#[from] DomainError),

    #[error("language '{0}' is not in the supported language list")]
    UnsupportedLanguage(String),

    #[error("default language '{0}' is not in the supported language list")]
    UnsupportedDefaultLanguage(String),

    #[error("{setting} cannot be empty")]
    EmptyFileName { setting: &'static str },

    #[error("invalid {setting}: {source}")]
    InvalidTemplate {
        setting: &'static str,
        #[source]
        source: TemplateError,
    },
}

impl From<LanguagePlanError> for ConfigValidationError {
    fn from(error: LanguagePlanError) -> Self {
        match error {
            LanguagePlanError::NoLanguages => ConfigValidationError::NoLanguages,
        }
    }
}

/// Raw language configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLanguagesConfig {
    /// Every language the dataset supports
    pub supported: Vec<String>,
    /// Languages to build; all supported languages when unset
    pub process: Option<Vec<String>>,
    /// Language that fills in missing localized values
    pub default: String,
}

impl Default for FileLanguagesConfig {
    fn default() -> Self {
        Self {
            supported: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            process: None,
            default: DEFAULT_FALLBACK_LANGUAGE.to_string(),
        }
    }
}

/// Raw input configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInputConfig {
    /// Directory holding the XML sources
    pub directory: PathBuf,
    /// Definitions document shared by every language
    pub definitions_file: String,
    /// Per-language questions document template
    pub questions_file: String,
}

impl Default for FileInputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            definitions_file: "Ddp4.xml".to_string(),
            questions_file: "Ddp4Questions-{lang}.xml".to_string(),
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory the artifacts are written to
    pub directory: PathBuf,
    /// Domain artifact template
    pub domains_file: String,
    /// Question artifact template
    pub questions_file: String,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            domains_file: "semanticDomains_{lang}.js".to_string(),
            questions_file: "semanticDomainQuestions_{lang}.js".to_string(),
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub languages: FileLanguagesConfig,
    pub input: FileInputConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.language_plan()?;
        if self.input.definitions_file.trim().is_empty() {
            return Err(ConfigValidationError::EmptyFileName {
                setting: "input.definitions_file",
            });
        }
        self.questions_input_template()?;
        self.domains_output_template()?;
        self.questions_output_template()?;
        Ok(())
    }

    /// Supported language codes, parsed
    pub fn supported_languages(&self) -> Result<Vec<LanguageCode>, ConfigValidationError> {
        let supported = parse_codes(&self.languages.supported)?;
        if supported.is_empty() {
            return Err(ConfigValidationError::NoLanguages);
        }
        Ok(supported)
    }

    /// The languages to process and the fallback language
    pub fn language_plan(&self) -> Result<LanguagePlan, ConfigValidationError> {
        let supported = self.supported_languages()?;

        let default_language = LanguageCode::new(self.languages.default.clone())?;
        if !supported.contains(&default_language) {
            return Err(ConfigValidationError::UnsupportedDefaultLanguage(
                default_language.to_string(),
            ));
        }

        let selected = match &self.languages.process {
            Some(process) => parse_codes(process)?,
            None => supported.clone(),
        };
        if let Some(unsupported) = selected.iter().find(|l| !supported.contains(l)) {
            return Err(ConfigValidationError::UnsupportedLanguage(
                unsupported.to_string(),
            ));
        }

        Ok(LanguagePlan::new(selected, default_language)?)
    }

    pub fn questions_input_template(&self) -> Result<FileNameTemplate, ConfigValidationError> {
        template("input.questions_file", &self.input.questions_file)
    }

    pub fn domains_output_template(&self) -> Result<FileNameTemplate, ConfigValidationError> {
        template("output.domains_file", &self.output.domains_file)
    }

    pub fn questions_output_template(&self) -> Result<FileNameTemplate, ConfigValidationError> {
        template("output.questions_file", &self.output.questions_file)
    }
}

fn parse_codes(codes: &[String]) -> Result<Vec<LanguageCode>, ConfigValidationError> {
    codes
        .iter()
        .map(|c| LanguageCode::new(c.clone()).map_err(ConfigValidationError::from))
        .collect()
}

fn template(setting: &'static str, value: &str) -> Result<FileNameTemplate, ConfigValidationError> {
    FileNameTemplate::new(value).map_err(|source| ConfigValidationError::InvalidTemplate { setting, source })
}
