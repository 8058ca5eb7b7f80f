//! File name templates parameterized by language code

use semdom_domain::LanguageCode;
use thiserror::Error;

/// Placeholder replaced by the language code
pub const LANGUAGE_PLACEHOLDER: &str = "{lang}";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template '{0}' does not contain {{lang}}")]
    MissingPlaceholder(String),
}

/// A file name such as `Ddp4Questions-{lang}.xml`.
///
/// The code is inserted verbatim (`zh-CN` stays `zh-CN`); only generated
/// JavaScript identifiers transliterate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameTemplate(String);

impl FileNameTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, TemplateError> {
        let template = template.into();
        if !template.contains(LANGUAGE_PLACEHOLDER) {
            return Err(TemplateError::MissingPlaceholder(template));
        }
        Ok(Self(template))
    }

    pub fn render(&self, language: &LanguageCode) -> String {
        self.0.replace(LANGUAGE_PLACEHOLDER, language.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_code_verbatim() {
        let template = FileNameTemplate::new("semanticDomains_{lang}.js").unwrap();
        let zh = LanguageCode::new("zh-CN").unwrap();
        assert_eq!(template.render(&zh), "semanticDomains_zh-CN.js");
    }

    #[test]
    fn test_missing_placeholder() {
        assert_eq!(
            FileNameTemplate::new("Ddp4Questions.xml").unwrap_err(),
            TemplateError::MissingPlaceholder("Ddp4Questions.xml".to_string())
        );
    }
}
