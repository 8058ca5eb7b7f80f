//! Language plan for a data build

use semdom_domain::LanguageCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguagePlanError {
    #[error("No languages selected for processing")]
    NoLanguages,
}

/// The languages to process, in order, plus the default (fallback) language.
///
/// The default language does not have to be among the processed languages;
/// it only supplies values the processed languages lack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePlan {
    languages: Vec<LanguageCode>,
    default_language: LanguageCode,
}

impl LanguagePlan {
    /// Create a plan. Repeated languages are processed once, at their first position.
    pub fn new(
        languages: impl IntoIterator<Item = LanguageCode>,
        default_language: LanguageCode,
    ) -> Result<Self, LanguagePlanError> {
        let mut unique: Vec<LanguageCode> = Vec::new();
        for language in languages {
            if !unique.contains(&language) {
                unique.push(language);
            }
        }

        if unique.is_empty() {
            return Err(LanguagePlanError::NoLanguages);
        }

        Ok(Self {
            languages: unique,
            default_language,
        })
    }

    pub fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<LanguageCode> {
        list.iter().map(|c| LanguageCode::new(*c).unwrap()).collect()
    }

    #[test]
    fn test_deduplicates_keeping_order() {
        let plan = LanguagePlan::new(codes(&["fr", "en", "fr", "zh-CN"]), codes(&["en"])[0].clone())
            .unwrap();
        assert_eq!(plan.languages(), codes(&["fr", "en", "zh-CN"]).as_slice());
        assert_eq!(plan.default_language().as_str(), "en");
    }

    #[test]
    fn test_empty_plan_rejected() {
        let err = LanguagePlan::new(Vec::new(), LanguageCode::new("en").unwrap()).unwrap_err();
        assert_eq!(err, LanguagePlanError::NoLanguages);
    }
}
