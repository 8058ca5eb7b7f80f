//! Localized form lookup
//!
//! A localized field is stored as `<field><form ws="LANG">text</form>...</field>`.
//! Matching on `ws` is exact string equality.

use crate::core::language::LanguageCode;
use crate::document::XmlElement;

pub const FORM_ELEMENT: &str = "form";
pub const WS_ATTRIBUTE: &str = "ws";

/// A `<form>` element selected for a field, and whether it came from the
/// fallback language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedForm<'a> {
    pub form: &'a XmlElement,
    pub is_fallback: bool,
}

impl LocalizedForm<'_> {
    /// Trimmed form text; a form without character data yields an empty string
    pub fn trimmed_text(&self) -> String {
        self.form.text().map(str::trim).unwrap_or_default().to_string()
    }
}

/// All `<field>/<form ws=language>` elements under `parent`, in document order
fn matching_forms<'a>(
    parent: &'a XmlElement,
    field: &str,
    language: &LanguageCode,
) -> impl Iterator<Item = &'a XmlElement> {
    parent
        .children_named(field)
        .flat_map(|f| f.children_named(FORM_ELEMENT))
        .filter(move |form| form.attribute(WS_ATTRIBUTE) == Some(language.as_str()))
}

/// First `<field>/<form ws=language>` under `parent`
pub fn localized_form<'a>(
    parent: &'a XmlElement,
    field: &str,
    language: &LanguageCode,
) -> Option<&'a XmlElement> {
    matching_forms(parent, field, language).next()
}

/// The form for `language`, or the form for `fallback` when `language` has none.
///
/// Returns `None` only when neither language has a form for the field.
pub fn localized_form_or_fallback<'a>(
    parent: &'a XmlElement,
    field: &str,
    language: &LanguageCode,
    fallback: &LanguageCode,
) -> Option<LocalizedForm<'a>> {
    if let Some(form) = localized_form(parent, field, language) {
        return Some(LocalizedForm {
            form,
            is_fallback: false,
        });
    }
    localized_form(parent, field, fallback).map(|form| LocalizedForm {
        form,
        is_fallback: true,
    })
}

/// Trimmed texts of every `<field>/<form ws=language>` under `parent`.
///
/// No fallback: a language without forms gets an empty list. Forms without
/// character data are skipped.
pub fn localized_texts(parent: &XmlElement, field: &str, language: &LanguageCode) -> Vec<String> {
    matching_forms(parent, field, language)
        .filter_map(XmlElement::text)
        .map(|text| text.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    fn form(ws: &str, text: &str) -> XmlElement {
        XmlElement::new(FORM_ELEMENT)
            .with_attribute(WS_ATTRIBUTE, ws)
            .with_text(text)
    }

    fn option() -> XmlElement {
        XmlElement::new("option")
            .with_child(
                XmlElement::new("name")
                    .with_child(form("en", "  Sky "))
                    .with_child(form("fr", "Ciel")),
            )
            .with_child(
                XmlElement::new("searchKeys")
                    .with_child(form("en", " sky "))
                    .with_child(form("en", "firmament"))
                    .with_child(XmlElement::new(FORM_ELEMENT).with_attribute(WS_ATTRIBUTE, "en")),
            )
    }

    #[test]
    fn test_requested_language_wins() {
        let option = option();
        let found = localized_form_or_fallback(&option, "name", &lang("fr"), &lang("en")).unwrap();
        assert!(!found.is_fallback);
        assert_eq!(found.trimmed_text(), "Ciel");
    }

    #[test]
    fn test_falls_back_to_default_language() {
        let option = option();
        let found = localized_form_or_fallback(&option, "name", &lang("es"), &lang("en")).unwrap();
        assert!(found.is_fallback);
        assert_eq!(found.trimmed_text(), "Sky");
    }

    #[test]
    fn test_missing_in_both_languages() {
        let option = option();
        assert!(localized_form_or_fallback(&option, "description", &lang("es"), &lang("en")).is_none());
    }

    #[test]
    fn test_exact_ws_match_only() {
        let option = XmlElement::new("option")
            .with_child(XmlElement::new("name").with_child(form("zh-CN", "天空")));
        assert!(localized_form(&option, "name", &lang("zh")).is_none());
        assert!(localized_form(&option, "name", &lang("zh-cn")).is_none());
        assert!(localized_form(&option, "name", &lang("zh-CN")).is_some());
    }

    #[test]
    fn test_localized_texts_no_fallback() {
        let option = option();
        assert_eq!(
            localized_texts(&option, "searchKeys", &lang("en")),
            vec!["sky".to_string(), "firmament".to_string()]
        );
        assert!(localized_texts(&option, "searchKeys", &lang("fr")).is_empty());
    }

    #[test]
    fn test_form_without_text_trims_to_empty() {
        let empty = XmlElement::new(FORM_ELEMENT).with_attribute(WS_ATTRIBUTE, "en");
        let found = LocalizedForm {
            form: &empty,
            is_fallback: false,
        };
        assert_eq!(found.trimmed_text(), "");
    }
}
