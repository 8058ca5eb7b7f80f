//! Domain-definition extraction

use super::entities::{DomainCatalog, DomainRecord, ScalarField};
use super::localized::{localized_form_or_fallback, localized_texts};
use crate::core::error::ExtractionError;
use crate::core::language::LanguageCode;
use crate::document::{XmlDocument, XmlElement};
use tracing::{debug, trace, warn};

pub const OPTION_ELEMENT: &str = "option";
pub const KEY_ELEMENT: &str = "key";
pub const SEARCH_KEYS_ELEMENT: &str = "searchKeys";

/// Project every `<option>` of the definitions document into `language`.
///
/// Options are visited in document order, nested options included, and the
/// catalog keeps that order. Scalar fields missing in `language` are taken
/// from `default_language`; search keys never are.
///
/// A repeated key replaces the earlier record in place, so the catalog
/// still holds each key once at its first position.
pub fn extract_domain_definitions(
    document: &XmlDocument,
    language: &LanguageCode,
    default_language: &LanguageCode,
) -> Result<DomainCatalog, ExtractionError> {
    let mut catalog = DomainCatalog::new();

    for (index, option) in document.elements_named(OPTION_ELEMENT).enumerate() {
        let key = option_key(option, index + 1)?;
        let record = build_record(option, &key, language, default_language)?;

        if catalog.insert(key.clone(), record).is_some() {
            warn!("Duplicate domain key '{}' replaces an earlier option", key);
        }
    }

    debug!(
        "Extracted {} domain records for language {}",
        catalog.len(),
        language
    );
    Ok(catalog)
}

fn option_key(option: &XmlElement, position: usize) -> Result<String, ExtractionError> {
    option
        .child(KEY_ELEMENT)
        .and_then(XmlElement::text)
        .map(str::to_string)
        .ok_or(ExtractionError::MissingKey { position })
}

fn build_record(
    option: &XmlElement,
    key: &str,
    language: &LanguageCode,
    default_language: &LanguageCode,
) -> Result<DomainRecord, ExtractionError> {
    let scalar = |field: ScalarField| resolve_scalar(option, key, field, language, default_language);

    Ok(DomainRecord {
        name: scalar(ScalarField::Name)?,
        abbreviation: scalar(ScalarField::Abbreviation)?,
        description: scalar(ScalarField::Description)?,
        search_keys: localized_texts(option, SEARCH_KEYS_ELEMENT, language),
    })
}

fn resolve_scalar(
    option: &XmlElement,
    key: &str,
    field: ScalarField,
    language: &LanguageCode,
    default_language: &LanguageCode,
) -> Result<String, ExtractionError> {
    let found = localized_form_or_fallback(option, field.element_name(), language, default_language)
        .ok_or_else(|| ExtractionError::MissingLocalizedField {
            key: key.to_string(),
            field,
            language: language.to_string(),
            default_language: default_language.to_string(),
        })?;

    if found.is_fallback {
        trace!("Domain '{}' {} falls back to {}", key, field, default_language);
    }
    Ok(found.trimmed_text())
}
