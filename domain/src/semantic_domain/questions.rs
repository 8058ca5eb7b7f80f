//! Question extraction

use super::entities::QuestionCatalog;
use crate::core::error::ExtractionError;
use crate::document::{XmlDocument, XmlElement};
use tracing::{debug, warn};

pub const SEMANTIC_DOMAIN_ELEMENT: &str = "semantic-domain";
pub const QUESTION_ELEMENT: &str = "question";
pub const ID_ATTRIBUTE: &str = "id";

/// Collect the questions of every `<semantic-domain>` in document order.
///
/// Questions without text are dropped; duplicates and order are kept.
/// A repeated id replaces the earlier questions at the earlier position.
pub fn extract_questions(document: &XmlDocument) -> Result<QuestionCatalog, ExtractionError> {
    let mut catalog = QuestionCatalog::new();

    for (index, domain) in document.elements_named(SEMANTIC_DOMAIN_ELEMENT).enumerate() {
        let id = domain
            .attribute(ID_ATTRIBUTE)
            .ok_or(ExtractionError::MissingDomainId {
                position: index + 1,
            })?;

        let questions: Vec<String> = domain
            .children_named(QUESTION_ELEMENT)
            .filter_map(XmlElement::text)
            .map(normalize_question_text)
            .filter(|q| !q.is_empty())
            .collect();

        if catalog.insert(id.to_string(), questions).is_some() {
            warn!("Duplicate semantic-domain id '{}' replaces an earlier entry", id);
        }
    }

    debug!("Extracted questions for {} domains", catalog.len());
    Ok(catalog)
}

/// Trim and turn `\r\n` pairs and lone `\r` into `\n`
pub fn normalize_question_text(text: &str) -> String {
    text.trim().replace("\r\n", "\n").replace('\r', "\n")
}
