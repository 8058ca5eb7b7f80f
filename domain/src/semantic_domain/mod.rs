//! Semantic domain extraction
//!
//! Projects the two XML sources into ordered record catalogs:
//!
//! - [`definitions`]: `<option>` records of the definitions document into a
//!   [`DomainCatalog`] for one target language
//! - [`questions`]: `<semantic-domain>` records of a per-language questions
//!   document into a [`QuestionCatalog`]
//! - [`localized`]: `ws`-attribute form lookup with default-language fallback

pub mod definitions;
pub mod entities;
pub mod localized;
pub mod questions;

pub use definitions::extract_domain_definitions;
pub use entities::{DomainCatalog, DomainRecord, QuestionCatalog, ScalarField};
pub use localized::{LocalizedForm, localized_form, localized_form_or_fallback, localized_texts};
pub use questions::{extract_questions, normalize_question_text};
