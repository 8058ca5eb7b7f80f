//! Semantic domain records

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain records keyed by domain key, in source document order
pub type DomainCatalog = IndexMap<String, DomainRecord>;

/// Question lists keyed by domain identifier, in source document order
pub type QuestionCatalog = IndexMap<String, Vec<String>>;

/// One semantic domain projected into a single language.
///
/// Field order is the serialized order of the generated data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub name: String,
    pub abbreviation: String,
    pub description: String,
    /// Target-language search keys only; never filled from the default language
    pub search_keys: Vec<String>,
}

/// The scalar, fallback-capable fields of a domain record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Name,
    Abbreviation,
    Description,
}

impl ScalarField {
    /// Element name of the field inside an `<option>`
    pub fn element_name(&self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Abbreviation => "abbreviation",
            ScalarField::Description => "description",
        }
    }
}

impl fmt::Display for ScalarField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}
