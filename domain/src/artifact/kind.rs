//! Artifact kind value object

use crate::core::language::LanguageCode;
use std::fmt;

/// Which catalog an artifact carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Domain definitions (`semanticDomains_<lang>`)
    Domains,
    /// Elicitation questions (`semanticDomainQuestions_<lang>`)
    Questions,
}

impl ArtifactKind {
    /// Every artifact kind, in emission order
    pub const ALL: [ArtifactKind; 2] = [ArtifactKind::Domains, ArtifactKind::Questions];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::Domains => "domains",
            ArtifactKind::Questions => "questions",
        }
    }

    /// Variable name prefix shared by every language
    pub fn variable_prefix(&self) -> &'static str {
        match self {
            ArtifactKind::Domains => "semanticDomains",
            ArtifactKind::Questions => "semanticDomainQuestions",
        }
    }

    /// JavaScript variable holding the catalog for `language`
    pub fn variable_name(&self, language: &LanguageCode) -> String {
        format!("{}_{}", self.variable_prefix(), language.identifier_suffix())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
