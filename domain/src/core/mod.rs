//! Core domain concepts shared across all subdomains.
//!
//! - [`language::LanguageCode`]: a writing-system code such as `en` or `zh-CN`
//! - [`error::DomainError`] / [`error::ExtractionError`]: domain-level errors

pub mod error;
pub mod language;
