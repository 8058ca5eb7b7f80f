//! Application-level configuration.
//!
//! - [`LanguagePlan`]: which languages a build processes and which one
//!   fills in missing localized values

pub mod language_plan;

pub use language_plan::{LanguagePlan, LanguagePlanError};
