//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod artifact_sink;
pub mod document_source;
pub mod progress;
