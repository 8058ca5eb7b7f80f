//! File-system document source

mod local_source;

pub use local_source::LocalDocumentSource;
