//! File-system artifact writer

mod local_writer;

pub use local_writer::LocalArtifactWriter;
