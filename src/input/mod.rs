//! Reading networks from text input.
//!
//! - [`ingest`] - parse lines into a [`crate::models::NetworkRegistry`]

mod ingest;

pub use ingest::{ingest, ingest_file, ingest_reader, IngestReport, RejectedLine};
