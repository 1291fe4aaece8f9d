//! Infrastructure adapters for draftcheck.
//!
//! This crate implements the ports defined in `draftcheck-core::application::ports`.
//! It contains all file I/O and document parsing.

pub mod document;
pub mod source;

// Re-export commonly used adapters
pub use document::{DocumentFormat, SubmissionDocument, parse_submissions};
pub use source::{DirectorySource, DocumentSource, InMemorySource, source_for_path};
