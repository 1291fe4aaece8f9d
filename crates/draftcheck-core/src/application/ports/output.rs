//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `draftcheck-adapters` crate provides implementations.

use crate::domain::DraftSubmission;
use crate::error::DraftcheckResult;

/// Port for loading draft submissions.
///
/// Implemented by:
/// - `draftcheck_adapters::DocumentSource` (one JSON or TOML file)
/// - `draftcheck_adapters::DirectorySource` (every document under a directory)
/// - `draftcheck_adapters::InMemorySource` (testing)
///
/// ## Design Notes
///
/// - Loading is all-or-nothing per source: a malformed document fails the
///   whole source rather than silently dropping drafts
/// - Submissions come back in a stable order
#[cfg_attr(test, mockall::automock)]
pub trait DraftSource: Send + Sync {
    /// Human-readable location, used in reports and error messages.
    fn location(&self) -> String;

    /// Load every submission held by this source.
    fn load(&self) -> DraftcheckResult<Vec<DraftSubmission>>;
}
