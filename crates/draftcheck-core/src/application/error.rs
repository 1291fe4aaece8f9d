//! Application layer errors.
//!
//! These errors represent failures in orchestration (a source that cannot be
//! read, a document that cannot be parsed), not rule violations. A draft
//! that breaks a rule produces a `ValidationErrors` mapping, never an error.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while loading and checking submissions.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The source could not be read at all.
    #[error("Cannot read drafts from {location}: {reason}")]
    SourceUnavailable { location: String, reason: String },

    /// The source was read but its content is not a submission document.
    #[error("Malformed draft document {location}: {reason}")]
    MalformedDocument { location: String, reason: String },

    /// The file extension maps to no known document format.
    #[error("Unsupported draft format '{extension}' at {location}")]
    UnsupportedFormat { location: String, extension: String },

    /// The source exists but holds no submissions.
    #[error("No drafts found in {location}")]
    EmptySource { location: String },

    /// No source was configured on the service.
    #[error("No draft source configured")]
    NoSources,

    /// Source access failed (lock poisoned, etc.).
    #[error("Draft source lock error")]
    SourceLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SourceUnavailable { location, .. } => vec![
                format!("Failed to access: {}", location),
                "Check that the path exists and is readable".into(),
            ],
            Self::MalformedDocument { location, reason } => vec![
                format!("Could not parse {}: {}", location, reason),
                "A document holds a 'draft' table and an optional 'auxiliary' table".into(),
                "Try: draftcheck check --help for the document format".into(),
            ],
            Self::UnsupportedFormat { extension, .. } => vec![
                format!("'.{}' files are not draft documents", extension),
                "Use .json or .toml files".into(),
            ],
            Self::EmptySource { location } => vec![
                format!("{} contains no drafts", location),
                "Point draftcheck at a .json or .toml draft document".into(),
            ],
            Self::NoSources => vec!["Pass at least one file or directory to check".into()],
            Self::SourceLockError => vec![
                "The draft source is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SourceUnavailable { .. } | Self::EmptySource { .. } => ErrorCategory::NotFound,
            Self::MalformedDocument { .. } | Self::UnsupportedFormat { .. } => {
                ErrorCategory::Validation
            }
            Self::NoSources => ErrorCategory::Validation,
            Self::SourceLockError => ErrorCategory::Internal,
        }
    }
}
