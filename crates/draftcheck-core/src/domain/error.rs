// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ProductField;

/// Root domain error type.
///
/// These are structural failures (a draft or key that cannot be understood).
/// A draft that merely breaks a business rule is NOT an error: rule
/// violations are reported as data through `ValidationErrors`.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Input Errors (400-level equivalent)
    // ========================================================================
    #[error("unknown product field '{field}'")]
    UnknownField { field: String },

    #[error("unknown product status '{status}'")]
    InvalidStatus { status: String },

    #[error("Invalid submission: {0}")]
    InvalidSubmission(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("'{field}' is not a field of the product draft")]
    NotADraftField { field: ProductField },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownField { field } => vec![
                format!("'{}' is not a product field", field),
                format!(
                    "Known fields: {}",
                    ProductField::ALL
                        .iter()
                        .map(ProductField::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ],
            Self::InvalidStatus { status } => vec![
                format!("'{}' is not a product status", status),
                "Use one of: draft, active, inactive".into(),
            ],
            Self::InvalidSubmission(msg) => vec![
                "Check the submission document".into(),
                format!("Details: {}", msg),
            ],
            Self::NotADraftField { .. } => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownField { .. } | Self::InvalidStatus { .. } => ErrorCategory::Validation,
            Self::InvalidSubmission(_) => ErrorCategory::Validation,
            Self::NotADraftField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
