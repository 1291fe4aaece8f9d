//! A draft plus its auxiliary data, as handed over by one form submission.

use uuid::Uuid;

use crate::domain::{
    entities::{auxiliary::AuxiliaryData, draft::ProductDraft},
    error::DomainError,
};

/// One submission attempt.
///
/// `label` identifies where the submission came from (a file and index, a
/// form instance) for display. `id` identifies this particular attempt;
/// two submissions of the same draft get different ids.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftSubmission {
    pub id: Uuid,
    pub label: String,
    pub draft: ProductDraft,
    pub auxiliary: AuxiliaryData,
}

impl DraftSubmission {
    /// Create a new submission with a random id.
    pub fn new(label: impl Into<String>, draft: ProductDraft, auxiliary: AuxiliaryData) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            draft,
            auxiliary,
        }
    }

    /// Create with a specific id (for reconstruction from a report).
    pub fn with_id(
        id: Uuid,
        label: impl Into<String>,
        draft: ProductDraft,
        auxiliary: AuxiliaryData,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            draft,
            auxiliary,
        }
    }

    /// Check the submission envelope.
    ///
    /// Checks:
    /// 1. id is not nil
    /// 2. label is not blank
    ///
    /// The draft's own content is judged by `FormValidator`, not here.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_nil() {
            return Err(DomainError::InvalidSubmission("id cannot be nil".into()));
        }
        if self.label.trim().is_empty() {
            return Err(DomainError::InvalidSubmission("label cannot be blank".into()));
        }
        Ok(())
    }
}
