//! Report DTOs produced by the validation service.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{DraftSubmission, ProductStatus, ValidationErrors};

/// Outcome of checking one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionReport {
    pub id: Uuid,
    pub label: String,
    pub status: ProductStatus,
    pub valid: bool,
    pub errors: ValidationErrors,
    pub detail_count: usize,
    pub variant_count: usize,
    pub image_count: usize,
    pub faq_count: usize,
}

impl SubmissionReport {
    pub fn new(submission: &DraftSubmission, errors: ValidationErrors) -> Self {
        Self {
            id: submission.id,
            label: submission.label.clone(),
            status: submission.draft.status(),
            valid: errors.is_valid(),
            errors,
            detail_count: submission.auxiliary.simple_fields.len(),
            variant_count: submission.auxiliary.variants.len(),
            image_count: submission.auxiliary.images.len(),
            faq_count: submission.auxiliary.faqs.len(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// Outcome of checking a batch of submissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    /// Set when checking stopped at the first invalid draft.
    pub stopped_early: bool,
    pub reports: Vec<SubmissionReport>,
}

impl BatchReport {
    pub fn from_reports(reports: Vec<SubmissionReport>) -> Self {
        let valid = reports.iter().filter(|r| r.is_valid()).count();
        Self {
            total: reports.len(),
            valid,
            invalid: reports.len() - valid,
            stopped_early: false,
            reports,
        }
    }

    /// `true` when every checked draft passed.
    pub fn is_clean(&self) -> bool {
        self.invalid == 0
    }

    pub fn invalid_reports(&self) -> impl Iterator<Item = &SubmissionReport> {
        self.reports.iter().filter(|r| !r.is_valid())
    }
}
