//! Validation Service - main application orchestrator.
//!
//! This service coordinates the checking workflow:
//! 1. Load submissions from every configured source
//! 2. Apply caller defaults to each draft
//! 3. Run the form rules
//! 4. Collect per-submission reports into a batch report
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::DraftSource},
    domain::{DraftDefaults, DraftSubmission, FormValidator},
    error::DraftcheckResult,
};

use super::report::{BatchReport, SubmissionReport};

/// Main validation service.
///
/// Holds the draft sources and the defaults the surrounding form would seed
/// a draft with. The rules themselves are stateless and live in the domain.
pub struct ValidationService {
    sources: Vec<Box<dyn DraftSource>>,
    defaults: DraftDefaults,
    fail_fast: bool,
}

impl ValidationService {
    /// Create a new service applying `defaults` to every draft.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use draftcheck_core::{application::ValidationService, domain::DraftDefaults};
    ///
    /// let service = ValidationService::new(DraftDefaults::default())
    ///     .with_source(source); // impl DraftSource
    /// let report = service.check_all()?;
    /// ```
    pub fn new(defaults: DraftDefaults) -> Self {
        Self {
            sources: Vec::new(),
            defaults,
            fail_fast: false,
        }
    }

    /// Add a source of submissions.
    pub fn with_source(mut self, source: Box<dyn DraftSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Stop at the first invalid draft.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn defaults(&self) -> &DraftDefaults {
        &self.defaults
    }

    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Load every submission from every source, in source order.
    #[instrument(skip_all, fields(sources = self.sources.len()))]
    pub fn load_all(&self) -> DraftcheckResult<Vec<DraftSubmission>> {
        if self.sources.is_empty() {
            return Err(ApplicationError::NoSources.into());
        }

        let mut submissions = Vec::new();
        for source in &self.sources {
            let loaded = source.load()?;
            debug!(location = %source.location(), count = loaded.len(), "Source loaded");

            for submission in &loaded {
                submission.validate()?;
            }
            submissions.extend(loaded);
        }

        info!(count = submissions.len(), "Submissions loaded");
        Ok(submissions)
    }

    /// Check a single submission.
    ///
    /// Defaults are applied to a copy of the draft; the submission itself is
    /// left untouched.
    #[instrument(skip_all, fields(label = %submission.label))]
    pub fn check(&self, submission: &DraftSubmission) -> SubmissionReport {
        let mut prepared = submission.clone();
        prepared.draft.apply_defaults(&self.defaults);

        let errors = FormValidator::validate_submission(&prepared);
        if errors.is_valid() {
            debug!("Draft passed");
        } else {
            debug!(errors = errors.len(), "Draft failed");
        }

        SubmissionReport::new(&prepared, errors)
    }

    /// Check a list of submissions, honouring fail-fast.
    pub fn check_submissions(&self, submissions: &[DraftSubmission]) -> BatchReport {
        self.check_submissions_with(submissions, |_| {})
    }

    /// Like [`Self::check_submissions`], calling `on_report` after each draft.
    pub fn check_submissions_with<F>(
        &self,
        submissions: &[DraftSubmission],
        mut on_report: F,
    ) -> BatchReport
    where
        F: FnMut(&SubmissionReport),
    {
        let mut reports = Vec::with_capacity(submissions.len());
        let mut stopped_early = false;

        for (index, submission) in submissions.iter().enumerate() {
            let report = self.check(submission);
            on_report(&report);
            let failed = !report.is_valid();
            reports.push(report);

            if failed && self.fail_fast {
                stopped_early = index + 1 < submissions.len();
                if stopped_early {
                    warn!(label = %submission.label, "Stopping at first invalid draft");
                }
                break;
            }
        }

        let mut batch = BatchReport::from_reports(reports);
        batch.stopped_early = stopped_early;
        batch
    }

    /// Load and check everything.
    ///
    /// This is the main use case.
    #[instrument(skip_all)]
    pub fn check_all(&self) -> DraftcheckResult<BatchReport> {
        let submissions = self.load_all()?;
        let batch = self.check_submissions(&submissions);

        info!(
            total = batch.total,
            valid = batch.valid,
            invalid = batch.invalid,
            "Check completed"
        );
        Ok(batch)
    }
}
