//! In-memory draft source.

use std::sync::{Arc, RwLock};

use draftcheck_core::{
    application::{ApplicationError, ports::DraftSource},
    domain::DraftSubmission,
    error::DraftcheckResult,
};

/// Thread-safe in-memory source, for embedding and tests.
#[derive(Clone, Default)]
pub struct InMemorySource {
    inner: Arc<RwLock<Vec<DraftSubmission>>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submissions(submissions: impl IntoIterator<Item = DraftSubmission>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(submissions.into_iter().collect())),
        }
    }

    /// Add a submission after validating its envelope.
    pub fn push(&self, submission: DraftSubmission) -> DraftcheckResult<()> {
        submission.validate()?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SourceLockError)?;
        inner.push(submission);
        Ok(())
    }

    pub fn len(&self) -> DraftcheckResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::SourceLockError)?;
        Ok(inner.len())
    }

    pub fn is_empty(&self) -> DraftcheckResult<bool> {
        Ok(self.len()? == 0)
    }

    pub fn clear(&self) -> DraftcheckResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SourceLockError)?;
        inner.clear();
        Ok(())
    }
}

impl DraftSource for InMemorySource {
    fn location(&self) -> String {
        "memory".into()
    }

    fn load(&self) -> DraftcheckResult<Vec<DraftSubmission>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::SourceLockError)?;
        Ok(inner.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftcheck_core::domain::{AuxiliaryData, ProductDraft};
    use draftcheck_core::error::DraftcheckError;

    fn submission(label: &str) -> DraftSubmission {
        DraftSubmission::new(label, ProductDraft::default(), AuxiliaryData::default())
    }

    #[test]
    fn push_and_load() {
        let source = InMemorySource::new();
        assert!(source.is_empty().unwrap());

        source.push(submission("one")).unwrap();
        source.push(submission("two")).unwrap();

        let loaded = source.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].label, "two");
    }

    #[test]
    fn clones_share_storage() {
        let source = InMemorySource::new();
        let other = source.clone();
        source.push(submission("shared")).unwrap();
        assert_eq!(other.len().unwrap(), 1);

        other.clear().unwrap();
        assert!(source.is_empty().unwrap());
    }

    #[test]
    fn poisoned_lock_is_reported_not_empty() {
        let source = InMemorySource::with_submissions([submission("one")]);
        let shared = source.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.inner.write().unwrap();
            panic!("poison the lock");
        })
        .join();

        let lock_error = |r: DraftcheckResult<_>| {
            matches!(
                r,
                Err(DraftcheckError::Application(ApplicationError::SourceLockError))
            )
        };
        assert!(lock_error(source.len().map(|_| ())));
        assert!(lock_error(source.is_empty().map(|_| ())));
        assert!(lock_error(source.load().map(|_| ())));
    }

    #[test]
    fn blank_label_is_rejected() {
        let source = InMemorySource::new();
        assert!(matches!(
            source.push(submission("  ")),
            Err(DraftcheckError::Domain(_))
        ));
    }
}
