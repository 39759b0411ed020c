//! Shared application state for the examprep server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use examprep_core::{ExamAssembler, ExamFormat, QuestionBank, Sampler, ThreadRngSampler};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable question bank, loaded before the server starts
    pub bank: Arc<QuestionBank>,
    /// Random source for practice and exam draws
    pub sampler: Arc<dyn Sampler>,
    /// Mock exam size, pass mark and time limit
    pub format: ExamFormat,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state for a bank with the standard exam format and a thread-local sampler
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_components(Arc::new(bank), Arc::new(ThreadRngSampler), ExamFormat::STANDARD)
    }

    /// Create AppState with custom components (for testing)
    pub fn with_components(
        bank: Arc<QuestionBank>,
        sampler: Arc<dyn Sampler>,
        format: ExamFormat,
    ) -> Self {
        Self {
            bank,
            sampler,
            format,
            started_at: Utc::now(),
        }
    }

    /// Replace the sampler
    #[must_use]
    pub fn with_sampler(mut self, sampler: Arc<dyn Sampler>) -> Self {
        self.sampler = sampler;
        self
    }

    /// Exam operations over this state's bank and format
    pub fn exams(&self) -> ExamAssembler<'_> {
        ExamAssembler::new(&self.bank, self.format)
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
