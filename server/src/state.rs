//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! job catalog is immutable after startup and shared behind an `Arc`;
//! submitted applications are appended to an in-memory log.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use listings::{Job, JobStatus, find_job};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A submitted application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: Uuid,
    pub job_id: String,
    pub applicant: String,
    pub note: Option<String>,
    /// Receipt time in seconds since the Unix epoch.
    pub received_at: i64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("job not found: {0}")]
    UnknownJob(String),
    #[error("job {job_id} is {} and not accepting applications", .status.label())]
    NotAccepting { job_id: String, status: JobStatus },
    #[error("applicant name is blank")]
    BlankApplicant,
}

const ANONYMOUS_APPLICANT: &str = "anonymous";

/// Shared application state. Clone is required by Axum; fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<Vec<Job>>,
    pub applications: Arc<RwLock<Vec<Application>>>,
}

impl AppState {
    #[must_use]
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs: Arc::new(jobs), applications: Arc::new(RwLock::new(Vec::new())) }
    }

    #[must_use]
    pub fn job(&self, id: &str) -> Option<&Job> {
        find_job(&self.jobs, id)
    }

    /// Record an application for an open job.
    ///
    /// A missing applicant is stored as `"anonymous"`; a present but blank
    /// one is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError`] when the job is unknown, no longer accepts
    /// applications, or the applicant name is blank.
    pub async fn record_application(
        &self,
        job_id: &str,
        applicant: Option<String>,
        note: Option<String>,
    ) -> Result<Application, ApplyError> {
        let job = self.job(job_id).ok_or_else(|| ApplyError::UnknownJob(job_id.to_owned()))?;
        if !job.status.accepts_applications() {
            return Err(ApplyError::NotAccepting { job_id: job_id.to_owned(), status: job.status });
        }
        let applicant = match applicant {
            None => ANONYMOUS_APPLICANT.to_owned(),
            Some(name) if name.trim().is_empty() => return Err(ApplyError::BlankApplicant),
            Some(name) => name.trim().to_owned(),
        };
        let note = note.map(|n| n.trim().to_owned()).filter(|n| !n.is_empty());

        let application = Application {
            id: Uuid::new_v4(),
            job_id: job_id.to_owned(),
            applicant,
            note,
            received_at: time::OffsetDateTime::now_utc().unix_timestamp(),
        };
        self.applications.write().await.push(application.clone());
        Ok(application)
    }

    pub async fn application_count(&self, job_id: &str) -> usize {
        self.applications.read().await.iter().filter(|a| a.job_id == job_id).count()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
