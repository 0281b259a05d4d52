//! Job list and application state shared by the job pages.
//!
//! DESIGN
//! ======
//! Pages own every side effect (fetching, submitting); components only read
//! slices of this state through props. Each list load carries a revision so a
//! slow response from an earlier load cannot overwrite a newer one.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use listings::{Job, find_job};

/// Shared job-board state backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct JobsState {
    pub items: Vec<Job>,
    pub loading: bool,
    /// Whether at least one list load has completed (successfully or not).
    pub fetched: bool,
    pub error: Option<String>,
    pub load_rev: u64,
    /// Job id with an application request in flight.
    pub applying: Option<String>,
    /// Job ids with a submitted application, in submission order.
    pub applied: Vec<String>,
    /// Last failed application as `(job_id, message)`.
    pub apply_error: Option<(String, String)>,
}

impl JobsState {
    /// Start a list load; returns the revision the response must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.load_rev += 1;
        self.loading = true;
        self.error = None;
        self.load_rev
    }

    /// Apply a successful list response. Stale revisions are ignored.
    pub fn finish_load(&mut self, rev: u64, items: Vec<Job>) {
        if rev != self.load_rev {
            return;
        }
        self.items = items;
        self.loading = false;
        self.fetched = true;
        self.error = None;
    }

    /// Record a failed list load. Stale revisions are ignored.
    pub fn fail_load(&mut self, rev: u64, message: String) {
        if rev != self.load_rev {
            return;
        }
        self.loading = false;
        self.fetched = true;
        self.error = Some(message);
    }

    /// Whether the list screen should show its loading indicator.
    ///
    /// Before the first load completes the list is treated as loading so the
    /// server-rendered page never flashes the empty state.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading || !self.fetched
    }

    #[must_use]
    pub fn job_by_id(&self, id: &str) -> Option<&Job> {
        find_job(&self.items, id)
    }

    /// Insert or replace a single job fetched outside a list load.
    pub fn upsert_job(&mut self, job: Job) {
        match self.items.iter_mut().find(|j| j.id == job.id) {
            Some(existing) => *existing = job,
            None => self.items.push(job),
        }
    }

    /// Mark an application as in flight.
    ///
    /// Returns `false` (and changes nothing) when another application is
    /// already in flight or this job was already applied to.
    pub fn begin_apply(&mut self, job_id: &str) -> bool {
        if self.applying.is_some() || self.has_applied(job_id) {
            return false;
        }
        self.applying = Some(job_id.to_owned());
        self.apply_error = None;
        true
    }

    pub fn finish_apply(&mut self, job_id: &str) {
        if self.applying.as_deref() == Some(job_id) {
            self.applying = None;
        }
        if !self.has_applied(job_id) {
            self.applied.push(job_id.to_owned());
        }
    }

    pub fn fail_apply(&mut self, job_id: &str, message: String) {
        if self.applying.as_deref() == Some(job_id) {
            self.applying = None;
        }
        self.apply_error = Some((job_id.to_owned(), message));
    }

    /// Failure message of the last application, if it was for this job.
    #[must_use]
    pub fn apply_error_for(&self, job_id: &str) -> Option<&str> {
        self.apply_error
            .as_ref()
            .filter(|(id, _)| id == job_id)
            .map(|(_, message)| message.as_str())
    }

    #[must_use]
    pub fn is_applying(&self, job_id: &str) -> bool {
        self.applying.as_deref() == Some(job_id)
    }

    #[must_use]
    pub fn has_applied(&self, job_id: &str) -> bool {
        self.applied.iter().any(|id| id == job_id)
    }
}
