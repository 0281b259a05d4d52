//! Display derivation for listing screens.
//!
//! DESIGN
//! ======
//! Screens receive loading/error/list inputs from their parent and never
//! compute them. The rules for combining those inputs live here so the
//! precedence is one explicit enum instead of nested conditionals in markup.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::job::{Job, JobHighlight};

/// Mutually exclusive states of a job list screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error(String),
    Empty,
    Populated,
}

impl DisplayState {
    /// Resolve the state top-down: loading, then error, then empty, then populated.
    #[must_use]
    pub fn resolve(is_loading: bool, error: Option<&str>, job_count: usize) -> Self {
        if is_loading {
            return Self::Loading;
        }
        if let Some(message) = error {
            return Self::Error(message.to_owned());
        }
        if job_count == 0 {
            return Self::Empty;
        }
        Self::Populated
    }
}

/// Column count for a highlight grid, limited to one through three.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GridColumns {
    One,
    Two,
    #[default]
    Three,
}

impl GridColumns {
    /// Clamp an arbitrary count: 0 becomes one column, anything above 3 becomes three.
    #[must_use]
    pub fn from_count(count: u8) -> Self {
        match count {
            0 | 1 => Self::One,
            2 => Self::Two,
            _ => Self::Three,
        }
    }

    #[must_use]
    pub fn count(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::One => "job-grid--cols-1",
            Self::Two => "job-grid--cols-2",
            Self::Three => "job-grid--cols-3",
        }
    }
}

/// Project jobs into highlights, preserving input order.
#[must_use]
pub fn highlights_of(jobs: &[Job]) -> Vec<JobHighlight> {
    jobs.iter().map(JobHighlight::from).collect()
}

/// Resolve a selected card back to its full record.
#[must_use]
pub fn find_job<'a>(jobs: &'a [Job], id: &str) -> Option<&'a Job> {
    jobs.iter().find(|job| job.id == id)
}

/// Featured jobs, or every job when none is featured.
#[must_use]
pub fn featured_or_all(jobs: &[Job]) -> Vec<&Job> {
    let featured: Vec<&Job> = jobs.iter().filter(|job| job.featured).collect();
    if featured.is_empty() { jobs.iter().collect() } else { featured }
}
