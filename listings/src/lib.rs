//! Job listing model and display derivation helpers for Brigade.
//!
//! This crate is UI-framework agnostic so the Leptos client and the Axum host
//! can share one definition of a job record, its skill tiers, and the rules
//! that decide what a listing screen shows.

pub mod catalog;
pub mod display;
pub mod job;
pub mod skill;

pub use catalog::parse_catalog;
pub use display::{DisplayState, GridColumns, featured_or_all, find_job, highlights_of};
pub use job::{Job, JobHighlight, JobStatus, RequiredSkill};
pub use skill::{SkillLevel, SkillTier};

/// Error returned when listing data fails validation or parsing.
#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    /// A skill level outside `0..=5`.
    #[error("skill level out of range: {0} (expected 0..=5)")]
    SkillLevelOutOfRange(i32),
    /// A required text field is blank.
    #[error("job {id:?} is missing required field `{field}`")]
    MissingField { id: String, field: &'static str },
    /// A status name that is not one of the known lifecycle labels.
    #[error("unknown job status: {0:?}")]
    UnknownStatus(String),
    /// Two catalog records share an id.
    #[error("duplicate job id: {0}")]
    DuplicateId(String),
    /// The catalog document is not valid JSON for a list of jobs.
    #[error("failed to parse job catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
