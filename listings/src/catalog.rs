//! Job catalog document parsing.
//!
//! A catalog is a JSON array of [`Job`] records. Every record is validated
//! and ids must be unique, so downstream lookups by id are unambiguous.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashSet;

use crate::ListingError;
use crate::job::Job;

/// Parse and validate a catalog document.
///
/// # Errors
///
/// Returns [`ListingError::Parse`] for malformed JSON (including out-of-range
/// skill levels), [`ListingError::MissingField`] for a blank required field,
/// and [`ListingError::DuplicateId`] when two records share an id.
pub fn parse_catalog(raw: &str) -> Result<Vec<Job>, ListingError> {
    let jobs: Vec<Job> = serde_json::from_str(raw)?;
    validate_catalog(&jobs)?;
    Ok(jobs)
}

/// Validate already-decoded records.
///
/// # Errors
///
/// See [`parse_catalog`].
pub fn validate_catalog(jobs: &[Job]) -> Result<(), ListingError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        job.validate()?;
        if !seen.insert(job.id.as_str()) {
            return Err(ListingError::DuplicateId(job.id.clone()));
        }
    }
    Ok(())
}
