//! Job catalog loading.
//!
//! ERROR HANDLING
//! ==============
//! The catalog is read once at startup. A missing or invalid file is fatal.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::path::Path;

use listings::{Job, ListingError, parse_catalog};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read job catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid job catalog {path}: {source}")]
    Listing {
        path: String,
        #[source]
        source: ListingError,
    },
}

/// Read and validate the catalog at `path`.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if the file cannot be read and
/// [`CatalogError::Listing`] if its contents fail validation.
pub async fn load_catalog(path: &Path) -> Result<Vec<Job>, CatalogError> {
    let path_display = path.display().to_string();
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io { path: path_display.clone(), source })?;
    let jobs = parse_catalog(&raw).map_err(|source| CatalogError::Listing { path: path_display.clone(), source })?;

    let featured = jobs.iter().filter(|job| job.featured).count();
    info!(path = %path_display, jobs = jobs.len(), featured, "job catalog loaded");
    Ok(jobs)
}
