//! Job catalog and application routes.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use listings::{Job, JobHighlight, JobStatus, featured_or_all};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::state::{AppState, ApplyError};

#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    pub featured: Option<bool>,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApplicationBody {
    pub applicant: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationReceipt {
    pub application_id: String,
    /// Seconds since the Unix epoch.
    pub received_at: i64,
}

#[derive(Debug, Serialize)]
pub struct ApplicationSummary {
    pub job_id: String,
    pub count: usize,
}

/// Jobs matching the optional filters, in catalog order.
fn filter_jobs(jobs: &[Job], featured: Option<bool>, status: Option<JobStatus>) -> Vec<Job> {
    jobs.iter()
        .filter(|job| featured.is_none_or(|f| job.featured == f))
        .filter(|job| status.is_none_or(|s| job.status == s))
        .cloned()
        .collect()
}

/// `GET /api/jobs`: list jobs, optionally filtered by `featured` and `status`.
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobsQuery>,
) -> Result<Json<Vec<Job>>, StatusCode> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(raw.parse::<JobStatus>().map_err(|_| StatusCode::BAD_REQUEST)?),
        None => None,
    };
    Ok(Json(filter_jobs(&state.jobs, query.featured, status)))
}

/// `GET /api/jobs/:id`: one job.
pub async fn get_job(State(state): State<AppState>, Path(job_id): Path<String>) -> Result<Json<Job>, StatusCode> {
    state.job(&job_id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/highlights`: highlight projections of the featured jobs.
pub async fn list_highlights(State(state): State<AppState>) -> Json<Vec<JobHighlight>> {
    Json(featured_or_all(&state.jobs).into_iter().map(JobHighlight::from).collect())
}

/// `POST /api/jobs/:id/applications`: submit an application.
pub async fn create_application(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(body): Json<ApplicationBody>,
) -> Result<(StatusCode, Json<ApplicationReceipt>), StatusCode> {
    let application = state
        .record_application(&job_id, body.applicant, body.note)
        .await
        .map_err(|e| {
            warn!(job_id = %job_id, error = %e, "application rejected");
            apply_error_to_status(&e)
        })?;

    info!(
        job_id = %application.job_id,
        application_id = %application.id,
        applicant = %application.applicant,
        has_note = application.note.is_some(),
        "application received"
    );
    Ok((
        StatusCode::CREATED,
        Json(ApplicationReceipt {
            application_id: application.id.to_string(),
            received_at: application.received_at,
        }),
    ))
}

/// `GET /api/jobs/:id/applications`: number of applications received for a job.
pub async fn application_summary(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<ApplicationSummary>, StatusCode> {
    if state.job(&job_id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    let count = state.application_count(&job_id).await;
    Ok(Json(ApplicationSummary { job_id, count }))
}

pub(crate) fn apply_error_to_status(err: &ApplyError) -> StatusCode {
    match err {
        ApplyError::UnknownJob(_) => StatusCode::NOT_FOUND,
        ApplyError::NotAccepting { .. } => StatusCode::CONFLICT,
        ApplyError::BlankApplicant => StatusCode::BAD_REQUEST,
    }
}
