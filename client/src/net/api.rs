//! REST API helpers for the job board endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since pages only fetch after
//! hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>` with a message fit for display, so
//! pages can put failures straight into `JobsState` without panicking.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use listings::Job;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/jobs/{id}/applications`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Response of `POST /api/jobs/{id}/applications`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationReceipt {
    pub application_id: String,
    /// Server receive time, seconds since the Unix epoch.
    #[serde(default)]
    pub received_at: i64,
}

#[cfg(any(test, feature = "hydrate"))]
const JOBS_ENDPOINT: &str = "/api/jobs";

#[cfg(any(test, feature = "hydrate"))]
fn job_endpoint(job_id: &str) -> String {
    format!("{JOBS_ENDPOINT}/{job_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn applications_endpoint(job_id: &str) -> String {
    format!("{JOBS_ENDPOINT}/{job_id}/applications")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(what: &str, status: u16) -> String {
    match status {
        404 => format!("{what} failed: not found"),
        409 => format!("{what} failed: this job is no longer accepting applications"),
        _ => format!("{what} failed: {status}"),
    }
}

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "not available during server rendering";

/// Fetch every job from `GET /api/jobs`.
pub async fn fetch_jobs() -> Result<Vec<Job>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(JOBS_ENDPOINT)
            .send()
            .await
            .map_err(|e| format!("loading jobs failed: {e}"))?;
        if !resp.ok() {
            return Err(status_failed_message("loading jobs", resp.status()));
        }
        resp.json::<Vec<Job>>()
            .await
            .map_err(|e| format!("loading jobs failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(UNAVAILABLE.to_owned())
    }
}

/// Fetch one job from `GET /api/jobs/{id}`.
pub async fn fetch_job(job_id: &str) -> Result<Job, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&job_endpoint(job_id))
            .send()
            .await
            .map_err(|e| format!("loading job failed: {e}"))?;
        if !resp.ok() {
            return Err(status_failed_message("loading job", resp.status()));
        }
        resp.json::<Job>().await.map_err(|e| format!("loading job failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = job_id;
        Err(UNAVAILABLE.to_owned())
    }
}

/// Submit an application via `POST /api/jobs/{id}/applications`.
pub async fn submit_application(job_id: &str, request: &ApplicationRequest) -> Result<ApplicationReceipt, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&applications_endpoint(job_id))
            .json(request)
            .map_err(|e| format!("application failed: {e}"))?
            .send()
            .await
            .map_err(|e| format!("application failed: {e}"))?;
        if !resp.ok() {
            return Err(status_failed_message("application", resp.status()));
        }
        resp.json::<ApplicationReceipt>()
            .await
            .map_err(|e| format!("application failed: {e}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (job_id, request);
        Err(UNAVAILABLE.to_owned())
    }
}
