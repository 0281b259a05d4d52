use super::*;
use crate::state::test_helpers::{job, test_app_state};

fn ids(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|j| j.id.as_str()).collect()
}

// =============================================================
// filter_jobs
// =============================================================

#[test]
fn filter_jobs_without_filters_keeps_catalog_order() {
    let state = test_app_state();
    let all = filter_jobs(&state.jobs, None, None);
    assert_eq!(ids(&all), vec!["open-featured", "open-plain", "filled"]);
}

#[test]
fn filter_jobs_by_featured_and_status() {
    let state = test_app_state();
    assert_eq!(ids(&filter_jobs(&state.jobs, Some(true), None)), vec!["open-featured"]);
    assert_eq!(
        ids(&filter_jobs(&state.jobs, Some(false), None)),
        vec!["open-plain", "filled"]
    );
    assert_eq!(ids(&filter_jobs(&state.jobs, None, Some(JobStatus::Filled))), vec!["filled"]);
    assert!(filter_jobs(&state.jobs, Some(true), Some(JobStatus::Filled)).is_empty());
}

// =============================================================
// Handlers
// =============================================================

#[tokio::test]
async fn list_jobs_rejects_unknown_status() {
    let query = JobsQuery { featured: None, status: Some("paused".to_owned()) };
    let result = list_jobs(State(test_app_state()), Query(query)).await;
    assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
}

#[tokio::test]
async fn list_jobs_applies_status_filter() {
    let query = JobsQuery { featured: None, status: Some("open".to_owned()) };
    let Json(jobs) = list_jobs(State(test_app_state()), Query(query)).await.expect("ok");
    assert_eq!(ids(&jobs), vec!["open-featured", "open-plain"]);
}

#[tokio::test]
async fn get_job_returns_record_or_404() {
    let Json(found) = get_job(State(test_app_state()), Path("filled".to_owned()))
        .await
        .expect("job exists");
    assert_eq!(found.status, JobStatus::Filled);

    let missing = get_job(State(test_app_state()), Path("ghost".to_owned())).await;
    assert_eq!(missing.err(), Some(StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn highlights_prefer_featured_jobs() {
    let Json(highlights) = list_highlights(State(test_app_state())).await;
    assert_eq!(highlights.len(), 1);
    assert_eq!(highlights[0].id, "open-featured");

    let plain = AppState::new(vec![job("a", JobStatus::Open, false), job("b", JobStatus::Open, false)]);
    let Json(highlights) = list_highlights(State(plain)).await;
    assert_eq!(highlights.len(), 2);
}

#[tokio::test]
async fn create_application_returns_created_receipt() {
    let state = test_app_state();
    let (status, Json(receipt)) = create_application(
        State(state.clone()),
        Path("open-plain".to_owned()),
        Json(ApplicationBody::default()),
    )
    .await
    .expect("application accepted");
    assert_eq!(status, StatusCode::CREATED);
    assert!(uuid::Uuid::parse_str(&receipt.application_id).is_ok());
    assert_eq!(state.application_count("open-plain").await, 1);
}

#[tokio::test]
async fn create_application_maps_errors_to_statuses() {
    let state = test_app_state();
    let unknown = create_application(
        State(state.clone()),
        Path("ghost".to_owned()),
        Json(ApplicationBody::default()),
    )
    .await;
    assert_eq!(unknown.err(), Some(StatusCode::NOT_FOUND));

    let filled = create_application(
        State(state.clone()),
        Path("filled".to_owned()),
        Json(ApplicationBody::default()),
    )
    .await;
    assert_eq!(filled.err(), Some(StatusCode::CONFLICT));

    let blank = create_application(
        State(state),
        Path("open-plain".to_owned()),
        Json(ApplicationBody { applicant: Some("   ".to_owned()), note: None }),
    )
    .await;
    assert_eq!(blank.err(), Some(StatusCode::BAD_REQUEST));
}

#[test]
fn apply_error_to_status_covers_every_variant() {
    assert_eq!(
        apply_error_to_status(&ApplyError::UnknownJob("x".to_owned())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        apply_error_to_status(&ApplyError::NotAccepting { job_id: "x".to_owned(), status: JobStatus::Closed }),
        StatusCode::CONFLICT
    );
    assert_eq!(apply_error_to_status(&ApplyError::BlankApplicant), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn receipt_carries_receive_time() {
    let (_, Json(receipt)) = create_application(
        State(test_app_state()),
        Path("open-featured".to_owned()),
        Json(ApplicationBody { applicant: Some("Noor".to_owned()), note: Some("Can start Monday".to_owned()) }),
    )
    .await
    .expect("application accepted");
    assert!(receipt.received_at > 0);
}

#[tokio::test]
async fn application_summary_counts_per_job() {
    let state = test_app_state();
    for _ in 0..2 {
        create_application(
            State(state.clone()),
            Path("open-plain".to_owned()),
            Json(ApplicationBody::default()),
        )
        .await
        .expect("application accepted");
    }

    let Json(plain) = application_summary(State(state.clone()), Path("open-plain".to_owned()))
        .await
        .expect("known job");
    assert_eq!(plain.job_id, "open-plain");
    assert_eq!(plain.count, 2);

    let Json(featured) = application_summary(State(state.clone()), Path("open-featured".to_owned()))
        .await
        .expect("known job");
    assert_eq!(featured.count, 0);

    let missing = application_summary(State(state), Path("ghost".to_owned())).await;
    assert_eq!(missing.err(), Some(StatusCode::NOT_FOUND));
}
