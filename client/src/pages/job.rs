//! Job detail route (`/jobs/:id`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Parent of `JobDetail` in its page variant. Resolves the job from the
//! shared list (fetching it directly on a cold load), submits applications,
//! and turns "back" into navigation to the board.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use listings::Job;

use crate::components::job_detail::{DetailVariant, JobDetail};
use crate::state::jobs::JobsState;

#[component]
pub fn JobPage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let job_id = move || params.read().get("id").unwrap_or_default();
    let job = Memo::new(move |_| {
        let id = job_id();
        jobs.with(|s| s.job_by_id(&id).cloned())
    });
    let fetch_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = job_id();
        if id.is_empty() || jobs.with_untracked(|s| s.job_by_id(&id).is_some()) {
            return;
        }
        load_job(jobs, fetch_error, id);
    });

    let go_back = RwSignal::new(false);
    Effect::new(move || {
        if go_back.get() {
            go_back.set(false);
            navigate("/", NavigateOptions::default());
        }
    });

    let on_back = Callback::new(move |()| go_back.set(true));
    let on_apply = Callback::new(move |job: Job| submit_application(jobs, job.id));

    let is_applying = Signal::derive(move || {
        let id = job_id();
        jobs.with(|s| s.is_applying(&id))
    });
    let has_applied = Signal::derive(move || {
        let id = job_id();
        jobs.with(|s| s.has_applied(&id))
    });
    let apply_error = move || {
        let id = job_id();
        jobs.with(|s| s.apply_error_for(&id).map(str::to_owned))
    };

    view! {
        <div class="job-page">
            {move || match (job.get(), fetch_error.get()) {
                (Some(job), _) => view! {
                    <JobDetail
                        job=job
                        variant=DetailVariant::Page
                        is_applying=is_applying
                        has_applied=has_applied
                        on_back=on_back
                        on_apply=on_apply
                    />
                }
                .into_any(),
                (None, Some(message)) => view! {
                    <div class="job-page__error" role="alert">
                        <p>{message}</p>
                        <a class="btn" href="/">"Back to jobs"</a>
                    </div>
                }
                .into_any(),
                (None, None) => view! {
                    <div class="job-page__loading" role="status">"Loading job..."</div>
                }
                .into_any(),
            }}
            <Show when=move || has_applied.get()>
                <p class="job-page__notice">"Application sent. The restaurant will reach out."</p>
            </Show>
            {move || apply_error().map(|message| view! {
                <p class="job-page__apply-error" role="alert">{message}</p>
            })}
        </div>
    }
}

fn load_job(jobs: RwSignal<JobsState>, fetch_error: RwSignal<Option<String>>, job_id: String) {
    fetch_error.set(None);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_job(&job_id).await {
            Ok(job) => jobs.update(|s| s.upsert_job(job)),
            Err(e) => {
                log::warn!("job {job_id} load failed: {e}");
                fetch_error.set(Some(e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (jobs, job_id);
        fetch_error.set(Some("Jobs can only be loaded in the browser.".to_owned()));
    }
}

fn submit_application(jobs: RwSignal<JobsState>, job_id: String) {
    let mut started = false;
    jobs.update(|s| started = s.begin_apply(&job_id));
    if !started {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let request = crate::net::api::ApplicationRequest::default();
        match crate::net::api::submit_application(&job_id, &request).await {
            Ok(receipt) => {
                log::info!(
                    "application {} sent for job {job_id} at {}",
                    receipt.application_id,
                    receipt.received_at
                );
                jobs.update(|s| s.finish_apply(&job_id));
            }
            Err(e) => {
                log::warn!("application for job {job_id} failed: {e}");
                jobs.update(|s| s.fail_apply(&job_id, e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    jobs.update(|s| s.fail_apply(&job_id, "Applications can only be sent from the browser.".to_owned()));
}
