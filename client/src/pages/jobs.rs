//! Job board landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route is the parent of `JobListScreen`: it fetches the job list once
//! hydrated, re-fetches on retry, and turns card selection into navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use listings::Job;

use crate::components::job_list_screen::JobListScreen;
use crate::state::jobs::JobsState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn JobsPage() -> impl IntoView {
    let jobs = expect_context::<RwSignal<JobsState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    // Fetch once per app session; returning to the board reuses the list.
    Effect::new(move || {
        if !jobs.with_untracked(|s| s.fetched || s.loading) {
            load_jobs(jobs);
        }
    });

    let selected_job_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(job_id) = selected_job_id.get() {
            selected_job_id.set(None);
            navigate(&format!("/jobs/{job_id}"), NavigateOptions::default());
        }
    });

    let on_job_select = Callback::new(move |job: Job| selected_job_id.set(Some(job.id)));
    let on_retry = Callback::new(move |()| load_jobs(jobs));

    let job_list = Signal::derive(move || jobs.with(|s| s.items.clone()));
    let is_loading = Signal::derive(move || jobs.with(JobsState::is_loading));
    let error = Signal::derive(move || jobs.with(|s| s.error.clone()));
    let columns = Signal::derive(move || ui.with(|u| u.grid_columns));

    view! {
        <div class="jobs-page">
            <header class="jobs-page__toolbar toolbar">
                <span class="toolbar__brand">"Brigade"</span>
                <a class="toolbar__link" href="/about">"About"</a>
                <span class="toolbar__spacer"></span>
                <ColumnPicker ui=ui/>
                <button
                    class="btn toolbar__dark-toggle"
                    title="Toggle dark mode"
                    on:click=move |_| {
                        let next = dark_mode::toggle(ui.get_untracked().theme);
                        ui.update(|u| u.theme = next);
                    }
                >
                    {move || ui.get().theme.toggle_glyph()}
                </button>
            </header>
            <JobListScreen
                jobs=job_list
                is_loading=is_loading
                error=error
                subtitle="Kitchen and front-of-house roles near you"
                columns=columns
                on_job_select=on_job_select
                on_retry=on_retry
            />
        </div>
    }
}

/// Segmented control for the highlight grid density.
#[component]
fn ColumnPicker(ui: RwSignal<UiState>) -> impl IntoView {
    let buttons = UiState::COLUMN_CHOICES
        .into_iter()
        .map(|choice| {
            view! {
                <button
                    class="btn toolbar__columns-option"
                    class:toolbar__columns-option--active=move || ui.get().grid_columns == choice
                    title=format!("{} per row", choice.count())
                    on:click=move |_| ui.update(|u| u.grid_columns = choice)
                >
                    {choice.count()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="toolbar__columns" role="group" aria-label="Cards per row">{buttons}</div> }
}

/// Start a list load and settle it from the REST response.
fn load_jobs(jobs: RwSignal<JobsState>) {
    let mut rev = 0;
    jobs.update(|s| rev = s.begin_load());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_jobs().await {
            Ok(items) => {
                log::debug!("loaded {} jobs", items.len());
                jobs.update(|s| s.finish_load(rev, items));
            }
            Err(e) => {
                log::warn!("job list load failed: {e}");
                jobs.update(|s| s.fail_load(rev, e));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    jobs.update(|s| s.fail_load(rev, "Jobs can only be loaded in the browser.".to_owned()));
}
