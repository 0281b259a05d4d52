//! Job list screen: header plus exactly one of loading, error, empty, or grid.
//!
//! DESIGN
//! ======
//! Every flag is supplied by the parent. Which body renders is decided by
//! `DisplayState::resolve`, so simultaneous flags (loading while an old error
//! is still set, for example) have one unambiguous outcome.

#[cfg(test)]
#[path = "job_list_screen_test.rs"]
mod job_list_screen_test;

use leptos::prelude::*;
use listings::{DisplayState, GridColumns, Job, JobHighlight, find_job, highlights_of};

use crate::components::job_highlight_grid::JobHighlightGrid;

pub const DEFAULT_TITLE: &str = "Open positions";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No open positions right now. Check back soon.";

#[component]
pub fn JobListScreen(
    #[prop(into)] jobs: Signal<Vec<Job>>,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional, into)] empty_message: Option<String>,
    #[prop(optional)] columns: Option<Signal<GridColumns>>,
    on_job_select: Callback<Job>,
    #[prop(optional)] on_retry: Option<Callback<()>>,
    #[prop(optional)] on_create_job: Option<Callback<()>>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
    let empty_message = empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_owned());

    let display = Memo::new(move |_| {
        error.with(|err| DisplayState::resolve(is_loading.get(), err.as_deref(), jobs.with(Vec::len)))
    });
    let highlights = Signal::derive(move || jobs.with(|list| highlights_of(list)));

    // Cards only know their highlight; hand the parent the full record.
    let on_select = Callback::new(move |highlight: JobHighlight| {
        let selected = jobs.with_untracked(|list| find_job(list, &highlight.id).cloned());
        if let Some(job) = selected {
            on_job_select.run(job);
        }
    });

    // Offered only from the empty state.
    let create_button = move || {
        on_create_job.map(|on_create| {
            view! {
                <button class="btn btn--primary job-list__create" on:click=move |_| on_create.run(())>
                    "Post a job"
                </button>
            }
        })
    };

    let body = move || match display.get() {
        DisplayState::Loading => view! {
            <div class="job-list__loading" role="status" aria-live="polite">
                <span class="spinner" aria-hidden="true"></span>
                "Loading jobs..."
            </div>
        }
        .into_any(),
        DisplayState::Error(message) => view! {
            <div class="job-list__error" role="alert">
                <p class="job-list__error-message">{message}</p>
                {on_retry.map(|retry| {
                    view! {
                        <button class="btn job-list__retry" on:click=move |_| retry.run(())>
                            "Try again"
                        </button>
                    }
                })}
            </div>
        }
        .into_any(),
        DisplayState::Empty => view! {
            <div class="job-list__empty">
                <p>{empty_message.clone()}</p>
                {create_button()}
            </div>
        }
        .into_any(),
        DisplayState::Populated => {
            let columns = columns.map_or_else(GridColumns::default, |c| c.get());
            view! { <JobHighlightGrid highlights=highlights columns=columns on_select=on_select/> }.into_any()
        }
    };

    view! {
        <div class="job-list">
            <header class="job-list__header">
                <div class="job-list__heading">
                    <h1 class="job-list__title">{title}</h1>
                    {subtitle.map(|text| view! { <p class="job-list__subtitle">{text}</p> })}
                </div>
            </header>
            <div class="job-list__body">{body}</div>
        </div>
    }
}
