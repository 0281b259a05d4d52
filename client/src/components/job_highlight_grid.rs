//! Grid of job highlight cards.
//!
//! DESIGN
//! ======
//! The grid owns layout only: an empty list renders the placeholder message
//! and nothing else, a non-empty list renders one card per record in input
//! order. Selection is forwarded untouched to the parent.

#[cfg(test)]
#[path = "job_highlight_grid_test.rs"]
mod job_highlight_grid_test;

use leptos::prelude::*;
use listings::{GridColumns, JobHighlight};

use crate::components::job_highlight_card::JobHighlightCard;

pub const DEFAULT_ACTION_LABEL: &str = "View details";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No jobs to show yet.";

#[component]
pub fn JobHighlightGrid(
    #[prop(into)] highlights: Signal<Vec<JobHighlight>>,
    #[prop(optional)] columns: GridColumns,
    #[prop(optional, into)] action_label: Option<String>,
    #[prop(optional, into)] empty_message: Option<String>,
    on_select: Callback<JobHighlight>,
) -> impl IntoView {
    let action_label = action_label.unwrap_or_else(|| DEFAULT_ACTION_LABEL.to_owned());
    let empty_message = empty_message.unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_owned());

    view! {
        <section class="job-grid-container">
            {move || {
                let items = highlights.get();
                if items.is_empty() {
                    return view! { <p class="job-grid__empty">{empty_message.clone()}</p> }.into_any();
                }
                let cards = items
                    .into_iter()
                    .map(|highlight| {
                        view! {
                            <JobHighlightCard
                                highlight=highlight
                                action_label=action_label.clone()
                                on_select=on_select
                            />
                        }
                    })
                    .collect::<Vec<_>>();
                view! { <div class=format!("job-grid {}", columns.css_modifier())>{cards}</div> }.into_any()
            }}
        </section>
    }
}
