//! Clickable card for one job highlight.

use leptos::prelude::*;
use listings::JobHighlight;

/// A job highlight card. Activating the card (click, Enter, or Space)
/// invokes `on_select` once with the full highlight.
#[component]
pub fn JobHighlightCard(
    highlight: JobHighlight,
    #[prop(into)] action_label: String,
    on_select: Callback<JobHighlight>,
) -> impl IntoView {
    let featured = highlight.featured;
    let status = highlight.status;
    let aria_label = format!("{} at {}", highlight.title, highlight.restaurant);

    let media = match highlight.image_url.clone() {
        Some(src) => view! {
            <img class="job-card__image" src=src alt=highlight.restaurant.clone() loading="lazy"/>
        }
        .into_any(),
        None => view! {
            <span class="job-card__monogram" aria-hidden="true">{highlight.monogram()}</span>
        }
        .into_any(),
    };

    let tags = highlight
        .tags
        .iter()
        .map(|tag| view! { <li class="job-card__tag">{tag.clone()}</li> })
        .collect::<Vec<_>>();

    let title = highlight.title.clone();
    let restaurant = highlight.restaurant.clone();
    let location = highlight.location.clone();
    let compensation = highlight.compensation.clone();
    let employment = highlight.employment.clone();

    let on_click = {
        let highlight = highlight.clone();
        move |_: leptos::ev::MouseEvent| on_select.run(highlight.clone())
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            on_select.run(highlight.clone());
        }
    };

    view! {
        <article
            class="job-card"
            class:job-card--featured=featured
            role="button"
            tabindex="0"
            aria-label=aria_label
            on:click=on_click
            on:keydown=on_keydown
        >
            <div class="job-card__media">
                {media}
                {featured.then(|| view! { <span class="job-card__featured">"Featured"</span> })}
            </div>
            <div class="job-card__body">
                <h3 class="job-card__title">{title}</h3>
                <p class="job-card__restaurant">{restaurant}</p>
                <p class="job-card__meta">
                    <span class="job-card__location">{location}</span>
                    <span class="job-card__divider" aria-hidden="true">"·"</span>
                    <span class="job-card__employment">{employment}</span>
                </p>
                <p class="job-card__compensation">{compensation}</p>
                <ul class="job-card__tags">{tags}</ul>
            </div>
            <footer class="job-card__footer">
                <span class=format!("job-status {}", status.css_modifier())>{status.label()}</span>
                <span class="job-card__action">{action_label}</span>
            </footer>
        </article>
    }
}
