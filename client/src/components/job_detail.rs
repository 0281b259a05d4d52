//! Job detail view shared by the page and embedded-screen layouts.
//!
//! DESIGN
//! ======
//! One component serves both hosts; `DetailVariant` only changes the primary
//! action wording and the layout modifier. The parent owns every side effect:
//! each control invokes its callback once and passes the job back unchanged.

#[cfg(test)]
#[path = "job_detail_test.rs"]
mod job_detail_test;

use leptos::prelude::*;
use listings::Job;

use crate::components::skill_badge::{BadgeSize, SkillBadge};
use crate::util::markdown::render_markdown_html;

/// Host layout for [`JobDetail`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailVariant {
    /// Full-page route with an "Apply now" action.
    #[default]
    Page,
    /// Embedded screen with a "Schedule interview" action.
    Screen,
}

impl DetailVariant {
    fn css_modifier(self) -> &'static str {
        match self {
            Self::Page => "job-detail--page",
            Self::Screen => "job-detail--screen",
        }
    }
}

/// Label for the primary action, swapped while the request is in flight.
pub fn primary_action_label(variant: DetailVariant, busy: bool) -> &'static str {
    match (variant, busy) {
        (DetailVariant::Page, false) => "Apply now",
        (DetailVariant::Page, true) => "Applying...",
        (DetailVariant::Screen, false) => "Schedule interview",
        (DetailVariant::Screen, true) => "Scheduling...",
    }
}

/// Label for the primary action once it has already succeeded.
pub fn completed_action_label(variant: DetailVariant) -> &'static str {
    match variant {
        DetailVariant::Page => "Applied",
        DetailVariant::Screen => "Interview requested",
    }
}

#[component]
pub fn JobDetail(
    job: Job,
    #[prop(optional)] variant: DetailVariant,
    #[prop(into)] is_applying: Signal<bool>,
    /// Set once the primary action has succeeded; the action then stays disabled.
    #[prop(optional)]
    has_applied: Option<Signal<bool>>,
    #[prop(optional)] on_back: Option<Callback<()>>,
    #[prop(optional)] on_apply: Option<Callback<Job>>,
    #[prop(optional)] on_chat: Option<Callback<Job>>,
) -> impl IntoView {
    let headline = job.display_headline();
    let status = job.status;
    let description_html = job.description.as_deref().map(render_markdown_html);

    let skills = job
        .required_skills
        .iter()
        .map(|skill| {
            view! {
                <li class="job-detail__skill">
                    <SkillBadge level=skill.level label=skill.name.clone() size=BadgeSize::Small/>
                </li>
            }
        })
        .collect::<Vec<_>>();
    let has_skills = !skills.is_empty();

    let tags = job
        .tags
        .iter()
        .map(|tag| view! { <li class="job-detail__tag">{tag.clone()}</li> })
        .collect::<Vec<_>>();

    let back_button = on_back.map(|on_back| {
        view! {
            <button class="btn job-detail__back" on:click=move |_| on_back.run(())>
                "← Back"
            </button>
        }
    });

    let is_done = move || has_applied.is_some_and(|done| done.get());
    let apply_button = on_apply.map(|on_apply| {
        let job = job.clone();
        view! {
            <button
                class="btn btn--primary job-detail__apply"
                disabled=move || is_applying.get() || is_done()
                on:click=move |_| {
                    if !is_applying.get_untracked() && !has_applied.is_some_and(|done| done.get_untracked()) {
                        on_apply.run(job.clone());
                    }
                }
            >
                {move || {
                    if is_done() {
                        completed_action_label(variant)
                    } else {
                        primary_action_label(variant, is_applying.get())
                    }
                }}
            </button>
        }
    });

    let chat_button = on_chat.map(|on_chat| {
        let job = job.clone();
        view! {
            <button class="btn job-detail__chat" on:click=move |_| on_chat.run(job.clone())>
                "Message restaurant"
            </button>
        }
    });

    let hero = job.image_url.clone().map(|src| {
        view! { <img class="job-detail__image" src=src alt=job.restaurant.clone()/> }
    });

    view! {
        <article class=format!("job-detail {}", variant.css_modifier())>
            <nav class="job-detail__nav">{back_button}</nav>
            {hero}
            <header class="job-detail__header">
                <p class="job-detail__restaurant">{job.restaurant.clone()}</p>
                <h1 class="job-detail__title">{job.title.clone()}</h1>
                <p class="job-detail__headline">{headline}</p>
                <span class=format!("job-status {}", status.css_modifier())>{status.label()}</span>
            </header>
            <dl class="job-detail__facts">
                <dt>"Location"</dt>
                <dd>{job.location.clone()}</dd>
                <dt>"Pay"</dt>
                <dd>{job.compensation.clone()}</dd>
                <dt>"Type"</dt>
                <dd>{job.employment.clone()}</dd>
            </dl>
            {has_skills.then(|| view! {
                <section class="job-detail__skills">
                    <h2>"Skills"</h2>
                    <ul class="job-detail__skill-list">{skills}</ul>
                </section>
            })}
            <ul class="job-detail__tags">{tags}</ul>
            {description_html.map(|html| view! {
                <section class="job-detail__description" inner_html=html></section>
            })}
            <footer class="job-detail__actions">
                {chat_button}
                {apply_button}
            </footer>
        </article>
    }
}
