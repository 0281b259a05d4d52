use super::*;
use leptos::reactive::owner::Owner;
use listings::{JobStatus, RequiredSkill, SkillLevel};

#[test]
fn page_variant_labels() {
    assert_eq!(primary_action_label(DetailVariant::Page, false), "Apply now");
    assert_eq!(primary_action_label(DetailVariant::Page, true), "Applying...");
}

#[test]
fn screen_variant_labels() {
    assert_eq!(primary_action_label(DetailVariant::Screen, false), "Schedule interview");
    assert_eq!(primary_action_label(DetailVariant::Screen, true), "Scheduling...");
}

#[test]
fn busy_label_always_differs_from_idle_label() {
    for variant in [DetailVariant::Page, DetailVariant::Screen] {
        assert_ne!(
            primary_action_label(variant, false),
            primary_action_label(variant, true)
        );
    }
}

#[test]
fn default_variant_is_page() {
    assert_eq!(DetailVariant::default(), DetailVariant::Page);
    assert_eq!(DetailVariant::Page.css_modifier(), "job-detail--page");
    assert_eq!(DetailVariant::Screen.css_modifier(), "job-detail--screen");
}

#[test]
fn completed_label_per_variant() {
    assert_eq!(completed_action_label(DetailVariant::Page), "Applied");
    assert_eq!(completed_action_label(DetailVariant::Screen), "Interview requested");
}

// =============================================================
// Rendering
// =============================================================

fn job() -> Job {
    Job {
        id: "lc-1".to_owned(),
        restaurant: "Osteria Fiume".to_owned(),
        title: "Line Cook".to_owned(),
        headline: Some("Fresh pasta station".to_owned()),
        location: "Portland, OR".to_owned(),
        compensation: "$22-26/hr".to_owned(),
        employment: "Full-time".to_owned(),
        required_skills: vec![RequiredSkill { name: "Knife work".to_owned(), level: SkillLevel::saturating(4) }],
        tags: vec!["Italian".to_owned()],
        image_url: None,
        featured: true,
        status: JobStatus::Open,
        description: Some("Roll **pasta**. [Menu](javascript:alert(1))".to_owned()),
    }
}

fn render<V: IntoView + 'static>(build: impl FnOnce() -> V) -> String {
    Owner::new().with(|| build().to_html())
}

fn ignore() -> Callback<Job> {
    Callback::new(|_: Job| {})
}

#[test]
fn idle_apply_button_is_enabled() {
    let html = render(|| {
        view! { <JobDetail job=job() is_applying=Signal::derive(|| false) on_apply=ignore()/> }
    });
    assert!(html.contains("job-detail__apply"), "{html}");
    assert!(html.contains("Apply now"), "{html}");
    assert!(!html.contains("disabled"), "{html}");
}

#[test]
fn busy_apply_button_is_disabled_and_relabelled() {
    let html = render(|| {
        view! { <JobDetail job=job() is_applying=Signal::derive(|| true) on_apply=ignore()/> }
    });
    assert!(html.contains("disabled"), "{html}");
    assert!(html.contains("Applying..."), "{html}");
}

#[test]
fn applied_job_keeps_button_disabled() {
    let html = render(|| {
        view! {
            <JobDetail
                job=job()
                is_applying=Signal::derive(|| false)
                has_applied=Signal::derive(|| true)
                on_apply=ignore()
            />
        }
    });
    assert!(html.contains("disabled"), "{html}");
    assert!(html.contains("Applied"), "{html}");
    assert!(!html.contains("Apply now"), "{html}");
}

#[test]
fn optional_controls_render_only_with_callbacks() {
    let bare = render(|| view! { <JobDetail job=job() is_applying=Signal::derive(|| false)/> });
    assert!(!bare.contains("job-detail__apply"), "{bare}");
    assert!(!bare.contains("job-detail__back"), "{bare}");
    assert!(!bare.contains("job-detail__chat"), "{bare}");

    let full = render(|| {
        view! {
            <JobDetail
                job=job()
                variant=DetailVariant::Screen
                is_applying=Signal::derive(|| false)
                on_back=Callback::new(|()| {})
                on_apply=ignore()
                on_chat=ignore()
            />
        }
    });
    assert!(full.contains("job-detail__back"), "{full}");
    assert!(full.contains("job-detail__chat"), "{full}");
    assert!(full.contains("Schedule interview"), "{full}");
    assert!(full.contains("job-detail--screen"), "{full}");
}

#[test]
fn description_is_rendered_without_script_links() {
    let html = render(|| view! { <JobDetail job=job() is_applying=Signal::derive(|| false)/> });
    assert!(html.contains("<strong>pasta</strong>"), "{html}");
    assert!(!html.contains("javascript:"), "{html}");
    assert!(html.contains("Knife work"), "{html}");
}
