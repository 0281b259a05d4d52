use super::*;

fn sample_job() -> Job {
    Job {
        id: "job-1".to_owned(),
        restaurant: "Blue Fig Bistro".to_owned(),
        title: "Line Cook".to_owned(),
        headline: None,
        location: "Portland, OR".to_owned(),
        compensation: "$22-26/hr + tips".to_owned(),
        employment: "Full-time".to_owned(),
        required_skills: vec![RequiredSkill {
            name: "Knife work".to_owned(),
            level: SkillLevel::new(3).expect("level in range"),
        }],
        tags: vec!["brunch".to_owned(), "weekends".to_owned()],
        image_url: Some("/img/blue-fig.jpg".to_owned()),
        featured: true,
        status: JobStatus::Open,
        description: Some("Run the **sauté** station.".to_owned()),
    }
}

#[test]
fn validate_accepts_complete_job() {
    assert!(sample_job().validate().is_ok());
}

#[test]
fn validate_reports_first_blank_field() {
    let mut job = sample_job();
    job.title = "   ".to_owned();
    match job.validate() {
        Err(ListingError::MissingField { id, field }) => {
            assert_eq!(id, "job-1");
            assert_eq!(field, "title");
        }
        other => panic!("expected MissingField, got {other:?}"),
    }

    job.id = String::new();
    assert!(matches!(
        job.validate(),
        Err(ListingError::MissingField { field: "id", .. })
    ));
}

#[test]
fn display_headline_falls_back_to_title_and_restaurant() {
    let mut job = sample_job();
    assert_eq!(job.display_headline(), "Line Cook at Blue Fig Bistro");

    job.headline = Some("  ".to_owned());
    assert_eq!(job.display_headline(), "Line Cook at Blue Fig Bistro");

    job.headline = Some("Cook for a farm-to-table brunch crew".to_owned());
    assert_eq!(job.display_headline(), "Cook for a farm-to-table brunch crew");
}

#[test]
fn highlight_copies_card_fields_only() {
    let job = sample_job();
    let highlight = JobHighlight::from(&job);
    assert_eq!(highlight.id, job.id);
    assert_eq!(highlight.restaurant, job.restaurant);
    assert_eq!(highlight.title, job.title);
    assert_eq!(highlight.location, job.location);
    assert_eq!(highlight.compensation, job.compensation);
    assert_eq!(highlight.employment, job.employment);
    assert_eq!(highlight.tags, job.tags);
    assert_eq!(highlight.image_url, job.image_url);
    assert!(highlight.featured);
    assert_eq!(highlight.status, JobStatus::Open);

    let value = serde_json::to_value(&highlight).expect("serialize");
    assert!(value.get("required_skills").is_none());
    assert!(value.get("description").is_none());
}

#[test]
fn monogram_uses_first_two_words() {
    let highlight = JobHighlight::from(&sample_job());
    assert_eq!(highlight.monogram(), "BF");

    let mut single = highlight.clone();
    single.restaurant = "noma".to_owned();
    assert_eq!(single.monogram(), "N");

    let mut blank = highlight;
    blank.restaurant = "  ".to_owned();
    assert_eq!(blank.monogram(), "?");
}

#[test]
fn status_parses_wire_names_and_labels() {
    assert_eq!("open".parse::<JobStatus>().ok(), Some(JobStatus::Open));
    assert_eq!(" Filled ".parse::<JobStatus>().ok(), Some(JobStatus::Filled));
    let err = "paused".parse::<JobStatus>().expect_err("unknown status rejected");
    assert!(matches!(err, ListingError::UnknownStatus(ref raw) if raw == "paused"));
    assert!(err.to_string().contains("paused"));
    assert_eq!(JobStatus::Interviewing.label(), "Interviewing");
    assert_eq!(
        serde_json::to_string(&JobStatus::Closed).expect("serialize"),
        "\"closed\""
    );
}

#[test]
fn only_open_and_interviewing_accept_applications() {
    assert!(JobStatus::Open.accepts_applications());
    assert!(JobStatus::Interviewing.accepts_applications());
    assert!(!JobStatus::Filled.accepts_applications());
    assert!(!JobStatus::Closed.accepts_applications());
}

#[test]
fn deserialize_applies_defaults_for_optional_fields() {
    let raw = r#"{
        "id": "job-2",
        "restaurant": "Harbor House",
        "title": "Dishwasher",
        "location": "Seattle, WA",
        "compensation": "$19/hr",
        "employment": "Part-time"
    }"#;
    let job: Job = serde_json::from_str(raw).expect("minimal job parses");
    assert!(job.headline.is_none());
    assert!(job.required_skills.is_empty());
    assert!(job.tags.is_empty());
    assert!(!job.featured);
    assert_eq!(job.status, JobStatus::Open);
}
