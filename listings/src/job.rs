//! Job records and their highlight projection.
//!
//! DESIGN
//! ======
//! A `Job` is an immutable value handed to renderers by whatever data source
//! the host wires up. `JobHighlight` is the lighter card-sized projection used
//! by promotional grids; it is always derived from a `Job` so the two never
//! drift apart.

#[cfg(test)]
#[path = "job_test.rs"]
mod job_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ListingError;
use crate::skill::SkillLevel;

/// Lifecycle label of a posting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Interviewing,
    Filled,
    Closed,
}

impl JobStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Interviewing => "Interviewing",
            Self::Filled => "Filled",
            Self::Closed => "Closed",
        }
    }

    /// Whether the posting still takes applications.
    #[must_use]
    pub fn accepts_applications(self) -> bool {
        matches!(self, Self::Open | Self::Interviewing)
    }

    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Open => "job-status--open",
            Self::Interviewing => "job-status--interviewing",
            Self::Filled => "job-status--filled",
            Self::Closed => "job-status--closed",
        }
    }
}

impl FromStr for JobStatus {
    type Err = ListingError;

    /// Parse the wire name (`"open"`, `"filled"`, ...), ignoring case and
    /// surrounding whitespace.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "interviewing" => Ok(Self::Interviewing),
            "filled" => Ok(Self::Filled),
            "closed" => Ok(Self::Closed),
            _ => Err(ListingError::UnknownStatus(raw.to_owned())),
        }
    }
}

/// A named skill with the minimum level the role expects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    pub level: SkillLevel,
}

/// A job posting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Name of the hiring restaurant.
    pub restaurant: String,
    /// Role title (e.g. `"Line Cook"`).
    pub title: String,
    /// One-line pitch shown under the title.
    #[serde(default)]
    pub headline: Option<String>,
    pub location: String,
    /// Free-form pay descriptor (e.g. `"$22-26/hr + tips"`).
    pub compensation: String,
    /// Employment type or duration (e.g. `"Full-time"`, `"3-month contract"`).
    pub employment: String,
    #[serde(default)]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: JobStatus,
    /// Markdown body for the detail view.
    #[serde(default)]
    pub description: Option<String>,
}

impl Job {
    /// Check the fields every renderer relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::MissingField`] for the first blank required field.
    pub fn validate(&self) -> Result<(), ListingError> {
        let required: [(&'static str, &str); 3] = [
            ("id", &self.id),
            ("title", &self.title),
            ("restaurant", &self.restaurant),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ListingError::MissingField { id: self.id.clone(), field });
            }
        }
        Ok(())
    }

    /// Headline if present and non-blank, otherwise `"{title} at {restaurant}"`.
    #[must_use]
    pub fn display_headline(&self) -> String {
        match self.headline.as_deref().map(str::trim) {
            Some(h) if !h.is_empty() => h.to_owned(),
            _ => format!("{} at {}", self.title, self.restaurant),
        }
    }
}

/// Card-sized projection of a [`Job`] for promotional grids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobHighlight {
    pub id: String,
    pub restaurant: String,
    pub title: String,
    pub location: String,
    pub compensation: String,
    pub employment: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub status: JobStatus,
}

impl From<&Job> for JobHighlight {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            restaurant: job.restaurant.clone(),
            title: job.title.clone(),
            location: job.location.clone(),
            compensation: job.compensation.clone(),
            employment: job.employment.clone(),
            tags: job.tags.clone(),
            image_url: job.image_url.clone(),
            featured: job.featured,
            status: job.status,
        }
    }
}

impl JobHighlight {
    /// Initials of the restaurant, used as the image placeholder.
    #[must_use]
    pub fn monogram(&self) -> String {
        let letters: String = self
            .restaurant
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if letters.is_empty() { "?".to_owned() } else { letters }
    }
}
