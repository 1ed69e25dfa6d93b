use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validation::{Valid, Validate, ValidationError, normalize_optional, require_non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WageInterval {
    Hourly,
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationRequirement {
    Remote,
    InOffice,
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Junior,
    MidLevel,
    Senior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobListingStatus {
    Draft,
    Published,
    Delisted,
}

impl JobListingStatus {
    /// Grouping-by-status displays surface active items first.
    pub fn sort_order(&self) -> u8 {
        match self {
            JobListingStatus::Published => 0,
            JobListingStatus::Draft => 1,
            JobListingStatus::Delisted => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobListingType {
    Internship,
    PartTime,
    FullTime,
}

/// A job listing as the remote API returns it. Treated as a thin mirror of
/// the wire shape; the cache layer never looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub description: String,
    pub wage: Option<u32>,
    pub wage_interval: WageInterval,
    pub state_abbreviation: Option<String>,
    pub city: Option<String>,
    pub is_featured: bool,
    pub location_requirement: LocationRequirement,
    pub experience_level: ExperienceLevel,
    pub status: JobListingStatus,
    #[serde(rename = "type")]
    pub job_type: JobListingType,
    #[serde(with = "time::serde::rfc3339::option")]
    pub posted_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Client-supplied fields for create/update. Server assigns `id`, `status`,
/// `isFeatured`, `postedAt` and the timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingPayload {
    pub title: String,
    pub description: String,
    pub experience_level: ExperienceLevel,
    pub location_requirement: LocationRequirement,
    #[serde(rename = "type")]
    pub job_type: JobListingType,
    pub wage: Option<u32>,
    pub wage_interval: WageInterval,
    pub state_abbreviation: Option<String>,
    pub city: Option<String>,
}

impl Validate for JobListingPayload {
    fn validate(mut self) -> Result<Valid<Self>, ValidationError> {
        require_non_empty("title", &self.title)?;
        require_non_empty("description", &self.description)?;

        if self.wage == Some(0) {
            return Err(ValidationError::new("wage", "must be a positive amount"));
        }

        self.city = normalize_optional(self.city);
        self.state_abbreviation = normalize_optional(self.state_abbreviation);

        if self.location_requirement != LocationRequirement::Remote {
            if self.city.is_none() {
                return Err(ValidationError::new(
                    "city",
                    "required for non-remote listings",
                ));
            }
            if self.state_abbreviation.is_none() {
                return Err(ValidationError::new(
                    "stateAbbreviation",
                    "required for non-remote listings",
                ));
            }
        }

        Ok(validation::sealed(self))
    }
}

/// In-place sort for employer dashboards: published, then draft, then
/// delisted; newest first within a group.
pub fn sort_for_display(listings: &mut [JobListing]) {
    listings.sort_by(|a, b| {
        a.status
            .sort_order()
            .cmp(&b.status.sort_order())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
