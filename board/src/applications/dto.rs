use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validation::{Valid, Validate, ValidationError, normalize_optional};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStage {
    Applied,
    Interested,
    Interviewed,
    Hired,
    Denied,
}

impl ApplicationStage {
    /// Pipeline order for stage pickers and grouped tables.
    pub fn sort_order(&self) -> u8 {
        match self {
            ApplicationStage::Applied => 0,
            ApplicationStage::Interested => 1,
            ApplicationStage::Interviewed => 2,
            ApplicationStage::Hired => 3,
            ApplicationStage::Denied => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListingApplication {
    pub job_listing_id: String,
    pub user_id: String,
    pub cover_letter: Option<String>,
    pub stage: ApplicationStage,
    /// 1..=5, unset until an employer rates the applicant.
    pub rating: Option<u8>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    pub cover_letter: Option<String>,
}

impl Validate for ApplicationPayload {
    fn validate(mut self) -> Result<Valid<Self>, ValidationError> {
        self.cover_letter = normalize_optional(self.cover_letter);
        Ok(validation::sealed(self))
    }
}

/// `None` clears the rating; a set rating must land on the 1..=5 scale.
pub fn validate_rating(rating: Option<u8>) -> Result<Option<u8>, ValidationError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => {
            Err(ValidationError::new("rating", "must be between 1 and 5"))
        }
        _ => Ok(rating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_pipeline_order() {
        let mut stages = [
            ApplicationStage::Denied,
            ApplicationStage::Applied,
            ApplicationStage::Hired,
            ApplicationStage::Interested,
            ApplicationStage::Interviewed,
        ];
        stages.sort_by_key(|s| s.sort_order());
        assert_eq!(
            stages,
            [
                ApplicationStage::Applied,
                ApplicationStage::Interested,
                ApplicationStage::Interviewed,
                ApplicationStage::Hired,
                ApplicationStage::Denied,
            ]
        );
    }

    #[test]
    fn blank_cover_letter_normalizes_to_none() {
        let valid = ApplicationPayload {
            cover_letter: Some("  \n ".into()),
        }
        .validate()
        .unwrap();
        assert_eq!(valid.cover_letter, None);
    }

    #[test]
    fn rating_bounds() {
        assert!(validate_rating(None).is_ok());
        assert!(validate_rating(Some(1)).is_ok());
        assert!(validate_rating(Some(5)).is_ok());
        assert!(validate_rating(Some(0)).is_err());
        assert!(validate_rating(Some(6)).is_err());
    }
}
