use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validation::{Valid, Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Per-user notification preferences within one organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUserSettings {
    pub user_id: String,
    pub organization_id: String,
    pub new_application_email_notifications: bool,
    pub minimum_rating: Option<u8>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUserSettingsPayload {
    pub new_application_email_notifications: bool,
    /// Only notify about applicants at or above this rating.
    pub minimum_rating: Option<u8>,
}

impl Validate for OrganizationUserSettingsPayload {
    fn validate(self) -> Result<Valid<Self>, ValidationError> {
        if let Some(rating) = self.minimum_rating {
            if !(1..=5).contains(&rating) {
                return Err(ValidationError::new(
                    "minimumRating",
                    "must be between 1 and 5",
                ));
            }
        }
        Ok(validation::sealed(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_rating_bounds() {
        let ok = OrganizationUserSettingsPayload {
            new_application_email_notifications: true,
            minimum_rating: Some(3),
        };
        assert!(ok.validate().is_ok());

        let bad = OrganizationUserSettingsPayload {
            new_application_email_notifications: true,
            minimum_rating: Some(9),
        };
        assert!(bad.validate().is_err());
    }
}
