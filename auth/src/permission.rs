use serde::Serialize;

use crate::IdentityProvider;

/// Closed set of organization-member permissions. The wire form matches the
/// provider's `job_listing:<action>` capability strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ApplicantChangeRating,
    ApplicantChangeStage,
    ChangeStatus,
    CreateJobListing,
    DeleteJobListing,
    UpdateJobListing,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ApplicantChangeRating => "job_listing:applicant_change_rating",
            Permission::ApplicantChangeStage => "job_listing:applicant_change_stage",
            Permission::ChangeStatus => "job_listing:change_status",
            Permission::CreateJobListing => "job_listing:create_job_listing",
            Permission::DeleteJobListing => "job_listing:delete_job_listing",
            Permission::UpdateJobListing => "job_listing:update_job_listing",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug)]
#[error("insufficient permissions")]
pub struct InsufficientPermissionsError;

/// Ask the provider whether the current actor holds `permission`.
///
/// This is called both when deciding whether to render an affordance and,
/// again, inside every mutation: the render-time check is only an
/// optimization and is never trusted by the mutation path.
pub async fn require(
    provider: &impl IdentityProvider,
    permission: Permission,
) -> Result<(), InsufficientPermissionsError> {
    match provider.has_capability(permission).await {
        true => Ok(()),
        false => {
            tracing::info!(%permission, "permission denied");
            Err(InsufficientPermissionsError)
        }
    }
}
