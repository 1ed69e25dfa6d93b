use auth::{IdentityProvider, Permission, require};
use remote::{ApiRequest, Envelope, RemoteAccess, Transport};
use validation::Validate;

use crate::job_listings::get_published_job_listing;
use crate::users::get_user_resume;
use crate::{ActionError, ActionResult};

use super::cache::all_scopes;
use super::dto::{ApplicationPayload, ApplicationStage, JobListingApplication, validate_rating};

/// Job-seeker submission. Requires a signed-in user with an uploaded resume
/// and a listing that is actually published; all three read as one
/// permission failure to avoid leaking which precondition was missing.
#[tracing::instrument(skip_all, fields(%job_listing_id))]
pub async fn create_application(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    job_listing_id: &str,
    payload: ApplicationPayload,
) -> ActionResult<JobListingApplication> {
    match submit(access, provider, job_listing_id, payload).await {
        Ok(application) => ActionResult::success_with(
            application,
            "Your application was successfully submitted",
        ),
        Err(ActionError::Unauthorized | ActionError::Forbidden(_) | ActionError::NotFound) => {
            ActionResult::failure("You don't have permission to submit an application")
        }
        Err(err) => {
            tracing::warn!(%err, "application submit failed");
            ActionResult::failure("There was an error submitting your application")
        }
    }
}

async fn submit(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    job_listing_id: &str,
    payload: ApplicationPayload,
) -> Result<JobListingApplication, ActionError> {
    let user_id = provider
        .current()
        .await
        .user_id
        .ok_or(ActionError::Unauthorized)?;

    let resume = get_user_resume(access, provider, &user_id).await;
    let listing = get_published_job_listing(access, provider, job_listing_id).await;
    if resume.is_none() || listing.is_none() {
        return Err(ActionError::NotFound);
    }

    let payload = payload.validate()?.inner();
    let token = provider.issue_token().await?;

    let body = serde_json::to_value(&payload).map_err(remote::TransportError::from)?;
    let path = format!("/job-listings/{job_listing_id}/application");

    let application = access
        .write(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::post(path).bearer(token).json(body))
                    .await?;
                Ok(serde_json::from_value::<Envelope<JobListingApplication>>(value)?)
            },
            |envelope| match envelope {
                Envelope::Success(application) => {
                    all_scopes(&application.job_listing_id, &application.user_id)
                }
                Envelope::Failure { .. } => vec![],
            },
        )
        .await?
        .into_result()?;

    tracing::info!("application submitted");
    Ok(application)
}

/// Employer rating change; the field the UI renders optimistically.
#[tracing::instrument(skip_all, fields(%job_listing_id, %user_id, ?rating))]
pub async fn change_application_rating(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    job_listing_id: &str,
    user_id: &str,
    rating: Option<u8>,
) -> ActionResult {
    let patch = match validate_rating(rating) {
        Ok(rating) => serde_json::json!({ "rating": rating }),
        Err(_) => {
            return ActionResult::failure("There was an error updating the rating");
        }
    };

    match patch_application(
        access,
        provider,
        Permission::ApplicantChangeRating,
        job_listing_id,
        user_id,
        "rating",
        patch,
    )
    .await
    {
        Ok(()) => ActionResult::success(()),
        Err(ActionError::Unauthorized | ActionError::Forbidden(_)) => {
            ActionResult::failure("You don't have permission to update this application")
        }
        Err(err) => {
            tracing::warn!(%err, "rating change failed");
            ActionResult::failure("There was an error updating the rating")
        }
    }
}

/// Employer stage change; also rendered optimistically.
#[tracing::instrument(skip_all, fields(%job_listing_id, %user_id, ?stage))]
pub async fn change_application_stage(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    job_listing_id: &str,
    user_id: &str,
    stage: ApplicationStage,
) -> ActionResult {
    match patch_application(
        access,
        provider,
        Permission::ApplicantChangeStage,
        job_listing_id,
        user_id,
        "stage",
        serde_json::json!({ "stage": stage }),
    )
    .await
    {
        Ok(()) => ActionResult::success(()),
        Err(ActionError::Unauthorized | ActionError::Forbidden(_)) => {
            ActionResult::failure("You don't have permission to update this application")
        }
        Err(err) => {
            tracing::warn!(%err, "stage change failed");
            ActionResult::failure("There was an error updating the stage")
        }
    }
}

async fn patch_application(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    permission: Permission,
    job_listing_id: &str,
    user_id: &str,
    field: &str,
    body: serde_json::Value,
) -> Result<(), ActionError> {
    if provider.current().await.org_id.is_none() {
        return Err(ActionError::Unauthorized);
    }
    require(provider, permission).await?;

    let token = provider.issue_token().await?;
    let path = format!("/job-listings/{job_listing_id}/applications/{user_id}/{field}");

    access
        .write(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::patch(path).bearer(token).json(body))
                    .await?;
                Ok(serde_json::from_value::<Envelope<JobListingApplication>>(value)?)
            },
            |envelope| match envelope {
                Envelope::Success(application) => {
                    all_scopes(&application.job_listing_id, &application.user_id)
                }
                Envelope::Failure { .. } => vec![],
            },
        )
        .await?
        .into_result()?;

    Ok(())
}
