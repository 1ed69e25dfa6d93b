use auth::{IdentityProvider, Permission, require};
use remote::{ApiRequest, Envelope, RemoteAccess, Transport};
use time::OffsetDateTime;
use validation::Validate;

use crate::{ActionError, ActionResult};

use super::cache::all_scopes;
use super::dto::{JobListing, JobListingPayload, JobListingStatus};
use super::fetch::get_job_listing;
use super::plan::{
    has_reached_max_featured_job_listings, has_reached_max_published_job_listings,
};
use super::status::{apply_featured_toggle, apply_status_transition, next_status};

/// Create a draft listing for the current organization. The caller receives
/// the created listing and decides where to navigate.
#[tracing::instrument(skip_all)]
pub async fn create_job_listing(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    payload: JobListingPayload,
) -> ActionResult<JobListing> {
    match create(access, provider, payload).await {
        Ok(listing) => ActionResult::success(listing),
        Err(ActionError::Unauthorized | ActionError::Forbidden(_)) => {
            ActionResult::failure("You don't have permission to create a job listing")
        }
        Err(err) => {
            tracing::warn!(%err, "create failed");
            ActionResult::failure("There was an error creating your job listing")
        }
    }
}

async fn create(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    payload: JobListingPayload,
) -> Result<JobListing, ActionError> {
    let org_id = provider
        .current()
        .await
        .org_id
        .ok_or(ActionError::Unauthorized)?;
    require(provider, Permission::CreateJobListing).await?;

    let payload = payload.validate()?.inner();
    let token = provider.issue_token().await?;

    let mut body = serde_json::to_value(&payload).map_err(remote::TransportError::from)?;
    body["status"] = serde_json::json!(JobListingStatus::Draft);

    let path = format!("/job-listings/org/{org_id}");
    let listing = access
        .write(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::post(path).bearer(token).json(body))
                    .await?;
                Ok(serde_json::from_value::<Envelope<JobListing>>(value)?)
            },
            |envelope| match envelope {
                Envelope::Success(listing) => all_scopes(&listing.id, &org_id),
                Envelope::Failure { .. } => vec![],
            },
        )
        .await?
        .into_result()?;

    tracing::info!(id = %listing.id, "job listing created");
    Ok(listing)
}

#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_job_listing(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
    payload: JobListingPayload,
) -> ActionResult<JobListing> {
    match update(access, provider, id, payload).await {
        Ok(listing) => ActionResult::success(listing),
        Err(ActionError::Unauthorized | ActionError::Forbidden(_)) => {
            ActionResult::failure("You don't have permission to update this job listing")
        }
        Err(err) => {
            tracing::warn!(%err, "update failed");
            ActionResult::failure("There was an error updating your job listing")
        }
    }
}

async fn update(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
    payload: JobListingPayload,
) -> Result<JobListing, ActionError> {
    let org_id = provider
        .current()
        .await
        .org_id
        .ok_or(ActionError::Unauthorized)?;
    require(provider, Permission::UpdateJobListing).await?;

    let payload = payload.validate()?.inner();
    let token = provider.issue_token().await?;

    let body = serde_json::to_value(&payload).map_err(remote::TransportError::from)?;
    let path = format!("/org/{org_id}/job-listings/{id}");

    let listing = access
        .write(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::patch(path).bearer(token).json(body))
                    .await?;
                Ok(serde_json::from_value::<Envelope<JobListing>>(value)?)
            },
            |envelope| match envelope {
                Envelope::Success(listing) => all_scopes(&listing.id, &org_id),
                Envelope::Failure { .. } => vec![],
            },
        )
        .await?
        .into_result()?;

    Ok(listing)
}

/// Delete a listing. When the permission gate denies, no remote call is made.
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_job_listing(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
) -> ActionResult {
    match delete(access, provider, id).await {
        Ok(()) => ActionResult::success(()),
        Err(ActionError::Unauthorized | ActionError::Forbidden(_)) => {
            ActionResult::failure("You don't have permission to delete this job listing")
        }
        Err(err) => {
            tracing::warn!(%err, "delete failed");
            ActionResult::failure("There was an error deleting your job listing")
        }
    }
}

async fn delete(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
) -> Result<(), ActionError> {
    let org_id = provider
        .current()
        .await
        .org_id
        .ok_or(ActionError::Unauthorized)?;
    require(provider, Permission::DeleteJobListing).await?;

    let token = provider.issue_token().await?;
    let path = format!("/org/{org_id}/job-listings/{id}");

    access
        .write(
            |transport| async move {
                transport
                    .execute(ApiRequest::delete(path).bearer(token))
                    .await
            },
            |_| all_scopes(id, &org_id),
        )
        .await?;

    tracing::info!("job listing deleted");
    Ok(())
}

/// Flip a listing between published and delisted. The current status is
/// re-fetched and the target computed here; a client-supplied target is
/// never trusted, so racing toggles cannot produce an invalid transition.
#[tracing::instrument(skip_all, fields(%id))]
pub async fn toggle_job_listing_status(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
) -> ActionResult<JobListing> {
    match toggle_status(access, provider, id).await {
        Ok(listing) => ActionResult::success(listing),
        Err(ActionError::Unauthorized | ActionError::Forbidden(_)) => {
            ActionResult::failure("You don't have permission to update this job listing's status")
        }
        Err(ActionError::PlanLimit(message)) => ActionResult::failure(message),
        Err(err) => {
            tracing::warn!(%err, "status toggle failed");
            ActionResult::failure("There was an error updating your job listing")
        }
    }
}

async fn toggle_status(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
) -> Result<JobListing, ActionError> {
    let org_id = provider
        .current()
        .await
        .org_id
        .ok_or(ActionError::Unauthorized)?;
    require(provider, Permission::ChangeStatus).await?;

    let listing = get_job_listing(access, provider, id, &org_id)
        .await
        .ok_or(ActionError::NotFound)?;

    let target = next_status(listing.status);
    let can_publish_more = match target {
        JobListingStatus::Published => {
            !has_reached_max_published_job_listings(access, provider).await
        }
        _ => true,
    };

    let patch =
        apply_status_transition(&listing, target, can_publish_more, OffsetDateTime::now_utc())
            .map_err(|_| {
                ActionError::PlanLimit(
                    "You must upgrade your plan to publish more job listings",
                )
            })?;

    let token = provider.issue_token().await?;
    let body = serde_json::json!({
        "status": patch.status,
        "postedAt": patch
            .posted_at
            .and_then(|at| at.format(&time::format_description::well_known::Rfc3339).ok()),
    });
    let path = format!("/org/{org_id}/job-listings/{id}/status");

    let listing = access
        .write(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::patch(path).bearer(token).json(body))
                    .await?;
                Ok(serde_json::from_value::<Envelope<JobListing>>(value)?)
            },
            |envelope| match envelope {
                Envelope::Success(listing) => all_scopes(&listing.id, &org_id),
                Envelope::Failure { .. } => vec![],
            },
        )
        .await?
        .into_result()?;

    tracing::info!(status = ?listing.status, "status changed");
    Ok(listing)
}

/// Toggle the featured flag. Featuring is quota-gated, un-featuring always
/// goes through.
#[tracing::instrument(skip_all, fields(%id))]
pub async fn toggle_job_listing_featured(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
) -> ActionResult<JobListing> {
    match toggle_featured(access, provider, id).await {
        Ok(listing) => ActionResult::success(listing),
        Err(ActionError::Unauthorized | ActionError::Forbidden(_)) => {
            ActionResult::failure(
                "You don't have permission to update this job listing's featured status",
            )
        }
        Err(ActionError::PlanLimit(message)) => ActionResult::failure(message),
        Err(err) => {
            tracing::warn!(%err, "featured toggle failed");
            ActionResult::failure("There was an error updating your job listing")
        }
    }
}

async fn toggle_featured(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
) -> Result<JobListing, ActionError> {
    let org_id = provider
        .current()
        .await
        .org_id
        .ok_or(ActionError::Unauthorized)?;
    require(provider, Permission::ChangeStatus).await?;

    let listing = get_job_listing(access, provider, id, &org_id)
        .await
        .ok_or(ActionError::NotFound)?;

    let can_feature_more = match listing.is_featured {
        true => true,
        false => !has_reached_max_featured_job_listings(access, provider).await,
    };

    let is_featured = apply_featured_toggle(&listing, can_feature_more).map_err(|_| {
        ActionError::PlanLimit("You must upgrade your plan to feature more job listings")
    })?;

    let token = provider.issue_token().await?;
    let body = serde_json::json!({ "isFeatured": is_featured });
    let path = format!("/org/{org_id}/job-listings/{id}/featured");

    let listing = access
        .write(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::patch(path).bearer(token).json(body))
                    .await?;
                Ok(serde_json::from_value::<Envelope<JobListing>>(value)?)
            },
            |envelope| match envelope {
                Envelope::Success(listing) => all_scopes(&listing.id, &org_id),
                Envelope::Failure { .. } => vec![],
            },
        )
        .await?
        .into_result()?;

    Ok(listing)
}
