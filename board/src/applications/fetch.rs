use auth::IdentityProvider;
use cache::DashCache;
use remote::{ApiRequest, Envelope, RemoteAccess, Transport};

use super::cache::{global_tag, id_tag, job_listing_tag};
use super::dto::JobListingApplication;

/// Employer view of a listing's applicant pipeline.
#[tracing::instrument(skip_all, fields(%job_listing_id))]
pub async fn list_applications(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    job_listing_id: &str,
) -> Option<Vec<JobListingApplication>> {
    let token = provider.issue_token().await.ok();
    let path = format!("/job-listings/{job_listing_id}/applications");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                let envelope: Envelope<Vec<JobListingApplication>> =
                    serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "applications__from__job_listing_id",
            job_listing_id.to_string(),
            |_: &Option<Vec<JobListingApplication>>| {
                vec![global_tag().boxed(), job_listing_tag(job_listing_id).boxed()]
            },
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(applications) => applications,
        Err(err) => {
            tracing::warn!(%err, "applications fetch failed");
            None
        }
    }
}

#[tracing::instrument(skip_all, fields(%job_listing_id, %user_id))]
pub async fn get_application(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    job_listing_id: &str,
    user_id: &str,
) -> Option<JobListingApplication> {
    let token = provider.issue_token().await.ok();
    let path = format!("/job-listings/{job_listing_id}/applications/{user_id}");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                let envelope: Envelope<JobListingApplication> = serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "application__from__job_listing_and_user",
            (job_listing_id.to_string(), user_id.to_string()),
            |_: &Option<JobListingApplication>| {
                vec![
                    global_tag().boxed(),
                    job_listing_tag(job_listing_id).boxed(),
                    id_tag(job_listing_id, user_id).boxed(),
                ]
            },
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(application) => application,
        Err(err) => {
            tracing::warn!(%err, "application fetch failed");
            None
        }
    }
}
