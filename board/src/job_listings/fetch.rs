use auth::IdentityProvider;
use cache::DashCache;
use remote::{ApiRequest, Envelope, RemoteAccess, Transport};

use super::cache::{global_tag, id_tag, org_tag};
use super::dto::{JobListing, JobListingStatus};

/// Job-seeker view of a single listing. Anything other than a published
/// listing reads as absent, and transport failures degrade to `None` so a
/// page renders its not-found state instead of crashing.
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_published_job_listing(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
) -> Option<JobListing> {
    let token = provider.issue_token().await.ok();
    let path = format!("/job-listings/{id}");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                let envelope: Envelope<JobListing> = serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "published_job_listing__from__id",
            id.to_string(),
            |value: &Option<JobListing>| match value {
                Some(listing) => vec![global_tag().boxed(), id_tag(&listing.id).boxed()],
                None => vec![global_tag().boxed()],
            },
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(Some(listing)) if listing.status == JobListingStatus::Published => Some(listing),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(%err, "listing fetch failed");
            None
        }
    }
}

/// Employer view: any status, scoped to the owning organization.
#[tracing::instrument(skip_all, fields(%id, %org_id))]
pub async fn get_job_listing(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    id: &str,
    org_id: &str,
) -> Option<JobListing> {
    let token = provider.issue_token().await.ok();
    let path = format!("/org/{org_id}/job-listings/{id}");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                let envelope: Envelope<JobListing> = serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "job_listing__from__org_and_id",
            (org_id.to_string(), id.to_string()),
            |value: &Option<JobListing>| match value {
                Some(listing) => vec![
                    global_tag().boxed(),
                    org_tag(org_id).boxed(),
                    id_tag(&listing.id).boxed(),
                ],
                None => vec![global_tag().boxed(), org_tag(org_id).boxed()],
            },
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(listing) => listing,
        Err(err) => {
            tracing::warn!(%err, "listing fetch failed");
            None
        }
    }
}

#[tracing::instrument(skip_all, fields(%org_id))]
pub async fn list_org_job_listings(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    org_id: &str,
) -> Option<Vec<JobListing>> {
    let token = provider.issue_token().await.ok();
    let path = format!("/org/{org_id}/job-listings");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                let envelope: Envelope<Vec<JobListing>> = serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "job_listings__from__org_id",
            org_id.to_string(),
            |_: &Option<Vec<JobListing>>| {
                vec![global_tag().boxed(), org_tag(org_id).boxed()]
            },
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(listings) => listings,
        Err(err) => {
            tracing::warn!(%err, "listing fetch failed");
            None
        }
    }
}

/// Published-listing count for plan quota checks. A transport failure counts
/// as zero, matching the fail-soft read policy.
#[tracing::instrument(skip_all, fields(%org_id))]
pub async fn count_published_job_listings(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    org_id: &str,
) -> u32 {
    scoped_count(access, provider, org_id, "count-published", "published_count__from__org_id")
        .await
}

/// Featured-listing count for the featured quota.
#[tracing::instrument(skip_all, fields(%org_id))]
pub async fn count_featured_job_listings(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    org_id: &str,
) -> u32 {
    scoped_count(access, provider, org_id, "count-featured", "featured_count__from__org_id")
        .await
}

async fn scoped_count(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    org_id: &str,
    endpoint: &str,
    namespace: &'static str,
) -> u32 {
    let token = provider.issue_token().await.ok();
    let path = format!("/org/{org_id}/job-listings/{endpoint}");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                Ok(serde_json::from_value::<u32>(value)?)
            },
            namespace,
            org_id.to_string(),
            |_: &u32| vec![org_tag(org_id).boxed()],
            DashCache::new,
        )
        .await;

    fetched.unwrap_or_else(|err| {
        tracing::warn!(%err, "count fetch failed, treating as zero");
        0
    })
}
