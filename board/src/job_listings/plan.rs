//! Plan-tier quota checks. Each entitled tier is tested independently and
//! the results are OR-ed: "is there some tier the organization has access to
//! whose cap the current count is still under". The published tiers are
//! nested, so this matches a single highest-cap comparison, but the per-tier
//! form survives a non-nested tier being added later.
//!
//! A missing organization context reads as "limit reached": without an org
//! there is nothing to publish under.

use auth::{IdentityProvider, PlanFeature};
use remote::{RemoteAccess, Transport};

use super::fetch::{count_featured_job_listings, count_published_job_listings};

const PUBLISH_TIERS: [(PlanFeature, u32); 3] = [
    (PlanFeature::Post1JobListing, 1),
    (PlanFeature::Post3JobListings, 3),
    (PlanFeature::Post15JobListings, 15),
];

#[tracing::instrument(skip_all)]
pub async fn has_reached_max_published_job_listings(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
) -> bool {
    let Some(org_id) = provider.current().await.org_id else {
        return true;
    };

    let count = count_published_job_listings(access, provider, &org_id).await;

    for (feature, cap) in PUBLISH_TIERS {
        if provider.has_plan_feature(feature).await && count < cap {
            return false;
        }
    }
    true
}

#[tracing::instrument(skip_all)]
pub async fn has_reached_max_featured_job_listings(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
) -> bool {
    let Some(org_id) = provider.current().await.org_id else {
        return true;
    };

    if provider
        .has_plan_feature(PlanFeature::FeatureUnlimitedJobListings)
        .await
    {
        return false;
    }

    let count = count_featured_job_listings(access, provider, &org_id).await;

    !(provider
        .has_plan_feature(PlanFeature::Feature1JobListing)
        .await
        && count < 1)
}
