use serde::Serialize;

/// Subscription entitlements gating quantity limits. Like [`Permission`],
/// the wire form matches the provider's feature strings.
///
/// The published tiers are strictly nested (1 ⊂ 3 ⊂ 15); quota checks still
/// test each entitled tier independently.
///
/// [`Permission`]: crate::Permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanFeature {
    Post1JobListing,
    Post3JobListings,
    Post15JobListings,
    Feature1JobListing,
    FeatureUnlimitedJobListings,
}

impl PlanFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanFeature::Post1JobListing => "post_1_job_listing",
            PlanFeature::Post3JobListings => "post_3_job_listings",
            PlanFeature::Post15JobListings => "post_15_job_listings",
            PlanFeature::Feature1JobListing => "feature_1_job_listing",
            PlanFeature::FeatureUnlimitedJobListings => "feature_unlimited_job_listings",
        }
    }
}

impl std::fmt::Display for PlanFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
