//! Cache-tag derivation. Tags are pure functions of a resource kind and its
//! scope identifiers; the reading and invalidating code paths share the same
//! constructors, so a tag derived for a read always matches the one derived
//! for the write that should evict it.
//!
//! Shapes: `<kind>` (global), `<kind>-org-<orgId>`, `<kind>-id-<id>`,
//! `<kind>-id-<parentId>-<childId>`. The `-org-`/`-id-` infixes keep scopes
//! from colliding even when an org id equals an entity id.

use cache::Tag;

/// Closed set of remotely fetched resource kinds. Constructing a tag for a
/// kind that does not exist is a compile error, not a typo'd string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    JobListing,
    JobListingApplication,
    Organization,
    OrganizationUserSettings,
    User,
    UserResume,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::JobListing => "jobListings",
            ResourceKind::JobListingApplication => "jobListingApplications",
            ResourceKind::Organization => "organizations",
            ResourceKind::OrganizationUserSettings => "organizationUserSettings",
            ResourceKind::User => "users",
            ResourceKind::UserResume => "userResumes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceTag(String);

impl ResourceTag {
    pub fn global(kind: ResourceKind) -> Self {
        Self(kind.as_str().to_string())
    }

    pub fn org(kind: ResourceKind, org_id: &str) -> Self {
        Self(format!("{}-org-{}", kind.as_str(), org_id))
    }

    pub fn entity(kind: ResourceKind, id: &str) -> Self {
        Self(format!("{}-id-{}", kind.as_str(), id))
    }

    pub fn parent_child(kind: ResourceKind, parent_id: &str, child_id: &str) -> Self {
        Self(format!("{}-id-{}-{}", kind.as_str(), parent_id, child_id))
    }

    pub fn boxed(self) -> Box<dyn Tag> {
        Box::new(self)
    }
}

impl Tag for ResourceTag {
    fn id(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(
            ResourceTag::org(ResourceKind::JobListing, "org_1"),
            ResourceTag::org(ResourceKind::JobListing, "org_1"),
        );
        assert_eq!(
            ResourceTag::global(ResourceKind::JobListing).id(),
            "jobListings"
        );
        assert_eq!(
            ResourceTag::entity(ResourceKind::JobListing, "jl_1").id(),
            "jobListings-id-jl_1"
        );
        assert_eq!(
            ResourceTag::parent_child(ResourceKind::JobListingApplication, "jl_1", "u_1").id(),
            "jobListingApplications-id-jl_1-u_1"
        );
    }

    #[test]
    fn scopes_never_collide() {
        // same identifier under different scopes stays distinct
        assert_ne!(
            ResourceTag::org(ResourceKind::JobListing, "5").id(),
            ResourceTag::entity(ResourceKind::JobListing, "5").id(),
        );
        // and different kinds never share a tag
        assert_ne!(
            ResourceTag::entity(ResourceKind::User, "5").id(),
            ResourceTag::entity(ResourceKind::UserResume, "5").id(),
        );
    }
}
