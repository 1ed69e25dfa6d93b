//! Tag sets for applications: global, per parent listing, and the composite
//! (listing, applicant) pair.

use cache::Tag;

use crate::tags::{ResourceKind, ResourceTag};

pub fn global_tag() -> ResourceTag {
    ResourceTag::global(ResourceKind::JobListingApplication)
}

pub fn job_listing_tag(job_listing_id: &str) -> ResourceTag {
    ResourceTag::entity(ResourceKind::JobListingApplication, job_listing_id)
}

pub fn id_tag(job_listing_id: &str, user_id: &str) -> ResourceTag {
    ResourceTag::parent_child(ResourceKind::JobListingApplication, job_listing_id, user_id)
}

pub fn all_scopes(job_listing_id: &str, user_id: &str) -> Vec<Box<dyn Tag>> {
    vec![
        global_tag().boxed(),
        job_listing_tag(job_listing_id).boxed(),
        id_tag(job_listing_id, user_id).boxed(),
    ]
}
