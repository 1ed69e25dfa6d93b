//! Tag sets for job listings. Reads register the broadest applicable set and
//! writes invalidate through [`all_scopes`], so any write at any scope
//! reaches every reader.

use cache::Tag;

use crate::tags::{ResourceKind, ResourceTag};

pub fn global_tag() -> ResourceTag {
    ResourceTag::global(ResourceKind::JobListing)
}

pub fn org_tag(org_id: &str) -> ResourceTag {
    ResourceTag::org(ResourceKind::JobListing, org_id)
}

pub fn id_tag(id: &str) -> ResourceTag {
    ResourceTag::entity(ResourceKind::JobListing, id)
}

/// Every tag a listing can be read under. Mutations invalidate exactly this
/// set; it is the union of what any listing read registers.
pub fn all_scopes(id: &str, org_id: &str) -> Vec<Box<dyn Tag>> {
    vec![
        global_tag().boxed(),
        org_tag(org_id).boxed(),
        id_tag(id).boxed(),
    ]
}
