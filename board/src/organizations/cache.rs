use cache::Tag;

use crate::tags::{ResourceKind, ResourceTag};

pub fn org_global_tag() -> ResourceTag {
    ResourceTag::global(ResourceKind::Organization)
}

pub fn org_id_tag(org_id: &str) -> ResourceTag {
    ResourceTag::entity(ResourceKind::Organization, org_id)
}

pub fn settings_id_tag(org_id: &str, user_id: &str) -> ResourceTag {
    ResourceTag::parent_child(ResourceKind::OrganizationUserSettings, org_id, user_id)
}

pub fn org_scopes(org_id: &str) -> Vec<Box<dyn Tag>> {
    vec![org_global_tag().boxed(), org_id_tag(org_id).boxed()]
}

pub fn settings_scopes(org_id: &str, user_id: &str) -> Vec<Box<dyn Tag>> {
    vec![
        ResourceTag::global(ResourceKind::OrganizationUserSettings).boxed(),
        settings_id_tag(org_id, user_id).boxed(),
    ]
}
