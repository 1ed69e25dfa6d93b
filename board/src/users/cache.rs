use cache::Tag;

use crate::tags::{ResourceKind, ResourceTag};

pub fn user_global_tag() -> ResourceTag {
    ResourceTag::global(ResourceKind::User)
}

pub fn user_id_tag(user_id: &str) -> ResourceTag {
    ResourceTag::entity(ResourceKind::User, user_id)
}

pub fn resume_global_tag() -> ResourceTag {
    ResourceTag::global(ResourceKind::UserResume)
}

pub fn resume_id_tag(user_id: &str) -> ResourceTag {
    ResourceTag::entity(ResourceKind::UserResume, user_id)
}

pub fn user_scopes(user_id: &str) -> Vec<Box<dyn Tag>> {
    vec![user_global_tag().boxed(), user_id_tag(user_id).boxed()]
}

pub fn resume_scopes(user_id: &str) -> Vec<Box<dyn Tag>> {
    vec![resume_global_tag().boxed(), resume_id_tag(user_id).boxed()]
}
