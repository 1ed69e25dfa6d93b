mod actions;
pub use actions::update_organization_user_settings;

pub mod cache;

mod dto;
pub use dto::{Organization, OrganizationUserSettings, OrganizationUserSettingsPayload};

mod fetch;
pub use fetch::{get_organization, get_organization_user_settings};
