mod actions;
pub use actions::{
    change_application_rating, change_application_stage, create_application,
};

pub mod cache;

mod dto;
pub use dto::{ApplicationPayload, ApplicationStage, JobListingApplication, validate_rating};

mod fetch;
pub use fetch::{get_application, list_applications};
