mod actions;
pub use actions::{
    create_job_listing, delete_job_listing, toggle_job_listing_featured,
    toggle_job_listing_status, update_job_listing,
};

pub mod cache;

mod dto;
pub use dto::{
    ExperienceLevel, JobListing, JobListingPayload, JobListingStatus, JobListingType,
    LocationRequirement, WageInterval, sort_for_display,
};

mod fetch;
pub use fetch::{
    count_featured_job_listings, count_published_job_listings, get_job_listing,
    get_published_job_listing, list_org_job_listings,
};

pub mod plan;
pub mod status;
