//! Domain layer over the remote job-board API: resource tags, DTOs,
//! fail-soft fetchers and permission-gated mutations.

mod action;
pub use action::{ActionError, ActionResult};

pub mod applications;
pub mod job_listings;
pub mod organizations;
pub mod tags;
pub mod users;
