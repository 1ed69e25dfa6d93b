//! Publication status and featuring transitions. Pure functions: the
//! mutation path re-fetches the authoritative listing and runs these against
//! it, never against a client-supplied current state.

use time::OffsetDateTime;

use super::dto::{JobListing, JobListingStatus};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    #[error("organization has reached its maximum published job listings")]
    PublishQuotaReached,

    #[error("organization has reached its maximum featured job listings")]
    FeatureQuotaReached,
}

/// Fields a status transition writes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPatch {
    pub status: JobListingStatus,
    pub posted_at: Option<OffsetDateTime>,
}

/// The toggle target: anything unpublished publishes, published delists.
pub fn next_status(current: JobListingStatus) -> JobListingStatus {
    match current {
        JobListingStatus::Draft | JobListingStatus::Delisted => JobListingStatus::Published,
        JobListingStatus::Published => JobListingStatus::Delisted,
    }
}

/// Compute the patch for moving `listing` to `target`.
///
/// Publishing is gated on quota. `posted_at` is stamped only while it is
/// still unset: a re-publish after delisting keeps the original posted-at,
/// which is why the check is on the field and not on "status is draft".
/// Delisting is always allowed.
pub fn apply_status_transition(
    listing: &JobListing,
    target: JobListingStatus,
    can_publish_more: bool,
    now: OffsetDateTime,
) -> Result<StatusPatch, TransitionError> {
    match target {
        JobListingStatus::Published => {
            if listing.status != JobListingStatus::Published && !can_publish_more {
                return Err(TransitionError::PublishQuotaReached);
            }
            Ok(StatusPatch {
                status: JobListingStatus::Published,
                posted_at: listing.posted_at.or(Some(now)),
            })
        }
        JobListingStatus::Delisted | JobListingStatus::Draft => Ok(StatusPatch {
            status: target,
            posted_at: listing.posted_at,
        }),
    }
}

/// Compute the new `isFeatured` flag. Un-featuring is always allowed;
/// featuring is capped.
pub fn apply_featured_toggle(
    listing: &JobListing,
    can_feature_more: bool,
) -> Result<bool, TransitionError> {
    match listing.is_featured {
        true => Ok(false),
        false if can_feature_more => Ok(true),
        false => Err(TransitionError::FeatureQuotaReached),
    }
}
