mod context;
pub use context::{CurrentAuth, IdentityProvider, TokenError};

mod permission;
pub use permission::{InsufficientPermissionsError, Permission, require};

mod plan;
pub use plan::PlanFeature;

mod token;
pub use token::BearerToken;
