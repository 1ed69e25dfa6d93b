use auth::{InsufficientPermissionsError, TokenError};
use remote::{RemoteFailure, TransportError};
use validation::ValidationError;

/// Failure taxonomy for mutations. Expected business failures are recovered
/// into an [`ActionResult::Failure`] at the action boundary and never
/// propagate as panics or opaque errors.
#[derive(thiserror::Error, Debug)]
pub enum ActionError {
    #[error("no authenticated actor")]
    Unauthorized,

    #[error(transparent)]
    Forbidden(#[from] InsufficientPermissionsError),

    /// Entitled plan tiers are exhausted. Forbidden-class, but carries its
    /// own user-facing message.
    #[error("{0}")]
    PlanLimit(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("entity absent or not visible to the current actor")]
    NotFound,

    #[error(transparent)]
    Remote(#[from] RemoteFailure),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl From<TokenError> for ActionError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::NoActor => ActionError::Unauthorized,
            TokenError::Provider(message) => {
                ActionError::Remote(RemoteFailure { message })
            }
        }
    }
}

/// Settled outcome of a mutation: `{error: false, data, message?}` or
/// `{error: true, message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult<T = ()> {
    Success { data: T, message: Option<String> },
    Failure { message: String },
}

impl<T> ActionResult<T> {
    pub fn success(data: T) -> Self {
        ActionResult::Success {
            data,
            message: None,
        }
    }

    pub fn success_with(data: T, message: impl Into<String>) -> Self {
        ActionResult::Success {
            data,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ActionResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ActionResult::Failure { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ActionResult::Success { message, .. } => message.as_deref(),
            ActionResult::Failure { message } => Some(message),
        }
    }

    pub fn data(self) -> Option<T> {
        match self {
            ActionResult::Success { data, .. } => Some(data),
            ActionResult::Failure { .. } => None,
        }
    }

    /// Flatten into `Result<(), message>`, the shape optimistic edit cells
    /// settle on.
    pub fn into_settlement(self) -> Result<(), String> {
        match self {
            ActionResult::Success { .. } => Ok(()),
            ActionResult::Failure { message } => Err(message),
        }
    }
}
