use serde::{Deserialize, Deserializer, de};

/// Wire wrapper around every API response:
/// `{"success": true, "data": T}` or `{"success": false, "message": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure { message: String },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteFailure {
    pub message: String,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, RemoteFailure> {
        match self {
            Envelope::Success(data) => Ok(data),
            Envelope::Failure { message } => Err(RemoteFailure { message }),
        }
    }

    /// Fail-soft view: a declined envelope reads as absence.
    pub fn into_option(self) -> Option<T> {
        match self {
            Envelope::Success(data) => Some(data),
            Envelope::Failure { message } => {
                tracing::info!(%message, "remote declined");
                None
            }
        }
    }
}

impl<'de, T> Deserialize<'de> for Envelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw<T> {
            success: bool,
            data: Option<T>,
            message: Option<String>,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        match raw.success {
            true => match raw.data {
                Some(data) => Ok(Envelope::Success(data)),
                None => Err(de::Error::missing_field("data")),
            },
            false => Ok(Envelope::Failure {
                message: raw
                    .message
                    .unwrap_or_else(|| "remote api reported failure".to_string()),
            }),
        }
    }
}
