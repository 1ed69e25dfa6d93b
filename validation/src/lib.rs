//! Payload schema checks. Passing a check yields a [`Valid<T>`] witness;
//! mutation entry points only accept witnesses, so an unvalidated payload
//! cannot reach a write.

use std::ops::Deref;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Witness that a payload passed its schema checks.
#[derive(Debug)]
pub struct Valid<T>(T);

impl<T> Valid<T> {
    #[inline]
    pub fn inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Valid<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AsRef<T> for Valid<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub trait Validate: Sized {
    /// Check the payload, normalizing as it goes (e.g. trimming optional
    /// strings down to `None`).
    fn validate(self) -> Result<Valid<Self>, ValidationError>;
}

/// `Some("  ") -> None`, `Some(" x ") -> Some("x")`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        match trimmed.is_empty() {
            true => None,
            false => Some(trimmed.to_string()),
        }
    })
}

pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    match value.trim().is_empty() {
        true => Err(ValidationError::new(field, "must not be empty")),
        false => Ok(()),
    }
}

/// Wrap a checked value. For use at the end of [`Validate`] implementations;
/// reaching for this anywhere else defeats the witness.
pub fn sealed<T>(value: T) -> Valid<T> {
    Valid(value)
}
