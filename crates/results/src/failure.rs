//! Failure results: a message plus ordered error detail.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Uniform view over any failure result.
///
/// Lets callers present or forward a failure without knowing which concrete
/// failure type produced it.
pub trait FailureResult {
    fn message(&self) -> &str;

    /// Structured detail, in the order it was supplied. Possibly empty.
    fn errors(&self) -> &[Error];
}

/// An expected, recoverable failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ErrorResult {
    message: String,
    #[serde(default)]
    errors: Vec<Error>,
}

impl ErrorResult {
    /// Failure with a message and no error detail.
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_errors(message, None)
    }

    /// Failure with a message and detail; `None` is treated as no detail.
    pub fn with_errors(message: impl Into<String>, errors: impl Into<Option<Vec<Error>>>) -> Self {
        Self {
            message: message.into(),
            errors: errors.into().unwrap_or_default(),
        }
    }

    /// Append one more error to the detail.
    pub fn with_error(mut self, error: Error) -> Self {
        self.errors.push(error);
        self
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

impl FailureResult for ErrorResult {
    fn message(&self) -> &str {
        &self.message
    }

    fn errors(&self) -> &[Error] {
        &self.errors
    }
}
