//! The result of an operation that may fail for expected reasons.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::failure::{ErrorResult, FailureResult};

/// Success with a payload, or an expected failure.
///
/// The variant is fixed at construction. Callers check [`is_success`] before
/// touching the payload; a failed outcome carries no meaningful data.
///
/// [`is_success`]: Outcome::is_success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(ErrorResult),
}

impl Outcome<()> {
    /// Success without a payload.
    pub fn ok() -> Self {
        Outcome::Success(())
    }
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        Outcome::Success(data)
    }

    /// Failure with a message and no error detail.
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(ErrorResult::new(message))
    }

    /// Failure with a message and detail; `None` is treated as no detail.
    pub fn failure_with(message: impl Into<String>, errors: impl Into<Option<Vec<Error>>>) -> Self {
        Outcome::Failure(ErrorResult::with_errors(message, errors))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The payload, present only on success.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// The payload on success, `T::default()` on failure.
    pub fn data_or_default(self) -> T
    where
        T: Default,
    {
        self.into_data().unwrap_or_default()
    }

    pub fn as_failure(&self) -> Option<&ErrorResult> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure),
        }
    }

    /// Failure message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        self.as_failure().map(|failure| failure.message())
    }

    /// Error detail; empty on success.
    pub fn errors(&self) -> &[Error] {
        match self {
            Outcome::Success(_) => &[],
            Outcome::Failure(failure) => failure.errors(),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(data) => f(data),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Convert to a std `Result` so `?` can be used at call sites.
    pub fn into_result(self) -> Result<T, ErrorResult> {
        self.into()
    }
}

impl<T> From<Outcome<T>> for Result<T, ErrorResult> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Result<T, ErrorResult>> for Outcome<T> {
    fn from(result: Result<T, ErrorResult>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(failure) => Outcome::Failure(failure),
        }
    }
}

impl<T> From<ErrorResult> for Outcome<T> {
    fn from(failure: ErrorResult) -> Self {
        Outcome::Failure(failure)
    }
}
