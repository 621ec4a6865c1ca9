//! Structured error detail attached to a failure result.

use serde::{Deserialize, Serialize};

/// One item of failure detail: an optional machine-readable code plus a
/// human-readable description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Error {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    details: String,
}

impl Error {
    /// Error without a code.
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            code: None,
            details: details.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            details: details.into(),
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn details(&self) -> &str {
        &self.details
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}", self.details),
            None => f.write_str(&self.details),
        }
    }
}
