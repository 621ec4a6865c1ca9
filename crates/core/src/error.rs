//! Domain error model.

use thiserror::Error;

use crate::rule::BusinessRuleValidationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// This is the invariant channel: a value here means the current operation
/// must be aborted. Expected, presentable failures are modelled separately by
/// `sharedkernel_results::ErrorResult` and are never produced from this type
/// by the kernel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A business rule was broken.
    #[error(transparent)]
    RuleViolation(#[from] BusinessRuleValidationError),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Returns the broken rule, if this error came from a rule check.
    pub fn as_rule_violation(&self) -> Option<&BusinessRuleValidationError> {
        match self {
            DomainError::RuleViolation(err) => Some(err),
            DomainError::InvalidId(_) => None,
        }
    }
}
