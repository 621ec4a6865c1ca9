//! `sharedkernel-results`: success/failure values for expected outcomes.
//!
//! Operations that can fail for ordinary, presentable reasons return an
//! [`Outcome`] instead of an error type. Invariant violations are a separate
//! channel (see `sharedkernel_core::BusinessRuleValidationError`) and are never
//! folded into this one here.

pub mod error;
pub mod failure;
pub mod outcome;

pub use error::Error;
pub use failure::{ErrorResult, FailureResult};
pub use outcome::Outcome;
