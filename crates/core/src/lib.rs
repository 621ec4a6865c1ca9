//! `sharedkernel-core`: domain-modeling building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! entities with identity and a domain event log, value objects with structural
//! equality, and business-rule checks that fail with an invariant error.

pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod rule;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::{DomainEvent, EventPayload};
pub use id::{EntityId, EventId};
pub use rule::{BusinessRule, BusinessRuleValidationError, check_rule};
pub use value_object::{FloatBits, ValueObject, equal_operator, not_equal_operator};
