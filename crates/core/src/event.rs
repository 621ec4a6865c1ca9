//! Domain events: facts recorded during a domain operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::EventId;

/// Payload of a domain event.
///
/// Usually an enum with one variant per kind of fact an entity records.
pub trait EventPayload {
    /// Stable name of the concrete event variant (e.g. `"OrderPlaced"`).
    ///
    /// Consumers outside the kernel dispatch on this value.
    fn event_type(&self) -> &'static str;
}

/// A recorded domain event plus its publication state.
///
/// `id` and `occurred_on` are assigned once at construction and never change.
/// `is_published` moves from `false` to `true` at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEvent<P> {
    id: EventId,
    occurred_on: DateTime<Utc>,
    is_published: bool,
    payload: P,
}

impl<P: EventPayload> DomainEvent<P> {
    /// Record a new, unpublished event occurring now.
    pub fn new(payload: P) -> Self {
        Self::with_metadata(EventId::new(), Utc::now(), payload)
    }

    /// Build an unpublished event with explicit metadata (tests, rehydration).
    pub fn with_metadata(id: EventId, occurred_on: DateTime<Utc>, payload: P) -> Self {
        Self {
            id,
            occurred_on,
            is_published: false,
            payload,
        }
    }

    pub fn event_type(&self) -> &'static str {
        self.payload.event_type()
    }
}

impl<P> DomainEvent<P> {
    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }

    /// Mark the event as published. Repeated calls have no further effect.
    pub fn published(&mut self) {
        self.is_published = true;
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}
