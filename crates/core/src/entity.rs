//! Entity: identity + continuity across state changes, with a domain event log.

use serde::{Deserialize, Serialize};

use crate::event::{DomainEvent, EventPayload};

/// Identity and event log embedded by concrete domain entities.
///
/// Domain types hold an `Entity` field next to their own state and expose
/// behaviour that checks rules (with [`check_rule`](crate::check_rule)) and
/// records events through it:
///
/// ```
/// use sharedkernel_core::{BusinessRule, Entity, EntityId, EventPayload, check_rule};
///
/// enum CounterEvent {
///     Incremented,
/// }
///
/// impl EventPayload for CounterEvent {
///     fn event_type(&self) -> &'static str {
///         "Incremented"
///     }
/// }
///
/// struct BelowLimit(u32);
///
/// impl BusinessRule for BelowLimit {
///     fn message(&self) -> String {
///         "counter limit reached".to_string()
///     }
///
///     fn is_broken(&self) -> bool {
///         self.0 >= 10
///     }
/// }
///
/// struct Counter {
///     entity: Entity<EntityId, CounterEvent>,
///     value: u32,
/// }
///
/// impl Counter {
///     fn increment(&mut self) -> Result<(), sharedkernel_core::BusinessRuleValidationError> {
///         check_rule(&BelowLimit(self.value))?;
///         self.value += 1;
///         self.entity.record(CounterEvent::Incremented);
///         Ok(())
///     }
/// }
///
/// let mut counter = Counter { entity: Entity::new(EntityId::new()), value: 0 };
/// counter.increment().unwrap();
/// assert_eq!(counter.entity.domain_events().len(), 1);
/// ```
///
/// Serializes as `{ "id": .., "events": [..] }`, so embedding types can derive
/// serde themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity<Id, P> {
    id: Id,
    events: Vec<DomainEvent<P>>,
}

impl<Id, P> Entity<Id, P>
where
    Id: Clone + Eq + core::hash::Hash + core::fmt::Debug,
    P: EventPayload,
{
    /// Create an entity with the given identity and an empty event log.
    pub fn new(id: Id) -> Self {
        Self {
            id,
            events: Vec::new(),
        }
    }

    /// Restore an entity together with a previously recorded event log.
    pub fn with_events(id: Id, events: Vec<DomainEvent<P>>) -> Self {
        Self { id, events }
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Whether `other` denotes the same entity, regardless of attribute values.
    pub fn same_identity_as<Q>(&self, other: &Entity<Id, Q>) -> bool {
        self.id == other.id
    }

    /// All recorded events in insertion order, published or not.
    pub fn domain_events(&self) -> &[DomainEvent<P>] {
        &self.events
    }

    /// Events not yet published, in insertion order.
    pub fn pending_events(&self) -> impl Iterator<Item = &DomainEvent<P>> {
        self.events.iter().filter(|e| !e.is_published())
    }

    pub fn has_pending_events(&self) -> bool {
        self.pending_events().next().is_some()
    }

    /// Append an event to the tail of the log.
    pub fn add_domain_event(&mut self, event: DomainEvent<P>) {
        tracing::trace!(
            entity_id = ?self.id,
            event_id = %event.id(),
            event_type = event.event_type(),
            "domain event recorded"
        );
        self.events.push(event);
    }

    /// Record `payload` as a new event occurring now.
    pub fn record(&mut self, payload: P) {
        self.add_domain_event(DomainEvent::new(payload));
    }

    /// Mark every event in the log as published, in insertion order.
    ///
    /// The log is left intact; already-published events stay in place.
    pub fn publish_all_events(&mut self) {
        let mut newly_published = 0usize;
        for event in &mut self.events {
            if !event.is_published() {
                newly_published += 1;
            }
            event.published();
        }

        tracing::debug!(
            entity_id = ?self.id,
            total = self.events.len(),
            newly_published,
            "domain events published"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{EntityId, EventId};
    use crate::rule::{BusinessRule, BusinessRuleValidationError, check_rule};
    use chrono::Utc;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    enum StubEvent {
        Create,
        Update,
    }

    impl EventPayload for StubEvent {
        fn event_type(&self) -> &'static str {
            match self {
                StubEvent::Create => "CreateDomainEvent",
                StubEvent::Update => "UpdateDomainEvent",
            }
        }
    }

    struct EntityStub {
        entity: Entity<EntityId, StubEvent>,
    }

    impl EntityStub {
        fn new() -> Self {
            let mut entity = Entity::new(EntityId::new());
            entity.record(StubEvent::Create);
            entity.record(StubEvent::Update);
            Self { entity }
        }

        fn update(&mut self, allowed: bool) -> Result<(), BusinessRuleValidationError> {
            check_rule(&Rule(!allowed))?;
            self.entity.record(StubEvent::Update);
            Ok(())
        }
    }

    struct Rule(bool);

    impl BusinessRule for Rule {
        fn message(&self) -> String {
            "rule message".to_string()
        }

        fn is_broken(&self) -> bool {
            self.0
        }
    }

    fn event_types(entity: &Entity<EntityId, StubEvent>) -> Vec<&'static str> {
        entity.domain_events().iter().map(|e| e.event_type()).collect()
    }

    #[test]
    fn publish_all_events_marks_every_event() {
        let mut stub = EntityStub::new();

        stub.entity.publish_all_events();

        assert_eq!(stub.entity.domain_events().len(), 2);
        assert!(stub.entity.domain_events().iter().all(|e| e.is_published()));
        assert!(!stub.entity.has_pending_events());
    }

    #[test]
    fn publish_twice_neither_duplicates_nor_reorders() {
        let mut stub = EntityStub::new();
        let ids: Vec<EventId> = stub.entity.domain_events().iter().map(|e| e.id()).collect();

        stub.entity.publish_all_events();
        stub.entity.publish_all_events();

        let after: Vec<EventId> = stub.entity.domain_events().iter().map(|e| e.id()).collect();
        assert_eq!(after, ids);
        assert_eq!(event_types(&stub.entity), ["CreateDomainEvent", "UpdateDomainEvent"]);
        assert!(stub.entity.domain_events().iter().all(|e| e.is_published()));
    }

    #[test]
    fn add_domain_event_appends_without_dedup() {
        let mut entity: Entity<EntityId, StubEvent> = Entity::new(EntityId::new());
        let event = DomainEvent::with_metadata(EventId::new(), Utc::now(), StubEvent::Update);

        entity.add_domain_event(event.clone());
        entity.add_domain_event(event.clone());
        entity.record(StubEvent::Create);

        assert_eq!(entity.domain_events().len(), 3);
        assert_eq!(entity.domain_events()[0], event);
        assert_eq!(entity.domain_events()[1], event);
        assert_eq!(entity.domain_events()[2].event_type(), "CreateDomainEvent");
    }

    #[test]
    fn events_added_after_publishing_are_pending() {
        let mut stub = EntityStub::new();
        stub.entity.publish_all_events();

        stub.entity.record(StubEvent::Update);

        let pending: Vec<_> = stub.entity.pending_events().collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].event_type(), "UpdateDomainEvent");
        assert_eq!(stub.entity.domain_events().len(), 3);
    }

    #[test]
    fn identity_is_independent_of_events() {
        let id = EntityId::new();
        let mut a: Entity<EntityId, StubEvent> = Entity::new(id);
        let b: Entity<EntityId, StubEvent> = Entity::with_events(id, Vec::new());
        a.record(StubEvent::Create);

        assert!(a.same_identity_as(&b));
        assert!(!a.same_identity_as(&Entity::<EntityId, StubEvent>::new(EntityId::new())));
        assert_eq!(a.id(), &id);
    }

    #[test]
    fn broken_rule_aborts_before_recording() {
        let mut stub = EntityStub::new();

        stub.update(true).unwrap();
        assert_eq!(stub.entity.domain_events().len(), 3);

        let err = stub.update(false).unwrap_err();
        assert_eq!(err.details(), "rule message");
        assert_eq!(stub.entity.domain_events().len(), 3);
    }

    #[test]
    fn serde_round_trips_identity_and_event_log() {
        let mut stub = EntityStub::new();
        stub.entity.publish_all_events();
        stub.entity.record(StubEvent::Create);

        let json = serde_json::to_value(&stub.entity).unwrap();
        assert_eq!(json["id"], serde_json::json!(stub.entity.id().to_string()));
        assert_eq!(json["events"].as_array().map(Vec::len), Some(3));

        let back: Entity<EntityId, StubEvent> = serde_json::from_value(json).unwrap();
        assert_eq!(back.id(), stub.entity.id());
        assert_eq!(back.domain_events(), stub.entity.domain_events());
        assert_eq!(back.pending_events().count(), 1);
    }
}
