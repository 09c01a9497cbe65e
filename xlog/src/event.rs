//! The structured-event envelope.
//!
//! An [`Event`] wraps an application-defined payload together with the three
//! fields the emitter knows how to enrich: timestamp, correlation id, and
//! request path. Everything else is opaque payload, serialized flattened into
//! the same JSON object so consumers see one flat record per line.

use serde::Serialize;

use crate::context;
use crate::types::Timestamp;

/// A structured event awaiting emission.
///
/// Construct one with [`Event::new`], optionally pre-set any of the
/// enrichable fields, and hand it to [`append_event`](crate::append_event).
/// Fields left unset are filled in at emission time: the timestamp from the
/// clock, the correlation id and path from the current execution context.
/// A pre-set value is never overwritten.
///
/// ```
/// use serde::Serialize;
/// use xlog::Event;
///
/// #[derive(Serialize)]
/// struct OrderPlaced {
///     order_id: u64,
///     amount_cents: i64,
/// }
///
/// let event = Event::new("order_placed", OrderPlaced { order_id: 42, amount_cents: 1999 });
/// xlog::append_event(event);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Event<P> {
    topic: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(flatten)]
    payload: P,
}

impl<P> Event<P> {
    /// Creates an event for the given topic with all enrichable fields unset.
    ///
    /// The topic discriminates event kinds for downstream consumers and is
    /// always serialized. The payload must serialize to a JSON object (a
    /// struct or a map) so its fields can be flattened into the record.
    pub const fn new(topic: &'static str, payload: P) -> Self {
        Self {
            topic,
            timestamp: None,
            crid: None,
            path: None,
            payload,
        }
    }

    /// Pre-sets the event timestamp. Enrichment will not overwrite it.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Pre-sets the correlation id. Enrichment will not overwrite it.
    #[must_use]
    pub fn with_correlation_id(mut self, crid: impl Into<String>) -> Self {
        self.crid = Some(crid.into());
        self
    }

    /// Pre-sets the request path. Enrichment will not overwrite it.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// The event's topic.
    pub const fn topic(&self) -> &'static str {
        self.topic
    }

    /// The event's timestamp, if set.
    pub const fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp
    }

    /// The event's correlation id, if set.
    pub fn correlation_id(&self) -> Option<&str> {
        self.crid.as_deref()
    }

    /// The event's request path, if set.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// The event's payload.
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Returns a copy of the event with every unset enrichable field filled:
    /// the timestamp from the clock, the correlation id and path from the
    /// current execution context. Pre-set values pass through unchanged.
    ///
    /// After enrichment the timestamp and correlation id are always present;
    /// the path is present iff the event or the context carried one.
    #[must_use]
    pub fn enrich(self) -> Self {
        Self {
            topic: self.topic,
            timestamp: self.timestamp.or_else(|| Some(Timestamp::now())),
            crid: self.crid.or_else(|| Some(context::correlation_id())),
            path: self.path.or_else(context::path),
            payload: self.payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde::Serialize;

    #[derive(Debug, Clone, Serialize)]
    struct Payload {
        user: &'static str,
        attempts: u32,
    }

    fn sample() -> Event<Payload> {
        Event::new(
            "login",
            Payload {
                user: "alice",
                attempts: 1,
            },
        )
    }

    #[test]
    fn enrich_fills_unset_fields_from_context_and_clock() {
        crate::context::set_correlation_id(Some("crid-1"));
        crate::context::set_path(Some("/login"));

        let before = Utc::now();
        let enriched = sample().enrich();
        let after = Utc::now();

        let ts = enriched.timestamp().expect("timestamp filled");
        assert!(ts.as_datetime() >= &before && ts.as_datetime() <= &after);
        assert_eq!(enriched.correlation_id(), Some("crid-1"));
        assert_eq!(enriched.path(), Some("/login"));

        crate::context::clear_correlation_id();
        crate::context::clear_path();
    }

    #[test]
    fn enrich_preserves_preset_fields() {
        crate::context::set_correlation_id(Some("context-crid"));
        crate::context::set_path(Some("/from-context"));

        let preset_ts = Timestamp::now();
        let enriched = sample()
            .with_timestamp(preset_ts)
            .with_correlation_id("event-crid")
            .with_path("/from-event")
            .enrich();

        assert_eq!(enriched.timestamp(), Some(preset_ts));
        assert_eq!(enriched.correlation_id(), Some("event-crid"));
        assert_eq!(enriched.path(), Some("/from-event"));

        crate::context::clear_correlation_id();
        crate::context::clear_path();
    }

    #[test]
    fn enrich_uses_sentinel_when_context_is_empty() {
        crate::context::clear_correlation_id();
        crate::context::clear_path();

        let enriched = sample().enrich();
        assert_eq!(enriched.correlation_id(), Some("-"));
        assert_eq!(enriched.path(), None);
    }

    #[test]
    fn serializes_as_one_flat_object() {
        let event = sample()
            .with_timestamp(Timestamp::new(Utc::now()))
            .with_correlation_id("abc")
            .with_path("/login");

        let value: serde_json::Value = serde_json::to_value(&event).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["topic"], "login");
        assert_eq!(object["crid"], "abc");
        assert_eq!(object["path"], "/login");
        assert_eq!(object["user"], "alice");
        assert_eq!(object["attempts"], 1);
        assert!(object.contains_key("timestamp"));
    }

    #[test]
    fn unset_fields_are_omitted_from_serialization() {
        let value: serde_json::Value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("timestamp"));
        assert!(!object.contains_key("crid"));
        assert!(!object.contains_key("path"));
        assert_eq!(object["topic"], "login");
    }
}
