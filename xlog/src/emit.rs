//! Structured-event emission.
//!
//! Events are serialized to a single JSON line and written through
//! [`tracing`] at INFO on the dedicated [`EVENT_TARGET`] target, kept
//! distinct from normal application logs so collection configuration can
//! route structured events to their own pipeline.

use serde::Serialize;

use crate::errors::EmitError;
use crate::event::Event;

/// The `tracing` target carrying structured events.
///
/// This name is stable: external log-collection configuration routes on it.
/// Subscribers that should not mix structured events into human-readable
/// output filter this target out of the default sink and direct it to the
/// structured pipeline instead.
pub const EVENT_TARGET: &str = "xlog::event";

/// Enriches, serializes, and writes a structured event, returning the
/// serialization fault if one occurs.
///
/// This is the result-typed core of the emitter; most callers want
/// [`append_event`], which additionally contains the failure. The enriched
/// event is serialized with [`serde_json`] and written as one line at INFO
/// on [`EVENT_TARGET`].
pub fn try_append_event<P: Serialize>(event: Event<P>) -> Result<(), EmitError> {
    let event = event.enrich();
    let line = serde_json::to_string(&event).map_err(|source| EmitError::Serialize {
        event_type: std::any::type_name::<P>(),
        source,
    })?;
    tracing::info!(target: EVENT_TARGET, "{line}");
    Ok(())
}

/// Enriches, serializes, and writes a structured event.
///
/// Unset enrichable fields are filled per [`Event::enrich`]. A serialization
/// failure never reaches the caller: the event is dropped and the failure is
/// reported at ERROR on the normal logging target, naming the payload type
/// and the underlying fault. Losing one structured event is acceptable;
/// aborting the request that tried to log it is not.
pub fn append_event<P: Serialize>(event: Event<P>) {
    if let Err(error) = try_append_event(event) {
        tracing::error!("{error}");
    }
}
