//! Error types for `xlog`.
//!
//! Emission is deliberately a narrow error surface: enrichment is pure field
//! defaulting and cannot fail, and writes go through `tracing`, which is
//! infallible from the caller's perspective. The only fault that can occur
//! is turning an enriched event into JSON, and
//! [`append_event`](crate::append_event) contains even that one — a logging
//! side channel must never alter the control flow of the business operation
//! it observes. [`try_append_event`](crate::try_append_event) exposes the
//! fault to callers that want to observe it themselves.

use thiserror::Error;

/// Errors that can occur while emitting a structured event.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The enriched event could not be serialized to JSON.
    ///
    /// Carries the payload's type name so the fallback report identifies
    /// which event kind was lost.
    #[error("failed to serialize structured event [{event_type}]: {source}")]
    Serialize {
        /// Type name of the event payload that failed to serialize.
        event_type: &'static str,
        /// The underlying serializer fault.
        #[source]
        source: serde_json::Error,
    },
}

impl EmitError {
    /// The type name of the event payload involved in the failure.
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::Serialize { event_type, .. } => event_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_event_type_and_fault() {
        let source = serde_json::to_string(&std::collections::HashMap::from([((1, 2), "x")]))
            .expect_err("non-string map keys cannot serialize to JSON");
        let error = EmitError::Serialize {
            event_type: "demo::LoginEvent",
            source,
        };
        let rendered = error.to_string();
        assert!(rendered.contains("demo::LoginEvent"));
        assert!(rendered.starts_with("failed to serialize structured event"));
    }

    #[test]
    fn source_chain_exposes_the_serde_fault() {
        use std::error::Error as _;

        let source = serde_json::to_string(&std::collections::HashMap::from([((1, 2), "x")]))
            .expect_err("non-string map keys cannot serialize to JSON");
        let error = EmitError::Serialize {
            event_type: "demo::LoginEvent",
            source,
        };
        assert!(error.source().is_some());
    }
}
