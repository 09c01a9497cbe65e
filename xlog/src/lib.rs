//! `XLog` - per-request correlation tracking and structured event emission
//!
//! This library lets any code running within a request's execution context
//! retrieve a stable correlation identifier and request path without
//! threading them through every function call, and emit machine-parseable
//! JSON events automatically enriched with that context.
//!
//! # Quick start
//!
//! ```
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct UserCreated {
//!     user_id: u64,
//! }
//!
//! // At request entry: adopt the upstream correlation id, or mint one.
//! let _ctx = xlog::scope(Some("1234567890abcdef"), Some("/api/users"));
//!
//! // Anywhere in business logic: free-text logs carry the mark...
//! tracing::info!("{} creating user", xlog::correlation_id_mark());
//!
//! // ...and structured events are enriched with the context automatically.
//! xlog::append_event(xlog::Event::new("user_created", UserCreated { user_id: 7 }));
//! // The scope guard clears both slots when the request is done.
//! ```
//!
//! Structured events are written through [`tracing`] at INFO on the dedicated
//! [`EVENT_TARGET`] target; everything else uses the normal module-path
//! targets. Async servers wrap each request's future in
//! [`with_context`] instead of using the thread-bound guard.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod emit;
pub mod errors;
pub mod event;
mod ids;
pub mod keyword;
mod strings;
pub mod types;

pub use context::{
    clear_correlation_id, clear_path, correlation_id, correlation_id_mark, path, scope,
    set_correlation_id, set_path, with_context, ContextScope, EMPTY_CORRELATION_ID,
};
pub use emit::{append_event, try_append_event, EVENT_TARGET};
pub use errors::EmitError;
pub use event::Event;
pub use keyword::keyword;
pub use types::Timestamp;
