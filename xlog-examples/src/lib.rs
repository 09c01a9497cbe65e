//! Example integrations of the `xlog` correlation and structured-event
//! library.
//!
//! This crate demonstrates the intended wiring for a concurrent service:
//! one execution context per request, free-text log lines carrying the
//! correlation mark, and structured events collected on the dedicated
//! event target.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Web service example: per-request contexts, access-log events, and
/// keyword-searchable free-text lines.
pub mod web_service;
