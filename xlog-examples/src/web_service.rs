//! A simulated web service wired for correlation tracking.
//!
//! Each incoming request runs inside its own execution context: the upstream
//! correlation id (say, from an `X-Correlation-Id` header) is adopted when
//! present and minted when absent, the request path fills the path slot, and
//! everything logged while handling the request — free text and structured
//! events alike — carries both automatically.

use std::time::Instant;

use serde::Serialize;

/// Structured access-log payload emitted once per handled request.
///
/// The emitter adds the timestamp, correlation id, and path; this payload
/// only carries what the context does not already know.
#[derive(Debug, Clone, Serialize)]
pub struct AccessRecord {
    /// HTTP method of the request.
    pub method: String,
    /// Response status code.
    pub status: u16,
    /// Wall-clock handling duration in milliseconds.
    pub duration_ms: u64,
}

/// A minimal response, trimmed to what the example needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code.
    pub status: u16,
    /// Response body.
    pub body: String,
}

/// Handles one request inside its own execution context.
///
/// The upstream correlation id is adopted verbatim when present; a blank or
/// missing one mints a fresh id, so callers never branch on "do I need an
/// id". The context is discarded with the future, which makes this safe on
/// a pooled runtime: the next request through the same worker thread starts
/// clean.
pub async fn handle_request(
    upstream_correlation_id: Option<&str>,
    method: &str,
    path: &str,
) -> Response {
    xlog::with_context(upstream_correlation_id, Some(path), async {
        let started = Instant::now();
        tracing::info!("{} {method} {path} accepted", xlog::correlation_id_mark());

        let response = route(method, path);

        xlog::append_event(xlog::Event::new(
            "access",
            AccessRecord {
                method: method.to_string(),
                status: response.status,
                duration_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            },
        ));
        response
    })
    .await
}

/// Toy routing table standing in for real business logic.
fn route(method: &str, path: &str) -> Response {
    match (method, path) {
        ("GET", "/health") => Response {
            status: 200,
            body: "ok".to_string(),
        },
        ("GET", p) if p.starts_with("/users/") => {
            let user_id = &p["/users/".len()..];
            // Free-text line made searchable by id: grep for KEYWORD[...]
            // or the bare id to find every request touching this user.
            tracing::info!(
                "{} {} looking up user",
                xlog::correlation_id_mark(),
                xlog::keyword(&[Some(user_id)])
            );
            Response {
                status: 200,
                body: format!("user {user_id}"),
            }
        }
        _ => {
            tracing::warn!("{} no route for {method} {path}", xlog::correlation_id_mark());
            Response {
                status: 404,
                body: "not found".to_string(),
            }
        }
    }
}

/// Installs a plain `tracing-subscriber` for running the example as a
/// binary. Real deployments would route [`xlog::EVENT_TARGET`] to a separate
/// sink here instead of mixing it into stdout.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
