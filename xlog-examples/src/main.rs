//! Runs the simulated web service once, printing free-text lines and
//! structured events to stdout. Set `RUST_LOG` to adjust verbosity.

use xlog_examples::web_service::{self, handle_request};

#[tokio::main]
async fn main() {
    web_service::init_logging();

    handle_request(Some("1234567890abcdef"), "GET", "/users/42").await;
    handle_request(None, "GET", "/health").await;
    handle_request(None, "POST", "/missing").await;
}
