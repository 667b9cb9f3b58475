//! Audit trail events.
//!
//! Emitted under the `audit` tracing target so operators can route them to a
//! dedicated sink (e.g. `RUST_LOG=audit=info` piped to a file) separately from
//! application logs. Each event carries the action, ticket id, filename,
//! token, and caller address when one is known.

use std::net::SocketAddr;

pub fn record(
    action: &str,
    request_id: &str,
    filename: &str,
    token: &str,
    client: Option<SocketAddr>,
) {
    match client {
        Some(addr) => tracing::info!(
            target: "audit",
            action,
            request_id,
            filename,
            token,
            client = %addr,
            "audit event"
        ),
        None => tracing::info!(
            target: "audit",
            action,
            request_id,
            filename,
            token,
            "audit event"
        ),
    }
}
