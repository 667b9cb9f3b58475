//! Tracing initialization.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing with a compact console format. `RUST_LOG` overrides the
/// default filter; the `audit` target is enabled by default so audit events
/// always reach the sink.
pub fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "firma_api=debug,firma_storage=debug,firma_sdp=debug,audit=info,tower_http=debug".into()
        }))
        .with(console_fmt)
        .init();
}
