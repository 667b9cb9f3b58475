//! Application initialization: storage, token store, upstream client, routes.

pub mod routes;
pub mod server;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::Router;
use firma_core::Config;
use firma_sdp::SdpClient;
use firma_storage::PdfStore;

use crate::state::AppState;
use crate::tokens::TokenStore;

/// Build the application state and router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router)> {
    let storage = PdfStore::new(&config.storage_dir).await?;
    tracing::info!(dir = %storage.base_path().display(), "PDF storage ready");

    let upstream = SdpClient::new(
        &config.sdp_base_url,
        &config.sdp_auth_token,
        Duration::from_secs(config.upstream_timeout_secs),
    )?;

    let tokens = TokenStore::new(chrono::Duration::seconds(config.token_ttl_secs));

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        tokens,
        upstream: Arc::new(upstream),
    });

    spawn_token_sweeper(state.clone());

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

/// Periodically drop expired token records. Lazy eviction on lookup is the
/// correctness mechanism; the sweep only bounds memory for tokens that are
/// never looked up again.
fn spawn_token_sweeper(state: Arc<AppState>) {
    let interval_secs = state.config.token_sweep_interval_secs;
    if interval_secs == 0 {
        return;
    }

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        interval.tick().await; // first tick completes immediately
        loop {
            interval.tick().await;
            let removed = state.tokens.sweep().await;
            if removed > 0 {
                tracing::debug!(removed, "Expired access tokens swept");
            }
        }
    });
}
