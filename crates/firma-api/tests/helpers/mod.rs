//! Test helpers: build AppState and a TestServer for integration tests.
//!
//! The upstream ticket API is replaced by a recorder so tests can assert on
//! the description updates the relay sends, or force a failure.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::extract::connect_info::MockConnectInfo;
use axum_test::TestServer;
use firma_api::setup::routes;
use firma_api::state::AppState;
use firma_api::tokens::TokenStore;
use firma_core::Config;
use firma_sdp::{TicketApi, UpstreamError};
use firma_storage::PdfStore;
use tempfile::TempDir;

/// Recording stand-in for the ticketing system.
#[derive(Default)]
pub struct RecordingTicketApi {
    /// (request_id, description) pairs, in call order.
    pub calls: Mutex<Vec<(String, String)>>,
    /// When set, every call fails with this upstream status and body.
    pub fail_with: Mutex<Option<(u16, String)>>,
}

#[async_trait]
impl TicketApi for RecordingTicketApi {
    async fn update_description(
        &self,
        request_id: &str,
        description: &str,
    ) -> Result<(), UpstreamError> {
        if let Some((status, body)) = self.fail_with.lock().unwrap().clone() {
            return Err(UpstreamError::Status { status, body });
        }
        self.calls
            .lock()
            .unwrap()
            .push((request_id.to_string(), description.to_string()));
        Ok(())
    }
}

impl RecordingTicketApi {
    pub fn last_call(&self) -> Option<(String, String)> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn fail_with(&self, status: u16, body: &str) {
        *self.fail_with.lock().unwrap() = Some((status, body.to_string()));
    }
}

/// Test application: server plus the owned resources assertions need.
pub struct TestApp {
    pub server: TestServer,
    pub upstream: Arc<RecordingTicketApi>,
    pub state: Arc<AppState>,
    pub _temp_dir: TempDir,
}

fn test_config(storage_dir: &std::path::Path) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        storage_dir: storage_dir.display().to_string(),
        public_base_url: "http://localhost:4000".to_string(),
        sdp_base_url: "https://sdp.example.com".to_string(),
        sdp_auth_token: "test-authtoken".to_string(),
        upstream_timeout_secs: 5,
        token_ttl_secs: 120,
        token_sweep_interval_secs: 0,
        max_pdf_size_bytes: 10 * 1024 * 1024,
    }
}

/// Setup a test app with the default 120 s token TTL.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_ttl(chrono::Duration::seconds(120)).await
}

/// Setup a test app with an explicit token TTL (zero = every token expired).
pub async fn setup_test_app_with_ttl(ttl: chrono::Duration) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let config = test_config(temp_dir.path());

    let storage = PdfStore::new(temp_dir.path()).await.expect("create store");
    let upstream = Arc::new(RecordingTicketApi::default());
    let tokens = TokenStore::new(ttl);

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        tokens,
        upstream: upstream.clone(),
    });

    let router = routes::setup_routes(&config, state.clone())
        .expect("setup routes")
        .layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 8080))));

    let server = TestServer::new(router).expect("create test server");

    TestApp {
        server,
        upstream,
        state,
        _temp_dir: temp_dir,
    }
}
