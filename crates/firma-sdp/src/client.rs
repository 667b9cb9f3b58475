use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::UpstreamError;

const AUTH_HEADER: &str = "authtoken";

/// Operations the relay needs from the ticketing system.
#[async_trait]
pub trait TicketApi: Send + Sync {
    /// Replace the ticket's description field. An empty string clears it.
    async fn update_description(
        &self,
        request_id: &str,
        description: &str,
    ) -> Result<(), UpstreamError>;
}

/// reqwest-backed client for a ServiceDesk Plus style request API.
#[derive(Debug, Clone)]
pub struct SdpClient {
    http: reqwest::Client,
    base_url: String,
}

impl SdpClient {
    pub fn new(
        base_url: &str,
        auth_token: &str,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let mut default_headers = HeaderMap::new();
        let token_value = HeaderValue::from_str(auth_token)
            .map_err(|e| UpstreamError::Client(format!("invalid auth token: {}", e)))?;
        default_headers.insert(AUTH_HEADER, token_value);

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| UpstreamError::Client(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn request_url(&self, request_id: &str) -> String {
        format!("{}/api/v3/requests/{}", self.base_url, request_id)
    }
}

#[async_trait]
impl TicketApi for SdpClient {
    async fn update_description(
        &self,
        request_id: &str,
        description: &str,
    ) -> Result<(), UpstreamError> {
        let url = self.request_url(request_id);
        debug!(url = %url, "updating ticket description");

        let input_data = serde_json::json!({
            "request": { "description": description }
        });

        let response = self
            .http
            .put(&url)
            .form(&[("input_data", input_data.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// HTML fragment placed in the ticket description: a link opening the stored
/// PDF in a viewer popup. Wording matches what agents already see in tickets.
pub fn signed_document_link(public_base_url: &str, filename: &str) -> String {
    format!(
        "Se adjunta el documento firmado: <a href='{}/pdf/{}' onclick=\"window.open(this.href, 'visor_pdf', 'width=800,height=600'); return false;\">{}</a>",
        public_base_url.trim_end_matches('/'),
        filename,
        filename
    )
}
