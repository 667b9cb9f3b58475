//! Configuration module
//!
//! Environment-driven configuration for the relay. Values come from the
//! process environment (a `.env` file is honored via dotenvy); everything has
//! a default except the upstream ticket API base URL and auth token.

use std::env;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_STORAGE_DIR: &str = "./pdf";
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:4000";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_TOKEN_TTL_SECS: i64 = 120;
const DEFAULT_TOKEN_SWEEP_INTERVAL_SECS: u64 = 60;
const DEFAULT_MAX_PDF_SIZE_MB: usize = 10;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Directory PDF files are written to. Created on startup.
    pub storage_dir: String,
    /// Base URL embedded in the viewer links sent to the ticketing system.
    pub public_base_url: String,
    /// Upstream ticket API base URL (e.g. "https://sdp.example.com").
    pub sdp_base_url: String,
    /// Value of the `authtoken` header on upstream calls.
    pub sdp_auth_token: String,
    pub upstream_timeout_secs: u64,
    /// Access token validity window in seconds.
    pub token_ttl_secs: i64,
    /// Interval between expired-token sweeps. 0 = disabled.
    pub token_sweep_interval_secs: u64,
    pub max_pdf_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_pdf_size_mb = env::var("MAX_PDF_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_PDF_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_PDF_SIZE_MB);

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            storage_dir: env::var("STORAGE_DIR")
                .unwrap_or_else(|_| DEFAULT_STORAGE_DIR.to_string()),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.to_string()),
            sdp_base_url: env::var("SDP_BASE_URL")
                .map_err(|_| anyhow::anyhow!("SDP_BASE_URL must be set"))?,
            sdp_auth_token: env::var("SDP_AUTH_TOKEN")
                .map_err(|_| anyhow::anyhow!("SDP_AUTH_TOKEN must be set"))?,
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            token_ttl_secs: env::var("TOKEN_TTL_SECS")
                .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            token_sweep_interval_secs: env::var("TOKEN_SWEEP_INTERVAL_SECS")
                .unwrap_or_else(|_| DEFAULT_TOKEN_SWEEP_INTERVAL_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_TOKEN_SWEEP_INTERVAL_SECS),
            max_pdf_size_bytes: max_pdf_size_mb * 1024 * 1024,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}
