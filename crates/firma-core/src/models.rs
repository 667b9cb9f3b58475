//! Request and response bodies for the relay's HTTP surface.
//!
//! Field names are a compatibility contract with the ticketing platform's
//! signing widget (`request_id`, `pdf_filename`, `pdf_base64`, `access_token`,
//! `status`); do not rename them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /token/generar`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TokenRequest {
    pub request_id: String,
    pub pdf_filename: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    pub status: String,
    pub access_token: String,
}

/// Body of `POST /firmar`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignRequest {
    /// Action label supplied by the signing widget; logged, not interpreted.
    #[serde(default)]
    pub action: String,
    pub request_id: String,
    pub pdf_base64: String,
    pub pdf_filename: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SignResponse {
    pub status: String,
    pub message: String,
    pub filename: String,
}

/// Body of `POST /pdf/descargar`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DownloadRequest {
    pub pdf_filename: String,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DownloadResponse {
    pub status: String,
    pub pdf_base64: String,
}

/// Body of `POST /pdf/eliminar`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DeleteRequest {
    pub request_id: String,
    pub pdf_filename: String,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub status: String,
    pub message: String,
}

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";
