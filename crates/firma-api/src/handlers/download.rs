use crate::audit;
use crate::error::{ErrorBody, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use firma_core::models::{DownloadRequest, DownloadResponse, STATUS_SUCCESS};
use firma_core::AppError;
use std::net::SocketAddr;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/pdf/descargar",
    tag = "documents",
    request_body = DownloadRequest,
    responses(
        (status = 200, description = "PDF content, base64 encoded", body = DownloadResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorBody),
        (status = 404, description = "File not found", body = ErrorBody)
    )
)]
pub async fn download_pdf(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    ValidatedJson(body): ValidatedJson<DownloadRequest>,
) -> Result<Json<DownloadResponse>, HttpAppError> {
    if !state
        .tokens
        .authorize(&body.access_token, &body.pdf_filename)
        .await
    {
        return Err(AppError::Unauthorized("Invalid or expired token".to_string()).into());
    }

    // A valid token with no file on disk means the file was deleted or never
    // uploaded; reported as not-found by the storage layer.
    let pdf_bytes = state.storage.read(&body.pdf_filename).await?;

    audit::record(
        "download",
        "",
        &body.pdf_filename,
        &body.access_token,
        Some(addr),
    );

    Ok(Json(DownloadResponse {
        status: STATUS_SUCCESS.to_string(),
        pdf_base64: BASE64.encode(&pdf_bytes),
    }))
}
