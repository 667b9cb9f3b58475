use crate::error::{ErrorBody, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use firma_core::models::{SignRequest, SignResponse, STATUS_SUCCESS};
use firma_core::validation::validate_pdf_filename;
use firma_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/firmar",
    tag = "documents",
    request_body = SignRequest,
    responses(
        (status = 200, description = "PDF stored and ticket description updated", body = SignResponse),
        (status = 400, description = "Invalid filename or payload", body = ErrorBody),
        (status = 502, description = "Ticket API rejected the description update", body = ErrorBody)
    )
)]
pub async fn sign_pdf(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<SignRequest>,
) -> Result<Json<SignResponse>, HttpAppError> {
    if body.request_id.trim().is_empty() {
        return Err(AppError::InvalidInput("request_id is required".to_string()).into());
    }
    validate_pdf_filename(&body.pdf_filename)
        .map_err(|msg| HttpAppError(AppError::InvalidInput(msg)))?;

    let pdf_bytes = BASE64
        .decode(body.pdf_base64.as_bytes())
        .map_err(|e| AppError::InvalidInput(format!("Invalid base64 payload: {}", e)))
        .map_err(HttpAppError::from)?;

    state.storage.write(&body.pdf_filename, &pdf_bytes).await?;

    // The file stays on disk even if the upstream update fails below; the
    // signing widget retries /firmar and the write is overwrite-safe.
    let description =
        firma_sdp::signed_document_link(&state.config.public_base_url, &body.pdf_filename);
    state
        .upstream
        .update_description(&body.request_id, &description)
        .await?;

    tracing::info!(
        action = %body.action,
        request_id = %body.request_id,
        filename = %body.pdf_filename,
        size_bytes = pdf_bytes.len(),
        "Signed PDF stored and ticket description updated"
    );

    Ok(Json(SignResponse {
        status: STATUS_SUCCESS.to_string(),
        message: "PDF stored and ticket description updated.".to_string(),
        filename: body.pdf_filename,
    }))
}
