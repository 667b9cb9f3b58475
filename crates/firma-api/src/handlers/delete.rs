use crate::audit;
use crate::error::{ErrorBody, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{extract::State, Json};
use firma_core::models::{DeleteRequest, DeleteResponse, STATUS_SUCCESS};
use firma_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/pdf/eliminar",
    tag = "documents",
    request_body = DeleteRequest,
    responses(
        (status = 200, description = "PDF deleted and ticket description cleared", body = DeleteResponse),
        (status = 401, description = "Invalid or expired token", body = ErrorBody),
        (status = 502, description = "Ticket API rejected the description update", body = ErrorBody)
    )
)]
pub async fn delete_pdf(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<DeleteRequest>,
) -> Result<Json<DeleteResponse>, HttpAppError> {
    if !state
        .tokens
        .authorize(&body.access_token, &body.pdf_filename)
        .await
    {
        return Err(AppError::Unauthorized("Invalid or expired token".to_string()).into());
    }

    // Absence is not an error: the delete is idempotent.
    state.storage.delete(&body.pdf_filename).await?;

    state
        .upstream
        .update_description(&body.request_id, "")
        .await?;

    audit::record(
        "delete",
        &body.request_id,
        &body.pdf_filename,
        &body.access_token,
        None,
    );

    Ok(Json(DeleteResponse {
        status: STATUS_SUCCESS.to_string(),
        message: "PDF deleted.".to_string(),
    }))
}
