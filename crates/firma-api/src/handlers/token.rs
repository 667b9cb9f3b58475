use crate::audit;
use crate::error::{ErrorBody, HttpAppError, ValidatedJson};
use crate::state::AppState;
use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use firma_core::models::{TokenRequest, TokenResponse, STATUS_SUCCESS};
use firma_core::AppError;
use std::net::SocketAddr;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/token/generar",
    tag = "tokens",
    request_body = TokenRequest,
    responses(
        (status = 200, description = "Access token issued", body = TokenResponse),
        (status = 400, description = "Missing or empty parameters", body = ErrorBody)
    )
)]
pub async fn generate_token(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    ValidatedJson(body): ValidatedJson<TokenRequest>,
) -> Result<Json<TokenResponse>, HttpAppError> {
    if body.request_id.trim().is_empty() || body.pdf_filename.trim().is_empty() {
        return Err(
            AppError::InvalidInput("request_id and pdf_filename are required".to_string()).into(),
        );
    }

    let token = state
        .tokens
        .issue(&body.request_id, &body.pdf_filename)
        .await;

    audit::record(
        "token_issued",
        &body.request_id,
        &body.pdf_filename,
        &token,
        Some(addr),
    );

    Ok(Json(TokenResponse {
        status: STATUS_SUCCESS.to_string(),
        access_token: token,
    }))
}
