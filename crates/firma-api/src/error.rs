//! HTTP error response conversion
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that implement `Into<AppError>`) for errors so they
//! become `HttpAppError` and render consistently (status, body, logging).
//!
//! The error body keeps the `{status: "error", message}` shape the signing
//! widget expects; `code` is additive.

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use firma_core::models::STATUS_ERROR;
use firma_core::{AppError, ErrorMetadata, LogLevel};
use firma_sdp::UpstreamError;
use firma_storage::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Always "error".
    pub status: String,
    pub message: String,
    /// Machine-readable error code for programmatic handling
    pub code: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from firma-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

/// Convert JSON body deserialization failures into a 400 with our ErrorBody format.
impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(filename) => {
                AppError::NotFound(format!("File not found: {}", filename))
            }
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::WriteFailed(msg) => AppError::Storage(msg),
            StorageError::ReadFailed(msg) => AppError::Storage(msg),
            StorageError::DeleteFailed(msg) => AppError::Storage(msg),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
            StorageError::IoError(err) => AppError::Internal(format!("IO error: {}", err)),
        };
        HttpAppError(app)
    }
}

impl From<UpstreamError> for HttpAppError {
    fn from(err: UpstreamError) -> Self {
        let app = match err {
            UpstreamError::Status { status, body } => AppError::Upstream { status, body },
            UpstreamError::Network(err) => {
                AppError::Internal(format!("Upstream request failed: {}", err))
            }
            UpstreamError::Client(msg) => AppError::Internal(msg),
        };
        HttpAppError(app)
    }
}

/// JSON body extractor that returns our ErrorBody format (400 + JSON) on
/// deserialization failure. Use this instead of `Json<T>` so invalid bodies get
/// the same error shape as every other failure.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error.detailed_message(),
                error_type = error_type,
                "Error occurred"
            );
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        let body = Json(ErrorBody {
            status: STATUS_ERROR.to_string(),
            message: app_error.client_message(),
            code: app_error.error_code().to_string(),
        });

        (status, body).into_response()
    }
}
