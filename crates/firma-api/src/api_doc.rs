//! OpenAPI document for the relay's HTTP surface.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::handlers;
use firma_core::models::{
    DeleteRequest, DeleteResponse, DownloadRequest, DownloadResponse, SignRequest, SignResponse,
    TokenRequest, TokenResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Firma Relay API",
        description = "Token-gated relay attaching signed PDF documents to ticketing-system requests"
    ),
    paths(
        handlers::token::generate_token,
        handlers::sign::sign_pdf,
        handlers::download::download_pdf,
        handlers::delete::delete_pdf,
    ),
    components(schemas(
        TokenRequest,
        TokenResponse,
        SignRequest,
        SignResponse,
        DownloadRequest,
        DownloadResponse,
        DeleteRequest,
        DeleteResponse,
        ErrorBody,
    )),
    tags(
        (name = "tokens", description = "Access token issuance"),
        (name = "documents", description = "PDF intake, retrieval, and deletion")
    )
)]
pub struct ApiDoc;
