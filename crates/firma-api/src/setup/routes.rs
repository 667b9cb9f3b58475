//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use firma_core::Config;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let routes = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/token/generar", post(handlers::token::generate_token))
        .route("/firmar", post(handlers::sign::sign_pdf))
        .route("/pdf/descargar", post(handlers::download::download_pdf))
        .route("/pdf/eliminar", post(handlers::delete::delete_pdf))
        .route("/api/openapi.json", get(openapi_json))
        .with_state(state);

    // The PDF arrives base64 encoded inside a JSON envelope, so the on-wire
    // body is larger than the configured PDF limit.
    let body_limit = config.max_pdf_size_bytes * 2;

    let docs: Router = utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
        .path("/docs")
        .into();

    let app = routes
        .merge(docs)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
