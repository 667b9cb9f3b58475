//! Firma relay API
//!
//! HTTP surface for the token-gated PDF relay: handlers, routes, application
//! state, the in-memory access-token store, and server startup.

// Module declarations
mod api_doc;
mod audit;
mod handlers;

// Public modules (used by the binary and integration tests)
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod tokens;

// Re-exports
pub use error::ErrorBody;
pub use tokens::TokenStore;
