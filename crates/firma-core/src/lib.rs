//! Core types for the firma relay: configuration, error taxonomy,
//! request/response models, and filename validation.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
