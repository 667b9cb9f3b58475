//! Local PDF storage for the firma relay.
//!
//! A single flat directory of PDF files with overwrite semantics. Every key
//! is validated against path traversal before it touches the filesystem.

mod error;
mod local;

pub use error::{StorageError, StorageResult};
pub use local::PdfStore;
