//! Application state shared by all handlers.

use std::sync::Arc;

use firma_core::Config;
use firma_sdp::TicketApi;
use firma_storage::PdfStore;

use crate::tokens::TokenStore;

/// Everything a handler can reach: configuration, the PDF directory, the
/// access-token store, and the upstream ticket API client (trait object so
/// tests can substitute a recorder).
pub struct AppState {
    pub config: Config,
    pub storage: PdfStore,
    pub tokens: TokenStore,
    pub upstream: Arc<dyn TicketApi>,
}
