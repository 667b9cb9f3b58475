//! Client for the upstream ticketing system's REST API.
//!
//! The relay only ever rewrites a ticket's description field:
//! `PUT {base}/api/v3/requests/{id}` with an `input_data` form field holding
//! `{"request": {"description": ...}}`, authenticated by an `authtoken`
//! header. The `TicketApi` trait is the seam handlers depend on, so tests can
//! substitute a recording implementation.

mod client;
mod error;

pub use client::{signed_document_link, SdpClient, TicketApi};
pub use error::UpstreamError;
