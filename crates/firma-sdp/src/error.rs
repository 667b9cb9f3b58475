#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The ticket API answered with a non-success status. Status and body are
    /// both kept: callers surface them to the original requester.
    #[error("ticket API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Connection, DNS, or timeout failure before any response arrived.
    #[error("ticket API request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
