#![allow(dead_code)]

use thiserror::Error;

/// Errors surfaced by the transport layer. The `Display` text is what the
/// form banner shows, so every variant carries a message fit for end users;
/// underlying reqwest/serde errors are logged at the call site, never shown.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status. `message` is the
    /// server-provided `detail`/`message` when the body carried one,
    /// otherwise an endpoint-specific fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A 2xx response whose body did not parse as an acknowledgment.
    #[error("Unexpected response from the server. Please try again.")]
    MalformedAck,

    /// The request never produced a response (DNS, refused, timeout).
    #[error("Failed to send. Please check your connection and try again.")]
    Unreachable,

    /// A multipart send was attempted without a file attached. Validation
    /// catches this before the transport is reached in normal flow.
    #[error("A resume attachment is required.")]
    MissingAttachment,
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
