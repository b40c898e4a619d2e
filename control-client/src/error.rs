//! Error types for the control client

use thiserror::Error;

/// Errors that can occur while talking to a receiver over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, timeout or a broken body read
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The receiver answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Status(u16),
}
