//! Private HTTP client for Yamaha receiver communication
//!
//! This crate provides the minimal transport the receiver control protocol
//! needs: a single `POST` of an XML body to the receiver's control endpoint,
//! returning the raw reply bytes. Envelope construction and reply parsing live
//! in `yamaha-api`; this crate knows nothing about their contents.

mod error;
#[cfg(any(test, feature = "test-support"))]
pub mod mock;

pub use error::TransportError;
#[cfg(any(test, feature = "test-support"))]
pub use mock::{MockTransport, RecordedRequest};

use std::io::Read;
use std::time::Duration;

/// Path of the control endpoint on every receiver
pub const CONTROL_PATH: &str = "/YamahaRemoteControl/ctrl";

/// Content type the receiver expects on control requests
pub const CONTENT_TYPE: &str = "text/xml";

/// Default connect timeout for the HTTP agent
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default read timeout for the HTTP agent
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound on a reply body; longer replies are cut off here
pub const MAX_REPLY_BYTES: u64 = 10 * 1024 * 1024;

/// A blocking request/response primitive for the control protocol
///
/// Implementations send `body` to the control endpoint of `host` and return
/// the reply body as raw bytes, undecoded. Connection and timeout failures
/// are reported as [`TransportError`]; the reply contents are never
/// inspected here.
pub trait Transport: Send + Sync + 'static {
    fn post(&self, host: &str, body: &str) -> Result<Vec<u8>, TransportError>;
}

/// Build the control endpoint URL for a receiver host (`host` or `host:port`)
pub fn control_url(host: &str) -> String {
    format!("http://{}{}", host, CONTROL_PATH)
}

/// HTTP transport backed by a shared `ureq` agent
#[derive(Debug, Clone)]
pub struct ControlClient {
    agent: ureq::Agent,
}

impl ControlClient {
    /// Create a new client with the default timeouts
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }

    /// Create a client with explicit connect and read timeouts
    pub fn with_timeouts(connect: Duration, read: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect)
                .timeout_read(read)
                .build(),
        }
    }
}

impl Default for ControlClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ControlClient {
    fn post(&self, host: &str, body: &str) -> Result<Vec<u8>, TransportError> {
        let url = control_url(host);
        tracing::trace!(%url, bytes = body.len(), "POST control request");

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", CONTENT_TYPE)
            .send_string(body)
            .map_err(|e| {
                tracing::debug!(%url, error = %e, "Control request failed");
                match e {
                    ureq::Error::Status(code, _) => TransportError::Status(code),
                    other => TransportError::Network(other.to_string()),
                }
            })?;

        let mut reply = Vec::new();
        response
            .into_reader()
            .take(MAX_REPLY_BYTES)
            .read_to_end(&mut reply)
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(reply)
    }
}
