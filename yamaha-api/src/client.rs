use control_client::{ControlClient, Transport};

use crate::codec;
use crate::operation::ReceiverOperation;
use crate::Result;

/// A client for executing receiver operations against actual devices
///
/// This client bridges the stateless operation definitions and the network:
/// it renders the envelope with the codec, sends it over the transport, and
/// parses the reply back into the operation's typed response. Every call is
/// a single round trip; nothing is retried.
#[derive(Debug, Clone)]
pub struct ReceiverClient<T: Transport = ControlClient> {
    transport: T,
}

impl ReceiverClient<ControlClient> {
    /// Create a client using a default HTTP transport
    pub fn new() -> Self {
        Self::with_transport(ControlClient::new())
    }
}

impl Default for ReceiverClient<ControlClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> ReceiverClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute one operation against the receiver at `host`
    ///
    /// # Example
    /// ```rust,no_run
    /// use yamaha_api::ReceiverClient;
    /// use yamaha_api::operations::GetBasicStatusOperation;
    ///
    /// let client = ReceiverClient::new();
    /// let status = client.execute("192.168.1.50", &GetBasicStatusOperation)?;
    /// println!("volume {} muted {}", status.native_volume, status.muted);
    /// # Ok::<(), yamaha_api::ApiError>(())
    /// ```
    pub fn execute<Op: ReceiverOperation>(&self, host: &str, operation: &Op) -> Result<Op::Response> {
        let body = operation.request_body();
        tracing::debug!(host, operation = Op::NAME, "Send command {}", body);

        let raw = self.transport.post(host, &body)?;
        let reply = codec::parse_response(&raw, Op::METHOD, Op::ZONE)?;

        Op::parse_response(&reply)
    }
}
