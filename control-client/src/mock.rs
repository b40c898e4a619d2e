//! Scripted in-memory transport for tests
//!
//! `MockTransport` records every request it receives and answers through a
//! responder closure, so higher layers can assert on the exact bodies sent
//! without a receiver on the network.

use std::sync::{Arc, Mutex};

use crate::{Transport, TransportError};

type Responder = Arc<dyn Fn(&str) -> Result<Vec<u8>, TransportError> + Send + Sync>;

/// A request captured by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub host: String,
    pub body: String,
}

/// Cloneable transport double; clones share the request log and responder
#[derive(Clone)]
pub struct MockTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Mutex<Responder>>,
}

impl MockTransport {
    /// Create a transport that answers every request with `responder(body)`
    ///
    /// The responder may return text or raw bytes.
    pub fn new<F, R>(responder: F) -> Self
    where
        F: Fn(&str) -> Result<R, TransportError> + Send + Sync + 'static,
        R: Into<Vec<u8>>,
    {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            responder: Arc::new(Mutex::new(into_responder(responder))),
        }
    }

    /// Create a transport that answers every request with the same body
    pub fn replying(body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        Self::new(move |_| Ok::<_, TransportError>(body.clone()))
    }

    /// Create a transport whose every request fails
    pub fn failing(error: TransportError) -> Self {
        Self::new(move |_| Err::<Vec<u8>, _>(error.clone()))
    }

    /// Replace the responder for all subsequent requests
    pub fn set_responder<F, R>(&self, responder: F)
    where
        F: Fn(&str) -> Result<R, TransportError> + Send + Sync + 'static,
        R: Into<Vec<u8>>,
    {
        if let Ok(mut current) = self.responder.lock() {
            *current = into_responder(responder);
        }
    }

    /// All requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Bodies of all requests received so far, in arrival order
    pub fn bodies(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.body).collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Forget the recorded requests
    pub fn clear(&self) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.clear();
        }
    }
}

fn into_responder<F, R>(responder: F) -> Responder
where
    F: Fn(&str) -> Result<R, TransportError> + Send + Sync + 'static,
    R: Into<Vec<u8>>,
{
    Arc::new(move |body: &str| -> Result<Vec<u8>, TransportError> {
        responder(body).map(Into::into)
    })
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("requests", &self.request_count())
            .finish()
    }
}

impl Transport for MockTransport {
    fn post(&self, host: &str, body: &str) -> Result<Vec<u8>, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(RecordedRequest {
                host: host.to_string(),
                body: body.to_string(),
            });
        }

        // Clone the responder out so it runs without holding the lock
        let responder = match self.responder.lock() {
            Ok(r) => Arc::clone(&r),
            Err(_) => return Err(TransportError::Network("mock responder poisoned".to_string())),
        };
        responder(body)
    }
}
