//! Host-keyed registry of live sessions
//!
//! Components that control the same receiver must share one session so that
//! their commands are serialized through a single worker. The registry is an
//! explicit object the application owns and passes around; there is no
//! process-global instance.

use std::sync::Arc;

use dashmap::DashMap;

use crate::config::ReceiverConfig;
use crate::error::Result;
use crate::session::DeviceSession;

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<String, Arc<DeviceSession>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the started session for `config.host`, creating it on first use
    ///
    /// The first configuration seen for a host wins. A later call with a
    /// different `source`, `party_mode` or other setting gets the existing
    /// session unchanged; remove the host first to apply new settings.
    pub fn get_or_start(&self, config: ReceiverConfig) -> Result<Arc<DeviceSession>> {
        self.get_or_start_with(config, DeviceSession::new)
    }

    /// Like [`SessionRegistry::get_or_start`] with a custom session constructor
    ///
    /// `create` only runs when no session exists for the host yet. The session
    /// is started outside the map lock; a repeated `start()` on an already
    /// started session is answered from its cache.
    pub fn get_or_start_with<F>(&self, config: ReceiverConfig, create: F) -> Result<Arc<DeviceSession>>
    where
        F: FnOnce(ReceiverConfig) -> Result<DeviceSession>,
    {
        let host = config.host.clone();

        let existing = self.sessions.get(&host).map(|entry| Arc::clone(entry.value()));
        let session = match existing {
            Some(session) => {
                if session.config() != &config {
                    tracing::debug!(
                        host = %host,
                        ?config,
                        "Session exists with different settings; keeping the original"
                    );
                }
                session
            }
            None => {
                let created = Arc::new(create(config)?);
                let entry = self.sessions.entry(host.clone()).or_insert(created);
                Arc::clone(entry.value())
            }
        };

        session.start()?;
        tracing::debug!(host = %host, "Session ready");
        Ok(session)
    }

    pub fn get(&self, host: &str) -> Option<Arc<DeviceSession>> {
        self.sessions.get(host).map(|entry| Arc::clone(entry.value()))
    }

    /// Remove the session for `host` and shut its worker down
    pub fn remove(&self, host: &str) -> Option<Arc<DeviceSession>> {
        let (_, session) = self.sessions.remove(host)?;
        session.shutdown();
        Some(session)
    }

    pub fn hosts(&self) -> Vec<String> {
        self.sessions.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
