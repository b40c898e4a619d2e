//! DeviceSession - sync handle to one receiver
//!
//! Every method blocks until the worker has finished the corresponding
//! command. Calls from several threads are queued and run one at a time in
//! the order they were submitted.

use std::sync::{mpsc, Mutex};
use std::thread::JoinHandle;

use control_client::{ControlClient, Transport};
use yamaha_api::PowerState;

use crate::config::ReceiverConfig;
use crate::error::{Result, SessionError};
use crate::state::DeviceState;
use crate::talker::Talker;
use crate::worker::{spawn_session_worker, Command, Reply};

/// Session with a single receiver
///
/// # Example
///
/// ```rust,no_run
/// use yamaha_sdk::{DeviceSession, ReceiverConfig};
///
/// let config = ReceiverConfig::new("192.168.1.50").with_source("HDMI1");
/// let session = DeviceSession::new(config)?;
///
/// let model = session.start()?;
/// println!("Connected to {}", model);
///
/// session.set_volume(35)?;
/// let (volume, muted) = session.get_volume_mute()?;
/// println!("volume {}% muted {}", volume, muted);
///
/// session.start_playback()?;
/// # Ok::<(), yamaha_sdk::SessionError>(())
/// ```
pub struct DeviceSession {
    config: ReceiverConfig,

    /// Send commands to background worker
    command_tx: mpsc::Sender<Command>,

    /// Background worker handle, taken on shutdown
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl DeviceSession {
    /// Create a session using the HTTP transport
    ///
    /// No network contact happens until [`DeviceSession::start`].
    pub fn new(config: ReceiverConfig) -> Result<Self> {
        let transport = ControlClient::with_timeouts(config.connect_timeout(), config.read_timeout());
        Self::with_transport(config, transport)
    }

    /// Create a session over a custom transport
    pub fn with_transport<T: Transport>(config: ReceiverConfig, transport: T) -> Result<Self> {
        config.validate()?;

        let (command_tx, command_rx) = mpsc::channel();
        let talker = Talker::new(&config, transport);
        let worker = spawn_session_worker(talker, command_rx)?;

        Ok(Self {
            config,
            command_tx,
            worker: Mutex::new(Some(worker)),
        })
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    /// Configuration the session was created with
    pub fn config(&self) -> &ReceiverConfig {
        &self.config
    }

    /// Query the device model; must complete before any other operation
    ///
    /// Calling it again after it succeeded returns the stored model without
    /// contacting the device.
    pub fn start(&self) -> Result<String> {
        self.request(|reply| Command::Start { reply })
    }

    /// Current volume percent and mute flag, read from the device
    pub fn get_volume_mute(&self) -> Result<(u8, bool)> {
        self.request(|reply| Command::GetVolumeMute { reply })
    }

    pub fn get_volume(&self) -> Result<u8> {
        self.get_volume_mute().map(|(volume, _)| volume)
    }

    /// Set the volume in percent (`0..=100`)
    pub fn set_volume(&self, percent: u8) -> Result<()> {
        self.request(|reply| Command::SetVolume { percent, reply })
    }

    pub fn set_mute(&self, muted: bool) -> Result<()> {
        self.request(|reply| Command::SetMute { muted, reply })
    }

    pub fn power_state(&self) -> Result<PowerState> {
        self.request(|reply| Command::GetPower { reply })
    }

    /// Power on and restore input, party mode, volume and mute
    pub fn start_playback(&self) -> Result<()> {
        self.request(|reply| Command::StartPlayback { reply })
    }

    /// Put the receiver into standby
    pub fn stop_playback(&self) -> Result<()> {
        self.request(|reply| Command::StopPlayback { reply })
    }

    /// Snapshot of the cached device state
    pub fn state(&self) -> Result<DeviceState> {
        let (reply, response) = mpsc::channel();
        self.command_tx
            .send(Command::Snapshot { reply })
            .map_err(|_| SessionError::Shutdown)?;
        response.recv().map_err(|_| SessionError::Shutdown)
    }

    /// Model stored by `start()`, if it has completed
    pub fn model(&self) -> Result<Option<String>> {
        self.state().map(|s| s.model)
    }

    /// Stop the worker after the commands already queued
    ///
    /// Subsequent calls on this session fail with [`SessionError::Shutdown`].
    pub fn shutdown(&self) {
        let worker = match self.worker.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        if let Some(handle) = worker {
            // The worker may already be gone; that is the state we want
            let _ = self.command_tx.send(Command::Shutdown);
            if handle.join().is_err() {
                tracing::warn!(host = %self.config.host, "Session worker panicked");
            }
        }
    }

    fn request<R>(&self, make: impl FnOnce(Reply<R>) -> Command) -> Result<R> {
        let (reply, response) = mpsc::channel();
        self.command_tx
            .send(make(reply))
            .map_err(|_| SessionError::Shutdown)?;
        response.recv().map_err(|_| SessionError::Shutdown)?
    }
}

impl Drop for DeviceSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for DeviceSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceSession")
            .field("host", &self.config.host)
            .finish()
    }
}
