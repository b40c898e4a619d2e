//! # Yamaha SDK - sync session API for network receivers
//!
//! Controls a Yamaha AV receiver over its XML-over-HTTP control protocol:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use yamaha_sdk::{Mixer, ReceiverConfig, SessionRegistry};
//!
//! fn main() -> Result<(), yamaha_sdk::SessionError> {
//!     let registry = SessionRegistry::new();
//!     let config = ReceiverConfig::new("192.168.1.50")
//!         .with_source("HDMI1")
//!         .with_party_mode(false);
//!
//!     // Created and started on first use, shared afterwards
//!     let session = registry.get_or_start(config)?;
//!
//!     session.start_playback()?;          // power on, restore input and levels
//!     session.set_volume(40)?;
//!     let (volume, muted) = session.get_volume_mute()?;
//!     println!("volume {}% muted {}", volume, muted);
//!
//!     let (mixer, events) = Mixer::new(Arc::clone(&session));
//!     mixer.set_mute(true)?;
//!     for event in events.try_iter() {
//!         println!("{:?}", event);
//!     }
//!
//!     session.stop_playback()?;           // standby
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! yamaha-sdk      DeviceSession / SessionRegistry / Mixer
//!     ↓           one worker thread per receiver, ordered command queue
//! yamaha-api      codec, operations, volume scale
//!     ↓
//! control-client  HTTP POST to /YamahaRemoteControl/ctrl
//! ```
//!
//! Every session call blocks until the receiver has answered. Calls from
//! several threads are serialized through the session's worker, so at most
//! one command is in flight per receiver.

pub use config::ReceiverConfig;
pub use error::{ConfigError, Result, SessionError};
pub use mixer::{Frontend, Mixer, MixerEvent, PlaybackState};
pub use registry::SessionRegistry;
pub use session::DeviceSession;
pub use state::DeviceState;

pub use yamaha_api::{PowerState, ProtocolError, ProtocolErrorKind, VolumeScale};

pub mod config;
pub mod logging;
pub mod mixer;

mod error;
mod registry;
mod session;
mod state;
mod talker;
mod worker;
