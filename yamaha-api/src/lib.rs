//! High-level Yamaha receiver API for device control
//!
//! This crate provides a type-safe layer over the receiver's XML control
//! protocol. It uses the private `control-client` crate for the HTTP round
//! trip and keeps everything else pure:
//!
//! - [`codec`] builds `YAMAHA_AV` request envelopes and parses replies
//! - [`operations`] defines one type per protocol command
//! - [`reply`] holds typed views of the reply paths that are read
//! - [`volume`] converts between percent and native decibel-tenths
//!
//! ```rust,no_run
//! use yamaha_api::ReceiverClient;
//! use yamaha_api::operations::SetVolumeOperation;
//! use yamaha_api::volume;
//!
//! let client = ReceiverClient::new();
//! let native_volume = volume::percent_to_native(40)?;
//! client.execute("192.168.1.50", &SetVolumeOperation { native_volume })?;
//! # Ok::<(), yamaha_api::ApiError>(())
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod operation;
pub mod operations;
pub mod reply;
pub mod volume;
pub mod zone;

pub use client::ReceiverClient;
pub use error::{ApiError, ProtocolError, ProtocolErrorKind, Result};
pub use operation::ReceiverOperation;
pub use reply::{BasicStatus, ModelInfo, PowerState};
pub use volume::VolumeScale;
pub use zone::{Method, Zone};

// Re-exported so downstream crates can name the transport seam without a
// direct dependency on the private client crate
pub use control_client::{ControlClient, Transport, TransportError};
