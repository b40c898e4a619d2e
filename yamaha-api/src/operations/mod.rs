//! Receiver operations organized by the zone they address
//!
//! `system` holds the commands scoped to the `System` zone (power, model
//! query, party mode); `main_zone` holds the audio commands for the main
//! playback zone (input, volume, mute, status).

pub mod main_zone;
pub mod system;

pub use main_zone::{
    GetBasicStatusOperation, SelectInputOperation, SetMuteOperation, SetVolumeOperation,
};
pub use system::{GetModelOperation, GetPowerOperation, SetPartyModeOperation, SetPowerOperation};
