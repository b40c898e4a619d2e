use serde::Serialize;

use crate::config::ReceiverConfig;

/// What the session believes about its receiver
///
/// `native_volume` and `muted` hold the last value this client sent or
/// observed. A change made on the device itself (remote control, front
/// panel) is not reflected until the next `get_volume_mute()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    /// Set by `start()`, never changed afterwards
    pub model: Option<String>,
    pub native_volume: Option<i32>,
    pub muted: Option<bool>,
    /// Configured input source, restored on playback start
    pub source: Option<String>,
    /// Configured party mode, restored on playback start
    pub party_mode: Option<bool>,
}

impl DeviceState {
    pub fn from_config(config: &ReceiverConfig) -> Self {
        Self {
            source: config.configured_source().map(str::to_string),
            party_mode: config.party_mode,
            ..Self::default()
        }
    }

    pub fn is_started(&self) -> bool {
        self.model.is_some()
    }
}
