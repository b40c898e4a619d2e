use serde::{Deserialize, Serialize};

/// An addressable part of the receiver that a command targets
///
/// Audio commands go to a playback zone (`Main` unless stated otherwise);
/// power, model and party-mode commands go to `System`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Zone {
    /// Main playback zone
    #[default]
    Main,
    /// System-wide controls (power, configuration, party mode)
    System,
    /// Second playback zone on multi-zone models
    Zone2,
    /// Third playback zone, on models that have one
    Zone3,
    /// Fourth playback zone, on models that have one
    Zone4,
}

impl Zone {
    /// The element name used for this zone on the wire
    pub fn tag(&self) -> &'static str {
        match self {
            Zone::Main => "Main_Zone",
            Zone::System => "System",
            Zone::Zone2 => "Zone_2",
            Zone::Zone3 => "Zone_3",
            Zone::Zone4 => "Zone_4",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Envelope command type: read a parameter or write one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Put => "PUT",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
