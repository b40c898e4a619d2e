//! Typed views over the handful of reply paths the SDK reads
//!
//! Replies are only ever read at fixed, known paths, so instead of handing a
//! dynamic tree to callers each consumed reply has an explicit struct.

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::error::ProtocolError;

/// Power state of the receiver as reported and accepted on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerState {
    On,
    Standby,
}

impl PowerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerState::On => "On",
            PowerState::Standby => "Standby",
        }
    }

    /// Parse the wire value; anything other than `On`/`Standby` is rejected
    pub fn from_wire(value: &str) -> Result<Self, ProtocolError> {
        match value.trim() {
            "On" => Ok(PowerState::On),
            "Standby" => Ok(PowerState::Standby),
            other => Err(ProtocolError::unexpected_shape(format!(
                "unknown power state '{}'",
                other
            ))),
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, PowerState::On)
    }
}

impl std::fmt::Display for PowerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `System/Config` reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
}

impl ModelInfo {
    pub fn from_zone(system: &Element) -> Result<Self, ProtocolError> {
        Ok(Self {
            model_name: required_text(system, &["Config", "Model_Name"])?,
        })
    }
}

/// `Main_Zone/Basic_Status` reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicStatus {
    /// Volume in native decibel-tenths
    pub native_volume: i32,
    pub muted: bool,
    pub power: Option<PowerState>,
    /// Currently selected input, if the model reports it
    pub input: Option<String>,
}

impl BasicStatus {
    pub fn from_zone(zone: &Element) -> Result<Self, ProtocolError> {
        let raw_volume = required_text(zone, &["Basic_Status", "Volume", "Lvl", "Val"])?;
        let native_volume = raw_volume.trim().parse::<i32>().map_err(|_| {
            ProtocolError::unexpected_shape(format!("volume value '{}' is not an integer", raw_volume))
        })?;

        let muted = required_text(zone, &["Basic_Status", "Volume", "Mute"])?.trim() == "On";

        let power = optional_text(zone, &["Basic_Status", "Power_Control", "Power"])
            .map(|p| PowerState::from_wire(&p))
            .transpose()?;

        let input = optional_text(zone, &["Basic_Status", "Input", "Input_Sel"]);

        Ok(Self {
            native_volume,
            muted,
            power,
            input,
        })
    }
}

/// Walk `path` from `root`, returning the element at the end
pub fn child_at<'a>(root: &'a Element, path: &[&str]) -> Option<&'a Element> {
    path.iter()
        .try_fold(root, |element, name| element.get_child(*name))
}

/// Text content at `path`, failing with `UnexpectedShape` when absent
pub fn required_text(root: &Element, path: &[&str]) -> Result<String, ProtocolError> {
    optional_text(root, path).ok_or_else(|| {
        ProtocolError::unexpected_shape(format!(
            "missing {}/{}",
            root.name,
            path.join("/")
        ))
    })
}

/// Text content at `path`, if the element exists and has text
pub fn optional_text(root: &Element, path: &[&str]) -> Option<String> {
    child_at(root, path)
        .and_then(|e| e.get_text())
        .map(|t| t.into_owned())
}
