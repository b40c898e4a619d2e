//! Configuration for a single receiver session
//!
//! A [`ReceiverConfig`] names the receiver host and the state the session
//! restores whenever playback starts (input source, party mode). It can be
//! built in code, deserialized from JSON, or read from environment variables.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use yamaha_api::volume::{MIN_NATIVE_VOLUME, NATIVE_VOLUME_STEP};
use yamaha_api::VolumeScale;

use crate::error::ConfigError;

/// Environment variable holding the receiver host
pub const ENV_HOST: &str = "YAMAHA_HOST";
/// Environment variable holding the input source to select on playback
pub const ENV_SOURCE: &str = "YAMAHA_SOURCE";
/// Environment variable holding the party mode flag (`true`/`false`/`on`/`off`)
pub const ENV_PARTY_MODE: &str = "YAMAHA_PARTY_MODE";

fn default_min_native_volume() -> i32 {
    MIN_NATIVE_VOLUME
}

fn default_connect_timeout_ms() -> u64 {
    5_000
}

fn default_read_timeout_ms() -> u64 {
    10_000
}

/// Whole milliseconds in `duration`, rounded up
fn millis_ceil(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros().div_ceil(1_000)).unwrap_or(u64::MAX)
}

/// Settings for one receiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverConfig {
    /// Host name or address of the receiver, optionally with `:port`
    pub host: String,

    /// Input to select when playback starts; unset leaves the input alone
    #[serde(default)]
    pub source: Option<String>,

    /// Party mode to apply when playback starts; unset leaves it alone
    #[serde(default)]
    pub party_mode: Option<bool>,

    /// Native volume at 0 percent
    /// Default: -805
    #[serde(default = "default_min_native_volume")]
    pub min_native_volume: i32,

    /// Connect timeout in milliseconds
    /// Default: 5000
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,

    /// Read timeout in milliseconds
    /// Default: 10000
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

impl ReceiverConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            source: None,
            party_mode: None,
            min_native_volume: default_min_native_volume(),
            connect_timeout_ms: default_connect_timeout_ms(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_party_mode(mut self, enabled: bool) -> Self {
        self.party_mode = Some(enabled);
        self
    }

    pub fn with_min_native_volume(mut self, min_native_volume: i32) -> Self {
        self.min_native_volume = min_native_volume;
        self
    }

    /// Set both timeouts; sub-millisecond parts are rounded up
    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout_ms = millis_ceil(connect);
        self.read_timeout_ms = millis_ceil(read);
        self
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ReceiverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `YAMAHA_HOST`, `YAMAHA_SOURCE` and `YAMAHA_PARTY_MODE`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(ENV_HOST).ok_or_else(|| ConfigError::Missing(ENV_HOST.to_string()))?;
        let mut config = ReceiverConfig::new(host);

        if let Some(source) = lookup(ENV_SOURCE) {
            config.source = Some(source);
        }

        if let Some(raw) = lookup(ENV_PARTY_MODE) {
            config.party_mode = Some(parse_flag(ENV_PARTY_MODE, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Missing("host".to_string()));
        }

        if self.min_native_volume >= 0 || self.min_native_volume % NATIVE_VOLUME_STEP != 0 {
            return Err(ConfigError::Invalid {
                field: "min_native_volume".to_string(),
                reason: format!(
                    "{} must be negative and a multiple of {}",
                    self.min_native_volume, NATIVE_VOLUME_STEP
                ),
            });
        }

        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "connect_timeout_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        if self.read_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "read_timeout_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// The configured source, treating an empty string as unset
    pub fn configured_source(&self) -> Option<&str> {
        self.source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn volume_scale(&self) -> VolumeScale {
        VolumeScale::new(self.min_native_volume)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}

fn parse_flag(field: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(ConfigError::Invalid {
            field: field.to_string(),
            reason: format!("'{}' is not a boolean", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ReceiverConfig::new("192.168.1.50");
        assert_eq!(config.source, None);
        assert_eq!(config.party_mode, None);
        assert_eq!(config.min_native_volume, -805);
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.read_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_minimal() {
        let config = ReceiverConfig::from_json_str(r#"{"host": "receiver.local"}"#).unwrap();
        assert_eq!(config, ReceiverConfig::new("receiver.local"));
    }

    #[test]
    fn test_from_json_full() {
        let config = ReceiverConfig::from_json_str(
            r#"{
                "host": "10.0.0.20:8080",
                "source": "HDMI1",
                "party_mode": true,
                "min_native_volume": -600,
                "connect_timeout_ms": 2000,
                "read_timeout_ms": 750
            }"#,
        )
        .unwrap();

        assert_eq!(config.host, "10.0.0.20:8080");
        assert_eq!(config.configured_source(), Some("HDMI1"));
        assert_eq!(config.party_mode, Some(true));
        assert_eq!(config.volume_scale().min_native(), -600);
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
        assert_eq!(config.read_timeout(), Duration::from_millis(750));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            ReceiverConfig::from_json_str(r#"{"source": "AV1"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            ReceiverConfig::from_json_str(r#"{"host": "  "}"#),
            Err(ConfigError::Missing(_))
        ));
        assert!(matches!(
            ReceiverConfig::from_json_str(r#"{"host": "h", "min_native_volume": -803}"#),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = [
            (ENV_HOST, "receiver.lan"),
            (ENV_SOURCE, "NET RADIO"),
            (ENV_PARTY_MODE, "off"),
        ]
        .into_iter()
        .collect();

        let config = ReceiverConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.host, "receiver.lan");
        assert_eq!(config.configured_source(), Some("NET RADIO"));
        assert_eq!(config.party_mode, Some(false));
    }

    #[test]
    fn test_from_lookup_errors() {
        assert_eq!(
            ReceiverConfig::from_lookup(|_| None),
            Err(ConfigError::Missing(ENV_HOST.to_string()))
        );

        let result = ReceiverConfig::from_lookup(|k| match k {
            ENV_HOST => Some("h".to_string()),
            ENV_PARTY_MODE => Some("maybe".to_string()),
            _ => None,
        });
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_sub_second_timeouts_are_kept() {
        let config = ReceiverConfig::new("h")
            .with_timeouts(Duration::from_millis(500), Duration::from_millis(1500));

        assert!(config.validate().is_ok());
        assert_eq!(config.connect_timeout(), Duration::from_millis(500));
        assert_eq!(config.read_timeout(), Duration::from_millis(1500));
    }

    #[test]
    fn test_sub_millisecond_timeout_rounds_up() {
        let config = ReceiverConfig::new("h")
            .with_timeouts(Duration::from_micros(200), Duration::from_micros(1_001));

        assert!(config.validate().is_ok());
        assert_eq!(config.connect_timeout(), Duration::from_millis(1));
        assert_eq!(config.read_timeout(), Duration::from_millis(2));
    }

    #[test]
    fn test_zero_timeout_names_the_field() {
        let result = ReceiverConfig::new("h")
            .with_timeouts(Duration::ZERO, Duration::from_secs(1))
            .validate();

        assert_eq!(
            result,
            Err(ConfigError::Invalid {
                field: "connect_timeout_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            })
        );
    }

    #[test]
    fn test_empty_source_is_unset() {
        let config = ReceiverConfig::new("h").with_source("");
        assert_eq!(config.configured_source(), None);
    }
}
