use thiserror::Error;
use yamaha_api::{ApiError, ProtocolError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An operation was invoked before `start()` completed
    #[error("Session not ready: start() has not completed")]
    NotReady,

    #[error("Device unreachable: {0}")]
    DeviceUnreachable(String),

    #[error("Protocol error: {0}")]
    Protocol(ProtocolError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The session worker has stopped; no further commands are accepted
    #[error("Session has been shut down")]
    Shutdown,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to spawn session worker: {0}")]
    WorkerSpawn(String),
}

impl From<ApiError> for SessionError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::DeviceUnreachable(msg) => SessionError::DeviceUnreachable(msg),
            ApiError::Protocol(e) => SessionError::Protocol(e),
            ApiError::InvalidArgument(msg) => SessionError::InvalidArgument(msg),
        }
    }
}

/// Errors raised while loading or validating a [`crate::ReceiverConfig`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required setting '{0}'")]
    Missing(String),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
