use control_client::TransportError;
use thiserror::Error;

/// What was wrong with a reply from the receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolErrorKind {
    /// The reply bytes are not well-formed markup
    Malformed,
    /// The markup parsed but the envelope, zone or an expected field is missing
    UnexpectedShape,
    /// The receiver answered with a non-zero `RC` response code
    Rejected { code: String },
}

impl std::fmt::Display for ProtocolErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProtocolErrorKind::Malformed => write!(f, "malformed reply"),
            ProtocolErrorKind::UnexpectedShape => write!(f, "unexpected reply shape"),
            ProtocolErrorKind::Rejected { code } => write!(f, "command rejected with RC={}", code),
        }
    }
}

/// A reply from the receiver could not be turned into the expected data
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ProtocolError {
    pub kind: ProtocolErrorKind,
    pub message: String,
}

impl ProtocolError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: ProtocolErrorKind::Malformed,
            message: message.into(),
        }
    }

    pub fn unexpected_shape(message: impl Into<String>) -> Self {
        Self {
            kind: ProtocolErrorKind::UnexpectedShape,
            message: message.into(),
        }
    }

    pub fn rejected(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            message: format!("receiver returned response code {}", code),
            kind: ProtocolErrorKind::Rejected { code },
        }
    }
}

/// High-level API errors for receiver operations
///
/// Transport details are collapsed into `DeviceUnreachable`; everything that
/// went wrong after bytes came back is a `Protocol` error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection refused, timeout, DNS failure or an HTTP error status
    #[error("Device unreachable: {0}")]
    DeviceUnreachable(String),

    /// The reply could not be parsed or lacked the expected structure
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// A caller-supplied value is outside its domain (e.g. volume above 100)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Network(msg) => ApiError::DeviceUnreachable(msg),
            TransportError::Status(code) => {
                ApiError::DeviceUnreachable(format!("HTTP status {}", code))
            }
        }
    }
}
