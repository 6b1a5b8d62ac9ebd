//! Shared error type across portscope crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Unrecognized enumerator or out-of-range port configuration.
    InvalidArgument,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal failure (I/O, poisoned lock).
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidArgument => "INVALID_ARGUMENT",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PortScopeError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum PortScopeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl PortScopeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PortScopeError::InvalidArgument(_) => ClientCode::InvalidArgument,
            PortScopeError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            PortScopeError::Internal(_) => ClientCode::Internal,
        }
    }
}
