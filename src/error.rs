//! wordvec error types

use std::fmt;

/// Invocation argument that must not be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Address,
    Word,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Address => f.write_str("rpc server address"),
            Argument::Word => f.write_str("word to query"),
        }
    }
}

/// wordvec error types
#[derive(Debug, thiserror::Error)]
pub enum WordVecError {
    // Validation errors
    #[error("missing {0}")]
    MissingArgument(Argument),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    // Transport errors
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Any other non-OK status returned by the service.
    #[error("rpc error ({code}): {message}")]
    Rpc { code: String, message: String },

    // Output errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl WordVecError {
    /// Whether the remote call itself failed, as opposed to the input being rejected
    /// before any network I/O.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            WordVecError::Transport(_)
                | WordVecError::Timeout
                | WordVecError::Unavailable(_)
                | WordVecError::Rpc { .. }
        )
    }
}

/// Result type alias for wordvec operations
pub type Result<T> = std::result::Result<T, WordVecError>;
