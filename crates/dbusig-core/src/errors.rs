use thiserror::Error;

/// Errors emitted while building a signature generator.
///
/// Every variant is raised synchronously by the factory; drawing from a
/// built generator never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SignatureError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SignatureError::InvalidConfig(reason.into())
    }

    /// Human-readable reason carried by the error.
    pub fn reason(&self) -> &str {
        match self {
            SignatureError::InvalidConfig(reason) => reason,
        }
    }
}

/// Result type for generator construction.
pub type Result<T> = std::result::Result<T, SignatureError>;
