//! Error types for mask and topology calculations.

use thiserror::Error;

/// Errors returned by mask construction and subnet topology queries.
///
/// Every operation is pure, so errors are final: there is nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Absent input, wrong byte length, CIDR out of range or a byte pattern
    /// that is not a prefix mask.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Address family other than IPv4.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl TopologyError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TopologyError::InvalidArgument(msg.into())
    }

    pub(crate) fn only_ipv4() -> Self {
        TopologyError::Unsupported("Only IPv4 is currently supported".to_string())
    }
}

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, TopologyError>;
