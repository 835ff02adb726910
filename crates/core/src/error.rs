//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of the pure record/patch layer
/// (malformed payloads, unknown sections, invalid modes). Ledger concerns
/// belong to the infrastructure crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bytes were not valid JSON, or did not match the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The requested record section does not exist.
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// The requested operation mode does not exist.
    #[error("unknown operation mode: {0}")]
    UnknownMode(String),

    /// The mode exists but cannot be applied to the section.
    #[error("mode {mode} is not supported for section {section}")]
    UnsupportedMode { section: String, mode: String },

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. empty customer key).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn unknown_section(name: impl Into<String>) -> Self {
        Self::UnknownSection(name.into())
    }

    pub fn unknown_mode(name: impl Into<String>) -> Self {
        Self::UnknownMode(name.into())
    }

    pub fn unsupported_mode(section: impl Into<String>, mode: impl Into<String>) -> Self {
        Self::UnsupportedMode {
            section: section.into(),
            mode: mode.into(),
        }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}
