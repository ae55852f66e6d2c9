//! Error types for boundary operations

use thiserror::Error;

/// Main error type for operations crossing the boundary.
///
/// Proxies never catch or translate these: a failure raised by a host
/// double travels to the calling harness unchanged.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("missing member: {type_label} has no '{member}'")]
    MissingMember { type_label: String, member: String },

    /// Failure raised on the host side of the boundary.
    #[error("host error: {0}")]
    Host(String),
}

impl BridgeError {
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        BridgeError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_member(type_label: impl Into<String>, member: impl Into<String>) -> Self {
        BridgeError::MissingMember {
            type_label: type_label.into(),
            member: member.into(),
        }
    }

    pub fn host(message: impl Into<String>) -> Self {
        BridgeError::Host(message.into())
    }
}
