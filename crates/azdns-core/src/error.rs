//! Error types for the DNS resource adapter
//!
//! Every error kind surfaces unchanged to the reconciliation engine; the
//! adapter performs no retries and no partial recovery. The sole recovered
//! condition is [`Error::NotFound`] on a read, which the adapter converts
//! into an `Absent` outcome instead of an error.

use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DNS resource adapter
#[derive(Error, Debug)]
pub enum Error {
    /// A required desired-state field is missing or empty before dispatch
    #[error("validation error: {0}")]
    Validation(String),

    /// The opaque resource identifier could not be parsed
    #[error("malformed resource identifier: {0}")]
    Parse(String),

    /// The remote call succeeded but returned a structurally invalid response
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The service reported that the record set does not exist
    #[error("record set not found: {0}")]
    NotFound(String),

    /// Non-success status or transport failure from the remote service
    #[error("remote service error ({resource}): {message}")]
    Remote {
        /// Name of the resource the call was scoped to
        resource: String,
        /// Status and underlying cause, for diagnostics
        message: String,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an identifier parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a protocol violation error
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a remote service error scoped to a resource
    pub fn remote(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            resource: resource.into(),
            message: message.into(),
        }
    }

    /// Whether this is the service-level "not found" condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
