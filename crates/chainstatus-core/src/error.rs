//! Error taxonomy shared by every ChainStatus crate.

use thiserror::Error;

use crate::request::JsonRpcError;

/// Errors raised while moving a request over the wire.
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP request failed (connection refused, reset, TLS, etc.).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Node answered with a non-success HTTP status and no JSON-RPC body.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Request timed out after the configured duration.
    #[error("Request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// Response body could not be deserialized.
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// An unexpected error.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Returns `true` if this error is transient and worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 502,
            Self::Deserialization(_) | Self::Other(_) => false,
        }
    }
}

/// Errors surfaced by a [`StatusProvider`](crate::provider::StatusProvider).
#[derive(Debug, Error)]
pub enum StatusError {
    /// The remote call could not be completed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The node returned a well-formed response carrying an error object.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(JsonRpcError),

    /// The result did not have the shape expected for `method`.
    #[error("malformed `{method}` result: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    /// A caller-supplied deadline expired before the operation completed.
    #[error("status request timed out after {ms}ms")]
    Timeout { ms: u64 },

    /// Network identity discovery failed at startup.
    #[error("initialization failed")]
    Initialization(#[source] Box<StatusError>),
}

impl StatusError {
    /// Returns the node-side error object, if this is an application error.
    pub fn rpc_error(&self) -> Option<&JsonRpcError> {
        match self {
            Self::Rpc(err) => Some(err),
            Self::Initialization(inner) => inner.rpc_error(),
            _ => None,
        }
    }

    /// Returns `true` if the caller's deadline expired.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Transport(TransportError::Timeout { .. })
        )
    }
}

impl From<JsonRpcError> for StatusError {
    fn from(err: JsonRpcError) -> Self {
        Self::Rpc(err)
    }
}
