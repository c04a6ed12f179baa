//! Error types shared by the client and anything else speaking the protocol.

use thiserror::Error;

use crate::protocol::StreamMessageKind;

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    /// The request body could not be encoded; nothing was sent.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl ApiError {
    /// The server-provided detail for this failure.
    ///
    /// For HTTP failures this is the response body; otherwise the error text.
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Network(msg) | ApiError::Deserialize(msg) | ApiError::Serialize(msg) => msg,
            ApiError::Http { body, .. } => body,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Why an inbound stream frame could not be applied.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Not JSON, or missing the `Kind` field.
    #[error("malformed stream message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown stream message kind {0:?}")]
    UnknownKind(String),
    #[error("payload does not match a {kind} message: {source}")]
    Payload {
        kind: StreamMessageKind,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_prefers_body() {
        let err = ApiError::Http {
            status: 500,
            body: "duplicate key".to_string(),
        };
        assert_eq!(err.detail(), "duplicate key");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "HTTP 500: duplicate key");

        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.detail(), "connection refused");
        assert_eq!(err.status(), None);
    }
}
