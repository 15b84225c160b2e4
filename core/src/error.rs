//! Error types for the Database Management client.
//!
//! # Design
//! Validation failures (`InvalidArgument`, `InvalidEnumValue`) are raised
//! while a request descriptor is being built and never reach the network.
//! `Transport` and `Service` errors come out of an execution attempt and are
//! the only kinds the retry evaluator may retry. Every variant that was
//! produced after a response arrived keeps the `opc-request-id` so failures
//! can be correlated with server-side logs.

use std::time::Duration;

use thiserror::Error;

/// Errors returned by client operations.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// A required parameter is missing or blank, or an argument is malformed.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },

    /// A value is outside an enumerated allow-list.
    #[error("invalid value `{value}` for `{parameter}`, allowed values: {}", .allowed.join(", "))]
    InvalidEnumValue {
        parameter: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// A 2xx response body did not match the expected shape.
    #[error("failed to deserialize {operation} response (status {status}): {message}")]
    Deserialization {
        operation: &'static str,
        status: u16,
        message: String,
        opc_request_id: Option<String>,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The client could not be constructed (no region, bad endpoint, bad config file).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    pub(crate) fn invalid_argument(parameter: &'static str, reason: impl Into<String>) -> Self {
        ApiError::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }

    /// True for failures detected before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidArgument { .. } | ApiError::InvalidEnumValue { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Service(e) if e.status == 404)
    }

    /// HTTP status of the response that caused this error, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Service(e) => Some(e.status),
            ApiError::Deserialization { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn opc_request_id(&self) -> Option<&str> {
        match self {
            ApiError::Service(e) => e.opc_request_id.as_deref(),
            ApiError::Transport(e) => e.opc_request_id.as_deref(),
            ApiError::Deserialization { opc_request_id, .. } => opc_request_id.as_deref(),
            _ => None,
        }
    }
}

/// A non-2xx response from the service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed with HTTP {status} ({code}): {message} [opc-request-id: {}]", .opc_request_id.as_deref().unwrap_or("-"))]
pub struct ServiceError {
    pub status: u16,
    /// Service-defined error code, e.g. `NotAuthorizedOrNotFound`.
    pub code: String,
    pub message: String,
    pub opc_request_id: Option<String>,
    pub operation: &'static str,
    pub request_endpoint: String,
    /// Parsed `retry-after` header, in whole seconds.
    pub retry_after: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Dns,
    Connect,
    Timeout,
    Io,
    Other,
}

/// A failure below HTTP: DNS, connect, timeout, or a broken stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport error ({kind:?}) calling {endpoint}: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
    pub endpoint: String,
    /// The request id the client sent, when one was set.
    pub opc_request_id: Option<String>,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            endpoint: endpoint.into(),
            opc_request_id: None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }
}
