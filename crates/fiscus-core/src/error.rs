//! Error types for Fiscus.
//!
//! This module provides the [`VatError`] type, the single error type every
//! Fiscus component produces. The taxonomy is closed and flat: callers
//! pattern-match exhaustively on the variants (or on [`ErrorKind`]) instead
//! of downcasting through an inheritance-style chain.
//!
//! Two variants are easy to confuse and are kept deliberately distinct:
//!
//! | Variant | Meaning |
//! |---|---|
//! | [`VatError::Conversion`] | the decoded response envelope had the wrong shape |
//! | [`VatError::Parse`] | a leaf value inside a well-formed envelope was malformed |
//!
//! A `Conversion` error points at a protocol or version mismatch; a `Parse`
//! error points at garbled field content. Neither is ever re-labeled as the
//! other.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using [`VatError`].
pub type VatResult<T> = Result<T, VatError>;

/// Classification of errors, mirroring the [`VatError`] variants.
///
/// Useful for logging and for retry-policy decisions that do not need the
/// structured payload of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Client-side or service-confirmed bad input.
    InvalidRequest,
    /// Transport failure or service-confirmed internal error.
    ServiceUnavailable,
    /// Malformed setup of the transport or codecs.
    Configuration,
    /// Decoded wire response did not match the expected shape.
    Conversion,
    /// A leaf value (decimal or date) failed codec decoding.
    Parse,
    /// Remote fault not matching any known code.
    RemoteFault,
}

impl ErrorKind {
    /// Returns `true` if a call failing with this kind may succeed when
    /// retried later without changing the request.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::ServiceUnavailable)
    }
}

/// Standard error type for Fiscus.
///
/// Every failure in the translation pipeline becomes exactly one `VatError`.
/// The original low-level cause (remote fault, codec failure, I/O error) is
/// attached as the `source` and never discarded.
///
/// # Example
///
/// ```
/// use fiscus_core::{VatError, ErrorKind};
///
/// fn check_member_states(codes: &[String]) -> Result<(), VatError> {
///     if codes.is_empty() {
///         return Err(VatError::invalid_request("member state set is empty"));
///     }
///     Ok(())
/// }
///
/// let err = check_member_states(&[]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidRequest);
/// assert!(!err.kind().is_retryable());
/// ```
#[derive(Error, Debug)]
pub enum VatError {
    /// The request was rejected as malformed, either locally or by the
    /// service. Not retryable without changing the input.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// Human-readable error message.
        message: String,
        /// The service fault code, if the rejection came from the service.
        code: Option<String>,
        /// The original fault or validation failure.
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The service or the transport failed. Retryable after backoff.
    #[error("service unavailable: {message}")]
    ServiceUnavailable {
        /// Human-readable error message.
        message: String,
        /// The service fault code, if the failure was service-confirmed.
        code: Option<String>,
        /// The original fault or transport failure.
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The client, transport, or codecs were set up incorrectly. Fatal to
    /// the current client instance.
    #[error("configuration error: {message}")]
    Configuration {
        /// Human-readable error message.
        message: String,
        /// The underlying setup failure.
        #[source]
        source: Option<anyhow::Error>,
    },

    /// The decoded wire response did not match the expected shape.
    #[error("conversion error: {message}")]
    Conversion {
        /// Human-readable error message.
        message: String,
        /// The wire field that was missing or mistyped, if known.
        field: Option<String>,
    },

    /// A leaf value failed codec decoding.
    #[error("parse error: {message}")]
    Parse {
        /// The wire field whose content was malformed, if known.
        field: Option<String>,
        /// The offending input, verbatim, for diagnostics.
        value: String,
        /// Human-readable error message.
        message: String,
        /// The underlying codec failure.
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A remote fault that matched no known fault code. The original code
    /// and message are preserved for diagnostics.
    #[error("remote fault {code}: {message}")]
    RemoteFault {
        /// The fault code as reported (or the `UNKNOWN` placeholder).
        code: String,
        /// The fault message as reported (or the placeholder message).
        message: String,
        /// The original fault object.
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl VatError {
    /// Creates an invalid-request error with a message.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            code: None,
            source: None,
        }
    }

    /// Creates an invalid-request error confirmed by the service, carrying
    /// the fault code and the original fault as the wrapped cause.
    pub fn invalid_request_from_fault(
        message: impl Into<String>,
        code: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            code: Some(code.into()),
            source: Some(source.into()),
        }
    }

    /// Creates a service-unavailable error with a message.
    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
            code: None,
            source: None,
        }
    }

    /// Creates a service-unavailable error with a source error attached.
    pub fn service_unavailable_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
            code: None,
            source: Some(source.into()),
        }
    }

    /// Creates a service-unavailable error confirmed by the service.
    pub fn service_unavailable_from_fault(
        message: impl Into<String>,
        code: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
            code: Some(code.into()),
            source: Some(source.into()),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a configuration error with a source error attached.
    pub fn configuration_with_source(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates a conversion error.
    #[must_use]
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a conversion error naming the missing or mistyped field.
    #[must_use]
    pub fn conversion_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a parse error for a malformed leaf value.
    #[must_use]
    pub fn parse(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            field: None,
            value: value.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a remote-fault error preserving the original code and
    /// message.
    pub fn remote_fault(
        code: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Self::RemoteFault {
            code: code.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            Self::ServiceUnavailable { .. } => ErrorKind::ServiceUnavailable,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Conversion { .. } => ErrorKind::Conversion,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::RemoteFault { .. } => ErrorKind::RemoteFault,
        }
    }

    /// Returns the service fault code carried by this error, if any.
    #[must_use]
    pub fn fault_code(&self) -> Option<&str> {
        match self {
            Self::InvalidRequest { code, .. } | Self::ServiceUnavailable { code, .. } => {
                code.as_deref()
            }
            Self::RemoteFault { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Returns the wire field this error names, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Conversion { field, .. } | Self::Parse { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Attaches (or replaces) the field name on a [`VatError::Parse`] error.
    ///
    /// The hydrator uses this to add wire-field context to codec failures
    /// without changing their kind. Other variants pass through unchanged.
    #[must_use]
    pub fn with_field(self, field: impl Into<String>) -> Self {
        match self {
            Self::Parse {
                value,
                message,
                source,
                ..
            } => Self::Parse {
                field: Some(field.into()),
                value,
                message,
                source,
            },
            other => other,
        }
    }
}

impl From<fiscus_codec::CodecError> for VatError {
    fn from(err: fiscus_codec::CodecError) -> Self {
        Self::Parse {
            field: None,
            value: err.input().to_string(),
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}
