//! The transport seam.
//!
//! The core pipeline never performs network I/O. A [`Transport`]
//! implementation owns the actual RPC call and the raw XML encode/decode;
//! it hands the client either a generically decoded [`WireValue`] or a
//! [`TransportError`].

use anyhow::Error as AnyError;
use fiscus_wire::{Fault, WireValue};
use thiserror::Error;

/// Failure modes a transport may report.
///
/// This set is closed on purpose: the client maps each variant onto the
/// error taxonomy without ever inspecting transport internals.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The service answered with a structured fault.
    #[error("remote fault: {0}")]
    Fault(Fault),

    /// The call itself failed (connection refused, timeout, TLS, ...).
    #[error("connection failure: {message}")]
    Connection {
        /// Human-readable description of the failure.
        message: String,
        /// The underlying I/O or protocol error.
        #[source]
        source: Option<AnyError>,
    },

    /// The transport was set up incorrectly (missing endpoint, bad
    /// interface description, unregistered codec).
    #[error("transport configuration error: {message}")]
    Configuration {
        /// Human-readable description of the problem.
        message: String,
    },
}

impl TransportError {
    /// Creates a connection failure with a source error attached.
    pub fn connection(message: impl Into<String>, source: impl Into<AnyError>) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Creates a configuration failure.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Sends one encoded request and returns the generically decoded response.
///
/// Implementations perform the network call, the raw XML encode/decode,
/// and (optionally) route date/decimal leaves through the codecs at the
/// decoding boundary. The hydrator tolerates both integration styles.
pub trait Transport {
    /// Invokes `operation` with the encoded `request`.
    ///
    /// # Errors
    ///
    /// - [`TransportError::Fault`] when the service reports a fault.
    /// - [`TransportError::Connection`] when the call itself fails.
    /// - [`TransportError::Configuration`] when the transport is unusable.
    fn send(&self, operation: &str, request: &WireValue) -> Result<WireValue, TransportError>;
}
