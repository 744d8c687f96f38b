//! # Fiscus
//!
//! **Typed client core for an XML-RPC VAT-rate retrieval service.**
//!
//! Fiscus sits between a remote structured RPC service and a strongly
//! typed in-process domain model:
//!
//! - codecs that move decimals and dates across the wire boundary with
//!   zero precision loss ([`codec`]),
//! - a fault translator that maps opaque service fault codes onto a closed
//!   error taxonomy ([`wire`]),
//! - a hydrator that turns the generically decoded response tree into an
//!   immutable, ordered [`RatesResponse`](core::RatesResponse).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chrono::NaiveDate;
//! use fiscus::prelude::*;
//!
//! let client = RatesClient::new(my_transport);
//! let request = RatesRequest::builder()
//!     .member_states(["DE", "FR"])
//!     .situation_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
//!     .build()?;
//!
//! for entry in &client.retrieve_rates(&request)? {
//!     println!("{} {} {}", entry.member_state(), entry.rate().kind(), entry.rate().value());
//! }
//! ```
//!
//! ## Error handling
//!
//! Every failure, local or remote, is one [`VatError`](core::VatError)
//! variant; see that type for the taxonomy and the retryability contract.

#![doc(html_root_url = "https://docs.rs/fiscus/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export the domain model and error taxonomy
pub use fiscus_core as core;

// Re-export the wire codecs
pub use fiscus_codec as codec;

// Re-export the wire tree, fault translation, and hydration
pub use fiscus_wire as wire;

// Re-export the transport seam and the client
pub use fiscus_client as client;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust,ignore
/// use fiscus::prelude::*;
/// ```
pub mod prelude {
    pub use fiscus_core::{
        ErrorKind, Rate, RateBucket, RateResult, RatesRequest, RatesResponse, VatError, VatResult,
    };

    // Re-export the codecs
    pub use fiscus_codec::{DateCodec, DecimalBounds, DecimalCodec};

    // Re-export wire-level entry points
    pub use fiscus_wire::{
        extract_error_details, translate, Fault, FaultDetail, Hydrator, WireValue,
    };

    // Re-export the client surface
    pub use fiscus_client::{ClientConfig, RatesClient, Transport, TransportError};
}
