//! # Fiscus Client
//!
//! The outward-facing surface of the Fiscus VAT-rate client: the
//! [`Transport`] seam the application supplies, the [`ClientConfig`], and
//! [`RatesClient::retrieve_rates`], which always returns either a typed
//! [`RatesResponse`](fiscus_core::RatesResponse) or one error from the
//! closed [`VatError`](fiscus_core::VatError) taxonomy.
//!
//! The pipeline is synchronous and stateless; timeout and retry policy
//! belong to the [`Transport`] implementation, not to this crate.

#![doc(html_root_url = "https://docs.rs/fiscus-client/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod config;
mod transport;

pub use client::RatesClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use transport::{Transport, TransportError};
