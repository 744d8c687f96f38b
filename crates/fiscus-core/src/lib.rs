//! # Fiscus Core
//!
//! Error taxonomy and immutable domain model for the Fiscus VAT-rate
//! client.
//!
//! Everything in this crate is created once, fully populated, and never
//! mutated: [`Rate`], [`RateResult`], [`RatesResponse`], and
//! [`RatesRequest`] have no mutation API, which makes the whole pipeline
//! trivially safe to share across threads.
//!
//! The error side is a single closed enum, [`VatError`]; see that type for
//! the taxonomy and the Conversion-vs-Parse distinction.

#![doc(html_root_url = "https://docs.rs/fiscus-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod rate;
mod request;
mod response;

pub use error::{ErrorKind, VatError, VatResult};
pub use rate::{Rate, RateBucket};
pub use request::{RatesRequest, RatesRequestBuilder};
pub use response::{RateResult, RatesResponse};
