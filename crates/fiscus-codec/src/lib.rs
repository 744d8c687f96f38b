//! # Fiscus Codec
//!
//! Wire codecs for the Fiscus VAT-rate client.
//!
//! The retrieval service exchanges two precision-sensitive leaf types that
//! must survive the wire boundary without loss:
//!
//! | Codec | Wire form | In-memory form |
//! |-------|-----------|----------------|
//! | [`DecimalCodec`] | decimal string, e.g. `"19.0"` | [`rust_decimal::Decimal`] |
//! | [`DateCodec`] | `YYYY-MM-DD`, possibly wrapped in markup | [`chrono::NaiveDate`] |
//!
//! Both codecs are pure: decoding and encoding are functions of their
//! arguments only, so a codec value may be shared freely across threads.
//!
//! ## Round-trip guarantees
//!
//! - `decode(encode(x)) == x` for every valid `x`.
//! - `encode(decode(s)) == s` for every `s` already in canonical form
//!   (no trailing-zero loss, no exponential notation, no time-of-day).
//!
//! ## Example
//!
//! ```
//! use fiscus_codec::{DateCodec, DecimalCodec};
//!
//! let decimal = DecimalCodec::default();
//! let rate = decimal.decode("19.0")?;
//! assert_eq!(decimal.encode(rate)?, "19.0");
//!
//! let date = DateCodec::new();
//! let day = date.decode("<value>2024-01-15T00:00:00+01:00</value>")?;
//! assert_eq!(date.encode(day)?, "2024-01-15");
//! # Ok::<(), fiscus_codec::CodecError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/fiscus-codec/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date;
mod decimal;
mod error;

pub use date::{DateCodec, DateInput, WIRE_DATE_FORMAT};
pub use decimal::{DecimalBounds, DecimalCodec, DecimalInput};
pub use error::CodecError;

// Re-export the value types callers receive from the codecs.
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
