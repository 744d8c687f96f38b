//! # Fiscus Wire
//!
//! Wire-level translation for the Fiscus VAT-rate client.
//!
//! Three pieces sit between the transport's generic XML decoding and the
//! typed domain model:
//!
//! | Piece | Role |
//! |-------|------|
//! | [`WireValue`] | loosely-typed decoded tree with shape-checked accessors |
//! | [`translate`] | remote fault → one error from the closed taxonomy |
//! | [`Hydrator`] | decoded tree → [`RatesResponse`](fiscus_core::RatesResponse) |
//!
//! Fault detail strings are normalized by [`extract_error_details`], which
//! parses embedded XML fragments without ever resolving DTDs or external
//! entities.

#![doc(html_root_url = "https://docs.rs/fiscus-wire/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod fault;
mod hydrate;
mod translate;
mod value;

pub use fault::{extract_error_details, Fault, FaultDetail};
pub use hydrate::Hydrator;
pub use translate::{
    is_client_fault_code, is_server_fault_code, translate, FAULT_EMPTY_MEMBER_STATES,
    FAULT_INTERNAL_ERROR, FAULT_INVALID_DATE, FAULT_INVALID_MEMBER_STATE, NO_FAULT_STRING,
    UNKNOWN_FAULT_CODE,
};
pub use value::WireValue;
