//! Response hydration.
//!
//! Walks the generically decoded response tree and produces the strongly
//! typed [`RatesResponse`]. Shape problems (missing field, wrong node kind)
//! surface as `Conversion` errors; malformed leaf content surfaces as
//! `Parse` errors from the codecs. The two are never conflated, so callers
//! can tell "the envelope was wrong" from "a value inside a well-formed
//! envelope was malformed".

use crate::WireValue;
use fiscus_codec::{DateCodec, DecimalCodec};
use fiscus_core::{Rate, RateBucket, RateResult, RatesResponse, VatError, VatResult};
use std::slice;

/// Wire field holding the result entries.
const RESULTS_FIELD: &str = "vatRateResults";

/// Converts decoded wire responses into [`RatesResponse`] values.
///
/// The hydrator supports both transport integration styles: if the
/// transport already routed date/decimal leaves through the codecs, the
/// leaf strings arriving here are canonical and decode trivially; if not,
/// the raw leaf strings are decoded here. The codec contracts are identical
/// either way.
///
/// # Example
///
/// ```
/// use fiscus_wire::{Hydrator, WireValue};
///
/// let wire = WireValue::struct_of([(
///     "vatRateResults",
///     WireValue::list([WireValue::struct_of([
///         ("memberState", WireValue::text("DE")),
///         ("rate", WireValue::struct_of([
///             ("type", WireValue::text("STANDARD")),
///             ("value", WireValue::text("19.0")),
///         ])),
///         ("situationOn", WireValue::text("2024-01-15")),
///     ])]),
/// )]);
///
/// let response = Hydrator::new().hydrate(&wire)?;
/// assert_eq!(response.len(), 1);
/// assert_eq!(response[0].member_state(), "DE");
/// assert_eq!(response[0].rate().raw_value(), "19.0");
/// # Ok::<(), fiscus_core::VatError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hydrator {
    decimal: DecimalCodec,
    date: DateCodec,
}

impl Hydrator {
    /// Creates a hydrator with default codec settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hydrator with a custom decimal codec (e.g. non-default
    /// plausibility bounds).
    #[must_use]
    pub const fn with_decimal_codec(decimal: DecimalCodec) -> Self {
        Self {
            decimal,
            date: DateCodec::new(),
        }
    }

    /// Hydrates a decoded wire response into the typed response graph.
    ///
    /// Entries are accumulated in wire order. A response struct without a
    /// `vatRateResults` field hydrates to an empty response (the service
    /// omits the element when nothing matched).
    ///
    /// # Errors
    ///
    /// - [`VatError::Conversion`] if the top-level shape is unexpected or a
    ///   required field (`memberState`, `rate.type`, `rate.value`,
    ///   `situationOn`) is missing or mistyped.
    /// - [`VatError::Parse`] if a leaf value fails codec decoding or a rate
    ///   kind falls outside the known vocabulary.
    pub fn hydrate(&self, wire: &WireValue) -> VatResult<RatesResponse> {
        let entries: &[WireValue] = match wire {
            WireValue::List(items) => items,
            WireValue::Struct(_) => match wire.get(RESULTS_FIELD) {
                Some(WireValue::List(items)) => items,
                // Single-result responses decode as a bare struct.
                Some(single @ WireValue::Struct(_)) => slice::from_ref(single),
                Some(other) => {
                    return Err(VatError::conversion_field(
                        RESULTS_FIELD,
                        format!("expected a list of result entries, found {}", other.shape()),
                    ));
                }
                None => &[],
            },
            WireValue::Text(_) => {
                return Err(VatError::conversion(
                    "expected a decoded response struct, found a bare text value",
                ));
            }
        };

        let mut results = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            results.push(self.hydrate_entry(entry).map_err(|e| {
                tracing::debug!(index, error = %e, "result entry failed to hydrate");
                e
            })?);
        }

        tracing::debug!(entries = results.len(), "hydrated rates response");
        Ok(RatesResponse::new(results))
    }

    fn hydrate_entry(&self, entry: &WireValue) -> VatResult<RateResult> {
        if !matches!(entry, WireValue::Struct(_)) {
            return Err(VatError::conversion(format!(
                "expected a result entry struct, found {}",
                entry.shape()
            )));
        }

        let member_state = entry.require("memberState")?.require_text("memberState")?;

        let rate_node = entry.require("rate")?;
        let kind = require_text_at(rate_node, "type", "rate.type")?;
        let raw_value = require_text_at(rate_node, "value", "rate.value")?;

        let situation_raw = entry.require("situationOn")?.require_text("situationOn")?;
        let situation_on = self
            .date
            .decode(situation_raw)
            .map_err(|e| VatError::from(e).with_field("situationOn"))?;

        let category = optional_text(rate_node, "category")
            .or_else(|| optional_text(entry, "category"));
        let comment = optional_text(entry, "comment");

        // Classify before constructing so a bad kind and a bad value each
        // name their own field.
        let normalized_kind = kind.trim().to_uppercase();
        if RateBucket::classify(&normalized_kind).is_none() {
            return Err(VatError::parse(
                kind,
                format!("unrecognized rate kind '{normalized_kind}'"),
            )
            .with_field("rate.type"));
        }
        let rate = Rate::with_codec(&self.decimal, kind, raw_value, category)
            .map_err(|e| e.with_field("rate.value"))?;

        Ok(RateResult::new(member_state, rate, situation_on, comment))
    }
}

/// Looks up `key` on `node`, erroring with the full `path` so nested fields
/// report as e.g. `rate.value`.
fn require_text_at<'a>(node: &'a WireValue, key: &str, path: &str) -> VatResult<&'a str> {
    let value = node.get(key).ok_or_else(|| {
        VatError::conversion_field(path, format!("missing required field '{path}'"))
    })?;
    value.require_text(path)
}

fn optional_text(node: &WireValue, key: &str) -> Option<String> {
    node.get(key)
        .and_then(WireValue::as_text)
        .map(ToString::to_string)
}
