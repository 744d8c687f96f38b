//! Decimal codec.
//!
//! Converts between wire decimal strings and [`Decimal`] values without ever
//! passing through a binary floating-point intermediate, and bound-checks
//! decoded values against a plausible percentage range.

use crate::CodecError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Inclusive plausibility bounds applied when decoding a rate value.
///
/// A VAT rate is a percentage; anything far outside `0..=30` is suspicious
/// and anything outside these bounds is rejected outright as garbled wire
/// data. Negative rates down to -10 are allowed because some jurisdictions
/// report rebate-style entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecimalBounds {
    /// Inclusive lower bound, in percentage points.
    pub min: Decimal,
    /// Inclusive upper bound, in percentage points.
    pub max: Decimal,
}

impl DecimalBounds {
    /// Creates bounds from an inclusive range.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies within the bounds.
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for DecimalBounds {
    fn default() -> Self {
        Self {
            min: Decimal::from(-10),
            max: Decimal::from(100),
        }
    }
}

/// Accepted inputs for [`DecimalCodec::encode`].
///
/// The encoder takes either the codec's own value type or any numeric or
/// textual representation; all of them normalize to the same canonical
/// decimal string. Anything else is a type error at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum DecimalInput {
    /// An exact decimal value.
    Decimal(Decimal),
    /// A signed integer.
    Int(i64),
    /// A binary float; converted exactly or rejected (never rounded
    /// silently through formatting).
    Float(f64),
    /// A textual decimal literal; parsed before encoding.
    Text(String),
}

impl From<Decimal> for DecimalInput {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<i64> for DecimalInput {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for DecimalInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for DecimalInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DecimalInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Bidirectional wire-decimal codec.
///
/// # Example
///
/// ```
/// use fiscus_codec::DecimalCodec;
///
/// let codec = DecimalCodec::default();
///
/// // Exact: 19.0, not 18.999999...
/// let value = codec.decode("19.0")?;
/// assert_eq!(value.to_string(), "19.0");
///
/// // Canonical form survives the round trip, trailing zero included.
/// assert_eq!(codec.encode(value)?, "19.0");
///
/// // Garbled wire data is rejected, not clamped.
/// assert!(codec.decode("250").is_err());
/// # Ok::<(), fiscus_codec::CodecError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalCodec {
    bounds: DecimalBounds,
}

impl DecimalCodec {
    /// Creates a codec with custom plausibility bounds.
    #[must_use]
    pub const fn new(bounds: DecimalBounds) -> Self {
        Self { bounds }
    }

    /// Returns the configured bounds.
    #[must_use]
    pub const fn bounds(&self) -> DecimalBounds {
        self.bounds
    }

    /// Decodes a wire decimal string into an exact [`Decimal`].
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidDecimal`] if the input is not a plain decimal
    ///   literal (exponential notation is not a valid wire form).
    /// - [`CodecError::OutOfRange`] if the value falls outside the
    ///   configured bounds.
    pub fn decode(&self, input: &str) -> Result<Decimal, CodecError> {
        let trimmed = input.trim();
        let value = Decimal::from_str(trimmed).map_err(|e| CodecError::InvalidDecimal {
            input: input.to_string(),
            reason: e.to_string(),
        })?;

        if !self.bounds.contains(value) {
            return Err(CodecError::OutOfRange {
                input: input.to_string(),
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }

        Ok(value)
    }

    /// Encodes a value into the canonical wire decimal string.
    ///
    /// The canonical form preserves the scale of the value (`19.0` encodes
    /// as `"19.0"`, not `"19"`) and never uses exponential notation.
    ///
    /// # Errors
    ///
    /// - [`CodecError::InvalidDecimal`] if a textual input is not a valid
    ///   decimal literal.
    /// - [`CodecError::Unrepresentable`] if a float input is NaN, infinite,
    ///   or otherwise has no exact decimal form.
    pub fn encode(&self, input: impl Into<DecimalInput>) -> Result<String, CodecError> {
        let value = match input.into() {
            DecimalInput::Decimal(d) => d,
            DecimalInput::Int(i) => Decimal::from(i),
            DecimalInput::Float(f) => {
                Decimal::try_from(f).map_err(|e| CodecError::Unrepresentable {
                    input: f.to_string(),
                    reason: e.to_string(),
                })?
            }
            DecimalInput::Text(s) => {
                Decimal::from_str(s.trim()).map_err(|e| CodecError::InvalidDecimal {
                    input: s.clone(),
                    reason: e.to_string(),
                })?
            }
        };
        Ok(value.to_string())
    }
}
