//! Codec error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error produced when a wire leaf value cannot be decoded or encoded.
///
/// Every variant carries the offending input verbatim so that callers can
/// report exactly what arrived on the wire.
///
/// # Example
///
/// ```
/// use fiscus_codec::DecimalCodec;
///
/// let err = DecimalCodec::default().decode("19,0").unwrap_err();
/// assert_eq!(err.input(), "19,0");
/// assert!(err.to_string().contains("19,0"));
/// ```
#[derive(Error, Debug)]
pub enum CodecError {
    /// The input is not a valid decimal literal.
    #[error("invalid decimal literal '{input}': {reason}")]
    InvalidDecimal {
        /// The offending input.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The input parsed as a decimal but falls outside the plausible range
    /// for a percentage-like value. Rejected rather than clamped: an
    /// implausible rate means the wire data is garbled.
    #[error("decimal '{input}' outside plausible range {min}..={max}")]
    OutOfRange {
        /// The offending input.
        input: String,
        /// Inclusive lower bound.
        min: Decimal,
        /// Inclusive upper bound.
        max: Decimal,
    },

    /// A numeric encode input (e.g. a float) has no exact decimal
    /// representation.
    #[error("number '{input}' has no exact decimal representation: {reason}")]
    Unrepresentable {
        /// The offending input, rendered as text.
        input: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// No date token could be extracted from the input, or the extracted
    /// token is not a valid calendar date.
    #[error("invalid date '{input}': {reason}")]
    InvalidDate {
        /// The original input, before any token extraction.
        input: String,
        /// Why extraction or parsing failed.
        reason: String,
    },
}

impl CodecError {
    /// Returns the offending input, verbatim.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidDecimal { input, .. }
            | Self::OutOfRange { input, .. }
            | Self::Unrepresentable { input, .. }
            | Self::InvalidDate { input, .. } => input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_preserved_verbatim() {
        let err = CodecError::InvalidDecimal {
            input: " 1.2.3 ".to_string(),
            reason: "multiple decimal points".to_string(),
        };
        assert_eq!(err.input(), " 1.2.3 ");
    }

    #[test]
    fn test_out_of_range_display_names_bounds() {
        let err = CodecError::OutOfRange {
            input: "250".to_string(),
            min: Decimal::from(-10),
            max: Decimal::from(100),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("250"));
        assert!(rendered.contains("-10"));
        assert!(rendered.contains("100"));
    }
}
