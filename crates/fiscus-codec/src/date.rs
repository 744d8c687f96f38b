//! Date codec.
//!
//! The wire date is date-only (`YYYY-MM-DD`), but under certain transport
//! encodings the value arrives embedded in surrounding markup, or with a
//! time-of-day / offset suffix attached. Decoding therefore extracts a bare
//! date token before parsing; encoding always emits the date portion only.

use crate::CodecError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// The wire date format: `YYYY-MM-DD`, nothing else.
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

fn date_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("pattern is valid"))
}

/// Accepted inputs for [`DateCodec::encode`].
///
/// Date-like values encode directly; strings are parsed as a date or
/// date-time first and then follow the same formatting path, so
/// `"2024-01-15 14:30:00"` and a proper date value encode identically.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// A calendar date.
    Date(NaiveDate),
    /// A date-time without offset; the time-of-day is discarded.
    DateTime(NaiveDateTime),
    /// A date-time with offset; both time-of-day and offset are discarded.
    Zoned(DateTime<FixedOffset>),
    /// A textual date or date-time; parsed before encoding.
    Text(String),
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for DateInput {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Zoned(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Bidirectional wire-date codec.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fiscus_codec::DateCodec;
///
/// let codec = DateCodec::new();
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
///
/// // Bare token.
/// assert_eq!(codec.decode("2024-01-15")?, expected);
///
/// // Same date wrapped in markup, with a time-of-day and offset suffix.
/// assert_eq!(codec.decode("<d>2024-01-15T00:00:00+01:00</d>")?, expected);
///
/// assert_eq!(codec.encode(expected)?, "2024-01-15");
/// # Ok::<(), fiscus_codec::CodecError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateCodec;

impl DateCodec {
    /// Creates a date codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decodes a wire date string into a [`NaiveDate`].
    ///
    /// Extraction ladder, first hit wins:
    ///
    /// 1. If the input contains markup delimiters, take the text between
    ///    the first `>` and the following `<`.
    /// 2. Take the first `YYYY-MM-DD` token anywhere in the text,
    ///    discarding any trailing time or offset suffix.
    /// 3. Otherwise parse the trimmed input as-is.
    ///
    /// The result is a date-only value; a time-of-day component in the
    /// input is normalized away (start of day).
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidDate`] carrying the original input if no token
    /// can be extracted or the token is not a real calendar date.
    pub fn decode(&self, input: &str) -> Result<NaiveDate, CodecError> {
        let token = Self::extract_token(input);
        NaiveDate::parse_from_str(&token, WIRE_DATE_FORMAT).map_err(|e| {
            CodecError::InvalidDate {
                input: input.to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Encodes a date-like value as the wire `YYYY-MM-DD` string.
    ///
    /// Time-of-day and timezone information is discarded. Textual inputs
    /// are parsed first (RFC 3339, `YYYY-MM-DD HH:MM:SS`, or bare
    /// `YYYY-MM-DD`) and then formatted through the same path.
    ///
    /// # Errors
    ///
    /// [`CodecError::InvalidDate`] if a textual input matches none of the
    /// accepted formats.
    pub fn encode(&self, input: impl Into<DateInput>) -> Result<String, CodecError> {
        let date = match input.into() {
            DateInput::Date(d) => d,
            DateInput::DateTime(dt) => dt.date(),
            DateInput::Zoned(dt) => dt.date_naive(),
            DateInput::Text(s) => {
                let parsed = Self::parse_text(&s).ok_or_else(|| CodecError::InvalidDate {
                    input: s.clone(),
                    reason: "not a recognized date or date-time format".to_string(),
                })?;
                return self.encode(parsed);
            }
        };
        Ok(date.format(WIRE_DATE_FORMAT).to_string())
    }

    /// Pulls a bare date token out of possibly-decorated input.
    fn extract_token(input: &str) -> String {
        let trimmed = input.trim();

        if trimmed.contains('<') {
            if let Some(inner) = Self::between_markup(trimmed) {
                if let Some(m) = date_token_pattern().find(inner) {
                    return m.as_str().to_string();
                }
                return inner.trim().to_string();
            }
        }

        if let Some(m) = date_token_pattern().find(trimmed) {
            return m.as_str().to_string();
        }

        trimmed.to_string()
    }

    /// Returns the text between the first `>` and the following `<`, if any.
    fn between_markup(input: &str) -> Option<&str> {
        let start = input.find('>')? + 1;
        let rest = &input[start..];
        let end = rest.find('<')?;
        let inner = rest[..end].trim();
        if inner.is_empty() {
            None
        } else {
            Some(inner)
        }
    }

    fn parse_text(input: &str) -> Option<DateInput> {
        let trimmed = input.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(DateInput::Zoned(dt));
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
            return Some(DateInput::DateTime(dt));
        }
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, WIRE_DATE_FORMAT) {
            return Some(DateInput::Date(d));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_decode_bare_date() {
        let codec = DateCodec::new();
        assert_eq!(codec.decode("2024-01-15").unwrap(), date(2024, 1, 15));
    }

    #[test]
    fn test_decode_date_in_markup() {
        let codec = DateCodec::new();
        let wrapped = "<situationOn>2024-01-15</situationOn>";
        assert_eq!(codec.decode(wrapped).unwrap(), date(2024, 1, 15));
    }

    #[test]
    fn test_decode_markup_with_offset_suffix_zeroes_time() {
        let codec = DateCodec::new();
        let wrapped = "<d>2024-01-15T00:00:00+01:00</d>";
        assert_eq!(codec.decode(wrapped).unwrap(), date(2024, 1, 15));
    }

    #[test]
    fn test_decode_bare_token_with_offset_suffix() {
        let codec = DateCodec::new();
        assert_eq!(
            codec.decode("2024-01-15+01:00").unwrap(),
            date(2024, 1, 15)
        );
    }

    #[test]
    fn test_decode_markup_equals_bare_decode() {
        let codec = DateCodec::new();
        let bare = codec.decode("2023-07-01").unwrap();
        let wrapped = codec.decode("<value>2023-07-01</value>").unwrap();
        assert_eq!(bare, wrapped);
    }

    #[test]
    fn test_decode_failure_carries_original_input() {
        let codec = DateCodec::new();
        let err = codec.decode("<d>not a date</d>").unwrap_err();
        match err {
            CodecError::InvalidDate { input, .. } => {
                assert_eq!(input, "<d>not a date</d>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_impossible_dates() {
        let codec = DateCodec::new();
        assert!(codec.decode("2024-02-30").is_err());
        assert!(codec.decode("2024-13-01").is_err());
        assert!(codec.decode("").is_err());
    }

    #[test]
    fn test_encode_date() {
        let codec = DateCodec::new();
        assert_eq!(codec.encode(date(2024, 1, 15)).unwrap(), "2024-01-15");
    }

    #[test]
    fn test_encode_discards_time_of_day() {
        let codec = DateCodec::new();
        let dt = date(2024, 1, 15).and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(codec.encode(dt).unwrap(), "2024-01-15");
    }

    #[test]
    fn test_encode_discards_offset() {
        let codec = DateCodec::new();
        let dt = DateTime::parse_from_rfc3339("2024-01-15T23:59:59+01:00").unwrap();
        assert_eq!(codec.encode(dt).unwrap(), "2024-01-15");
    }

    #[test]
    fn test_encode_string_and_value_agree() {
        let codec = DateCodec::new();
        let from_value = codec
            .encode(date(2024, 1, 15).and_hms_opt(14, 30, 0).unwrap())
            .unwrap();
        let from_text = codec.encode("2024-01-15 14:30:00").unwrap();
        assert_eq!(from_value, from_text);
    }

    #[test]
    fn test_encode_rejects_unrecognized_text() {
        let codec = DateCodec::new();
        assert!(matches!(
            codec.encode("January 15th").unwrap_err(),
            CodecError::InvalidDate { .. }
        ));
    }

    #[test]
    fn test_round_trip_canonical_dates() {
        let codec = DateCodec::new();
        for s in ["2024-01-15", "1999-12-31", "2000-02-29"] {
            let decoded = codec.decode(s).unwrap();
            assert_eq!(codec.encode(decoded).unwrap(), s, "round trip of {s:?}");
        }
    }
}
