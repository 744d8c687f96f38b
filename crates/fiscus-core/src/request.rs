//! Rate retrieval requests.
//!
//! Validation lives in the builder: a [`RatesRequest`] that exists is valid
//! by construction, so the client and the transport encoder never re-check
//! it.

use crate::{VatError, VatResult};
use chrono::NaiveDate;
use serde::Serialize;

/// An immutable request for VAT rates.
///
/// Carries a non-empty, de-duplicated set of two-letter member-state codes
/// (ISO 3166-1 alpha-2, normalized to uppercase), the situation date the
/// rates should hold on, and an optional upper date bound.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fiscus_core::RatesRequest;
///
/// let request = RatesRequest::builder()
///     .member_state("de")
///     .member_state("FR")
///     .situation_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .build()?;
///
/// assert_eq!(request.member_states(), ["DE", "FR"]);
/// # Ok::<(), fiscus_core::VatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatesRequest {
    member_states: Vec<String>,
    situation_on: NaiveDate,
    until: Option<NaiveDate>,
}

impl RatesRequest {
    /// Creates a request builder.
    #[must_use]
    pub fn builder() -> RatesRequestBuilder {
        RatesRequestBuilder::default()
    }

    /// The member-state codes, uppercased, in insertion order.
    #[must_use]
    pub fn member_states(&self) -> &[String] {
        &self.member_states
    }

    /// The date the requested rates should be in force on.
    #[must_use]
    pub const fn situation_on(&self) -> NaiveDate {
        self.situation_on
    }

    /// The optional upper date bound.
    #[must_use]
    pub const fn until(&self) -> Option<NaiveDate> {
        self.until
    }
}

/// Builder for [`RatesRequest`].
#[derive(Debug, Clone, Default)]
pub struct RatesRequestBuilder {
    member_states: Vec<String>,
    situation_on: Option<NaiveDate>,
    until: Option<NaiveDate>,
}

impl RatesRequestBuilder {
    /// Adds one member-state code. Case-insensitive; duplicates are
    /// dropped at build time.
    #[must_use]
    pub fn member_state(mut self, code: impl Into<String>) -> Self {
        self.member_states.push(code.into());
        self
    }

    /// Adds several member-state codes.
    #[must_use]
    pub fn member_states<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.member_states.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Sets the situation date.
    #[must_use]
    pub const fn situation_on(mut self, date: NaiveDate) -> Self {
        self.situation_on = Some(date);
        self
    }

    /// Sets the optional upper date bound.
    #[must_use]
    pub const fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Validates and builds the request.
    ///
    /// # Errors
    ///
    /// [`VatError::InvalidRequest`] if:
    /// - no member-state code was added,
    /// - a code is not exactly two ASCII letters,
    /// - no situation date was set,
    /// - the upper bound precedes the situation date.
    pub fn build(self) -> VatResult<RatesRequest> {
        if self.member_states.is_empty() {
            return Err(VatError::invalid_request("member state set is empty"));
        }

        let mut member_states: Vec<String> = Vec::with_capacity(self.member_states.len());
        for code in &self.member_states {
            let trimmed = code.trim();
            if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(VatError::invalid_request(format!(
                    "'{code}' is not a two-letter member state code"
                )));
            }
            let normalized = trimmed.to_ascii_uppercase();
            if !member_states.contains(&normalized) {
                member_states.push(normalized);
            }
        }

        let situation_on = self
            .situation_on
            .ok_or_else(|| VatError::invalid_request("situation date is required"))?;

        if let Some(until) = self.until {
            if until < situation_on {
                return Err(VatError::invalid_request(format!(
                    "upper bound {until} precedes situation date {situation_on}"
                )));
            }
        }

        Ok(RatesRequest {
            member_states,
            situation_on,
            until: self.until,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_builds_with_normalized_codes() {
        let request = RatesRequest::builder()
            .member_state("de")
            .member_states(["fr", "IT"])
            .situation_on(date(2024, 1, 15))
            .build()
            .unwrap();
        assert_eq!(request.member_states(), ["DE", "FR", "IT"]);
        assert_eq!(request.situation_on(), date(2024, 1, 15));
        assert_eq!(request.until(), None);
    }

    #[test]
    fn test_duplicates_dropped_preserving_order() {
        let request = RatesRequest::builder()
            .member_states(["AT", "de", "DE", "at"])
            .situation_on(date(2024, 1, 1))
            .build()
            .unwrap();
        assert_eq!(request.member_states(), ["AT", "DE"]);
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = RatesRequest::builder()
            .situation_on(date(2024, 1, 1))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_malformed_code_rejected() {
        for code in ["DEU", "D", "1A", "", "d e"] {
            let err = RatesRequest::builder()
                .member_state(code)
                .situation_on(date(2024, 1, 1))
                .build()
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidRequest, "code {code:?}");
        }
    }

    #[test]
    fn test_missing_situation_date_rejected() {
        let err = RatesRequest::builder()
            .member_state("DE")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = RatesRequest::builder()
            .member_state("DE")
            .situation_on(date(2024, 6, 1))
            .until(date(2024, 1, 1))
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let request = RatesRequest::builder()
            .member_state("DE")
            .situation_on(date(2024, 1, 1))
            .until(date(2024, 1, 1))
            .build()
            .unwrap();
        assert_eq!(request.until(), Some(date(2024, 1, 1)));
    }
}
