//! Rate retrieval responses.
//!
//! [`RatesResponse`] is an immutable ordered collection: entries keep their
//! wire order, there is no mutation API, and the filter views are computed
//! on demand rather than cached.

use crate::{Rate, RateBucket};
use chrono::NaiveDate;
use serde::Serialize;
use std::ops::Index;
use std::slice;

/// One rate entry for one member state, as produced by the hydrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateResult {
    member_state: String,
    rate: Rate,
    situation_on: NaiveDate,
    comment: Option<String>,
}

impl RateResult {
    /// Creates a result entry. The member-state code is normalized to
    /// uppercase.
    #[must_use]
    pub fn new(
        member_state: impl Into<String>,
        rate: Rate,
        situation_on: NaiveDate,
        comment: Option<String>,
    ) -> Self {
        Self {
            member_state: member_state.into().trim().to_ascii_uppercase(),
            rate,
            situation_on,
            comment,
        }
    }

    /// The two-letter member-state code, uppercase.
    #[must_use]
    pub fn member_state(&self) -> &str {
        &self.member_state
    }

    /// The reported rate.
    #[must_use]
    pub const fn rate(&self) -> &Rate {
        &self.rate
    }

    /// The date the rate is in force on.
    #[must_use]
    pub const fn situation_on(&self) -> NaiveDate {
        self.situation_on
    }

    /// The optional service comment.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// An immutable, ordered collection of [`RateResult`] entries.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fiscus_core::{Rate, RateBucket, RateResult, RatesResponse};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let response = RatesResponse::new(vec![
///     RateResult::new("DE", Rate::new("STANDARD", "19.0", None)?, day, None),
///     RateResult::new("DE", Rate::new("REDUCED", "7.0", None)?, day, None),
///     RateResult::new("FR", Rate::new("STANDARD", "20.0", None)?, day, None),
/// ]);
///
/// assert_eq!(response.len(), 3);
/// assert_eq!(response[2].member_state(), "FR");
/// assert_eq!(response.for_member_state("de").count(), 2);
/// assert_eq!(response.for_bucket(RateBucket::Standard).count(), 2);
/// # Ok::<(), fiscus_core::VatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RatesResponse {
    results: Vec<RateResult>,
}

impl RatesResponse {
    /// Creates a response from entries in wire order.
    #[must_use]
    pub fn new(results: Vec<RateResult>) -> Self {
        Self { results }
    }

    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if the response holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the entry at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&RateResult> {
        self.results.get(index)
    }

    /// Iterates over the entries in wire order.
    pub fn iter(&self) -> slice::Iter<'_, RateResult> {
        self.results.iter()
    }

    /// Entries for one member state (case-insensitive), computed on demand.
    pub fn for_member_state<'a>(
        &'a self,
        code: &'a str,
    ) -> impl Iterator<Item = &'a RateResult> + 'a {
        self.results
            .iter()
            .filter(move |r| r.member_state().eq_ignore_ascii_case(code.trim()))
    }

    /// Entries whose rate classifies into `bucket`, computed on demand.
    pub fn for_bucket(&self, bucket: RateBucket) -> impl Iterator<Item = &RateResult> {
        self.results.iter().filter(move |r| r.rate().bucket() == bucket)
    }

    /// Entries whose rate carries the given category classifier.
    pub fn for_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a RateResult> + 'a {
        self.results
            .iter()
            .filter(move |r| r.rate().category() == Some(category))
    }
}

impl Index<usize> for RatesResponse {
    type Output = RateResult;

    fn index(&self, index: usize) -> &Self::Output {
        &self.results[index]
    }
}

impl<'a> IntoIterator for &'a RatesResponse {
    type Item = &'a RateResult;
    type IntoIter = slice::Iter<'a, RateResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl IntoIterator for RatesResponse {
    type Item = RateResult;
    type IntoIter = std::vec::IntoIter<RateResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}
