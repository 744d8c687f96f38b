//! Rate values and rate-kind classification.
//!
//! The service reports each rate as a `{type, value}` pair where `type` is
//! a free-form category tag. The tag vocabulary mixes long spellings
//! (`PARKING_RATE`), short codes (`PK`), and indexed variants
//! (`REDUCED[1]`). Classification maps every tag into one of six semantic
//! buckets; a tag outside the vocabulary is a hard error, never a guessed
//! bucket.

use crate::{VatError, VatResult};
use fiscus_codec::{Decimal, DecimalCodec};
use serde::Serialize;

/// Semantic bucket of a rate kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBucket {
    /// The standard rate of the jurisdiction.
    Standard,
    /// A reduced rate, including indexed variants like `REDUCED[1]`.
    Reduced,
    /// A super-reduced rate below the reduced band.
    SuperReduced,
    /// A parking rate (transitional rate for specific goods).
    Parking,
    /// An explicit zero rate.
    Zero,
    /// Exempt, not-applicable, or out-of-scope supplies.
    Exempt,
}

impl RateBucket {
    /// Classifies a normalized (trimmed, uppercased) kind tag.
    ///
    /// Pure function over the tag; returns `None` for tags outside the
    /// known vocabulary.
    #[must_use]
    pub fn classify(kind: &str) -> Option<Self> {
        match kind {
            "STANDARD" | "DEFAULT" => Some(Self::Standard),
            "REDUCED" | "RED" | "RED1" | "RED2" => Some(Self::Reduced),
            k if k.starts_with("REDUCED[") && k.ends_with(']') => Some(Self::Reduced),
            "SUPER_REDUCED" | "SUPER REDUCED" | "SPR" => Some(Self::SuperReduced),
            "PARKING_RATE" | "PARKING" | "PK" => Some(Self::Parking),
            "ZERO" | "ZERO_RATE" | "Z" => Some(Self::Zero),
            "EXEMPTED" | "EXEMPT" | "E" | "NOT_APPLICABLE" | "N/A" | "OUT_OF_SCOPE" => {
                Some(Self::Exempt)
            }
            _ => None,
        }
    }
}

/// An immutable VAT rate as reported by the service.
///
/// The wire decimal string is preserved verbatim in `raw_value`; the exact
/// decimal is computed once, at construction, through the
/// [`DecimalCodec`]. Construction fails if the raw value does not decode or
/// the kind does not classify — a `Rate` never silently defaults to zero.
///
/// # Example
///
/// ```
/// use fiscus_core::{Rate, RateBucket};
///
/// let rate = Rate::new("REDUCED[1]", "5.5", None)?;
/// assert_eq!(rate.bucket(), RateBucket::Reduced);
/// assert_eq!(rate.raw_value(), "5.5");
/// assert_eq!(rate.value().to_string(), "5.5");
/// # Ok::<(), fiscus_core::VatError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rate {
    kind: String,
    bucket: RateBucket,
    raw_value: String,
    value: Decimal,
    category: Option<String>,
}

impl Rate {
    /// Creates a rate using the default decimal plausibility bounds.
    ///
    /// # Errors
    ///
    /// - [`VatError::Parse`] if `raw_value` is not a plausible decimal or
    ///   `kind` is outside the known vocabulary.
    pub fn new(
        kind: impl Into<String>,
        raw_value: impl Into<String>,
        category: Option<String>,
    ) -> VatResult<Self> {
        Self::with_codec(&DecimalCodec::default(), kind, raw_value, category)
    }

    /// Creates a rate, decoding the raw value through the given codec.
    ///
    /// # Errors
    ///
    /// Same as [`Rate::new`], with the codec's configured bounds applied.
    pub fn with_codec(
        codec: &DecimalCodec,
        kind: impl Into<String>,
        raw_value: impl Into<String>,
        category: Option<String>,
    ) -> VatResult<Self> {
        let kind = kind.into().trim().to_uppercase();
        let raw_value = raw_value.into();

        let bucket = RateBucket::classify(&kind).ok_or_else(|| {
            VatError::parse(kind.clone(), format!("unrecognized rate kind '{kind}'"))
        })?;
        let value = codec.decode(&raw_value).map_err(VatError::from)?;

        Ok(Self {
            kind,
            bucket,
            raw_value,
            value,
            category,
        })
    }

    /// The normalized kind tag, e.g. `"REDUCED[1]"`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The semantic bucket the kind classifies into.
    #[must_use]
    pub const fn bucket(&self) -> RateBucket {
        self.bucket
    }

    /// The wire decimal string, verbatim.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.raw_value
    }

    /// The exact decimal value derived from [`raw_value`](Self::raw_value).
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// The optional free-text classifier reported alongside the rate.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
