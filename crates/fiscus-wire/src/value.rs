//! Generic decoded wire tree.
//!
//! The transport decodes the raw XML payload into this loosely-typed tree;
//! the hydrator walks it with shape-checked accessors so that a missing or
//! mistyped field surfaces as a [`VatError::Conversion`] instead of a
//! type-confusion panic.

use fiscus_core::{VatError, VatResult};
use indexmap::IndexMap;

/// A generically decoded wire value.
///
/// Field order within a [`WireValue::Struct`] is the wire order, preserved
/// by the backing [`IndexMap`].
///
/// # Example
///
/// ```
/// use fiscus_wire::WireValue;
///
/// let entry = WireValue::struct_of([
///     ("memberState", WireValue::text("DE")),
///     ("comment", WireValue::text("standard goods")),
/// ]);
///
/// assert_eq!(entry.require("memberState")?.require_text("memberState")?, "DE");
/// assert!(entry.get("missing").is_none());
/// assert!(entry.require("missing").is_err());
/// # Ok::<(), fiscus_core::VatError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// A leaf text value.
    Text(String),
    /// A nested element with named children, in wire order.
    Struct(IndexMap<String, WireValue>),
    /// A repeated element.
    List(Vec<WireValue>),
}

impl WireValue {
    /// Creates a text leaf.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a struct from named fields, preserving their order.
    #[must_use]
    pub fn struct_of<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, WireValue)>,
    {
        Self::Struct(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Creates a list.
    #[must_use]
    pub fn list(items: impl IntoIterator<Item = WireValue>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// A short name for the variant, used in shape-mismatch messages.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Struct(_) => "struct",
            Self::List(_) => "list",
        }
    }

    /// Returns the named field, if this is a struct that has it.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WireValue> {
        match self {
            Self::Struct(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Returns the named field or a conversion error naming it.
    ///
    /// # Errors
    ///
    /// [`VatError::Conversion`] if this value is not a struct or the field
    /// is absent.
    pub fn require(&self, name: &str) -> VatResult<&WireValue> {
        match self {
            Self::Struct(fields) => fields.get(name).ok_or_else(|| {
                VatError::conversion_field(name, format!("missing required field '{name}'"))
            }),
            other => Err(VatError::conversion_field(
                name,
                format!("expected a struct with field '{name}', found {}", other.shape()),
            )),
        }
    }

    /// Returns the text content, if this is a leaf.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the text content or a conversion error naming the field the
    /// value was read from.
    ///
    /// # Errors
    ///
    /// [`VatError::Conversion`] if this value is not a text leaf.
    pub fn require_text(&self, field: &str) -> VatResult<&str> {
        self.as_text().ok_or_else(|| {
            VatError::conversion_field(
                field,
                format!("expected a text value for '{field}', found {}", self.shape()),
            )
        })
    }

    /// Returns the items, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[WireValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}
