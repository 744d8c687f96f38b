//! Remote fault representation and detail extraction.
//!
//! A fault carries an opaque code, a message, and an optional detail blob.
//! The detail is sometimes a structured map, sometimes a raw XML fragment
//! string. [`extract_error_details`] normalizes both into a flat map and is
//! hardened against entity injection: the fragment parse refuses DTDs and
//! never resolves external entities, so a hostile detail string cannot leak
//! local resource content.

use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Structured or raw fault detail, as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaultDetail {
    /// Detail already decoded into key/value pairs.
    Structured(IndexMap<String, String>),
    /// Detail left as a raw string, possibly an XML fragment.
    Text(String),
}

/// A remote fault as surfaced by the transport.
///
/// Implements [`std::error::Error`] so a translated [`VatError`]
/// (see [`crate::translate`]) can carry the original fault as its wrapped
/// cause.
///
/// [`VatError`]: fiscus_core::VatError
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("remote fault (code: {code:?}, message: {message:?})")]
pub struct Fault {
    /// The opaque fault code, e.g. `TEDB-102`. May be absent.
    pub code: Option<String>,
    /// The fault message. May be absent.
    pub message: Option<String>,
    /// Optional structured or raw detail.
    pub detail: Option<FaultDetail>,
}

impl Fault {
    /// Creates a fault with a code and message, no detail.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
            detail: None,
        }
    }

    /// Attaches detail to the fault.
    #[must_use]
    pub fn with_detail(mut self, detail: FaultDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Normalizes fault detail into a flat key/value map.
///
/// - Absent detail yields an empty map.
/// - Structured detail is returned unchanged.
/// - Text detail is parsed as an XML fragment (DTDs refused, external
///   entities never resolved); a successful parse yields
///   `{root_element: trimmed_text}`, anything else yields `{"raw": text}`.
///   This function never fails.
///
/// # Example
///
/// ```
/// use fiscus_wire::{extract_error_details, FaultDetail};
///
/// let detail = FaultDetail::Text("<reason>date out of range</reason>".to_string());
/// let map = extract_error_details(Some(&detail));
/// assert_eq!(map["reason"], "date out of range");
///
/// assert!(extract_error_details(None).is_empty());
/// ```
#[must_use]
pub fn extract_error_details(detail: Option<&FaultDetail>) -> IndexMap<String, String> {
    match detail {
        None => IndexMap::new(),
        Some(FaultDetail::Structured(map)) => map.clone(),
        Some(FaultDetail::Text(raw)) => match parse_fragment(raw) {
            Some((root, text)) => IndexMap::from_iter([(root, text)]),
            None => IndexMap::from_iter([("raw".to_string(), raw.clone())]),
        },
    }
}

/// Parses a detail fragment into its root element name and trimmed text.
///
/// Any DOCTYPE declaration aborts the parse: entity declarations are never
/// read, so neither internal nor external entities can resolve.
fn parse_fragment(raw: &str) -> Option<(String, String)> {
    let mut reader = Reader::from_str(raw);
    reader.config_mut().trim_text(true);

    let mut root: Option<String> = None;
    let mut text = String::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if root.is_none() {
                    root = Some(String::from_utf8_lossy(start.local_name().as_ref()).into_owned());
                }
            }
            Ok(Event::Text(t)) => match t.unescape() {
                Ok(s) => text.push_str(&s),
                // Unknown entity references are not resolvable; treat as raw.
                Err(_) => return None,
            },
            Ok(Event::DocType(_)) => return None,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(_) => return None,
        }
    }
    root.map(|r| (r, text.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_detail_is_empty_map() {
        assert!(extract_error_details(None).is_empty());
    }

    #[test]
    fn test_structured_detail_passes_through_unchanged() {
        let map = IndexMap::from_iter([
            ("code".to_string(), "TEDB-100".to_string()),
            ("hint".to_string(), "check date".to_string()),
        ]);
        let detail = FaultDetail::Structured(map.clone());
        assert_eq!(extract_error_details(Some(&detail)), map);
    }

    #[test]
    fn test_xml_fragment_yields_root_and_text() {
        let detail = FaultDetail::Text("<reason>  bad member state  </reason>".to_string());
        let map = extract_error_details(Some(&detail));
        assert_eq!(map.len(), 1);
        assert_eq!(map["reason"], "bad member state");
    }

    #[test]
    fn test_namespaced_root_uses_local_name() {
        let detail = FaultDetail::Text("<ns:reason>oops</ns:reason>".to_string());
        let map = extract_error_details(Some(&detail));
        assert_eq!(map["reason"], "oops");
    }

    #[test]
    fn test_unparseable_text_falls_back_to_raw() {
        let detail = FaultDetail::Text("not xml at all".to_string());
        let map = extract_error_details(Some(&detail));
        assert_eq!(map["raw"], "not xml at all");
    }

    #[test]
    fn test_external_entity_declaration_is_not_resolved() {
        let hostile = concat!(
            "<!DOCTYPE foo [<!ENTITY xxe SYSTEM \"file:///etc/passwd\">]>",
            "<foo>&xxe;</foo>"
        );
        let detail = FaultDetail::Text(hostile.to_string());
        let map = extract_error_details(Some(&detail));

        // The DOCTYPE aborts the parse; the hostile input comes back raw,
        // with no local resource content anywhere in the result.
        assert_eq!(map["raw"], hostile);
        for value in map.values() {
            assert!(!value.contains("root:"));
        }
    }

    #[test]
    fn test_undeclared_entity_falls_back_to_raw() {
        let detail = FaultDetail::Text("<foo>&xxe;</foo>".to_string());
        let map = extract_error_details(Some(&detail));
        assert_eq!(map["raw"], "<foo>&xxe;</foo>");
    }

    #[test]
    fn test_fault_display_includes_code_and_message() {
        let fault = Fault::new("TEDB-102", "empty member state list");
        let rendered = fault.to_string();
        assert!(rendered.contains("TEDB-102"));
        assert!(rendered.contains("empty member state list"));
    }
}
