//! Fault-to-error translation.
//!
//! The single place where remote fault codes are interpreted. The decision
//! table is exhaustive and first-match-wins; the upstream service defines
//! the codes as mutually exclusive. No other component branches on fault
//! codes.

use crate::Fault;
use fiscus_core::VatError;

/// Fault code: malformed date in the request.
pub const FAULT_INVALID_DATE: &str = "TEDB-100";
/// Fault code: malformed or unknown member-state code in the request.
pub const FAULT_INVALID_MEMBER_STATE: &str = "TEDB-101";
/// Fault code: the request carried an empty member-state set.
pub const FAULT_EMPTY_MEMBER_STATES: &str = "TEDB-102";
/// Fault code: internal application error on the service side.
pub const FAULT_INTERNAL_ERROR: &str = "TEDB-400";

/// Placeholder used when a fault arrives without a code.
pub const UNKNOWN_FAULT_CODE: &str = "UNKNOWN";
/// Placeholder used when a fault arrives without a message.
pub const NO_FAULT_STRING: &str = "No fault string provided";

/// Returns `true` if `code` denotes a client-side validation failure.
///
/// Callers use this (and [`is_server_fault_code`]) to decide retry policy
/// without pattern-matching on the concrete error variant.
#[must_use]
pub fn is_client_fault_code(code: &str) -> bool {
    matches!(
        code,
        FAULT_INVALID_DATE | FAULT_INVALID_MEMBER_STATE | FAULT_EMPTY_MEMBER_STATES
    )
}

/// Returns `true` if `code` denotes a server-side failure.
#[must_use]
pub fn is_server_fault_code(code: &str) -> bool {
    code == FAULT_INTERNAL_ERROR
}

/// Translates a remote fault into one error from the closed taxonomy.
///
/// | Fault code | Produced kind |
/// |---|---|
/// | `TEDB-100` | `InvalidRequest` (malformed date) |
/// | `TEDB-101` | `InvalidRequest` (malformed/unknown member state) |
/// | `TEDB-102` | `InvalidRequest` (empty member-state set) |
/// | `TEDB-400` | `ServiceUnavailable` |
/// | anything else / absent | `RemoteFault`, code and message preserved |
///
/// A missing code becomes [`UNKNOWN_FAULT_CODE`]; a missing message becomes
/// [`NO_FAULT_STRING`]. Every produced error wraps the original fault as
/// its cause.
///
/// # Example
///
/// ```
/// use fiscus_core::ErrorKind;
/// use fiscus_wire::{translate, Fault};
///
/// let err = translate(&Fault::new("TEDB-102", "no member states given"));
/// assert_eq!(err.kind(), ErrorKind::InvalidRequest);
/// assert!(err.to_string().contains("empty member state set"));
/// ```
#[must_use]
pub fn translate(fault: &Fault) -> VatError {
    let code = fault.code.as_deref().unwrap_or(UNKNOWN_FAULT_CODE);
    let message = fault.message.as_deref().unwrap_or(NO_FAULT_STRING);

    tracing::debug!(code, message, "translating remote fault");

    match code {
        FAULT_INVALID_DATE => VatError::invalid_request_from_fault(
            format!("malformed date in request: {message}"),
            code,
            fault.clone(),
        ),
        FAULT_INVALID_MEMBER_STATE => VatError::invalid_request_from_fault(
            format!("malformed or unknown member state code: {message}"),
            code,
            fault.clone(),
        ),
        FAULT_EMPTY_MEMBER_STATES => VatError::invalid_request_from_fault(
            format!("empty member state set: {message}"),
            code,
            fault.clone(),
        ),
        FAULT_INTERNAL_ERROR => VatError::service_unavailable_from_fault(
            format!("service reported an internal error: {message}"),
            code,
            fault.clone(),
        ),
        _ => VatError::remote_fault(code, message, fault.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fiscus_core::ErrorKind;
    use std::error::Error as _;

    #[test]
    fn test_client_validation_codes_map_to_invalid_request() {
        for code in [
            FAULT_INVALID_DATE,
            FAULT_INVALID_MEMBER_STATE,
            FAULT_EMPTY_MEMBER_STATES,
        ] {
            let err = translate(&Fault::new(code, "rejected"));
            assert_eq!(err.kind(), ErrorKind::InvalidRequest, "code {code}");
            assert_eq!(err.fault_code(), Some(code));
        }
    }

    #[test]
    fn test_internal_code_maps_to_service_unavailable() {
        let err = translate(&Fault::new(FAULT_INTERNAL_ERROR, "boom"));
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert!(err.kind().is_retryable());
    }

    #[test]
    fn test_unknown_code_preserves_code_and_message() {
        let err = translate(&Fault::new("TEDB-999", "novel condition"));
        assert_eq!(err.kind(), ErrorKind::RemoteFault);
        assert_eq!(err.fault_code(), Some("TEDB-999"));
        assert!(err.to_string().contains("novel condition"));
    }

    #[test]
    fn test_missing_code_uses_placeholder() {
        let fault = Fault {
            code: None,
            message: Some("odd".to_string()),
            detail: None,
        };
        let err = translate(&fault);
        assert_eq!(err.kind(), ErrorKind::RemoteFault);
        assert_eq!(err.fault_code(), Some(UNKNOWN_FAULT_CODE));
    }

    #[test]
    fn test_missing_message_uses_placeholder() {
        let fault = Fault {
            code: Some("TEDB-999".to_string()),
            message: None,
            detail: None,
        };
        let err = translate(&fault);
        assert!(err.to_string().contains(NO_FAULT_STRING));
    }

    #[test]
    fn test_empty_set_fault_names_condition_and_wraps_cause() {
        let fault = Fault::new(FAULT_EMPTY_MEMBER_STATES, "no member states given");
        let err = translate(&fault);

        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        assert!(err.to_string().contains("empty member state set"));

        let cause = err.source().expect("original fault must be wrapped");
        assert!(cause.to_string().contains("TEDB-102"));
    }

    #[test]
    fn test_predicates_partition_known_codes() {
        for code in [
            FAULT_INVALID_DATE,
            FAULT_INVALID_MEMBER_STATE,
            FAULT_EMPTY_MEMBER_STATES,
        ] {
            assert!(is_client_fault_code(code));
            assert!(!is_server_fault_code(code));
        }
        assert!(is_server_fault_code(FAULT_INTERNAL_ERROR));
        assert!(!is_client_fault_code(FAULT_INTERNAL_ERROR));
        assert!(!is_client_fault_code("TEDB-999"));
        assert!(!is_server_fault_code("TEDB-999"));
    }
}
