//! End-to-end tests for the retrieve-rates pipeline over a mock transport.

use chrono::NaiveDate;
use fiscus_client::{ClientConfig, RatesClient, Transport, TransportError};
use fiscus_core::{ErrorKind, RateBucket, RatesRequest};
use fiscus_wire::{Fault, WireValue, FAULT_EMPTY_MEMBER_STATES, FAULT_INTERNAL_ERROR};
use std::cell::RefCell;

/// A transport scripted with a closure; records the last invocation.
struct MockTransport<F> {
    script: F,
    calls: RefCell<Vec<(String, WireValue)>>,
}

impl<F> MockTransport<F>
where
    F: Fn() -> Result<WireValue, TransportError>,
{
    fn new(script: F) -> Self {
        Self {
            script,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl<F> Transport for MockTransport<F>
where
    F: Fn() -> Result<WireValue, TransportError>,
{
    fn send(&self, operation: &str, request: &WireValue) -> Result<WireValue, TransportError> {
        self.calls
            .borrow_mut()
            .push((operation.to_string(), request.clone()));
        (self.script)()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fiscus_client=debug,fiscus_wire=debug")
        .with_test_writer()
        .try_init();
}

fn request() -> RatesRequest {
    RatesRequest::builder()
        .member_states(["DE", "FR"])
        .situation_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        .build()
        .unwrap()
}

fn result_entry(state: &str, kind: &str, value: &str) -> WireValue {
    WireValue::struct_of([
        ("memberState", WireValue::text(state)),
        (
            "rate",
            WireValue::struct_of([
                ("type", WireValue::text(kind)),
                ("value", WireValue::text(value)),
            ]),
        ),
        ("situationOn", WireValue::text("2024-01-15")),
    ])
}

fn success_payload() -> WireValue {
    WireValue::struct_of([(
        "vatRateResults",
        WireValue::list([
            result_entry("FR", "REDUCED[1]", "5.5"),
            result_entry("LU", "PARKING_RATE", "12.0"),
        ]),
    )])
}

#[test]
fn success_path_classifies_every_entry() {
    init_tracing();
    let transport = MockTransport::new(|| Ok(success_payload()));
    let client = RatesClient::new(transport);

    let response = client.retrieve_rates(&request()).unwrap();

    assert_eq!(response.len(), 2);
    assert_eq!(response[0].rate().bucket(), RateBucket::Reduced);
    assert_eq!(response[1].rate().bucket(), RateBucket::Parking);
    assert_eq!(response[0].rate().value().to_string(), "5.5");
}

#[test]
fn request_is_encoded_with_operation_and_member_states() {
    init_tracing();
    let transport = MockTransport::new(|| Ok(success_payload()));
    let client = RatesClient::new(transport);

    client.retrieve_rates(&request()).unwrap();

    let calls = client.transport().calls.borrow();
    let (operation, encoded) = &calls[0];
    assert_eq!(operation, "retrieveVatRates");

    let states = encoded.require("memberStates").unwrap();
    let items = states.as_list().unwrap();
    assert_eq!(items[0].as_text(), Some("DE"));
    assert_eq!(items[1].as_text(), Some("FR"));
    assert_eq!(
        encoded
            .require("situationOn")
            .unwrap()
            .as_text(),
        Some("2024-01-15")
    );
}

#[test]
fn empty_member_state_fault_becomes_invalid_request() {
    init_tracing();
    let transport = MockTransport::new(|| {
        Err(TransportError::Fault(Fault::new(
            FAULT_EMPTY_MEMBER_STATES,
            "no member states given",
        )))
    });
    let client = RatesClient::new(transport);

    let err = client.retrieve_rates(&request()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    assert!(err.to_string().contains("empty member state set"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn internal_fault_becomes_service_unavailable() {
    init_tracing();
    let transport = MockTransport::new(|| {
        Err(TransportError::Fault(Fault::new(
            FAULT_INTERNAL_ERROR,
            "application error",
        )))
    });
    let client = RatesClient::new(transport);

    let err = client.retrieve_rates(&request()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    assert!(err.kind().is_retryable());
}

#[test]
fn unknown_fault_is_preserved_as_remote_fault() {
    init_tracing();
    let transport = MockTransport::new(|| {
        Err(TransportError::Fault(Fault::new("TEDB-777", "novel failure")))
    });
    let client = RatesClient::new(transport);

    let err = client.retrieve_rates(&request()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RemoteFault);
    assert_eq!(err.fault_code(), Some("TEDB-777"));
    assert!(err.to_string().contains("novel failure"));
}

#[test]
fn connection_failure_becomes_service_unavailable() {
    init_tracing();
    let transport = MockTransport::new(|| {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
        Err(TransportError::connection("endpoint unreachable", io))
    });
    let client = RatesClient::new(transport);

    let err = client.retrieve_rates(&request()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
    assert!(err.to_string().contains("endpoint unreachable"));
}

#[test]
fn transport_misconfiguration_becomes_configuration_error() {
    init_tracing();
    let transport = MockTransport::new(|| {
        Err(TransportError::configuration("no endpoint configured"))
    });
    let client = RatesClient::new(transport);

    let err = client.retrieve_rates(&request()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}

#[test]
fn malformed_payload_becomes_conversion_error() {
    init_tracing();
    let broken = WireValue::struct_of([(
        "vatRateResults",
        WireValue::list([WireValue::struct_of([(
            "memberState",
            WireValue::text("DE"),
        )])]),
    )]);
    let transport = MockTransport::new(move || Ok(broken.clone()));
    let client = RatesClient::new(transport);

    let err = client.retrieve_rates(&request()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conversion);
    assert_eq!(err.field(), Some("rate"));
}

#[test]
fn custom_operation_name_is_used() {
    init_tracing();
    let transport = MockTransport::new(|| Ok(success_payload()));
    let config = ClientConfig::builder()
        .operation("retrieveVatRatesHistory")
        .build();
    let client = RatesClient::with_config(transport, config).unwrap();

    client.retrieve_rates(&request()).unwrap();

    let calls = client.transport().calls.borrow();
    assert_eq!(calls[0].0, "retrieveVatRatesHistory");
}
