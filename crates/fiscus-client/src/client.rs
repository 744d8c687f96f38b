//! The retrieve-rates entry point.

use crate::{ClientConfig, Transport, TransportError};
use fiscus_codec::{DateCodec, DecimalCodec};
use fiscus_core::{RatesRequest, RatesResponse, VatError, VatResult};
use fiscus_wire::{translate, Hydrator, WireValue};

/// A synchronous client for the VAT-rate retrieval service.
///
/// The client is stateless beyond its configuration: every call encodes the
/// request, hands it to the [`Transport`], and converts whatever comes back
/// into either a [`RatesResponse`] or one error from the closed taxonomy.
/// It may be shared across threads freely.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use fiscus_client::{RatesClient, Transport, TransportError};
/// use fiscus_core::RatesRequest;
/// use fiscus_wire::WireValue;
///
/// struct HttpTransport; // the real transport lives outside this crate
///
/// impl Transport for HttpTransport {
///     fn send(&self, _operation: &str, _request: &WireValue)
///         -> Result<WireValue, TransportError> {
///         unimplemented!("network call")
///     }
/// }
///
/// let client = RatesClient::new(HttpTransport);
/// let request = RatesRequest::builder()
///     .member_state("DE")
///     .situation_on(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
///     .build()?;
/// let response = client.retrieve_rates(&request)?;
/// # Ok::<(), fiscus_core::VatError>(())
/// ```
#[derive(Debug)]
pub struct RatesClient<T> {
    transport: T,
    config: ClientConfig,
    hydrator: Hydrator,
    date_codec: DateCodec,
}

impl<T: Transport> RatesClient<T> {
    /// Creates a client with the default configuration.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: ClientConfig::default(),
            hydrator: Hydrator::new(),
            date_codec: DateCodec::new(),
        }
    }

    /// Creates a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// [`VatError::Configuration`] if the configuration does not validate.
    pub fn with_config(transport: T, config: ClientConfig) -> VatResult<Self> {
        config.validate()?;
        let hydrator = Hydrator::with_decimal_codec(DecimalCodec::new(config.decimal_bounds));
        Ok(Self {
            transport,
            config,
            hydrator,
            date_codec: DateCodec::new(),
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns a reference to the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Retrieves the VAT rates matching `request`.
    ///
    /// # Errors
    ///
    /// Always one of the closed taxonomy kinds: a translated service fault,
    /// a `ServiceUnavailable` for connection failures, a `Configuration`
    /// error for transport setup problems, or a `Conversion`/`Parse` error
    /// from hydration.
    pub fn retrieve_rates(&self, request: &RatesRequest) -> VatResult<RatesResponse> {
        tracing::debug!(
            operation = %self.config.operation,
            member_states = ?request.member_states(),
            situation_on = %request.situation_on(),
            "retrieving VAT rates"
        );

        let encoded = self.encode_request(request)?;
        match self.transport.send(&self.config.operation, &encoded) {
            Ok(decoded) => {
                let response = self.hydrator.hydrate(&decoded)?;
                tracing::debug!(entries = response.len(), "retrieved VAT rates");
                Ok(response)
            }
            Err(TransportError::Fault(fault)) => {
                tracing::warn!(code = ?fault.code, "service reported a fault");
                Err(translate(&fault))
            }
            Err(TransportError::Connection { message, source }) => {
                tracing::warn!(%message, "transport connection failure");
                Err(VatError::ServiceUnavailable {
                    message: format!("transport failure: {message}"),
                    code: None,
                    source,
                })
            }
            Err(TransportError::Configuration { message }) => {
                Err(VatError::configuration(message))
            }
        }
    }

    /// Encodes the request into the wire tree the transport serializes.
    fn encode_request(&self, request: &RatesRequest) -> VatResult<WireValue> {
        let member_states = WireValue::list(
            request
                .member_states()
                .iter()
                .map(|code| WireValue::text(code.as_str())),
        );

        let mut fields = vec![
            ("memberStates".to_string(), member_states),
            (
                "situationOn".to_string(),
                WireValue::text(self.date_codec.encode(request.situation_on())?),
            ),
        ];
        if let Some(until) = request.until() {
            fields.push((
                "to".to_string(),
                WireValue::text(self.date_codec.encode(until)?),
            ));
        }

        Ok(WireValue::struct_of(fields))
    }
}
