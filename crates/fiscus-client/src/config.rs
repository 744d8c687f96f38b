//! Client configuration.

use fiscus_codec::DecimalBounds;
use fiscus_core::{VatError, VatResult};
use serde::{Deserialize, Serialize};

fn default_operation() -> String {
    "retrieveVatRates".to_string()
}

/// Configuration for a [`RatesClient`](crate::RatesClient).
///
/// # Example
///
/// ```
/// use fiscus_client::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.operation, "retrieveVatRates");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    /// The RPC operation name invoked on the transport.
    #[serde(default = "default_operation")]
    pub operation: String,

    /// Plausibility bounds applied when decoding rate values.
    #[serde(default)]
    pub decimal_bounds: DecimalBounds,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            operation: default_operation(),
            decimal_bounds: DecimalBounds::default(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`VatError::Configuration`] if the operation name is empty or the
    /// decimal bounds are inverted.
    pub fn validate(&self) -> VatResult<()> {
        if self.operation.trim().is_empty() {
            return Err(VatError::configuration("operation name must not be empty"));
        }
        if self.decimal_bounds.min > self.decimal_bounds.max {
            return Err(VatError::configuration(format!(
                "decimal bounds are inverted: {} > {}",
                self.decimal_bounds.min, self.decimal_bounds.max
            )));
        }
        Ok(())
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    operation: Option<String>,
    decimal_bounds: Option<DecimalBounds>,
}

impl ClientConfigBuilder {
    /// Sets the RPC operation name.
    #[must_use]
    pub fn operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the decimal plausibility bounds.
    #[must_use]
    pub const fn decimal_bounds(mut self, bounds: DecimalBounds) -> Self {
        self.decimal_bounds = Some(bounds);
        self
    }

    /// Builds the configuration, filling unset fields with defaults.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            operation: self.operation.unwrap_or_else(default_operation),
            decimal_bounds: self.decimal_bounds.unwrap_or_default(),
        }
    }
}
