//! Kernel configuration

use config::{Config, Environment};
use serde::Deserialize;

use crate::currency::Currency;
use crate::error::CoreError;
use crate::money::{Money, MoneyError};

/// Kernel configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KernelConfig {
    /// ISO 4217 code used when a caller does not name a currency
    pub default_currency: String,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            default_currency: Currency::USD.code().to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl KernelConfig {
    /// Loads configuration from `KERNEL_*` environment variables, reading a
    /// `.env` file first when one is present
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::load(Environment::with_prefix("KERNEL"))
    }

    /// Loads configuration from the given environment source, layered over
    /// the defaults
    pub fn load(environment: Environment) -> Result<Self, CoreError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("default_currency", defaults.default_currency)
            .and_then(|builder| builder.set_default("log_level", defaults.log_level))
            .map_err(|e| CoreError::configuration(e.to_string()))?
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| CoreError::configuration(e.to_string()))
    }

    /// Resolves the configured default currency
    pub fn currency(&self) -> Result<Currency, MoneyError> {
        Currency::from_code(&self.default_currency)
    }

    /// Parses a decimal amount in the configured default currency
    pub fn money(&self, value: &str) -> Result<Money, MoneyError> {
        Money::from_decimal_str(value, self.currency()?)
    }
}
