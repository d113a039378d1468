//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSHELF_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use bookshelf_core::Money;

/// Default artificial checkout delay.
pub const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (page titles, order confirmation)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Simulated processing time before an order is confirmed.
    pub checkout_delay_ms: u64,

    /// Directory for the session snapshot. `None` = platform data dir.
    #[serde(skip)]
    pub session_dir: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "BookStore"
    /// - Currency: USD ($)
    /// - Checkout delay: 2 seconds
    /// - Session dir: platform data directory
    fn default() -> Self {
        ConfigState {
            store_name: "BookStore".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            checkout_delay_ms: DEFAULT_CHECKOUT_DELAY_MS,
            session_dir: None,
        }
    }
}

impl ConfigState {
    /// Loads configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSHELF_STORE_NAME`: Override store name
    /// - `BOOKSHELF_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BOOKSHELF_CHECKOUT_DELAY_MS`: Override checkout delay (milliseconds)
    /// - `BOOKSHELF_SESSION_DIR`: Store the session snapshot here
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("BOOKSHELF_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("BOOKSHELF_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(delay) = lookup("BOOKSHELF_CHECKOUT_DELAY_MS") {
            config.checkout_delay_ms = delay.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "BOOKSHELF_CHECKOUT_DELAY_MS".to_string(),
                value: delay.clone(),
            })?;
        }

        if let Some(dir) = lookup("BOOKSHELF_SESSION_DIR").filter(|d| !d.trim().is_empty()) {
            config.session_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use bookshelf_core::Money;
    /// use bookshelf_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(2898)), "$28.98");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: '{value}'")]
    InvalidValue { var: String, value: String },

    #[error("Could not determine a data directory; set BOOKSHELF_SESSION_DIR")]
    NoDataDir,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.checkout_delay(), Duration::from_secs(2));
        assert_eq!(config.session_dir, None);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("BOOKSHELF_STORE_NAME", "Corner Books"),
            ("BOOKSHELF_CURRENCY_SYMBOL", "€"),
            ("BOOKSHELF_CHECKOUT_DELAY_MS", "0"),
            ("BOOKSHELF_SESSION_DIR", "/tmp/bookshelf"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Corner Books");
        assert_eq!(config.format_currency(Money::from_cents(1499)), "€14.99");
        assert_eq!(config.checkout_delay(), Duration::ZERO);
        assert_eq!(config.session_dir, Some(PathBuf::from("/tmp/bookshelf")));
    }

    #[test]
    fn test_invalid_delay_is_an_error() {
        let result = ConfigState::from_lookup(lookup_from(&[("BOOKSHELF_CHECKOUT_DELAY_MS", "soon")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "BOOKSHELF_CHECKOUT_DELAY_MS"
        ));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_session_dir_is_not_serialized() {
        let config = ConfigState {
            session_dir: Some(PathBuf::from("/secret")),
            ..ConfigState::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["storeName"], "BookStore");
        assert_eq!(json["checkoutDelayMs"], 2000);
        assert!(json.get("sessionDir").is_none());
    }
}
