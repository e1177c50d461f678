//! # Configuration State
//!
//! Store profile and register defaults, loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CAFE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Everything except the default tax rate is read-only after startup. The
//! settings screen can change the default tax, so the config lives behind an
//! `RwLock` in [`SettingsState`].

use std::sync::{PoisonError, RwLock};

use cafe_core::validation::validate_tax_percent;
use cafe_core::{Money, TaxRate};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Business name (printed on receipts)
    pub store_name: String,

    pub store_address: String,

    pub store_phone: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown for money
    pub currency_decimals: u32,

    /// Rate that pre-fills every new order
    pub default_tax_rate: TaxRate,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Sunrise Cafe"
    /// - Currency: NPR (Rs), 2 decimals
    /// - Tax: 13%
    fn default() -> Self {
        ConfigState {
            store_name: "Sunrise Cafe".to_string(),
            store_address: "123 Main St".to_string(),
            store_phone: "(555) 010-1234".to_string(),
            currency_code: "NPR".to_string(),
            currency_symbol: "Rs".to_string(),
            currency_decimals: 2,
            default_tax_rate: TaxRate::standard(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CAFE_STORE_NAME`: Override store name
    /// - `CAFE_TAX_RATE`: Override default tax rate as a percentage (e.g., "13")
    /// - `CAFE_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("CAFE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("CAFE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup("CAFE_TAX_RATE") {
            match raw.trim().parse::<Decimal>() {
                Ok(percent) if validate_tax_percent(percent).is_ok() => {
                    config.default_tax_rate = TaxRate::from_percent(percent);
                }
                _ => warn!(value = %raw, "Ignoring invalid CAFE_TAX_RATE"),
            }
        }

        config
    }

    /// Formats an amount for display, rounded half-to-even to
    /// `currency_decimals`.
    ///
    /// ## Example
    /// ```rust
    /// use cafe_core::Money;
    /// use cafe_register::state::ConfigState;
    /// use rust_decimal::Decimal;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::new(Decimal::new(7119, 3))), "Rs 7.12");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let rounded = amount
            .amount()
            .round_dp_with_strategy(self.currency_decimals, RoundingStrategy::MidpointNearestEven);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        format!(
            "{}{} {:.prec$}",
            sign,
            self.currency_symbol,
            rounded.abs(),
            prec = self.currency_decimals as usize
        )
    }
}

/// Shared configuration with a writable default tax rate.
#[derive(Debug, Default)]
pub struct SettingsState {
    config: RwLock<ConfigState>,
}

impl SettingsState {
    pub fn new(config: ConfigState) -> Self {
        SettingsState {
            config: RwLock::new(config),
        }
    }

    /// Returns a copy of the current configuration.
    pub fn snapshot(&self) -> ConfigState {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn default_tax_rate(&self) -> TaxRate {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .default_tax_rate
    }

    pub fn set_default_tax_rate(&self, rate: TaxRate) {
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .default_tax_rate = rate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "Rs 12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "Rs 1.00");
        assert_eq!(config.format_currency(Money::zero()), "Rs 0.00");
    }

    #[test]
    fn test_format_currency_rounds_half_to_even() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::new(dec!(7.119))), "Rs 7.12");
        assert_eq!(config.format_currency(Money::new(dec!(0.125))), "Rs 0.12");
        assert_eq!(config.format_currency(Money::new(dec!(0.135))), "Rs 0.14");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-Rs 12.34");
        assert_eq!(config.format_currency(Money::new(dec!(-0.001))), "Rs 0.00");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(|key| match key {
            "CAFE_STORE_NAME" => Some("Moonlight Cafe".to_string()),
            "CAFE_TAX_RATE" => Some("8.5".to_string()),
            "CAFE_CURRENCY_SYMBOL" => Some("$".to_string()),
            _ => None,
        });

        assert_eq!(config.store_name, "Moonlight Cafe");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.default_tax_rate, TaxRate::from_percent(dec!(8.5)));
    }

    #[test]
    fn test_invalid_tax_override_keeps_default() {
        for raw in ["abc", "100", "-1"] {
            let config = ConfigState::from_lookup(|key| {
                (key == "CAFE_TAX_RATE").then(|| raw.to_string())
            });
            assert_eq!(config.default_tax_rate, TaxRate::standard());
        }
    }

    #[test]
    fn test_settings_default_tax() {
        let settings = SettingsState::new(ConfigState::default());
        settings.set_default_tax_rate(TaxRate::from_percent(dec!(5)));

        assert_eq!(settings.default_tax_rate(), TaxRate::from_percent(dec!(5)));
        assert_eq!(settings.snapshot().default_tax_rate, TaxRate::from_percent(dec!(5)));
    }
}
