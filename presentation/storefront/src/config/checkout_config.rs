use std::env;
use std::str::FromStr;
use std::time::Duration;

use business::domain::tax::model::TaxRate;
use rust_decimal::Decimal;

const DEFAULT_ORDER_DELAY_MS: u64 = 1500;

/// Checkout configuration
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    pub tax_rate: TaxRate,
    pub order_delay: Duration,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::default(),
            order_delay: Duration::from_millis(DEFAULT_ORDER_DELAY_MS),
        }
    }
}

impl CheckoutConfig {
    /// Load checkout configuration from environment variables
    ///
    /// Environment variables:
    /// - STOREFRONT_TAX_RATE: default rate as a fraction (default: "0.08")
    /// - STOREFRONT_ORDER_DELAY_MS: simulated placement delay (default: "1500")
    ///
    /// Invalid values are logged and replaced by the default.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("STOREFRONT_TAX_RATE").ok().as_deref(),
            env::var("STOREFRONT_ORDER_DELAY_MS").ok().as_deref(),
        )
    }

    fn from_values(tax_rate: Option<&str>, order_delay_ms: Option<&str>) -> Self {
        let defaults = Self::default();

        let tax_rate = match tax_rate {
            None => defaults.tax_rate,
            Some(raw) => match Decimal::from_str(raw.trim())
                .ok()
                .and_then(|d| TaxRate::new(d).ok())
            {
                Some(rate) => rate,
                None => {
                    tracing::warn!(value = raw, "invalid STOREFRONT_TAX_RATE, using default");
                    defaults.tax_rate
                }
            },
        };

        let order_delay = match order_delay_ms {
            None => defaults.order_delay,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    tracing::warn!(
                        value = raw,
                        "invalid STOREFRONT_ORDER_DELAY_MS, using default"
                    );
                    defaults.order_delay
                }
            },
        };

        Self {
            tax_rate,
            order_delay,
        }
    }
}
