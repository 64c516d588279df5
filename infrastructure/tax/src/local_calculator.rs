use std::time::Duration;

use async_trait::async_trait;

use business::domain::tax::errors::TaxError;
use business::domain::tax::model::{SalesTaxQuote, SalesTaxRequest};
use business::domain::tax::services::SalesTaxCalculator;

use crate::dto::{CalculateSalesTaxInput, CalculateSalesTaxOutput, MAX_WIRE_DIGITS, fits_wire};
use crate::flow::handle_json;

/// In-process sales tax calculator.
///
/// Requests go through the JSON contract so the adapter behaves like a
/// remote call, with an optional artificial latency.
#[derive(Debug, Clone, Default)]
pub struct LocalSalesTaxCalculator {
    latency: Duration,
}

impl LocalSalesTaxCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl SalesTaxCalculator for LocalSalesTaxCalculator {
    async fn calculate(&self, request: SalesTaxRequest) -> Result<SalesTaxQuote, TaxError> {
        if !fits_wire(request.subtotal) || !fits_wire(request.tax_rate.fraction()) {
            tracing::warn!(
                subtotal = %request.subtotal,
                "amount too precise for the tax contract"
            );
            return Err(TaxError::CalculationFailed(format!(
                "amount exceeds {} significant digits",
                MAX_WIRE_DIGITS
            )));
        }

        let body = serde_json::to_string(&CalculateSalesTaxInput {
            subtotal: request.subtotal,
            tax_rate: request.tax_rate.fraction(),
        })
        .map_err(|err| TaxError::CalculationFailed(err.to_string()))?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let response = handle_json(&body).map_err(|err| {
            tracing::warn!(error = %err, "sales tax calculation failed");
            match err {
                TaxError::CalculationFailed(_) => err,
                other => TaxError::CalculationFailed(other.to_string()),
            }
        })?;

        let output = serde_json::from_str::<CalculateSalesTaxOutput>(&response)
            .map_err(|err| TaxError::CalculationFailed(err.to_string()))?;

        tracing::debug!(
            subtotal = %request.subtotal,
            sales_tax = %output.sales_tax,
            total = %output.total,
            "sales tax calculated"
        );

        Ok(SalesTaxQuote {
            sales_tax: output.sales_tax,
            total: output.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::tax::model::TaxRate;
    use rust_decimal::Decimal;

    fn request(subtotal: Decimal) -> SalesTaxRequest {
        SalesTaxRequest {
            subtotal,
            tax_rate: TaxRate::default(),
        }
    }

    #[tokio::test]
    async fn should_quote_through_json_contract() {
        let calculator = LocalSalesTaxCalculator::new();

        let quote = calculator
            .calculate(request(Decimal::new(4498, 2)))
            .await
            .unwrap();

        assert_eq!(quote.sales_tax, Decimal::new(360, 2));
        assert_eq!(quote.total, Decimal::new(4858, 2));
    }

    #[tokio::test]
    async fn should_report_failures_as_calculation_failed() {
        let calculator = LocalSalesTaxCalculator::new();

        let result = calculator.calculate(request(Decimal::new(-500, 2))).await;

        assert!(matches!(result, Err(TaxError::CalculationFailed(_))));
    }

    #[tokio::test]
    async fn should_refuse_subtotal_too_precise_for_json() {
        let calculator = LocalSalesTaxCalculator::new();

        let result = calculator
            .calculate(request(Decimal::new(999_999_999_999_999_999, 2)))
            .await;

        assert!(matches!(result, Err(TaxError::CalculationFailed(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn should_wait_configured_latency() {
        let calculator = LocalSalesTaxCalculator::with_latency(Duration::from_millis(300));
        let started = tokio::time::Instant::now();

        calculator
            .calculate(request(Decimal::new(1000, 2)))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(300));
    }
}
