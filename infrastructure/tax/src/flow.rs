use business::domain::tax::errors::TaxError;
use business::domain::tax::model::{SalesTaxRequest, TaxRate, calculate_sales_tax};

use crate::dto::{CalculateSalesTaxInput, CalculateSalesTaxOutput, MAX_WIRE_DIGITS, fits_wire};

/// Server side of the sales tax contract.
pub fn calculate_sales_tax_flow(
    input: CalculateSalesTaxInput,
) -> Result<CalculateSalesTaxOutput, TaxError> {
    let request = SalesTaxRequest {
        subtotal: input.subtotal,
        tax_rate: TaxRate::new(input.tax_rate)?,
    };
    let quote = calculate_sales_tax(&request)?;

    Ok(CalculateSalesTaxOutput {
        sales_tax: quote.sales_tax,
        total: quote.total,
    })
}

/// Same flow over raw JSON bodies.
pub fn handle_json(body: &str) -> Result<String, TaxError> {
    let input = serde_json::from_str::<CalculateSalesTaxInput>(body)
        .map_err(|err| TaxError::CalculationFailed(format!("invalid input: {}", err)))?;
    let output = calculate_sales_tax_flow(input)?;
    if !fits_wire(output.sales_tax) || !fits_wire(output.total) {
        return Err(TaxError::CalculationFailed(format!(
            "result exceeds {} significant digits",
            MAX_WIRE_DIGITS
        )));
    }
    serde_json::to_string(&output)
        .map_err(|err| TaxError::CalculationFailed(format!("invalid output: {}", err)))
}
