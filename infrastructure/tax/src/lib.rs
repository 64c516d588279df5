pub mod dto;
pub mod flow;
mod local_calculator;

pub use local_calculator::LocalSalesTaxCalculator;
