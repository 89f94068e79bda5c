pub mod compound;
pub mod simple;

use rust_decimal::Decimal;

use crate::decimal::{self, Rate};
use crate::errors::Result;

pub use compound::{GrowthCalculator, GrowthResult};
pub use simple::{per_period, SimpleInterestCalculator, SimpleInterestResult};

/// effective annual yield of a nominal rate compounded `periods_per_year` times
pub fn effective_annual_rate(nominal: Rate, periods_per_year: u32) -> Result<Rate> {
    let period_rate = nominal.per_period(periods_per_year)?;
    let factor = decimal::compound_factor(period_rate, periods_per_year)?;
    Ok(Rate::from_decimal(factor - Decimal::ONE))
}
