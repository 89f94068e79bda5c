use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::{self, Money, Rate};
use crate::errors::{EngineError, Result};

/// non-compounded interest over a whole term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub total_interest: Money,
    pub total_payment: Money,
}

/// simple interest calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterestCalculator;

impl SimpleInterestCalculator {
    pub fn new() -> Self {
        Self
    }

    /// interest = principal * rate * years; years may be fractional
    pub fn simple(
        &self,
        principal: Money,
        annual_rate_percent: Decimal,
        years: Decimal,
    ) -> Result<SimpleInterestResult> {
        let rate = Rate::from_percentage_decimal(annual_rate_percent);
        let factor = decimal::checked_mul(rate.as_decimal(), years, "simple interest factor")?;
        let total_interest = principal.checked_mul(factor, "simple interest")?;

        debug!(%principal, %annual_rate_percent, %years, %total_interest, "calculated simple interest");

        Ok(SimpleInterestResult {
            total_interest,
            total_payment: principal.checked_add(total_interest, "simple total payment")?,
        })
    }
}

/// presentation helper: spread a total evenly over `years * payments_per_year` installments
pub fn per_period(total_payment: Money, years: Decimal, payments_per_year: u32) -> Result<Money> {
    let installments = decimal::checked_mul(years, Decimal::from(payments_per_year), "installments")?;
    if installments <= Decimal::ZERO {
        return Err(EngineError::ZeroPayments);
    }
    total_payment.checked_div(installments, "per-period amount")
}
