use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::decimal::{self, Money, Rate};
use crate::errors::Result;
use crate::periods::PeriodNormalizer;

/// future value of a lump sum plus contributions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthResult {
    pub future_value: Money,
    pub total_contribution: Money,
    /// future value less everything paid in
    pub total_growth: Money,
}

/// compound growth for savings, investments and plain compound interest
#[derive(Debug, Clone, Copy, Default)]
pub struct GrowthCalculator {
    normalizer: PeriodNormalizer,
}

impl GrowthCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            normalizer: PeriodNormalizer::from_config(config),
        }
    }

    /// grow `initial` and end-of-period `contribution`s over `total_periods`.
    ///
    /// Pass a zero contribution for plain compound interest.
    pub fn grow(
        &self,
        initial: Money,
        contribution: Money,
        rate_per_period: Rate,
        total_periods: u32,
    ) -> Result<GrowthResult> {
        let periods = Decimal::from(total_periods);
        let growth_factor = decimal::compound_factor(rate_per_period, total_periods)?;
        let initial_future = initial.checked_mul(growth_factor, "initial growth")?;
        let paid_in = contribution.checked_mul(periods, "contributions")?;

        let contribution_future = if rate_per_period.is_zero() {
            paid_in
        } else {
            // ordinary annuity: contributions land at the end of each period
            let annuity = decimal::checked_div(
                growth_factor - Decimal::ONE,
                rate_per_period.as_decimal(),
                "annuity factor",
            )?;
            contribution.checked_mul(annuity, "contribution growth")?
        };

        let future_value = initial_future.checked_add(contribution_future, "future value")?;
        let total_contribution = initial.checked_add(paid_in, "total contribution")?;
        let total_growth = future_value.checked_sub(total_contribution, "total growth")?;

        debug!(
            %initial,
            %contribution,
            rate_per_period = %rate_per_period.as_decimal(),
            total_periods,
            %future_value,
            "calculated growth"
        );

        Ok(GrowthResult {
            future_value,
            total_contribution,
            total_growth,
        })
    }

    /// grow using an annual percentage rate compounded `periods_per_year` times over `term_months`
    pub fn grow_annual(
        &self,
        initial: Money,
        contribution: Money,
        annual_rate_percent: Decimal,
        periods_per_year: u32,
        term_months: u32,
    ) -> Result<GrowthResult> {
        let normalized = self
            .normalizer
            .normalize(annual_rate_percent, periods_per_year, term_months)?;
        self.grow(
            initial,
            contribution,
            normalized.rate_per_period,
            normalized.total_payments,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lump_sum_compounds_monthly() {
        let result = GrowthCalculator::default()
            .grow(Money::from_major(10_000), Money::ZERO, Rate::from_decimal(dec!(0.005)), 24)
            .unwrap();

        assert_eq!(result.future_value.round_dp(2).as_decimal(), dec!(11271.60));
        assert_eq!(result.total_contribution, Money::from_major(10_000));
        assert_eq!(result.total_growth.round_dp(2).as_decimal(), dec!(1271.60));
    }

    #[test]
    fn test_zero_rate_keeps_initial() {
        let initial = Money::from_major(5_000);
        let result = GrowthCalculator::default()
            .grow(initial, Money::ZERO, Rate::ZERO, 120)
            .unwrap();
        assert_eq!(result.future_value, initial);
        assert!(result.total_growth.is_zero());
    }

    #[test]
    fn test_zero_rate_contributions_add_linearly() {
        let result = GrowthCalculator::default()
            .grow(Money::from_major(1_000), Money::from_major(100), Rate::ZERO, 12)
            .unwrap();
        assert_eq!(result.future_value, Money::from_major(2_200));
        assert_eq!(result.total_contribution, Money::from_major(2_200));
    }

    #[test]
    fn test_ordinary_annuity() {
        // 100 a year for 2 years at 10%: 100 * 1.1 + 100
        let result = GrowthCalculator::default()
            .grow(Money::ZERO, Money::from_major(100), Rate::from_percentage(10), 2)
            .unwrap();
        assert_eq!(result.future_value.as_decimal(), dec!(210));
        assert_eq!(result.total_growth.as_decimal(), dec!(10));
    }

    #[test]
    fn test_grow_annual() {
        let calc = GrowthCalculator::default();
        let direct = calc
            .grow(Money::from_major(10_000), Money::from_major(200), Rate::from_decimal(dec!(0.005)), 24)
            .unwrap();
        let annual = calc
            .grow_annual(Money::from_major(10_000), Money::from_major(200), dec!(6), 12, 24)
            .unwrap();
        assert_eq!(direct, annual);
    }

    #[test]
    fn test_future_value_overflow_is_reported() {
        let result = GrowthCalculator::default().grow(
            Money::from_decimal(Decimal::MAX),
            Money::ONE,
            Rate::ZERO,
            1,
        );
        assert!(matches!(result, Err(EngineError::Overflow { .. })));
    }
}
