use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::payments::amortization::{AmortizationCalculator, AmortizationResult};
use crate::periods::PeriodNormalizer;
use crate::types::AutoLoanTerms;

/// financed amount of an auto loan and its amortization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLoanResult {
    /// price less down payment and trade-in, never below zero
    pub taxable_amount: Money,
    pub sales_tax: Money,
    /// taxable amount plus sales tax plus fees
    pub financed_amount: Money,
    pub amortization: AmortizationResult,
}

/// auto loan calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoLoanCalculator {
    normalizer: PeriodNormalizer,
    amortization: AmortizationCalculator,
}

impl AutoLoanCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            normalizer: PeriodNormalizer::from_config(config),
            amortization: AmortizationCalculator::new(config),
        }
    }

    pub fn calculate(&self, terms: &AutoLoanTerms) -> Result<AutoLoanResult> {
        let normalized = self.normalizer.normalize(
            terms.annual_rate_percent,
            terms.payments_per_year(),
            terms.term_months,
        )?;

        // a loan cannot carry negative taxable principal
        let taxable_amount = terms
            .vehicle_price
            .checked_sub(terms.down_payment, "taxable amount")?
            .checked_sub(terms.trade_in_value, "taxable amount")?
            .max(Money::ZERO);
        let sales_tax = taxable_amount.percentage(terms.sales_tax_percent)?;
        let financed_amount = taxable_amount
            .checked_add(sales_tax, "financed amount")?
            .checked_add(terms.fees, "financed amount")?;

        debug!(
            %taxable_amount,
            %sales_tax,
            %financed_amount,
            "financed auto loan"
        );

        let amortization = self.amortization.amortize(
            financed_amount,
            normalized.rate_per_period,
            normalized.total_payments,
            normalized.payments_per_year,
        )?;

        Ok(AutoLoanResult {
            taxable_amount,
            sales_tax,
            financed_amount,
            amortization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EngineError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn test_financed_amount() {
        let terms = AutoLoanTerms::new(Money::from_major(30_000), dec!(4.9), 60)
            .down_payment(Money::from_major(5_000))
            .trade_in(Money::from_major(5_000))
            .sales_tax_percent(dec!(7))
            .fees(Money::from_major(300));
        let result = AutoLoanCalculator::default().calculate(&terms).unwrap();

        assert_eq!(result.taxable_amount, Money::from_major(20_000));
        assert_eq!(result.sales_tax, Money::from_major(1_400));
        assert_eq!(result.financed_amount, Money::from_major(21_700));
        assert_eq!(result.amortization.total_payments, 60);
    }

    #[test]
    fn test_no_extras_matches_plain_amortization() {
        let terms = AutoLoanTerms::new(Money::from_major(20_000), dec!(4.9), 60);
        let result = AutoLoanCalculator::default().calculate(&terms).unwrap();

        assert_eq!(result.financed_amount, Money::from_major(20_000));
        assert_eq!(
            result.amortization.periodic_payment.round_dp(2).as_decimal(),
            dec!(376.51)
        );
    }

    #[test]
    fn test_taxable_amount_clamps_to_zero() {
        let terms = AutoLoanTerms::new(Money::from_major(20_000), dec!(5), 36)
            .down_payment(Money::from_major(22_000))
            .sales_tax_percent(dec!(7))
            .fees(Money::from_major(300));
        let result = AutoLoanCalculator::default().calculate(&terms).unwrap();

        assert_eq!(result.taxable_amount, Money::ZERO);
        assert_eq!(result.sales_tax, Money::ZERO);
        assert_eq!(result.financed_amount, Money::from_major(300));
    }

    #[test]
    fn test_price_overflow_is_reported() {
        let terms = AutoLoanTerms::new(Money::from_decimal(Decimal::MAX), dec!(5), 36)
            .sales_tax_percent(dec!(7));
        let result = AutoLoanCalculator::default().calculate(&terms);
        assert!(matches!(result, Err(EngineError::Overflow { .. })));
    }

    #[test]
    fn test_fees_overflow_is_reported() {
        let terms = AutoLoanTerms::new(Money::from_decimal(Decimal::MAX), dec!(5), 36)
            .fees(Money::from_major(1));
        let result = AutoLoanCalculator::default().calculate(&terms);
        assert!(matches!(result, Err(EngineError::Overflow { .. })));
    }
}
