use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::decimal::{self, Money, Rate};
use crate::errors::{EngineError, Result};
use crate::periods::{NormalizedTerms, PeriodNormalizer};
use crate::types::LoanTerms;

/// level payment and totals for a fixed-rate installment loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub periodic_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub total_payments: u32,
    pub payments_per_year: u32,
}

/// one row of an amortization table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub payment_number: u32,
    pub opening_balance: Money,
    pub payment_amount: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub closing_balance: Money,
    pub cumulative_interest: Money,
}

/// amortization calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationCalculator {
    normalizer: PeriodNormalizer,
}

impl AmortizationCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            normalizer: PeriodNormalizer::from_config(config),
        }
    }

    /// level payment, total paid and total interest.
    ///
    /// `payments_per_year` is echoed into the result for callers that persist it.
    pub fn amortize(
        &self,
        principal: Money,
        rate_per_period: Rate,
        total_payments: u32,
        payments_per_year: u32,
    ) -> Result<AmortizationResult> {
        let periodic_payment = periodic_payment(principal, rate_per_period, total_payments)?;
        // without interest the borrower repays exactly the principal
        let total_payment = if rate_per_period.is_zero() {
            principal
        } else {
            periodic_payment.checked_mul(Decimal::from(total_payments), "total payment")?
        };
        let total_interest = total_payment.checked_sub(principal, "total interest")?;

        debug!(
            %principal,
            rate_per_period = %rate_per_period.as_decimal(),
            total_payments,
            %periodic_payment,
            %total_interest,
            "amortized loan"
        );

        Ok(AmortizationResult {
            periodic_payment,
            total_payment,
            total_interest,
            total_payments,
            payments_per_year,
        })
    }

    /// normalize loan terms and amortize them
    pub fn amortize_terms(&self, terms: &LoanTerms) -> Result<(NormalizedTerms, AmortizationResult)> {
        let normalized = self.normalizer.normalize_terms(terms)?;
        let result = self.amortize(
            terms.principal,
            normalized.rate_per_period,
            normalized.total_payments,
            normalized.payments_per_year,
        )?;
        Ok((normalized, result))
    }

    /// full amortization table, one row per payment
    pub fn breakdown(
        &self,
        principal: Money,
        rate_per_period: Rate,
        total_payments: u32,
    ) -> Result<Vec<AmortizationRow>> {
        let payment = periodic_payment(principal, rate_per_period, total_payments)?;
        let rate = rate_per_period.as_decimal();

        let mut rows = Vec::with_capacity(total_payments as usize);
        let mut balance = principal;
        let mut cumulative_interest = Money::ZERO;

        for i in 1..=total_payments {
            let interest_portion = balance.checked_mul(rate, "period interest")?;
            let is_last = i == total_payments;

            // the last row clears whatever the level payment leaves behind
            let (payment_amount, principal_portion) = if is_last {
                (balance.checked_add(interest_portion, "final payment")?, balance)
            } else {
                (payment, payment.checked_sub(interest_portion, "principal portion")?)
            };

            cumulative_interest = cumulative_interest.checked_add(interest_portion, "cumulative interest")?;
            let closing_balance = balance.checked_sub(principal_portion, "closing balance")?;

            rows.push(AmortizationRow {
                payment_number: i,
                opening_balance: balance,
                payment_amount,
                interest_portion,
                principal_portion,
                closing_balance,
                cumulative_interest,
            });

            balance = closing_balance;
        }

        Ok(rows)
    }
}

/// level payment that fully amortizes `principal` over `total_payments` periods
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), or P / n when the rate is zero.
pub fn periodic_payment(principal: Money, rate_per_period: Rate, total_payments: u32) -> Result<Money> {
    if total_payments == 0 {
        warn!(%principal, "amortization requested with zero payments");
        return Err(EngineError::ZeroPayments);
    }

    let n = Decimal::from(total_payments);
    if rate_per_period.is_zero() {
        return principal.checked_div(n, "straight-line payment");
    }

    let r = rate_per_period.as_decimal();
    let factor = decimal::compound_factor(rate_per_period, total_payments)?;
    let numerator = decimal::checked_mul(r, factor, "annuity numerator")?;
    let denominator = factor - Decimal::ONE;
    let ratio = decimal::checked_div(numerator, denominator, "annuity ratio")?;

    principal.checked_mul(ratio, "periodic payment")
}
