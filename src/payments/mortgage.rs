use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::errors::Result;
use crate::payments::amortization::periodic_payment;
use crate::periods::PeriodNormalizer;
use crate::types::MortgageTerms;

const MONTHS_PER_YEAR: u32 = 12;

/// mortgage payment split into principal and interest plus escrow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageResult {
    /// home price less down payment, may be negative
    pub principal: Money,
    pub principal_and_interest: Money,
    pub taxes_per_period: Money,
    pub insurance_per_period: Money,
    pub pmi_per_period: Money,
    pub hoa_per_period: Money,
    pub payment_per_period: Money,
    pub total_payments: u32,
    pub payments_per_year: u32,
    /// interest only, escrow excluded
    pub total_interest: Money,
}

impl MortgageResult {
    /// escrow charged each period on top of principal and interest
    pub fn escrow_per_period(&self) -> Money {
        self.taxes_per_period + self.insurance_per_period + self.pmi_per_period + self.hoa_per_period
    }
}

/// mortgage calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct MortgageCalculator {
    normalizer: PeriodNormalizer,
}

impl MortgageCalculator {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            normalizer: PeriodNormalizer::from_config(config),
        }
    }

    /// amortize the financed amount and add per-period escrow components
    pub fn calculate(&self, terms: &MortgageTerms) -> Result<MortgageResult> {
        let ppy = terms.payments_per_year();
        let normalized =
            self.normalizer
                .normalize_years(terms.annual_rate_percent, ppy, terms.term_years)?;

        // over-paying the down payment is left to input validation
        let principal = terms
            .home_price
            .checked_sub(terms.down_payment, "mortgage principal")?;
        let principal_and_interest =
            periodic_payment(principal, normalized.rate_per_period, normalized.total_payments)?;

        let periods = Decimal::from(ppy);
        let months = Decimal::from(MONTHS_PER_YEAR);
        let taxes_per_period = terms.annual_property_tax / periods;
        let insurance_per_period = terms.annual_home_insurance / periods;
        let pmi_per_period = terms.monthly_pmi.checked_mul(months, "pmi")? / periods;
        let hoa_per_period = terms.monthly_hoa.checked_mul(months, "hoa")? / periods;

        // same order as escrow_per_period, so that sum is known to fit
        let escrow = taxes_per_period
            .checked_add(insurance_per_period, "escrow")?
            .checked_add(pmi_per_period, "escrow")?
            .checked_add(hoa_per_period, "escrow")?;
        let payment_per_period = principal_and_interest.checked_add(escrow, "mortgage payment")?;

        let total_interest = if normalized.rate_per_period.is_zero() {
            Money::ZERO
        } else {
            principal_and_interest
                .checked_mul(Decimal::from(normalized.total_payments), "total mortgage interest")?
                .checked_sub(principal, "total mortgage interest")?
        };

        debug!(
            %principal,
            %principal_and_interest,
            %payment_per_period,
            total_payments = normalized.total_payments,
            "calculated mortgage"
        );

        Ok(MortgageResult {
            principal,
            principal_and_interest,
            taxes_per_period,
            insurance_per_period,
            pmi_per_period,
            hoa_per_period,
            payment_per_period,
            total_payments: normalized.total_payments,
            payments_per_year: ppy,
            total_interest,
        })
    }
}
