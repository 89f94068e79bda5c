//! Conversion of annual rates and calendar terms into per-period figures.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{EngineConfig, TermRounding};
use crate::decimal::Rate;
use crate::errors::{EngineError, Result};
use crate::types::{LoanTerms, TermLength};

const MONTHS_PER_YEAR: u64 = 12;

/// per-period rate and payment count derived from annual terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTerms {
    pub rate_per_period: Rate,
    pub total_payments: u32,
    pub payments_per_year: u32,
}

/// turns annual percentage rates and terms into period rates and counts
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodNormalizer {
    rounding: TermRounding,
}

impl PeriodNormalizer {
    pub fn new(rounding: TermRounding) -> Self {
        Self { rounding }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.term_rounding)
    }

    /// normalize a term given in months.
    ///
    /// The payment count is `term_months / 12 * payments_per_year` rounded with
    /// the configured mode and never less than one. The product is formed
    /// before dividing by twelve so midpoints such as 0.5 are detected exactly.
    pub fn normalize(
        &self,
        annual_rate_percent: Decimal,
        payments_per_year: u32,
        term_months: u32,
    ) -> Result<NormalizedTerms> {
        let rate_per_period = period_rate(annual_rate_percent, payments_per_year)?;

        let scaled = Decimal::from(term_months as u64 * payments_per_year as u64)
            / Decimal::from(MONTHS_PER_YEAR);
        let total_payments = self
            .rounding
            .round(scaled)
            .to_u32()
            .ok_or(EngineError::Overflow { operation: "payment count" })?
            .max(1);

        debug!(
            %annual_rate_percent,
            payments_per_year,
            term_months,
            total_payments,
            rate_per_period = %rate_per_period.as_decimal(),
            "normalized monthly term"
        );

        Ok(NormalizedTerms {
            rate_per_period,
            total_payments,
            payments_per_year,
        })
    }

    /// normalize a term given in whole years; no rounding is involved
    pub fn normalize_years(
        &self,
        annual_rate_percent: Decimal,
        payments_per_year: u32,
        term_years: u32,
    ) -> Result<NormalizedTerms> {
        let rate_per_period = period_rate(annual_rate_percent, payments_per_year)?;
        let total_payments = term_years
            .checked_mul(payments_per_year)
            .ok_or(EngineError::Overflow { operation: "payment count" })?
            .max(1);

        debug!(
            %annual_rate_percent,
            payments_per_year,
            term_years,
            total_payments,
            "normalized yearly term"
        );

        Ok(NormalizedTerms {
            rate_per_period,
            total_payments,
            payments_per_year,
        })
    }

    /// normalize the rate and term of a loan
    pub fn normalize_terms(&self, terms: &LoanTerms) -> Result<NormalizedTerms> {
        let ppy = terms.payments_per_year();
        match terms.term {
            TermLength::Months(months) => self.normalize(terms.annual_rate_percent, ppy, months),
            TermLength::Years(years) => self.normalize_years(terms.annual_rate_percent, ppy, years),
        }
    }
}

fn period_rate(annual_rate_percent: Decimal, payments_per_year: u32) -> Result<Rate> {
    if payments_per_year == 0 {
        warn!("payments per year of zero reached the period normalizer");
        return Err(EngineError::ZeroPaymentsPerYear);
    }
    let annual = Rate::from_percentage_decimal(annual_rate_percent);
    if annual.is_negative() {
        warn!(%annual_rate_percent, "negative rate reached the period normalizer");
        return Err(EngineError::NegativeRate { rate: annual });
    }
    annual.per_period(payments_per_year)
}
