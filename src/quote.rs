//! Persistable loan quote: echoed terms, amortization totals and the
//! installment schedule, as stored by the loan request flow and read back by
//! receipt rendering.

use chrono::{DateTime, Months, NaiveDate, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::errors::{EngineError, Result};
use crate::payments::{AmortizationCalculator, AmortizationResult, PaymentSchedule, PaymentScheduleGenerator};
use crate::periods::NormalizedTerms;
use crate::types::{EndCondition, LoanTerms, TermLength};

/// quote id
pub type QuoteId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub id: QuoteId,
    pub created_at: DateTime<Utc>,
    pub terms: LoanTerms,
    pub normalized: NormalizedTerms,
    pub result: AmortizationResult,
    pub schedule: PaymentSchedule,
}

/// totals rounded for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub periodic_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub total_payments: u32,
    pub first_due_date: Option<NaiveDate>,
    pub last_due_date: Option<NaiveDate>,
}

impl LoanQuote {
    /// amortize `terms` and lay out installments from `start` to `end_condition`
    #[instrument(skip_all, fields(principal = %terms.principal))]
    pub fn build(
        terms: LoanTerms,
        start: NaiveDate,
        end_condition: EndCondition,
        config: &EngineConfig,
        time: &SafeTimeProvider,
    ) -> Result<Self> {
        let (normalized, result) = AmortizationCalculator::new(config).amortize_terms(&terms)?;
        let schedule = PaymentScheduleGenerator::new().schedule(
            start,
            end_condition,
            result.total_payments,
            result.total_payment,
        )?;

        let quote = Self {
            id: Uuid::new_v4(),
            created_at: time.now(),
            terms,
            normalized,
            result,
            schedule,
        };

        info!(
            quote_id = %quote.id,
            total_payments = quote.result.total_payments,
            "built loan quote"
        );

        Ok(quote)
    }

    /// quote starting today and ending when the loan term runs out.
    ///
    /// Installments are spread by day, so weekly and biweekly loans get one
    /// distinct due date per payment.
    pub fn for_term(terms: LoanTerms, config: &EngineConfig, time: &SafeTimeProvider) -> Result<Self> {
        let start = time.now().date_naive();
        let end_condition = term_end_condition(start, terms.term)?;
        Self::build(terms, start, end_condition, config, time)
    }

    pub fn summary(&self, config: &EngineConfig) -> QuoteSummary {
        QuoteSummary {
            periodic_payment: config.round_for_display(self.result.periodic_payment),
            total_payment: config.round_for_display(self.result.total_payment),
            total_interest: config.round_for_display(self.result.total_interest),
            total_payments: self.result.total_payments,
            first_due_date: self.schedule.first_due_date(),
            last_due_date: self.schedule.last_due_date(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// end date `term` after `start`, clamped to month end
pub fn term_end_condition(start: NaiveDate, term: TermLength) -> Result<EndCondition> {
    let months = match term {
        TermLength::Months(months) => months,
        TermLength::Years(years) => years.saturating_mul(12),
    };
    start
        .checked_add_months(Months::new(months))
        .map(EndCondition::FixedEndDate)
        .ok_or_else(|| EngineError::InvalidDate {
            message: format!("{} plus {} months is out of range", start, months),
        })
}
