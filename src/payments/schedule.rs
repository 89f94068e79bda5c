use chrono::{Days, Months, NaiveDate};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::decimal::Money;
use crate::errors::{EngineError, Result};
use crate::types::{DurationUnit, EndCondition};

/// one installment in a payment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based
    pub sequence: u32,
    pub due_date: NaiveDate,
    pub amount: Money,
}

/// ordered installments for a loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub start_date: NaiveDate,
    pub end_condition: EndCondition,
    pub installment_amount: Money,
    pub entries: Vec<ScheduleEntry>,
}

impl PaymentSchedule {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// get installment by 1-based sequence number
    pub fn get(&self, sequence: u32) -> Option<&ScheduleEntry> {
        sequence
            .checked_sub(1)
            .and_then(|index| self.entries.get(index as usize))
    }

    pub fn first_due_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.due_date)
    }

    pub fn last_due_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.due_date)
    }

    /// sum of all installment amounts
    pub fn total_amount(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry> {
        self.entries.iter()
    }
}

/// spreads installments proportionally between a start date and an end condition
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentScheduleGenerator;

impl PaymentScheduleGenerator {
    pub fn new() -> Self {
        Self
    }

    /// due dates and per-installment amount for `total_payments` installments.
    ///
    /// Installment `i` falls `floor(span * i / total_payments)` days or months
    /// after `start`, so the last one lands on the end of the span. Every
    /// installment carries `total_payment / total_payments`; remainders are not
    /// redistributed.
    pub fn schedule(
        &self,
        start: NaiveDate,
        end_condition: EndCondition,
        total_payments: u32,
        total_payment: Money,
    ) -> Result<PaymentSchedule> {
        if total_payments == 0 {
            warn!(%start, "schedule requested with zero payments");
            return Err(EngineError::ZeroPayments);
        }

        let installment_amount =
            total_payment.checked_div(Decimal::from(total_payments), "installment amount")?;
        let n = total_payments as u64;

        let entries = (1..=total_payments)
            .map(|i| -> Result<ScheduleEntry> {
                let due_date = match end_condition {
                    EndCondition::FixedEndDate(end) => {
                        let span = (end - start).num_days().max(0) as u64;
                        add_days(start, span * i as u64 / n)?
                    }
                    EndCondition::FixedDuration { amount, unit } => {
                        let offset = amount as u64 * i as u64 / n;
                        match unit {
                            DurationUnit::Days => add_days(start, offset)?,
                            DurationUnit::Months => add_months(start, offset)?,
                        }
                    }
                };
                Ok(ScheduleEntry {
                    sequence: i,
                    due_date,
                    amount: installment_amount,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            %start,
            total_payments,
            %installment_amount,
            last_due = ?entries.last().map(|e| e.due_date),
            "generated payment schedule"
        );

        Ok(PaymentSchedule {
            start_date: start,
            end_condition,
            installment_amount,
            entries,
        })
    }

    /// schedule starting on the current date of `time`
    pub fn schedule_from_today(
        &self,
        time: &SafeTimeProvider,
        end_condition: EndCondition,
        total_payments: u32,
        total_payment: Money,
    ) -> Result<PaymentSchedule> {
        let today = time.now().date_naive();
        self.schedule(today, end_condition, total_payments, total_payment)
    }
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| EngineError::InvalidDate {
            message: format!("{} plus {} days is out of range", date, days),
        })
}

/// calendar month addition, clamping to the last day of shorter months
fn add_months(date: NaiveDate, months: u64) -> Result<NaiveDate> {
    let out_of_range = || EngineError::InvalidDate {
        message: format!("{} plus {} months is out of range", date, months),
    };
    let months = u32::try_from(months).map_err(|_| out_of_range())?;
    date.checked_add_months(Months::new(months)).ok_or_else(out_of_range)
}
