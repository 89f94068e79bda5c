use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// how often installments fall due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    Annually,
    SemiAnnually,
    Monthly,
    SemiMonthly,
    BiWeekly,
    Weekly,
    Daily,
    /// any other positive number of payments per year
    Custom(u32),
}

impl PaymentFrequency {
    /// number of payments per year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Annually => 1,
            PaymentFrequency::SemiAnnually => 2,
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
            PaymentFrequency::Daily => 365,
            PaymentFrequency::Custom(n) => *n,
        }
    }
}

/// loan term as entered by the borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TermLength {
    Months(u32),
    Years(u32),
}

/// calendar unit for a fixed-duration schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnit {
    Days,
    Months,
}

/// when the last installment falls due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndCondition {
    /// last installment on this date
    FixedEndDate(NaiveDate),
    /// last installment `amount` units after the start date
    FixedDuration { amount: u32, unit: DurationUnit },
}

/// terms of a fixed-rate installment loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: Money,
    /// e.g. 5.5 means 5.5%
    pub annual_rate_percent: Decimal,
    pub term: TermLength,
    pub frequency: PaymentFrequency,
}

impl LoanTerms {
    pub fn new(
        principal: Money,
        annual_rate_percent: Decimal,
        term: TermLength,
        frequency: PaymentFrequency,
    ) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term,
            frequency,
        }
    }

    /// personal loan repaid monthly over `term_months`
    pub fn personal(principal: Money, annual_rate_percent: Decimal, term_months: u32) -> Self {
        Self::new(
            principal,
            annual_rate_percent,
            TermLength::Months(term_months),
            PaymentFrequency::Monthly,
        )
    }

    pub fn payments_per_year(&self) -> u32 {
        self.frequency.payments_per_year()
    }
}

/// mortgage terms: loan terms plus escrow components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageTerms {
    pub home_price: Money,
    pub down_payment: Money,
    pub annual_rate_percent: Decimal,
    pub term_years: u32,
    pub frequency: PaymentFrequency,
    pub annual_property_tax: Money,
    pub annual_home_insurance: Money,
    pub monthly_pmi: Money,
    pub monthly_hoa: Money,
}

impl MortgageTerms {
    /// 30 year fixed, monthly payments, no escrow
    pub fn thirty_year_fixed(home_price: Money, down_payment: Money, annual_rate_percent: Decimal) -> Self {
        Self {
            home_price,
            down_payment,
            annual_rate_percent,
            term_years: 30,
            frequency: PaymentFrequency::Monthly,
            annual_property_tax: Money::ZERO,
            annual_home_insurance: Money::ZERO,
            monthly_pmi: Money::ZERO,
            monthly_hoa: Money::ZERO,
        }
    }

    pub fn with_escrow(
        mut self,
        annual_property_tax: Money,
        annual_home_insurance: Money,
        monthly_pmi: Money,
        monthly_hoa: Money,
    ) -> Self {
        self.annual_property_tax = annual_property_tax;
        self.annual_home_insurance = annual_home_insurance;
        self.monthly_pmi = monthly_pmi;
        self.monthly_hoa = monthly_hoa;
        self
    }

    pub fn payments_per_year(&self) -> u32 {
        self.frequency.payments_per_year()
    }
}

/// auto loan terms: vehicle price less down payment and trade-in, plus tax and fees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLoanTerms {
    pub vehicle_price: Money,
    pub down_payment: Money,
    pub trade_in_value: Money,
    /// e.g. 7 means 7%
    pub sales_tax_percent: Decimal,
    pub fees: Money,
    pub annual_rate_percent: Decimal,
    pub term_months: u32,
    pub frequency: PaymentFrequency,
}

impl AutoLoanTerms {
    /// monthly auto loan with no down payment, trade-in, tax or fees
    pub fn new(vehicle_price: Money, annual_rate_percent: Decimal, term_months: u32) -> Self {
        Self {
            vehicle_price,
            down_payment: Money::ZERO,
            trade_in_value: Money::ZERO,
            sales_tax_percent: Decimal::ZERO,
            fees: Money::ZERO,
            annual_rate_percent,
            term_months,
            frequency: PaymentFrequency::Monthly,
        }
    }

    pub fn down_payment(mut self, amount: Money) -> Self {
        self.down_payment = amount;
        self
    }

    pub fn trade_in(mut self, value: Money) -> Self {
        self.trade_in_value = value;
        self
    }

    pub fn sales_tax_percent(mut self, percent: Decimal) -> Self {
        self.sales_tax_percent = percent;
        self
    }

    pub fn fees(mut self, fees: Money) -> Self {
        self.fees = fees;
        self
    }

    pub fn frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn payments_per_year(&self) -> u32 {
        self.frequency.payments_per_year()
    }
}
