pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod payments;
pub mod periods;
pub mod quote;
pub mod types;

// re-export key types
pub use config::{EngineConfig, TermRounding};
pub use decimal::{Money, Rate};
pub use errors::{EngineError, Result};
pub use interest::{
    effective_annual_rate, GrowthCalculator, GrowthResult, SimpleInterestCalculator,
    SimpleInterestResult,
};
pub use payments::{
    AmortizationCalculator, AmortizationResult, AmortizationRow, AutoLoanCalculator,
    AutoLoanResult, MortgageCalculator, MortgageResult, PaymentSchedule,
    PaymentScheduleGenerator, ScheduleEntry,
};
pub use periods::{NormalizedTerms, PeriodNormalizer};
pub use quote::{LoanQuote, QuoteSummary};
pub use types::{
    AutoLoanTerms, DurationUnit, EndCondition, LoanTerms, MortgageTerms, PaymentFrequency,
    TermLength,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
