pub mod amortization;
pub mod auto_loan;
pub mod mortgage;
pub mod schedule;

pub use amortization::{periodic_payment, AmortizationCalculator, AmortizationResult, AmortizationRow};
pub use auto_loan::{AutoLoanCalculator, AutoLoanResult};
pub use mortgage::{MortgageCalculator, MortgageResult};
pub use schedule::{PaymentSchedule, PaymentScheduleGenerator, ScheduleEntry};
