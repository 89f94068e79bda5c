/// quick start - monthly payment for a personal loan
use loan_engine_rs::{AmortizationCalculator, LoanTerms, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // $25,000 at 5.5% over five years
    let terms = LoanTerms::personal(Money::from_major(25_000), dec!(5.5), 60);

    let (normalized, result) = AmortizationCalculator::default().amortize_terms(&terms)?;

    println!("payments:        {}", normalized.total_payments);
    println!("monthly payment: ${}", result.periodic_payment.round_dp(2));
    println!("total interest:  ${}", result.total_interest.round_dp(2));
    println!("total paid:      ${}", result.total_payment.round_dp(2));

    Ok(())
}
