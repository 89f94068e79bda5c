/// mortgage - principal and interest plus escrow
use loan_engine_rs::{MortgageCalculator, MortgageTerms, Money, PaymentFrequency};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== mortgage example ===\n");

    let terms = MortgageTerms::thirty_year_fixed(
        Money::from_major(450_000),
        Money::from_major(90_000),
        dec!(6.25),
    )
    .with_escrow(
        Money::from_major(5_400), // property tax per year
        Money::from_major(1_800), // insurance per year
        Money::ZERO,              // no pmi at 20% down
        Money::from_major(75),    // hoa per month
    );

    let calculator = MortgageCalculator::default();
    let monthly = calculator.calculate(&terms)?;

    println!("financed:            ${}", monthly.principal);
    println!("principal+interest:  ${}", monthly.principal_and_interest.round_dp(2));
    println!("escrow:              ${}", monthly.escrow_per_period().round_dp(2));
    println!("monthly payment:     ${}", monthly.payment_per_period.round_dp(2));
    println!("lifetime interest:   ${}", monthly.total_interest.round_dp(2));

    // same loan paid bi-weekly
    let mut biweekly_terms = terms.clone();
    biweekly_terms.frequency = PaymentFrequency::BiWeekly;
    let biweekly = calculator.calculate(&biweekly_terms)?;

    println!("\nbi-weekly payment:   ${}", biweekly.payment_per_period.round_dp(2));
    println!("lifetime interest:   ${}", biweekly.total_interest.round_dp(2));

    Ok(())
}
