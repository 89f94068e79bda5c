/// growth - savings, compound interest and simple interest side by side
use loan_engine_rs::{
    effective_annual_rate, GrowthCalculator, Money, Rate, SimpleInterestCalculator,
};
use loan_engine_rs::interest::per_period;
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== growth example ===\n");

    let growth = GrowthCalculator::default();

    // $10,000 left alone for two years at 6% compounded monthly
    let lump_sum = growth.grow_annual(Money::from_major(10_000), Money::ZERO, dec!(6), 12, 24)?;
    println!("compound interest:  ${}", lump_sum.future_value.round_dp(2));

    // same deposit plus $250 at the end of every month
    let savings = growth.grow_annual(Money::from_major(10_000), Money::from_major(250), dec!(6), 12, 24)?;
    println!("with contributions: ${} (paid in ${})", savings.future_value.round_dp(2), savings.total_contribution);

    let apy = effective_annual_rate(Rate::from_percentage(6), 12)?;
    println!("effective yield:    {}", apy.as_percentage().round_dp(3));

    // simple interest on a peer loan
    let simple = SimpleInterestCalculator::new().simple(Money::from_major(10_000), dec!(6), dec!(2))?;
    let monthly = per_period(simple.total_payment, dec!(2), 12)?;
    println!("\nsimple interest:    ${}", simple.total_interest.round_dp(2));
    println!("monthly to repay:   ${}", monthly.round_dp(2));

    Ok(())
}
