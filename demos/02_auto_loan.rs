/// auto loan - trade-in, sales tax and fees
use loan_engine_rs::{AutoLoanCalculator, AutoLoanTerms, Money};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== auto loan example ===\n");

    let terms = AutoLoanTerms::new(Money::from_major(32_000), dec!(5.9), 72)
        .down_payment(Money::from_major(4_000))
        .trade_in(Money::from_major(6_500))
        .sales_tax_percent(dec!(7.25))
        .fees(Money::from_major(450));

    let result = AutoLoanCalculator::default().calculate(&terms)?;

    println!("taxable amount:  ${}", result.taxable_amount);
    println!("sales tax:       ${}", result.sales_tax.round_dp(2));
    println!("amount financed: ${}", result.financed_amount.round_dp(2));
    println!("monthly payment: ${}", result.amortization.periodic_payment.round_dp(2));
    println!("total interest:  ${}", result.amortization.total_interest.round_dp(2));

    Ok(())
}
