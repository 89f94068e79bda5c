/// loan quote - the record stored when a borrower submits a loan request
use chrono::{TimeZone, Utc};
use loan_engine_rs::{
    EngineConfig, LoanQuote, LoanTerms, Money, PaymentFrequency, SafeTimeProvider, TermLength,
    TimeSource,
};
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=loan_engine_rs=debug shows every calculation step
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== loan quote example ===\n");

    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    ));
    let config = EngineConfig::from_json(r#"{ "term_rounding": "HalfEven", "display_scale": 2 }"#)?;

    let terms = LoanTerms::new(
        Money::from_major(3_000),
        dec!(12),
        TermLength::Months(6),
        PaymentFrequency::BiWeekly,
    );
    let quote = LoanQuote::for_term(terms, &config, &time)?;

    let summary = quote.summary(&config);
    println!("installments: {}", summary.total_payments);
    println!("installment:  ${}", summary.periodic_payment);
    println!("interest:     ${}", summary.total_interest);

    println!("\nschedule:");
    for entry in quote.schedule.iter() {
        println!("  #{:>2}  {}  ${}", entry.sequence, entry.due_date, config.round_for_display(entry.amount));
    }

    println!("\nstored record:\n{}", quote.to_json_pretty()?);

    Ok(())
}
