use chrono::NaiveDate;
use loan_engine_rs::{
    AmortizationCalculator, AutoLoanCalculator, AutoLoanTerms, DurationUnit, EndCondition,
    GrowthCalculator, Money, PaymentScheduleGenerator, PeriodNormalizer, Rate,
    SimpleInterestCalculator,
};
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn personal_loan_five_years_at_five_and_a_half() {
    let normalized = PeriodNormalizer::default().normalize(dec!(5.5), 12, 60).unwrap();
    assert_eq!(normalized.total_payments, 60);

    let result = AmortizationCalculator::default()
        .amortize(
            Money::from_major(25_000),
            normalized.rate_per_period,
            normalized.total_payments,
            normalized.payments_per_year,
        )
        .unwrap();

    assert_eq!(result.periodic_payment.round_dp(2).as_decimal(), dec!(477.53));
    assert_eq!(result.total_payments, 60);
    // 3651.80 when the rounded installment is paid sixty times
    assert_eq!(result.total_interest.round_dp(2).as_decimal(), dec!(3651.74));
    let rounded = result.periodic_payment.round_dp(2) * dec!(60) - Money::from_major(25_000);
    assert_eq!(rounded.as_decimal(), dec!(3651.80));
}

#[test]
fn simple_interest_two_years_at_six_percent() {
    let result = SimpleInterestCalculator::new()
        .simple(Money::from_major(10_000), dec!(6), dec!(2))
        .unwrap();
    assert_eq!(result.total_interest.round_dp(2).as_decimal(), dec!(1200.00));
    assert_eq!(result.total_payment.round_dp(2).as_decimal(), dec!(11200.00));
}

#[test]
fn compound_interest_monthly_for_two_years() {
    let rate = Rate::from_percentage(6).per_period(12).unwrap();
    let result = GrowthCalculator::default()
        .grow(Money::from_major(10_000), Money::ZERO, rate, 24)
        .unwrap();

    // 10000 * 1.005^24
    assert_eq!(result.future_value.round_dp(2).as_decimal(), dec!(11271.60));
}

#[test]
fn auto_loan_down_payment_above_price_finances_fees_only() {
    let terms = AutoLoanTerms::new(Money::from_major(20_000), dec!(6), 48)
        .down_payment(Money::from_major(22_000))
        .sales_tax_percent(dec!(7))
        .fees(Money::from_major(300));
    let result = AutoLoanCalculator::default().calculate(&terms).unwrap();

    assert_eq!(result.taxable_amount, Money::ZERO);
    assert_eq!(result.financed_amount, Money::from_major(300));
    assert!(result.amortization.total_interest.is_positive());
}

#[test]
fn twelve_monthly_installments_from_new_year() {
    let schedule = PaymentScheduleGenerator::new()
        .schedule(
            date(2025, 1, 1),
            EndCondition::FixedDuration { amount: 12, unit: DurationUnit::Months },
            12,
            Money::from_major(12_000),
        )
        .unwrap();

    assert_eq!(schedule.get(6).unwrap().due_date, date(2025, 7, 1));
    assert_eq!(schedule.get(12).unwrap().due_date, date(2026, 1, 1));
    assert_eq!(schedule.get(12).unwrap().sequence, 12);
}

#[test]
fn schedule_for_amortized_loan_totals_match() {
    let calc = AmortizationCalculator::default();
    let rate = Rate::from_percentage(8).per_period(26).unwrap();
    let result = calc.amortize(Money::from_major(5_000), rate, 26, 26).unwrap();

    let schedule = PaymentScheduleGenerator::new()
        .schedule(
            date(2025, 3, 1),
            EndCondition::FixedEndDate(date(2026, 3, 1)),
            result.total_payments,
            result.total_payment,
        )
        .unwrap();

    assert_eq!(schedule.len(), 26);
    assert_eq!(schedule.last_due_date(), Some(date(2026, 3, 1)));
    let gap = (schedule.total_amount() - result.total_payment).abs();
    assert!(gap < Money::from_minor(26, 2));
}
