use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::errors::{EngineError, Result};

/// Money type backed by a 96-bit decimal (28 significant digits).
///
/// Arithmetic keeps full precision. Rounding to a currency scale happens only
/// when a caller asks for it through [`Money::round_dp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);
    pub const ONE: Money = Money(Decimal::ONE);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str_exact(s)?))
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from minor amount (cents, etc)
    pub fn from_minor(amount: i64, scale: u32) -> Self {
        Money(Decimal::new(amount, scale))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round to specified decimal places (banker's rounding)
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp(dp))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// strictly less than zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    pub fn max(self, other: Self) -> Self {
        Money(self.0.max(other.0))
    }

    /// calculate percentage (e.g., 5% of $100)
    pub fn percentage(&self, percent: Decimal) -> Result<Money> {
        let scaled = checked_mul(self.0, percent, "percentage")?;
        checked_div(scaled, Decimal::ONE_HUNDRED, "percentage").map(Money)
    }

    /// add, reporting overflow instead of panicking
    pub fn checked_add(self, other: Money, operation: &'static str) -> Result<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(EngineError::Overflow { operation })
    }

    /// subtract, reporting overflow instead of panicking
    pub fn checked_sub(self, other: Money, operation: &'static str) -> Result<Money> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(EngineError::Overflow { operation })
    }

    /// multiply by a decimal, reporting overflow instead of panicking
    pub fn checked_mul(self, factor: Decimal, operation: &'static str) -> Result<Money> {
        checked_mul(self.0, factor, operation).map(Money)
    }

    /// divide by a decimal, reporting overflow or a zero divisor instead of panicking
    pub fn checked_div(self, divisor: Decimal, operation: &'static str) -> Result<Money> {
        checked_div(self.0, divisor, operation).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl From<i32> for Money {
    fn from(i: i32) -> Self {
        Money::from_major(i as i64)
    }
}

impl From<u32> for Money {
    fn from(i: u32) -> Self {
        Money::from_major(i as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(self.0 * other)
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(self.0 / other)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, x| acc + x)
    }
}

/// rate type for interest rates, percentages, and ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);
    pub const ONE: Rate = Rate(Decimal::ONE);

    /// create from decimal (e.g., 0.05 for 5%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from whole percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::ONE_HUNDRED)
    }

    /// create from percentage with fraction (e.g., 5.5 for 5.5%)
    pub fn from_percentage_decimal(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// split an annual rate evenly across `periods_per_year` periods
    pub fn per_period(&self, periods_per_year: u32) -> Result<Rate> {
        if periods_per_year == 0 {
            return Err(EngineError::ZeroPaymentsPerYear);
        }
        Ok(Rate(self.0 / Decimal::from(periods_per_year)))
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

/// `base^exponent` by repeated exact multiplication.
///
/// Exponents are payment counts, so the loop is bounded by the loan term.
pub fn checked_powi(base: Decimal, exponent: u32) -> Result<Decimal> {
    let mut factor = Decimal::ONE;
    for _ in 0..exponent {
        factor = factor
            .checked_mul(base)
            .ok_or(EngineError::Overflow { operation: "compound factor" })?;
    }
    Ok(factor)
}

/// `(1 + rate)^periods`, the growth of one unit over `periods` compounding periods
pub fn compound_factor(rate: Rate, periods: u32) -> Result<Decimal> {
    checked_powi(Decimal::ONE + rate.as_decimal(), periods)
}

pub(crate) fn checked_mul(a: Decimal, b: Decimal, operation: &'static str) -> Result<Decimal> {
    a.checked_mul(b).ok_or(EngineError::Overflow { operation })
}

pub(crate) fn checked_div(a: Decimal, b: Decimal, operation: &'static str) -> Result<Decimal> {
    a.checked_div(b).ok_or(EngineError::Overflow { operation })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_keeps_full_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.123456789");
        assert_eq!(m.round_dp(2).to_string(), "100.12");
    }

    #[test]
    fn test_minor_units() {
        let dollars = Money::from_minor(12_345, 2);
        assert_eq!(dollars.as_decimal(), dec!(123.45));
    }

    #[test]
    fn test_money_percentage() {
        let price = Money::from_major(20_000);
        assert_eq!(price.percentage(dec!(7)).unwrap(), Money::from_major(1_400));
    }

    #[test]
    fn test_percentage_reports_overflow() {
        let result = Money::from_decimal(Decimal::MAX).percentage(dec!(7));
        assert!(matches!(result, Err(EngineError::Overflow { .. })));
    }

    #[test]
    fn test_checked_add_and_sub() {
        let max = Money::from_decimal(Decimal::MAX);
        assert!(matches!(
            max.checked_add(Money::ONE, "test"),
            Err(EngineError::Overflow { .. })
        ));
        assert!(matches!(
            (-max).checked_sub(Money::ONE, "test"),
            Err(EngineError::Overflow { .. })
        ));
        assert_eq!(
            Money::from_major(5).checked_sub(Money::from_major(7), "test").unwrap(),
            Money::from_major(-2)
        );
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_percentage_decimal(dec!(5.5));
        assert_eq!(rate.as_decimal(), dec!(0.055));
        assert_eq!(Rate::from_percentage(5).as_decimal(), dec!(0.05));
        assert_eq!(rate.to_string(), "5.5%");
    }

    #[test]
    fn test_per_period_rejects_zero() {
        assert!(matches!(
            Rate::from_percentage(6).per_period(0),
            Err(EngineError::ZeroPaymentsPerYear)
        ));
        assert_eq!(
            Rate::from_percentage(6).per_period(12).unwrap().as_decimal(),
            dec!(0.005)
        );
    }

    #[test]
    fn test_powi_is_exact() {
        assert_eq!(checked_powi(dec!(1.1), 3).unwrap(), dec!(1.331));
        assert_eq!(checked_powi(dec!(7.25), 0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_powi_reports_overflow() {
        let result = checked_powi(dec!(2), 200);
        assert!(matches!(result, Err(EngineError::Overflow { .. })));
    }

    #[test]
    fn test_money_sum() {
        let total: Money = vec![Money::from_major(1), Money::from_minor(50, 2)].into_iter().sum();
        assert_eq!(total.as_decimal(), dec!(1.50));
    }
}
