//! Overflow-checked money arithmetic.

use rust_decimal::Decimal;

use crate::error::{ForecastError, ForecastResult};

/// Returns `value * percent / 100`.
pub(crate) fn percent_of(
    value: Decimal,
    percent: Decimal,
    quantity: &str,
) -> ForecastResult<Decimal> {
    value
        .checked_mul(percent)
        .map(|scaled| scaled / Decimal::ONE_HUNDRED)
        .ok_or_else(|| ForecastError::overflow(quantity))
}

/// Returns `a * b`.
pub(crate) fn mul(a: Decimal, b: Decimal, quantity: &str) -> ForecastResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| ForecastError::overflow(quantity))
}

/// Returns `a + b`.
pub(crate) fn add(a: Decimal, b: Decimal, quantity: &str) -> ForecastResult<Decimal> {
    a.checked_add(b).ok_or_else(|| ForecastError::overflow(quantity))
}

/// Returns `a - b`.
pub(crate) fn sub(a: Decimal, b: Decimal, quantity: &str) -> ForecastResult<Decimal> {
    a.checked_sub(b).ok_or_else(|| ForecastError::overflow(quantity))
}

/// Sums `values`, failing on the first overflow.
pub(crate) fn sum<I>(values: I, quantity: &str) -> ForecastResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| add(acc, value, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        let fee = percent_of(Decimal::new(211_200, 0), Decimal::new(17, 0), "fee").unwrap();
        assert_eq!(fee, Decimal::new(35_904, 0));
    }

    #[test]
    fn test_overflow_names_the_quantity() {
        match mul(Decimal::MAX, Decimal::TWO, "gross revenue") {
            Err(ForecastError::CalculationError { message }) => {
                assert!(message.contains("gross revenue"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
        assert!(add(Decimal::MAX, Decimal::ONE, "total").is_err());
        assert!(sub(Decimal::MIN, Decimal::ONE, "profit").is_err());
        assert!(percent_of(Decimal::MAX, Decimal::new(3142, 2), "employer tax").is_err());
    }

    #[test]
    fn test_sum_stops_on_overflow() {
        assert_eq!(
            sum([Decimal::ONE, Decimal::TWO], "total").unwrap(),
            Decimal::new(3, 0)
        );
        assert!(sum([Decimal::MAX, Decimal::MAX], "total").is_err());
    }
}
