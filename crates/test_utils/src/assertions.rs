//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for kernel types that give
//! more meaningful error messages than standard assertions.

use shared_kernel::{Currency, Money, MoneyError};

/// Asserts that `money` holds exactly `minor` units of `currency`
pub fn assert_money_minor(money: &Money, minor: i64, currency: Currency) {
    assert_eq!(
        money.currency(),
        currency,
        "Currency mismatch: actual={}, expected={}",
        money.currency(),
        currency
    );
    assert_eq!(
        money.amount(),
        minor,
        "Minor amount mismatch for {}: actual={}, expected={}",
        currency,
        money.amount(),
        minor
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {}",
        money
    );
}

/// Asserts that money values sum to a total
///
/// # Panics
///
/// Panics if any part is in another currency or the sum doesn't equal the total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = Money::sum(total.currency(), parts.iter().copied())
        .expect("Currency mismatch in sum");

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum,
        total
    );
}

/// Asserts that `result` failed because `left` and `right` differ
pub fn assert_currency_mismatch<T: std::fmt::Debug>(
    result: Result<T, MoneyError>,
    left: Currency,
    right: Currency,
) {
    match result {
        Err(MoneyError::CurrencyMismatch { left: l, right: r }) => {
            assert_eq!((l, r), (left, right), "Mismatch reported the wrong currencies");
        }
        other => panic!("Expected CurrencyMismatch({} vs {}), got {:?}", left, right, other),
    }
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}
