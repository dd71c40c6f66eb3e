//! Pre-built Test Fixtures
//!
//! Ready-to-use kernel values that are consistent and predictable across
//! tests.

use shared_kernel::{AggregateId, Currency, Money};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// USD 10.00
    pub fn usd_10() -> Money {
        Money::from_minor(1_000, Currency::USD).expect("valid fixture")
    }

    /// USD 10.99, the canonical "two exact fraction digits" example
    pub fn usd_10_99() -> Money {
        Money::from_minor(1_099, Currency::USD).expect("valid fixture")
    }

    /// COP 1500.00
    pub fn cop_1500() -> Money {
        Money::from_minor(150_000, Currency::COP).expect("valid fixture")
    }

    /// COP 10.00, same minor amount as `usd_10` in another currency
    pub fn cop_10() -> Money {
        Money::from_minor(1_000, Currency::COP).expect("valid fixture")
    }

    /// EUR 100.00
    pub fn eur_100() -> Money {
        Money::from_minor(10_000, Currency::EUR).expect("valid fixture")
    }

    /// JPY 10000 (zero fraction digits)
    pub fn jpy_10000() -> Money {
        Money::from_minor(10_000, Currency::JPY).expect("valid fixture")
    }

    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// A stable, human-readable identifier
    pub fn known() -> AggregateId {
        AggregateId::parse("agg-0001").expect("valid fixture")
    }

    /// A freshly generated identifier
    pub fn random() -> AggregateId {
        AggregateId::new()
    }
}

/// Canonical decimal strings and the minor amounts they parse to
pub const DECIMAL_CASES: &[(&str, Currency, i64, &str)] = &[
    ("1500.00", Currency::COP, 150_000, "1500.00"),
    ("1500", Currency::COP, 150_000, "1500.00"),
    ("10.99", Currency::USD, 1_099, "10.99"),
    ("0.5", Currency::EUR, 50, "0.50"),
    ("0", Currency::USD, 0, "0.00"),
    ("10000", Currency::JPY, 10_000, "10000"),
    ("1.005", Currency::KWD, 1_005, "1.005"),
];
