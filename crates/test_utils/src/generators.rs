//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains kernel invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared_kernel::{AggregateId, Currency, Money};

/// Strategy for generating supported Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    proptest::sample::select(Currency::all().to_vec())
}

/// Strategy for generating valid amounts in minor units
pub fn minor_amount_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000_000_000i64
}

/// Strategy for generating negative minor amounts
pub fn negative_minor_amount_strategy() -> impl Strategy<Value = i64> {
    i64::MIN..0i64
}

/// Strategy for generating valid Money values in any currency
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (minor_amount_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency).expect("non-negative"))
}

/// Strategy for generating valid Money values in one currency
pub fn money_in_strategy(currency: Currency) -> impl Strategy<Value = Money> {
    minor_amount_strategy()
        .prop_map(move |amount| Money::from_minor(amount, currency).expect("non-negative"))
}

/// Strategy for generating decimal strings that a currency can represent
/// exactly, paired with the currency
///
/// The fractional part has between zero and `fraction_digits` digits.
pub fn decimal_string_strategy() -> impl Strategy<Value = (String, Currency)> {
    (currency_strategy(), minor_amount_strategy(), 0u32..=3u32).prop_map(
        |(currency, minor, precision)| {
            let scale = precision.min(currency.fraction_digits());
            let value = Decimal::new(minor, scale);
            (value.to_string(), currency)
        },
    )
}

/// Strategy for generating decimal strings with more fraction digits than
/// the currency allows
pub fn overprecise_decimal_string_strategy() -> impl Strategy<Value = (String, Currency)> {
    (currency_strategy(), 0i64..1_000_000_000i64, 1i64..10i64).prop_map(
        |(currency, whole, last_digit)| {
            let scale = currency.fraction_digits() + 1;
            // a non-zero final digit guarantees the extra precision is real
            let mantissa = whole * 10 + last_digit;
            (Decimal::new(mantissa, scale).to_string(), currency)
        },
    )
}

/// Strategy for generating non-blank identifiers
pub fn aggregate_id_strategy() -> impl Strategy<Value = AggregateId> {
    "[a-zA-Z0-9-]{1,36}".prop_map(|s| AggregateId::parse(s).expect("non-blank"))
}
