//! Money types with exact minor-unit arithmetic
//!
//! A `Money` value is an immutable, non-negative count of a currency's
//! smallest unit (cents for USD, centavos for COP, yen for JPY). Decimal
//! input is parsed with rust_decimal and scaled exactly; binary floating
//! point never takes part in any conversion.
//!
//! ```rust
//! use shared_kernel::{Currency, Money};
//!
//! let price = Money::usd("10.99").unwrap();
//! assert_eq!(price.amount(), 1099);
//! assert_eq!(price.to_decimal_string(), "10.99");
//! assert_eq!(price.to_string(), "$ 10.99");
//!
//! let pesos = Money::from_minor(150_000, Currency::COP).unwrap();
//! assert!(price.checked_add(&pesos).is_err());
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::currency::Currency;

/// Errors that can occur during money operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Blank, unparsable, negative, out-of-range, or too precise input
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Cannot operate on different currencies: {left} vs {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// A subtraction would have produced a negative amount
    #[error("Result would be negative in {0}")]
    NegativeResult(Currency),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A monetary amount with associated currency
///
/// The amount is stored in minor units and is never negative. Values are
/// created only through the validated constructors below; every operation
/// returns a new value.
///
/// Equality and hashing cover both the amount and the currency, so
/// `USD 10.00` and `COP 10.00` are different values. There is deliberately
/// no `Ord` implementation; use [`Money::checked_cmp`] when both operands
/// share a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    amount: i64,
    currency: Currency,
}

/// Wire shape of `Money`; deserialization re-runs `Money::from_minor`
#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    amount: i64,
    currency: Currency,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::from_minor(repr.amount, repr.currency)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: money.currency,
        }
    }
}

impl Money {
    /// Creates Money from an amount already expressed in minor units
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` when `minor_amount` is negative.
    pub fn from_minor(minor_amount: i64, currency: Currency) -> Result<Self, MoneyError> {
        if minor_amount < 0 {
            debug!(currency = %currency, "Rejected negative minor amount");
            return Err(MoneyError::InvalidAmount(
                "Amount cannot be negative".to_string(),
            ));
        }
        Ok(Self {
            amount: minor_amount,
            currency,
        })
    }

    /// Same as [`Money::from_minor`], resolving the currency from its ISO code
    pub fn from_minor_with_code(minor_amount: i64, currency_code: &str) -> Result<Self, MoneyError> {
        let currency = Currency::from_code(currency_code)?;
        Self::from_minor(minor_amount, currency)
    }

    /// Creates Money from a decimal numeral such as `"1500.00"` or `"10.99"`
    ///
    /// The value is multiplied by `10^fraction_digits` in exact decimal
    /// arithmetic. Input with more fractional precision than the currency's
    /// minor unit is rejected rather than rounded or truncated.
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidAmount` if the input is blank, is not a
    /// decimal number, cannot be scaled exactly, is negative, or does not
    /// fit in an `i64` count of minor units. Significant digits are limited
    /// to rust_decimal's 28; trailing fractional zeros do not count.
    pub fn from_decimal_str(value: &str, currency: Currency) -> Result<Self, MoneyError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(MoneyError::InvalidAmount(
                "Decimal value cannot be null or empty".to_string(),
            ));
        }

        let decimal = parse_exact_decimal(trimmed)?;
        let fraction_digits = currency.fraction_digits();
        let multiplier = Decimal::from(10_i64.pow(fraction_digits));

        let scaled = decimal.checked_mul(multiplier).ok_or_else(|| {
            MoneyError::InvalidAmount(format!("'{}' is out of range", trimmed))
        })?;

        if !scaled.fract().is_zero() {
            debug!(
                currency = %currency,
                fraction_digits,
                "Decimal value exceeds minor unit precision"
            );
            return Err(MoneyError::InvalidAmount(format!(
                "'{}' has more than {} fraction digits for {}",
                trimmed, fraction_digits, currency
            )));
        }

        if scaled < Decimal::ZERO {
            debug!(currency = %currency, "Rejected negative decimal amount");
            return Err(MoneyError::InvalidAmount(
                "Amount cannot be negative".to_string(),
            ));
        }

        let minor_amount = scaled.to_i64().ok_or_else(|| {
            MoneyError::InvalidAmount(format!("'{}' is out of range", trimmed))
        })?;

        Self::from_minor(minor_amount, currency)
    }

    /// Same as [`Money::from_decimal_str`], resolving the currency from its ISO code
    pub fn from_decimal_str_with_code(value: &str, currency_code: &str) -> Result<Self, MoneyError> {
        let currency = Currency::from_code(currency_code)?;
        Self::from_decimal_str(value, currency)
    }

    /// Colombian pesos, e.g. `Money::cop("1500.00")` is 150000 centavos
    pub fn cop(value: &str) -> Result<Self, MoneyError> {
        Self::from_decimal_str(value, Currency::COP)
    }

    /// US dollars
    pub fn usd(value: &str) -> Result<Self, MoneyError> {
        Self::from_decimal_str(value, Currency::USD)
    }

    /// Euros
    pub fn eur(value: &str) -> Result<Self, MoneyError> {
        Self::from_decimal_str(value, Currency::EUR)
    }

    /// Creates a zero amount in the specified currency
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: 0,
            currency,
        }
    }

    /// Returns the amount in minor units
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns the amount in major units as an exact decimal
    pub fn to_decimal(&self) -> Decimal {
        let fraction_digits = self.currency.fraction_digits();
        Decimal::new(self.amount, fraction_digits)
            .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointNearestEven)
    }

    /// Returns the amount in decimal form with exactly the currency's
    /// fraction digits (e.g. `"1500.00"`, or `"1500"` for JPY)
    pub fn to_decimal_string(&self) -> String {
        self.to_decimal().to_string()
    }

    /// Returns `"{symbol} {decimal}"`, meant for humans only
    pub fn to_display_string(&self) -> String {
        format!("{} {}", self.currency.symbol(), self.to_decimal_string())
    }

    /// Checked addition that returns an error on currency mismatch
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;
        Ok(Self {
            amount,
            currency: self.currency,
        })
    }

    /// Checked subtraction; Money cannot represent a negative balance
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::CurrencyMismatch` for differing currencies and
    /// `MoneyError::NegativeResult` when `other` is larger than `self`.
    pub fn checked_sub(&self, other: &Money) -> Result<Money, MoneyError> {
        self.ensure_same_currency(other)?;
        if self.amount < other.amount {
            debug!(currency = %self.currency, "Subtraction would go negative");
            return Err(MoneyError::NegativeResult(self.currency));
        }
        Ok(Self {
            amount: self.amount - other.amount,
            currency: self.currency,
        })
    }

    /// Adds up `amounts`, all of which must be in `currency`
    pub fn sum<I>(currency: Currency, amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency), |total, money| total.checked_add(&money))
    }

    /// Compares two amounts of the same currency
    pub fn checked_cmp(&self, other: &Money) -> Result<Ordering, MoneyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), MoneyError> {
        if self.currency != other.currency {
            debug!(
                left = %self.currency,
                right = %other.currency,
                "Currency mismatch"
            );
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }
}

/// Largest scale rust_decimal can represent
const MAX_SCALE: u32 = 28;

/// Parses plain (`"10.99"`) or scientific (`"1.099e1"`) notation without
/// ever rounding
fn parse_exact_decimal(value: &str) -> Result<Decimal, MoneyError> {
    let invalid = |reason: String| {
        MoneyError::InvalidAmount(format!("'{}' is not a decimal number: {}", value, reason))
    };

    // rust_decimal accepts digit separators; a money literal must not
    if value.contains('_') {
        return Err(invalid("digit separators are not allowed".to_string()));
    }

    let (number, exponent) = match value.split_once(['e', 'E']) {
        Some((number, exponent)) => {
            let exponent = exponent
                .parse::<i64>()
                .map_err(|e| invalid(format!("bad exponent: {}", e)))?;
            (number, exponent)
        }
        None => (value, 0),
    };

    let mut decimal = Decimal::from_str_exact(strip_fraction_zeros(number))
        .map_err(|e| invalid(e.to_string()))?;

    if decimal.is_zero() {
        return Ok(Decimal::ZERO);
    }

    if exponent < 0 {
        // move the point left on the raw mantissa so nothing is rounded
        let mut mantissa = decimal.mantissa();
        let mut scale = u64::from(decimal.scale()) + exponent.unsigned_abs();
        while scale > u64::from(MAX_SCALE) && mantissa % 10 == 0 {
            mantissa /= 10;
            scale -= 1;
        }
        let scale = u32::try_from(scale)
            .ok()
            .filter(|scale| *scale <= MAX_SCALE)
            .ok_or_else(|| invalid("too many fraction digits".to_string()))?;
        decimal = Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|e| invalid(e.to_string()))?;
    } else {
        // shift into the scale first, it is exact and cannot overflow
        let shift = u32::try_from(exponent)
            .unwrap_or(u32::MAX)
            .min(decimal.scale());
        decimal
            .set_scale(decimal.scale() - shift)
            .map_err(|e| invalid(e.to_string()))?;
        for _ in u64::from(shift)..exponent.unsigned_abs() {
            decimal = decimal
                .checked_mul(Decimal::TEN)
                .ok_or_else(|| invalid("exponent out of range".to_string()))?;
        }
    }

    Ok(decimal)
}

/// Drops trailing zeros after the decimal point; they carry no value and
/// would otherwise count against rust_decimal's 28-digit precision
fn strip_fraction_zeros(number: &str) -> &str {
    if number.matches('.').count() != 1 {
        return number;
    }
    let stripped = number.trim_end_matches('0');
    if stripped.len() == number.len() {
        return number;
    }
    match stripped.strip_suffix('.') {
        Some("") | Some("-") | Some("+") => "0",
        Some(integer) => integer,
        None => stripped,
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency.symbol(), self.to_decimal_string())
    }
}
