//! ISO 4217 currencies
//!
//! Every currency the kernel can hold money in, together with the fixed
//! number of fraction digits its minor unit implies and a display symbol.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::MoneyError;

/// Currency codes following ISO 4217
///
/// Serializes as the upper-case code; deserialization resolves codes the
/// same way as [`Currency::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    JPY,
    CHF,
    COP,
    MXN,
    BRL,
    CLP,
    KRW,
    INR,
    CAD,
    AUD,
    KWD,
    BHD,
}

static ALL: [Currency; 15] = [
    Currency::USD,
    Currency::EUR,
    Currency::GBP,
    Currency::JPY,
    Currency::CHF,
    Currency::COP,
    Currency::MXN,
    Currency::BRL,
    Currency::CLP,
    Currency::KRW,
    Currency::INR,
    Currency::CAD,
    Currency::AUD,
    Currency::KWD,
    Currency::BHD,
];

impl Currency {
    /// Resolves an ISO 4217 alphabetic code (case-insensitive, surrounding
    /// whitespace ignored)
    ///
    /// # Errors
    ///
    /// Returns `MoneyError::InvalidCurrency` for blank or unknown codes.
    pub fn from_code(code: &str) -> Result<Self, MoneyError> {
        let normalized = code.trim();
        if normalized.is_empty() {
            return Err(MoneyError::InvalidCurrency(
                "Currency cannot be null or empty".to_string(),
            ));
        }

        ALL.iter()
            .copied()
            .find(|currency| currency.code().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| {
                tracing::debug!(code = %normalized, "Unknown currency code");
                MoneyError::InvalidCurrency(format!("Unknown currency code: {}", normalized))
            })
    }

    /// Every supported currency
    pub fn all() -> &'static [Currency] {
        &ALL
    }

    /// Returns the number of decimal places of this currency's minor unit
    pub fn fraction_digits(&self) -> u32 {
        match self {
            Currency::JPY | Currency::CLP | Currency::KRW => 0,
            Currency::KWD | Currency::BHD => 3,
            _ => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
            Currency::CHF => "CHF",
            Currency::COP => "COL$",
            Currency::MXN => "MX$",
            Currency::BRL => "R$",
            Currency::CLP => "CLP$",
            Currency::KRW => "₩",
            Currency::INR => "₹",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
            Currency::KWD => "KD",
            Currency::BHD => "BD",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::COP => "COP",
            Currency::MXN => "MXN",
            Currency::BRL => "BRL",
            Currency::CLP => "CLP",
            Currency::KRW => "KRW",
            Currency::INR => "INR",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::KWD => "KWD",
            Currency::BHD => "BHD",
        }
    }

    /// Returns the ISO 4217 numeric code
    pub fn numeric_code(&self) -> u16 {
        match self {
            Currency::USD => 840,
            Currency::EUR => 978,
            Currency::GBP => 826,
            Currency::JPY => 392,
            Currency::CHF => 756,
            Currency::COP => 170,
            Currency::MXN => 484,
            Currency::BRL => 986,
            Currency::CLP => 152,
            Currency::KRW => 410,
            Currency::INR => 356,
            Currency::CAD => 124,
            Currency::AUD => 36,
            Currency::KWD => 414,
            Currency::BHD => 48,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(&code)
    }
}
