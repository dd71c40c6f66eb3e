//! Success/failure wrapper for operation results
//!
//! `Outcome` carries either a value or a human-readable error message, and
//! lets callers chain steps with `map` / `flat_map`. A failure short-circuits
//! every later step and keeps its original message.
//!
//! ```rust
//! use shared_kernel::{Money, Outcome};
//!
//! let tip = Money::usd("2.50").unwrap();
//! let total = Outcome::from(Money::usd("10.00"))
//!     .flat_map(|bill| Outcome::from(bill.checked_add(&tip)))
//!     .map(|m| m.to_decimal_string());
//! assert_eq!(total, Outcome::success("12.50".to_string()));
//!
//! let broken = Outcome::from(Money::usd("oops")).map(|m| m.amount());
//! assert!(broken.is_failure());
//! ```

use std::fmt;

/// Either a successful value or a failure message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The contained value, if this is a success
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure message, if this is a failure
    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }

    /// Transforms a success; a failure passes through unchanged
    pub fn map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Chains a step that may itself fail
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Outcome::Success(value) => function(value),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(message),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error.to_string()),
        }
    }
}
