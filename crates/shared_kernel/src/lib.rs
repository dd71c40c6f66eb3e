//! Shared Kernel - Foundational types for the Flowly platform
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money in minor units with currency-checked arithmetic
//! - ISO 4217 currency resolution
//! - Opaque entity identifiers
//! - The `Outcome` success/failure wrapper
//! - Email validation
//! - Kernel configuration and tracing setup

pub mod money;
pub mod currency;
pub mod identifiers;
pub mod outcome;
pub mod validation;
pub mod error;
pub mod config;
pub mod telemetry;

pub use money::{Money, MoneyError};
pub use currency::Currency;
pub use identifiers::AggregateId;
pub use outcome::Outcome;
pub use validation::EmailValidator;
pub use error::CoreError;
pub use config::KernelConfig;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
