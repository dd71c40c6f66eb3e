//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! shared kernel test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built Money values and identifiers
//! - `assertions`: Custom assertion helpers for kernel types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use assertions::*;
pub use generators::*;
