//! Core error types used across the system

use thiserror::Error;
use crate::money::MoneyError;

/// Core error type for the kernel
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    #[error("Validation error: {0}")]
    Validation(String),

    /// An identifier-based lookup found nothing
    #[error("{resource} with ID '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// e.g. `CoreError::not_found("Invoice", id)`
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        CoreError::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}
