//! Opaque identifiers for domain entities
//!
//! `AggregateId` is either a caller-supplied non-blank string or a freshly
//! generated UUID, and is compared by value. Each entity kind wraps it in its
//! own newtype through [`define_id!`](crate::define_id), which keeps ids of
//! different kinds from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

/// Opaque identifier, compared by value
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AggregateId(String);

impl AggregateId {
    /// Creates a new random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if `id` is empty or whitespace only.
    pub fn parse(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CoreError::validation("ID cannot be null or empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AggregateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AggregateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AggregateId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AggregateId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AggregateId> for String {
    fn from(id: AggregateId) -> String {
        id.0
    }
}

impl AsRef<str> for AggregateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Defines a typed identifier for one entity kind, backed by [`AggregateId`]
///
/// ```rust
/// shared_kernel::define_id!(
///     /// Identifies an invoice
///     InvoiceId
/// );
///
/// let id = InvoiceId::parse("INV-1").unwrap();
/// assert_eq!(id.as_str(), "INV-1");
/// assert_ne!(InvoiceId::new(), InvoiceId::new());
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name($crate::identifiers::AggregateId);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self($crate::identifiers::AggregateId::new())
            }

            /// Wraps an existing, non-blank identifier
            pub fn parse(
                id: impl ::std::convert::Into<::std::string::String>,
            ) -> ::std::result::Result<Self, $crate::error::CoreError> {
                $crate::identifiers::AggregateId::parse(id).map(Self)
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            pub fn as_aggregate_id(&self) -> &$crate::identifiers::AggregateId {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::CoreError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::std::convert::From<$crate::identifiers::AggregateId> for $name {
            fn from(id: $crate::identifiers::AggregateId) -> Self {
                Self(id)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <$crate::identifiers::AggregateId as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )
                .map(Self)
            }
        }
    };
}
