//! Strongly-typed identifiers used across the domain.
//!
//! Fixture records are keyed by short human-readable codes (`MO001`, `WO003`,
//! `BOM001-2`), so every identifier wraps a non-empty string.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a user identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Identifier of a manufacturing order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManufacturingOrderId(String);

/// Identifier of a work order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkOrderId(String);

/// Identifier of a bill of materials.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BomId(String);

/// Identifier of a single BOM line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BomItemId(String);

/// Identifier of a finished product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a stock movement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockMovementId(String);

macro_rules! impl_code_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier from a non-empty code.
            pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
                let code = code.into();
                if code.trim().is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: empty", $name)));
                }
                Ok(Self(code))
            }

            /// Identifier for a compile-time fixture code.
            ///
            /// Fixture codes are literals checked by tests; runtime input goes
            /// through [`Self::new`] or [`FromStr`].
            pub fn from_static(code: &'static str) -> Self {
                Self(code.to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_code_newtype!(UserId, "UserId");
impl_code_newtype!(ManufacturingOrderId, "ManufacturingOrderId");
impl_code_newtype!(WorkOrderId, "WorkOrderId");
impl_code_newtype!(BomId, "BomId");
impl_code_newtype!(BomItemId, "BomItemId");
impl_code_newtype!(ProductId, "ProductId");
impl_code_newtype!(StockMovementId, "StockMovementId");
