use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mfgerp_core::{
    DomainError, Entity, Facet, RecordFilter, Searchable, StockMovementId, TextQuery, ValueObject, count_where,
};

/// Stock at or above this level is not flagged.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    In,
    Out,
    Adjustment,
}

impl MovementType {
    pub const ALL: [MovementType; 3] = [MovementType::In, MovementType::Out, MovementType::Adjustment];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::In => "in",
            MovementType::Out => "out",
            MovementType::Adjustment => "adjustment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementType::In => "Stock In",
            MovementType::Out => "Stock Out",
            MovementType::Adjustment => "Adjustment",
        }
    }
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovementType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown movement type '{s}'")))
    }
}

/// One ledger line. `current_stock` is the on-hand snapshot recorded with
/// the movement, not a running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: StockMovementId,
    pub part_number: String,
    pub description: String,
    pub movement_type: MovementType,
    /// Signed: negative for consumption.
    pub quantity: i64,
    pub unit: String,
    pub reference: String,
    pub date: NaiveDate,
    pub current_stock: i64,
}

impl StockMovement {
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.current_stock)
    }

    /// Quantity with an explicit sign, e.g. "+100" or "-10".
    pub fn signed_quantity_label(&self) -> String {
        if self.quantity > 0 {
            format!("+{}", self.quantity)
        } else {
            self.quantity.to_string()
        }
    }
}

impl Entity for StockMovement {
    type Id = StockMovementId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Searchable for StockMovement {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.part_number.as_str(), self.description.as_str()]
    }
}

pub fn is_low_stock(current_stock: i64) -> bool {
    current_stock < LOW_STOCK_THRESHOLD
}

/// Movements whose snapshot is below the threshold, in ledger order.
pub fn low_stock_alerts(movements: &[StockMovement]) -> Vec<StockMovement> {
    let alerts: Vec<StockMovement> = movements.iter().filter(|m| m.is_low_stock()).cloned().collect();
    tracing::debug!(movements = movements.len(), alerts = alerts.len(), "low stock scan");
    alerts
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockMovementFilter {
    pub query: TextQuery,
    pub movement_type: Facet<MovementType>,
}

impl StockMovementFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_movement_type(mut self, movement_type: Facet<MovementType>) -> Self {
        self.movement_type = movement_type;
        self
    }
}

impl RecordFilter<StockMovement> for StockMovementFilter {
    fn matches(&self, m: &StockMovement) -> bool {
        self.query.matches(m) && self.movement_type.matches(&m.movement_type)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StockStats {
    pub total: usize,
    pub incoming: usize,
    pub outgoing: usize,
    pub adjustments: usize,
}

impl ValueObject for StockStats {}

impl StockStats {
    pub fn from_movements(movements: &[StockMovement]) -> Self {
        let with = |t: MovementType| count_where(movements, |m| m.movement_type == t);
        Self {
            total: movements.len(),
            incoming: with(MovementType::In),
            outgoing: with(MovementType::Out),
            adjustments: with(MovementType::Adjustment),
        }
    }
}
