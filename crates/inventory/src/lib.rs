//! Inventory domain module: stock ledger and bills of materials.
//!
//! Pure read-side logic over fixture records (no IO, no storage).

pub mod bom;
pub mod stock;

pub use bom::{Bom, BomFilter, BomItem, BomSummary, CostShare, cost_breakdown, cost_percentage};
pub use stock::{
    LOW_STOCK_THRESHOLD, MovementType, StockMovement, StockMovementFilter, StockStats, is_low_stock,
    low_stock_alerts,
};
