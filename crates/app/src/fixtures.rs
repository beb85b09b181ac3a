//! Demo records, embedded at build time and loaded once at startup.

use serde::Deserialize;
use thiserror::Error;

use mfgerp_inventory::{Bom, StockMovement};
use mfgerp_production::{ManufacturingOrder, WorkOrder};
use mfgerp_reporting::Kpi;

const DEMO_FIXTURES: &str = include_str!("../fixtures/demo.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture data is not valid json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid fixture record: {0}")]
    Invalid(String),
}

/// Every record the pages read from. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    pub manufacturing_orders: Vec<ManufacturingOrder>,
    pub work_orders: Vec<WorkOrder>,
    pub boms: Vec<Bom>,
    pub stock_movements: Vec<StockMovement>,
    pub kpis: Vec<Kpi>,
}

impl Catalog {
    /// The bundled demo data set.
    pub fn demo() -> Result<Self, FixtureError> {
        Self::from_json(DEMO_FIXTURES)
    }

    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        catalog.validate()?;
        tracing::debug!(
            manufacturing_orders = catalog.manufacturing_orders.len(),
            work_orders = catalog.work_orders.len(),
            boms = catalog.boms.len(),
            stock_movements = catalog.stock_movements.len(),
            "fixtures loaded"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), FixtureError> {
        if let Some(mo) = self.manufacturing_orders.iter().find(|mo| mo.id.is_blank()) {
            return Err(FixtureError::Invalid(format!("order {} has a blank id", mo.order_number)));
        }
        if let Some(mo) = self.manufacturing_orders.iter().find(|mo| mo.progress > 100) {
            return Err(FixtureError::Invalid(format!(
                "order {} has progress {} above 100",
                mo.id, mo.progress
            )));
        }
        if let Some(wo) = self.work_orders.iter().find(|wo| wo.id.is_blank()) {
            return Err(FixtureError::Invalid(format!("work order {} has a blank id", wo.order_number)));
        }
        if let Some(bom) = self.boms.iter().find(|b| b.id.is_blank()) {
            return Err(FixtureError::Invalid(format!("bom for {} has a blank id", bom.product_name)));
        }
        if let Some(m) = self.stock_movements.iter().find(|m| m.id.is_blank()) {
            return Err(FixtureError::Invalid(format!("stock movement for {} has a blank id", m.part_number)));
        }
        Ok(())
    }
}
