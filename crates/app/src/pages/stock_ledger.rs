use serde::Serialize;

use mfgerp_auth::{Capability, User, is_authorized};
use mfgerp_core::filter_records;
use mfgerp_inventory::{StockMovement, StockMovementFilter, StockStats, low_stock_alerts};

use crate::authz::require;
use crate::{Catalog, PageError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockLedgerPage {
    pub rows: Vec<StockMovement>,
    pub stats: StockStats,
    /// Scanned over the whole ledger, independent of the filter.
    pub low_stock_alerts: Vec<StockMovement>,
    pub can_record_movement: bool,
}

pub fn stock_ledger_page(
    user: Option<&User>,
    catalog: &Catalog,
    filter: &StockMovementFilter,
) -> Result<StockLedgerPage, PageError> {
    let user = require(user, Capability::ViewStockLedger)?;
    let movements = &catalog.stock_movements;

    let rows = filter_records(movements, filter);
    tracing::debug!(visible = rows.len(), total = movements.len(), "stock ledger page");

    Ok(StockLedgerPage {
        rows,
        stats: StockStats::from_movements(movements),
        low_stock_alerts: low_stock_alerts(movements),
        can_record_movement: is_authorized(user.role(), Capability::RecordStockMovement),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfgerp_auth::{Role, identity_for};
    use mfgerp_core::Facet;
    use mfgerp_inventory::MovementType;

    #[test]
    fn alerts_and_stats_ignore_filter() {
        let catalog = Catalog::demo().unwrap();
        let filter = StockMovementFilter::new().with_movement_type(Facet::Only(MovementType::In));
        let p = stock_ledger_page(Some(&identity_for(Role::Inventory)), &catalog, &filter).unwrap();

        assert_eq!(p.rows.len(), 1);
        assert_eq!(p.rows[0].part_number, "BOL-M8");
        assert_eq!(p.stats.total, 3);
        assert_eq!(p.low_stock_alerts.len(), 1);
        assert_eq!(p.low_stock_alerts[0].current_stock, 15);
        assert!(p.can_record_movement);
    }

    #[test]
    fn production_roles_are_forbidden() {
        let catalog = Catalog::demo().unwrap();
        for role in [Role::Manager, Role::Operator] {
            let err = stock_ledger_page(Some(&identity_for(role)), &catalog, &StockMovementFilter::new()).unwrap_err();
            assert!(err.is_forbidden());
        }
    }
}
