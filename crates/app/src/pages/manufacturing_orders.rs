use serde::Serialize;

use mfgerp_auth::{Capability, User, is_authorized};
use mfgerp_core::filter_records;
use mfgerp_production::{ManufacturingOrder, OrderFilter, OrderStats};

use crate::authz::require;
use crate::{Catalog, PageError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManufacturingOrdersPage {
    pub rows: Vec<ManufacturingOrder>,
    /// Computed over all orders, not the filtered rows.
    pub stats: OrderStats,
    pub can_create: bool,
    pub can_update_status: bool,
}

pub fn manufacturing_orders_page(
    user: Option<&User>,
    catalog: &Catalog,
    filter: &OrderFilter,
) -> Result<ManufacturingOrdersPage, PageError> {
    let user = require(user, Capability::ViewManufacturingOrders)?;
    let role = user.role();

    let rows = filter_records(&catalog.manufacturing_orders, filter);
    tracing::debug!(
        visible = rows.len(),
        total = catalog.manufacturing_orders.len(),
        "manufacturing orders page"
    );

    Ok(ManufacturingOrdersPage {
        rows,
        stats: OrderStats::from_orders(&catalog.manufacturing_orders),
        can_create: is_authorized(role, Capability::CreateManufacturingOrders),
        can_update_status: is_authorized(role, Capability::UpdateManufacturingOrderStatus),
    })
}
