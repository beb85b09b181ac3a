use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Capability a role may hold (navigation entry or page action).
///
/// Capabilities have stable dotted names (e.g. `"work_orders.assign"`) so a
/// rendering layer can ask about them without linking the enum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Capability {
    ViewDashboard,
    ViewManufacturingOrders,
    CreateManufacturingOrders,
    UpdateManufacturingOrderStatus,
    ViewWorkOrders,
    CreateWorkOrders,
    AssignWorkOrders,
    /// Update the status of any work order.
    UpdateWorkOrderStatus,
    /// Update the status of work orders assigned to oneself.
    UpdateOwnWorkOrderStatus,
    ViewBillOfMaterials,
    EditBillOfMaterials,
    ViewStockLedger,
    RecordStockMovement,
    ViewReports,
}

impl Capability {
    pub const ALL: [Capability; 14] = [
        Capability::ViewDashboard,
        Capability::ViewManufacturingOrders,
        Capability::CreateManufacturingOrders,
        Capability::UpdateManufacturingOrderStatus,
        Capability::ViewWorkOrders,
        Capability::CreateWorkOrders,
        Capability::AssignWorkOrders,
        Capability::UpdateWorkOrderStatus,
        Capability::UpdateOwnWorkOrderStatus,
        Capability::ViewBillOfMaterials,
        Capability::EditBillOfMaterials,
        Capability::ViewStockLedger,
        Capability::RecordStockMovement,
        Capability::ViewReports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::ViewDashboard => "dashboard.view",
            Capability::ViewManufacturingOrders => "manufacturing_orders.view",
            Capability::CreateManufacturingOrders => "manufacturing_orders.create",
            Capability::UpdateManufacturingOrderStatus => "manufacturing_orders.update_status",
            Capability::ViewWorkOrders => "work_orders.view",
            Capability::CreateWorkOrders => "work_orders.create",
            Capability::AssignWorkOrders => "work_orders.assign",
            Capability::UpdateWorkOrderStatus => "work_orders.update_status",
            Capability::UpdateOwnWorkOrderStatus => "work_orders.update_own_status",
            Capability::ViewBillOfMaterials => "bom.view",
            Capability::EditBillOfMaterials => "bom.edit",
            Capability::ViewStockLedger => "stock_ledger.view",
            Capability::RecordStockMovement => "stock_ledger.record",
            Capability::ViewReports => "reports.view",
        }
    }

    /// Module prefix of the dotted name (`"work_orders"`, `"bom"`, ...).
    pub fn category(&self) -> &'static str {
        let name = self.as_str();
        name.split_once('.').map_or(name, |(module, _)| module)
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown capability name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability '{0}'")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCapability(s.to_string()))
    }
}

impl From<Capability> for &'static str {
    fn from(value: Capability) -> Self {
        value.as_str()
    }
}

impl TryFrom<String> for Capability {
    type Error = UnknownCapability;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
