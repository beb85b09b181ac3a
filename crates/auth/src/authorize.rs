use thiserror::Error;

use crate::{Capability, Role};

const ADMIN: &[Capability] = &Capability::ALL;

const MANAGER: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ViewManufacturingOrders,
    Capability::CreateManufacturingOrders,
    Capability::UpdateManufacturingOrderStatus,
    Capability::ViewWorkOrders,
    Capability::CreateWorkOrders,
    Capability::AssignWorkOrders,
    Capability::UpdateWorkOrderStatus,
    Capability::ViewReports,
];

const OPERATOR: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ViewManufacturingOrders,
    Capability::UpdateManufacturingOrderStatus,
    Capability::ViewWorkOrders,
    Capability::UpdateOwnWorkOrderStatus,
];

const INVENTORY: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ViewBillOfMaterials,
    Capability::EditBillOfMaterials,
    Capability::ViewStockLedger,
    Capability::RecordStockMovement,
];

/// Static role → capability table.
///
/// This is the whole authorization policy; nothing else grants access.
pub const CAPABILITY_TABLE: &[(Role, &[Capability])] = &[
    (Role::Admin, ADMIN),
    (Role::Manager, MANAGER),
    (Role::Operator, OPERATOR),
    (Role::Inventory, INVENTORY),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("not signed in")]
    Unauthenticated,

    #[error("forbidden: role '{role}' lacks capability '{capability}'")]
    Forbidden { role: Role, capability: Capability },
}

/// Capabilities granted to `role`, in table order.
pub fn capabilities_for(role: Role) -> &'static [Capability] {
    CAPABILITY_TABLE
        .iter()
        .find(|(r, _)| *r == role)
        .map(|(_, caps)| *caps)
        .unwrap_or(&[])
}

/// Pure policy check: same input, same answer.
pub fn is_authorized(role: Role, capability: Capability) -> bool {
    capabilities_for(role).contains(&capability)
}

/// Policy check by name. Unknown roles or capability names are never authorized.
pub fn is_authorized_by_name(role: &str, capability: &str) -> bool {
    match (role.parse::<Role>(), capability.parse::<Capability>()) {
        (Ok(role), Ok(capability)) => is_authorized(role, capability),
        _ => false,
    }
}

/// Result-returning variant of [`is_authorized`] for `?` at page boundaries.
///
/// - No IO
/// - No panics
pub fn authorize(role: Role, capability: Capability) -> Result<(), AuthzError> {
    if is_authorized(role, capability) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden { role, capability })
    }
}
