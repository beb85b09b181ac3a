use serde::Serialize;

use mfgerp_auth::{Capability, User, is_authorized};
use mfgerp_core::filter_records;
use mfgerp_production::{WorkOrder, WorkOrderAction, WorkOrderFilter, WorkOrderScope, WorkOrderStats};

use crate::authz::require;
use crate::{Catalog, PageError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrderRow {
    pub work_order: WorkOrder,
    /// Empty when the user may not change this work order's status.
    pub actions: Vec<WorkOrderAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrdersPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub total_label: &'static str,
    pub rows: Vec<WorkOrderRow>,
    /// Computed over the scoped set, before the UI filter.
    pub stats: WorkOrderStats,
    pub can_create: bool,
}

/// Users who may only update their own work orders only see those.
pub fn work_order_scope(user: &User) -> WorkOrderScope {
    let role = user.role();
    if !is_authorized(role, Capability::UpdateWorkOrderStatus)
        && is_authorized(role, Capability::UpdateOwnWorkOrderStatus)
    {
        WorkOrderScope::AssignedTo(user.name().to_string())
    } else {
        WorkOrderScope::All
    }
}

fn may_update(user: &User, wo: &WorkOrder) -> bool {
    let role = user.role();
    is_authorized(role, Capability::UpdateWorkOrderStatus)
        || (is_authorized(role, Capability::UpdateOwnWorkOrderStatus) && wo.is_assigned_to(user.name()))
}

pub fn work_orders_page(
    user: Option<&User>,
    catalog: &Catalog,
    filter: &WorkOrderFilter,
) -> Result<WorkOrdersPage, PageError> {
    let user = require(user, Capability::ViewWorkOrders)?;
    let scope = work_order_scope(user);
    let own = matches!(scope, WorkOrderScope::AssignedTo(_));

    let scoped = scope.apply(&catalog.work_orders);
    let stats = WorkOrderStats::from_work_orders(&scoped);
    let rows: Vec<WorkOrderRow> = filter_records(&scoped, filter)
        .into_iter()
        .map(|wo| {
            let actions = if may_update(user, &wo) {
                WorkOrderAction::available_for(wo.status).to_vec()
            } else {
                Vec::new()
            };
            WorkOrderRow { work_order: wo, actions }
        })
        .collect();

    tracing::debug!(
        scoped = scoped.len(),
        visible = rows.len(),
        own_only = own,
        "work orders page"
    );

    Ok(WorkOrdersPage {
        title: if own { "My Work Orders" } else { "Work Orders" },
        subtitle: if own {
            "Track and update your assigned work orders"
        } else {
            "Manage and assign work orders"
        },
        total_label: if own { "My Orders" } else { "Total Orders" },
        rows,
        stats,
        can_create: is_authorized(user.role(), Capability::CreateWorkOrders),
    })
}
