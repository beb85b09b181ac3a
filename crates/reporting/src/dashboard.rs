use serde::Serialize;

use mfgerp_production::{ManufacturingOrder, OrderStats, WorkOrder, active_work_orders, priority_orders};

use crate::{Kpi, KpiFormat};

/// Everything the dashboard page shows below the greeting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub kpis: Vec<Kpi>,
    pub priority_orders: Vec<ManufacturingOrder>,
    pub active_work_orders: Vec<WorkOrder>,
}

impl DashboardSummary {
    /// Tiles keep the order, change and trend of `kpis`; the values of the
    /// order-volume tiles are recomputed from `orders`.
    pub fn build(kpis: &[Kpi], orders: &[ManufacturingOrder], work_orders: &[WorkOrder]) -> Self {
        let summary = Self {
            kpis: with_derived_values(kpis, &order_volume_kpis(orders)),
            priority_orders: priority_orders(orders),
            active_work_orders: active_work_orders(work_orders),
        };
        tracing::debug!(
            kpis = summary.kpis.len(),
            priority_orders = summary.priority_orders.len(),
            active_work_orders = summary.active_work_orders.len(),
            "dashboard summary built"
        );
        summary
    }
}

fn with_derived_values(kpis: &[Kpi], derived: &[Kpi]) -> Vec<Kpi> {
    kpis.iter()
        .map(|kpi| match derived.iter().find(|d| d.title == kpi.title) {
            Some(d) => Kpi {
                value: d.value.clone(),
                format: d.format,
                ..kpi.clone()
            },
            None => kpi.clone(),
        })
        .collect()
}

/// Order-volume tiles computed from the order list.
pub fn order_volume_kpis(orders: &[ManufacturingOrder]) -> [Kpi; 2] {
    let stats = OrderStats::from_orders(orders);
    [
        Kpi::new("Total Orders", stats.total as f64).with_format(KpiFormat::Number),
        Kpi::new("Completed Orders", stats.completed as f64).with_format(KpiFormat::Number),
    ]
}
