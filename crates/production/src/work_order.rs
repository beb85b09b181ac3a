use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use mfgerp_core::{
    Entity, Facet, ManufacturingOrderId, RecordFilter, Searchable, TextQuery, ValueObject, WorkOrderId,
    count_where, filter_records,
};

use crate::OrderStatus;

/// A single operation step on the shop floor, owned by one operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: WorkOrderId,
    pub order_number: String,
    pub operation: String,
    /// Display name of the responsible operator.
    pub assigned_to: String,
    pub status: OrderStatus,
    pub estimated_hours: f64,
    pub actual_hours: Option<f64>,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    /// Parent order; not checked against the order list.
    pub manufacturing_order_id: ManufacturingOrderId,
}

impl WorkOrder {
    pub fn is_assigned_to(&self, name: &str) -> bool {
        self.assigned_to == name
    }

    /// "actual / estimated" hours, with missing actuals shown as zero.
    pub fn hours_label(&self) -> String {
        format!("{}h / {}h", self.actual_hours.unwrap_or(0.0), self.estimated_hours)
    }
}

impl Entity for WorkOrder {
    type Id = WorkOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Searchable for WorkOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.order_number.as_str(), self.operation.as_str()]
    }
}

/// Ownership scope applied before any UI filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WorkOrderScope {
    #[default]
    All,
    AssignedTo(String),
}

impl WorkOrderScope {
    pub fn apply(&self, work_orders: &[WorkOrder]) -> Vec<WorkOrder> {
        filter_records(work_orders, self)
    }
}

impl RecordFilter<WorkOrder> for WorkOrderScope {
    fn matches(&self, wo: &WorkOrder) -> bool {
        match self {
            WorkOrderScope::All => true,
            WorkOrderScope::AssignedTo(name) => wo.is_assigned_to(name),
        }
    }
}

/// Work order list filter: text AND status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderFilter {
    pub query: TextQuery,
    pub status: Facet<OrderStatus>,
}

impl WorkOrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_status(mut self, status: Facet<OrderStatus>) -> Self {
        self.status = status;
        self
    }
}

impl RecordFilter<WorkOrder> for WorkOrderFilter {
    fn matches(&self, wo: &WorkOrder) -> bool {
        self.query.matches(wo) && self.status.matches(&wo.status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WorkOrderStats {
    pub total: usize,
    pub in_progress: usize,
    pub planned: usize,
    pub completed: usize,
}

impl ValueObject for WorkOrderStats {}

impl WorkOrderStats {
    pub fn from_work_orders(work_orders: &[WorkOrder]) -> Self {
        let with = |status: OrderStatus| count_where(work_orders, |wo| wo.status == status);
        Self {
            total: work_orders.len(),
            in_progress: with(OrderStatus::InProgress),
            planned: with(OrderStatus::Planned),
            completed: with(OrderStatus::Completed),
        }
    }
}

/// Row action offered for a work order in a given status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkOrderAction {
    Start,
    Pause,
    Complete,
    /// Terminal marker; rendered but not actionable.
    Completed,
}

impl WorkOrderAction {
    pub fn label(&self) -> &'static str {
        match self {
            WorkOrderAction::Start => "Start",
            WorkOrderAction::Pause => "Pause",
            WorkOrderAction::Complete => "Complete",
            WorkOrderAction::Completed => "Completed",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, WorkOrderAction::Completed)
    }

    pub fn available_for(status: OrderStatus) -> &'static [WorkOrderAction] {
        match status {
            OrderStatus::Planned => &[WorkOrderAction::Start],
            OrderStatus::InProgress => &[WorkOrderAction::Pause, WorkOrderAction::Complete],
            OrderStatus::Completed => &[WorkOrderAction::Completed],
            OrderStatus::Delayed | OrderStatus::Cancelled => &[],
        }
    }
}

/// Work orders currently running, in source order.
pub fn active_work_orders(work_orders: &[WorkOrder]) -> Vec<WorkOrder> {
    work_orders
        .iter()
        .filter(|wo| wo.status == OrderStatus::InProgress)
        .cloned()
        .collect()
}
