//! Production domain module: manufacturing orders and work orders.
//!
//! Records are immutable fixtures. This crate only filters and summarizes
//! them; there is no IO or storage here.

pub mod manufacturing_order;
pub mod status;
pub mod work_order;

pub use manufacturing_order::{ManufacturingOrder, OrderFilter, OrderStats, priority_orders};
pub use status::{OrderStatus, Priority};
pub use work_order::{
    WorkOrder, WorkOrderAction, WorkOrderFilter, WorkOrderScope, WorkOrderStats, active_work_orders,
};
