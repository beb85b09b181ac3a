//! Page view models, one module per sidebar entry.
//!
//! Every page first checks the page capability via [`crate::authz::require`],
//! then narrows and filters the catalog records.

pub mod bom;
pub mod dashboard;
pub mod manufacturing_orders;
pub mod stock_ledger;
pub mod work_orders;

pub use bom::{BomDetail, BomPage, bom_page};
pub use dashboard::{DashboardPage, dashboard_page};
pub use manufacturing_orders::{ManufacturingOrdersPage, manufacturing_orders_page};
pub use stock_ledger::{StockLedgerPage, stock_ledger_page};
pub use work_orders::{WorkOrderRow, WorkOrdersPage, work_order_scope, work_orders_page};
