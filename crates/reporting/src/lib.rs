//! Reporting: KPI tiles and the dashboard summary.

pub mod dashboard;
pub mod kpi;

pub use dashboard::{DashboardSummary, order_volume_kpis};
pub use kpi::{Kpi, KpiFormat, KpiValue, Trend, format_currency, format_number};
