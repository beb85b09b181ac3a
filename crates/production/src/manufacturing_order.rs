use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mfgerp_core::{
    Entity, Facet, ManufacturingOrderId, RecordFilter, Searchable, TextQuery, ValueObject, count_where,
};

use crate::{OrderStatus, Priority};

/// A production run request for a quantity of a finished product.
///
/// `progress` and `completed_quantity` are supplied independently; no
/// relationship between them is enforced or derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManufacturingOrder {
    pub id: ManufacturingOrderId,
    pub order_number: String,
    pub product_name: String,
    pub quantity: u32,
    pub status: OrderStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub completed_quantity: u32,
    pub assigned_to: Option<String>,
    /// Percent complete, 0–100.
    pub progress: u8,
}

impl ManufacturingOrder {
    pub fn assignee_label(&self) -> &str {
        self.assigned_to.as_deref().unwrap_or("Unassigned")
    }

    /// Shown in the dashboard's priority list: urgent, or running late.
    pub fn needs_attention(&self) -> bool {
        self.priority == Priority::Urgent || self.status == OrderStatus::Delayed
    }
}

impl Entity for ManufacturingOrder {
    type Id = ManufacturingOrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Searchable for ManufacturingOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.order_number.as_str(), self.product_name.as_str()]
    }
}

/// Manufacturing order list filter: text AND status AND priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub query: TextQuery,
    pub status: Facet<OrderStatus>,
    pub priority: Facet<Priority>,
}

impl OrderFilter {
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

    pub fn with_priority(mut self, priority: Facet<Priority>) -> Self {
        self.priority = priority;
        self
    }
}

impl RecordFilter<ManufacturingOrder> for OrderFilter {
    fn matches(&self, order: &ManufacturingOrder) -> bool {
        self.query.matches(order) && self.status.matches(&order.status) && self.priority.matches(&order.priority)
    }
}

/// Stat tiles of the manufacturing orders page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderStats {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub delayed: usize,
}

impl ValueObject for OrderStats {}

impl OrderStats {
    pub fn from_orders(orders: &[ManufacturingOrder]) -> Self {
        let with = |status: OrderStatus| count_where(orders, |o| o.status == status);
        Self {
            total: orders.len(),
            in_progress: with(OrderStatus::InProgress),
            completed: with(OrderStatus::Completed),
            delayed: with(OrderStatus::Delayed),
        }
    }
}

/// Orders that need attention, in source order.
pub fn priority_orders(orders: &[ManufacturingOrder]) -> Vec<ManufacturingOrder> {
    orders.iter().filter(|o| o.needs_attention()).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfgerp_core::filter_records;
    use proptest::prelude::*;

    fn order(n: u32, product: &str, status: OrderStatus, priority: Priority) -> ManufacturingOrder {
        ManufacturingOrder {
            id: ManufacturingOrderId::new(format!("MO{n:03}")).unwrap(),
            order_number: format!("MO-2024-{n:03}"),
            product_name: product.to_string(),
            quantity: 100,
            status,
            priority,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            completed_quantity: 0,
            assigned_to: None,
            progress: 0,
        }
    }

    fn sample() -> Vec<ManufacturingOrder> {
        vec![
            order(1, "Steel Bracket Assembly", OrderStatus::InProgress, Priority::High),
            order(2, "Aluminum Housing", OrderStatus::Planned, Priority::Medium),
            order(3, "Circuit Board PCB", OrderStatus::Completed, Priority::Low),
            order(4, "Motor Assembly", OrderStatus::Delayed, Priority::Urgent),
        ]
    }

    #[test]
    fn query_matches_order_number_or_product() {
        let orders = sample();
        let by_product = filter_records(&orders, &OrderFilter::new().with_query("assembly"));
        assert_eq!(by_product.len(), 2);
        assert_eq!(by_product[0].order_number, "MO-2024-001");
        assert_eq!(by_product[1].order_number, "MO-2024-004");

        let by_number = filter_records(&orders, &OrderFilter::new().with_query("mo-2024-003"));
        assert_eq!(by_number.len(), 1);
    }

    #[test]
    fn facets_combine_with_and() {
        let orders = sample();
        let filter = OrderFilter::new()
            .with_query("assembly")
            .with_priority(Facet::Only(Priority::Urgent));
        let visible = filter_records(&orders, &filter);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].product_name, "Motor Assembly");

        let none = filter_records(&orders, &filter.with_status(Facet::Only(OrderStatus::Planned)));
        assert!(none.is_empty());
    }

    #[test]
    fn stats_count_by_status() {
        assert_eq!(
            OrderStats::from_orders(&sample()),
            OrderStats {
                total: 4,
                in_progress: 1,
                completed: 1,
                delayed: 1
            }
        );
        assert_eq!(OrderStats::from_orders(&[]), OrderStats::default());
    }

    #[test]
    fn priority_list_is_urgent_or_delayed() {
        let mut orders = sample();
        orders.push(order(5, "Gearbox", OrderStatus::Delayed, Priority::Low));
        let numbers: Vec<String> = priority_orders(&orders).into_iter().map(|o| o.order_number).collect();
        assert_eq!(numbers, ["MO-2024-004", "MO-2024-005"]);
    }

    #[test]
    fn unassigned_label() {
        let mut o = order(1, "X", OrderStatus::Planned, Priority::Low);
        assert_eq!(o.assignee_label(), "Unassigned");
        o.assigned_to = Some("Oscar Operator".to_string());
        assert_eq!(o.assignee_label(), "Oscar Operator");
    }

    fn arb_orders() -> impl Strategy<Value = Vec<ManufacturingOrder>> {
        prop::collection::vec((0usize..5, 0usize..4), 0..25).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (s, p))| order(i as u32 + 1, "Widget", OrderStatus::ALL[s], Priority::ALL[p]))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn status_facet_selects_exactly_matching(orders in arb_orders(), s in 0usize..5) {
            let status = OrderStatus::ALL[s];
            let visible = filter_records(&orders, &OrderFilter::new().with_status(Facet::Only(status)));
            prop_assert_eq!(visible.len(), orders.iter().filter(|o| o.status == status).count());
        }

        #[test]
        fn default_filter_keeps_everything(orders in arb_orders()) {
            prop_assert_eq!(filter_records(&orders, &OrderFilter::new()), orders);
        }
    }
}
