use serde::{Deserialize, Serialize};

use mfgerp_core::{BomId, BomItemId, Entity, ProductId, RecordFilter, Searchable, TextQuery, ValueObject};

/// One component line of a bill of materials. `cost` is per unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    pub id: BomItemId,
    pub part_number: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub cost: f64,
    pub supplier: Option<String>,
}

impl BomItem {
    pub fn line_cost(&self) -> f64 {
        self.quantity * self.cost
    }
}

impl Entity for BomItem {
    type Id = BomItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Bill of materials for one product version.
///
/// `total_cost` is the recorded figure; it is never recomputed from the
/// lines and may differ from their sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    pub id: BomId,
    pub product_id: ProductId,
    pub product_name: String,
    pub version: String,
    pub items: Vec<BomItem>,
    pub total_cost: f64,
}

impl Bom {
    pub fn component_count(&self) -> usize {
        self.items.len()
    }

    pub fn summary(&self) -> BomSummary {
        BomSummary::from_bom(self)
    }

    pub fn cost_breakdown(&self) -> Vec<CostShare> {
        cost_breakdown(&self.items, self.total_cost)
    }
}

impl Entity for Bom {
    type Id = BomId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Searchable for Bom {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_name.as_str(), self.product_id.as_str()]
    }
}

/// BOM list filter (text only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BomFilter {
    pub query: TextQuery,
}

impl BomFilter {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            query: TextQuery::new(query),
        }
    }
}

impl RecordFilter<Bom> for BomFilter {
    fn matches(&self, bom: &Bom) -> bool {
        self.query.matches(bom)
    }
}

/// Summary tiles of a selected BOM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BomSummary {
    pub component_count: usize,
    pub total_cost: f64,
    pub average_component_cost: f64,
}

impl ValueObject for BomSummary {}

impl BomSummary {
    pub fn from_bom(bom: &Bom) -> Self {
        let count = bom.component_count();
        let average_component_cost = if count == 0 {
            0.0
        } else {
            bom.total_cost / count as f64
        };
        Self {
            component_count: count,
            total_cost: bom.total_cost,
            average_component_cost,
        }
    }
}

/// One line of the cost breakdown panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostShare {
    pub part_number: String,
    pub line_cost: f64,
    /// Share of the recorded total, in percent, one decimal.
    pub percentage: f64,
}

/// `line_cost / total_cost * 100` rounded to one decimal, for a single line
/// shown on its own.
///
/// A zero, negative or non-finite total yields 0.
pub fn cost_percentage(line_cost: f64, total_cost: f64) -> f64 {
    if !total_cost.is_finite() || total_cost <= 0.0 {
        return 0.0;
    }
    let pct = line_cost / total_cost * 100.0;
    if pct.is_finite() {
        (pct * 10.0).round() / 10.0
    } else {
        0.0
    }
}

/// Per-line shares of `total_cost`, one decimal each.
///
/// Shares are rounded by largest remainder: every line is floored to a
/// tenth, then the lines with the largest remainders gain 0.1 until the
/// shares add up to the rounded sum of the raw shares. Lines summing to
/// `total_cost` therefore give exactly 100.0. A zero, negative or
/// non-finite total yields 0 for every line.
pub fn cost_breakdown(items: &[BomItem], total_cost: f64) -> Vec<CostShare> {
    let tenths = share_tenths(items, total_cost);
    items
        .iter()
        .zip(tenths)
        .map(|(item, t)| CostShare {
            part_number: item.part_number.clone(),
            line_cost: item.line_cost(),
            percentage: t as f64 / 10.0,
        })
        .collect()
}

fn share_tenths(items: &[BomItem], total_cost: f64) -> Vec<i64> {
    if !total_cost.is_finite() || total_cost <= 0.0 {
        return vec![0; items.len()];
    }

    let raw: Vec<f64> = items
        .iter()
        .map(|item| {
            let r = item.line_cost() / total_cost * 1000.0;
            if r.is_finite() { r } else { 0.0 }
        })
        .collect();

    let mut tenths: Vec<i64> = raw.iter().map(|r| r.floor() as i64).collect();
    let target = raw.iter().sum::<f64>().round() as i64;
    let floored: i64 = tenths.iter().sum();
    let deficit = usize::try_from(target - floored).unwrap_or(0).min(items.len());

    let mut by_remainder: Vec<usize> = (0..raw.len()).collect();
    by_remainder.sort_by(|&a, &b| {
        let ra = raw[a] - raw[a].floor();
        let rb = raw[b] - raw[b].floor();
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &i in by_remainder.iter().take(deficit) {
        tenths[i] += 1;
    }

    tracing::debug!(lines = items.len(), total_tenths = target, "cost breakdown rounded");
    tenths
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfgerp_core::filter_records;
    use proptest::prelude::*;

    fn item(n: u32, part: &str, quantity: f64, cost: f64) -> BomItem {
        BomItem {
            id: BomItemId::new(format!("BOM001-{n}")).unwrap(),
            part_number: part.to_string(),
            description: part.to_string(),
            quantity,
            unit: "pcs".to_string(),
            cost,
            supplier: None,
        }
    }

    fn bracket() -> Bom {
        Bom {
            id: BomId::from_static("BOM001"),
            product_id: ProductId::from_static("PROD001"),
            product_name: "Steel Bracket Assembly".to_string(),
            version: "v1.2".to_string(),
            items: vec![
                item(1, "STL-001", 2.0, 12.50),
                item(2, "BOL-M8", 4.0, 0.75),
                item(3, "WSH-M8", 4.0, 0.25),
            ],
            total_cost: 45.67,
        }
    }

    #[test]
    fn breakdown_uses_recorded_total() {
        let shares = bracket().cost_breakdown();
        let pcts: Vec<f64> = shares.iter().map(|s| s.percentage).collect();
        assert_eq!(pcts, [54.7, 6.6, 2.2]);
        assert_eq!(shares[0].line_cost, 25.0);
        assert_eq!(shares[1].line_cost, 3.0);
    }

    #[test]
    fn equal_lines_still_sum_to_hundred() {
        let items: Vec<BomItem> = (1..=6).map(|n| item(n, "P", 1.0, 1.0)).collect();
        let pcts: Vec<f64> = cost_breakdown(&items, 6.0).iter().map(|s| s.percentage).collect();
        assert_eq!(pcts, [16.7, 16.7, 16.7, 16.7, 16.6, 16.6]);
        let sum: f64 = pcts.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9, "sum {sum}");

        let thirds: Vec<BomItem> = (1..=3).map(|n| item(n, "P", 1.0, 1.0)).collect();
        let pcts: Vec<f64> = cost_breakdown(&thirds, 3.0).iter().map(|s| s.percentage).collect();
        assert_eq!(pcts, [33.4, 33.3, 33.3]);
    }

    #[test]
    fn zero_total_yields_zero_percent() {
        let mut bom = bracket();
        bom.total_cost = 0.0;
        assert!(bom.cost_breakdown().iter().all(|s| s.percentage == 0.0));
        assert_eq!(cost_percentage(5.0, f64::NAN), 0.0);
        assert_eq!(cost_percentage(5.0, -1.0), 0.0);
    }

    #[test]
    fn summary_tiles() {
        let s = bracket().summary();
        assert_eq!(s.component_count, 3);
        assert_eq!(s.total_cost, 45.67);
        assert!((s.average_component_cost - 15.223_333).abs() < 1e-4);

        let mut empty = bracket();
        empty.items.clear();
        assert_eq!(empty.summary().average_component_cost, 0.0);
    }

    #[test]
    fn search_by_product_name_or_id() {
        let boms = vec![bracket()];
        assert_eq!(filter_records(&boms, &BomFilter::new("bracket")).len(), 1);
        assert_eq!(filter_records(&boms, &BomFilter::new("prod001")).len(), 1);
        assert!(filter_records(&boms, &BomFilter::new("STL-001")).is_empty());
        assert_eq!(filter_records(&boms, &BomFilter::default()).len(), 1);
    }

    proptest! {
        #[test]
        fn shares_sum_to_hundred_when_total_matches_lines(
            lines in prop::collection::vec((1u32..50, 1u32..10_000), 1..12),
        ) {
            let items: Vec<BomItem> = lines
                .iter()
                .enumerate()
                .map(|(i, &(q, cents))| item(i as u32, "P", q as f64, cents as f64 / 100.0))
                .collect();
            let total: f64 = items.iter().map(BomItem::line_cost).sum();

            let shares = cost_breakdown(&items, total);
            let sum: f64 = shares.iter().map(|s| s.percentage).sum();
            prop_assert!((sum - 100.0).abs() <= 0.1 + 1e-9, "sum {}", sum);
            prop_assert!(shares.iter().all(|s| (s.percentage * 10.0 - (s.percentage * 10.0).round()).abs() < 1e-9));
        }
    }
}
