use serde::Serialize;

use mfgerp_auth::{Capability, User, is_authorized};
use mfgerp_core::{BomId, DomainError, filter_records, find_by_id};
use mfgerp_inventory::{Bom, BomFilter, BomSummary, CostShare};

use crate::authz::require;
use crate::{Catalog, PageError};

/// The selected BOM with its summary tiles and cost panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomDetail {
    pub bom: Bom,
    pub summary: BomSummary,
    pub cost_breakdown: Vec<CostShare>,
}

impl BomDetail {
    fn of(bom: &Bom) -> Self {
        Self {
            bom: bom.clone(),
            summary: bom.summary(),
            cost_breakdown: bom.cost_breakdown(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomPage {
    pub list: Vec<Bom>,
    pub selected: Option<BomDetail>,
    pub can_edit: bool,
}

/// `selected` picks a BOM by id; without one the first BOM is shown.
///
/// The selection is independent of the list filter.
pub fn bom_page(
    user: Option<&User>,
    catalog: &Catalog,
    filter: &BomFilter,
    selected: Option<&BomId>,
) -> Result<BomPage, PageError> {
    let user = require(user, Capability::ViewBillOfMaterials)?;

    let selected = match selected {
        Some(id) => Some(
            find_by_id(&catalog.boms, id)
                .ok_or_else(|| DomainError::not_found(format!("bill of materials {id}")))?,
        ),
        None => catalog.boms.first(),
    };

    let list = filter_records(&catalog.boms, filter);
    tracing::debug!(visible = list.len(), selected = ?selected.map(|b| b.id.as_str()), "bom page");

    Ok(BomPage {
        list,
        selected: selected.map(BomDetail::of),
        can_edit: is_authorized(user.role(), Capability::EditBillOfMaterials),
    })
}
