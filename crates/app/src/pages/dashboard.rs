use serde::Serialize;

use mfgerp_auth::{Capability, User};
use mfgerp_reporting::DashboardSummary;

use crate::authz::require;
use crate::{Catalog, PageError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardPage {
    pub greeting: String,
    pub summary: DashboardSummary,
}

pub fn dashboard_page(user: Option<&User>, catalog: &Catalog) -> Result<DashboardPage, PageError> {
    let user = require(user, Capability::ViewDashboard)?;
    let summary = DashboardSummary::build(&catalog.kpis, &catalog.manufacturing_orders, &catalog.work_orders);

    Ok(DashboardPage {
        greeting: format!("Welcome back, {}!", user.first_name()),
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mfgerp_auth::{Role, identity_for};

    #[test]
    fn every_role_sees_the_same_dashboard_data() {
        let catalog = Catalog::demo().unwrap();
        for role in Role::ALL {
            let page = dashboard_page(Some(&identity_for(role)), &catalog).unwrap();
            assert_eq!(page.summary.kpis.len(), 4);
            assert_eq!(page.summary.priority_orders.len(), 1);
            assert_eq!(page.summary.priority_orders[0].order_number, "MO-2024-004");
            assert_eq!(page.summary.active_work_orders.len(), 1);
        }
    }

    #[test]
    fn greeting_uses_first_name() {
        let catalog = Catalog::demo().unwrap();
        let page = dashboard_page(Some(&identity_for(Role::Manager)), &catalog).unwrap();
        assert_eq!(page.greeting, "Welcome back, Morgan!");
    }

    #[test]
    fn signed_out_is_rejected() {
        let catalog = Catalog::demo().unwrap();
        assert!(dashboard_page(None, &catalog).unwrap_err().is_unauthenticated());
    }
}
