//! Role-gated navigation shell.

use crate::{Capability, Role, User, is_authorized};

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    /// Capability required for the entry to be visible.
    pub capability: Capability,
}

/// Sidebar entries in display order.
pub const NAVIGATION: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        href: "/dashboard",
        capability: Capability::ViewDashboard,
    },
    NavItem {
        title: "Manufacturing Orders",
        href: "/manufacturing-orders",
        capability: Capability::ViewManufacturingOrders,
    },
    NavItem {
        title: "Work Orders",
        href: "/work-orders",
        capability: Capability::ViewWorkOrders,
    },
    NavItem {
        title: "Bill of Materials",
        href: "/bom",
        capability: Capability::ViewBillOfMaterials,
    },
    NavItem {
        title: "Stock Ledger",
        href: "/stock-ledger",
        capability: Capability::ViewStockLedger,
    },
    NavItem {
        title: "Reports",
        href: "/reports",
        capability: Capability::ViewReports,
    },
];

/// Entries visible to `role`, in display order.
pub fn visible_navigation(role: Role) -> Vec<&'static NavItem> {
    NAVIGATION
        .iter()
        .filter(|item| is_authorized(role, item.capability))
        .collect()
}

/// Entries visible to the current session; nothing when signed out.
pub fn visible_navigation_for(user: Option<&User>) -> Vec<&'static NavItem> {
    user.map(|u| visible_navigation(u.role())).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity_for;

    fn titles(role: Role) -> Vec<&'static str> {
        visible_navigation(role).into_iter().map(|i| i.title).collect()
    }

    #[test]
    fn entries_follow_capability_table() {
        assert_eq!(titles(Role::Admin).len(), NAVIGATION.len());
        assert_eq!(
            titles(Role::Manager),
            ["Dashboard", "Manufacturing Orders", "Work Orders", "Reports"]
        );
        assert_eq!(
            titles(Role::Operator),
            ["Dashboard", "Manufacturing Orders", "Work Orders"]
        );
        assert_eq!(
            titles(Role::Inventory),
            ["Dashboard", "Bill of Materials", "Stock Ledger"]
        );
    }

    #[test]
    fn signed_out_sees_nothing() {
        assert!(visible_navigation_for(None).is_empty());
        let ivy = identity_for(Role::Inventory);
        assert_eq!(visible_navigation_for(Some(&ivy)).len(), 3);
    }
}
