use core::str::FromStr;

use serde::{Deserialize, Serialize};

use mfgerp_core::DomainError;

/// Role of the signed-in user.
///
/// The set is closed: every role has a fixed identity and a fixed row in the
/// capability table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Operator,
    Inventory,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Operator, Role::Inventory];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Operator => "operator",
            Role::Inventory => "inventory",
        }
    }

    /// Label shown on the login role picker.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Production Manager",
            Role::Operator => "Shop Floor Operator",
            Role::Inventory => "Inventory Manager",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Full system access and management",
            Role::Manager => "Oversee production orders and workflows",
            Role::Operator => "Execute work orders and update status",
            Role::Inventory => "Track stock movement and materials",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown role '{s}'")))
    }
}
