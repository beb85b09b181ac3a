//! Signed-in identity.
//!
//! Identities are fixed per role; the session store hands out copies of these
//! and never lets a caller edit the role of an active identity.

use serde::{Deserialize, Serialize};

use mfgerp_core::{DomainError, Entity, UserId};

use crate::Role;

/// An authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl User {
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        avatar: Option<String>,
    ) -> Result<Self, DomainError> {
        let user = Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            avatar,
        };
        user.validate()?;
        Ok(user)
    }

    /// Check the invariants a deserialized identity must satisfy.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.is_blank() {
            return Err(DomainError::invalid_id("UserId: empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(DomainError::validation("invalid email format"));
        }
        Ok(())
    }

    pub fn id_typed(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// First word of the display name, used in the dashboard greeting.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Avatar text, falling back to the first two characters of the name.
    pub fn initials(&self) -> String {
        match self.avatar.as_deref() {
            Some(avatar) if !avatar.is_empty() => avatar.to_string(),
            _ => self.name.chars().take(2).collect::<String>().to_uppercase(),
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The fixed identity that signs in for `role`.
pub fn identity_for(role: Role) -> User {
    let (id, name, email, avatar) = match role {
        Role::Admin => ("1", "Alex Admin", "admin@company.com", "AA"),
        Role::Manager => ("2", "Morgan Manager", "manager@company.com", "MM"),
        Role::Operator => ("3", "Oscar Operator", "operator@company.com", "OO"),
        Role::Inventory => ("4", "Ivy Inventory", "inventory@company.com", "II"),
    };

    User {
        id: UserId::from_static(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: Some(avatar.to_string()),
    }
}
