//! `mfgerp-auth`: session and role-based authorization boundary.
//!
//! Authentication is a placeholder: any non-empty credentials log in as the
//! fixed identity of the requested role. The capability table
//! [`CAPABILITY_TABLE`] is the whole authorization policy.
//!
//! Persistence goes through [`SessionStorage`]; no rendering lives here.

pub mod authorize;
pub mod navigation;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod storage;
pub mod user;

pub use authorize::{AuthzError, CAPABILITY_TABLE, authorize, capabilities_for, is_authorized, is_authorized_by_name};
pub use navigation::{NAVIGATION, NavItem, visible_navigation, visible_navigation_for};
pub use permissions::Capability;
pub use roles::Role;
pub use session::{SESSION_KEY, SESSION_SCHEMA_VERSION, SessionError, SessionStore};
pub use storage::{FileSessionStorage, InMemorySessionStorage, SessionStorage, StorageError};
pub use user::{User, identity_for};
