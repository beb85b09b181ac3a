//! Page-side authorization guard.
//!
//! Pages call this before touching any records, so the domain crates stay
//! auth-agnostic.

use mfgerp_auth::{AuthzError, Capability, User, authorize};

/// The signed-in user, if they hold `capability`.
pub fn require(user: Option<&User>, capability: Capability) -> Result<&User, AuthzError> {
    let user = user.ok_or(AuthzError::Unauthenticated)?;
    if let Err(e) = authorize(user.role(), capability) {
        tracing::warn!(user_id = %user.id_typed(), capability = %capability, "page access denied");
        return Err(e);
    }
    Ok(user)
}
