use thiserror::Error;

use mfgerp_auth::AuthzError;
use mfgerp_core::DomainError;

/// Why a page could not be produced.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Authz(#[from] AuthzError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl PageError {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, PageError::Authz(AuthzError::Forbidden { .. }))
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, PageError::Authz(AuthzError::Unauthenticated))
    }
}
