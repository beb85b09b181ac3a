//! Session store: at most one signed-in identity per process.
//!
//! The active identity is mirrored into a single [`SessionStorage`] slot so it
//! survives a restart. The slot is a cache, not an authority: anything that
//! fails to parse into a valid [`User`] is discarded and the store starts
//! signed out.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Capability, Role, SessionStorage, StorageError, User, identity_for, is_authorized};

/// Fixed key of the persisted session slot.
pub const SESSION_KEY: &str = "mfgerp.session.user";

/// Current layout version of the persisted session record.
pub const SESSION_SCHEMA_VERSION: u32 = 1;

/// Default simulated sign-in latency.
pub const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid role '{0}'")]
    InvalidRole(String),

    #[error("malformed session: {0}")]
    MalformedSession(String),

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// On-disk layout of the session slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedSession {
    schema_version: u32,
    user: User,
}

fn encode_session(user: &User) -> Result<String, SessionError> {
    serde_json::to_string(&PersistedSession {
        schema_version: SESSION_SCHEMA_VERSION,
        user: user.clone(),
    })
    .map_err(|e| SessionError::MalformedSession(e.to_string()))
}

fn decode_session(raw: &str) -> Result<User, SessionError> {
    let persisted: PersistedSession =
        serde_json::from_str(raw).map_err(|e| SessionError::MalformedSession(e.to_string()))?;

    if persisted.schema_version != SESSION_SCHEMA_VERSION {
        return Err(SessionError::MalformedSession(format!(
            "unsupported schema version {} (expected {})",
            persisted.schema_version, SESSION_SCHEMA_VERSION
        )));
    }

    persisted
        .user
        .validate()
        .map_err(|e| SessionError::MalformedSession(e.to_string()))?;

    Ok(persisted.user)
}

/// Holds the signed-in identity and answers capability questions about it.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<User>,
    login_latency: Duration,
}

impl<S: SessionStorage> SessionStore<S> {
    /// A signed-out store; the slot is not read.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: None,
            login_latency: DEFAULT_LOGIN_LATENCY,
        }
    }

    /// A store seeded from the persisted slot.
    ///
    /// Never fails: an unreadable or malformed slot yields a signed-out store,
    /// and a malformed slot is cleared.
    pub fn restore(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.current = store.load();
        store
    }

    pub fn with_login_latency(mut self, latency: Duration) -> Self {
        self.login_latency = latency;
        self
    }

    fn load(&self) -> Option<User> {
        let raw = match self.storage.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "session slot unreadable; starting signed out");
                return None;
            }
        };

        match decode_session(&raw) {
            Ok(user) => {
                tracing::info!(user_id = %user.id_typed(), role = %user.role(), "session restored");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed session");
                if let Err(e) = self.storage.remove(SESSION_KEY) {
                    tracing::warn!(error = %e, "failed to clear malformed session slot");
                }
                None
            }
        }
    }

    fn persist(&self, user: &User) -> Result<(), SessionError> {
        let raw = encode_session(user)?;
        self.storage.set(SESSION_KEY, &raw)?;
        Ok(())
    }

    /// Sign in as the fixed identity for `role`.
    ///
    /// Credentials must be non-empty but are not verified. Resolves after the
    /// configured latency; the delay is not cancelable.
    pub async fn try_login(&mut self, email: &str, password: &str, role: &str) -> Result<User, SessionError> {
        if !self.login_latency.is_zero() {
            tokio::time::sleep(self.login_latency).await;
        }

        if email.trim().is_empty() {
            return Err(SessionError::InvalidCredentials("email cannot be empty".to_string()));
        }
        if password.trim().is_empty() {
            return Err(SessionError::InvalidCredentials("password cannot be empty".to_string()));
        }

        let role: Role = role
            .parse()
            .map_err(|_| SessionError::InvalidRole(role.to_string()))?;
        let user = identity_for(role);

        // The slot is best-effort; the in-memory session is authoritative.
        if let Err(e) = self.persist(&user) {
            tracing::warn!(error = %e, "failed to persist session");
        }

        tracing::info!(user_id = %user.id_typed(), role = %role, "signed in");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Boolean form of [`Self::try_login`]: failures are logged, never raised.
    pub async fn login(&mut self, email: &str, password: &str, role: &str) -> bool {
        match self.try_login(email, password, role).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "sign-in rejected");
                false
            }
        }
    }

    /// Clear the active identity and the persisted slot. Idempotent.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            tracing::info!(user_id = %user.id_typed(), "signed out");
        }
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            tracing::warn!(error = %e, "failed to clear session slot");
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the signed-in user holds `capability`; false when signed out.
    pub fn can(&self, capability: Capability) -> bool {
        self.current
            .as_ref()
            .is_some_and(|u| is_authorized(u.role(), capability))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::InMemorySessionStorage;

    fn store(storage: Arc<InMemorySessionStorage>) -> SessionStore<Arc<InMemorySessionStorage>> {
        SessionStore::new(storage).with_login_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn known_roles_sign_in_as_fixed_identity() {
        for role in Role::ALL {
            let mut s = store(Arc::new(InMemorySessionStorage::new()));
            assert!(s.login("someone@company.com", "pw", role.as_str()).await);
            assert_eq!(s.current_user(), Some(&identity_for(role)));
        }
    }

    #[tokio::test]
    async fn unknown_role_fails_without_side_effects() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let mut s = store(storage.clone());

        assert!(!s.login("a@b.c", "pw", "supervisor").await);
        assert!(!s.is_authenticated());
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);

        let err = s.try_login("a@b.c", "pw", "ADMIN").await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidRole(r) if r == "ADMIN"));
    }

    #[tokio::test]
    async fn empty_credentials_are_rejected() {
        let mut s = store(Arc::new(InMemorySessionStorage::new()));
        assert!(matches!(
            s.try_login("", "pw", "admin").await,
            Err(SessionError::InvalidCredentials(_))
        ));
        assert!(matches!(
            s.try_login("a@b.c", "", "admin").await,
            Err(SessionError::InvalidCredentials(_))
        ));
        assert!(!s.is_authenticated());
    }

    #[tokio::test]
    async fn whitespace_only_credentials_count_as_empty() {
        let mut s = store(Arc::new(InMemorySessionStorage::new()));
        for (email, password) in [("   ", "pw"), ("a@b.c", "   "), ("\t", "\n")] {
            assert!(
                matches!(
                    s.try_login(email, password, "admin").await,
                    Err(SessionError::InvalidCredentials(_))
                ),
                "accepted {email:?}/{password:?}"
            );
        }
        assert!(!s.is_authenticated());
        assert!(s.login(" a@b.c ", " pw ", "admin").await);
    }

    #[tokio::test]
    async fn session_survives_restart_until_logout() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let mut first = store(storage.clone());
        assert!(first.login("m@company.com", "pw", "manager").await);

        let mut second = SessionStore::restore(storage.clone());
        assert_eq!(second.current_user(), Some(&identity_for(Role::Manager)));

        second.logout();
        second.logout();
        assert!(second.current_user().is_none());
        assert!(SessionStore::restore(storage).current_user().is_none());
    }

    #[test]
    fn malformed_slot_fails_closed_and_is_cleared() {
        for raw in [
            "not json",
            "{\"schema_version\":1}",
            "{\"schema_version\":1,\"user\":{\"id\":\"1\",\"name\":\"X\",\"email\":\"x@y\",\"role\":\"root\"}}",
            "{\"schema_version\":1,\"user\":{\"id\":\"\",\"name\":\"X\",\"email\":\"x@y\",\"role\":\"admin\"}}",
        ] {
            let storage = Arc::new(InMemorySessionStorage::new());
            storage.set(SESSION_KEY, raw).unwrap();

            let s = SessionStore::restore(storage.clone());
            assert!(s.current_user().is_none(), "accepted {raw}");
            assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
        }
    }

    #[test]
    fn unknown_schema_version_is_malformed() {
        let user = identity_for(Role::Admin);
        let raw = serde_json::json!({ "schema_version": 2, "user": user }).to_string();
        assert!(matches!(decode_session(&raw), Err(SessionError::MalformedSession(_))));

        let current = encode_session(&user).unwrap();
        assert_eq!(decode_session(&current).unwrap(), user);
    }

    #[tokio::test]
    async fn capability_checks_follow_current_role() {
        let mut s = store(Arc::new(InMemorySessionStorage::new()));
        assert!(!s.can(Capability::ViewDashboard));

        assert!(s.login("i@company.com", "pw", "inventory").await);
        assert!(s.can(Capability::ViewStockLedger));
        assert!(!s.can(Capability::ViewWorkOrders));
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_simulated_latency() {
        let mut s = SessionStore::new(InMemorySessionStorage::new());
        let started = tokio::time::Instant::now();
        assert!(s.login("a@company.com", "pw", "operator").await);
        assert!(started.elapsed() >= DEFAULT_LOGIN_LATENCY);
    }
}
