//! Session state, the single source of truth for identity.
//!
//! ARCHITECTURE
//! ============
//! [`SessionStore`] is the only writer of identity state and owns the durable
//! storage behind it. Everything else (navigation guard, request gate, menu
//! projection) reads through a cheaply-cloned [`SessionHandle`], and the gate
//! may additionally trigger `logout` when the backend reports 401.
//!
//! Mutation is synchronous; the lock is never held across an await. The only
//! window where the session can be observed mid-flight is while a `login`
//! call is waiting on the network, and both exits of that call leave the
//! session fully consistent.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::GateError;
use crate::role::Role;
use crate::storage::{AUTH_TOKEN_KEY, KeyValueStore, USER_ROLE_KEY, USERNAME_KEY};

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Point-in-time view of the authenticated identity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Opaque backend-issued token. Presence defines authentication.
    pub token: Option<String>,
    /// Assigned role; `None` is treated as guest for every check.
    pub role: Option<Role>,
    /// Display name, when the backend provided one.
    pub username: Option<String>,
    /// Whether durable storage has been consulted this process lifetime.
    pub initialized: bool,
}

impl Session {
    /// `true` iff a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The effective role, defaulting to guest when absent.
    #[must_use]
    pub fn current_role(&self) -> Role {
        self.role.unwrap_or(Role::Guest)
    }
}

/// Login form payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login payload from the authentication service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: Role,
    pub username: String,
}

/// External authentication collaborator.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange credentials for a token and role.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, GateError>;

    /// Best-effort server-side session revocation. Local teardown never
    /// depends on this succeeding.
    async fn revoke(&self) {}
}

// =============================================================================
// STORE
// =============================================================================

/// Authoritative holder of identity state with durable persistence.
pub struct SessionStore {
    session: Session,
    storage: Box<dyn KeyValueStore>,
    notify: watch::Sender<Session>,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        let (notify, _) = watch::channel(Session::default());
        Self { session: Session::default(), storage, notify }
    }

    /// Read token, role and username from durable storage into memory.
    ///
    /// Idempotent and infallible: missing entries leave fields absent.
    pub fn restore(&mut self) {
        if let Some(token) = self.storage.get(AUTH_TOKEN_KEY) {
            self.session.token = Some(token);
        }
        if let Some(role) = self.storage.get(USER_ROLE_KEY) {
            self.session.role = Some(Role::parse(&role));
        }
        if let Some(username) = self.storage.get(USERNAME_KEY) {
            self.session.username = Some(username);
        }
        self.session.initialized = true;
        self.publish();
        tracing::debug!(authenticated = self.session.is_authenticated(), "session restored");
    }

    /// Clear identity from memory and durable storage.
    ///
    /// The role is reset to the guest sentinel rather than cleared, matching
    /// the guest-default rule used by every authorization check.
    pub fn logout(&mut self) {
        self.session.token = None;
        self.session.role = Some(Role::Guest);
        self.session.username = None;
        self.session.initialized = true;
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USER_ROLE_KEY);
        self.storage.remove(USERNAME_KEY);
        self.publish();
        tracing::info!("session cleared");
    }

    fn apply_login(&mut self, response: &LoginResponse) {
        self.session.token = Some(response.token.clone());
        self.session.role = Some(response.role);
        self.session.username = Some(response.username.clone());
        self.session.initialized = true;
        self.storage.set(AUTH_TOKEN_KEY, &response.token);
        self.storage.set(USER_ROLE_KEY, response.role.as_str());
        self.storage.set(USERNAME_KEY, &response.username);
        self.publish();
        tracing::info!(username = %response.username, role = %response.role, "session established");
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    #[must_use]
    pub fn current_role(&self) -> Role {
        self.session.current_role()
    }

    /// Watch channel receiving a snapshot after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.notify.subscribe()
    }

    fn publish(&self) {
        self.notify.send_replace(self.session.clone());
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Shared handle to the one process-wide [`SessionStore`].
///
/// Clone is cheap; all clones observe the same session.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<RwLock<SessionStore>>,
}

impl SessionHandle {
    #[must_use]
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self { inner: Arc::new(RwLock::new(SessionStore::new(storage))) }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionStore> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionStore> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.read().snapshot()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    #[must_use]
    pub fn current_role(&self) -> Role {
        self.read().current_role()
    }

    /// Run `restore` only if it has not run yet this process lifetime.
    pub fn ensure_initialized(&self) {
        let mut store = self.write();
        if !store.session.initialized {
            store.restore();
        }
    }

    pub fn restore(&self) {
        self.write().restore();
    }

    pub fn logout(&self) {
        self.write().logout();
    }

    /// Watch channel receiving a snapshot after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.read().subscribe()
    }

    /// Authenticate through `provider` and commit the result.
    ///
    /// On success the token, role and username are written to memory and
    /// durable storage atomically with respect to other synchronous readers.
    /// On failure `logout` runs first so no partial state survives, then the
    /// provider's error is returned verbatim.
    ///
    /// # Errors
    ///
    /// Whatever the provider returned, unmodified.
    pub async fn login(
        &self,
        provider: &dyn AuthProvider,
        credentials: &Credentials,
    ) -> Result<Session, GateError> {
        match provider.login(credentials).await {
            Ok(response) => {
                let mut store = self.write();
                store.apply_login(&response);
                Ok(store.snapshot())
            }
            Err(err) => {
                self.write().logout();
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
