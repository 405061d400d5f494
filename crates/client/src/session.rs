//! Session store: the client-held record of the authenticated user.
//!
//! At most one profile is held at a time. Token presence and profile
//! presence are kept in sync by this store's own operations; the gateway
//! forces [`SessionStore::logout`] whenever the backend answers 401.
//!
//! The store is a cheaply cloneable handle (`Arc` inner), so the gateway and
//! the UI layer share one session without a process-wide singleton.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use secrecy::SecretString;

use repairhub_core::{BrandId, UserId, UserInfo};

use crate::api;
use crate::gateway::{Gateway, GatewayError};
use crate::permission::Grants;

/// Navigation target after logout. Navigation itself is the embedder's job;
/// the store only clears state.
pub const HOME_ROUTE: &str = "/";

#[derive(Default)]
struct SessionState {
    token: Option<SecretString>,
    user_info: Option<UserInfo>,
    hydrated: bool,
    /// Bumped on every profile commit. Callers queued behind an in-flight
    /// fetch compare epochs to reuse its result instead of re-fetching.
    profile_epoch: u64,
}

/// Shared session handle.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

#[derive(Default)]
struct SessionInner {
    state: RwLock<SessionState>,
    /// At most one profile fetch is in flight; concurrent callers queue here
    /// and reuse the committed result instead of racing last-write-wins.
    fetch_guard: tokio::sync::Mutex<()>,
}

impl SessionStore {
    /// Create an anonymous session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session bootstrapped with an existing token.
    #[must_use]
    pub fn with_token(token: SecretString) -> Self {
        let store = Self::new();
        store.set_token(token);
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Store the bearer token.
    pub fn set_token(&self, token: SecretString) {
        self.write().token = Some(token);
    }

    /// Current bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.read().token.clone()
    }

    /// Whether a token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Whether a profile has been committed since the last logout.
    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.read().hydrated
    }

    /// Commit a profile and mark the store hydrated.
    pub fn set_user_info(&self, info: UserInfo) {
        let mut state = self.write();
        state.user_info = Some(info);
        state.hydrated = true;
        state.profile_epoch = state.profile_epoch.wrapping_add(1);
    }

    /// The committed profile, if any.
    #[must_use]
    pub fn user_info(&self) -> Option<UserInfo> {
        self.read().user_info.clone()
    }

    /// Fetch the profile from the backend and commit it.
    ///
    /// Anonymous sessions (no token) are a no-op returning `Ok(None)`.
    /// Every call re-fetches, so the committed profile tracks server-side
    /// changes; while one fetch is in flight, concurrent callers wait on it
    /// and return its committed result instead of issuing a second request.
    /// A fetch failure propagates without mutating session state.
    ///
    /// # Errors
    ///
    /// Returns the gateway failure when the profile request fails. A 401
    /// will already have cleared the session as a gateway side effect.
    pub async fn get_user_info(&self, gateway: &Gateway) -> Result<Option<UserInfo>, GatewayError> {
        if !self.is_authenticated() {
            return Ok(None);
        }

        let epoch = self.read().profile_epoch;
        let _guard = self.inner.fetch_guard.lock().await;

        // The 401 path clears the session while we hold the guard.
        if !self.is_authenticated() {
            return Ok(None);
        }

        // A fetch that completed while we queued is fresh; reuse it rather
        // than issuing a duplicate request.
        {
            let state = self.read();
            if state.profile_epoch != epoch {
                if let Some(info) = state.user_info.clone() {
                    return Ok(Some(info));
                }
            }
        }

        let info: UserInfo = gateway.get(api::user::USER_INFO_PATH, &[]).await?;
        self.set_user_info(info.clone());
        Ok(Some(info))
    }

    /// Clear token and profile, returning the session to anonymous.
    ///
    /// Callers navigate to [`HOME_ROUTE`] afterwards.
    pub fn logout(&self) {
        let mut state = self.write();
        state.token = None;
        state.user_info = None;
        state.hydrated = false;
        drop(state);
        tracing::info!(destination = HOME_ROUTE, "session cleared");
    }

    // Derived reads: all default to absent/empty when no profile is loaded.

    /// Display name of the user.
    #[must_use]
    pub fn user_name(&self) -> Option<String> {
        self.read().user_info.as_ref().map(|u| u.name.clone())
    }

    /// Numeric id of the user.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.read().user_info.as_ref().map(|u| u.id)
    }

    /// Permission ids; empty when anonymous.
    #[must_use]
    pub fn permissions(&self) -> Vec<i32> {
        self.read()
            .user_info
            .as_ref()
            .map(|u| u.permissions.clone())
            .unwrap_or_default()
    }

    /// User-type discriminator.
    #[must_use]
    pub fn self_user_type(&self) -> Option<i32> {
        self.read().user_info.as_ref().map(|u| u.self_user_type)
    }

    /// Brand id of the user's account.
    #[must_use]
    pub fn brand_id(&self) -> Option<BrandId> {
        self.read().user_info.as_ref().and_then(|u| u.account_brand_id)
    }

    /// Brand name of the user's account.
    #[must_use]
    pub fn brand_name(&self) -> Option<String> {
        self.read()
            .user_info
            .as_ref()
            .and_then(|u| u.brand_name.clone())
    }

    /// Snapshot of the fields the permission predicate evaluates.
    #[must_use]
    pub fn grants(&self) -> Grants {
        let state = self.read();
        match state.user_info.as_ref() {
            Some(info) => Grants {
                permissions: info.permissions.clone(),
                user_type: Some(info.self_user_type),
                brand_name: info.brand_name.clone(),
            },
            None => Grants::default(),
        }
    }
}
