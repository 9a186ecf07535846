//! Session identity derived from the current credential.
//!
//! The session query is the application's single source of truth for "who
//! is signed in": one `GET /auth/me` call, cached for a few minutes and
//! tied to the token that produced it. Identity-fetch failures of any kind
//! resolve to "unauthenticated" rather than propagating; navigation on that
//! outcome belongs to the route guard, not to this module.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::watch;
use tracing::debug;

use crate::api::ApiClient;
use crate::auth::CredentialStore;
use crate::models::CurrentUser;

/// How long a resolved identity stays fresh before the next read refetches.
const SESSION_FRESH_MINUTES: i64 = 5;

/// Broadcast signal for forced session invalidation.
///
/// The request gateway bumps the generation counter when a 401 clears the
/// credential; subscribers only care that an invalidation happened, so a
/// watch channel (latest-value semantics) is enough.
#[derive(Clone)]
pub struct SessionEvents {
    tx: watch::Sender<u64>,
}

impl SessionEvents {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.tx.subscribe()
    }

    pub fn invalidated(&self) {
        self.tx.send_modify(|generation| *generation += 1);
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolution state of the current session, as seen by the application.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Identity has not resolved yet.
    Loading,
    /// Identity resolved to a signed-in user.
    Authenticated(CurrentUser),
    /// Identity resolved to "not signed in".
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Loading | SessionState::Anonymous => None,
        }
    }
}

struct CachedIdentity {
    user: CurrentUser,
    /// Token that produced this identity. A session is never valid once the
    /// credential that produced it has been replaced or cleared.
    token: String,
    fetched_at: DateTime<Utc>,
}

impl CachedIdentity {
    fn is_fresh(&self) -> bool {
        Utc::now() - self.fetched_at < Duration::minutes(SESSION_FRESH_MINUTES)
    }
}

/// Cached "who am I" read over the request gateway.
pub struct SessionQuery {
    api: ApiClient,
    store: Arc<CredentialStore>,
    cache: Mutex<Option<CachedIdentity>>,
}

impl SessionQuery {
    pub fn new(api: ApiClient, store: Arc<CredentialStore>) -> Self {
        Self {
            api,
            store,
            cache: Mutex::new(None),
        }
    }

    fn cache(&self) -> MutexGuard<'_, Option<CachedIdentity>> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Resolve the current identity.
    ///
    /// Returns the cached value while it is fresh and was produced by the
    /// still-current token; otherwise issues one identity call. Any failure
    /// resolves to `None`.
    pub async fn current(&self) -> Option<CurrentUser> {
        let token = match self.store.get() {
            Some(token) => token,
            None => {
                self.invalidate();
                return None;
            }
        };

        if let Some(cached) = &*self.cache() {
            if cached.token == token && cached.is_fresh() {
                return Some(cached.user.clone());
            }
        }

        match self.api.fetch_me().await {
            Ok(user) => {
                *self.cache() = Some(CachedIdentity {
                    user: user.clone(),
                    token,
                    fetched_at: Utc::now(),
                });
                Some(user)
            }
            Err(e) => {
                debug!(error = %e, "Identity fetch failed; resolving as unauthenticated");
                self.invalidate();
                None
            }
        }
    }

    /// Drop the cached identity so the next read re-evaluates.
    pub fn invalidate(&self) {
        *self.cache() = None;
    }

    /// Invalidate and immediately re-resolve.
    pub async fn refresh(&self) -> Option<CurrentUser> {
        self.invalidate();
        self.current().await
    }

    /// Clear the credential, then force a refresh so dependent consumers
    /// re-evaluate to "unauthenticated" on the next read.
    pub async fn logout(&self) {
        self.store.clear();
        self.refresh().await;
    }
}
