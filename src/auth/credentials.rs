//! Bearer credential storage.
//!
//! The credential store holds the current bearer token in process memory
//! and mirrors it to a durable slot (the OS keychain) so a session survives
//! a restart. The durable medium is behind the `TokenSlot` trait so tests
//! can substitute an in-memory slot.

use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use keyring::Entry;
use tracing::{debug, warn};

/// Keychain service name
const SERVICE_NAME: &str = "handraise";

/// Keychain entry name for the bearer token
const TOKEN_ENTRY: &str = "bearer-token";

/// A durable key/value slot holding at most one token.
pub trait TokenSlot: Send + Sync {
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, token: &str) -> Result<()>;
    fn delete(&self) -> Result<()>;
}

impl<T: TokenSlot + ?Sized> TokenSlot for std::sync::Arc<T> {
    fn read(&self) -> Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, token: &str) -> Result<()> {
        (**self).write(token)
    }

    fn delete(&self) -> Result<()> {
        (**self).delete()
    }
}

/// OS keychain slot used in production.
pub struct KeyringSlot;

impl KeyringSlot {
    fn entry() -> Result<Entry> {
        Entry::new(SERVICE_NAME, TOKEN_ENTRY).context("Failed to create keyring entry")
    }
}

impl TokenSlot for KeyringSlot {
    fn read(&self) -> Result<Option<String>> {
        match Self::entry()?.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to read token from keychain"),
        }
    }

    fn write(&self, token: &str) -> Result<()> {
        Self::entry()?
            .set_password(token)
            .context("Failed to store token in keychain")
    }

    fn delete(&self) -> Result<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete token from keychain"),
        }
    }
}

/// In-memory slot for tests and contexts without a keychain.
#[derive(Default)]
pub struct MemorySlot(Mutex<Option<String>>);

impl TokenSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.0.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn write(&self, token: &str) -> Result<()> {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

struct CacheState {
    token: Option<String>,
    /// Whether the durable slot has been consulted. The slot is read at
    /// most once lazily; after a `clear()` it is never read again, so a
    /// failed slot deletion cannot resurrect a cleared credential.
    slot_checked: bool,
}

/// Holder of the current bearer token.
///
/// At most one credential is active per process; `set` fully replaces any
/// previous value. A missing or failing durable medium degrades to
/// session-only storage without raising.
pub struct CredentialStore {
    cache: Mutex<CacheState>,
    slot: Option<Box<dyn TokenSlot>>,
}

impl CredentialStore {
    pub fn new(slot: Box<dyn TokenSlot>) -> Self {
        Self {
            cache: Mutex::new(CacheState {
                token: None,
                slot_checked: false,
            }),
            slot: Some(slot),
        }
    }

    /// Production store backed by the OS keychain.
    pub fn keychain() -> Self {
        Self::new(Box::new(KeyringSlot))
    }

    /// Store with no durable medium at all.
    pub fn unbacked() -> Self {
        Self {
            cache: Mutex::new(CacheState {
                token: None,
                slot_checked: true,
            }),
            slot: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Store a new credential, replacing any previous one.
    pub fn set(&self, token: &str) {
        {
            let mut cache = self.lock();
            cache.token = Some(token.to_string());
            cache.slot_checked = true;
        }
        if let Some(slot) = &self.slot {
            if let Err(e) = slot.write(token) {
                warn!(error = %e, "Failed to persist token; keeping in-memory credential only");
            }
        }
    }

    /// Current credential, if any. Falls back to one lazy read of the
    /// durable slot the first time the cache is empty.
    pub fn get(&self) -> Option<String> {
        let mut cache = self.lock();
        if cache.token.is_none() && !cache.slot_checked {
            cache.slot_checked = true;
            if let Some(slot) = &self.slot {
                match slot.read() {
                    Ok(token) => cache.token = token,
                    Err(e) => {
                        warn!(error = %e, "Failed to read token from durable slot");
                    }
                }
            }
        }
        cache.token.clone()
    }

    /// Remove the credential from the cache and the durable slot.
    ///
    /// Idempotent. Returns whether a credential was actually present, so
    /// the unauthorized interceptor can emit its session-invalidated event
    /// exactly once when concurrent failures race into this call.
    pub fn clear(&self) -> bool {
        let had = {
            let mut cache = self.lock();
            let had = match cache.token {
                Some(_) => true,
                None if !cache.slot_checked => self
                    .slot
                    .as_ref()
                    .is_some_and(|slot| slot.read().ok().flatten().is_some()),
                None => false,
            };
            cache.token = None;
            cache.slot_checked = true;
            had
        };
        if let Some(slot) = &self.slot {
            if let Err(e) = slot.delete() {
                warn!(error = %e, "Failed to delete token from durable slot");
            }
        }
        if had {
            debug!("Credential cleared");
        }
        had
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct FailingSlot;

    impl TokenSlot for FailingSlot {
        fn read(&self) -> Result<Option<String>> {
            Err(anyhow::anyhow!("no durable medium"))
        }

        fn write(&self, _token: &str) -> Result<()> {
            Err(anyhow::anyhow!("no durable medium"))
        }

        fn delete(&self) -> Result<()> {
            Err(anyhow::anyhow!("no durable medium"))
        }
    }

    #[test]
    fn test_set_then_get() {
        let store = CredentialStore::new(Box::new(MemorySlot::default()));
        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
    }

    #[test]
    fn test_set_replaces_previous_token() {
        let store = CredentialStore::new(Box::new(MemorySlot::default()));
        store.set("first");
        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn test_get_survives_reload_via_durable_slot() {
        let slot = Arc::new(MemorySlot::default());

        let store = CredentialStore::new(Box::new(slot.clone()));
        store.set("abc");

        // A fresh store over the same slot models a process restart.
        let reloaded = CredentialStore::new(Box::new(slot));
        assert_eq!(reloaded.get().as_deref(), Some("abc"));
    }

    #[test]
    fn test_clear_removes_cache_and_slot() {
        let slot = Arc::new(MemorySlot::default());
        let store = CredentialStore::new(Box::new(slot.clone()));
        store.set("abc");

        assert!(store.clear());
        assert_eq!(store.get(), None);
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = CredentialStore::new(Box::new(MemorySlot::default()));
        store.set("abc");

        assert!(store.clear());
        assert!(!store.clear());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clear_on_empty_store_is_a_noop() {
        let store = CredentialStore::new(Box::new(MemorySlot::default()));
        assert!(!store.clear());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_clear_reports_token_known_only_to_the_slot() {
        let slot = Arc::new(MemorySlot::default());
        slot.write("persisted").unwrap();

        // get() was never called; the slot still holds a credential.
        let store = CredentialStore::new(Box::new(slot.clone()));
        assert!(store.clear());
        assert_eq!(store.get(), None);
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_get_after_clear_does_not_resurrect_from_slot() {
        let slot = Arc::new(MemorySlot::default());
        let store = CredentialStore::new(Box::new(slot.clone()));
        store.set("abc");
        store.clear();

        // Even if something re-wrote the slot, this store already decided.
        slot.write("stale").unwrap();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_failing_slot_degrades_to_session_only() {
        let store = CredentialStore::new(Box::new(FailingSlot));
        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
        assert!(store.clear());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_unbacked_store_works_in_memory() {
        let store = CredentialStore::unbacked();
        assert_eq!(store.get(), None);
        store.set("abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
        store.clear();
        assert_eq!(store.get(), None);
    }
}
