use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Bearer token pair issued by the identity service.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionTokens {
    pub access: String,
    pub refresh: String,
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write {key} to storage")]
    WriteFailed { key: &'static str },
}

/// Backing store seam: localStorage in the browser, in-memory in tests.
pub trait TokenStorage {
    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError>;
    fn get(&self, key: &str) -> Option<String>;
}

/// Browser localStorage backend.
#[derive(Clone, Copy, Default, Debug)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl TokenStorage for LocalStorage {
    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed { key })
    }

    fn get(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok()?
    }
}

/// In-memory backend.
#[derive(Default, Debug)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn set(&self, key: &'static str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

/// Persists the session token pair across page reloads.
///
/// Dumb persistence boundary: fixed keys, overwrite on every save, no expiry
/// tracking. Token validity is enforced by the identity service on use.
#[derive(Default, Debug)]
pub struct SessionStore<B: TokenStorage = LocalStorage> {
    backend: B,
}

impl SessionStore<LocalStorage> {
    pub fn new() -> Self {
        Self {
            backend: LocalStorage,
        }
    }
}

impl<B: TokenStorage> SessionStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn save(&self, tokens: &SessionTokens) -> Result<(), StorageError> {
        self.backend.set(ACCESS_TOKEN_KEY, &tokens.access)?;
        self.backend.set(REFRESH_TOKEN_KEY, &tokens.refresh)
    }

    pub fn load(&self) -> Option<SessionTokens> {
        Some(SessionTokens {
            access: self.backend.get(ACCESS_TOKEN_KEY)?,
            refresh: self.backend.get(REFRESH_TOKEN_KEY)?,
        })
    }

    pub fn has_session(&self) -> bool {
        self.backend.get(ACCESS_TOKEN_KEY).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(access: &str, refresh: &str) -> SessionTokens {
        SessionTokens {
            access: access.to_string(),
            refresh: refresh.to_string(),
        }
    }

    #[test]
    fn save_writes_both_fixed_keys() {
        let store = SessionStore::with_backend(MemoryStorage::new());
        store.save(&tokens("A", "R")).unwrap();

        assert_eq!(store.backend.get(ACCESS_TOKEN_KEY).as_deref(), Some("A"));
        assert_eq!(store.backend.get(REFRESH_TOKEN_KEY).as_deref(), Some("R"));
    }

    #[test]
    fn load_round_trips_the_saved_pair() {
        let store = SessionStore::with_backend(MemoryStorage::new());
        assert_eq!(store.load(), None);
        assert!(!store.has_session());

        store.save(&tokens("tok1", "tok2")).unwrap();

        assert_eq!(store.load(), Some(tokens("tok1", "tok2")));
        assert!(store.has_session());
    }

    #[test]
    fn a_second_save_overwrites_the_first() {
        let store = SessionStore::with_backend(MemoryStorage::new());
        store.save(&tokens("old-a", "old-r")).unwrap();
        store.save(&tokens("new-a", "new-r")).unwrap();

        assert_eq!(store.load(), Some(tokens("new-a", "new-r")));
    }

    #[test]
    fn load_requires_both_tokens() {
        let backend = MemoryStorage::new();
        backend.set(ACCESS_TOKEN_KEY, "A").unwrap();

        let store = SessionStore::with_backend(backend);
        assert_eq!(store.load(), None);
        assert!(store.has_session());
    }
}
