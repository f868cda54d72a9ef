/// Client-side credential cache
///
/// Token and profile snapshot live in a [`SessionStore`] under `auth_token`
/// and `user_data`. A session counts as authenticated only when both are
/// present and the profile parses.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use stunting_common::types::{Role, UserProfile};
use stunting_common::{Result, StuntingError};

pub const TOKEN_KEY: &str = "auth_token";
pub const PROFILE_KEY: &str = "user_data";

/// Key/value persistence backing the session
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

/// Store kept in memory, lost on reload
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage =
            Self::storage().ok_or_else(|| StuntingError::storage("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|_| StuntingError::storage(format!("Failed to write {}", key)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Handle on the cached credentials, cheap to clone
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn SessionStore>,
}

impl Session {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self {
            store: Rc::new(store),
        }
    }

    pub fn browser() -> Self {
        Self::new(LocalStorage)
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Cached profile; an unreadable snapshot is discarded
    pub fn profile(&self) -> Option<UserProfile> {
        let raw = self.store.get(PROFILE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::error!("Error parsing user data: {}", e);
                self.store.remove(PROFILE_KEY);
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.profile().is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.profile().map(|profile| profile.role)
    }

    pub fn store_token(&self, token: &str) -> Result<()> {
        self.store.set(TOKEN_KEY, token)
    }

    pub fn store_profile(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, &json)
    }

    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(PROFILE_KEY);
        log::info!("Authentication data cleared");
    }

    pub fn display_name(&self) -> String {
        self.profile()
            .map(|profile| profile.display_name())
            .unwrap_or_else(|| "User".to_string())
    }

    pub fn display_email(&self) -> String {
        self.profile()
            .map(|profile| profile.display_email().to_string())
            .unwrap_or_else(|| "user@example.com".to_string())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub fn profile(role: Role) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            email: "warga@example.com".to_string(),
            role,
            nama: None,
            data: Some(json!({"nama": "Siti"})),
        }
    }

    #[test]
    fn test_requires_token_and_profile() {
        let session = Session::new(MemoryStore::default());
        assert!(!session.is_authenticated());

        session.store_token("abc").unwrap();
        assert!(!session.is_authenticated());

        session.store_profile(&profile(Role::Masyarakat)).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.role(), Some(Role::Masyarakat));
        assert_eq!(session.display_name(), "Siti");

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_corrupted_profile_is_removed() {
        let store = MemoryStore::default();
        store.set(TOKEN_KEY, "abc").unwrap();
        store.set(PROFILE_KEY, "{not json").unwrap();
        let session = Session::new(store);

        assert!(session.profile().is_none());
        assert!(!session.is_authenticated());
        // token survives, only the snapshot is dropped
        assert_eq!(session.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_display_fallbacks_without_profile() {
        let session = Session::new(MemoryStore::default());
        assert_eq!(session.display_name(), "User");
        assert_eq!(session.display_email(), "user@example.com");
    }
}
