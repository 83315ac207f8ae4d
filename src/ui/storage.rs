//! `localStorage`-backed session store
//!
//! On the server there is no browser storage: the store reads as empty and
//! ignores writes, so server rendering always starts logged out.

use crate::core::session::{SessionError, SessionStore};

/// Session slot in `window.localStorage` under a fixed key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalSessionStore {
    key: &'static str,
}

impl LocalSessionStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    let window = web_sys::window().ok_or_else(|| SessionError::Storage("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| SessionError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| SessionError::Storage("localStorage not available".into()))
}

#[cfg(not(feature = "ssr"))]
impl SessionStore for LocalSessionStore {
    fn get(&self) -> Result<Option<String>, SessionError> {
        local_storage()?
            .get_item(self.key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn set(&self, raw: &str) -> Result<(), SessionError> {
        local_storage()?
            .set_item(self.key, raw)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<(), SessionError> {
        local_storage()?
            .remove_item(self.key)
            .map_err(|e| SessionError::Storage(format!("{:?}", e)))
    }
}

/// SSR stub - there is no storage on the server
#[cfg(feature = "ssr")]
impl SessionStore for LocalSessionStore {
    fn get(&self) -> Result<Option<String>, SessionError> {
        Ok(None)
    }

    fn set(&self, _raw: &str) -> Result<(), SessionError> {
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        Ok(())
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_server_store_is_always_empty() {
        let store = LocalSessionStore::new("saki_doruma_user");
        store.set("{}").unwrap();

        assert_eq!(store.get().unwrap(), None);
        assert!(store.clear().is_ok());
        assert_eq!(store.key(), "saki_doruma_user");
    }
}
