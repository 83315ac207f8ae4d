//! Session record and the storage abstraction it is persisted through
//!
//! The record is the only durable state the page has. It is stored as JSON
//! under one fixed key; the browser binding lives in `ui::storage`, and
//! [`MemorySessionStore`] stands in for it natively.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The persisted "logged in" state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub login_time: DateTime<Utc>,
    #[serde(default)]
    pub remember_me: bool,
}

impl SessionRecord {
    /// Build a record for a freshly validated email.
    pub fn new(email: impl Into<String>, remember_me: bool, login_time: DateTime<Utc>) -> Self {
        let email = email.into();
        let name = derive_display_name(&email);
        Self {
            email,
            name,
            login_time,
            remember_me,
        }
    }

    /// Name shown in the user menu; falls back to the bare local part.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            local_part(&self.email)
        } else {
            &self.name
        }
    }

    /// Parse a stored record, yielding a typed error on corruption.
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(SessionError::Encode)
    }
}

/// Part of the address before the first `@` (the whole string if there is none)
pub fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Capitalize the first character of the local part, leaving the rest as-is.
///
/// `jane.doe@example.com` becomes `Jane.doe`.
pub fn derive_display_name(email: &str) -> String {
    let local = local_part(email);
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("stored session is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    #[error("failed to encode session: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("session storage unavailable: {0}")]
    Storage(String),
}

/// Raw key-value access to the single session slot.
///
/// Implementations own the storage key; callers only see the slot.
pub trait SessionStore {
    fn get(&self) -> Result<Option<String>, SessionError>;
    fn set(&self, raw: &str) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self) -> Result<Option<String>, SessionError> {
        (**self).get()
    }

    fn set(&self, raw: &str) -> Result<(), SessionError> {
        (**self).set(raw)
    }

    fn clear(&self) -> Result<(), SessionError> {
        (**self).clear()
    }
}

/// In-process store, used natively and in tests
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw value already in the slot
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<String>, SessionError> {
        Ok(self.slot.borrow().clone())
    }

    fn set(&self, raw: &str) -> Result<(), SessionError> {
        *self.slot.borrow_mut() = Some(raw.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn login_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_derive_display_name() {
        assert_eq!(derive_display_name("jane.doe@example.com"), "Jane.doe");
        assert_eq!(derive_display_name("JOHN@example.com"), "JOHN");
        assert_eq!(derive_display_name("élise@example.fr"), "Élise");
        assert_eq!(derive_display_name("1user@example.com"), "1user");
    }

    #[test]
    fn test_derive_display_name_empty_local_part() {
        assert_eq!(derive_display_name("@example.com"), "");
        assert_eq!(derive_display_name(""), "");
    }

    #[test]
    fn test_new_record() {
        let record = SessionRecord::new("jane.doe@example.com", true, login_time());

        assert_eq!(record.email, "jane.doe@example.com");
        assert_eq!(record.name, "Jane.doe");
        assert_eq!(record.login_time, login_time());
        assert!(record.remember_me);
    }

    #[test]
    fn test_display_name_falls_back_to_local_part() {
        let mut record = SessionRecord::new("jane.doe@example.com", false, login_time());
        record.name.clear();

        assert_eq!(record.display_name(), "jane.doe");
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let record = SessionRecord::new("jane.doe@example.com", false, login_time());
        let json = record.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["email"], "jane.doe@example.com");
        assert_eq!(value["name"], "Jane.doe");
        assert_eq!(value["loginTime"], "2026-03-14T09:26:53Z");
        assert_eq!(value["rememberMe"], false);
    }

    #[test]
    fn test_parse_record_written_by_browser() {
        let raw = r#"{"email":"a@b.co","name":"A","loginTime":"2025-01-02T03:04:05.678Z","rememberMe":true}"#;
        let record = SessionRecord::from_json(raw).unwrap();

        assert_eq!(record.email, "a@b.co");
        assert_eq!(record.name, "A");
        assert!(record.remember_me);
    }

    #[test]
    fn test_parse_record_without_optional_fields() {
        let raw = r#"{"email":"a@b.co","loginTime":"2025-01-02T03:04:05Z"}"#;
        let record = SessionRecord::from_json(raw).unwrap();

        assert_eq!(record.display_name(), "a");
        assert!(!record.remember_me);
    }

    #[test]
    fn test_parse_corrupted_record() {
        for raw in ["", "not json", "{\"email\":42}", "{\"name\":\"x\"}"] {
            let result = SessionRecord::from_json(raw);
            assert!(
                matches!(result, Err(SessionError::Corrupted(_))),
                "expected corruption error for {raw:?}"
            );
        }
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get().unwrap(), None);

        store.set("{}").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("{}"));

        store.clear().unwrap();
        assert_eq!(store.raw(), None);

        // Clearing an empty slot is fine
        store.clear().unwrap();
    }
}
