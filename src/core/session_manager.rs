//! Client-side login/logout on top of a [`SessionStore`]
//!
//! Any syntactically valid email/password pair logs in. The manager only
//! decides what is stored and which view should be shown; rendering and
//! notifications are left to the caller.

use chrono::{DateTime, Utc};
use leptos::logging::warn;
use thiserror::Error;

use super::session::{SessionError, SessionRecord, SessionStore};
use super::validation::{ValidationError, validate_credentials};

/// What the header should show
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    LoggedOut,
    LoggedIn(SessionRecord),
}

impl AuthState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, AuthState::LoggedIn(_))
    }

    /// Name for the user menu, if logged in
    pub fn display_name(&self) -> Option<&str> {
        match self {
            AuthState::LoggedIn(record) => Some(record.display_name()),
            AuthState::LoggedOut => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl LoginError {
    /// Text shown in the error notification
    pub fn user_message(&self) -> String {
        match self {
            LoginError::Validation(e) => e.to_string(),
            LoginError::Session(_) => "Could not save your session in this browser".to_string(),
        }
    }
}

pub struct SessionManager<S> {
    store: S,
    min_password_length: usize,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S, min_password_length: usize) -> Self {
        Self {
            store,
            min_password_length,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read and parse the stored record.
    pub fn current(&self) -> Result<Option<SessionRecord>, SessionError> {
        match self.store.get()? {
            Some(raw) => SessionRecord::from_json(&raw).map(Some),
            None => Ok(None),
        }
    }

    /// Decide the view from the stored record.
    ///
    /// A corrupted record is treated as logged out and removed so the next
    /// page load starts clean.
    pub fn check_status(&self) -> AuthState {
        match self.current() {
            Ok(Some(record)) => AuthState::LoggedIn(record),
            Ok(None) => AuthState::LoggedOut,
            Err(e @ SessionError::Corrupted(_)) => {
                warn!("Discarding stored session: {e}");
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear corrupted session: {e}");
                }
                AuthState::LoggedOut
            }
            Err(e) => {
                warn!("Failed to read session: {e}");
                AuthState::LoggedOut
            }
        }
    }

    /// Validate and persist a new session stamped with the current time.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<SessionRecord, LoginError> {
        self.login_at(email, password, remember_me, Utc::now())
    }

    /// Same as [`login`](Self::login) with an explicit timestamp.
    pub fn login_at(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
        now: DateTime<Utc>,
    ) -> Result<SessionRecord, LoginError> {
        let email = validate_credentials(email, password, self.min_password_length)?;
        let record = SessionRecord::new(email, remember_me, now);
        self.store.set(&record.to_json()?)?;
        Ok(record)
    }

    /// Remove the stored record.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()
    }
}
