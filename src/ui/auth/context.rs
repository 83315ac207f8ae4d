//! Auth context for the landing page's client-side login
//!
//! This module provides a reactive authentication context that:
//! - Restores the session record from localStorage after hydration
//! - Handles login and (confirmed) logout
//! - Owns the open/closed state of the login overlay and the logout dialog
//! - Reports every outcome through the notification manager

use leptos::logging::{log, warn};
use leptos::prelude::*;

use crate::core::{AuthState, PageConfig, SessionManager};
use crate::ui::notifications::NotificationManager;
use crate::ui::storage::LocalSessionStore;

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Whether the login overlay is shown
    pub login_modal_open: RwSignal<bool>,
    /// Whether the logout confirmation is shown
    pub logout_confirm_open: RwSignal<bool>,
    notifications: NotificationManager,
    config: PageConfig,
}

impl AuthContext {
    fn manager(&self) -> SessionManager<LocalSessionStore> {
        SessionManager::new(
            LocalSessionStore::new(self.config.storage_key),
            self.config.min_password_length,
        )
    }

    /// Check if user is logged in
    pub fn is_logged_in(&self) -> bool {
        self.state.with(AuthState::is_logged_in)
    }

    /// Name shown in the user menu
    pub fn display_name(&self) -> Option<String> {
        self.state.with(|s| s.display_name().map(str::to_string))
    }

    /// Re-read the stored session and update the view
    pub fn check_status(&self) {
        self.state.set(self.manager().check_status());
    }

    /// Attempt a login with raw form input.
    ///
    /// Returns `true` on success so the form can clear its fields.
    pub fn login(&self, email: &str, password: &str, remember_me: bool) -> bool {
        match self.manager().login(email, password, remember_me) {
            Ok(record) => {
                log!("Logged in as {}", record.email);
                let welcome = format!("Welcome, {}!", record.display_name());
                self.state.set(AuthState::LoggedIn(record));
                self.close_login_modal();
                self.notifications.success(welcome);
                true
            }
            Err(e) => {
                warn!("Login rejected: {e}");
                self.notifications.error(e.user_message());
                false
            }
        }
    }

    /// Ask for confirmation before logging out
    pub fn request_logout(&self) {
        self.logout_confirm_open.set(true);
    }

    pub fn cancel_logout(&self) {
        self.logout_confirm_open.set(false);
    }

    /// Remove the session; called once the user confirmed
    pub fn logout(&self) {
        self.logout_confirm_open.set(false);
        if let Err(e) = self.manager().logout() {
            warn!("Failed to clear session: {e}");
        }
        self.state.set(AuthState::LoggedOut);
        self.notifications.info("You have been logged out");
    }

    pub fn open_login_modal(&self) {
        self.login_modal_open.set(true);
    }

    pub fn close_login_modal(&self) {
        self.login_modal_open.set(false);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context(config: PageConfig, notifications: NotificationManager) -> AuthContext {
    // Start logged out on both server and client to avoid hydration mismatch
    let ctx = AuthContext {
        state: RwSignal::new(AuthState::LoggedOut),
        login_modal_open: RwSignal::new(false),
        logout_confirm_open: RwSignal::new(false),
        notifications,
        config,
    };

    // Restore state from localStorage after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.check_status();
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
