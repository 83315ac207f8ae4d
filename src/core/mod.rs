//! Platform-independent landing page logic: session, validation, notifications,
//! scroll reveal and nav spy.

#[cfg(feature = "ssr")]
pub mod config;
pub mod nav_spy;
pub mod notification;
pub mod page_config;
pub mod reveal;
pub mod session;
pub mod session_manager;
#[cfg(test)]
mod tests;
pub mod validation;

pub use nav_spy::{SectionBounds, active_section};
pub use notification::{
    LifecycleStep, Notification, NotificationList, Phase, Severity, Timeline, run_lifecycle,
};
pub use page_config::PageConfig;
pub use reveal::{RevealState, RevealTracker};
pub use session::{MemorySessionStore, SessionError, SessionRecord, SessionStore};
pub use session_manager::{AuthState, LoginError, SessionManager};
pub use validation::{ValidationError, validate_credentials};
