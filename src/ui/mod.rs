pub mod auth;
pub mod common;
#[cfg(not(feature = "ssr"))]
pub mod nav_spy;
pub mod notifications;
pub mod page_controller;
pub mod pages;
#[cfg(not(feature = "ssr"))]
pub mod scroll_reveal;
pub mod storage;

pub use notifications::{NotificationManager, NotificationsContainer, provide_notifications};
pub use page_controller::{scroll_to_section, use_page_setup};
pub use storage::LocalSessionStore;
