//! Page-level settings shared by the session, notification, reveal and nav-spy code.
//!
//! `PageConfig::default()` holds the values the landing page ships with. The
//! struct is provided through Leptos context so a page (or a test) can swap in
//! different values without touching the handlers.

use super::notification::Timeline;

/// Storage key under which the session record lives in `localStorage`
pub const SESSION_STORAGE_KEY: &str = "saki_doruma_user";

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// How long a notification stays on screen before its exit transition starts
pub const NOTIFICATION_DISPLAY_MS: u32 = 4000;

/// Duration of the notification exit transition
pub const NOTIFICATION_EXIT_MS: u32 = 300;

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Elements that fade in on first scroll into view
pub const REVEAL_SELECTORS: &str = ".feature-card, .benefit-item, .pricing-card, .testimonial-card";

/// Inline animation applied to a revealed element
pub const REVEAL_ANIMATION: &str = "fadeInUp 0.6s ease-out forwards";

/// Distance below the viewport top used to pick the active section
pub const NAV_OFFSET_PX: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConfig {
    pub storage_key: &'static str,
    pub min_password_length: usize,
    pub notification_display_ms: u32,
    pub notification_exit_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_selectors: &'static str,
    pub reveal_animation: &'static str,
    pub nav_offset_px: f64,
}

impl PageConfig {
    /// Display and exit durations handed to each toast's timers
    pub fn notification_timeline(&self) -> Timeline {
        Timeline::new(self.notification_display_ms, self.notification_exit_ms)
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: SESSION_STORAGE_KEY,
            min_password_length: MIN_PASSWORD_LENGTH,
            notification_display_ms: NOTIFICATION_DISPLAY_MS,
            notification_exit_ms: NOTIFICATION_EXIT_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_selectors: REVEAL_SELECTORS,
            reveal_animation: REVEAL_ANIMATION,
            nav_offset_px: NAV_OFFSET_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_shipped_constants() {
        let config = PageConfig::default();

        assert_eq!(config.storage_key, "saki_doruma_user");
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.notification_display_ms, 4000);
        assert_eq!(config.notification_exit_ms, 300);
        assert_eq!(config.nav_offset_px, 200.0);
        assert!(config.reveal_selectors.contains(".testimonial-card"));
    }

    #[test]
    fn test_notification_timeline() {
        let config = PageConfig::default();
        assert_eq!(config.notification_timeline(), Timeline::new(4000, 300));

        let fast = PageConfig {
            notification_display_ms: 100,
            notification_exit_ms: 50,
            ..PageConfig::default()
        };
        assert_eq!(fast.notification_timeline(), Timeline::new(100, 50));
    }
}
