#[cfg(test)]
mod tests {
    use crate::core::{
        AuthState, LoginError, MemorySessionStore, PageConfig, RevealTracker, SessionManager,
        SessionRecord, ValidationError,
    };
    use chrono::{TimeZone, Utc};

    fn manager() -> SessionManager<MemorySessionStore> {
        let config = PageConfig::default();
        SessionManager::new(MemorySessionStore::new(), config.min_password_length)
    }

    #[test]
    fn test_malformed_emails_are_rejected_without_storing() {
        let manager = manager();

        for email in [
            "janedoe.example.com",
            "jane@examplecom",
            "jane doe@example.com",
            "jane@exam ple.com",
            "@example.com",
            "jane@",
            "jane@@example.com",
        ] {
            let result = manager.login(email, "secret1", false);
            assert!(
                matches!(result, Err(LoginError::Validation(_))),
                "{email:?} should be rejected"
            );
            assert_eq!(manager.store().raw(), None, "{email:?} changed storage");
        }
    }

    #[test]
    fn test_short_passwords_are_rejected_for_any_email() {
        let manager = manager();

        for email in ["jane.doe@example.com", "not-an-email"] {
            for password in ["a", "ab", "abc", "abcd", "abcde"] {
                assert!(manager.login(email, password, false).is_err());
            }
        }
        assert_eq!(manager.store().raw(), None);

        assert!(matches!(
            manager.login("jane.doe@example.com", "abcde", false),
            Err(LoginError::Validation(ValidationError::PasswordTooShort { .. }))
        ));
    }

    #[test]
    fn test_login_stores_capitalized_name() {
        let manager = manager();
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();

        let record = manager
            .login_at("jane.doe@example.com", "secret1", true, now)
            .unwrap();

        assert_eq!(record.name, "Jane.doe");
        assert_eq!(record.login_time, now);

        let raw = manager.store().raw().expect("record stored");
        let stored = SessionRecord::from_json(&raw).unwrap();
        assert_eq!(stored, record);

        let state = manager.check_status();
        assert!(state.is_logged_in());
        assert_eq!(state.display_name(), Some("Jane.doe"));
    }

    #[test]
    fn test_logout_returns_to_logged_out_view() {
        let manager = manager();
        manager.login("jane.doe@example.com", "secret1", false).unwrap();

        manager.logout().unwrap();

        assert_eq!(manager.store().raw(), None);
        assert_eq!(manager.check_status(), AuthState::LoggedOut);
    }

    #[test]
    fn test_check_status_is_idempotent() {
        let empty = manager();
        assert_eq!(empty.check_status(), empty.check_status());

        let logged_in = manager();
        logged_in.login("jane.doe@example.com", "secret1", false).unwrap();
        let first = logged_in.check_status();
        let second = logged_in.check_status();
        assert_eq!(first, second);
        assert!(first.is_logged_in());

        let corrupted = SessionManager::new(MemorySessionStore::with_raw("[1,2"), 6);
        assert_eq!(corrupted.check_status(), corrupted.check_status());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_notification_removed_within_window() {
        use crate::core::{NotificationList, Severity, run_lifecycle};
        use std::cell::{Cell, RefCell};

        let config = PageConfig::default();
        let list = RefCell::new(NotificationList::new());
        let id = list.borrow_mut().push("Welcome back, Jane!", Severity::Success);
        let now = Cell::new(0u32);
        let removed_at = Cell::new(None);

        let lifecycle = run_lifecycle(
            config.notification_timeline(),
            |ms| {
                now.set(now.get() + ms);
                std::future::ready(())
            },
            |step| {
                let applied = step.apply(&mut list.borrow_mut(), id);
                if !list.borrow().contains(id) && removed_at.get().is_none() {
                    removed_at.set(Some(now.get()));
                }
                applied
            },
        );
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(lifecycle);

        let removed_at = removed_at.get().expect("notification removed");
        assert!((4000..=4300).contains(&removed_at), "removed at {removed_at} ms");
        assert!(list.borrow().is_empty());
    }

    #[test]
    fn test_reveal_once_across_repeated_scrolling() {
        let mut tracker = RevealTracker::new();
        let card = tracker.register();

        let reveals = (0..10)
            .map(|i| tracker.on_intersection(card, i % 2 == 0))
            .filter(|revealed| *revealed)
            .count();

        assert_eq!(reveals, 1);
    }
}
