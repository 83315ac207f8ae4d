//! Toast notifications
//!
//! Provides the `#alert-container` stack in the top-right corner and the
//! `NotificationManager` handle used by the login and logout flows.

use crate::core::PageConfig;
use crate::core::notification::{Notification, NotificationList, Severity, Timeline};
use leptos::prelude::*;

/// Notifications container component
/// Place this once near the page root
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();
    let list = manager.list;

    view! {
        // The container only enters the document with the first notification
        // and then stays for the rest of the page's life.
        <Show when=move || manager.created.get()>
            <div
                id="alert-container"
                style="position: fixed; top: 20px; right: 20px; z-index: 10000; max-width: 400px;"
            >
                <For
                    each=move || list.with(|l| l.iter().cloned().collect::<Vec<_>>())
                    key=|notification| notification.id
                    children=move |notification| {
                        view! { <Toast notification=notification manager=manager /> }
                    }
                />
            </div>
        </Show>
    }
}

/// Single toast, keyed by id so its node lives from entrance to removal
#[component]
fn Toast(notification: Notification, manager: NotificationManager) -> impl IntoView {
    let id = notification.id;
    let color = notification.severity.color();
    let list = manager.list;
    // Only this toast's phase change restyles this node
    let phase = Memo::new(move |_| list.with(|l| l.phase(id)));
    let style = move || {
        let animation = phase
            .get()
            .unwrap_or(notification.phase)
            .animation();
        format!(
            "padding: 1rem; margin-bottom: 0.5rem; border-radius: 8px; background: {}; color: #000; \
             font-weight: 500; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); animation: {}; \
             display: flex; align-items: center; gap: 0.75rem;",
            color, animation
        )
    };

    view! {
        <div class=notification.severity.class() style=style role="status">
            <span style="flex: 1;">{notification.message}</span>
            <button
                type="button"
                class="alert-close"
                style="background: none; border: none; cursor: pointer; font-size: 1.1rem; line-height: 1;"
                aria-label="Dismiss notification"
                on:click=move |_| {
                    // Pending timers find the id gone and stop
                    manager.dismiss(id);
                }
            >
                "×"
            </button>
        </div>
    }
}

/// Handle for showing notifications
#[derive(Clone, Copy)]
pub struct NotificationManager {
    list: RwSignal<NotificationList>,
    created: RwSignal<bool>,
    timeline: Timeline,
}

impl NotificationManager {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            list: RwSignal::new(NotificationList::new()),
            created: RwSignal::new(false),
            timeline,
        }
    }

    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.notification_timeline())
    }

    /// Show a notification and schedule its exit and removal
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        if !self.created.get_untracked() {
            self.created.set(true);
        }
        let message = message.into();
        let id = self
            .list
            .try_update(|l| l.push(message, severity))
            .unwrap_or_default();
        self.schedule(id);
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Error)
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(message, Severity::Info)
    }

    /// Remove a notification before its timers fire
    pub fn dismiss(&self, id: u64) {
        self.list.update(|l| {
            l.remove(id);
        });
    }

    /// Exit transition after the display delay, removal after the exit delay
    fn schedule(&self, id: u64) {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::notification::run_lifecycle;
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            let list = self.list;
            spawn_local(run_lifecycle(self.timeline, TimeoutFuture::new, move |step| {
                // A disposed signal counts as gone
                list.try_update(|l| step.apply(l, id)).unwrap_or(false)
            }));
        }
        #[cfg(feature = "ssr")]
        {
            let _ = id;
        }
    }
}

/// Provide the notification manager to the component tree
pub fn provide_notifications(config: &PageConfig) -> NotificationManager {
    let manager = NotificationManager::from_config(config);
    provide_context(manager);
    manager
}

/// Get the notification manager from the component tree
pub fn use_notifications() -> NotificationManager {
    expect_context::<NotificationManager>()
}
