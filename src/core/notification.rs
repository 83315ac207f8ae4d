//! Toast notification model
//!
//! Each toast goes through three phases: shown, exiting, removed.
//! `run_lifecycle` sequences the two transitions over an injected sleep, so
//! the browser drives it with `TimeoutFuture` and tests with a fake clock.

use std::collections::VecDeque;

/// Notification severity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Background color of the toast
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "#00cc66",
            Severity::Error => "#ff4444",
            Severity::Info => "#00ff99",
        }
    }

    /// CSS classes applied to the toast element
    pub fn class(&self) -> String {
        format!("alert alert-{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Shown,
    Exiting,
}

impl Phase {
    /// Inline `animation` value for a toast in this phase
    pub fn animation(&self) -> &'static str {
        match self {
            Phase::Shown => "slideIn 0.3s ease-out",
            Phase::Exiting => "slideOut 0.3s ease-out forwards",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub phase: Phase,
}

/// Display/exit durations of a toast
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timeline {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl Timeline {
    pub fn new(display_ms: u32, exit_ms: u32) -> Self {
        Self { display_ms, exit_ms }
    }
}

/// A timer callback's effect on the list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleStep {
    BeginExit,
    Remove,
}

impl LifecycleStep {
    /// Returns `false` when the notification was already gone
    pub fn apply(self, list: &mut NotificationList, id: u64) -> bool {
        match self {
            LifecycleStep::BeginExit => list.begin_exit(id),
            LifecycleStep::Remove => list.remove(id),
        }
    }
}

/// Drive one notification from shown to removed.
///
/// `sleep` waits the given number of milliseconds. `apply` runs a step
/// against the live list and reports whether the notification was still
/// listed; a dismissed notification stops the lifecycle before the exit
/// delay is scheduled.
pub async fn run_lifecycle<S, F, A>(timeline: Timeline, mut sleep: S, mut apply: A)
where
    S: FnMut(u32) -> F,
    F: Future<Output = ()>,
    A: FnMut(LifecycleStep) -> bool,
{
    sleep(timeline.display_ms).await;
    if !apply(LifecycleStep::BeginExit) {
        return;
    }
    sleep(timeline.exit_ms).await;
    apply(LifecycleStep::Remove);
}

/// Ordered list of live notifications.
///
/// There is no cap: rapid calls stack up until their timers remove them.
#[derive(Clone, Debug, Default)]
pub struct NotificationList {
    items: VecDeque<Notification>,
    next_id: u64,
}

impl NotificationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Notification {
            id,
            message: message.into(),
            severity,
            phase: Phase::Shown,
        });
        id
    }

    /// First timer: start the exit transition.
    ///
    /// Returns `false` when the notification is already gone, in which case
    /// the removal timer should not be scheduled.
    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) => {
                item.phase = Phase::Exiting;
                true
            }
            None => false,
        }
    }

    /// Second timer (or early dismissal): drop the notification.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|n| n.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn phase(&self, id: u64) -> Option<Phase> {
        self.get(id).map(|n| n.phase)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

}
