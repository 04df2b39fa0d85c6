// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every active notification from creation to removal and
//! advances their lifecycles on periodic ticks. Each notification's schedule
//! is computed solely from its own creation instant, so concurrent
//! notifications never delay one another.

use super::notification::{Kind, Notification, NotificationId, Phase};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick carrying the runtime's current instant.
    Tick(Instant),
}

/// A phase entered by a notification during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub id: NotificationId,
    pub phase: Phase,
}

/// Owns the active notifications and drives their lifecycles.
#[derive(Debug, Default)]
pub struct Manager {
    /// Active notifications, oldest first.
    active: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presents a message under the given style category.
    ///
    /// Fire-and-forget: the notification runs its full lifecycle on its own
    /// and cannot fail. The returned ID is a convenience for callers that
    /// want to correlate transitions; nothing requires keeping it.
    pub fn notify(&mut self, message: impl Into<String>, kind: Kind) -> NotificationId {
        self.push(Notification::new(message, kind))
    }

    /// Presents a message with an explicit creation instant.
    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        kind: Kind,
        now: Instant,
    ) -> NotificationId {
        self.push(Notification::new_at(message, kind, now))
    }

    /// Presents an info message (the default category).
    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Kind::INFO)
    }

    /// Presents a success message.
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Kind::SUCCESS)
    }

    /// Presents an error message.
    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Kind::ERROR)
    }

    /// Adds a prebuilt notification.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        self.active.push(notification);
        id
    }

    /// Advances every active lifecycle to `now` and detaches the ones that
    /// reached `Removed`.
    ///
    /// Should be called periodically (e.g. every 100 ms). Returns the phases
    /// entered during this tick, in per-notification lifecycle order.
    pub fn tick(&mut self, now: Instant) -> Vec<Transition> {
        let mut transitions = Vec::new();
        for notification in &mut self.active {
            let id = notification.id();
            transitions.extend(
                notification
                    .advance(now)
                    .into_iter()
                    .map(|phase| Transition { id, phase }),
            );
        }
        self.active.retain(|n| !n.is_removed());
        transitions
    }

    /// Detaches a notification by ID ahead of schedule.
    ///
    /// Removing an ID that is absent (already removed, or never existed) is a
    /// safe no-op returning `false`.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id() != id);
        self.active.len() != before
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Returns the active notifications, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    /// Looks up an active notification by ID.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.active.iter().find(|n| n.id() == id)
    }

    /// Returns the number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether no notifications are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::super::notification::{DISPLAY_DURATION, ENTRANCE_DELAY, EXIT_DURATION};
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
    }

    #[test]
    fn notify_defaults_to_info() {
        let mut manager = Manager::new();
        let id = manager.notify("Saved", Kind::default());
        assert_eq!(manager.get(id).unwrap().kind(), &Kind::INFO);
    }

    #[test]
    fn tick_runs_the_full_lifecycle() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.notify_at("saved", Kind::SUCCESS, now);

        let mut phases = Vec::new();
        for ms in (0..=3400).step_by(100) {
            for t in manager.tick(now + Duration::from_millis(ms)) {
                assert_eq!(t.id, id);
                phases.push(t.phase);
            }
        }

        assert_eq!(
            phases,
            vec![Phase::Visible, Phase::Dismissing, Phase::Removed]
        );
        assert!(manager.is_empty());
    }

    #[test]
    fn concurrent_notifications_keep_independent_schedules() {
        let now = Instant::now();
        let offset = Duration::from_millis(700);
        let mut manager = Manager::new();
        let first = manager.notify_at("first", Kind::INFO, now);
        let second = manager.notify_at("second", Kind::INFO, now + offset);

        // First reaches removal on its own schedule while second is still visible.
        let first_removal = now + DISPLAY_DURATION + EXIT_DURATION;
        let transitions = manager.tick(first_removal);
        assert!(transitions
            .iter()
            .any(|t| t.id == first && t.phase == Phase::Removed));
        assert!(manager.get(first).is_none());

        let survivor = manager.get(second).unwrap();
        assert_eq!(survivor.phase(), Phase::Visible);

        // Second is removed exactly `offset` later, undisturbed by first.
        let transitions = manager.tick(first_removal + offset);
        assert!(transitions
            .iter()
            .any(|t| t.id == second && t.phase == Phase::Removed));
        assert!(manager.is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let id = manager.notify_at("gone", Kind::INFO, now);

        assert!(manager.remove(id));
        assert!(!manager.remove(id));
        assert!(manager.is_empty());

        // A tick after external removal observes nothing and raises no error.
        assert!(manager.tick(now + DISPLAY_DURATION).is_empty());
    }

    #[test]
    fn unknown_kind_is_accepted() {
        let mut manager = Manager::new();
        let id = manager.notify("odd", Kind::custom("sparkle"));
        let n = manager.get(id).unwrap();
        assert_eq!(n.kind().class_name(), "notification-sparkle");
        assert!(n.kind().accent().is_none());
    }

    #[test]
    fn handle_message_ticks() {
        let now = Instant::now();
        let mut manager = Manager::new();
        manager.notify_at("hello", Kind::INFO, now);

        manager.handle_message(&Message::Tick(now + ENTRANCE_DELAY));
        assert_eq!(
            manager.active().next().unwrap().phase(),
            Phase::Visible
        );
    }
}
