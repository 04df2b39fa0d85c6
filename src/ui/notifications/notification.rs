// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its open-ended style
//! [`Kind`], and the [`Phase`] lifecycle it moves through. All timing is
//! computed from instants injected by the caller, so the lifecycle can be
//! simulated deterministically in tests.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::borrow::Cow;
use std::fmt;
use std::time::{Duration, Instant};

/// Delay between insertion and the start of the entrance transition.
///
/// The entrance styles must land on a later frame than the insertion itself,
/// otherwise the "from" and "to" states collapse into a single paint.
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(100);

/// How long a notification stays on screen, measured from creation
/// (not from the end of the entrance transition).
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// Length of the exit transition; the element is detached once it elapses.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Length of the entrance fade/slide transition.
pub const ENTRANCE_TRANSITION: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Style category for a notification.
///
/// The set is open-ended: the well-known categories below get an accent
/// color, while any other string is accepted as-is and styled with the base
/// look only. No validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Kind(Cow<'static, str>);

impl Kind {
    pub const INFO: Kind = Kind(Cow::Borrowed("info"));
    pub const SUCCESS: Kind = Kind(Cow::Borrowed("success"));
    pub const WARNING: Kind = Kind(Cow::Borrowed("warning"));
    pub const ERROR: Kind = Kind(Cow::Borrowed("error"));

    /// Creates a custom category from an arbitrary string.
    pub fn custom(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the raw category string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the style class derived from the category string.
    #[must_use]
    pub fn class_name(&self) -> String {
        format!("notification-{}", self.0)
    }

    /// Returns the accent color for well-known categories.
    ///
    /// Unknown categories return `None` and fall back to the base style.
    #[must_use]
    pub fn accent(&self) -> Option<Color> {
        match self.0.as_ref() {
            "info" => Some(palette::INFO_500),
            "success" => Some(palette::SUCCESS_500),
            "warning" => Some(palette::WARNING_500),
            "error" => Some(palette::ERROR_500),
            _ => None,
        }
    }
}

impl Default for Kind {
    fn default() -> Self {
        Self::INFO
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle state of a notification.
///
/// Each notification passes through all four phases exactly once, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Inserted, fully transparent and offset, waiting for the entrance frame.
    Created,
    /// Entrance transition applied; on screen.
    Visible,
    /// Exit transition running.
    Dismissing,
    /// Detached; the manager drops the notification once this is reached.
    Removed,
}

impl Phase {
    /// Returns the next phase in the lifecycle, if any.
    #[must_use]
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Created => Some(Phase::Visible),
            Phase::Visible => Some(Phase::Dismissing),
            Phase::Dismissing => Some(Phase::Removed),
            Phase::Removed => None,
        }
    }
}

/// A transient message presented to the user and dismissed automatically.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Style category (accent color and class name).
    kind: Kind,
    /// Literal message text. Never parsed as markup.
    message: String,
    /// Current lifecycle phase.
    phase: Phase,
    /// When this notification was created.
    created_at: Instant,
    /// When the current phase was entered (its scheduled deadline).
    phase_entered_at: Instant,
}

impl Notification {
    /// Creates a new notification in the `Created` phase.
    pub fn new(message: impl Into<String>, kind: Kind) -> Self {
        Self::new_at(message, kind, Instant::now())
    }

    /// Creates a notification with an explicit creation instant.
    ///
    /// Tests use this together with [`Notification::advance`] to simulate the
    /// lifecycle without waiting on real delays.
    pub fn new_at(message: impl Into<String>, kind: Kind, now: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            phase: Phase::Created,
            created_at: now,
            phase_entered_at: now,
        }
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Kind::INFO)
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Kind::SUCCESS)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Kind::WARNING)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Kind::ERROR)
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the style category.
    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Returns the literal message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether the lifecycle has fully run.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Deadline at which the given phase is scheduled to begin.
    fn deadline(&self, phase: Phase) -> Instant {
        match phase {
            Phase::Created => self.created_at,
            Phase::Visible => self.created_at + ENTRANCE_DELAY,
            Phase::Dismissing => self.created_at + DISPLAY_DURATION,
            Phase::Removed => self.created_at + DISPLAY_DURATION + EXIT_DURATION,
        }
    }

    /// Advances the lifecycle to whatever phase is due at `now`.
    ///
    /// Phases are stepped through one at a time so none is skipped even when
    /// ticks arrive late; the returned list contains every phase entered by
    /// this call, in order. Each phase's entry time is recorded as its
    /// scheduled deadline rather than the tick time, keeping transition
    /// progress independent of tick jitter.
    pub fn advance(&mut self, now: Instant) -> Vec<Phase> {
        let mut entered = Vec::new();
        while let Some(next) = self.phase.next() {
            if now < self.deadline(next) {
                break;
            }
            self.phase = next;
            self.phase_entered_at = self.deadline(next);
            entered.push(next);
        }
        entered
    }

    /// Progress of the transition belonging to the current phase, in `0.0..=1.0`.
    fn transition_progress(&self, now: Instant) -> f32 {
        let window = match self.phase {
            Phase::Created => return 0.0,
            Phase::Visible => ENTRANCE_TRANSITION,
            Phase::Dismissing => EXIT_DURATION,
            Phase::Removed => return 1.0,
        };
        let elapsed = now.saturating_duration_since(self.phase_entered_at);
        (elapsed.as_secs_f32() / window.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Current opacity: 0 before the entrance frame, fading in while
    /// `Visible`, fading back out while `Dismissing`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let progress = crate::ui::easing::ease_in_out(self.transition_progress(now));
        match self.phase {
            Phase::Created => 0.0,
            Phase::Visible => progress,
            Phase::Dismissing => 1.0 - progress,
            Phase::Removed => 0.0,
        }
    }

    /// Horizontal slide offset as a fraction: 1.0 fully offset toward the
    /// screen edge, 0.0 at the rest position.
    #[must_use]
    pub fn slide_offset(&self, now: Instant) -> f32 {
        let progress = crate::ui::easing::ease_in_out(self.transition_progress(now));
        match self.phase {
            Phase::Created => 1.0,
            Phase::Visible => 1.0 - progress,
            Phase::Dismissing => progress,
            Phase::Removed => 1.0,
        }
    }
}
