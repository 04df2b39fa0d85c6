// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (copy success, form errors, etc.) without blocking
//! interaction, and dismiss themselves on a fixed schedule.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with its lifecycle phases
//! - [`manager`] - `Manager` owning active notifications and their timing
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Kind, Manager};
//!
//! // Create a manager
//! let mut manager = Manager::new();
//!
//! // Fire-and-forget a notification
//! manager.notify("Copied to clipboard!", Kind::SUCCESS);
//!
//! // Drive lifecycles from the periodic tick subscription
//! manager.tick(now);
//!
//! // In your view function, render the overlay
//! let toast_overlay = Toast::view_overlay(&manager, &scheme, now).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Lifecycle: entrance after 100 ms, dismissal begins 3 s after creation,
//!   removal 300 ms later when the exit transition completes
//! - Concurrent toasts stack top-right and never delay one another
//! - No user dismissal: every toast runs its full lifecycle

pub mod manager;
pub mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, Transition};
pub use notification::{Kind, Notification, NotificationId, Phase};
pub use toast::Toast;
