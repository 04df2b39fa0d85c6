// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

use super::Section;

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Details,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Notification(notifications::NotificationMessage),
    /// Smooth-scroll to a section (nav links, in-page buttons).
    JumpTo(Section),
    /// The page scrollable moved; feeds the reveal observer and nav elevation.
    PageScrolled {
        offset: f32,
        viewport_height: f32,
    },
    /// Copy the install command and confirm with a toast.
    CopyInstallCommand,
    /// Open the contact dialog.
    OpenContact,
    /// Close whichever modal is open (backdrop click or its primary action).
    DismissModal,
    ContactFieldChanged(ContactField, String),
    SubmitContact,
    /// Periodic tick driving notification lifecycles and animations.
    Tick(Instant),
    /// The window was resized; recompute the compact layout after a quiet period.
    WindowResized(iced::Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional theme override (`light`, `dark`, or `system`).
    pub theme: Option<String>,
    /// Optional data directory override (for the key-value store).
    /// Takes precedence over the `ICED_BEACON_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_BEACON_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
