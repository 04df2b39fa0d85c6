// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes the native window events the shell cares about and provides the
//! periodic tick that drives every time-based behavior. The tick only runs
//! while something is actually animating or waiting, so an idle window
//! schedules no work.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Only window resizes are routed; everything else the shell reacts to
/// arrives through widget messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification lifecycles, smooth
/// scrolling, reveal transitions, and the resize debouncer.
pub fn create_tick_subscription(
    has_notifications: bool,
    is_scrolling: bool,
    is_revealing: bool,
    has_pending_resize: bool,
) -> Subscription<Message> {
    if has_notifications || is_scrolling || is_revealing || has_pending_resize {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
