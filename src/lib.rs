// SPDX-License-Identifier: MPL-2.0
//! `iced_beacon` is the desktop product tour for Beacon, built with the Iced
//! GUI framework.
//!
//! It provides toast notifications, scroll-triggered section reveals, smooth
//! in-page navigation, modal dialogs, clipboard feedback, and persistent user
//! preferences, wired together by a small demo shell in [`app`].

pub mod app;
pub mod config;
pub mod debounce;
pub mod error;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod test_utils;
