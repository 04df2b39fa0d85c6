// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`notifications`] - Toast notification system for user feedback
//! - [`reveal`] - Scroll-triggered section reveal animations
//! - [`scroll`] - Smooth in-page scrolling
//! - [`modal`] - Modal dialog overlay
//! - [`form`] - Required-field form validation
//! - [`navbar`] - Navigation bar with section links and theme toggle
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`easing`] - Easing curves for transitions

pub mod design_tokens;
pub mod easing;
pub mod form;
pub mod modal;
pub mod navbar;
pub mod notifications;
pub mod reveal;
pub mod scroll;
pub mod theming;
