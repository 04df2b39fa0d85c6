// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications: small cards with a
//! category-colored accent that fade and slide through their entrance and
//! exit transitions. This module only renders; the lifecycle itself lives in
//! [`super::manager`].

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::theming::{fade, ColorScheme};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Element, Length, Padding, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification at its transition state for `now`.
    pub fn view<'a>(
        notification: &'a Notification,
        scheme: &ColorScheme,
        now: Instant,
    ) -> Element<'a, Message> {
        let opacity = notification.opacity(now);
        let slide = notification.slide_offset(now);

        // Unknown categories carry no accent and get the base border only.
        let accent = notification.kind().accent();

        let message_color = fade(scheme.text_primary, opacity);
        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(message_color),
            });

        let background = fade(scheme.surface_primary, opacity);
        let border_color = fade(accent.unwrap_or(scheme.surface_secondary), opacity);
        let card = Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(background)),
                border: iced::Border {
                    color: border_color,
                    width: border::WIDTH_MD,
                    radius: radius::MD.into(),
                },
                shadow: if opacity > 0.0 {
                    shadow::MD
                } else {
                    shadow::NONE
                },
                text_color: Some(message_color),
                ..Default::default()
            });

        // The slide is rendered as a shrinking right inset: a fresh toast
        // starts flush with the stack edge and settles inward, reversing on
        // its way out.
        let inset = (1.0 - slide) * sizing::TOAST_SLIDE_DISTANCE;
        Container::new(card)
            .width(Length::Fixed(
                sizing::TOAST_WIDTH + sizing::TOAST_SLIDE_DISTANCE,
            ))
            .align_x(alignment::Horizontal::Right)
            .padding(Padding {
                right: inset,
                ..Padding::ZERO
            })
            .into()
    }

    /// Renders the toast overlay with all active notifications.
    ///
    /// Positions toasts in the top-right corner, stacked vertically with the
    /// oldest on top.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        scheme: &ColorScheme,
        now: Instant,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .active()
            .map(|notification| Self::view(notification, scheme, now))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(spacing::MD)
                .into()
        }
    }
}
