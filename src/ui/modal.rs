// SPDX-License-Identifier: MPL-2.0
//! Modal dialog overlay.
//!
//! Stacks a dimmed backdrop and a centered surface card over the page.
//! Clicking the backdrop dismisses the dialog; clicks inside the card are
//! kept away from both the backdrop and the page underneath.

use crate::ui::design_tokens::{radius, shadow, sizing, spacing};
use crate::ui::theming::ColorScheme;
use iced::widget::{center, container, mouse_area, opaque, Container, Stack};
use iced::{Color, Element, Length, Theme};

/// Wraps `base` with a modal overlay showing `content` in a centered card.
///
/// `on_dismiss` is emitted when the user clicks outside the card.
pub fn overlay<'a, Message: Clone + 'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_dismiss: Message,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let surface = scheme.surface_primary;
    let text = scheme.text_primary;
    let card = Container::new(content)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            border: iced::Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: shadow::LG,
            text_color: Some(text),
            ..Default::default()
        });

    let backdrop: Color = scheme.overlay_background;
    let dimmed = center(opaque(card)).style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(backdrop)),
        ..Default::default()
    });

    Stack::new()
        .push(base)
        .push(opaque(mouse_area(dimmed).on_press(on_dismiss)))
        .into()
}
