// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for in-page navigation.
//!
//! The bar shows the brand, one link per page section, and the theme toggle.
//! Once the page has scrolled past the elevation threshold the bar picks up
//! a shadow, separating it from the content sliding underneath.

use crate::app::Section;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    /// Whether the page has scrolled past the elevation threshold.
    pub elevated: bool,
    pub theme_mode: ThemeMode,
    /// Compact layout drops the section links.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Go(Section),
    ToggleTheme,
}

/// Builds the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'static, Message> {
    let brand_color = ctx.scheme.brand_primary;
    let brand = Text::new("Beacon")
        .size(typography::TITLE_MD)
        .style(move |_theme: &Theme| text::Style {
            color: Some(brand_color),
        });

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::space::horizontal());

    if !ctx.compact {
        for section in Section::ALL {
            row = row.push(link_button(section, ctx.scheme));
        }
    }

    let theme_label = match ctx.theme_mode {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
        ThemeMode::System => "Auto",
    };
    row = row.push(
        button(Text::new(theme_label).size(typography::BODY))
            .on_press(Message::ToggleTheme)
            .padding([spacing::XXS, spacing::SM]),
    );

    let background = ctx.scheme.surface_primary;
    let text_color = ctx.scheme.text_primary;
    let elevated = ctx.elevated;
    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::XS, spacing::LG])
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(background)),
            shadow: if elevated { shadow::SM } else { shadow::NONE },
            text_color: Some(text_color),
            ..Default::default()
        })
        .into()
}

fn link_button(section: Section, scheme: &ColorScheme) -> Element<'static, Message> {
    let color = scheme.text_secondary;
    let hover = scheme.brand_primary;
    button(
        Text::new(section.label())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style { color: Some(color) }),
    )
    .on_press(Message::Go(section))
    .padding([spacing::XXS, spacing::SM])
    .style(move |_theme: &Theme, status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => color,
        };
        button::Style {
            background: None,
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    })
    .into()
}
