// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Builds the tour page (navigation bar + scrollable sections), the toast
//! overlay, and whichever modal is open. Section reveal progress and toast
//! transition states are sampled at the instant carried by the view context.

use super::{ContactField, ContactForm, Message, Modal, Section};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::form;
use crate::ui::modal;
use crate::ui::navbar;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::reveal::Observer;
use crate::ui::theming::{fade, ColorScheme, ThemeMode};
use iced::widget::scrollable::Viewport;
use iced::widget::{button, container, text, Column, Container, Id, Row, Scrollable, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length, Padding, Theme,
};
use std::time::Instant;

/// Identifier of the page scrollable, shared with the smooth-scroll tasks.
pub const PAGE_SCROLLABLE_ID: &str = "beacon-page";

/// The command the hero section offers to copy.
pub const INSTALL_COMMAND: &str = "cargo install beacon-cli";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub theme_mode: ThemeMode,
    pub compact: bool,
    pub elevated: bool,
    pub notifications: &'a Manager,
    pub observer: &'a Observer,
    pub modal: Option<Modal>,
    pub contact: &'a ContactForm,
    pub now: Instant,
}

/// Renders the full application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        scheme: ctx.scheme,
        elevated: ctx.elevated,
        theme_mode: ctx.theme_mode,
        compact: ctx.compact,
    })
    .map(Message::Navbar);

    let content = Column::new()
        .push(hero(ctx.scheme, ctx.observer, ctx.now))
        .push(features(ctx.scheme, ctx.observer, ctx.compact, ctx.now))
        .push(privacy(ctx.scheme, ctx.observer, ctx.now));

    let page = Scrollable::new(content)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            offset: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        });

    let surface = ctx.scheme.surface_secondary;
    let base: Element<'_, Message> = Container::new(Column::new().push(navbar_view).push(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(surface)),
            ..Default::default()
        })
        .into();

    let toast_overlay =
        Toast::view_overlay(ctx.notifications, ctx.scheme, ctx.now).map(Message::Notification);

    let stacked: Element<'_, Message> = Stack::new().push(base).push(toast_overlay).into();

    match ctx.modal {
        Some(Modal::Welcome) => modal::overlay(
            stacked,
            welcome_card(ctx.scheme),
            Message::DismissModal,
            ctx.scheme,
        ),
        Some(Modal::Contact) => modal::overlay(
            stacked,
            contact_card(ctx.contact, ctx.scheme),
            Message::DismissModal,
            ctx.scheme,
        ),
        None => stacked,
    }
}

/// Wraps a revealable block: lowered and transparent until its section
/// reveals, then easing up into place.
fn reveal_block(content: Element<'_, Message>, progress: f32) -> Element<'_, Message> {
    let lift = sizing::REVEAL_SLIDE_DISTANCE * (1.0 - progress);
    Container::new(content)
        .padding(Padding {
            top: lift,
            ..Padding::ZERO
        })
        .into()
}

fn hero<'a>(scheme: &ColorScheme, observer: &Observer, now: Instant) -> Element<'a, Message> {
    let progress = observer.progress(Section::Hero.index(), now);

    let title_color = fade(scheme.brand_primary, progress);
    let title = Text::new("Beacon")
        .size(typography::TITLE_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(title_color),
        });

    let tagline_color = fade(scheme.text_secondary, progress);
    let tagline = Text::new("A tiny signal relay for people who would rather own their data.")
        .size(typography::BODY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(tagline_color),
        });

    let chip_bg = fade(scheme.surface_primary, progress);
    let chip_text = fade(scheme.text_primary, progress);
    let command_chip = Container::new(Text::new(INSTALL_COMMAND).size(typography::BODY).style(
        move |_theme: &Theme| text::Style {
            color: Some(chip_text),
        },
    ))
    .padding([spacing::XXS, spacing::SM])
    .style(move |_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(chip_bg)),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let install_row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(command_chip)
        .push(primary_button("Copy", scheme, Message::CopyInstallCommand));

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(primary_button(
            "See features",
            scheme,
            Message::JumpTo(Section::Features),
        ))
        .push(primary_button("Get in touch", scheme, Message::OpenContact));

    let body = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(tagline)
        .push(install_row)
        .push(actions);

    section_frame(Section::Hero, reveal_block(body.into(), progress))
}

fn features<'a>(
    scheme: &ColorScheme,
    observer: &Observer,
    compact: bool,
    now: Instant,
) -> Element<'a, Message> {
    let progress = observer.progress(Section::Features.index(), now);

    let cards = [
        (
            "Instant setup",
            "One binary, no accounts. Beacon is broadcasting before your coffee cools.",
        ),
        (
            "Private by default",
            "Nothing leaves your machine unless you say so. No telemetry, no phoning home.",
        ),
        (
            "Works everywhere",
            "Linux, macOS, and Windows builds from a single codebase.",
        ),
    ];

    let card_elements = cards
        .into_iter()
        .map(|(title, blurb)| feature_card(title, blurb, scheme, progress));

    let card_layout: Element<'a, Message> = if compact {
        let mut column = Column::new().spacing(spacing::MD);
        for card in card_elements {
            column = column.push(card);
        }
        column.into()
    } else {
        let mut row = Row::new().spacing(spacing::MD);
        for card in card_elements {
            row = row.push(card);
        }
        row.into()
    };

    let body = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(section_title("Why Beacon", scheme, progress))
        .push(card_layout);

    section_frame(Section::Features, reveal_block(body.into(), progress))
}

fn privacy<'a>(scheme: &ColorScheme, observer: &Observer, now: Instant) -> Element<'a, Message> {
    let progress = observer.progress(Section::Privacy.index(), now);

    let body_color = fade(scheme.text_secondary, progress);
    let paragraph = |content: &'static str| {
        Text::new(content)
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(body_color),
            })
    };

    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(section_title("Private by design", scheme, progress))
        .push(paragraph(
            "Beacon keeps every relay hop on hardware you control. There is no \
             cloud tier, no account, and nothing to unsubscribe from.",
        ))
        .push(paragraph(
            "The only data Beacon stores is the data you hand it, and deleting \
             it is one keypress away.",
        ))
        .push(primary_button("Get in touch", scheme, Message::OpenContact));

    section_frame(Section::Privacy, reveal_block(body.into(), progress))
}

/// Fixed-height frame for a page section; the reveal observer relies on
/// these heights to know each section's span.
fn section_frame<'a>(
    section: Section,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(section.height()))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .into()
}

fn section_title<'a>(title: &'static str, scheme: &ColorScheme, progress: f32) -> Element<'a, Message> {
    let color = fade(scheme.text_primary, progress);
    Text::new(title)
        .size(typography::TITLE_MD)
        .style(move |_theme: &Theme| text::Style { color: Some(color) })
        .into()
}

fn feature_card<'a>(
    title: &'static str,
    blurb: &'static str,
    scheme: &ColorScheme,
    progress: f32,
) -> Element<'a, Message> {
    let title_color = fade(scheme.text_primary, progress);
    let blurb_color = fade(scheme.text_secondary, progress);
    let background = fade(scheme.surface_primary, progress);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(title)
                .size(typography::TITLE_SM)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(title_color),
                }),
        )
        .push(
            Text::new(blurb)
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(blurb_color),
                }),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(background)),
            border: iced::Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn primary_button<'a>(
    label: &'static str,
    scheme: &ColorScheme,
    on_press: Message,
) -> Element<'a, Message> {
    let base = scheme.brand_primary;
    let hovered = scheme.brand_secondary;
    let label_color = scheme.overlay_text;
    button(
        Text::new(label)
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(label_color),
            }),
    )
    .on_press(on_press)
    .padding([spacing::XS, spacing::MD])
    .style(move |_theme: &Theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => hovered,
            _ => base,
        };
        button::Style {
            background: Some(iced::Background::Color(background)),
            text_color: label_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: crate::ui::design_tokens::shadow::NONE,
            snap: true,
        }
    })
    .into()
}

fn welcome_card(scheme: &ColorScheme) -> Element<'static, Message> {
    let title_color = scheme.text_primary;
    let body_color = scheme.text_secondary;
    Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new("Welcome to Beacon")
                .size(typography::TITLE_MD)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(title_color),
                }),
        )
        .push(
            Text::new(
                "This short tour walks through what Beacon does and how to get \
                 it running. Scroll down, or use the links in the bar above.",
            )
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(body_color),
            }),
        )
        .push(primary_button("Get started", scheme, Message::DismissModal))
        .into()
}

fn contact_card<'a>(contact: &'a ContactForm, scheme: &ColorScheme) -> Element<'a, Message> {
    let title_color = scheme.text_primary;
    let title = Text::new("Get in touch")
        .size(typography::TITLE_MD)
        .style(move |_theme: &Theme| text::Style {
            color: Some(title_color),
        });

    let name = form::field_input(&contact.name, "Ada Lovelace", scheme, |value| {
        Message::ContactFieldChanged(ContactField::Name, value)
    });
    let email = form::field_input(&contact.email, "you@example.com", scheme, |value| {
        Message::ContactFieldChanged(ContactField::Email, value)
    });
    let details = form::field_input(&contact.details, "Tell us anything", scheme, |value| {
        Message::ContactFieldChanged(ContactField::Details, value)
    });

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(iced::widget::space::horizontal())
        .push(primary_button("Send", scheme, Message::SubmitContact));

    Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(name)
        .push(email)
        .push(details)
        .push(actions)
        .into()
}
