// SPDX-License-Identifier: MPL-2.0
//! Required-field form validation.
//!
//! A [`Field`] tracks its text value and an error flag set by validation.
//! Validation trims whitespace, so a value of spaces counts as empty. The
//! error flag clears as soon as a later validation pass sees a value.

use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{text, text_input, Column, Text};
use iced::{Element, Theme};

/// A single text field participating in validation.
#[derive(Debug, Clone, Default)]
pub struct Field {
    label: &'static str,
    value: String,
    required: bool,
    error: bool,
}

impl Field {
    /// Creates a required field.
    #[must_use]
    pub fn required(label: &'static str) -> Self {
        Self {
            label,
            required: true,
            ..Self::default()
        }
    }

    /// Creates an optional field.
    #[must_use]
    pub fn optional(label: &'static str) -> Self {
        Self {
            label,
            ..Self::default()
        }
    }

    /// Returns the field label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Returns whether the last validation flagged this field.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Returns whether the trimmed value is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Validates this field, updating the error flag.
    pub fn validate(&mut self) -> bool {
        self.error = self.required && self.is_blank();
        !self.error
    }

    /// Clears the value and the error flag.
    pub fn reset(&mut self) {
        self.value.clear();
        self.error = false;
    }
}

/// Validates every field, updating error flags.
///
/// Returns `true` only if all required fields have non-blank values.
pub fn validate(fields: &mut [&mut Field]) -> bool {
    let mut valid = true;
    for field in fields {
        valid &= field.validate();
    }
    valid
}

/// Renders a labeled input for `field`, with an error border and hint when
/// the last validation flagged it.
pub fn field_input<'a, Message: Clone + 'a>(
    field: &'a Field,
    placeholder: &'a str,
    scheme: &ColorScheme,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let label_color = scheme.text_secondary;
    let label = Text::new(field.label())
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style {
            color: Some(label_color),
        });

    let has_error = field.has_error();
    let input = text_input(placeholder, field.value())
        .on_input(on_input)
        .padding(spacing::XS)
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if has_error {
                style.border = iced::Border {
                    color: palette::ERROR_500,
                    width: border::WIDTH_MD,
                    radius: radius::SM.into(),
                };
            }
            style
        });

    let mut column = Column::new().spacing(spacing::XXS).push(label).push(input);

    if has_error {
        column = column.push(
            Text::new("This field is required")
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_with_value_passes() {
        let mut field = Field::required("name");
        field.set_value("Ada".to_string());
        assert!(field.validate());
        assert!(!field.has_error());
    }

    #[test]
    fn required_blank_field_fails() {
        let mut field = Field::required("name");
        assert!(!field.validate());
        assert!(field.has_error());
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut field = Field::required("name");
        field.set_value("   \t".to_string());
        assert!(!field.validate());
    }

    #[test]
    fn optional_field_may_stay_blank() {
        let mut field = Field::optional("nickname");
        assert!(field.validate());
        assert!(!field.has_error());
    }

    #[test]
    fn error_clears_once_refilled() {
        let mut field = Field::required("name");
        assert!(!field.validate());
        assert!(field.has_error());

        field.set_value("Grace".to_string());
        assert!(field.validate());
        assert!(!field.has_error());
    }

    #[test]
    fn validate_checks_every_field() {
        let mut name = Field::required("name");
        let mut email = Field::required("email");
        let mut note = Field::optional("note");
        name.set_value("Ada".to_string());

        assert!(!validate(&mut [&mut name, &mut email, &mut note]));
        assert!(!name.has_error());
        assert!(email.has_error());
        assert!(!note.has_error());

        email.set_value("ada@example.com".to_string());
        assert!(validate(&mut [&mut name, &mut email, &mut note]));
    }

    #[test]
    fn reset_clears_value_and_error() {
        let mut field = Field::required("name");
        field.validate();
        field.reset();
        assert!(!field.has_error());
        assert_eq!(field.value(), "");
    }
}
