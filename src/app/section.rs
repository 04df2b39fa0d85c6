// SPDX-License-Identifier: MPL-2.0
//! Section enumeration for in-page navigation.

use crate::ui::design_tokens::sizing;
use crate::ui::reveal::Span;

/// Sections of the tour page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Features,
    Privacy,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 3] = [Section::Hero, Section::Features, Section::Privacy];

    /// Navigation label for the section.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Overview",
            Section::Features => "Features",
            Section::Privacy => "Privacy",
        }
    }

    /// Position of the section in document order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Section::Hero => 0,
            Section::Features => 1,
            Section::Privacy => 2,
        }
    }

    /// Fixed design height of the section.
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            Section::Hero => sizing::HERO_HEIGHT,
            Section::Features => sizing::FEATURES_HEIGHT,
            Section::Privacy => sizing::PRIVACY_HEIGHT,
        }
    }

    /// Vertical span of the section within the page content.
    #[must_use]
    pub fn span(self) -> Span {
        let top = Self::ALL
            .iter()
            .take(self.index())
            .map(|s| s.height())
            .sum();
        Span::new(top, self.height())
    }

    /// Spans of every section, in document order.
    #[must_use]
    pub fn spans() -> Vec<Span> {
        Self::ALL.iter().map(|s| s.span()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_contiguous_and_ordered() {
        let spans = Section::spans();
        assert_eq!(spans.len(), Section::ALL.len());
        assert_eq!(spans[0].top, 0.0);
        for pair in spans.windows(2) {
            assert_eq!(pair[0].bottom, pair[1].top);
        }
    }

    #[test]
    fn span_height_matches_section_height() {
        for section in Section::ALL {
            let span = section.span();
            assert_eq!(span.bottom - span.top, section.height());
        }
    }
}
