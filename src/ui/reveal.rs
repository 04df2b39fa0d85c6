// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered section reveals.
//!
//! The [`Observer`] watches registered vertical spans of the page content and
//! marks each as revealed once enough of it scrolls into view. Revealed spans
//! animate from transparent-and-lowered to opaque-and-in-place; reveal is
//! sticky, so scrolling back up never hides a section again.

use crate::ui::easing;
use std::time::{Duration, Instant};

/// Fraction of a span that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// The viewport's bottom edge is pulled up by this much, so sections reveal
/// slightly before they would otherwise reach the fold.
pub const BOTTOM_MARGIN: f32 = 50.0;

/// Length of the reveal fade/slide transition.
pub const REVEAL_TRANSITION: Duration = Duration::from_millis(600);

/// A vertical span of the page content, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }

    fn height(self) -> f32 {
        (self.bottom - self.top).max(f32::EPSILON)
    }
}

/// Per-span reveal state.
#[derive(Debug, Clone, Copy, Default)]
struct RevealState {
    revealed_at: Option<Instant>,
}

/// Sticky visibility observer over a fixed set of spans.
#[derive(Debug)]
pub struct Observer {
    threshold: f32,
    bottom_margin: f32,
    spans: Vec<Span>,
    states: Vec<RevealState>,
}

impl Observer {
    /// Creates an observer over the given spans with the default threshold
    /// and margin.
    #[must_use]
    pub fn new(spans: Vec<Span>) -> Self {
        Self::with_options(spans, REVEAL_THRESHOLD, BOTTOM_MARGIN)
    }

    /// Creates an observer with explicit threshold and bottom margin.
    #[must_use]
    pub fn with_options(spans: Vec<Span>, threshold: f32, bottom_margin: f32) -> Self {
        let states = vec![RevealState::default(); spans.len()];
        Self {
            threshold,
            bottom_margin,
            spans,
            states,
        }
    }

    /// Fraction of `span` lying inside the margin-adjusted viewport.
    fn visible_fraction(&self, span: Span, viewport_top: f32, viewport_height: f32) -> f32 {
        let viewport_bottom = viewport_top + (viewport_height - self.bottom_margin).max(0.0);
        let overlap = span.bottom.min(viewport_bottom) - span.top.max(viewport_top);
        (overlap / span.height()).clamp(0.0, 1.0)
    }

    /// Feeds the current scroll viewport to the observer.
    ///
    /// Any span whose visible fraction reaches the threshold is revealed at
    /// `now`. Returns the number of spans newly revealed by this update.
    pub fn update(&mut self, viewport_top: f32, viewport_height: f32, now: Instant) -> usize {
        let mut newly_revealed = 0;
        for index in 0..self.spans.len() {
            if self.states[index].revealed_at.is_some() {
                continue;
            }
            if self.visible_fraction(self.spans[index], viewport_top, viewport_height)
                >= self.threshold
            {
                self.states[index].revealed_at = Some(now);
                newly_revealed += 1;
            }
        }
        newly_revealed
    }

    /// Returns whether the span at `index` has been revealed.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.states
            .get(index)
            .is_some_and(|s| s.revealed_at.is_some())
    }

    /// Eased reveal progress for the span at `index`: 0.0 hidden, 1.0 settled.
    #[must_use]
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        let Some(revealed_at) = self.states.get(index).and_then(|s| s.revealed_at) else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(revealed_at);
        let linear = (elapsed.as_secs_f32() / REVEAL_TRANSITION.as_secs_f32()).clamp(0.0, 1.0);
        easing::ease_in_out(linear)
    }

    /// Returns whether any reveal transition is still animating at `now`.
    ///
    /// Used to keep the tick subscription alive only while needed.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.states.iter().any(|s| {
            s.revealed_at
                .is_some_and(|at| now.saturating_duration_since(at) < REVEAL_TRANSITION)
        })
    }

    /// Returns whether every span has been revealed.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        self.states.iter().all(|s| s.revealed_at.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn observer() -> Observer {
        // Three stacked 400px sections.
        Observer::new(vec![
            Span::new(0.0, 400.0),
            Span::new(400.0, 400.0),
            Span::new(800.0, 400.0),
        ])
    }

    #[test]
    fn sections_above_the_fold_reveal_immediately() {
        let mut obs = observer();
        let now = Instant::now();

        assert_eq!(obs.update(0.0, 600.0, now), 2);
        assert!(obs.is_revealed(0));
        assert!(obs.is_revealed(1));
        assert!(!obs.is_revealed(2));
    }

    #[test]
    fn bottom_margin_delays_reveal_at_the_fold() {
        // Span starts exactly at the viewport bottom minus margin: zero overlap.
        let mut obs = Observer::new(vec![Span::new(550.0, 400.0)]);
        let now = Instant::now();
        assert_eq!(obs.update(0.0, 600.0, now), 0);

        // Scrolling down past the margin reveals it.
        assert_eq!(obs.update(100.0, 600.0, now), 1);
    }

    #[test]
    fn threshold_requires_a_tenth_visible() {
        let mut obs = observer();
        let now = Instant::now();

        // 39px of section 1 visible after margin: fraction just under 0.1.
        assert_eq!(obs.update(0.0, 489.0, now), 1);
        assert!(!obs.is_revealed(1));

        // One more pixel crosses the threshold.
        assert_eq!(obs.update(0.0, 490.0, now), 1);
        assert!(obs.is_revealed(1));
    }

    #[test]
    fn reveal_is_sticky() {
        let mut obs = observer();
        let now = Instant::now();

        obs.update(800.0, 600.0, now);
        assert!(obs.is_revealed(2));

        // Scrolling back to the top does not un-reveal.
        obs.update(0.0, 600.0, now + Duration::from_secs(1));
        assert!(obs.is_revealed(2));
    }

    #[test]
    fn progress_ramps_then_settles() {
        let mut obs = observer();
        let now = Instant::now();
        obs.update(0.0, 600.0, now);

        assert_abs_diff_eq!(obs.progress(2, now), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(obs.progress(0, now), 0.0, epsilon = F32_EPSILON);

        let midway = now + REVEAL_TRANSITION / 2;
        assert!(obs.progress(0, midway) > 0.0 && obs.progress(0, midway) < 1.0);

        let settled = now + REVEAL_TRANSITION;
        assert_abs_diff_eq!(obs.progress(0, settled), 1.0, epsilon = F32_EPSILON);
        assert!(!obs.is_animating(settled));
        assert!(obs.is_animating(midway));
    }

    #[test]
    fn all_revealed_reports_completion() {
        let mut obs = observer();
        let now = Instant::now();
        assert!(!obs.all_revealed());

        obs.update(0.0, 2000.0, now);
        assert!(obs.all_revealed());
    }
}
