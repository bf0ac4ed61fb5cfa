//! Navigation state: which link is highlighted, and smooth scrolling

use std::time::{Duration, Instant};

use super::data::Section;

/// How long a smooth scroll to an anchor takes
pub const SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Find the section whose nav link should be active.
///
/// `tops` are section top offsets in document order. The last section with
/// `scroll_y >= top - threshold` wins; None if no section qualifies.
pub fn active_section(tops: &[(Section, f32)], scroll_y: f32, threshold: f32) -> Option<Section> {
    let mut current = None;

    for &(section, top) in tops {
        if scroll_y >= top - threshold {
            current = Some(section);
        }
    }

    current
}

/// An in-flight smooth scroll between two vertical offsets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant) -> Self {
        Self { from, to, started }
    }

    /// Offset to show at `now`; lands exactly on the target once done
    pub fn offset_at(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }

        self.from + (self.to - self.from) * ease_in_out(progress)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Cubic ease-in-out over [0, 1]
fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}
