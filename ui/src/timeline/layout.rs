//! Segment layout for one activity series.
//!
//! A breakdown mapping is laid out left to right against the day's goal. Each
//! segment's drawn width is clamped to whatever budget remains before the
//! goal boundary, while the running total keeps counting the real, unclamped
//! minutes. Once the total passes the goal, the segment that pushed it over
//! (always the last one) is flagged as exceeding.

use indexmap::IndexMap;

use super::palette;
use super::scale::scale;

/// Which timeline a breakdown belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Screen-time activities, penalized for passing the goal.
    Screen,
    /// Productive activities; passing the ceiling is not penalized.
    Productive,
}

impl SeriesKind {
    /// Whether an exceeding final segment gets the alert treatment.
    pub fn penalizes_exceedance(self) -> bool {
        matches!(self, SeriesKind::Screen)
    }
}

/// One activity's rendered slice of a series timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySegment {
    pub label: String,
    pub color: &'static str,
    pub width_px: f64,
    pub is_exceeding: bool,
}

impl ActivitySegment {
    /// True when this segment should pulse in the given series. Exceeding a
    /// productive-time ceiling is fine; only the screen series alerts.
    pub fn pulses(&self, kind: SeriesKind) -> bool {
        self.is_exceeding && kind.penalizes_exceedance()
    }
}

/// Lay a breakdown out against `goal_minutes`, in mapping order. Mapping
/// order is significant: it fixes segment positions, colors, and which
/// segment counts as last.
///
/// The whole pass is a fold carrying `(accumulated, segments)`; `accumulated`
/// sums the unclamped durations so the exceedance check sees real elapsed
/// time rather than drawn width. A zero goal skips the budget clamp and the
/// 1 px/min fallback scale keeps segments proportional instead of collapsing
/// them to nothing.
pub fn layout_series(breakdown: &IndexMap<String, f64>, goal_minutes: f64) -> Vec<ActivitySegment> {
    let px_per_minute = scale(goal_minutes);
    let last_index = breakdown.len().checked_sub(1);

    let (_, segments) = breakdown.iter().enumerate().fold(
        (0.0_f64, Vec::with_capacity(breakdown.len())),
        |(accumulated, mut segments), (index, (label, &minutes))| {
            let clamped = if goal_minutes > 0.0 {
                minutes.min(goal_minutes - accumulated.max(0.0)).max(0.0)
            } else {
                minutes.max(0.0)
            };

            segments.push(ActivitySegment {
                label: label.clone(),
                color: palette::color_at(index),
                width_px: clamped * px_per_minute,
                is_exceeding: last_index == Some(index) && accumulated + minutes > goal_minutes,
            });

            (accumulated + minutes, segments)
        },
    );

    segments
}
