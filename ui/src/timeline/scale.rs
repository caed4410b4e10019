//! Pixel scale for goal-relative timelines.

/// Width in pixels at which a full goal renders.
pub const RENDER_WIDTH: f64 = 550.0;

/// Pixels per minute for a series measured against `goal_minutes`, chosen so
/// the goal spans exactly [`RENDER_WIDTH`]. A non-positive goal falls back to
/// 1 px/minute so widths stay finite.
pub fn scale(goal_minutes: f64) -> f64 {
    if goal_minutes > 0.0 {
        RENDER_WIDTH / goal_minutes
    } else {
        1.0
    }
}
