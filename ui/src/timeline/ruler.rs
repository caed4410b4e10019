//! Minute-axis tick marks for the timeline ruler.

use super::scale::scale;

/// Interval between ruler ticks, in minutes.
const TICK_INTERVAL_MIN: u32 = 60;

/// One labeled mark on the minute axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub minute: u32,
    pub offset_px: f64,
}

impl TickMark {
    /// The zero tick is pinned to the left edge with no centering transform
    /// so its label isn't clipped; every later tick centers on its offset.
    pub fn is_origin(&self) -> bool {
        self.minute == 0
    }
}

/// Tick marks every hour from zero through the goal rounded up to a whole
/// hour. The final tick may land past the goal itself; the ruler is rendered
/// in an overflow-visible container so it stays readable.
pub fn ruler(goal_minutes: f64) -> Vec<TickMark> {
    let px_per_minute = scale(goal_minutes);
    let hours = (goal_minutes.max(0.0) / f64::from(TICK_INTERVAL_MIN)).ceil() as u32;

    (0..=hours)
        .map(|hour| {
            let minute = hour * TICK_INTERVAL_MIN;
            TickMark {
                minute,
                offset_px: f64::from(minute) * px_per_minute,
            }
        })
        .collect()
}
