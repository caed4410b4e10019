//! Goal-relative activity timeline renderer.
//!
//! Everything here is pure layout math: a day's breakdown mappings come in,
//! positioned segments, ruler ticks, and legend entries come out. The report
//! components turn those numbers into markup; nothing in this module touches
//! the DOM or fetches data.

mod layout;
mod palette;
mod ruler;
mod scale;

pub use layout::{layout_series, ActivitySegment, SeriesKind};
pub use palette::{color_at, legend, LegendEntry, PALETTE};
pub use ruler::{ruler, TickMark};
pub use scale::{scale, RENDER_WIDTH};
