//! Fixed activity color palette and legend pairing.

/// Ordered palette. A breakdown's Nth activity always takes the Nth color
/// (wrapping), so segment strips and legend rows stay in sync for free.
pub const PALETTE: [&str; 10] = [
    "#00FF9B", "#4D4DFF", "#FF3B5F", "#8C52FF", "#FFD700", "#1ABC9C", "#9B59B6", "#FF7F50",
    "#3498DB", "#F39C12",
];

/// Color for the activity at `index` within its breakdown.
pub fn color_at(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A label/swatch pair for the series legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

/// Pair each label with the color of its position.
pub fn legend<I, S>(labels: I) -> Vec<LegendEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| LegendEntry {
            label: label.into(),
            color: color_at(index),
        })
        .collect()
}
