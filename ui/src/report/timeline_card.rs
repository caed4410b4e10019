use dioxus::prelude::*;
use indexmap::IndexMap;

use crate::timeline::{layout_series, legend, ruler, scale, SeriesKind};

/// One series rendered as a minute ruler, a segment strip, and a legend.
///
/// The card consumes only the renderer's numeric output: widths and offsets
/// become inline styles, nothing else. An empty breakdown renders nothing at
/// all rather than an empty card.
#[component]
pub fn TimelineCard(
    title: String,
    breakdown: IndexMap<String, f64>,
    goal_minutes: f64,
    kind: SeriesKind,
) -> Element {
    if breakdown.is_empty() {
        return rsx! {};
    }

    let segments = layout_series(&breakdown, goal_minutes);
    let entries = legend(breakdown.keys().cloned());
    let ticks = ruler(goal_minutes);
    let strip_width = goal_minutes.max(0.0) * scale(goal_minutes);

    rsx! {
        section { class: "card timeline-card",
            h2 { class: "timeline-card__title", "{title}" }

            div { class: "timeline-card__scroller",
                div { class: "minute-ruler", style: "width: {strip_width}px;",
                    for tick in ticks.iter() {
                        div {
                            key: "{tick.minute}",
                            class: if tick.is_origin() {
                                "minute-ruler__tick minute-ruler__tick--origin"
                            } else {
                                "minute-ruler__tick"
                            },
                            style: "left: {tick.offset_px}px;",
                            "{tick.minute} min"
                            div { class: "minute-ruler__mark" }
                        }
                    }
                }

                div { class: "timeline-strip", style: "width: {strip_width}px;",
                    for segment in segments.iter() {
                        div {
                            key: "{segment.label}",
                            class: if segment.pulses(kind) {
                                "timeline-segment timeline-segment--exceeding"
                            } else {
                                "timeline-segment"
                            },
                            style: "width: {segment.width_px}px; background-color: {segment.color};",
                        }
                    }
                }
            }

            div { class: "timeline-card__legend",
                for entry in entries.iter() {
                    div { key: "{entry.label}", class: "legend-row",
                        div {
                            class: "legend-row__swatch",
                            style: "background-color: {entry.color};",
                        }
                        span { class: "legend-row__label", "{entry.label}" }
                    }
                }
            }
        }
    }
}
