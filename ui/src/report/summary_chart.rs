use dioxus::prelude::*;

const ACTUAL_FILL: &str = "#FF3B5F";
const GOAL_FILL: &str = "#4D4DFF";

const VIEW_WIDTH: f64 = 360.0;
const VIEW_HEIGHT: f64 = 240.0;
const PLOT_TOP: f64 = 32.0;
const BASELINE: f64 = 200.0;
const BAR_WIDTH: f64 = 72.0;

/// Actual-vs-goal screen time as a two-bar chart.
///
/// The chart layer consumes exactly two minute totals; bar geometry is
/// derived here and drawn as inline SVG. Passing the goal switches the
/// actual bar to the alert treatment.
#[component]
pub fn SummaryChart(actual_minutes: f64, goal_minutes: f64) -> Element {
    let ceiling = actual_minutes.max(goal_minutes).max(1.0);
    let bar_height = |minutes: f64| (minutes.max(0.0) / ceiling) * (BASELINE - PLOT_TOP);

    let actual_height = bar_height(actual_minutes);
    let goal_height = bar_height(goal_minutes);
    let actual_y = BASELINE - actual_height;
    let goal_y = BASELINE - goal_height;

    let over_goal = actual_minutes > goal_minutes;
    let actual_class = if over_goal {
        "summary-chart__bar summary-chart__bar--over"
    } else {
        "summary-chart__bar"
    };

    let actual_label = format!("{} min", actual_minutes.round() as i64);
    let goal_label = format!("{} min", goal_minutes.round() as i64);

    let baseline_end = VIEW_WIDTH - 24.0;
    let actual_value_y = actual_y - 8.0;
    let goal_value_y = goal_y - 8.0;
    let axis_y = BASELINE + 24.0;

    rsx! {
        svg {
            class: "summary-chart",
            view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
            role: "img",
            "aria-label": "Screen time, actual versus goal",

            line {
                class: "summary-chart__baseline",
                x1: "24",
                y1: "{BASELINE}",
                x2: "{baseline_end}",
                y2: "{BASELINE}",
            }

            rect {
                class: "{actual_class}",
                x: "84",
                y: "{actual_y}",
                width: "{BAR_WIDTH}",
                height: "{actual_height}",
                rx: "8",
                fill: ACTUAL_FILL,
            }
            rect {
                class: "summary-chart__bar",
                x: "204",
                y: "{goal_y}",
                width: "{BAR_WIDTH}",
                height: "{goal_height}",
                rx: "8",
                fill: GOAL_FILL,
            }

            text { class: "summary-chart__value", x: "120", y: "{actual_value_y}", text_anchor: "middle",
                "{actual_label}"
            }
            text { class: "summary-chart__value", x: "240", y: "{goal_value_y}", text_anchor: "middle",
                "{goal_label}"
            }

            text { class: "summary-chart__axis", x: "120", y: "{axis_y}", text_anchor: "middle",
                "Actual"
            }
            text { class: "summary-chart__axis", x: "240", y: "{axis_y}", text_anchor: "middle",
                "Goal"
            }
        }
    }
}
