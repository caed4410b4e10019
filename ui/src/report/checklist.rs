use dioxus::prelude::*;

use crate::core::format;
use crate::core::stats::DayRecord;

/// Hour summary plus the planned-activity list for one day. Used for today's
/// card and for whichever historical day the picker selects.
#[component]
pub fn DayChecklist(day: DayRecord) -> Element {
    let entries = day.planned_checklist();

    rsx! {
        p { class: "checklist__totals",
            "Screen time: {format::format_hours_approx(day.screen_time_actual)} / {format::format_hours(day.screen_time_goal)}"
        }
        p { class: "checklist__totals",
            "Productive time: {format::format_hours_approx(day.productive_time_actual)}"
        }

        ul { class: "checklist",
            for (kind, entry) in entries {
                li {
                    key: "{kind.label()}",
                    class: if entry.done { "checklist__item checklist__item--done" } else { "checklist__item" },
                    if entry.done {
                        "{kind.label()}: ✅ done"
                    } else {
                        "{kind.label()}: ❌ not yet"
                    }
                }
            }
        }
    }
}

/// Today's checklist block: the checklist once the morning survey is in, a
/// rest card on rest days, a prompt otherwise.
#[component]
pub fn TodayChecklistCard(day: DayRecord) -> Element {
    if day.morning_poll_completed && !day.is_rest_day {
        rsx! {
            section { class: "card checklist-card",
                h2 { "Today's checklist" }
                DayChecklist { day }
            }
        }
    } else if day.is_rest_day {
        rsx! {
            section { class: "card",
                p { "🏖️ Today is a rest day. Nothing is tracked." }
            }
        }
    } else {
        rsx! {
            section { class: "card",
                p { "The checklist unlocks after the morning survey (/morning)." }
            }
        }
    }
}
