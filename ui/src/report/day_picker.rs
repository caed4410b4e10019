use dioxus::prelude::*;

use crate::core::stats::DayRecord;
use crate::report::day_option_label;

/// Dropdown over the selectable days. The empty selection is a prompt state,
/// not an error; picking an entry writes its ISO date into `selected_date`.
#[component]
pub fn DayPicker(days: Vec<DayRecord>, selected_date: Signal<String>) -> Element {
    let mut selected = selected_date;
    let current = selected_date();

    rsx! {
        select {
            class: "day-picker",
            value: "{current}",
            onchange: move |evt| selected.set(evt.value()),

            option { value: "", "Pick a day" }
            for day in days.iter() {
                option { key: "{day.date}", value: "{day.date}", {day_option_label(day)} }
            }
        }
    }
}
