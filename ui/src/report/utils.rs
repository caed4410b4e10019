//! Pure helpers behind the report page: day selection and picker labels.

use crate::core::format;
use crate::core::stats::DayRecord;

/// Days offered by the history picker, most recent first.
///
/// Today joins the list only once its morning survey is complete or it is a
/// rest day; until then only history is browsable. The backend leaves
/// `today.date` empty, so the synthesized entry is stamped with `today_iso`.
pub fn selectable_days(today: &DayRecord, history: &[DayRecord], today_iso: &str) -> Vec<DayRecord> {
    if today.morning_poll_completed || today.is_rest_day {
        let mut stamped = today.clone();
        stamped.date = today_iso.to_string();

        let mut days = Vec::with_capacity(history.len() + 1);
        days.push(stamped);
        days.extend_from_slice(history);
        days
    } else {
        history.to_vec()
    }
}

/// Find the record matching a picker selection.
pub fn lookup_day<'a>(days: &'a [DayRecord], date: &str) -> Option<&'a DayRecord> {
    days.iter().find(|day| day.date == date)
}

/// Picker option label: long date plus a rest-day marker. An unparseable
/// date falls back to the raw string rather than hiding the entry.
pub fn day_option_label(day: &DayRecord) -> String {
    let base = format::parse_iso_date(&day.date)
        .map(format::format_day_label)
        .unwrap_or_else(|| day.date.clone());

    if day.is_rest_day {
        format!("{base} (rest)")
    } else {
        base
    }
}
