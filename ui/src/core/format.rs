//! Formatting helpers for presenting day records.

use time::{macros::format_description, Date, OffsetDateTime};

/// Minutes as hours rounded to one decimal, e.g. `"7.5 h"` or `"8 h"`.
pub fn format_hours(minutes: f64) -> String {
    format!("{} h", round_hours(minutes))
}

/// Approximate variant for measured totals, e.g. `"~2.1 h"`.
pub fn format_hours_approx(minutes: f64) -> String {
    format!("~{} h", round_hours(minutes))
}

fn round_hours(minutes: f64) -> f64 {
    (minutes / 60.0 * 10.0).round() / 10.0
}

/// Long label for the day picker, e.g. `"Monday, 1 January"`.
pub fn format_day_label(date: Date) -> String {
    date.format(&format_description!(
        "[weekday repr:long], [day padding:none] [month repr:long]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Parse an ISO `YYYY-MM-DD` date string.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw, &format_description!("[year]-[month]-[day]")).ok()
}

/// An ISO `YYYY-MM-DD` rendering of `date`.
pub fn format_iso_date(date: Date) -> String {
    date.format(&format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}

/// Today's calendar date (UTC) as the ISO string used by day records.
pub fn today_iso() -> String {
    format_iso_date(OffsetDateTime::now_utc().date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hours_round_to_one_decimal() {
        assert_eq!(format_hours(480.0), "8 h");
        assert_eq!(format_hours(450.0), "7.5 h");
        assert_eq!(format_hours_approx(125.0), "~2.1 h");
        assert_eq!(format_hours_approx(0.0), "~0 h");
    }

    #[test]
    fn iso_dates_round_trip() {
        let date = parse_iso_date("2025-08-05").unwrap();
        assert_eq!(format_iso_date(date), "2025-08-05");
    }

    #[test]
    fn day_label_spells_out_weekday_and_month() {
        let date = parse_iso_date("2024-01-01").unwrap();
        assert_eq!(format_day_label(date), "Monday, 1 January");
    }

    #[test]
    fn unparseable_dates_yield_none() {
        assert!(parse_iso_date("yesterday").is_none());
        assert!(parse_iso_date("").is_none());
    }
}
