//! End-to-end checks over the report pipeline: a stats payload goes through
//! deserialization, day selection, and timeline layout without touching the
//! network or the DOM.

use ui::core::stats::{ActivityKind, DayRecord, StatsResponse};
use ui::report::{day_option_label, lookup_day, selectable_days};
use ui::timeline::{color_at, layout_series, legend, ruler, SeriesKind, RENDER_WIDTH};

fn fixture() -> StatsResponse {
    serde_json::from_value(serde_json::json!({
        "today": {
            "is_rest_day": false,
            "morning_poll_completed": true,
            "screen_time_goal": 120.0,
            "screen_time_actual": 140.0,
            "productive_time_actual": 150.0,
            "screen_time_breakdown": {"YouTube": 90.0, "Games": 50.0},
            "productive_time_breakdown": {"Coding": 100.0, "English": 50.0},
            "workout_planned": true,
            "workout_done": false,
            "coding_planned": true,
            "coding_done": true
        },
        "history": [
            {
                "date": "2025-08-05",
                "is_rest_day": false,
                "morning_poll_completed": true,
                "screen_time_goal": 120.0,
                "screen_time_actual": 60.0
            },
            {"date": "2025-08-04", "is_rest_day": true}
        ]
    }))
    .expect("fixture decodes")
}

#[test]
fn screen_series_clamps_and_flags_the_overflowing_segment() {
    let stats = fixture();
    let today = &stats.today;
    let segments = layout_series(&today.screen_time_breakdown, today.screen_time_goal);
    let px = RENDER_WIDTH / today.screen_time_goal;

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].label, "YouTube");
    assert!((segments[0].width_px - 90.0 * px).abs() < 1e-9);
    assert!(!segments[0].is_exceeding);

    // 90 + 50 = 140 passes the 120-minute goal; the last segment gets 30
    // minutes of drawn width and the exceedance flag.
    assert_eq!(segments[1].label, "Games");
    assert!((segments[1].width_px - 30.0 * px).abs() < 1e-9);
    assert!(segments[1].is_exceeding);
    assert!(segments[1].pulses(SeriesKind::Screen));

    let drawn: f64 = segments.iter().map(|s| s.width_px).sum();
    assert!(drawn <= RENDER_WIDTH + 1e-9);
}

// The productive timeline reuses the screen-time goal as its ceiling, a
// deliberate simplification carried over from the product, not a bug. It can
// exceed that ceiling without ever pulsing.
#[test]
fn productive_series_shares_screen_goal_ceiling() {
    let stats = fixture();
    let today = &stats.today;
    let segments = layout_series(&today.productive_time_breakdown, today.screen_time_goal);

    let last = segments.last().expect("two productive segments");
    assert!(last.is_exceeding);
    assert!(!last.pulses(SeriesKind::Productive));
}

#[test]
fn legend_and_segments_agree_on_colors() {
    let stats = fixture();
    let breakdown = &stats.today.screen_time_breakdown;

    let segments = layout_series(breakdown, stats.today.screen_time_goal);
    let entries = legend(breakdown.keys().cloned());

    assert_eq!(segments.len(), entries.len());
    for (index, (segment, entry)) in segments.iter().zip(&entries).enumerate() {
        assert_eq!(segment.label, entry.label);
        assert_eq!(segment.color, entry.color);
        assert_eq!(segment.color, color_at(index));
    }
}

#[test]
fn ruler_covers_the_goal_for_the_fixture() {
    let stats = fixture();
    let ticks = ruler(stats.today.screen_time_goal);

    assert_eq!(ticks.first().map(|t| t.minute), Some(0));
    assert_eq!(ticks.last().map(|t| t.minute), Some(120));
    assert!(ticks[0].is_origin());
}

#[test]
fn surveyed_today_joins_the_selectable_days() {
    let stats = fixture();
    let days = selectable_days(&stats.today, &stats.history, "2025-08-06");

    assert_eq!(days.len(), 3);
    assert_eq!(days[0].date, "2025-08-06");

    let picked = lookup_day(&days, "2025-08-05").expect("history day resolves");
    assert_eq!(picked.screen_time_actual, 60.0);
    assert!(lookup_day(&days, "").is_none());
}

#[test]
fn rest_day_is_selectable_with_suppressed_timelines() {
    let mut stats = fixture();
    stats.today.is_rest_day = true;
    stats.today.morning_poll_completed = false;

    // Still selectable even though the survey never ran...
    let days = selectable_days(&stats.today, &stats.history, "2025-08-06");
    assert_eq!(days[0].date, "2025-08-06");
    assert!(day_option_label(&days[0]).ends_with("(rest)"));

    // ...and the report page suppresses the chart and both timelines on a
    // rest day no matter what the breakdowns contain, so the layout is never
    // consulted for it.
    assert!(stats.today.is_rest_day);
    assert!(!stats.today.screen_time_breakdown.is_empty());
}

#[test]
fn checklist_surfaces_planned_activities_in_fixed_order() {
    let stats = fixture();
    let planned = stats.today.planned_checklist();

    assert_eq!(planned.len(), 2);
    assert_eq!(planned[0].0, ActivityKind::Workout);
    assert!(!planned[0].1.done);
    assert_eq!(planned[1].0, ActivityKind::Coding);
    assert!(planned[1].1.done);
}

#[test]
fn null_payload_decodes_to_the_no_data_state() {
    let parsed: Option<StatsResponse> = serde_json::from_str("null").expect("null is valid");
    assert!(parsed.is_none());
}

#[test]
fn defaulted_today_record_stays_out_of_the_picker() {
    let today = DayRecord::default();
    let days = selectable_days(&today, &[], "2025-08-06");
    assert!(days.is_empty());
}
