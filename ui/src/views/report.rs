use dioxus::prelude::*;

use crate::core::fetch;
use crate::core::format;
use crate::core::stats::StatsResponse;
use crate::report::{
    lookup_day, selectable_days, DayChecklist, DayPicker, SummaryChart, TimelineCard,
    TodayChecklistCard,
};
use crate::timeline::SeriesKind;

const REPORT_CSS: Asset = asset!("/assets/report.css");

/// The daily report page.
///
/// `user_id` comes from the shell (query string on web, environment on
/// desktop). The page resolves to the report or to exactly one terminal text
/// state, checked in priority order: missing id first, then a failed fetch,
/// then an empty payload. The fetch runs once; selection events only
/// re-render.
#[component]
pub fn Report(user_id: ReadOnlySignal<String>) -> Element {
    let selected_date = use_signal(String::new);

    let id_missing = user_id().trim().is_empty();
    let stats = use_resource(move || async move {
        let id = user_id().trim().to_string();
        if id.is_empty() {
            // Never shown; the view short-circuits on a missing id.
            return Ok(None);
        }
        fetch::fetch_stats(fetch::api_base(), &id).await
    });

    let body = if id_missing {
        rsx! {
            p { class: "report__error",
                "No user id in the link. Open the report through the bot's /report command."
            }
        }
    } else {
        match &*stats.read_unchecked() {
            None => rsx! {
                p { class: "report__status", "Loading…" }
            },
            Some(Err(err)) => rsx! {
                p { class: "report__error", "Couldn't load your stats: {err}" }
            },
            Some(Ok(None)) => rsx! {
                p { class: "report__status",
                    "No data yet. Complete a morning survey (/morning) to start tracking."
                }
            },
            Some(Ok(Some(stats))) => render_report(stats, selected_date),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: REPORT_CSS }
        main { class: "report",
            header { class: "report__header",
                h1 { "📊 Daily report" }
            }
            {body}
        }
    }
}

fn render_report(stats: &StatsResponse, selected_date: Signal<String>) -> Element {
    let today = &stats.today;
    let days = selectable_days(today, &stats.history, &format::today_iso());
    let selected = selected_date();
    let selected_day = lookup_day(&days, &selected).cloned();

    rsx! {
        if !today.is_rest_day {
            section { class: "card summary-card",
                h2 { class: "card__title", "Screen time" }
                SummaryChart {
                    actual_minutes: today.screen_time_actual,
                    goal_minutes: today.screen_time_goal,
                }
            }

            TimelineCard {
                title: "Not-so-useful activities",
                breakdown: today.screen_time_breakdown.clone(),
                goal_minutes: today.screen_time_goal,
                kind: SeriesKind::Screen,
            }

            // The productive series is measured against the same daily goal
            // as screen time.
            TimelineCard {
                title: "Useful activities",
                breakdown: today.productive_time_breakdown.clone(),
                goal_minutes: today.screen_time_goal,
                kind: SeriesKind::Productive,
            }
        }

        TodayChecklistCard { day: today.clone() }

        if days.is_empty() {
            section { class: "card",
                p { "No past days to browse yet. Complete a morning survey (/morning) first." }
            }
        } else {
            section { class: "card history-card",
                h2 { "Past days" }
                DayPicker { days: days.clone(), selected_date }

                match selected_day {
                    Some(day) if day.is_rest_day => rsx! {
                        p { "🏖️ That was a rest day. Nothing was tracked." }
                    },
                    Some(day) => rsx! {
                        DayChecklist { day }
                    },
                    None => rsx! {
                        p { class: "history-card__prompt", "Pick a day to see its checklist." }
                    },
                }
            }
        }
    }
}
