//! Wire model for the daily stats endpoint.
//!
//! Every field carries a serde default so a sparse or partially malformed
//! record degrades to empty values instead of failing the whole payload. The
//! breakdown mappings additionally tolerate a wrong-typed value (anything
//! that isn't a JSON object decodes as an empty breakdown) since the layout
//! pipeline must stay total over whatever the bot's backend serves.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// The payload served per user: today's record plus recent history, most
/// recent day first. A `null` body is decoded by the caller as "no data".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsResponse {
    pub today: DayRecord,
    pub history: Vec<DayRecord>,
}

/// One day's activity statistics.
///
/// `date` is an ISO `YYYY-MM-DD` string on history records; the backend
/// leaves it empty on `today`, and the day selector stamps it with the
/// current calendar date when it synthesizes the selectable entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayRecord {
    pub date: String,
    pub is_rest_day: bool,
    pub morning_poll_completed: bool,

    pub screen_time_goal: f64,
    pub screen_time_actual: f64,
    pub productive_time_actual: f64,
    #[serde(deserialize_with = "lenient_breakdown")]
    pub screen_time_breakdown: IndexMap<String, f64>,
    #[serde(deserialize_with = "lenient_breakdown")]
    pub productive_time_breakdown: IndexMap<String, f64>,

    pub workout_planned: bool,
    pub workout_done: bool,
    pub english_planned: bool,
    pub english_done: bool,
    pub coding_planned: bool,
    pub coding_done: bool,
    pub planning_planned: bool,
    pub planning_done: bool,
    pub stretching_planned: bool,
    pub stretching_done: bool,
    pub reflection_planned: bool,
    pub reflection_done: bool,
}

impl DayRecord {
    /// Planned/done state for one activity.
    pub fn checklist_entry(&self, kind: ActivityKind) -> ChecklistEntry {
        let (planned, done) = match kind {
            ActivityKind::Workout => (self.workout_planned, self.workout_done),
            ActivityKind::English => (self.english_planned, self.english_done),
            ActivityKind::Coding => (self.coding_planned, self.coding_done),
            ActivityKind::Planning => (self.planning_planned, self.planning_done),
            ActivityKind::Stretching => (self.stretching_planned, self.stretching_done),
            ActivityKind::Reflection => (self.reflection_planned, self.reflection_done),
        };
        ChecklistEntry { planned, done }
    }

    /// Entries for every planned activity, in the fixed activity order.
    pub fn planned_checklist(&self) -> Vec<(ActivityKind, ChecklistEntry)> {
        ActivityKind::ALL
            .into_iter()
            .map(|kind| (kind, self.checklist_entry(kind)))
            .filter(|(_, entry)| entry.planned)
            .collect()
    }
}

/// The fixed set of activities the daily checklist tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Workout,
    English,
    Coding,
    Planning,
    Stretching,
    Reflection,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Workout,
        ActivityKind::English,
        ActivityKind::Coding,
        ActivityKind::Planning,
        ActivityKind::Stretching,
        ActivityKind::Reflection,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Workout => "Workout",
            ActivityKind::English => "English practice",
            ActivityKind::Coding => "Coding",
            ActivityKind::Planning => "Planning",
            ActivityKind::Stretching => "Stretching",
            ActivityKind::Reflection => "Reflection",
        }
    }
}

/// Planned/done state for one activity on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChecklistEntry {
    pub planned: bool,
    pub done: bool,
}

/// Decode a breakdown mapping, preserving key order. Non-object values and
/// non-numeric durations degrade to empty/zero; negative durations floor at
/// zero so the layout's input domain holds.
fn lenient_breakdown<'de, D>(deserializer: D) -> Result<IndexMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let map = match raw {
        serde_json::Value::Object(entries) => entries
            .into_iter()
            .map(|(label, value)| (label, value.as_f64().unwrap_or_default().max(0.0)))
            .collect(),
        _ => IndexMap::new(),
    };
    Ok(map)
}
