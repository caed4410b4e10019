mod checklist;
pub use checklist::{DayChecklist, TodayChecklistCard};

mod day_picker;
pub use day_picker::DayPicker;

mod summary_chart;
pub use summary_chart::SummaryChart;

mod timeline_card;
pub use timeline_card::TimelineCard;

mod utils;
pub use utils::{day_option_label, lookup_day, selectable_days};
