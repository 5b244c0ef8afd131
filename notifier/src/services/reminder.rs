use crate::{
    models::{
        notification::ReminderContent,
        weekend::{Horizon, SelectedWeekend, WeekendKind},
    },
    utils::time::{format_holiday_date, format_weekend_start},
};

pub const IRCTC_MESSAGE: &str = "IRCTC opens booking today. Hurry to avoid tatkal hassle.";

/// Title and message for the reminder about `weekend`.
pub fn compose(weekend: &SelectedWeekend) -> ReminderContent {
    let range = &weekend.range;
    let holiday = range.holiday();
    let start = format_weekend_start(range.start());
    let holiday_date = format_holiday_date(holiday.date);

    let title = match range.kind() {
        WeekendKind::FourDay => format!(
            "Four days of long weekend, when you take one day leave starts from {} on the occasion of {} ({})",
            start, holiday.name, holiday_date
        ),
        WeekendKind::ThreeDay => format!(
            "Three days of long weekend starts from {} on the occasion of {} ({})",
            start, holiday.name, holiday_date
        ),
    };

    let message = match weekend.horizon {
        Horizon::Long => IRCTC_MESSAGE.to_string(),
        Horizon::Short => String::new(),
    };

    ReminderContent { title, message }
}
