use chrono::{Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

/// Returns today's date in the configured timezone.
pub fn today_local(tz: &Tz) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}

/// English ordinal suffix for a day of month: 1st, 2nd, 3rd, 11th, 22nd.
pub fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", day, suffix)
}

/// "Friday, 26th, January"
pub fn format_weekend_start(date: NaiveDate) -> String {
    format!(
        "{}, {}, {}",
        date.format("%A"),
        ordinal(date.day()),
        date.format("%B")
    )
}

/// "Jan 26, Friday"
pub fn format_holiday_date(date: NaiveDate) -> String {
    date.format("%b %-d, %A").to_string()
}
