//! Long-weekend detection over a yearly holiday list.

use chrono::{Duration, NaiveDate};

use crate::models::{
    holiday::Holiday,
    weekend::{HolidayRange, Horizon, SelectedWeekend, WeekdayOffsetRule},
};

/// Probe distances, in days after the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadWindows {
    pub short_days: i64,
    pub long_days: i64,
}

impl Default for LookaheadWindows {
    fn default() -> Self {
        Self {
            short_days: crate::config::DEFAULT_SHORT_LOOKAHEAD_DAYS,
            long_days: crate::config::DEFAULT_LONG_LOOKAHEAD_DAYS,
        }
    }
}

/// Keeps gazetted holidays that bridge into a weekend and expands each one
/// into its inclusive range. Input order is preserved.
pub fn holiday_ranges(holidays: &[Holiday]) -> Vec<HolidayRange> {
    holidays
        .iter()
        .filter(|holiday| holiday.is_gazetted())
        .filter_map(|holiday| {
            let rule = WeekdayOffsetRule::for_day(&holiday.day)?;
            let other_end = rule.shift(holiday.date)?;
            Some(HolidayRange::new(holiday.date, other_end, holiday.clone()))
        })
        .collect()
}

/// First range, in input order, whose span contains `probe`.
pub fn detect(ranges: &[HolidayRange], probe: NaiveDate) -> Option<&HolidayRange> {
    ranges.iter().find(|range| range.contains(probe))
}

/// Probes both windows and keeps the long-horizon match when there is one.
pub fn select_weekend(
    ranges: &[HolidayRange],
    reference: NaiveDate,
    windows: LookaheadWindows,
) -> Option<SelectedWeekend> {
    let probe = |days: i64| reference.checked_add_signed(Duration::days(days));

    let long = probe(windows.long_days).and_then(|date| detect(ranges, date));
    let short = probe(windows.short_days).and_then(|date| detect(ranges, date));

    match (long, short) {
        (Some(range), _) => Some(SelectedWeekend {
            range: range.clone(),
            horizon: Horizon::Long,
        }),
        (None, Some(range)) => Some(SelectedWeekend {
            range: range.clone(),
            horizon: Horizon::Short,
        }),
        (None, None) => None,
    }
}
