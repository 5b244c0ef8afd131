use chrono::{Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

use crate::models::holiday::Holiday;

/// How far a long weekend reaches from a holiday that falls on `weekday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekdayOffsetRule {
    pub weekday: Weekday,
    pub offset_days: i64,
}

const OFFSET_RULES: [(&str, WeekdayOffsetRule); 4] = [
    (
        "Monday",
        WeekdayOffsetRule {
            weekday: Weekday::Mon,
            offset_days: -2,
        },
    ),
    (
        "Friday",
        WeekdayOffsetRule {
            weekday: Weekday::Fri,
            offset_days: 2,
        },
    ),
    (
        "Tuesday",
        WeekdayOffsetRule {
            weekday: Weekday::Tue,
            offset_days: -4,
        },
    ),
    (
        "Thursday",
        WeekdayOffsetRule {
            weekday: Weekday::Thu,
            offset_days: 4,
        },
    ),
];

impl WeekdayOffsetRule {
    /// Looks up the rule for a weekday name as the holiday API spells it.
    pub fn for_day(day: &str) -> Option<Self> {
        OFFSET_RULES
            .iter()
            .find(|(name, _)| *name == day)
            .map(|(_, rule)| *rule)
    }

    /// The other end of the long weekend, or `None` on calendar overflow.
    pub fn shift(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_add_signed(Duration::days(self.offset_days))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendKind {
    ThreeDay,
    FourDay,
}

/// Inclusive span of days off around a qualifying holiday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRange {
    start: NaiveDate,
    end: NaiveDate,
    holiday: Holiday,
}

impl HolidayRange {
    pub fn new(a: NaiveDate, b: NaiveDate, holiday: Holiday) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start,
            end,
            holiday,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn holiday(&self) -> &Holiday {
        &self.holiday
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn kind(&self) -> WeekendKind {
        if self.span_days() == 4 {
            WeekendKind::FourDay
        } else {
            WeekendKind::ThreeDay
        }
    }
}

/// Lookahead window a detection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Short,
    Long,
}

impl Horizon {
    pub fn preference(self) -> Preference {
        match self {
            Horizon::Short => Preference::Upcoming,
            Horizon::Long => Preference::Irctc,
        }
    }
}

/// Subscriber list a reminder is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    Irctc,
    Upcoming,
}

impl Preference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::Irctc => "irctc",
            Preference::Upcoming => "upcoming",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedWeekend {
    pub range: HolidayRange,
    pub horizon: Horizon,
}

impl SelectedWeekend {
    pub fn preference(&self) -> Preference {
        self.horizon.preference()
    }
}
