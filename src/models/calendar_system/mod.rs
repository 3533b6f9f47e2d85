// Calendar system
// First weekday and time zone used to lay out rows and to decide "today"

use chrono::{Datelike, Duration, Local, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalendarError;

/// Weekday labels in Sunday-first order.
const WEEKDAY_SYMBOLS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CalendarTimeZone {
    /// The host machine's local time zone.
    #[default]
    Local,
    Named(Tz),
}

impl CalendarTimeZone {
    pub fn today(&self) -> NaiveDate {
        match self {
            CalendarTimeZone::Local => Local::now().date_naive(),
            CalendarTimeZone::Named(tz) => Utc::now().with_timezone(tz).date_naive(),
        }
    }
}

impl fmt::Display for CalendarTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarTimeZone::Local => f.write_str("local"),
            CalendarTimeZone::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl TryFrom<String> for CalendarTimeZone {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("local") || trimmed.is_empty() {
            return Ok(CalendarTimeZone::Local);
        }
        trimmed
            .parse::<Tz>()
            .map(CalendarTimeZone::Named)
            .map_err(|_| CalendarError::InvalidTimeZone(value.clone()))
    }
}

impl From<CalendarTimeZone> for String {
    fn from(value: CalendarTimeZone) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSystem {
    pub first_weekday: Weekday,
    #[serde(default)]
    pub time_zone: CalendarTimeZone,
}

impl Default for CalendarSystem {
    fn default() -> Self {
        Self::current()
    }
}

impl CalendarSystem {
    /// Local time zone, weeks starting on Sunday.
    pub fn current() -> Self {
        Self {
            first_weekday: Weekday::Sun,
            time_zone: CalendarTimeZone::Local,
        }
    }

    pub fn new(first_weekday: Weekday, time_zone: CalendarTimeZone) -> Self {
        Self {
            first_weekday,
            time_zone,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.time_zone.today()
    }

    /// 1-based position of `date` inside a row that starts on `first_weekday`.
    pub fn weekday_position(&self, date: NaiveDate) -> usize {
        let offset = (date.weekday().num_days_from_sunday() + 7
            - self.first_weekday.num_days_from_sunday())
            % 7;
        offset as usize + 1
    }

    /// `None` when the week starts before chrono's minimum date.
    pub fn start_of_week(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_sub_signed(Duration::days(self.weekday_position(date) as i64 - 1))
    }

    /// `None` when any day of the week is outside chrono's range.
    pub fn week_dates(&self, date: NaiveDate) -> Option<[NaiveDate; 7]> {
        let start = self.start_of_week(date)?;
        start.checked_add_signed(Duration::days(6))?;
        Some(std::array::from_fn(|idx| start + Duration::days(idx as i64)))
    }

    /// Weekday labels in row order.
    pub fn weekday_symbols(&self) -> [&'static str; 7] {
        let start = self.first_weekday.num_days_from_sunday() as usize;
        std::array::from_fn(|idx| WEEKDAY_SYMBOLS[(start + idx) % 7])
    }
}
