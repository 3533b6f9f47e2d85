// Test fixtures - reusable test data
// Provides consistent dates and calendars across all test files

#![allow(dead_code)]

use calendar_picker::models::calendar_system::{CalendarSystem, CalendarTimeZone};
use chrono::{NaiveDate, Weekday};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Thursday, Mar 6, 2025
    pub fn thursday_mar_6_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 6).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Sunday, Feb 1, 2015 - a 28-day month starting on a Sunday
    pub fn feb_1_2015() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 2, 1).unwrap()
    }

    pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }
}

/// Calendar systems
pub mod calendars {
    use super::*;

    pub fn sunday_first() -> CalendarSystem {
        CalendarSystem::new(Weekday::Sun, CalendarTimeZone::Local)
    }

    pub fn monday_first() -> CalendarSystem {
        CalendarSystem::new(Weekday::Mon, CalendarTimeZone::Local)
    }
}
