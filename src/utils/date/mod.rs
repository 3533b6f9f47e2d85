// Date utility functions
// Month arithmetic shared by the grid and the view navigation

use chrono::{Datelike, Duration, NaiveDate};

/// Get the number of days in a given month. Returns 0 for a month chrono
/// cannot represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 12 {
        // Avoids stepping into the following year, which may not exist
        return if NaiveDate::from_ymd_opt(year, 12, 1).is_some() { 31 } else { 0 };
    }
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift a date by the given number of months, clamping the day to the
/// length of the target month. Returns `None` outside chrono's range.
pub fn shift_month(date: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month);
    let day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, day)
}

pub fn shift_week(date: NaiveDate, delta: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::weeks(delta))
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
