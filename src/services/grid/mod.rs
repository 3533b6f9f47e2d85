// Date grid engine
// Layout and selection state for week and month displays, painted by ui_egui::views

pub mod day_cell;
pub mod month_grid;
pub mod week_row;

pub use day_cell::DayCell;
pub use month_grid::MonthGrid;
pub use week_row::{week_row_for, WeekRow};

use chrono::NaiveDate;

use crate::error::CalendarResult;
use crate::models::calendar_system::CalendarSystem;
use crate::models::display_mode::DisplayMode;
use crate::utils::date::first_of_month;

/// Rows visible for `mode` around `anchor`. Fails when the week around
/// `anchor` leaves chrono's date range.
pub fn rows_for(
    mode: DisplayMode,
    anchor: NaiveDate,
    calendar: &CalendarSystem,
    today: NaiveDate,
    past_dates_enabled: bool,
) -> CalendarResult<Vec<WeekRow>> {
    match mode {
        DisplayMode::Week => Ok(vec![week_row_for(anchor, calendar, today, past_dates_enabled)?]),
        DisplayMode::Month => Ok(MonthGrid::new(anchor, calendar, today, past_dates_enabled)
            .rows()
            .to_vec()),
    }
}

/// First day of the week or month containing `date`. `None` when that day is
/// before chrono's minimum date.
pub fn period_start(mode: DisplayMode, date: NaiveDate, calendar: &CalendarSystem) -> Option<NaiveDate> {
    match mode {
        DisplayMode::Week => calendar.start_of_week(date),
        DisplayMode::Month => Some(first_of_month(date)),
    }
}

/// Whether the week or month containing `date` lies before the one containing
/// `today`.
pub fn is_before_current_period(
    mode: DisplayMode,
    date: NaiveDate,
    today: NaiveDate,
    calendar: &CalendarSystem,
) -> bool {
    match (period_start(mode, date, calendar), period_start(mode, today, calendar)) {
        (Some(start), Some(current)) => start < current,
        _ => date < today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    use crate::models::calendar_system::CalendarTimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_earlier_day_of_current_week_is_not_before_period() {
        let calendar = CalendarSystem::new(Weekday::Sun, CalendarTimeZone::Local);
        let today = date(2025, 3, 6);
        assert!(!is_before_current_period(DisplayMode::Week, date(2025, 3, 2), today, &calendar));
        assert!(is_before_current_period(DisplayMode::Week, date(2025, 3, 1), today, &calendar));
        assert!(!is_before_current_period(DisplayMode::Month, date(2025, 3, 1), today, &calendar));
        assert!(is_before_current_period(DisplayMode::Month, date(2025, 2, 28), today, &calendar));
    }

    #[test]
    fn test_rows_for_week_at_chrono_limit_fails() {
        let calendar = CalendarSystem::new(NaiveDate::MAX.weekday(), CalendarTimeZone::Local);
        let today = date(2025, 3, 6);
        assert!(rows_for(DisplayMode::Week, NaiveDate::MAX, &calendar, today, true).is_err());
        let month = rows_for(DisplayMode::Month, NaiveDate::MAX, &calendar, today, true).unwrap();
        assert!(month.iter().any(|row| row.position_of(NaiveDate::MAX).is_some()));
    }
}
