// Month grid layout properties

mod fixtures;

use calendar_picker::models::calendar_system::{CalendarSystem, CalendarTimeZone};
use calendar_picker::services::grid::MonthGrid;
use calendar_picker::utils::date::days_in_month;
use chrono::{Datelike, NaiveDate, Weekday};
use fixtures::{calendars, dates};
use proptest::prelude::*;

fn weekday_from_index(idx: u8) -> Weekday {
    Weekday::try_from(idx % 7).unwrap()
}

#[test]
fn test_leap_february_contains_29th() {
    let today = dates::leap_day_2024();
    let grid = MonthGrid::new(today, &calendars::sunday_first(), today, true);
    let all: Vec<NaiveDate> = grid
        .rows()
        .iter()
        .flat_map(|row| row.dates())
        .flatten()
        .collect();
    assert_eq!(all.len(), 29);
    assert_eq!(all.last().copied(), Some(dates::leap_day_2024()));
}

#[test]
fn test_four_row_month() {
    let anchor = dates::feb_1_2015();
    let grid = MonthGrid::new(anchor, &calendars::sunday_first(), anchor, true);
    assert_eq!(grid.rows().len(), 4);
    assert!(grid.rows().iter().all(|row| row.dates().iter().all(Option::is_some)));
}

#[test]
fn test_past_days_disabled_in_current_month() {
    let today = dates::thursday_mar_6_2025();
    let mut grid = MonthGrid::new(today, &calendars::sunday_first(), today, false);
    assert!(!grid.select_date(dates::ymd(2025, 3, 5)));
    assert!(grid.select_date(today));
    assert!(grid.select_date(dates::ymd(2025, 3, 31)));
    assert_eq!(grid.selected_date(), Some(dates::ymd(2025, 3, 31)));
}

proptest! {
    /// Property: every day of the month appears exactly once, in order, in the
    /// column matching its weekday position
    #[test]
    fn prop_month_layout(
        year in 1990..2060i32,
        month in 1..=12u32,
        first_weekday in 0..7u8,
    ) {
        let calendar = CalendarSystem::new(weekday_from_index(first_weekday), CalendarTimeZone::Local);
        let anchor = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let grid = MonthGrid::new(anchor, &calendar, anchor, true);

        prop_assert!((4..=6).contains(&grid.rows().len()));

        let mut expected_day = 1u32;
        for row in grid.rows() {
            prop_assert_eq!(row.len(), 7);
            for (column, date) in row.dates().into_iter().enumerate() {
                if let Some(date) = date {
                    prop_assert_eq!(date.day(), expected_day);
                    prop_assert_eq!(date.month(), month);
                    prop_assert_eq!(calendar.weekday_position(date), column + 1);
                    expected_day += 1;
                }
            }
        }
        prop_assert_eq!(expected_day - 1, days_in_month(year, month));
    }
}
