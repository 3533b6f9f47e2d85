// Month grid
// Week rows covering one month, starting at the calendar's first weekday

use chrono::{Datelike, NaiveDate};

use super::week_row::WeekRow;
use crate::models::calendar_system::CalendarSystem;
use crate::utils::date::{days_in_month, first_of_month};

const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    first_of_month: NaiveDate,
    rows: Vec<WeekRow>,
}

impl MonthGrid {
    /// Build the grid for the month containing `anchor`. Slots before the 1st
    /// and after the last day are empty.
    pub fn new(
        anchor: NaiveDate,
        calendar: &CalendarSystem,
        today: NaiveDate,
        past_dates_enabled: bool,
    ) -> Self {
        let first = first_of_month(anchor);
        let leading = calendar.weekday_position(first) - 1;
        let days = days_in_month(first.year(), first.month()) as usize;
        let weeks = weeks_needed(leading, days);

        let rows = (0..weeks)
            .map(|week| {
                let dates: Vec<Option<NaiveDate>> = (0..DAYS_PER_WEEK)
                    .map(|column| {
                        let slot = week * DAYS_PER_WEEK + column;
                        if slot < leading || slot >= leading + days {
                            None
                        } else {
                            first.with_day((slot - leading + 1) as u32)
                        }
                    })
                    .collect();
                WeekRow::new(&dates, today, past_dates_enabled)
            })
            .collect();

        Self {
            first_of_month: first,
            rows,
        }
    }

    pub fn first_of_month(&self) -> NaiveDate {
        self.first_of_month
    }

    pub fn rows(&self) -> &[WeekRow] {
        &self.rows
    }

    /// Select `date`, clearing any other selection in the grid.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        self.rows.iter_mut().for_each(WeekRow::clear_selection);
        self.rows.iter_mut().any(|row| row.select_date(date))
    }

    /// Select the cell at (`row`, 1-based `weekday`).
    pub fn select_cell(&mut self, row: usize, weekday: usize) -> Option<NaiveDate> {
        let date = self.rows.get(row)?.cells().get(weekday.checked_sub(1)?)?.date()?;
        self.select_date(date).then_some(date)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.rows.iter().find_map(WeekRow::selected_date)
    }

    /// Row index holding `date`.
    pub fn row_of(&self, date: NaiveDate) -> Option<usize> {
        self.rows.iter().position(|row| row.position_of(date).is_some())
    }
}

/// Rows needed to fit `leading` blank slots followed by `days` dates.
pub fn weeks_needed(leading: usize, days: usize) -> usize {
    (leading + days).div_ceil(DAYS_PER_WEEK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    use crate::models::calendar_system::CalendarTimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_february_2015_sunday_first_fits_four_rows() {
        // 2015-02-01 is a Sunday and the month has 28 days
        let calendar = CalendarSystem::new(Weekday::Sun, CalendarTimeZone::Local);
        let grid = MonthGrid::new(date(2015, 2, 14), &calendar, date(2015, 2, 14), true);
        assert_eq!(grid.rows().len(), 4);
        assert_eq!(grid.rows()[0].cells()[0].date(), Some(date(2015, 2, 1)));
    }

    #[test]
    fn test_march_2025_monday_first_needs_six_rows() {
        // 2025-03-01 is a Saturday
        let calendar = CalendarSystem::new(Weekday::Mon, CalendarTimeZone::Local);
        let grid = MonthGrid::new(date(2025, 3, 6), &calendar, date(2025, 3, 6), true);
        assert_eq!(grid.rows().len(), 6);
        let first_row = grid.rows()[0].dates();
        assert!(first_row[..5].iter().all(Option::is_none));
        assert_eq!(first_row[5], Some(date(2025, 3, 1)));
        assert_eq!(grid.rows()[5].cells()[0].date(), Some(date(2025, 3, 31)));
    }

    #[test]
    fn test_select_date_moves_across_rows() {
        let calendar = CalendarSystem::current();
        let today = date(2025, 3, 6);
        let mut grid = MonthGrid::new(today, &calendar, today, true);
        assert!(grid.select_date(date(2025, 3, 3)));
        assert!(grid.select_date(date(2025, 3, 27)));
        assert_eq!(grid.selected_date(), Some(date(2025, 3, 27)));
        let selected = grid
            .rows()
            .iter()
            .flat_map(|row| row.cells())
            .filter(|cell| cell.is_selected())
            .count();
        assert_eq!(selected, 1);
    }

    #[test]
    fn test_select_date_outside_month_fails() {
        let calendar = CalendarSystem::current();
        let today = date(2025, 3, 6);
        let mut grid = MonthGrid::new(today, &calendar, today, true);
        assert!(!grid.select_date(date(2025, 4, 1)));
        assert_eq!(grid.selected_date(), None);
    }

    #[test]
    fn test_select_cell_by_position() {
        let calendar = CalendarSystem::current();
        let today = date(2025, 3, 6);
        let mut grid = MonthGrid::new(today, &calendar, today, true);
        // Sunday-first: row 1 is 2..=8 March
        assert_eq!(grid.select_cell(1, 5), Some(date(2025, 3, 6)));
        assert_eq!(grid.select_cell(0, 1), None);
        assert_eq!(grid.select_cell(9, 1), None);
        assert_eq!(grid.row_of(date(2025, 3, 6)), Some(1));
    }

    #[test]
    fn test_weeks_needed() {
        assert_eq!(weeks_needed(0, 28), 4);
        assert_eq!(weeks_needed(6, 31), 6);
        assert_eq!(weeks_needed(3, 30), 5);
    }
}
