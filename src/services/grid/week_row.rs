// Week row
// Seven day cells sharing the row width equally, at most one of them selected

use chrono::NaiveDate;
use egui::{Pos2, Rect, Vec2};

use super::day_cell::DayCell;
use crate::error::{CalendarError, CalendarResult};
use crate::models::calendar_system::CalendarSystem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRow {
    cells: Vec<DayCell>,
    today: NaiveDate,
    past_dates_enabled: bool,
}

impl WeekRow {
    pub fn new(dates: &[Option<NaiveDate>], today: NaiveDate, past_dates_enabled: bool) -> Self {
        let cells = dates
            .iter()
            .map(|date| DayCell::new(*date, today, past_dates_enabled))
            .collect();
        Self {
            cells,
            today,
            past_dates_enabled,
        }
    }

    /// Re-target each cell at the date with the same index.
    pub fn update(&mut self, new_dates: &[Option<NaiveDate>]) -> CalendarResult<()> {
        if new_dates.len() != self.cells.len() {
            return Err(CalendarError::RowLengthMismatch {
                expected: self.cells.len(),
                actual: new_dates.len(),
            });
        }
        for (cell, date) in self.cells.iter_mut().zip(new_dates) {
            cell.update(*date, self.today, self.past_dates_enabled);
        }
        Ok(())
    }

    /// Select the cell at 1-based position `weekday`.
    ///
    /// Every other cell is deselected, including when the target cell is empty
    /// or disabled, in which case `Ok(None)` is returned.
    pub fn set_selected_weekday(&mut self, weekday: usize) -> CalendarResult<Option<NaiveDate>> {
        if weekday == 0 || weekday > self.cells.len() {
            return Err(CalendarError::WeekdayOutOfRange {
                weekday,
                len: self.cells.len(),
            });
        }
        self.clear_selection();
        Ok(self.cells[weekday - 1].press())
    }

    /// Select the cell holding `date`. Returns `false` if no enabled cell has it.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        match self.position_of(date) {
            Some(position) => matches!(self.set_selected_weekday(position), Ok(Some(_))),
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.cells.iter_mut().for_each(DayCell::deselect);
    }

    /// 1-based position of the cell holding `date`.
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.date() == Some(date))
            .map(|idx| idx + 1)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.cells.iter().position(DayCell::is_selected)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_index().and_then(|idx| self.cells[idx].date())
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn dates(&self) -> Vec<Option<NaiveDate>> {
        self.cells.iter().map(DayCell::date).collect()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Split `rect` into one equally wide rectangle per cell, `spacing` apart.
    pub fn cell_rects(&self, rect: Rect, spacing: f32) -> Vec<Rect> {
        let count = self.cells.len();
        if count == 0 {
            return Vec::new();
        }
        let total_spacing = spacing * (count - 1) as f32;
        let width = ((rect.width() - total_spacing) / count as f32).max(0.0);
        (0..count)
            .map(|idx| {
                let left = rect.left() + idx as f32 * (width + spacing);
                Rect::from_min_size(Pos2::new(left, rect.top()), Vec2::new(width, rect.height()))
            })
            .collect()
    }
}

/// Full seven-day row of the week containing `anchor`.
pub fn week_row_for(
    anchor: NaiveDate,
    calendar: &CalendarSystem,
    today: NaiveDate,
    past_dates_enabled: bool,
) -> CalendarResult<WeekRow> {
    let dates = calendar
        .week_dates(anchor)
        .ok_or(CalendarError::DateOutOfRange)?
        .map(Some);
    Ok(WeekRow::new(&dates, today, past_dates_enabled))
}
