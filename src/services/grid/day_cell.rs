// Day cell
// Leaf slot of the date grid; empty slots outside the month hold no date

use chrono::NaiveDate;

use crate::models::date_category::DateCategory;

/// A single date slot. Slots outside the displayed month hold no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    date: Option<NaiveDate>,
    category: Option<DateCategory>,
    enabled: bool,
    selected: bool,
}

impl DayCell {
    pub fn new(date: Option<NaiveDate>, today: NaiveDate, past_dates_enabled: bool) -> Self {
        let mut cell = Self::empty();
        cell.update(date, today, past_dates_enabled);
        cell
    }

    pub fn empty() -> Self {
        Self {
            date: None,
            category: None,
            enabled: false,
            selected: false,
        }
    }

    /// Re-target the cell at `new_date`. Clears any selection.
    pub fn update(&mut self, new_date: Option<NaiveDate>, today: NaiveDate, past_dates_enabled: bool) {
        self.date = new_date;
        self.category = new_date.map(|date| DateCategory::classify(date, today));
        self.enabled = match self.category {
            None => false,
            Some(DateCategory::Past) => past_dates_enabled,
            Some(_) => true,
        };
        self.selected = false;
    }

    /// Select the cell if it can be selected, returning its date.
    pub fn press(&mut self) -> Option<NaiveDate> {
        if !self.enabled {
            return None;
        }
        self.selected = true;
        self.date
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn category(&self) -> Option<DateCategory> {
        self.category
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
    }
}
