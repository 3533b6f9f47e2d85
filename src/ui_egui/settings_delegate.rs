//! Delegate backed by [`PickerSettings`].
//!
//! Every style field left unset in the settings falls back to the trait
//! default, so an empty settings file renders exactly like [`DefaultDelegate`].
//!
//! [`DefaultDelegate`]: super::delegate::DefaultDelegate

use chrono::NaiveDate;
use egui::{Color32, Id};

use super::delegate::{defaults, CalendarViewDelegate};
use crate::models::calendar_system::CalendarSystem;
use crate::models::picker_settings::{ColorValue, PickerSettings};
use crate::models::style::FontSpec;

fn color_or(value: Option<ColorValue>, fallback: Color32) -> Color32 {
    value.map(|c| c.0).unwrap_or(fallback)
}

pub struct SettingsDelegate {
    settings: PickerSettings,
    selections: Vec<NaiveDate>,
}

impl SettingsDelegate {
    pub fn new(settings: PickerSettings) -> Self {
        Self {
            settings,
            selections: Vec::new(),
        }
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut PickerSettings {
        &mut self.settings
    }

    /// Selections reported so far, oldest first.
    pub fn selections(&self) -> &[NaiveDate] {
        &self.selections
    }

    pub fn last_selected(&self) -> Option<NaiveDate> {
        self.selections.last().copied()
    }
}

impl CalendarViewDelegate for SettingsDelegate {
    fn did_select_date(&mut self, view: Id, date: NaiveDate, calendar: &CalendarSystem) {
        log::info!(
            "Selected {} in view {:?} (weeks start {:?})",
            date,
            view,
            calendar.first_weekday
        );
        self.selections.push(date);
    }

    fn calendar(&self, _view: Id) -> CalendarSystem {
        self.settings.calendar()
    }

    fn weekday_label_font(&self, _view: Id) -> FontSpec {
        self.settings
            .style
            .weekday_label_font
            .unwrap_or(defaults::WEEKDAY_LABEL_FONT)
    }

    fn weekday_label_text_color(&self, _view: Id) -> Color32 {
        color_or(
            self.settings.style.weekday_label_text_color,
            defaults::WEEKDAY_LABEL_TEXT_COLOR,
        )
    }

    fn past_dates_enabled(&self, _view: Id) -> bool {
        self.settings.past_dates_enabled
    }

    fn past_date_font(&self, _view: Id) -> FontSpec {
        self.settings.style.past.font.unwrap_or(defaults::PAST_DATE_FONT)
    }

    fn past_date_enabled_text_color(&self, _view: Id) -> Color32 {
        color_or(self.settings.style.past.text_color, defaults::PAST_DATE_ENABLED_TEXT_COLOR)
    }

    fn past_date_disabled_text_color(&self, _view: Id) -> Color32 {
        color_or(
            self.settings.style.past.disabled_text_color,
            defaults::PAST_DATE_DISABLED_TEXT_COLOR,
        )
    }

    fn past_date_selected_font(&self, _view: Id) -> FontSpec {
        self.settings
            .style
            .past
            .selected_font
            .unwrap_or(defaults::PAST_DATE_SELECTED_FONT)
    }

    fn past_date_selected_text_color(&self, _view: Id) -> Color32 {
        color_or(
            self.settings.style.past.selected_text_color,
            defaults::PAST_DATE_SELECTED_TEXT_COLOR,
        )
    }

    fn past_date_selected_background_color(&self, _view: Id) -> Color32 {
        color_or(
            self.settings.style.past.selected_background_color,
            defaults::PAST_DATE_SELECTED_BACKGROUND_COLOR,
        )
    }

    fn current_date_font(&self, _view: Id) -> FontSpec {
        self.settings.style.current.font.unwrap_or(defaults::CURRENT_DATE_FONT)
    }

    fn current_date_text_color(&self, _view: Id) -> Color32 {
        color_or(self.settings.style.current.text_color, defaults::CURRENT_DATE_TEXT_COLOR)
    }

    fn current_date_selected_font(&self, _view: Id) -> FontSpec {
        self.settings
            .style
            .current
            .selected_font
            .unwrap_or(defaults::CURRENT_DATE_SELECTED_FONT)
    }

    fn current_date_selected_text_color(&self, _view: Id) -> Color32 {
        color_or(
            self.settings.style.current.selected_text_color,
            defaults::CURRENT_DATE_SELECTED_TEXT_COLOR,
        )
    }

    fn current_date_selected_background_color(&self, _view: Id) -> Color32 {
        color_or(
            self.settings.style.current.selected_background_color,
            defaults::CURRENT_DATE_SELECTED_BACKGROUND_COLOR,
        )
    }

    fn future_date_font(&self, _view: Id) -> FontSpec {
        self.settings.style.future.font.unwrap_or(defaults::FUTURE_DATE_FONT)
    }

    fn future_date_text_color(&self, _view: Id) -> Color32 {
        color_or(self.settings.style.future.text_color, defaults::FUTURE_DATE_TEXT_COLOR)
    }

    fn future_date_selected_font(&self, _view: Id) -> FontSpec {
        self.settings
            .style
            .future
            .selected_font
            .unwrap_or(defaults::FUTURE_DATE_SELECTED_FONT)
    }

    fn future_date_selected_text_color(&self, _view: Id) -> Color32 {
        color_or(
            self.settings.style.future.selected_text_color,
            defaults::FUTURE_DATE_SELECTED_TEXT_COLOR,
        )
    }

    fn future_date_selected_background_color(&self, _view: Id) -> Color32 {
        color_or(
            self.settings.style.future.selected_background_color,
            defaults::FUTURE_DATE_SELECTED_BACKGROUND_COLOR,
        )
    }
}
