//! Delegate protocol for calendar views.
//!
//! A host implements [`CalendarViewDelegate`] to receive date selections and,
//! optionally, to customise the view's calendar system and appearance. Every
//! method except [`CalendarViewDelegate::did_select_date`] has a default that
//! returns the constant documented on it (and exported from [`defaults`]).
//!
//! Each method receives the `egui::Id` of the asking view so one delegate can
//! serve several views.

use chrono::NaiveDate;
use egui::{Color32, Id};

use crate::models::calendar_system::CalendarSystem;
use crate::models::style::FontSpec;

/// Documented default values of the delegate methods.
pub mod defaults {
    use super::{Color32, FontSpec};

    pub const WEEKDAY_LABEL_FONT: FontSpec = FontSpec::system(10.0);
    pub const WEEKDAY_LABEL_TEXT_COLOR: Color32 = GRAY;

    pub const PAST_DATES_ENABLED: bool = true;
    pub const PAST_DATE_FONT: FontSpec = FontSpec::system(17.0);
    pub const PAST_DATE_ENABLED_TEXT_COLOR: Color32 = NEAR_BLACK;
    pub const PAST_DATE_DISABLED_TEXT_COLOR: Color32 = GRAY;
    pub const PAST_DATE_SELECTED_FONT: FontSpec = FontSpec::bold_system(17.0);
    pub const PAST_DATE_SELECTED_TEXT_COLOR: Color32 = Color32::WHITE;
    pub const PAST_DATE_SELECTED_BACKGROUND_COLOR: Color32 = NEAR_BLACK;

    pub const CURRENT_DATE_FONT: FontSpec = FontSpec::bold_system(17.0);
    pub const CURRENT_DATE_TEXT_COLOR: Color32 = RED;
    pub const CURRENT_DATE_SELECTED_FONT: FontSpec = FontSpec::bold_system(17.0);
    pub const CURRENT_DATE_SELECTED_TEXT_COLOR: Color32 = Color32::WHITE;
    pub const CURRENT_DATE_SELECTED_BACKGROUND_COLOR: Color32 = RED;

    pub const FUTURE_DATE_FONT: FontSpec = FontSpec::system(17.0);
    pub const FUTURE_DATE_TEXT_COLOR: Color32 = NEAR_BLACK;
    pub const FUTURE_DATE_SELECTED_FONT: FontSpec = FontSpec::bold_system(17.0);
    pub const FUTURE_DATE_SELECTED_TEXT_COLOR: Color32 = Color32::WHITE;
    pub const FUTURE_DATE_SELECTED_BACKGROUND_COLOR: Color32 = NEAR_BLACK;

    /// 50% white.
    pub const GRAY: Color32 = Color32::from_rgb(128, 128, 128);
    /// Black at 0.87 alpha, premultiplied.
    pub const NEAR_BLACK: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 222);
    /// (1.0, 0.23, 0.19)
    pub const RED: Color32 = Color32::from_rgb(255, 59, 48);
}

pub trait CalendarViewDelegate {
    // Date selection

    /// Called when the view selects a new date.
    fn did_select_date(&mut self, view: Id, date: NaiveDate, calendar: &CalendarSystem);

    // Calendar

    /// Default: [`CalendarSystem::current`].
    fn calendar(&self, _view: Id) -> CalendarSystem {
        CalendarSystem::current()
    }

    // Weekday labels

    /// Default: system font, size 10.
    fn weekday_label_font(&self, _view: Id) -> FontSpec {
        defaults::WEEKDAY_LABEL_FONT
    }

    /// Default: gray.
    fn weekday_label_text_color(&self, _view: Id) -> Color32 {
        defaults::WEEKDAY_LABEL_TEXT_COLOR
    }

    // Past dates

    /// Default: `true`. When `false` past dates cannot be selected and the view
    /// only shows past dates that fall in the current week or month.
    fn past_dates_enabled(&self, _view: Id) -> bool {
        defaults::PAST_DATES_ENABLED
    }

    /// Unselected font for past dates. Default: system 17.
    fn past_date_font(&self, _view: Id) -> FontSpec {
        defaults::PAST_DATE_FONT
    }

    /// Enabled text colour for past dates. Default: black at 0.87 alpha.
    fn past_date_enabled_text_color(&self, _view: Id) -> Color32 {
        defaults::PAST_DATE_ENABLED_TEXT_COLOR
    }

    /// Disabled text colour for past dates. Default: gray.
    fn past_date_disabled_text_color(&self, _view: Id) -> Color32 {
        defaults::PAST_DATE_DISABLED_TEXT_COLOR
    }

    /// Default: bold system 17.
    fn past_date_selected_font(&self, _view: Id) -> FontSpec {
        defaults::PAST_DATE_SELECTED_FONT
    }

    /// Default: white.
    fn past_date_selected_text_color(&self, _view: Id) -> Color32 {
        defaults::PAST_DATE_SELECTED_TEXT_COLOR
    }

    /// Default: black at 0.87 alpha.
    fn past_date_selected_background_color(&self, _view: Id) -> Color32 {
        defaults::PAST_DATE_SELECTED_BACKGROUND_COLOR
    }

    // Current date

    /// Unselected font for today. Default: bold system 17.
    fn current_date_font(&self, _view: Id) -> FontSpec {
        defaults::CURRENT_DATE_FONT
    }

    /// Default: red (1.0, 0.23, 0.19).
    fn current_date_text_color(&self, _view: Id) -> Color32 {
        defaults::CURRENT_DATE_TEXT_COLOR
    }

    /// Default: bold system 17.
    fn current_date_selected_font(&self, _view: Id) -> FontSpec {
        defaults::CURRENT_DATE_SELECTED_FONT
    }

    /// Default: white.
    fn current_date_selected_text_color(&self, _view: Id) -> Color32 {
        defaults::CURRENT_DATE_SELECTED_TEXT_COLOR
    }

    /// Default: red (1.0, 0.23, 0.19).
    fn current_date_selected_background_color(&self, _view: Id) -> Color32 {
        defaults::CURRENT_DATE_SELECTED_BACKGROUND_COLOR
    }

    // Future dates

    /// Default: system 17.
    fn future_date_font(&self, _view: Id) -> FontSpec {
        defaults::FUTURE_DATE_FONT
    }

    /// Default: black at 0.87 alpha.
    fn future_date_text_color(&self, _view: Id) -> Color32 {
        defaults::FUTURE_DATE_TEXT_COLOR
    }

    /// Default: bold system 17.
    fn future_date_selected_font(&self, _view: Id) -> FontSpec {
        defaults::FUTURE_DATE_SELECTED_FONT
    }

    /// Default: white.
    fn future_date_selected_text_color(&self, _view: Id) -> Color32 {
        defaults::FUTURE_DATE_SELECTED_TEXT_COLOR
    }

    /// Default: black at 0.87 alpha.
    fn future_date_selected_background_color(&self, _view: Id) -> Color32 {
        defaults::FUTURE_DATE_SELECTED_BACKGROUND_COLOR
    }
}

/// Delegate that keeps every default and remembers the last selection.
#[derive(Debug, Default, Clone)]
pub struct DefaultDelegate {
    pub last_selected: Option<NaiveDate>,
}

impl CalendarViewDelegate for DefaultDelegate {
    fn did_select_date(&mut self, view: Id, date: NaiveDate, _calendar: &CalendarSystem) {
        log::debug!("View {:?} selected {}", view, date);
        self.last_selected = Some(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::style::white_alpha;

    #[test]
    fn test_near_black_matches_white_alpha() {
        assert_eq!(defaults::NEAR_BLACK, white_alpha(0.0, 0.87));
    }

    #[test]
    fn test_default_delegate_records_selection() {
        let mut delegate = DefaultDelegate::default();
        let date = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
        delegate.did_select_date(Id::new("picker"), date, &CalendarSystem::current());
        assert_eq!(delegate.last_selected, Some(date));
    }
}
