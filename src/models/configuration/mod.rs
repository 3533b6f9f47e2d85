// Calendar configuration
// Delegate answers resolved once per frame into plain values for the grid and painters

use egui::{Color32, Id};

use crate::models::calendar_system::CalendarSystem;
use crate::models::date_category::DateCategory;
use crate::models::style::FontSpec;
use crate::ui_egui::delegate::{defaults, CalendarViewDelegate};

/// Fonts and colours for one date category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateStyle {
    pub font: FontSpec,
    pub text_color: Color32,
    /// Only past dates have a disabled state.
    pub disabled_text_color: Option<Color32>,
    pub selected_font: FontSpec,
    pub selected_text_color: Color32,
    pub selected_background_color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfiguration {
    pub calendar: CalendarSystem,
    pub weekday_label_font: FontSpec,
    pub weekday_label_text_color: Color32,
    pub past_dates_enabled: bool,
    pub past: DateStyle,
    pub current: DateStyle,
    pub future: DateStyle,
}

impl Default for CalendarConfiguration {
    fn default() -> Self {
        Self {
            calendar: CalendarSystem::current(),
            weekday_label_font: defaults::WEEKDAY_LABEL_FONT,
            weekday_label_text_color: defaults::WEEKDAY_LABEL_TEXT_COLOR,
            past_dates_enabled: defaults::PAST_DATES_ENABLED,
            past: DateStyle {
                font: defaults::PAST_DATE_FONT,
                text_color: defaults::PAST_DATE_ENABLED_TEXT_COLOR,
                disabled_text_color: Some(defaults::PAST_DATE_DISABLED_TEXT_COLOR),
                selected_font: defaults::PAST_DATE_SELECTED_FONT,
                selected_text_color: defaults::PAST_DATE_SELECTED_TEXT_COLOR,
                selected_background_color: defaults::PAST_DATE_SELECTED_BACKGROUND_COLOR,
            },
            current: DateStyle {
                font: defaults::CURRENT_DATE_FONT,
                text_color: defaults::CURRENT_DATE_TEXT_COLOR,
                disabled_text_color: None,
                selected_font: defaults::CURRENT_DATE_SELECTED_FONT,
                selected_text_color: defaults::CURRENT_DATE_SELECTED_TEXT_COLOR,
                selected_background_color: defaults::CURRENT_DATE_SELECTED_BACKGROUND_COLOR,
            },
            future: DateStyle {
                font: defaults::FUTURE_DATE_FONT,
                text_color: defaults::FUTURE_DATE_TEXT_COLOR,
                disabled_text_color: None,
                selected_font: defaults::FUTURE_DATE_SELECTED_FONT,
                selected_text_color: defaults::FUTURE_DATE_SELECTED_TEXT_COLOR,
                selected_background_color: defaults::FUTURE_DATE_SELECTED_BACKGROUND_COLOR,
            },
        }
    }
}

impl CalendarConfiguration {
    /// Ask every delegate method once for the view `view`.
    pub fn from_delegate(delegate: &dyn CalendarViewDelegate, view: Id) -> Self {
        Self {
            calendar: delegate.calendar(view),
            weekday_label_font: delegate.weekday_label_font(view),
            weekday_label_text_color: delegate.weekday_label_text_color(view),
            past_dates_enabled: delegate.past_dates_enabled(view),
            past: DateStyle {
                font: delegate.past_date_font(view),
                text_color: delegate.past_date_enabled_text_color(view),
                disabled_text_color: Some(delegate.past_date_disabled_text_color(view)),
                selected_font: delegate.past_date_selected_font(view),
                selected_text_color: delegate.past_date_selected_text_color(view),
                selected_background_color: delegate.past_date_selected_background_color(view),
            },
            current: DateStyle {
                font: delegate.current_date_font(view),
                text_color: delegate.current_date_text_color(view),
                disabled_text_color: None,
                selected_font: delegate.current_date_selected_font(view),
                selected_text_color: delegate.current_date_selected_text_color(view),
                selected_background_color: delegate.current_date_selected_background_color(view),
            },
            future: DateStyle {
                font: delegate.future_date_font(view),
                text_color: delegate.future_date_text_color(view),
                disabled_text_color: None,
                selected_font: delegate.future_date_selected_font(view),
                selected_text_color: delegate.future_date_selected_text_color(view),
                selected_background_color: delegate.future_date_selected_background_color(view),
            },
        }
    }

    pub fn style_for(&self, category: DateCategory) -> &DateStyle {
        match category {
            DateCategory::Past => &self.past,
            DateCategory::Current => &self.current,
            DateCategory::Future => &self.future,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_egui::delegate::DefaultDelegate;

    struct DarkDelegate;

    impl CalendarViewDelegate for DarkDelegate {
        fn did_select_date(&mut self, _view: Id, _date: chrono::NaiveDate, _calendar: &CalendarSystem) {}

        fn future_date_text_color(&self, _view: Id) -> Color32 {
            Color32::LIGHT_GRAY
        }

        fn past_dates_enabled(&self, _view: Id) -> bool {
            false
        }
    }

    #[test]
    fn test_default_delegate_matches_default_configuration() {
        let config = CalendarConfiguration::from_delegate(&DefaultDelegate::default(), Id::new("v"));
        assert_eq!(config, CalendarConfiguration::default());
    }

    #[test]
    fn test_overrides_only_touch_their_field() {
        let config = CalendarConfiguration::from_delegate(&DarkDelegate, Id::new("v"));
        let defaults = CalendarConfiguration::default();
        assert_eq!(config.future.text_color, Color32::LIGHT_GRAY);
        assert!(!config.past_dates_enabled);
        assert_eq!(config.past, defaults.past);
        assert_eq!(config.current, defaults.current);
        assert_eq!(config.future.selected_font, defaults.future.selected_font);
    }

    #[test]
    fn test_style_for_category() {
        let config = CalendarConfiguration::default();
        assert_eq!(config.style_for(DateCategory::Current).text_color, defaults::RED);
        assert!(config.style_for(DateCategory::Past).disabled_text_color.is_some());
        assert!(config.style_for(DateCategory::Future).disabled_text_color.is_none());
    }
}
