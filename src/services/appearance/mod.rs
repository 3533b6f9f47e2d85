// Appearance resolution
// Maps (date category x selection x enabled) to the font and colours a cell paints with

use egui::Color32;

use crate::models::configuration::CalendarConfiguration;
use crate::models::style::FontSpec;
use crate::services::grid::DayCell;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAppearance {
    pub font: FontSpec,
    pub text_color: Color32,
    /// Fill behind the day number, only set for the selected cell.
    pub background: Option<Color32>,
}

/// Appearance of `cell`, or `None` for an empty slot.
pub fn resolve(config: &CalendarConfiguration, cell: &DayCell) -> Option<DayAppearance> {
    let category = cell.category()?;
    let style = config.style_for(category);

    if cell.is_selected() {
        return Some(DayAppearance {
            font: style.selected_font,
            text_color: style.selected_text_color,
            background: Some(style.selected_background_color),
        });
    }

    let text_color = if cell.is_enabled() {
        style.text_color
    } else {
        style.disabled_text_color.unwrap_or(style.text_color)
    };

    Some(DayAppearance {
        font: style.font,
        text_color,
        background: None,
    })
}

pub fn weekday_label_appearance(config: &CalendarConfiguration) -> DayAppearance {
    DayAppearance {
        font: config.weekday_label_font,
        text_color: config.weekday_label_text_color,
        background: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui_egui::delegate::defaults;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_selected_today_uses_current_selected_style() {
        let config = CalendarConfiguration::default();
        let today = date(2025, 3, 6);
        let mut cell = DayCell::new(Some(today), today, true);
        cell.press();
        let appearance = resolve(&config, &cell).unwrap();
        assert_eq!(appearance.font, defaults::CURRENT_DATE_SELECTED_FONT);
        assert_eq!(appearance.text_color, defaults::CURRENT_DATE_SELECTED_TEXT_COLOR);
        assert_eq!(appearance.background, Some(defaults::CURRENT_DATE_SELECTED_BACKGROUND_COLOR));
    }

    #[test]
    fn test_disabled_past_date_uses_disabled_color() {
        let config = CalendarConfiguration {
            past_dates_enabled: false,
            ..CalendarConfiguration::default()
        };
        let today = date(2025, 3, 6);
        let cell = DayCell::new(Some(date(2025, 3, 1)), today, config.past_dates_enabled);
        let appearance = resolve(&config, &cell).unwrap();
        assert_eq!(appearance.text_color, defaults::PAST_DATE_DISABLED_TEXT_COLOR);
        assert_eq!(appearance.font, defaults::PAST_DATE_FONT);
        assert_eq!(appearance.background, None);
    }

    #[test]
    fn test_enabled_past_and_future_dates() {
        let config = CalendarConfiguration::default();
        let today = date(2025, 3, 6);
        let past = DayCell::new(Some(date(2025, 3, 1)), today, true);
        let future = DayCell::new(Some(date(2025, 3, 9)), today, true);
        assert_eq!(
            resolve(&config, &past).unwrap().text_color,
            defaults::PAST_DATE_ENABLED_TEXT_COLOR
        );
        assert_eq!(resolve(&config, &future).unwrap().font, defaults::FUTURE_DATE_FONT);
    }

    #[test]
    fn test_empty_slot_has_no_appearance() {
        let config = CalendarConfiguration::default();
        assert_eq!(resolve(&config, &DayCell::empty()), None);
    }

    #[test]
    fn test_weekday_label_appearance() {
        let appearance = weekday_label_appearance(&CalendarConfiguration::default());
        assert_eq!(appearance.font, defaults::WEEKDAY_LABEL_FONT);
        assert_eq!(appearance.text_color, defaults::WEEKDAY_LABEL_TEXT_COLOR);
    }
}
