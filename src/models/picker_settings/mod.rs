// Picker settings
// File-backed configuration with explicit optional style fields

use chrono::Weekday;
use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::models::calendar_system::{CalendarSystem, CalendarTimeZone};
use crate::models::display_mode::DisplayMode;
use crate::models::style::{color_to_hex, parse_color, FontSpec};

/// Colour stored as a hex or `r,g,b` string in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue(pub Color32);

impl TryFrom<String> for ColorValue {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_color(&value).map(ColorValue)
    }
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        color_to_hex(value.0)
    }
}

/// Per-category overrides. `None` keeps the delegate default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateStyleOverrides {
    pub font: Option<FontSpec>,
    pub text_color: Option<ColorValue>,
    /// Only read for past dates.
    pub disabled_text_color: Option<ColorValue>,
    pub selected_font: Option<FontSpec>,
    pub selected_text_color: Option<ColorValue>,
    pub selected_background_color: Option<ColorValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOverrides {
    pub weekday_label_font: Option<FontSpec>,
    pub weekday_label_text_color: Option<ColorValue>,
    pub past: DateStyleOverrides,
    pub current: DateStyleOverrides,
    pub future: DateStyleOverrides,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub display_mode: DisplayMode,
    pub first_weekday: Weekday,
    pub time_zone: CalendarTimeZone,
    pub past_dates_enabled: bool,
    pub style: StyleOverrides,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            display_mode: DisplayMode::Month,
            first_weekday: Weekday::Sun,
            time_zone: CalendarTimeZone::Local,
            past_dates_enabled: true,
            style: StyleOverrides::default(),
        }
    }
}

impl PickerSettings {
    pub fn calendar(&self) -> CalendarSystem {
        CalendarSystem::new(self.first_weekday, self.time_zone)
    }

    /// Font sizes must be positive and finite.
    pub fn validate(&self) -> Result<(), String> {
        let style = &self.style;
        let fonts = [
            ("weekday_label_font", style.weekday_label_font),
            ("past.font", style.past.font),
            ("past.selected_font", style.past.selected_font),
            ("current.font", style.current.font),
            ("current.selected_font", style.current.selected_font),
            ("future.font", style.future.font),
            ("future.selected_font", style.future.selected_font),
        ];
        for (name, font) in fonts {
            if let Some(font) = font {
                if !font.size.is_finite() || font.size <= 0.0 {
                    return Err(format!("{} has invalid size {}", name, font.size));
                }
            }
        }
        Ok(())
    }
}
