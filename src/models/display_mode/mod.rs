// Display mode
// Whether the picker renders one week or one month at a time

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Layout options for a calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// The calendar is displayed one week at a time.
    Week,
    /// The calendar is displayed one month at a time.
    #[default]
    Month,
}

impl DisplayMode {
    pub fn all() -> [DisplayMode; 2] {
        [DisplayMode::Week, DisplayMode::Month]
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Week => DisplayMode::Month,
            DisplayMode::Month => DisplayMode::Week,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Week => "week",
            DisplayMode::Month => "month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DisplayMode::Week => "Week",
            DisplayMode::Month => "Month",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(DisplayMode::Week),
            "month" => Ok(DisplayMode::Month),
            _ => Err(CalendarError::InvalidDisplayMode(s.to_string())),
        }
    }
}
