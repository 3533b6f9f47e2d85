// Calendar Picker Library
// Exports all modules for embedding and testing

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;

pub use error::{CalendarError, CalendarResult};
pub use models::display_mode::DisplayMode;
pub use ui_egui::{CalendarView, CalendarViewDelegate, CalendarViewResponse};
