// Module exports for models

pub mod calendar_system;
pub mod configuration;
pub mod date_category;
pub mod display_mode;
pub mod picker_settings;
pub mod style;
