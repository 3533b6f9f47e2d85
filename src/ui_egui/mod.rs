mod app;
pub mod calendar_view;
pub mod delegate;
pub mod settings_delegate;
pub mod views;

pub use app::PickerDemoApp;
pub use calendar_view::{CalendarView, CalendarViewResponse};
pub use delegate::{CalendarViewDelegate, DefaultDelegate};
pub use settings_delegate::SettingsDelegate;
