pub mod day_view;
pub mod header;
pub mod week_view;

pub use day_view::DayView;
pub use week_view::WeekView;
