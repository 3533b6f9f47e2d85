//! Weekday label strip above the grid.

use egui::{Align2, Pos2, Rect, Sense, Vec2};

use crate::models::configuration::CalendarConfiguration;
use crate::services::appearance::weekday_label_appearance;

pub fn show_weekday_labels(ui: &mut egui::Ui, config: &CalendarConfiguration, spacing: f32) {
    let appearance = weekday_label_appearance(config);
    let height = appearance.font.size + 8.0;
    let (rect, _response) =
        ui.allocate_exact_size(Vec2::new(ui.available_width(), height), Sense::hover());

    let symbols = config.calendar.weekday_symbols();
    let count = symbols.len() as f32;
    let width = ((rect.width() - spacing * (count - 1.0)) / count).max(0.0);

    for (idx, symbol) in symbols.iter().enumerate() {
        let left = rect.left() + idx as f32 * (width + spacing);
        let label_rect = Rect::from_min_size(Pos2::new(left, rect.top()), Vec2::new(width, height));
        ui.painter().text(
            label_rect.center(),
            Align2::CENTER_CENTER,
            *symbol,
            appearance.font.font_id(),
            appearance.text_color,
        );
    }
}
