//! Week row rendering.
//!
//! Lays the row's cells out side by side with equal widths and reports which
//! weekday position, if any, was tapped this frame.

use egui::{Sense, Vec2};

use super::day_view::DayView;
use crate::models::configuration::CalendarConfiguration;
use crate::services::grid::WeekRow;

pub struct WeekView;

impl WeekView {
    /// Paint `row` across the available width. Returns the 1-based position of
    /// a tapped, enabled cell.
    pub fn show(
        ui: &mut egui::Ui,
        row_index: usize,
        row: &WeekRow,
        config: &CalendarConfiguration,
        row_height: f32,
        spacing: f32,
    ) -> Option<usize> {
        let (rect, _response) =
            ui.allocate_exact_size(Vec2::new(ui.available_width(), row_height), Sense::hover());

        let mut tapped = None;
        for (idx, (cell, cell_rect)) in row
            .cells()
            .iter()
            .zip(row.cell_rects(rect, spacing))
            .enumerate()
        {
            let id = ui.id().with(("day_cell", row_index, idx));
            let response = DayView::show(ui, id, cell_rect, cell, config);
            if response.clicked() && cell.is_enabled() {
                tapped = Some(idx + 1);
            }
        }
        tapped
    }
}
