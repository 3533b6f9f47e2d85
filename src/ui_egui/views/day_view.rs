//! Day cell rendering.
//!
//! Paints one [`DayCell`] inside a rectangle handed out by the week row: a
//! circular fill when selected and the day number on top.

use chrono::Datelike;
use egui::{Align2, CursorIcon, Id, Rect, Response, Sense, Stroke, Vec2};

use crate::models::configuration::CalendarConfiguration;
use crate::services::appearance::{self, DayAppearance};
use crate::services::grid::DayCell;

/// Offset of the second pass used to fake a bold face.
const BOLD_OFFSET: f32 = 0.6;

pub struct DayView;

impl DayView {
    /// `rect` is already allocated by the row, so the cell only interacts.
    pub fn show(
        ui: &mut egui::Ui,
        id: Id,
        rect: Rect,
        cell: &DayCell,
        config: &CalendarConfiguration,
    ) -> Response {
        let sense = if cell.is_enabled() {
            Sense::click()
        } else {
            Sense::hover()
        };
        let response = ui.interact(rect, id, sense);

        let (Some(date), Some(appearance)) = (cell.date(), appearance::resolve(config, cell)) else {
            return response;
        };

        if !ui.is_rect_visible(rect) {
            return response;
        }

        let center = rect.center();
        let radius = (rect.width().min(rect.height()) / 2.0 - 2.0).max(0.0);

        if let Some(fill) = appearance.background {
            ui.painter().circle_filled(center, radius, fill);
        } else if response.hovered() && cell.is_enabled() {
            let hover = ui.visuals().widgets.hovered.bg_stroke.color;
            ui.painter()
                .circle_stroke(center, radius, Stroke::new(1.0, hover));
        }

        Self::paint_day_number(ui, rect, &date.day().to_string(), &appearance);

        if cell.is_enabled() {
            response.on_hover_cursor(CursorIcon::PointingHand)
        } else {
            response
        }
    }

    fn paint_day_number(ui: &egui::Ui, rect: Rect, text: &str, appearance: &DayAppearance) {
        let font_id = appearance.font.font_id();
        let painter = ui.painter();
        painter.text(rect.center(), Align2::CENTER_CENTER, text, font_id.clone(), appearance.text_color);
        // egui ships no bold face
        if appearance.font.bold {
            painter.text(
                rect.center() + Vec2::new(BOLD_OFFSET, 0.0),
                Align2::CENTER_CENTER,
                text,
                font_id,
                appearance.text_color,
            );
        }
    }
}
