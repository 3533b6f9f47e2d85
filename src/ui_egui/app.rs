//! Demo host for the calendar picker.
//!
//! Shows one [`CalendarView`] driven by a [`SettingsDelegate`], with a side
//! panel to edit and persist the settings.

use chrono::Weekday;

use super::calendar_view::CalendarView;
use super::settings_delegate::SettingsDelegate;
use crate::models::display_mode::DisplayMode;
use crate::models::picker_settings::PickerSettings;
use crate::services::settings::SettingsService;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

pub struct PickerDemoApp {
    view: CalendarView,
    delegate: SettingsDelegate,
    settings_service: SettingsService,
    status: Option<String>,
}

impl PickerDemoApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings_service: SettingsService,
        settings: PickerSettings,
    ) -> Self {
        // Default date colours are near-black, so keep light visuals
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let view = CalendarView::new("demo_calendar").with_display_mode(settings.display_mode);
        Self {
            view,
            delegate: SettingsDelegate::new(settings),
            settings_service,
            status: None,
        }
    }

    fn render_settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.add_space(6.0);

        let settings = self.delegate.settings_mut();

        ui.label("Display mode");
        ui.horizontal(|ui| {
            for mode in DisplayMode::all() {
                ui.selectable_value(&mut settings.display_mode, mode, mode.label());
            }
        });

        egui::ComboBox::from_label("First weekday")
            .selected_text(format!("{:?}", settings.first_weekday))
            .show_ui(ui, |ui| {
                for weekday in WEEKDAYS {
                    ui.selectable_value(&mut settings.first_weekday, weekday, format!("{:?}", weekday));
                }
            });

        ui.checkbox(&mut settings.past_dates_enabled, "Past dates enabled");

        ui.add_space(8.0);
        if ui.button("💾 Save").clicked() {
            self.status = Some(match self.settings_service.save(self.delegate.settings()) {
                Ok(()) => format!("Saved to {}", self.settings_service.path().display()),
                Err(err) => {
                    log::error!("Failed to save settings: {err:?}");
                    format!("Save failed: {err}")
                }
            });
        }
        if let Some(status) = &self.status {
            ui.small(status);
        }
    }
}

impl eframe::App for PickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("settings_panel")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| self.render_settings_panel(ui));

        // Settings panel edits win over the view's own mode buttons for this frame.
        let wanted_mode = self.delegate.settings().display_mode;
        self.view.set_display_mode(wanted_mode);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.set_max_width(480.0);
            let response = self.view.show(ui, &mut self.delegate);
            if response.display_mode_changed {
                self.delegate.settings_mut().display_mode = self.view.display_mode();
            }

            ui.add_space(12.0);
            match self.view.selected_date() {
                Some(date) => ui.label(format!("Selected: {}", date.format("%A, %-d %B %Y"))),
                None => ui.label("No date selected"),
            };
            ui.label(format!("{} selections this session", self.delegate.selections().len()));
        });
    }
}
