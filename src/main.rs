// Calendar Picker Demo
// Main entry point

use anyhow::anyhow;
use calendar_picker::services::settings::SettingsService;
use calendar_picker::ui_egui::PickerDemoApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Picker demo");

    let settings_service = SettingsService::from_project_dirs();
    let settings = settings_service.load_or_default();
    log::debug!("Loaded settings from {}", settings_service.path().display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 460.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Picker",
        options,
        Box::new(move |cc| Ok(Box::new(PickerDemoApp::new(cc, settings_service, settings)))),
    )
    .map_err(|e| anyhow!("Failed to run demo window: {e}"))
}
