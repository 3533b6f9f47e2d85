// Settings service
// Loads and saves picker settings as TOML under the platform config directory

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::picker_settings::PickerSettings;

const SETTINGS_FILE: &str = "picker.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service rooted at the platform config directory, falling back to the
    /// working directory when none can be resolved.
    pub fn from_project_dirs() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("com", "CalendarPicker", "CalendarPicker") {
            dirs.config_dir().join(SETTINGS_FILE)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&text)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;
        Ok(settings)
    }

    /// Load settings, logging and falling back to defaults on any error.
    pub fn load_or_default(&self) -> PickerSettings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Failed to load picker settings: {err:?}");
                PickerSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        log::info!("Saved picker settings to {}", self.path.display());
        Ok(())
    }
}
