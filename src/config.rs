//! Persisted interaction settings.
//!
//! Settings are stored as pretty-printed JSON. Every field has a default, so
//! a partial file (or none at all) still yields a usable configuration.
//! Writes go through a temporary file in the target directory and are moved
//! into place, so a crash mid-save never leaves a truncated file behind.

use crate::constants::{
    ACTUAL_SIZE_ZOOM, DEFAULT_WHEEL_SCROLL_STEP, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::error::{SettingsError, ViewError};
use crate::events::ModifierKey;
use crate::zoom_levels::ZoomLevels;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Which mouse buttons start a pan gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanMode {
    None,
    Left,
    #[default]
    Middle,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageBoxSettings {
    /// Levels stepped through by zoom in/out and the wheel
    pub zoom_levels: ZoomLevels,
    /// Zoom percentage applied when the box is created
    pub initial_zoom: u32,
    pub allow_zoom: bool,
    pub allow_selection: bool,
    pub pan_mode: PanMode,
    /// Holding this with the left button pans instead of selecting
    pub pan_modifier: Option<ModifierKey>,
    /// Wheel zooms only while this is held; `None` means the wheel always zooms
    pub wheel_zoom_modifier: Option<ModifierKey>,
    /// Pixels scrolled per wheel line when the wheel does not zoom
    pub wheel_scroll_step: u32,
    /// Clip freshly drawn selections to the image bounds
    pub limit_selection_to_image: bool,
    /// Keep a dragged selection's right/bottom edge inside the image.
    /// Off by default: only the top-left corner is floored at zero.
    pub clamp_drag_to_image: bool,
}

impl Default for ImageBoxSettings {
    fn default() -> Self {
        Self {
            zoom_levels: ZoomLevels::default(),
            initial_zoom: ACTUAL_SIZE_ZOOM,
            allow_zoom: true,
            allow_selection: true,
            pan_mode: PanMode::default(),
            pan_modifier: None,
            wheel_zoom_modifier: None,
            wheel_scroll_step: DEFAULT_WHEEL_SCROLL_STEP,
            limit_selection_to_image: true,
            clamp_drag_to_image: false,
        }
    }
}

impl ImageBoxSettings {
    /// `<config dir>/zoombox/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Reject configurations the controller cannot honour.
    pub fn validate(&self) -> Result<(), ViewError> {
        if self.initial_zoom == 0 {
            return Err(ViewError::InvalidZoom(0.0));
        }
        if self.zoom_levels.is_empty() {
            return Err(ViewError::InvalidArgument("zoom level ledger is empty"));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        debug!(path = %path.display(), "Loaded image box settings");
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults when the file is missing
    /// or unusable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), "Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings atomically.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        self.validate()?;
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, self)?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(path)?;

        debug!(path = %path.display(), "Saved image box settings");
        Ok(())
    }
}
