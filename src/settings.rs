use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILE: &str = "worm.json";
pub const SETTINGS_ENV_VAR: &str = "WORM_CONFIG";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid settings: {0}")]
    Invalid(&'static str),
}

/// A slider's value range and starting position.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub initial: f32,
}

impl SliderRange {
    fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min < self.max
            && (self.min..=self.max).contains(&self.initial)
    }
}

/// Launch-time settings. Read once, never written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub fps: u32,
    pub initial_length: usize,
    /// Tiles per second.
    pub speed: SliderRange,
    /// Board side length in tiles; the slider value is truncated.
    pub grid: SliderRange,
    /// Fixes the RNG for reproducible food placement.
    pub seed: Option<u64>,
    /// Image to use for food instead of the built-in sprite.
    pub food_sprite: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 500,
            window_height: 500,
            fps: 30,
            initial_length: 3,
            speed: SliderRange { min: 0.5, max: 8.0, initial: 2.5 },
            grid: SliderRange { min: 4.0, max: 20.0, initial: 8.0 },
            seed: None,
            food_sprite: None,
        }
    }
}

impl Settings {
    /// `WORM_CONFIG` if set, else `worm.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Loads and validates settings. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|err| match err {
            SettingsError::Parse { source, .. } => SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(text).map_err(|source| SettingsError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SettingsError::Invalid("window dimensions must be positive"));
        }
        if self.fps == 0 {
            return Err(SettingsError::Invalid("fps must be positive"));
        }
        if self.initial_length == 0 {
            return Err(SettingsError::Invalid("initial_length must be at least 1"));
        }
        if !self.speed.is_valid() {
            return Err(SettingsError::Invalid(
                "speed range must satisfy min < max with initial inside it",
            ));
        }
        if self.speed.min <= 0.0 {
            return Err(SettingsError::Invalid("speed minimum must be positive"));
        }
        if !self.grid.is_valid() {
            return Err(SettingsError::Invalid(
                "grid range must satisfy min < max with initial inside it",
            ));
        }
        let min_tiles = self.grid.min as i64;
        let tail_room = min_tiles / 2;
        if tail_room < self.initial_length as i64 - 1 || min_tiles * min_tiles <= self.initial_length as i64 {
            return Err(SettingsError::Invalid(
                "grid minimum too small for the initial worm",
            ));
        }
        // Every tile needs at least one pixel on the shorter window side.
        if self.grid.max.floor() > self.window_width.min(self.window_height) as f32 {
            return Err(SettingsError::Invalid(
                "grid maximum exceeds the window size in pixels",
            ));
        }
        Ok(())
    }

    pub fn screen_size(&self) -> (f32, f32) {
        (self.window_width as f32, self.window_height as f32)
    }

    /// Seconds allotted to one frame.
    pub fn frame_budget(&self) -> f64 {
        1.0 / self.fps as f64
    }
}
