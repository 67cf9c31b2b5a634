//! Game settings
//!
//! Loaded from `twin-pong.json` in the working directory when present.
//! Every field has a default, so a partial file only overrides what it names.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::renderer::Palette;
use crate::sim::{ArenaConfig, BallSpawn};

/// Errors from reading or validating a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Window placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub vsync: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            x: WINDOW_X,
            y: WINDOW_Y,
            vsync: true,
        }
    }
}

/// Frame cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingSettings {
    /// Minimum milliseconds between frames
    pub frame_interval_ms: u64,
    /// Delta time cap in seconds
    pub max_delta: f32,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            frame_interval_ms: FRAME_INTERVAL_MS,
            max_delta: MAX_DELTA,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub arena: ArenaConfig,
    pub timing: TimingSettings,
    /// One entry per ball; a single entry plays the one-ball game
    pub balls: Vec<BallSpawn>,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        let arena = ArenaConfig::default();
        Self {
            window: WindowSettings::default(),
            balls: BallSpawn::defaults(&arena),
            arena,
            timing: TimingSettings::default(),
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Settings file looked up by `load`
    const FILE_NAME: &'static str = "twin-pong.json";

    /// Load from the working directory, falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// Read, parse and validate a settings file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let arena = &self.arena;
        if !(arena.width > 0.0 && arena.height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "playfield must be positive, got {}x{}",
                arena.width, arena.height
            )));
        }
        if arena.thickness < 0 || arena.paddle_height <= 0.0 || arena.paddle_speed < 0.0 {
            return Err(SettingsError::Invalid(
                "thickness, paddle height and paddle speed must be positive".to_string(),
            ));
        }
        let (min_y, max_y) = arena.paddle_bounds();
        if min_y > max_y {
            return Err(SettingsError::Invalid(format!(
                "paddle height {} does not fit between the walls",
                arena.paddle_height
            )));
        }
        if self.balls.is_empty() {
            return Err(SettingsError::Invalid("at least one ball is required".to_string()));
        }
        if let Some(i) = self
            .balls
            .iter()
            .position(|b| !b.pos.is_finite() || !b.vel.is_finite())
        {
            return Err(SettingsError::Invalid(format!("ball {} has non-finite values", i)));
        }
        if self.timing.frame_interval_ms == 0 {
            return Err(SettingsError::Invalid("frame interval must be non-zero".to_string()));
        }
        if !(self.timing.max_delta > 0.0) {
            return Err(SettingsError::Invalid("max delta must be positive".to_string()));
        }
        Ok(())
    }
}
