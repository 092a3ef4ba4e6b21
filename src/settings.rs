//! Simulation settings
//!
//! Every free parameter of the demo, loadable from a JSON file. Missing fields
//! fall back to the reference values in [`crate::consts`].

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Five followers, 2 units/tick, leash 20
    #[default]
    Reference,
    /// A longer, looser tail
    LongTail,
    /// Followers bunch up close behind a faster leader
    Tight,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Reference => "Reference",
            Preset::LongTail => "LongTail",
            Preset::Tight => "Tight",
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reference" | "ref" => Ok(Preset::Reference),
            "longtail" | "long-tail" | "long" => Ok(Preset::LongTail),
            "tight" => Ok(Preset::Tight),
            _ => Err(format!("unknown preset '{s}'")),
        }
    }
}

/// Failure to read a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Simulation and presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Leader ===
    pub leader_name: String,
    pub leader_start: (f32, f32),
    /// Units per tick on each held axis
    pub leader_speed: f32,

    // === Followers ===
    pub follower_count: usize,
    /// Position of follower 0; the rest are laid out along +x
    pub follower_origin: (f32, f32),
    pub follower_spacing: f32,
    pub follower_speed: f32,
    /// Distance beyond which a follower resumes pursuit (must be > 0)
    pub leash_length: f32,

    // === Presentation ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub leader_size: f32,
    pub follower_size: f32,
    pub color: [f32; 4],

    // === Host loop ===
    pub ticks_per_second: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            leader_name: LEADER_NAME.to_string(),
            leader_start: LEADER_START,
            leader_speed: LEADER_SPEED,

            follower_count: FOLLOWER_COUNT,
            follower_origin: FOLLOWER_ORIGIN,
            follower_spacing: FOLLOWER_SPACING,
            follower_speed: FOLLOWER_SPEED,
            leash_length: LEASH_LENGTH,

            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            leader_size: LEADER_SIZE,
            follower_size: FOLLOWER_SIZE,
            color: crate::renderer::colors::WHITE,

            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

impl Settings {
    /// Create settings from a preset
    pub fn from_preset(preset: Preset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Overwrite the movement parameters a preset controls
    pub fn apply_preset(&mut self, preset: Preset) {
        let (count, spacing, speed, leash) = match preset {
            Preset::Reference => (FOLLOWER_COUNT, FOLLOWER_SPACING, FOLLOWER_SPEED, LEASH_LENGTH),
            Preset::LongTail => (12, 20.0, 2.5, 16.0),
            Preset::Tight => (5, 12.0, 3.0, 8.0),
        };
        self.follower_count = count;
        self.follower_spacing = spacing;
        self.follower_speed = speed;
        self.leash_length = leash;
        self.leader_speed = if preset == Preset::Tight { 3.0 } else { LEADER_SPEED };
    }

    pub fn leader_start(&self) -> Vec2 {
        Vec2::from(self.leader_start)
    }

    pub fn follower_origin(&self) -> Vec2 {
        Vec2::from(self.follower_origin)
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    /// Copy with out-of-range values replaced by their defaults.
    ///
    /// Leash, speeds and sizes end up finite and strictly positive.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut s = self.clone();

        fn fix(name: &str, value: &mut f32, fallback: f32) {
            if !value.is_finite() || *value <= 0.0 {
                log::warn!("{name} = {value} is invalid, using {fallback}");
                *value = fallback;
            }
        }

        fix("leash_length", &mut s.leash_length, defaults.leash_length);
        fix("leader_speed", &mut s.leader_speed, defaults.leader_speed);
        fix("follower_speed", &mut s.follower_speed, defaults.follower_speed);
        fix("canvas_width", &mut s.canvas_width, defaults.canvas_width);
        fix("canvas_height", &mut s.canvas_height, defaults.canvas_height);
        fix("leader_size", &mut s.leader_size, defaults.leader_size);
        fix("follower_size", &mut s.follower_size, defaults.follower_size);

        if !s.follower_spacing.is_finite() {
            log::warn!("follower_spacing is not finite, using {}", defaults.follower_spacing);
            s.follower_spacing = defaults.follower_spacing;
        }
        if !(s.leader_start.0.is_finite() && s.leader_start.1.is_finite()) {
            s.leader_start = defaults.leader_start;
        }
        if !(s.follower_origin.0.is_finite() && s.follower_origin.1.is_finite()) {
            s.follower_origin = defaults.follower_origin;
        }
        if s.ticks_per_second == 0 {
            log::warn!("ticks_per_second = 0, using {}", defaults.ticks_per_second);
            s.ticks_per_second = defaults.ticks_per_second;
        }
        s
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Read settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::read(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
