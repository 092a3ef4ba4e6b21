//! Florins - a leader square trailed by a chain of followers
//!
//! Core modules:
//! - `sim`: Deterministic simulation (leader movement, follower chain, tick)
//! - `renderer`: Read-only draw data for the host's rasterizer
//! - `platform`: Key mapping and fixed-step frame clock for the host loop
//! - `settings`: Data-driven tuning (speeds, leash, layout)

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Preset, Settings, SettingsError};
pub use sim::{SimState, TickInput, tick};

/// Reference configuration constants
pub mod consts {
    /// Host update rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical canvas size
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Leader defaults
    pub const LEADER_START: (f32, f32) = (100.0, 100.0);
    pub const LEADER_SPEED: f32 = 2.0; // units per tick, per axis
    pub const LEADER_SIZE: f32 = 20.0;
    pub const LEADER_NAME: &str = "Leader1";

    /// Follower defaults
    pub const FOLLOWER_COUNT: usize = 5;
    pub const FOLLOWER_ORIGIN: (f32, f32) = (100.0, 100.0);
    pub const FOLLOWER_SPACING: f32 = 30.0;
    pub const FOLLOWER_SPEED: f32 = 2.0;
    pub const FOLLOWER_SIZE: f32 = 15.0;

    /// Followers only move when farther than this from their target
    pub const LEASH_LENGTH: f32 = 20.0;
}
