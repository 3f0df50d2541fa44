//! Door Quest - A top-down quiz adventure
//!
//! Core modules:
//! - `sim`: Simulation (movement, predator AI, collisions, task gate, scoring)
//! - `game`: Frame driver that owns a session and dispatches feedback
//! - `snapshot`: Read-only per-frame view for presentation
//! - `tuning`: Data-driven game balance
//! - `settings`: Audio preferences for the presentation layer
//! - `audio`: Feedback hooks and ambient loop lifecycle

pub mod audio;
pub mod game;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use audio::{AmbientLoop, AudioManager, Feedback, SoundEffect};
pub use game::Game;
pub use settings::Settings;
pub use snapshot::Snapshot;
pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed frame timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest `dt` a single frame may integrate (stalled frames are clamped)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Map dimensions, in tiles of `TILE` world units
    pub const TILE: f32 = 40.0;
    pub const MAP_W: u32 = 20;
    pub const MAP_H: u32 = 12;
    pub const BOARD_W: f32 = MAP_W as f32 * TILE;
    pub const BOARD_H: f32 = MAP_H as f32 * TILE;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 14.0;
    pub const PLAYER_SPEED: f32 = 160.0;

    /// Predator (wolf) defaults - same speed in both modes, only the target changes
    pub const PREDATOR_RADIUS: f32 = 16.0;
    pub const PREDATOR_SPEED: f32 = 120.0;
    pub const CHASE_RADIUS: f32 = 180.0;
    /// Wander target counts as reached inside this distance
    pub const ARRIVAL_RADIUS: f32 = 20.0;
    /// Random candidates tried per wander resample before using the fallback
    pub const WANDER_SAMPLES: u32 = 20;
    /// Forgiveness subtracted from the radii sum for predator contact
    pub const CONTACT_MARGIN: f32 = 4.0;

    /// Door trigger tolerance (half-extents around the door center)
    pub const DOOR_REACH_X: f32 = 26.0;
    pub const DOOR_REACH_Y: f32 = 30.0;

    /// Scoring
    pub const TASK_REWARD: i64 = 10;
    pub const WRONG_ANSWER_PENALTY: i64 = 10;

    /// Math task operand and result range (inclusive)
    pub const MATH_MAX: u32 = 100;
}
