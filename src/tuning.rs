//! Data-driven game balance
//!
//! Defaults come from `consts`; a JSON document may override any subset of
//! fields (missing fields keep their defaults).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::geometry::clamp;

/// Failure to load tuning or settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Gameplay tuning knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player speed (units/s)
    pub player_speed: f32,
    /// Predator speed (units/s), shared by wander and chase
    pub predator_speed: f32,
    /// Predator chases while the player is closer than this
    pub chase_radius: f32,
    /// Wander target counts as reached inside this distance
    pub arrival_radius: f32,
    /// Random candidates tried per wander resample
    pub wander_samples: u32,
    /// Forgiveness subtracted from the radii sum for predator contact
    pub contact_margin: f32,
    /// Door trigger half-extents around the door center
    pub door_reach_x: f32,
    pub door_reach_y: f32,
    /// Points for a correct answer
    pub task_reward: i64,
    /// Points lost per wrong math answer
    pub math_penalty: i64,
    /// Points lost per wrong language answer
    pub language_penalty: i64,
    /// Largest dt integrated by a single frame
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            predator_speed: PREDATOR_SPEED,
            chase_radius: CHASE_RADIUS,
            arrival_radius: ARRIVAL_RADIUS,
            wander_samples: WANDER_SAMPLES,
            contact_margin: CONTACT_MARGIN,
            door_reach_x: DOOR_REACH_X,
            door_reach_y: DOOR_REACH_Y,
            task_reward: TASK_REWARD,
            math_penalty: WRONG_ANSWER_PENALTY,
            language_penalty: WRONG_ANSWER_PENALTY,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides");
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot integrate sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_speed", self.player_speed),
            ("predator_speed", self.predator_speed),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("chase_radius", self.chase_radius),
            ("arrival_radius", self.arrival_radius),
            ("contact_margin", self.contact_margin),
            ("door_reach_x", self.door_reach_x),
            ("door_reach_y", self.door_reach_y),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("must be >= 0, got {value}")));
            }
        }

        if self.task_reward < 0 {
            return Err(invalid("task_reward", "must be >= 0"));
        }
        if self.math_penalty < 0 || self.language_penalty < 0 {
            return Err(invalid(
                "math_penalty/language_penalty",
                "penalties are magnitudes and must be >= 0",
            ));
        }
        Ok(())
    }

    /// Clamp a raw frame delta into `[0, max_frame_dt]` (NaN counts as 0)
    ///
    /// A negative or NaN cap freezes time instead of panicking.
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        clamp(dt, 0.0, self.max_frame_dt.max(0.0))
    }
}
