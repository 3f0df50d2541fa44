//! Audio preferences
//!
//! Owned by the presentation/audio layer; the simulation never reads these.

use serde::{Deserialize, Serialize};

use crate::tuning::ConfigError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Feedback sounds (success, failure, victory, defeat)
    pub sound_enabled: bool,
    /// Background ambience loop
    pub ambient_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Ambient/music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Mute when window loses focus
    pub mute_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            ambient_enabled: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            mute_on_blur: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields keep defaults, volumes clamped)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.clamp_volumes();
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    fn clamp_volumes(&mut self) {
        for vol in [
            &mut self.master_volume,
            &mut self.sfx_volume,
            &mut self.music_volume,
        ] {
            *vol = if vol.is_finite() { vol.clamp(0.0, 1.0) } else { 0.0 };
        }
    }

    /// Effective feedback volume (0 when sound is off)
    pub fn effective_sfx_volume(&self) -> f32 {
        if !self.sound_enabled {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Effective ambience volume (0 when the loop is off)
    pub fn effective_music_volume(&self) -> f32 {
        if !self.ambient_enabled {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }
}
