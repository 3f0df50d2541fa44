//! Audio feedback hooks
//!
//! The simulation reports success, failure, victory and defeat through the
//! [`Feedback`] trait. `AudioManager` turns those into sound cues for the
//! presentation layer to synthesize, and owns the ambience loop lifecycle.

use crate::settings::Settings;
use crate::sim::DefeatReason;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Correct answer, door opens
    Success,
    /// Wrong answer
    Failure,
    /// Last door opened
    Victory,
    /// Fell in a lake
    Splash,
    /// Caught by the wolf
    Howl,
}

/// Oscillator shape for a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// A synthesized tone: frequency sweep over a duration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration: f32,
}

impl SoundEffect {
    /// Tone recipe for this effect
    pub fn tone(&self) -> Tone {
        match self {
            // Rising chirp
            SoundEffect::Success => Tone {
                waveform: Waveform::Sine,
                start_hz: 660.0,
                end_hz: 990.0,
                duration: 0.15,
            },
            // Low buzz
            SoundEffect::Failure => Tone {
                waveform: Waveform::Square,
                start_hz: 180.0,
                end_hz: 120.0,
                duration: 0.25,
            },
            SoundEffect::Victory => Tone {
                waveform: Waveform::Triangle,
                start_hz: 523.0,
                end_hz: 1047.0,
                duration: 0.6,
            },
            // Noisy drop
            SoundEffect::Splash => Tone {
                waveform: Waveform::Sawtooth,
                start_hz: 400.0,
                end_hz: 60.0,
                duration: 0.5,
            },
            SoundEffect::Howl => Tone {
                waveform: Waveform::Sine,
                start_hz: 300.0,
                end_hz: 550.0,
                duration: 0.9,
            },
        }
    }
}

/// Notification hooks invoked by the game driver
///
/// All methods default to no-ops so sinks only implement what they need.
pub trait Feedback {
    fn success(&mut self) {}
    fn failure(&mut self) {}
    fn victory(&mut self) {}
    fn defeat(&mut self, _reason: DefeatReason) {}
    /// A fresh session started
    fn reset(&mut self) {}
}

/// Background ambience with an explicit start/stop lifecycle
///
/// Running requires `enabled`; disabling stops a running loop.
#[derive(Debug, Clone, Default)]
pub struct AmbientLoop {
    enabled: bool,
    running: bool,
}

impl AmbientLoop {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            running: false,
        }
    }

    /// Start the loop; returns whether it is running afterwards
    pub fn start(&mut self) -> bool {
        if self.enabled && !self.running {
            self.running = true;
            log::debug!("Ambience started");
        }
        self.running
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::debug!("Ambience stopped");
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.stop();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// A cue queued for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cue {
    pub effect: SoundEffect,
    pub volume: f32,
}

/// Audio manager for the game
#[derive(Debug, Clone)]
pub struct AudioManager {
    settings: Settings,
    muted: bool,
    ambient: AmbientLoop,
    queue: Vec<Cue>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AudioManager {
    pub fn new(settings: Settings) -> Self {
        let mut ambient = AmbientLoop::new(settings.ambient_enabled);
        ambient.start();
        Self {
            settings,
            muted: false,
            ambient,
            queue: Vec::new(),
        }
    }

    /// Swap in new settings (toggling ambience on/off as needed)
    pub fn apply_settings(&mut self, settings: Settings) {
        self.ambient.set_enabled(settings.ambient_enabled);
        if settings.ambient_enabled {
            self.ambient.start();
        }
        self.settings = settings;
    }

    /// Mute/unmute all audio (e.g. window blur)
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Focus change; only mutes when the setting asks for it
    pub fn on_focus_changed(&mut self, focused: bool) {
        if self.settings.mute_on_blur {
            self.set_muted(!focused);
        }
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.settings.effective_sfx_volume()
        }
    }

    /// Ambience volume the presentation should use right now
    pub fn ambient_volume(&self) -> f32 {
        if self.muted || !self.ambient.is_running() {
            0.0
        } else {
            self.settings.effective_music_volume()
        }
    }

    pub fn ambient(&self) -> &AmbientLoop {
        &self.ambient
    }

    /// Queue a sound effect (dropped when silent)
    pub fn play(&mut self, effect: SoundEffect) {
        let volume = self.effective_volume();
        if volume <= 0.0 {
            return;
        }
        log::trace!("Cue {:?} at {:.2}", effect, volume);
        self.queue.push(Cue { effect, volume });
    }

    /// Take queued cues for synthesis
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.queue)
    }
}

impl Feedback for AudioManager {
    fn success(&mut self) {
        self.play(SoundEffect::Success);
    }

    fn failure(&mut self) {
        self.play(SoundEffect::Failure);
    }

    fn victory(&mut self) {
        self.ambient.stop();
        self.play(SoundEffect::Victory);
    }

    fn defeat(&mut self, reason: DefeatReason) {
        self.ambient.stop();
        self.play(match reason {
            DefeatReason::Hazard => SoundEffect::Splash,
            DefeatReason::Predator => SoundEffect::Howl,
        });
    }

    fn reset(&mut self) {
        self.ambient.start();
    }
}
