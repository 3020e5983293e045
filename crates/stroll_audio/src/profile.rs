//! Ambient audio profiles

use serde::{Deserialize, Serialize};

/// A named ambient soundscape (forest birdsong, night crickets, surf)
///
/// Stages reference profiles by id through their environment descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmbientProfile {
    /// Profile identifier
    pub id: String,
    /// Source asset path or backend-specific locator
    pub source: String,
    /// Volume (0.0 - 1.0)
    pub volume: f32,
    /// Fade in duration in seconds
    pub fade_in: f32,
    /// Fade out duration when replaced
    pub fade_out: f32,
    /// Whether playback loops
    pub looping: bool,
}

impl AmbientProfile {
    /// Create a new profile
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            volume: 1.0,
            fade_in: 0.0,
            fade_out: 0.0,
            looping: true,
        }
    }

    /// Set volume
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Set fade in duration
    pub fn with_fade_in(mut self, duration: f32) -> Self {
        self.fade_in = duration.max(0.0);
        self
    }

    /// Set fade out duration
    pub fn with_fade_out(mut self, duration: f32) -> Self {
        self.fade_out = duration.max(0.0);
        self
    }

    /// Disable looping
    pub fn one_shot(mut self) -> Self {
        self.looping = false;
        self
    }
}
