//! Per-stage environment descriptors

use serde::{Deserialize, Serialize};

/// The look and sound of a stage: sky, fog, light, ambient audio.
///
/// The renderer reads this off the active stage each frame; the stage
/// controller applies the audio side on stage entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    /// Sky / clear color (linear RGB)
    pub sky_color: [f32; 3],
    /// Fog color (linear RGB)
    pub fog_color: [f32; 3],
    /// Distance at which fog starts
    pub fog_near: f32,
    /// Distance at which fog is fully opaque
    pub fog_far: f32,
    /// Directional light intensity
    pub light_intensity: f32,
    /// Ambient audio profile id, if the stage has a soundscape
    pub ambient_audio: Option<String>,
}

impl Default for EnvironmentProfile {
    fn default() -> Self {
        // Clear daytime sky
        Self {
            sky_color: [0.557, 0.788, 1.0],
            fog_color: [0.557, 0.788, 1.0],
            fog_near: 90.0,
            fog_far: 300.0,
            light_intensity: 1.2,
            ambient_audio: None,
        }
    }
}

impl EnvironmentProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set sky and matching fog color
    pub fn with_sky(mut self, color: [f32; 3]) -> Self {
        self.sky_color = color;
        self.fog_color = color;
        self
    }

    /// Set fog distances
    pub fn with_fog(mut self, near: f32, far: f32) -> Self {
        self.fog_near = near;
        self.fog_far = far.max(near);
        self
    }

    /// Set light intensity
    pub fn with_light(mut self, intensity: f32) -> Self {
        self.light_intensity = intensity.max(0.0);
        self
    }

    /// Set the ambient audio profile
    pub fn with_ambient_audio(mut self, profile: impl Into<String>) -> Self {
        self.ambient_audio = Some(profile.into());
        self
    }
}
