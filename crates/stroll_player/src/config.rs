//! Movement configuration

use serde::{Deserialize, Serialize};

/// Tunables for the walking model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Horizontal speed while a movement key is held
    pub move_speed: f32,

    /// Upward velocity applied on a grounded jump
    pub jump_speed: f32,

    /// Vertical acceleration (negative = down)
    pub gravity: f32,

    /// Full player height; the ground clamp acts at half this
    pub height: f32,

    /// Player footprint radius for obstacle push-out
    pub radius: f32,

    /// Radians of look rotation per pointer unit
    pub look_sensitivity: f32,

    /// Pitch clamp in radians, applied symmetrically
    pub pitch_limit: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 7.5,
            jump_speed: 6.8,
            gravity: -18.0,
            height: 1.8,
            radius: 0.45,
            look_sensitivity: 0.0022,
            pitch_limit: 1.2,
        }
    }
}

impl MovementConfig {
    /// Set horizontal move speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed.max(0.0);
        self
    }

    /// Set jump speed
    pub fn with_jump_speed(mut self, speed: f32) -> Self {
        self.jump_speed = speed.max(0.0);
        self
    }

    /// Set gravity
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Vertical position of the player's center when standing on the ground
    #[inline]
    pub fn ground_level(&self) -> f32 {
        self.height * 0.5
    }
}
