//! Player state and kinematics

use crate::config::MovementConfig;
use serde::{Deserialize, Serialize};
use stroll_input::InputSnapshot;
use stroll_math::{Circle, Rect, Vec2, Vec3};

/// The single mutable player record
///
/// Written only by [`PlayerController`] during the tick and reset by the
/// stage controller on scene entry. Everything else (camera, pickup tests,
/// encounter proximity) reads it after movement has been resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub grounded: bool,
    pub yaw: f32,
    pub pitch: f32,
    pub third_person: bool,
}

impl PlayerState {
    /// Spawn standing on the ground at the given horizontal position
    pub fn standing_at(spawn: Vec2, config: &MovementConfig) -> Self {
        Self {
            position: Vec3::new(spawn.x, config.ground_level(), spawn.y),
            velocity: Vec3::ZERO,
            grounded: true,
            yaw: 0.0,
            pitch: 0.0,
            third_person: false,
        }
    }

    /// Reset to a spawn point, keeping the view mode preference
    pub fn reset(&mut self, spawn: Vec2, config: &MovementConfig) {
        let third_person = self.third_person;
        *self = Self::standing_at(spawn, config);
        self.third_person = third_person;
    }

    /// Unit forward vector on the ground plane, derived from yaw
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Unit right vector on the ground plane
    #[inline]
    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw + core::f32::consts::FRAC_PI_2;
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    }
}

/// Integrates input into player motion
#[derive(Debug, Clone, Default)]
pub struct PlayerController {
    config: MovementConfig,
}

impl PlayerController {
    pub fn new(config: MovementConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Apply accumulated pointer motion to yaw/pitch.
    ///
    /// Look runs independently of movement so the view still turns while
    /// standing still.
    pub fn apply_look(&self, state: &mut PlayerState, look_delta: Vec2) {
        state.yaw -= look_delta.x * self.config.look_sensitivity;
        state.pitch -= look_delta.y * self.config.look_sensitivity;
        state.pitch = state
            .pitch
            .clamp(-self.config.pitch_limit, self.config.pitch_limit);
    }

    /// Advance the player by one frame.
    ///
    /// Order matters: integrate velocity, clamp to the ground, then apply
    /// the world-bounds clamp and obstacle push-out, so dependents always
    /// read a resolved position.
    pub fn update(
        &self,
        state: &mut PlayerState,
        input: &InputSnapshot,
        delta: f32,
        bounds: Option<&Rect>,
        obstacles: &[Circle],
    ) {
        if input.view_toggled {
            state.third_person = !state.third_person;
        }

        let mut direction = Vec3::ZERO;
        if input.forward {
            direction += state.forward();
        }
        if input.back {
            direction -= state.forward();
        }
        if input.left {
            direction -= state.right();
        }
        if input.right {
            direction += state.right();
        }
        let direction = direction.normalize_or_zero();

        // No inertia: horizontal velocity tracks input exactly
        state.velocity.x = direction.x * self.config.move_speed;
        state.velocity.z = direction.z * self.config.move_speed;

        if input.jump && state.grounded {
            state.velocity.y = self.config.jump_speed;
            state.grounded = false;
        }

        state.velocity.y += self.config.gravity * delta;
        state.position += state.velocity * delta;

        let floor = self.config.ground_level();
        if state.position.y <= floor {
            state.position.y = floor;
            state.velocity.y = 0.0;
            state.grounded = true;
        }

        if let Some(bounds) = bounds {
            let clamped = bounds.clamp(state.position.horizontal());
            state.position = state.position.with_horizontal(clamped);
        }

        for obstacle in obstacles {
            state.position = obstacle.push_out_3d(state.position, self.config.radius);
        }
    }
}
