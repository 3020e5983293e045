//! Transient vignette actors

use stroll_core::Id;
use stroll_math::Vec3;

/// Limb swing angular frequency while an actor emotes
const SWING_FREQUENCY: f32 = 6.0;
/// Limb swing amplitude in radians
const SWING_AMPLITUDE: f32 = 0.6;

/// A puppet owned by one encounter, spawned on activation and removed when
/// the vignette finishes
#[derive(Debug, Clone)]
pub struct NpcActor {
    /// Instance handle
    pub id: Id,
    /// What the world builder should render this as ("cat", "elder", ...)
    pub kind: String,
    pub position: Vec3,
    /// Facing, updated to match travel direction
    pub heading: f32,
    /// Cosmetic limb rotation, no gameplay effect
    pub limb_swing: f32,
}

impl NpcActor {
    pub fn new(id: Id, kind: impl Into<String>, position: Vec3) -> Self {
        Self {
            id,
            kind: kind.into(),
            position,
            heading: 0.0,
            limb_swing: 0.0,
        }
    }

    /// Walk straight toward `target` on the ground plane.
    ///
    /// Direct steering: normalize the displacement, scale by speed and
    /// delta, never overshoot. Returns the horizontal distance still left
    /// after the step.
    pub fn step_toward(&mut self, target: Vec3, speed: f32, delta: f32) -> f32 {
        let mut offset = target - self.position;
        offset.y = 0.0;
        let distance = offset.length();
        if distance < 1e-4 {
            return 0.0;
        }

        let step = (speed * delta).min(distance);
        let direction = offset / distance;
        self.position += direction * step;
        self.heading = direction.x.atan2(direction.z);
        distance - step
    }

    /// Advance the cosmetic limb swing
    pub fn animate(&mut self, elapsed: f32) {
        self.limb_swing = (elapsed * SWING_FREQUENCY).sin() * SWING_AMPLITUDE;
    }
}
