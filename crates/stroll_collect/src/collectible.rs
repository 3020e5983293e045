//! Collectible instances

use serde::{Deserialize, Serialize};
use stroll_core::Id;
use stroll_math::Vec3;

/// Spawning and pickup tunables shared by a whole batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectibleConfig {
    /// Distance at which a collectible is picked up
    pub pickup_radius: f32,
    /// Height collectibles float at
    pub spawn_height: f32,
    /// Vertical bob amplitude
    pub bob_amplitude: f32,
    /// Bob angular frequency in radians per second
    pub bob_frequency: f32,
}

impl Default for CollectibleConfig {
    fn default() -> Self {
        Self {
            pickup_radius: 1.5,
            spawn_height: 2.6,
            bob_amplitude: 0.35,
            bob_frequency: 2.0,
        }
    }
}

impl CollectibleConfig {
    /// Set pickup radius
    pub fn with_pickup_radius(mut self, radius: f32) -> Self {
        self.pickup_radius = radius.max(0.0);
        self
    }

    /// Set spawn height
    pub fn with_spawn_height(mut self, height: f32) -> Self {
        self.spawn_height = height;
        self
    }
}

/// One floating pickup
#[derive(Debug, Clone)]
pub struct Collectible {
    /// Instance handle
    pub id: Id,
    /// Rest position; bobbing displaces only Y
    pub base: Vec3,
    /// Per-instance phase so a batch doesn't bob in lockstep
    pub phase: f32,
}

impl Collectible {
    /// Current position given the elapsed stage time
    pub fn position(&self, elapsed: f32, config: &CollectibleConfig) -> Vec3 {
        let bob = (elapsed * config.bob_frequency + self.phase).sin() * config.bob_amplitude;
        Vec3::new(self.base.x, self.base.y + bob, self.base.z)
    }
}
