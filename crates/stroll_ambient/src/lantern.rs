//! Sky lanterns for the timed show

use rand::Rng;
use stroll_math::{Rect, Vec3};

/// One ascending lantern
#[derive(Debug, Clone)]
pub struct Lantern {
    pub position: Vec3,
    pub rise_speed: f32,
    /// Per-instance sway phase
    pub phase: f32,
}

/// The particle set of one lantern show
///
/// Launched in a single batch; lanterns rise, sway, and despawn above the
/// ceiling. The swarm is spent when every lantern is gone.
#[derive(Debug, Clone, Default)]
pub struct LanternSwarm {
    lanterns: Vec<Lantern>,
    ceiling: f32,
}

impl LanternSwarm {
    /// Launch a batch from ground level across `area`
    pub fn launch<R: Rng + ?Sized>(count: usize, area: Rect, ceiling: f32, rng: &mut R) -> Self {
        let mut swarm = Self {
            lanterns: Vec::with_capacity(count),
            ceiling,
        };
        for _ in 0..count {
            let spot = area.sample(rng);
            swarm.lanterns.push(Lantern {
                position: Vec3::new(spot.x, rng.gen_range(0.5..2.0), spot.y),
                rise_speed: rng.gen_range(1.2..2.4),
                phase: rng.gen_range(0.0..core::f32::consts::TAU),
            });
        }
        swarm
    }

    /// Advance one frame
    pub fn update(&mut self, delta: f32, elapsed: f32) {
        for lantern in &mut self.lanterns {
            lantern.position.y += lantern.rise_speed * delta;
            lantern.position.x += (elapsed * 0.8 + lantern.phase).sin() * 0.4 * delta;
            lantern.position.z += (elapsed * 0.6 + lantern.phase).cos() * 0.4 * delta;
        }
        let ceiling = self.ceiling;
        self.lanterns.retain(|l| l.position.y < ceiling);
    }

    /// Whether every lantern has drifted out of sight
    pub fn is_spent(&self) -> bool {
        self.lanterns.is_empty()
    }

    pub fn lanterns(&self) -> &[Lantern] {
        &self.lanterns
    }
}
