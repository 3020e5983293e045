//! Drifting birds

use rand::Rng;
use stroll_math::{Rect, Vec3};

/// One bird gliding across the sky
#[derive(Debug, Clone)]
pub struct Bird {
    pub position: Vec3,
    pub speed: f32,
    /// Wing-flap phase
    pub phase: f32,
    /// Current wing rotation, mirrored on the other wing
    pub wing_angle: f32,
}

impl Bird {
    fn randomize_lane<R: Rng + ?Sized>(&mut self, area: &Rect, rng: &mut R) {
        self.position.z = rng.gen_range(area.min.y..=area.max.y);
        self.position.y = rng.gen_range(18.0..28.0);
        self.speed = rng.gen_range(6.0..10.0);
    }
}

/// The sky's bird population
///
/// Birds drift in +X, sway gently in Z, and wrap around past the world edge
/// into a fresh random lane.
#[derive(Debug, Clone, Default)]
pub struct Flock {
    birds: Vec<Bird>,
    /// Distance from the origin at which birds wrap
    wrap: f32,
    /// Lane area used when respawning a wrapped bird
    area: Option<Rect>,
}

impl Flock {
    /// Spawn `count` birds across `area`, wrapping `overshoot` beyond its edge
    pub fn spawn<R: Rng + ?Sized>(count: usize, area: Rect, overshoot: f32, rng: &mut R) -> Self {
        let mut flock = Self {
            birds: Vec::with_capacity(count),
            wrap: area.max.x + overshoot,
            area: Some(area),
        };
        for _ in 0..count {
            let mut bird = Bird {
                position: Vec3::new(rng.gen_range(area.min.x..=area.max.x), 0.0, 0.0),
                speed: 0.0,
                phase: rng.gen_range(0.0..core::f32::consts::TAU),
                wing_angle: 0.0,
            };
            bird.randomize_lane(&area, rng);
            flock.birds.push(bird);
        }
        flock
    }

    /// Advance one frame
    pub fn update<R: Rng + ?Sized>(&mut self, delta: f32, elapsed: f32, rng: &mut R) {
        let Some(area) = self.area else {
            return;
        };
        for bird in &mut self.birds {
            bird.phase += delta * 6.0;
            bird.wing_angle = bird.phase.sin() * 0.8;

            bird.position.x += bird.speed * delta;
            bird.position.z += (elapsed + bird.phase).sin() * 0.3 * delta;

            if bird.position.x > self.wrap {
                bird.position.x = -self.wrap;
                bird.randomize_lane(&area, rng);
            }
        }
    }

    pub fn birds(&self) -> &[Bird] {
        &self.birds
    }
}
