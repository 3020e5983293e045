//! Falling blossom petals

use rand::Rng;
use serde::{Deserialize, Serialize};
use stroll_math::Vec3;

/// Hard cap on live petals
const MAX_PETALS: usize = 260;
/// Chance per frame that a new petal is shed
const SPAWN_CHANCE: f64 = 0.5;

/// One falling petal
#[derive(Debug, Clone)]
pub struct Petal {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: Vec3,
    pub spin: Vec3,
    pub life: f32,
}

/// A canopy location petals fall from
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PetalSource {
    pub position: Vec3,
    pub radius: f32,
    pub height: f32,
}

/// The stage's petal particle field
#[derive(Debug, Clone, Default)]
pub struct PetalField {
    sources: Vec<PetalSource>,
    petals: Vec<Petal>,
}

impl PetalField {
    pub fn new(sources: Vec<PetalSource>) -> Self {
        Self {
            sources,
            petals: Vec::new(),
        }
    }

    fn shed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let Some(source) = self
            .sources
            .get(rng.gen_range(0..self.sources.len().max(1)))
            .copied()
        else {
            return;
        };

        self.petals.push(Petal {
            position: Vec3::new(
                source.position.x + rng.gen_range(-source.radius..=source.radius),
                source.height + rng.gen_range(0.0..2.0),
                source.position.z + rng.gen_range(-source.radius..=source.radius),
            ),
            velocity: Vec3::new(
                rng.gen_range(-0.3..0.3),
                -0.4 - rng.gen_range(0.0..0.4),
                rng.gen_range(-0.3..0.3),
            ),
            rotation: Vec3::new(
                rng.gen_range(0.0..core::f32::consts::PI),
                rng.gen_range(0.0..core::f32::consts::PI),
                rng.gen_range(0.0..core::f32::consts::PI),
            ),
            spin: Vec3::new(
                rng.gen_range(-1.5..1.5),
                rng.gen_range(-1.5..1.5),
                rng.gen_range(-1.5..1.5),
            ),
            life: rng.gen_range(8.0..12.0),
        });
    }

    /// Advance one frame: maybe shed a petal, drift the rest on the wind,
    /// cull the expired and the grounded
    pub fn update<R: Rng + ?Sized>(&mut self, delta: f32, elapsed: f32, rng: &mut R) {
        if !self.sources.is_empty() && self.petals.len() < MAX_PETALS && rng.gen_bool(SPAWN_CHANCE)
        {
            self.shed(rng);
        }

        let wind = (elapsed * 0.25).sin() * 0.3;
        for petal in &mut self.petals {
            petal.velocity.x += wind * delta * 0.2;
            petal.position += petal.velocity * delta;
            petal.rotation += petal.spin * delta;
            petal.life -= delta;
        }

        self.petals
            .retain(|p| p.life > 0.0 && p.position.y > 0.05);
    }

    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grove() -> Vec<PetalSource> {
        vec![
            PetalSource {
                position: Vec3::new(0.0, 0.0, 0.0),
                radius: 5.5,
                height: 11.0,
            },
            PetalSource {
                position: Vec3::new(30.0, 0.0, -12.0),
                radius: 5.5,
                height: 9.0,
            },
        ]
    }

    #[test]
    fn test_petals_spawn_and_fall() {
        let mut rng = StdRng::seed_from_u64(51);
        let mut field = PetalField::new(grove());

        for frame in 0..240 {
            field.update(0.016, frame as f32 * 0.016, &mut rng);
        }
        assert!(!field.petals().is_empty());
        for petal in field.petals() {
            assert!(petal.velocity.y < 0.0);
        }
    }

    #[test]
    fn test_population_is_capped() {
        let mut rng = StdRng::seed_from_u64(52);
        let mut field = PetalField::new(grove());

        // Tiny delta so nothing ages out while spawning runs hot
        for frame in 0..10_000 {
            field.update(0.0001, frame as f32 * 0.0001, &mut rng);
            assert!(field.petals().len() <= MAX_PETALS);
        }
    }

    #[test]
    fn test_grounded_petals_are_culled() {
        let mut rng = StdRng::seed_from_u64(53);
        let mut field = PetalField::new(grove());

        // A long run lands everything that was shed early on
        for frame in 0..6000 {
            field.update(0.05, frame as f32 * 0.05, &mut rng);
        }
        for petal in field.petals() {
            assert!(petal.position.y > 0.05);
            assert!(petal.life > 0.0);
        }
    }

    #[test]
    fn test_no_sources_no_petals() {
        let mut rng = StdRng::seed_from_u64(54);
        let mut field = PetalField::new(Vec::new());
        field.update(0.016, 0.0, &mut rng);
        assert!(field.petals().is_empty());
    }
}
