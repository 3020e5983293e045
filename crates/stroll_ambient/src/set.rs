//! Per-stage ambient dressing bundle

use crate::bird::Flock;
use crate::cloud::CloudLayer;
use crate::critter::Critter;
use crate::petal::PetalField;
use rand::Rng;
use stroll_math::{Circle, Rect, Vec3};

/// Everything that moves in a scene without mattering to gameplay.
///
/// The stage controller swaps the whole set on stage entry and ticks it
/// after gameplay each frame.
#[derive(Debug, Clone, Default)]
pub struct AmbientSet {
    pub critters: Vec<Critter>,
    pub flock: Flock,
    pub clouds: CloudLayer,
    pub petals: PetalField,
    /// Area critters roam and clamp to
    pub roam: Option<Rect>,
}

impl AmbientSet {
    /// An empty set (a scene with no dressing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all animators by one frame
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        delta: f32,
        elapsed: f32,
        player_position: Vec3,
        obstacles: &[Circle],
        rng: &mut R,
    ) {
        if let Some(roam) = self.roam {
            for critter in &mut self.critters {
                critter.update(delta, elapsed, player_position, &roam, obstacles, rng);
            }
        }
        self.flock.update(delta, elapsed, rng);
        self.clouds.update(delta);
        self.petals.update(delta, elapsed, rng);
    }
}
