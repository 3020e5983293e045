//! Collectible batch management and pickup detection

use crate::collectible::{Collectible, CollectibleConfig};
use rand::Rng;
use stroll_core::IdGenerator;
use stroll_math::{Rect, Vec3};

/// Owns the live collectibles of the active stage.
///
/// The collected counter is the stage controller's progress source; it is
/// incremented here and nowhere else, and reset by `populate`.
#[derive(Debug, Default)]
pub struct CollectibleManager {
    config: CollectibleConfig,
    items: Vec<Collectible>,
    collected: u32,
    ids: IdGenerator,
}

impl CollectibleManager {
    pub fn new(config: CollectibleConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            collected: 0,
            ids: IdGenerator::new(),
        }
    }

    pub fn config(&self) -> &CollectibleConfig {
        &self.config
    }

    /// Replace all collectibles with a fresh batch inside `region`.
    ///
    /// Positions are sampled uniformly over the region at the configured
    /// height; each instance gets a random bob phase. Resets the collected
    /// counter.
    pub fn populate<R: Rng + ?Sized>(&mut self, region: &Rect, count: u32, rng: &mut R) {
        self.items.clear();
        self.collected = 0;
        self.items.reserve(count as usize);

        for _ in 0..count {
            let spot = region.sample(rng);
            self.items.push(Collectible {
                id: self.ids.next(),
                base: Vec3::new(spot.x, self.config.spawn_height, spot.y),
                phase: rng.gen_range(0.0..core::f32::consts::TAU),
            });
        }
    }

    /// Remove all collectibles without touching the counter
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Bob the batch and pick up everything in range of the player.
    ///
    /// Returns how many were picked up this call. Removal is immediate, so
    /// a second call in the same tick finds nothing left to count.
    pub fn update(&mut self, elapsed: f32, player_position: Vec3) -> u32 {
        let config = &self.config;
        let before = self.items.len();
        self.items.retain(|item| {
            item.position(elapsed, config).distance(player_position) >= config.pickup_radius
        });
        let picked = (before - self.items.len()) as u32;
        self.collected += picked;
        picked
    }

    /// Total picked up since the last `populate`
    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// Collectibles still in the world
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// The live collectibles, for rendering
    pub fn items(&self) -> &[Collectible] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stroll_math::Vec2;

    fn manager() -> CollectibleManager {
        CollectibleManager::new(CollectibleConfig::default())
    }

    fn region() -> Rect {
        Rect::centered_square(260.0)
    }

    #[test]
    fn test_populate_creates_exact_count_inside_region() {
        let mut manager = manager();
        let mut rng = StdRng::seed_from_u64(42);
        let region = region();

        manager.populate(&region, 13, &mut rng);

        assert_eq!(manager.remaining(), 13);
        assert_eq!(manager.collected(), 0);
        for item in manager.items() {
            assert!(region.contains(item.base.horizontal()));
            assert_eq!(item.base.y, 2.6);
        }
    }

    #[test]
    fn test_pickup_in_range() {
        let mut manager = manager();
        let mut rng = StdRng::seed_from_u64(1);
        manager.populate(&Rect::centered_square(1.0), 3, &mut rng);

        // Player standing in the middle of the tiny region reaches all three
        let picked = manager.update(0.0, Vec3::new(0.0, 2.6, 0.0));
        assert_eq!(picked, 3);
        assert_eq!(manager.collected(), 3);
        assert_eq!(manager.remaining(), 0);
    }

    #[test]
    fn test_pickup_is_at_most_once() {
        let mut manager = manager();
        let mut rng = StdRng::seed_from_u64(2);
        manager.populate(&Rect::centered_square(1.0), 5, &mut rng);

        let player = Vec3::new(0.0, 2.6, 0.0);
        let first = manager.update(0.0, player);
        let second = manager.update(0.0, player);

        assert_eq!(first, 5);
        assert_eq!(second, 0);
        assert_eq!(manager.collected(), 5);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut manager = manager();
        let mut rng = StdRng::seed_from_u64(3);
        manager.populate(&Rect::centered_square(1.0), 4, &mut rng);

        manager.update(0.0, Vec3::new(50.0, 0.9, 50.0));
        assert_eq!(manager.collected(), 0);
        assert_eq!(manager.remaining(), 4);
    }

    #[test]
    fn test_vertical_distance_counts() {
        let mut manager = manager();
        let mut rng = StdRng::seed_from_u64(4);
        manager.populate(&Rect::from_center_half_extents(Vec2::ZERO, Vec2::ZERO), 1, &mut rng);

        // Directly underneath but far below the float height: out of reach
        // even at the lowest point of the bob
        let picked = manager.update(0.0, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(picked, 0);
    }

    #[test]
    fn test_repopulate_resets_counter() {
        let mut manager = manager();
        let mut rng = StdRng::seed_from_u64(5);
        manager.populate(&Rect::centered_square(1.0), 2, &mut rng);
        manager.update(0.0, Vec3::new(0.0, 2.6, 0.0));
        assert_eq!(manager.collected(), 2);

        manager.populate(&region(), 12, &mut rng);
        assert_eq!(manager.collected(), 0);
        assert_eq!(manager.remaining(), 12);
    }
}
