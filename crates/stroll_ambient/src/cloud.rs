//! Drifting clouds

use rand::Rng;
use stroll_math::{Rect, Vec3};

/// One cloud cluster
#[derive(Debug, Clone)]
pub struct Cloud {
    pub position: Vec3,
    pub speed: f32,
}

/// A layer of slowly drifting clouds that wrap around the world
#[derive(Debug, Clone, Default)]
pub struct CloudLayer {
    clouds: Vec<Cloud>,
    wrap: f32,
}

impl CloudLayer {
    /// Spawn `count` clouds over `area`, wrapping `overshoot` beyond its edge
    pub fn spawn<R: Rng + ?Sized>(count: usize, area: Rect, overshoot: f32, rng: &mut R) -> Self {
        let mut layer = Self {
            clouds: Vec::with_capacity(count),
            wrap: area.max.x + overshoot,
        };
        for _ in 0..count {
            let spot = area.sample(rng);
            layer.clouds.push(Cloud {
                position: Vec3::new(spot.x, rng.gen_range(26.0..46.0), spot.y),
                speed: rng.gen_range(1.0..1.6),
            });
        }
        layer
    }

    /// Advance one frame
    pub fn update(&mut self, delta: f32) {
        for cloud in &mut self.clouds {
            cloud.position.x += cloud.speed * delta;
            if cloud.position.x > self.wrap {
                cloud.position.x = -self.wrap;
            }
        }
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_clouds_wrap() {
        let mut rng = StdRng::seed_from_u64(41);
        let mut layer = CloudLayer::spawn(5, Rect::centered_square(320.0), 30.0, &mut rng);

        for _ in 0..100_000 {
            layer.update(0.05);
            for cloud in layer.clouds() {
                assert!(cloud.position.x.abs() <= 190.0 + 1e-3);
            }
        }
    }

    #[test]
    fn test_cloud_height_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let layer = CloudLayer::spawn(8, Rect::centered_square(320.0), 30.0, &mut rng);
        for cloud in layer.clouds() {
            assert!(cloud.position.y >= 26.0 && cloud.position.y < 46.0);
        }
    }
}
