//! The three-stage campaign

use rand::rngs::StdRng;
use rand::SeedableRng;
use stroll_ambient::PetalSource;
use stroll_audio::{AmbientProfile, AudioSystem};
use stroll_encounter::{EncounterScript, VignetteAction};
use stroll_hud::{MemoryPresenter, Modal, QuizPrompt};
use stroll_math::{Circle, Rect, Vec2, Vec3};
use stroll_stage::{
    Campaign, CompletionGate, DressingSpec, EnvironmentProfile, GameSession, StageConfig,
    StageError,
};
use stroll_world::{MemoryWorldBuilder, SceneConfig};

/// Side length of every stage's ground plane
pub const WORLD_SIZE: f32 = 320.0;

/// Collectibles spawn in this inner square
const SPAWN_SIDE: f32 = 200.0;
/// Players roam out to the world edge minus a small margin
const BOUNDS_MARGIN: f32 = 6.0;
/// Landmark obstacles stand in the frame between these two squares, clear
/// of the collectible spawn area
const LANDMARK_INNER: f32 = 110.0;
const LANDMARK_OUTER: f32 = 150.0;

/// Landmark placement is content, not gameplay randomness, so it uses its
/// own fixed seed and stays identical across sessions.
const LANDMARK_SEED: u64 = 0x5744;

/// The session type the shipped game runs on: headless collaborators, with
/// rendering and overlay layers attached outside the engine.
pub type GameBackend = GameSession<MemoryWorldBuilder, MemoryPresenter>;

fn spawn_region() -> Rect {
    Rect::centered_square(SPAWN_SIDE)
}

fn world_bounds() -> Rect {
    Rect::centered_square(WORLD_SIZE - 2.0 * BOUNDS_MARGIN)
}

/// Scatter circular landmarks in the frame around the spawn area
fn scatter_landmarks(count: usize, radius: f32, rng: &mut StdRng) -> Vec<Circle> {
    let outer = Rect::centered_square(LANDMARK_OUTER * 2.0);
    let mut landmarks = Vec::with_capacity(count);
    while landmarks.len() < count {
        let spot = outer.sample(rng);
        if spot.x.abs() < LANDMARK_INNER && spot.y.abs() < LANDMARK_INNER {
            continue;
        }
        landmarks.push(Circle::new(spot, radius));
    }
    landmarks
}

fn forest_trees() -> Vec<Circle> {
    let mut rng = StdRng::seed_from_u64(LANDMARK_SEED);
    scatter_landmarks(70, 2.4, &mut rng)
}

fn street_lamps() -> Vec<Circle> {
    let mut rng = StdRng::seed_from_u64(LANDMARK_SEED + 1);
    scatter_landmarks(24, 0.5, &mut rng)
}

fn beach_rocks() -> Vec<Circle> {
    let mut rng = StdRng::seed_from_u64(LANDMARK_SEED + 2);
    scatter_landmarks(16, 1.4, &mut rng)
}

fn circles_json(circles: &[Circle]) -> serde_json::Value {
    serde_json::json!(circles
        .iter()
        .map(|c| serde_json::json!({ "x": c.center.x, "z": c.center.y, "r": c.radius }))
        .collect::<Vec<_>>())
}

/// The forest canopy sheds petals from a handful of its trees
fn forest_petal_sources() -> Vec<PetalSource> {
    forest_trees()
        .iter()
        .take(8)
        .map(|tree| PetalSource {
            position: Vec3::new(tree.center.x, 0.0, tree.center.y),
            radius: 5.5,
            height: 11.0,
        })
        .collect()
}

fn forest_stage() -> StageConfig {
    let mut stage = StageConfig::new("forest", "forest")
        .with_name("Blossom Grove")
        .with_target(10)
        .with_spawn_region(spawn_region())
        .with_player_spawn(Vec2::ZERO)
        .with_bounds(world_bounds())
        .with_environment(
            EnvironmentProfile::new()
                .with_sky([0.557, 0.788, 1.0])
                .with_fog(90.0, 300.0)
                .with_light(1.2)
                .with_ambient_audio("birdsong"),
        )
        .with_successor("night_street")
        .with_encounter(EncounterScript::new("grove_cat", 3, "cat"))
        .with_encounter(
            EncounterScript::new("blossom_elder", 6, "elder").with_action(VignetteAction::Give),
        )
        .with_dressing(DressingSpec {
            wanderers: 4,
            followers: 2,
            birds: 10,
            clouds: 14,
            petal_sources: forest_petal_sources(),
        });
    for tree in forest_trees() {
        stage = stage.with_obstacle(tree);
    }
    stage
}

fn night_street_stage() -> StageConfig {
    let mut stage = StageConfig::new("night_street", "night_street")
        .with_name("Night Street")
        .with_target(12)
        .with_spawn_region(spawn_region())
        .with_player_spawn(Vec2::new(0.0, -40.0))
        .with_bounds(world_bounds())
        .with_environment(
            EnvironmentProfile::new()
                .with_sky([0.04, 0.05, 0.12])
                .with_fog(40.0, 160.0)
                .with_light(0.35)
                .with_ambient_audio("crickets"),
        )
        .with_gate(CompletionGate::lantern_show(12.0))
        .with_successor("beach")
        .with_encounter(EncounterScript::new("street_cat", 6, "cat"))
        .with_dressing(DressingSpec {
            wanderers: 3,
            followers: 0,
            birds: 0,
            clouds: 0,
            petal_sources: Vec::new(),
        });
    for lamp in street_lamps() {
        stage = stage.with_obstacle(lamp);
    }
    stage
}

fn beach_stage() -> StageConfig {
    let mut stage = StageConfig::new("beach", "beach")
        .with_name("Beach")
        .with_target(13)
        .with_spawn_region(spawn_region())
        .with_player_spawn(Vec2::new(30.0, 0.0))
        .with_bounds(world_bounds())
        .with_environment(
            EnvironmentProfile::new()
                .with_sky([0.96, 0.87, 0.72])
                .with_fog(110.0, 340.0)
                .with_light(1.0)
                .with_ambient_audio("surf"),
        )
        .with_gate(CompletionGate::Quiz(QuizPrompt::new(
            "How many hearts light the beach?",
            vec!["Ten".into(), "Twelve".into(), "Thirteen".into()],
            2,
        )))
        .with_dressing(DressingSpec {
            wanderers: 0,
            followers: 0,
            birds: 10,
            clouds: 8,
            petal_sources: Vec::new(),
        });
    for rock in beach_rocks() {
        stage = stage.with_obstacle(rock);
    }
    stage
}

/// The shipped campaign: grove, night street, beach
pub fn campaign() -> Campaign {
    Campaign::new(vec![forest_stage(), night_street_stage(), beach_stage()])
        .expect("shipped campaign must validate")
        .with_completion(Modal::new(
            "Complete",
            "All hearts collected. You can replay anytime.",
            "Replay",
        ))
}

/// Scene descriptions handed to the world builder
pub fn scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig::new("forest")
            .with_name("Blossom Grove")
            .with_data("trees", circles_json(&forest_trees()))
            .with_data("grass_tufts", serde_json::json!(450))
            .with_data("flowers", serde_json::json!(140)),
        SceneConfig::new("night_street")
            .with_name("Night Street")
            .with_data("lamps", circles_json(&street_lamps())),
        SceneConfig::new("beach")
            .with_name("Beach")
            .with_data("rocks", circles_json(&beach_rocks())),
    ]
}

/// Ambient soundscapes referenced by the stage environments
pub fn ambient_profiles() -> Vec<AmbientProfile> {
    vec![
        AmbientProfile::new("birdsong", "audio/birdsong.ogg").with_fade_in(1.5),
        AmbientProfile::new("crickets", "audio/crickets.ogg").with_fade_in(2.0),
        AmbientProfile::new("surf", "audio/surf.ogg")
            .with_fade_in(2.0)
            .with_volume(0.8),
    ]
}

/// Assemble a ready-to-start headless session
pub fn new_session(seed: u64) -> Result<GameBackend, StageError> {
    let mut audio = AudioSystem::headless();
    for profile in ambient_profiles() {
        audio.register_profile(profile);
    }

    GameSession::new(
        campaign(),
        scenes(),
        MemoryWorldBuilder::new(),
        MemoryPresenter::new(),
        audio,
        seed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_validates() {
        let campaign = campaign();
        assert_eq!(campaign.stages().len(), 3);
        assert_eq!(campaign.first().id, "forest");
    }

    #[test]
    fn test_stage_chain() {
        let campaign = campaign();
        assert_eq!(
            campaign.get("forest").unwrap().successor.as_deref(),
            Some("night_street")
        );
        assert_eq!(
            campaign.get("night_street").unwrap().successor.as_deref(),
            Some("beach")
        );
        assert_eq!(campaign.get("beach").unwrap().successor, None);
    }

    #[test]
    fn test_targets_match_the_design() {
        let campaign = campaign();
        assert_eq!(campaign.get("forest").unwrap().target, 10);
        assert_eq!(campaign.get("night_street").unwrap().target, 12);
        assert_eq!(campaign.get("beach").unwrap().target, 13);
    }

    #[test]
    fn test_landmarks_stay_clear_of_spawn_area() {
        // Collectibles spawn in the inner square; every landmark must sit
        // far enough out that nothing spawns inside its footprint.
        let half = SPAWN_SIDE * 0.5;
        for stage in campaign().stages() {
            for obstacle in &stage.obstacles {
                let clear = obstacle.center.x.abs() >= LANDMARK_INNER
                    || obstacle.center.y.abs() >= LANDMARK_INNER;
                assert!(clear, "landmark inside spawn frame: {:?}", obstacle);
                assert!(LANDMARK_INNER - half > obstacle.radius + 1.5);
            }
        }
    }

    #[test]
    fn test_landmark_placement_is_deterministic() {
        assert_eq!(forest_trees(), forest_trees());
        assert_eq!(forest_trees().len(), 70);
    }

    #[test]
    fn test_every_audio_profile_is_registered() {
        let profiles: Vec<String> = ambient_profiles().into_iter().map(|p| p.id).collect();
        for stage in campaign().stages() {
            if let Some(audio) = &stage.environment.ambient_audio {
                assert!(profiles.contains(audio), "missing profile {}", audio);
            }
        }
    }

    #[test]
    fn test_session_assembles() {
        let session = new_session(1).unwrap();
        assert_eq!(session.current_stage(), "forest");
    }
}
