//! Stage configuration

use crate::environment::EnvironmentProfile;
use crate::error::CampaignError;
use crate::gate::CompletionGate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stroll_ambient::{AmbientSet, CloudLayer, Critter, Flock, PetalField, PetalSource};
use stroll_encounter::EncounterScript;
use stroll_hud::Modal;
use stroll_math::{Circle, Rect, Vec2, Vec3};
use stroll_world::SceneId;

/// How much scene dressing a stage spawns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DressingSpec {
    /// Wandering ground critters
    pub wanderers: u32,
    /// Critters that trail the player
    pub followers: u32,
    /// Birds in the sky
    pub birds: usize,
    /// Drifting clouds
    pub clouds: usize,
    /// Canopy points petals fall from
    pub petal_sources: Vec<PetalSource>,
}

impl DressingSpec {
    /// Instantiate the dressing for a stage
    pub fn build<R: Rng + ?Sized>(&self, area: Rect, rng: &mut R) -> AmbientSet {
        let mut critters = Vec::with_capacity((self.wanderers + self.followers) as usize);
        for _ in 0..self.wanderers {
            let spot = area.sample(rng);
            critters.push(Critter::wanderer(Vec3::new(spot.x, 0.0, spot.y)));
        }
        for _ in 0..self.followers {
            let spot = area.sample(rng);
            critters.push(Critter::follower(
                Vec3::new(spot.x, 0.0, spot.y),
                rng.gen_range(-1.5..1.5),
                rng.gen_range(-1.5..1.5),
            ));
        }

        AmbientSet {
            critters,
            flock: if self.birds > 0 {
                Flock::spawn(self.birds, area, 40.0, rng)
            } else {
                Flock::default()
            },
            clouds: if self.clouds > 0 {
                CloudLayer::spawn(self.clouds, area, 30.0, rng)
            } else {
                CloudLayer::default()
            },
            petals: PetalField::new(self.petal_sources.clone()),
            roam: Some(area),
        }
    }
}

/// One themed phase of the game
///
/// Constructed once at startup as static configuration; the stage
/// controller only ever references it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageConfig {
    /// Stage identifier
    pub id: String,
    /// Display name for the HUD
    pub name: String,
    /// Scene shown while the stage is active
    pub scene: SceneId,
    /// Collectibles needed to finish the stage
    pub target: u32,
    /// Where collectibles (and dressing) may appear
    pub spawn_region: Rect,
    /// Where the player starts
    pub player_spawn: Vec2,
    /// Optional world-bounds clamp for the player
    pub bounds: Option<Rect>,
    /// Static circular obstacles
    pub obstacles: Vec<Circle>,
    /// Sky, fog, light and soundscape
    pub environment: EnvironmentProfile,
    /// What blocks the transition after the target is met
    pub gate: CompletionGate,
    /// Next stage, or `None` for the final stage
    pub successor: Option<String>,
    /// Scripted vignettes, triggered by collectible thresholds
    pub encounters: Vec<EncounterScript>,
    /// Scene dressing amounts
    pub dressing: DressingSpec,
}

impl StageConfig {
    /// Create a stage with sensible empty defaults
    pub fn new(id: impl Into<String>, scene: impl Into<SceneId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            scene: scene.into(),
            target: 1,
            spawn_region: Rect::centered_square(260.0),
            player_spawn: Vec2::ZERO,
            bounds: None,
            obstacles: Vec::new(),
            environment: EnvironmentProfile::default(),
            gate: CompletionGate::None,
            successor: None,
            encounters: Vec::new(),
            dressing: DressingSpec::default(),
        }
    }

    /// Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set collectible target
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    /// Set spawn region
    pub fn with_spawn_region(mut self, region: Rect) -> Self {
        self.spawn_region = region;
        self
    }

    /// Set player spawn point
    pub fn with_player_spawn(mut self, spawn: Vec2) -> Self {
        self.player_spawn = spawn;
        self
    }

    /// Clamp the player to a world rectangle
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Add a static obstacle
    pub fn with_obstacle(mut self, obstacle: Circle) -> Self {
        self.obstacles.push(obstacle);
        self
    }

    /// Set the environment profile
    pub fn with_environment(mut self, environment: EnvironmentProfile) -> Self {
        self.environment = environment;
        self
    }

    /// Set the completion gate
    pub fn with_gate(mut self, gate: CompletionGate) -> Self {
        self.gate = gate;
        self
    }

    /// Set the successor stage
    pub fn with_successor(mut self, successor: impl Into<String>) -> Self {
        self.successor = Some(successor.into());
        self
    }

    /// Queue an encounter
    pub fn with_encounter(mut self, script: EncounterScript) -> Self {
        self.encounters.push(script);
        self
    }

    /// Set the dressing amounts
    pub fn with_dressing(mut self, dressing: DressingSpec) -> Self {
        self.dressing = dressing;
        self
    }

    /// Name shown on the HUD (falls back to the id)
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// The whole game: an ordered set of stages starting at the first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    stages: Vec<StageConfig>,
    /// Modal shown when the final stage is finished
    completion: Modal,
}

impl Campaign {
    /// Build and validate a campaign.
    ///
    /// All configuration errors are fatal here, before the first frame.
    pub fn new(stages: Vec<StageConfig>) -> Result<Self, CampaignError> {
        if stages.is_empty() {
            return Err(CampaignError::Empty);
        }

        let mut ids = HashSet::new();
        for stage in &stages {
            if !ids.insert(stage.id.clone()) {
                return Err(CampaignError::DuplicateStage(stage.id.clone()));
            }
        }

        for stage in &stages {
            if let Some(successor) = &stage.successor {
                if !ids.contains(successor) {
                    return Err(CampaignError::UnknownSuccessor {
                        stage: stage.id.clone(),
                        successor: successor.clone(),
                    });
                }
            }
            if stage.target == 0 {
                return Err(CampaignError::ZeroTarget(stage.id.clone()));
            }
            if !stage.spawn_region.is_valid() {
                return Err(CampaignError::InvalidRegion(stage.id.clone()));
            }
            match &stage.gate {
                CompletionGate::Quiz(quiz) if !quiz.is_valid() => {
                    return Err(CampaignError::InvalidQuiz(stage.id.clone()));
                }
                CompletionGate::TimedShow { duration, .. } if *duration <= 0.0 => {
                    return Err(CampaignError::InvalidShow(stage.id.clone()));
                }
                _ => {}
            }
        }

        Ok(Self {
            stages,
            completion: Modal::new(
                "Complete",
                "The walk is over. You can replay anytime.",
                "Replay",
            ),
        })
    }

    /// Override the terminal modal
    pub fn with_completion(mut self, modal: Modal) -> Self {
        self.completion = modal;
        self
    }

    /// The stage the game begins (and replays) at
    pub fn first(&self) -> &StageConfig {
        &self.stages[0]
    }

    /// Look up a stage by id
    pub fn get(&self, id: &str) -> Option<&StageConfig> {
        self.stages.iter().find(|s| s.id == id)
    }

    /// All stages, in declaration order
    pub fn stages(&self) -> &[StageConfig] {
        &self.stages
    }

    /// The terminal modal
    pub fn completion(&self) -> &Modal {
        &self.completion
    }
}
