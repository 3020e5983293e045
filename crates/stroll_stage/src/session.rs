//! The game session: one object owning all mutable game state

use crate::controller::{StageContext, StageController, StageState};
use crate::environment::EnvironmentProfile;
use crate::error::{CampaignError, Result};
use crate::stage::Campaign;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stroll_ambient::AmbientSet;
use stroll_audio::AudioSystem;
use stroll_collect::{CollectibleConfig, CollectibleManager};
use stroll_core::FrameClock;
use stroll_encounter::EncounterScheduler;
use stroll_hud::Presenter;
use stroll_input::{CaptureTracker, GameKey, InputState};
use stroll_math::Vec2;
use stroll_player::{CameraPose, CameraRig, MovementConfig, PlayerController, PlayerState};
use stroll_world::{SceneConfig, SceneRegistry, WorldBuilder};

/// Owns every mutable piece of the running game.
///
/// There are no module-level globals anywhere in the engine: the render
/// loop holds one `GameSession`, forwards platform events into it, and
/// calls [`frame`] once per rendered frame. The session is deterministic
/// for a given seed and event sequence.
///
/// [`frame`]: GameSession::frame
pub struct GameSession<W: WorldBuilder, P: Presenter> {
    clock: FrameClock,
    input: InputState,
    capture: CaptureTracker,
    player: PlayerState,
    player_controller: PlayerController,
    camera: CameraRig,
    collectibles: CollectibleManager,
    encounters: EncounterScheduler,
    ambient: AmbientSet,
    scenes: SceneRegistry,
    builder: W,
    audio: AudioSystem,
    presenter: P,
    rng: StdRng,
    controller: StageController,
}

/// Builds a `StageContext` from the session's fields.
///
/// A macro rather than a method so the borrow of `self.controller` stays
/// disjoint from the borrows of the other fields.
macro_rules! stage_ctx {
    ($session:expr, $input:expr) => {
        StageContext {
            input: $input,
            player: &mut $session.player,
            player_controller: &$session.player_controller,
            camera: &$session.camera,
            collectibles: &mut $session.collectibles,
            encounters: &mut $session.encounters,
            ambient: &mut $session.ambient,
            scenes: &mut $session.scenes,
            builder: &mut $session.builder,
            audio: &mut $session.audio,
            presenter: &mut $session.presenter,
            rng: &mut $session.rng,
        }
    };
}

impl<W: WorldBuilder, P: Presenter> GameSession<W, P> {
    /// Assemble a session.
    ///
    /// Fails fast if any stage references a scene that is not part of
    /// `scene_configs`.
    pub fn new(
        campaign: Campaign,
        scene_configs: Vec<SceneConfig>,
        builder: W,
        presenter: P,
        audio: AudioSystem,
        seed: u64,
    ) -> Result<Self> {
        let mut scenes = SceneRegistry::new();
        for config in scene_configs {
            scenes.register(config);
        }
        for stage in campaign.stages() {
            if !scenes.contains(&stage.scene) {
                return Err(CampaignError::UnknownScene {
                    stage: stage.id.clone(),
                    scene: stage.scene.clone(),
                }
                .into());
            }
        }

        let movement = MovementConfig::default();
        let player = PlayerState::standing_at(campaign.first().player_spawn, &movement);

        Ok(Self {
            clock: FrameClock::new(),
            input: InputState::new(),
            capture: CaptureTracker::new(),
            player,
            player_controller: PlayerController::new(movement),
            camera: CameraRig::new(),
            collectibles: CollectibleManager::new(CollectibleConfig::default()),
            encounters: EncounterScheduler::new(),
            ambient: AmbientSet::new(),
            scenes,
            builder,
            audio,
            presenter,
            rng: StdRng::seed_from_u64(seed),
            controller: StageController::new(campaign),
        })
    }

    /// Enter the first stage. Gameplay still waits for pointer capture.
    pub fn start(&mut self) -> Result<()> {
        let first = self.controller.campaign().first().id.clone();
        let input = self.input.snapshot();
        let mut ctx = stage_ctx!(self, input);
        self.controller.start_stage(&first, &mut ctx)
    }

    // ---- platform event entry points ----

    /// Key pressed
    pub fn key_down(&mut self, key: GameKey) {
        self.input.press(key);
    }

    /// Key released
    pub fn key_up(&mut self, key: GameKey) {
        self.input.release(key);
    }

    /// Pointer moved while captured
    pub fn pointer_delta(&mut self, delta: Vec2) {
        self.input.add_look_delta(delta);
    }

    /// Pointer capture gained or lost
    pub fn set_captured(&mut self, captured: bool) {
        self.capture.set_captured(captured);
    }

    // ---- frame loop ----

    /// Run one frame of the simulation with the raw wall-clock delta
    pub fn frame(&mut self, raw_delta: f32) -> Result<()> {
        if self.capture.take_lost() {
            // Key-ups are not delivered while unfocused
            self.input.clear_held();
        }
        self.capture.take_gained();
        self.controller.set_captured(self.capture.is_captured());

        let delta = self.clock.advance(raw_delta);
        let elapsed = self.clock.elapsed();
        let input = self.input.snapshot();
        let mut ctx = stage_ctx!(self, input);
        self.controller.tick(delta, elapsed, &mut ctx)
    }

    /// Answer an open quiz gate. Works while uncaptured, since the pointer
    /// is released whenever a modal is up.
    pub fn answer_quiz(&mut self, choice: usize) -> Result<bool> {
        let input = self.input.snapshot();
        let mut ctx = stage_ctx!(self, input);
        self.controller.answer_quiz(choice, &mut ctx)
    }

    /// Restart from the first stage after the campaign is complete
    pub fn replay(&mut self) -> Result<()> {
        let input = self.input.snapshot();
        let mut ctx = stage_ctx!(self, input);
        self.controller.replay(&mut ctx)
    }

    // ---- read access ----

    pub fn state(&self) -> StageState {
        self.controller.state()
    }

    pub fn current_stage(&self) -> &str {
        self.controller.current_stage()
    }

    pub fn collected(&self) -> u32 {
        self.collectibles.collected()
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn camera_pose(&self) -> Option<CameraPose> {
        self.controller.camera_pose()
    }

    pub fn controller(&self) -> &StageController {
        &self.controller
    }

    /// Environment descriptor of the active stage, for the renderer
    pub fn environment(&self) -> Option<&EnvironmentProfile> {
        self.controller
            .campaign()
            .get(self.controller.current_stage())
            .map(|stage| &stage.environment)
    }

    pub fn collectibles(&self) -> &CollectibleManager {
        &self.collectibles
    }

    pub fn encounters(&self) -> &EncounterScheduler {
        &self.encounters
    }

    pub fn ambient(&self) -> &AmbientSet {
        &self.ambient
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn builder(&self) -> &W {
        &self.builder
    }

    pub fn audio(&self) -> &AudioSystem {
        &self.audio
    }

    /// Teleport the player, for scripted sequences and tests
    pub fn warp_player(&mut self, position: stroll_math::Vec3) {
        self.player.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentProfile;
    use crate::gate::{ActiveGate, CompletionGate};
    use crate::stage::StageConfig;
    use stroll_hud::{MemoryPresenter, QuizPrompt};
    use stroll_math::{Rect, Vec3};
    use stroll_world::MemoryWorldBuilder;

    type TestSession = GameSession<MemoryWorldBuilder, MemoryPresenter>;

    const FRAME: f32 = 0.016;

    fn two_stage_campaign(gate: CompletionGate) -> Campaign {
        Campaign::new(vec![
            StageConfig::new("forest", "forest_scene")
                .with_name("Forest")
                .with_target(3)
                .with_spawn_region(Rect::centered_square(40.0))
                .with_gate(gate)
                .with_successor("beach"),
            StageConfig::new("beach", "beach_scene")
                .with_name("Beach")
                .with_target(4)
                .with_spawn_region(Rect::centered_square(40.0))
                .with_environment(
                    EnvironmentProfile::new().with_sky([0.9, 0.85, 0.7]),
                ),
        ])
        .unwrap()
    }

    fn session(campaign: Campaign) -> TestSession {
        let scenes = vec![
            SceneConfig::new("forest_scene"),
            SceneConfig::new("beach_scene"),
        ];
        let mut session = GameSession::new(
            campaign,
            scenes,
            MemoryWorldBuilder::new(),
            MemoryPresenter::new(),
            AudioSystem::headless(),
            7,
        )
        .unwrap();
        session.start().unwrap();
        session.set_captured(true);
        session
    }

    /// Walk the player onto every collectible of the current stage, one
    /// frame each, stopping at the stage boundary
    fn hoover_collectibles(session: &mut TestSession) {
        let stage = session.current_stage().to_string();
        while session.current_stage() == stage {
            let Some(item) = session.collectibles().items().first() else {
                return;
            };
            let base = item.base;
            session.warp_player(Vec3::new(base.x, base.y, base.z));
            session.frame(FRAME).unwrap();
        }
    }

    #[test]
    fn test_unknown_scene_fails_fast() {
        let campaign = two_stage_campaign(CompletionGate::None);
        let result = GameSession::new(
            campaign,
            vec![SceneConfig::new("forest_scene")], // beach_scene missing
            MemoryWorldBuilder::new(),
            MemoryPresenter::new(),
            AudioSystem::headless(),
            1,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_start_shows_only_first_scene() {
        let session = session(two_stage_campaign(CompletionGate::None));
        assert_eq!(session.state(), StageState::Active);
        assert_eq!(
            session.builder().visible_scenes(),
            vec!["forest_scene".to_string()]
        );
        assert_eq!(session.presenter().hud_text(), "Forest | 0/3 | 0:00");
    }

    #[test]
    fn test_tick_is_noop_without_capture() {
        let mut session = session(two_stage_campaign(CompletionGate::None));
        session.set_captured(false);

        let before = session.player().position;
        session.key_down(GameKey::Forward);
        for _ in 0..30 {
            session.frame(FRAME).unwrap();
        }
        assert_eq!(session.player().position, before);
        assert_eq!(session.controller().stage_time(), 0.0);

        // Capture returns, gameplay resumes
        session.set_captured(true);
        session.key_down(GameKey::Forward);
        session.frame(FRAME).unwrap();
        assert!(session.player().position != before);
    }

    #[test]
    fn test_capture_loss_drops_held_keys() {
        let mut session = session(two_stage_campaign(CompletionGate::None));
        session.key_down(GameKey::Forward);
        session.frame(FRAME).unwrap();

        session.set_captured(false);
        session.frame(FRAME).unwrap();
        session.set_captured(true);

        let before = session.player().position;
        session.frame(FRAME).unwrap();
        // The old key-down is gone; the player stands still
        assert_eq!(session.player().position.x, before.x);
        assert_eq!(session.player().position.z, before.z);
    }

    #[test]
    fn test_ungated_stage_transitions_once() {
        let mut session = session(two_stage_campaign(CompletionGate::None));
        hoover_collectibles(&mut session);

        assert_eq!(session.state(), StageState::Active);
        assert_eq!(session.current_stage(), "beach");
        assert_eq!(session.controller().history(), &["forest", "beach"]);
        assert_eq!(session.presenter().hud_text(), "Beach | 0/4 | 0:00");
        assert_eq!(
            session.builder().visible_scenes(),
            vec!["beach_scene".to_string()]
        );
        assert_eq!(session.environment().unwrap().sky_color, [0.9, 0.85, 0.7]);

        // Extra ticks after the crossing must not re-transition
        for _ in 0..20 {
            session.frame(FRAME).unwrap();
        }
        assert_eq!(session.controller().history(), &["forest", "beach"]);
    }

    #[test]
    fn test_completing_final_stage_ends_campaign() {
        let mut session = session(two_stage_campaign(CompletionGate::None));
        hoover_collectibles(&mut session); // forest -> beach
        hoover_collectibles(&mut session); // beach -> complete

        assert_eq!(session.state(), StageState::Complete);
        let modal = session.presenter().open_modal().unwrap();
        assert_eq!(modal.action_label, "Replay");
        assert_eq!(session.collectibles().remaining(), 0);
        assert!(session.ambient().critters.is_empty());

        // Ticks in Complete do nothing
        session.frame(FRAME).unwrap();
        assert_eq!(session.state(), StageState::Complete);
    }

    #[test]
    fn test_replay_restarts_first_stage() {
        let mut session = session(two_stage_campaign(CompletionGate::None));
        hoover_collectibles(&mut session);
        hoover_collectibles(&mut session);
        assert_eq!(session.state(), StageState::Complete);

        session.replay().unwrap();
        assert_eq!(session.state(), StageState::Active);
        assert_eq!(session.current_stage(), "forest");
        assert_eq!(session.collected(), 0);
        assert_eq!(session.presenter().hud_text(), "Forest | 0/3 | 0:00");
    }

    #[test]
    fn test_quiz_gate_blocks_until_correct() {
        let quiz = QuizPrompt::new("2 + 2?", vec!["3".into(), "4".into()], 1);
        let mut session = session(two_stage_campaign(CompletionGate::Quiz(quiz)));
        hoover_collectibles(&mut session);

        assert_eq!(session.state(), StageState::GateCheck);
        assert!(session.presenter().open_quiz().is_some());

        // Gameplay is held while the quiz is up
        let time_before = session.controller().stage_time();
        session.frame(FRAME).unwrap();
        assert_eq!(session.controller().stage_time(), time_before);

        // Wrong answer: no penalty, quiz stays, stage unchanged
        assert!(!session.answer_quiz(0).unwrap());
        assert_eq!(session.current_stage(), "forest");
        assert!(session.presenter().open_quiz().is_some());

        // Correct answer: exactly one transition
        assert!(session.answer_quiz(1).unwrap());
        assert_eq!(session.current_stage(), "beach");
        assert_eq!(session.state(), StageState::Active);
        assert!(session.presenter().open_quiz().is_none());

        // A late duplicate answer is ignored
        assert!(!session.answer_quiz(1).unwrap());
        assert_eq!(session.controller().history(), &["forest", "beach"]);
    }

    #[test]
    fn test_timed_show_gates_transition() {
        let gate = CompletionGate::TimedShow {
            duration: 1.0,
            lanterns: 12,
            ceiling: 60.0,
        };
        let mut session = session(two_stage_campaign(gate));
        hoover_collectibles(&mut session);

        assert_eq!(session.state(), StageState::GateCheck);
        match session.controller().active_gate() {
            Some(ActiveGate::Show { swarm, .. }) => assert_eq!(swarm.lanterns().len(), 12),
            other => panic!("expected a running show, got {:?}", other),
        }

        // Gameplay keeps running during the show
        let time_before = session.controller().stage_time();
        session.frame(FRAME).unwrap();
        assert!(session.controller().stage_time() > time_before);
        assert_eq!(session.current_stage(), "forest");

        // Let the countdown lapse
        for _ in 0..80 {
            session.frame(FRAME).unwrap();
        }
        assert_eq!(session.current_stage(), "beach");
        assert_eq!(session.state(), StageState::Active);
        assert_eq!(session.controller().history(), &["forest", "beach"]);
    }

    #[test]
    fn test_stage_time_excludes_paused_spans() {
        let mut session = session(two_stage_campaign(CompletionGate::None));
        for _ in 0..10 {
            session.frame(FRAME).unwrap();
        }
        let played = session.controller().stage_time();

        session.set_captured(false);
        for _ in 0..100 {
            session.frame(FRAME).unwrap();
        }
        assert_eq!(session.controller().stage_time(), played);
    }

    #[test]
    fn test_ambient_audio_follows_environment() {
        use stroll_audio::AmbientProfile;

        let campaign = Campaign::new(vec![StageConfig::new("forest", "forest_scene")
            .with_target(1)
            .with_environment(EnvironmentProfile::new().with_ambient_audio("birdsong"))])
        .unwrap();

        let mut audio = AudioSystem::headless();
        audio.register_profile(AmbientProfile::new("birdsong", "audio/birdsong.ogg"));

        let mut session = GameSession::new(
            campaign,
            vec![SceneConfig::new("forest_scene")],
            MemoryWorldBuilder::new(),
            MemoryPresenter::new(),
            audio,
            3,
        )
        .unwrap();
        session.start().unwrap();

        assert_eq!(session.audio().current(), Some("birdsong"));
    }
}
