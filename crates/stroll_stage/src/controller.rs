//! The stage controller state machine

use crate::error::{Result, StageError};
use crate::gate::{ActiveGate, CompletionGate};
use crate::stage::Campaign;
use log::{debug, info};
use rand::Rng;
use stroll_ambient::{AmbientSet, LanternSwarm};
use stroll_audio::AudioSystem;
use stroll_collect::CollectibleManager;
use stroll_encounter::EncounterScheduler;
use stroll_hud::{HudModel, Presenter};
use stroll_input::InputSnapshot;
use stroll_player::{CameraPose, CameraRig, PlayerController, PlayerState};
use stroll_world::{SceneRegistry, WorldBuilder};

/// Lifecycle of the stage machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    /// Before the first `start_stage`
    Idle,
    /// Stage running, input live
    Active,
    /// Target met, completion gate in progress
    GateCheck,
    /// Environment swap in flight
    Transitioning,
    /// Final stage finished; only `replay` leaves this state
    Complete,
}

/// Everything the controller orchestrates during one call.
///
/// The session owns these components and lends them per call; the
/// controller owns only the campaign and the progression state, so the
/// borrow of each collaborator is explicit and short-lived.
pub struct StageContext<'a, W: WorldBuilder, P: Presenter, R: Rng> {
    pub input: InputSnapshot,
    pub player: &'a mut PlayerState,
    pub player_controller: &'a PlayerController,
    pub camera: &'a CameraRig,
    pub collectibles: &'a mut CollectibleManager,
    pub encounters: &'a mut EncounterScheduler,
    pub ambient: &'a mut AmbientSet,
    pub scenes: &'a mut SceneRegistry,
    pub builder: &'a mut W,
    pub audio: &'a mut AudioSystem,
    pub presenter: &'a mut P,
    pub rng: &'a mut R,
}

/// The core of the engine: owns which stage is live and how it advances.
///
/// One instance per session. All transitions go through [`start_stage`];
/// the per-frame entry point is [`tick`].
///
/// [`start_stage`]: StageController::start_stage
/// [`tick`]: StageController::tick
#[derive(Debug)]
pub struct StageController {
    campaign: Campaign,
    current: String,
    state: StageState,
    captured: bool,
    stage_time: f32,
    hud: HudModel,
    gate: Option<ActiveGate>,
    /// Set when the completion handler fires, cleared only by `start_stage`.
    /// Guarantees at most one transition per threshold crossing even if
    /// `tick` re-runs before the transition settles.
    transition_locked: bool,
    camera_pose: Option<CameraPose>,
    /// Stage ids in the order they were started
    history: Vec<String>,
}

impl StageController {
    /// Wrap a validated campaign. The machine starts `Idle` and paused.
    pub fn new(campaign: Campaign) -> Self {
        let current = campaign.first().id.clone();
        Self {
            campaign,
            current,
            state: StageState::Idle,
            captured: false,
            stage_time: 0.0,
            hud: HudModel::default(),
            gate: None,
            transition_locked: false,
            camera_pose: None,
            history: Vec::new(),
        }
    }

    pub fn campaign(&self) -> &Campaign {
        &self.campaign
    }

    pub fn state(&self) -> StageState {
        self.state
    }

    /// Id of the stage the controller currently points at
    pub fn current_stage(&self) -> &str {
        &self.current
    }

    /// Seconds of unpaused play in the current stage
    pub fn stage_time(&self) -> f32 {
        self.stage_time
    }

    pub fn hud(&self) -> &HudModel {
        &self.hud
    }

    /// The gate in progress, if the machine is in `GateCheck`
    pub fn active_gate(&self) -> Option<&ActiveGate> {
        self.gate.as_ref()
    }

    /// Camera pose computed on the last gameplay tick
    pub fn camera_pose(&self) -> Option<CameraPose> {
        self.camera_pose
    }

    /// Stage ids in the order they were started
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Feed the pointer-capture status. Losing capture pauses gameplay
    /// immediately; regaining it resumes on the next tick.
    pub fn set_captured(&mut self, captured: bool) {
        if self.captured && !captured {
            debug!("input capture lost, gameplay paused");
        }
        self.captured = captured;
    }

    /// Whether `tick` will advance gameplay right now
    pub fn is_running(&self) -> bool {
        self.captured
            && matches!(self.state, StageState::Active | StageState::GateCheck)
            && !matches!(self.gate, Some(ActiveGate::Quiz(_)))
    }

    /// Enter a stage: repopulate collectibles, re-arm encounters, show the
    /// scene, apply the environment, reset the player, clear the lock.
    pub fn start_stage<W, P, R>(
        &mut self,
        stage_id: &str,
        ctx: &mut StageContext<'_, W, P, R>,
    ) -> Result<()>
    where
        W: WorldBuilder,
        P: Presenter,
        R: Rng,
    {
        let stage = self
            .campaign
            .get(stage_id)
            .ok_or_else(|| StageError::UnknownStage(stage_id.to_string()))?
            .clone();

        ctx.collectibles
            .populate(&stage.spawn_region, stage.target, ctx.rng);
        ctx.encounters.configure(stage.encounters.clone());
        ctx.scenes.show_only(&stage.scene, ctx.builder)?;
        *ctx.ambient = stage.dressing.build(stage.spawn_region, ctx.rng);

        match &stage.environment.ambient_audio {
            Some(profile) => ctx.audio.play_ambient(profile),
            None => ctx.audio.stop_ambient(),
        }

        ctx.player
            .reset(stage.player_spawn, ctx.player_controller.config());

        self.hud.reset(stage.display_name(), stage.target);
        ctx.presenter.hide_modal();
        ctx.presenter.set_hud_text(&self.hud.status_line());

        self.current = stage.id.clone();
        self.stage_time = 0.0;
        self.gate = None;
        self.transition_locked = false;
        self.state = StageState::Active;
        self.history.push(stage.id.clone());

        info!("stage started: {} (target {})", stage.id, stage.target);
        Ok(())
    }

    /// Advance one frame.
    ///
    /// No-op while paused: capture lost, no stage running, or a quiz open.
    /// Otherwise updates, in order: player, camera, collectibles,
    /// encounters, ambient dressing, HUD - then evaluates the completion
    /// predicate and the gate countdown.
    pub fn tick<W, P, R>(
        &mut self,
        delta: f32,
        elapsed: f32,
        ctx: &mut StageContext<'_, W, P, R>,
    ) -> Result<()>
    where
        W: WorldBuilder,
        P: Presenter,
        R: Rng,
    {
        if !self.is_running() {
            return Ok(());
        }

        {
            let Some(stage) = self.campaign.get(&self.current) else {
                return Err(StageError::UnknownStage(self.current.clone()));
            };

            // Player movement resolves first; every later distance test
            // reads the settled position.
            ctx.player_controller
                .apply_look(ctx.player, ctx.input.look_delta);
            ctx.player_controller.update(
                ctx.player,
                &ctx.input,
                delta,
                stage.bounds.as_ref(),
                &stage.obstacles,
            );
            self.camera_pose = Some(ctx.camera.pose(ctx.player));

            ctx.collectibles.update(elapsed, ctx.player.position);
            ctx.encounters.update(
                delta,
                elapsed,
                ctx.collectibles.collected(),
                ctx.player.position,
                ctx.rng,
            );
            ctx.ambient
                .update(delta, elapsed, ctx.player.position, &stage.obstacles, ctx.rng);

            self.stage_time += delta;
            self.hud.collected = ctx.collectibles.collected();
            self.hud.stage_time = self.stage_time;
            ctx.presenter.set_hud_text(&self.hud.status_line());
        }

        if self.state == StageState::GateCheck {
            let mut show_finished = false;
            if let Some(ActiveGate::Show { remaining, swarm }) = self.gate.as_mut() {
                *remaining -= delta;
                swarm.update(delta, elapsed);
                show_finished = *remaining <= 0.0;
            }
            if show_finished {
                info!("timed show finished");
                self.advance(ctx)?;
            }
            return Ok(());
        }

        let target = self
            .campaign
            .get(&self.current)
            .map(|s| s.target)
            .unwrap_or(u32::MAX);
        if !self.transition_locked && ctx.collectibles.collected() >= target {
            self.enter_gate_check(ctx)?;
        }

        Ok(())
    }

    /// Target met: lock and run the stage's gate
    fn enter_gate_check<W, P, R>(&mut self, ctx: &mut StageContext<'_, W, P, R>) -> Result<()>
    where
        W: WorldBuilder,
        P: Presenter,
        R: Rng,
    {
        self.transition_locked = true;
        self.state = StageState::GateCheck;

        let gate = self
            .campaign
            .get(&self.current)
            .map(|s| s.gate.clone())
            .unwrap_or(CompletionGate::None);

        match gate {
            CompletionGate::None => self.advance(ctx),
            CompletionGate::Quiz(quiz) => {
                info!("stage {} gated on quiz", self.current);
                ctx.presenter.show_quiz(&quiz);
                self.gate = Some(ActiveGate::Quiz(quiz));
                Ok(())
            }
            CompletionGate::TimedShow {
                duration,
                lanterns,
                ceiling,
            } => {
                info!("stage {} gated on a {}s show", self.current, duration);
                let area = self
                    .campaign
                    .get(&self.current)
                    .map(|s| s.spawn_region)
                    .unwrap_or_else(|| stroll_math::Rect::centered_square(40.0));
                self.gate = Some(ActiveGate::Show {
                    remaining: duration,
                    swarm: LanternSwarm::launch(lanterns, area, ceiling, ctx.rng),
                });
                Ok(())
            }
        }
    }

    /// Answer an open quiz gate.
    ///
    /// Wrong answers keep the quiz open with no penalty and return `false`;
    /// the correct answer transitions exactly once and returns `true`.
    pub fn answer_quiz<W, P, R>(
        &mut self,
        choice: usize,
        ctx: &mut StageContext<'_, W, P, R>,
    ) -> Result<bool>
    where
        W: WorldBuilder,
        P: Presenter,
        R: Rng,
    {
        let Some(ActiveGate::Quiz(quiz)) = &self.gate else {
            return Ok(false);
        };

        if quiz.check(choice) {
            info!("quiz passed");
            self.advance(ctx)?;
            Ok(true)
        } else {
            debug!("quiz answer {} wrong, retrying", choice);
            let quiz = quiz.clone();
            ctx.presenter.show_quiz(&quiz);
            Ok(false)
        }
    }

    /// Gate cleared: move to the successor, or finish the campaign
    fn advance<W, P, R>(&mut self, ctx: &mut StageContext<'_, W, P, R>) -> Result<()>
    where
        W: WorldBuilder,
        P: Presenter,
        R: Rng,
    {
        self.state = StageState::Transitioning;
        self.gate = None;
        ctx.presenter.hide_modal();

        let successor = self
            .campaign
            .get(&self.current)
            .and_then(|s| s.successor.clone());

        match successor {
            Some(next) => self.start_stage(&next, ctx),
            None => {
                // Total teardown: every stage-scoped transient goes away
                ctx.collectibles.clear();
                ctx.encounters.configure(Vec::new());
                *ctx.ambient = AmbientSet::new();
                self.state = StageState::Complete;
                let modal = self.campaign.completion().clone();
                ctx.presenter.show_modal(&modal);
                info!("campaign complete");
                Ok(())
            }
        }
    }

    /// From the terminal screen, restart at the first stage
    pub fn replay<W, P, R>(&mut self, ctx: &mut StageContext<'_, W, P, R>) -> Result<()>
    where
        W: WorldBuilder,
        P: Presenter,
        R: Rng,
    {
        if self.state != StageState::Complete {
            return Ok(());
        }
        let first = self.campaign.first().id.clone();
        info!("replaying from {}", first);
        self.start_stage(&first, ctx)
    }
}
