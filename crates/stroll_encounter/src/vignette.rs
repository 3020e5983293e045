//! Per-encounter state machine

use crate::actor::NpcActor;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use stroll_core::Id;
use stroll_math::{consts::TAU, Vec3};

/// What the actor does once it reaches the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VignetteAction {
    /// A friendly greeting (bow, tail swish)
    Greet,
    /// Handing the player a small gift
    Give,
}

/// Phase of a vignette
///
/// `Idle` before the trigger threshold is met; `Done` is terminal and the
/// encounter never re-triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    Idle,
    Approaching,
    Greeting,
    Giving,
    PerformingAction,
    Leaving,
    Done,
}

/// Static description of one encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterScript {
    /// Script identifier, for logs
    pub id: String,
    /// Collected count at which the vignette starts
    pub threshold: u32,
    /// Actor kind handed to the world builder
    pub actor_kind: String,
    /// Mid-vignette action
    pub action: VignetteAction,
    /// Walking speed while approaching
    pub approach_speed: f32,
    /// Walking speed while leaving
    pub leave_speed: f32,
    /// How far from the player the actor appears
    pub spawn_distance: f32,
    /// Distance at which the approach counts as arrived
    pub proximity: f32,
    /// Seconds spent greeting/giving
    pub action_duration: f32,
    /// Seconds spent on the closing performance
    pub perform_duration: f32,
    /// How far away the actor walks before despawning
    pub leave_distance: f32,
}

impl EncounterScript {
    /// Create a script with the stock pacing
    pub fn new(id: impl Into<String>, threshold: u32, actor_kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            threshold,
            actor_kind: actor_kind.into(),
            action: VignetteAction::Greet,
            approach_speed: 2.1,
            leave_speed: 1.6,
            spawn_distance: 18.0,
            proximity: 1.6,
            action_duration: 2.5,
            perform_duration: 3.0,
            leave_distance: 30.0,
        }
    }

    /// Set the mid-vignette action
    pub fn with_action(mut self, action: VignetteAction) -> Self {
        self.action = action;
        self
    }

    /// Set approach speed
    pub fn with_approach_speed(mut self, speed: f32) -> Self {
        self.approach_speed = speed.max(0.0);
        self
    }

    /// Set the action and performance durations
    pub fn with_durations(mut self, action: f32, perform: f32) -> Self {
        self.action_duration = action.max(0.0);
        self.perform_duration = perform.max(0.0);
        self
    }
}

/// A queued vignette and its runtime state
#[derive(Debug)]
pub struct Encounter {
    script: EncounterScript,
    phase: EncounterPhase,
    timer: f32,
    actor: Option<NpcActor>,
    leave_target: Option<Vec3>,
}

impl Encounter {
    pub fn new(script: EncounterScript) -> Self {
        Self {
            script,
            phase: EncounterPhase::Idle,
            timer: 0.0,
            actor: None,
            leave_target: None,
        }
    }

    pub fn script(&self) -> &EncounterScript {
        &self.script
    }

    pub fn phase(&self) -> EncounterPhase {
        self.phase
    }

    /// The vignette's actor while it is on stage
    pub fn actor(&self) -> Option<&NpcActor> {
        self.actor.as_ref()
    }

    /// Idle and waiting for its threshold
    pub fn is_idle(&self) -> bool {
        self.phase == EncounterPhase::Idle
    }

    /// Somewhere between activation and `Done`
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, EncounterPhase::Idle | EncounterPhase::Done)
    }

    pub fn is_done(&self) -> bool {
        self.phase == EncounterPhase::Done
    }

    /// Begin the vignette: spawn the actor a fixed distance from the player
    /// in a random direction and start approaching
    pub fn activate<R: Rng + ?Sized>(&mut self, actor_id: Id, player_position: Vec3, rng: &mut R) {
        let angle = rng.gen_range(0.0..TAU);
        // Actors live on the ground plane regardless of the player's height
        let spawn = Vec3::new(
            player_position.x + angle.sin() * self.script.spawn_distance,
            0.0,
            player_position.z + angle.cos() * self.script.spawn_distance,
        );

        self.actor = Some(NpcActor::new(actor_id, self.script.actor_kind.clone(), spawn));
        self.set_phase(EncounterPhase::Approaching);
    }

    /// Advance the vignette by one frame
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        delta: f32,
        elapsed: f32,
        player_position: Vec3,
        rng: &mut R,
    ) {
        // The actor is moved out for the frame so phase changes can borrow
        // the rest of the encounter freely.
        let Some(mut actor) = self.actor.take() else {
            return;
        };
        actor.animate(elapsed);
        let mut despawn = false;

        match self.phase {
            EncounterPhase::Approaching => {
                let remaining =
                    actor.step_toward(player_position, self.script.approach_speed, delta);
                if remaining <= self.script.proximity {
                    self.timer = self.script.action_duration;
                    let next = match self.script.action {
                        VignetteAction::Greet => EncounterPhase::Greeting,
                        VignetteAction::Give => EncounterPhase::Giving,
                    };
                    self.set_phase(next);
                }
            }
            EncounterPhase::Greeting | EncounterPhase::Giving => {
                self.timer -= delta;
                if self.timer <= 0.0 {
                    self.timer = self.script.perform_duration;
                    self.set_phase(EncounterPhase::PerformingAction);
                }
            }
            EncounterPhase::PerformingAction => {
                self.timer -= delta;
                if self.timer <= 0.0 {
                    let angle = rng.gen_range(0.0..TAU);
                    self.leave_target = Some(
                        player_position
                            + Vec3::new(
                                angle.sin() * self.script.leave_distance,
                                0.0,
                                angle.cos() * self.script.leave_distance,
                            ),
                    );
                    self.set_phase(EncounterPhase::Leaving);
                }
            }
            EncounterPhase::Leaving => {
                let target = self.leave_target.unwrap_or(actor.position);
                let remaining = actor.step_toward(target, self.script.leave_speed, delta);
                if remaining <= 0.1 {
                    despawn = true;
                    self.set_phase(EncounterPhase::Done);
                }
            }
            EncounterPhase::Idle | EncounterPhase::Done => {}
        }

        if !despawn {
            self.actor = Some(actor);
        }
    }

    fn set_phase(&mut self, phase: EncounterPhase) {
        debug!("encounter {}: {:?} -> {:?}", self.script.id, self.phase, phase);
        self.phase = phase;
    }
}
