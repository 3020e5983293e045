//! Encounter scheduling

use crate::actor::NpcActor;
use crate::vignette::{Encounter, EncounterScript};
use rand::Rng;
use stroll_core::IdGenerator;
use stroll_math::Vec3;

/// Runs a stage's encounters in threshold order, one at a time.
///
/// When the collected count jumps past several thresholds in a single frame,
/// only the earliest idle encounter starts; the rest wait for it to finish
/// and are picked up on later frames.
#[derive(Debug, Default)]
pub struct EncounterScheduler {
    encounters: Vec<Encounter>,
    ids: IdGenerator,
}

impl EncounterScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue with a stage's scripts, sorted by ascending
    /// threshold. Any running vignette is discarded with its actors.
    pub fn configure(&mut self, mut scripts: Vec<EncounterScript>) {
        scripts.sort_by_key(|script| script.threshold);
        self.encounters = scripts.into_iter().map(Encounter::new).collect();
    }

    /// Advance the active vignette, or activate the next eligible one.
    ///
    /// Activation and update are mutually exclusive within a frame, so the
    /// frame an encounter finishes never also starts its successor.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        delta: f32,
        elapsed: f32,
        collected: u32,
        player_position: Vec3,
        rng: &mut R,
    ) {
        if let Some(active) = self.encounters.iter_mut().find(|e| e.is_active()) {
            active.update(delta, elapsed, player_position, rng);
            return;
        }

        if let Some(next) = self
            .encounters
            .iter_mut()
            .find(|e| e.is_idle() && e.script().threshold <= collected)
        {
            next.activate(self.ids.next(), player_position, rng);
        }
    }

    /// The currently running encounter, if any
    pub fn active(&self) -> Option<&Encounter> {
        self.encounters.iter().find(|e| e.is_active())
    }

    /// All live actors, for rendering
    pub fn actors(&self) -> impl Iterator<Item = &NpcActor> {
        self.encounters.iter().filter_map(|e| e.actor())
    }

    /// Whether every queued encounter has finished
    pub fn all_done(&self) -> bool {
        self.encounters.iter().all(|e| e.is_done())
    }

    /// The queued encounters, in threshold order
    pub fn encounters(&self) -> &[Encounter] {
        &self.encounters
    }
}
