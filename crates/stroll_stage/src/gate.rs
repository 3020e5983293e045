//! Stage completion gates

use serde::{Deserialize, Serialize};
use stroll_ambient::LanternSwarm;
use stroll_hud::QuizPrompt;

/// What stands between a met collectible target and the stage transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CompletionGate {
    /// Transition immediately
    None,
    /// Pause and ask a question; wrong answers retry without penalty
    Quiz(QuizPrompt),
    /// Run a timed effect (the lantern show); transition when the
    /// countdown lapses
    TimedShow {
        /// Seconds the show blocks the transition
        duration: f32,
        /// How many lanterns to launch
        lanterns: usize,
        /// Height at which lanterns despawn
        ceiling: f32,
    },
}

impl CompletionGate {
    /// A stock lantern show
    pub fn lantern_show(duration: f32) -> Self {
        Self::TimedShow {
            duration,
            lanterns: 40,
            ceiling: 60.0,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl Default for CompletionGate {
    fn default() -> Self {
        Self::None
    }
}

/// Runtime state of the gate currently in progress
///
/// Exactly one gate can be active, and it lives inside the stage
/// controller's `GateCheck` state.
#[derive(Debug)]
pub enum ActiveGate {
    /// Waiting for a quiz answer; gameplay is paused
    Quiz(QuizPrompt),
    /// Counting down a show; gameplay keeps running so the player can watch
    Show {
        remaining: f32,
        swarm: LanternSwarm,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_kinds() {
        assert!(CompletionGate::None.is_none());
        assert!(!CompletionGate::lantern_show(12.0).is_none());

        let quiz = CompletionGate::Quiz(QuizPrompt::new("?", vec!["a".into()], 0));
        assert!(!quiz.is_none());
    }
}
