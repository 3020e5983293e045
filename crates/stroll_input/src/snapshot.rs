//! Per-frame input snapshots

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stroll_math::Vec2;

/// Logical game actions, already mapped from physical key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKey {
    Forward,
    Back,
    Left,
    Right,
    Jump,
    ToggleView,
}

/// Immutable view of the input for one tick
///
/// Movement and jump are level-triggered (held). The view toggle is
/// edge-triggered, and the look delta is the pointer motion accumulated
/// since the previous snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub view_toggled: bool,
    pub look_delta: Vec2,
}

impl InputSnapshot {
    /// Whether any movement key is held
    pub fn has_movement(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Accumulates platform input events between ticks
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<GameKey>,
    view_toggle_pending: bool,
    look_delta: Vec2,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press
    pub fn press(&mut self, key: GameKey) {
        // Key repeat must not re-fire edge-triggered actions
        if self.held.insert(key) && key == GameKey::ToggleView {
            self.view_toggle_pending = true;
        }
    }

    /// Record a key release
    pub fn release(&mut self, key: GameKey) {
        self.held.remove(&key);
    }

    /// Accumulate pointer movement
    pub fn add_look_delta(&mut self, delta: Vec2) {
        self.look_delta += delta;
    }

    /// Drop all held keys, e.g. when pointer capture is lost
    ///
    /// Key-up events are not delivered while unfocused, so a key held across
    /// a focus loss would otherwise stay "down" forever.
    pub fn clear_held(&mut self) {
        self.held.clear();
        self.look_delta = Vec2::ZERO;
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        self.held.contains(&key)
    }

    /// Produce the snapshot for this tick, draining edge triggers and
    /// accumulated pointer motion
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            forward: self.is_held(GameKey::Forward),
            back: self.is_held(GameKey::Back),
            left: self.is_held(GameKey::Left),
            right: self.is_held(GameKey::Right),
            jump: self.is_held(GameKey::Jump),
            view_toggled: self.view_toggle_pending,
            look_delta: self.look_delta,
        };
        self.view_toggle_pending = false;
        self.look_delta = Vec2::ZERO;
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_survive_snapshots() {
        let mut input = InputState::new();
        input.press(GameKey::Forward);

        assert!(input.snapshot().forward);
        assert!(input.snapshot().forward);

        input.release(GameKey::Forward);
        assert!(!input.snapshot().forward);
    }

    #[test]
    fn test_view_toggle_fires_once_per_press() {
        let mut input = InputState::new();
        input.press(GameKey::ToggleView);
        // Key repeat while held
        input.press(GameKey::ToggleView);

        assert!(input.snapshot().view_toggled);
        assert!(!input.snapshot().view_toggled);

        input.release(GameKey::ToggleView);
        input.press(GameKey::ToggleView);
        assert!(input.snapshot().view_toggled);
    }

    #[test]
    fn test_look_delta_is_drained() {
        let mut input = InputState::new();
        input.add_look_delta(Vec2::new(2.0, 1.0));
        input.add_look_delta(Vec2::new(1.0, -1.0));

        assert_eq!(input.snapshot().look_delta, Vec2::new(3.0, 0.0));
        assert_eq!(input.snapshot().look_delta, Vec2::ZERO);
    }

    #[test]
    fn test_clear_held() {
        let mut input = InputState::new();
        input.press(GameKey::Jump);
        input.add_look_delta(Vec2::ONE);
        input.clear_held();

        let snapshot = input.snapshot();
        assert!(!snapshot.jump);
        assert_eq!(snapshot.look_delta, Vec2::ZERO);
    }
}
