//! Pointer-capture state machine

use serde::{Deserialize, Serialize};

/// Whether gameplay input is currently being captured
///
/// Capture is lost when the platform releases pointer lock or the window
/// loses focus. Gameplay must never advance while input is not captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureState {
    Captured,
    NotCaptured,
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::NotCaptured
    }
}

/// Tracks capture transitions so the stage controller can poll them
#[derive(Debug, Default)]
pub struct CaptureTracker {
    state: CaptureState,
    lost_since_poll: bool,
    gained_since_poll: bool,
}

impl CaptureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the platform's capture status
    pub fn set_captured(&mut self, captured: bool) {
        let next = if captured {
            CaptureState::Captured
        } else {
            CaptureState::NotCaptured
        };
        if next == self.state {
            return;
        }
        self.state = next;
        match next {
            CaptureState::Captured => self.gained_since_poll = true,
            CaptureState::NotCaptured => self.lost_since_poll = true,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn is_captured(&self) -> bool {
        self.state == CaptureState::Captured
    }

    /// True once per capture loss
    pub fn take_lost(&mut self) -> bool {
        std::mem::take(&mut self.lost_since_poll)
    }

    /// True once per capture gain
    pub fn take_gained(&mut self) -> bool {
        std::mem::take(&mut self.gained_since_poll)
    }
}
