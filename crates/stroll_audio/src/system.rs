//! Ambient playback system

use crate::channel::ChannelManager;
use crate::profile::AmbientProfile;
use log::warn;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Audio error types
#[derive(Debug, Clone, Error)]
pub enum AudioError {
    /// Backend could not start or continue playback
    #[error("audio backend failure: {0}")]
    Backend(String),
    /// No profile registered under the requested id
    #[error("unknown ambient profile: {0}")]
    UnknownProfile(String),
}

/// Playback backend for ambient loops
///
/// A real implementation wraps the platform audio device. The engine only
/// ever plays one ambient loop at a time.
pub trait AmbientSink {
    /// Begin playing a profile at the given resolved volume
    fn start(&mut self, profile: &AmbientProfile, volume: f32) -> Result<(), AudioError>;

    /// Stop the current loop, if any
    fn stop(&mut self);
}

/// Sink that plays nothing, for headless runs and tests
#[derive(Debug, Default)]
pub struct NullSink;

impl AmbientSink for NullSink {
    fn start(&mut self, _profile: &AmbientProfile, _volume: f32) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

/// The ambient audio system
///
/// Every failure path here is cosmetic: a missing profile or a dead backend
/// is logged and ignored so the stage machine can keep running.
pub struct AudioSystem {
    sink: Box<dyn AmbientSink>,
    profiles: HashMap<String, AmbientProfile>,
    channels: Arc<RwLock<ChannelManager>>,
    current: Option<String>,
}

impl AudioSystem {
    /// Create a system around a playback backend
    pub fn new(sink: Box<dyn AmbientSink>) -> Self {
        Self {
            sink,
            profiles: HashMap::new(),
            channels: Arc::new(RwLock::new(ChannelManager::new())),
            current: None,
        }
    }

    /// Create a silent system
    pub fn headless() -> Self {
        Self::new(Box::new(NullSink))
    }

    /// Register an ambient profile
    pub fn register_profile(&mut self, profile: AmbientProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    /// Shared channel mixer
    pub fn channels(&self) -> Arc<RwLock<ChannelManager>> {
        Arc::clone(&self.channels)
    }

    /// Id of the profile currently playing, if any
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Start an ambient loop by profile id.
    ///
    /// Re-requesting the playing profile is a no-op. Unknown profiles and
    /// backend errors are swallowed after a warning.
    pub fn play_ambient(&mut self, profile_id: &str) {
        if self.current.as_deref() == Some(profile_id) {
            return;
        }

        let Some(profile) = self.profiles.get(profile_id) else {
            warn!("ambient profile not registered, skipping: {}", profile_id);
            return;
        };

        self.sink.stop();
        let volume = self.channels.read().resolved_volume("ambient") * profile.volume;
        match self.sink.start(profile, volume) {
            Ok(()) => self.current = Some(profile_id.to_string()),
            Err(err) => {
                warn!("ambient playback failed, continuing without: {}", err);
                self.current = None;
            }
        }
    }

    /// Stop the current ambient loop
    pub fn stop_ambient(&mut self) {
        self.sink.stop();
        self.current = None;
    }
}

impl std::fmt::Debug for AudioSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioSystem")
            .field("profiles", &self.profiles.len())
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink;

    impl AmbientSink for FailingSink {
        fn start(&mut self, _profile: &AmbientProfile, _volume: f32) -> Result<(), AudioError> {
            Err(AudioError::Backend("no output device".into()))
        }

        fn stop(&mut self) {}
    }

    fn system_with_profile(sink: Box<dyn AmbientSink>) -> AudioSystem {
        let mut system = AudioSystem::new(sink);
        system.register_profile(AmbientProfile::new("forest", "audio/forest.ogg"));
        system
    }

    #[test]
    fn test_play_and_stop() {
        let mut system = system_with_profile(Box::new(NullSink));
        system.play_ambient("forest");
        assert_eq!(system.current(), Some("forest"));

        system.stop_ambient();
        assert_eq!(system.current(), None);
    }

    #[test]
    fn test_backend_failure_is_swallowed() {
        let mut system = system_with_profile(Box::new(FailingSink));
        system.play_ambient("forest");
        assert_eq!(system.current(), None);
    }

    #[test]
    fn test_unknown_profile_is_swallowed() {
        let mut system = system_with_profile(Box::new(NullSink));
        system.play_ambient("nope");
        assert_eq!(system.current(), None);
    }

    #[test]
    fn test_replay_of_current_profile_is_noop() {
        let mut system = system_with_profile(Box::new(NullSink));
        system.play_ambient("forest");
        system.play_ambient("forest");
        assert_eq!(system.current(), Some("forest"));
    }
}
