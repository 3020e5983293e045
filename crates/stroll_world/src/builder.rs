//! World-builder collaborator interface

use crate::scene::{SceneConfig, SceneHandle, SceneId};
use std::collections::HashMap;
use stroll_core::IdGenerator;

/// Constructs, shows, hides and tears down scene content.
///
/// Implemented by the rendering side of the game. The stage controller is
/// the only caller, and only during stage entry/exit - never mid-frame from
/// other components.
pub trait WorldBuilder {
    /// Build the content for a scene and return a handle to it
    fn build_scene(&mut self, config: &SceneConfig) -> SceneHandle;

    /// Show or hide a previously built scene
    fn set_visible(&mut self, scene: &SceneId, visible: bool);

    /// Destroy a scene's content entirely
    fn destroy(&mut self, scene: &SceneId);
}

/// In-memory world builder
///
/// Tracks which scenes exist and which are visible without creating any
/// actual content. Backs headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryWorldBuilder {
    ids: IdGenerator,
    scenes: HashMap<SceneId, SceneHandle>,
    visible: HashMap<SceneId, bool>,
    build_calls: u32,
}

impl MemoryWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a scene has been built and not destroyed
    pub fn is_built(&self, scene: &str) -> bool {
        self.scenes.contains_key(scene)
    }

    /// Whether a scene is currently shown
    pub fn is_visible(&self, scene: &str) -> bool {
        self.visible.get(scene).copied().unwrap_or(false)
    }

    /// Ids of all currently visible scenes
    pub fn visible_scenes(&self) -> Vec<SceneId> {
        let mut out: Vec<SceneId> = self
            .visible
            .iter()
            .filter(|(_, v)| **v)
            .map(|(id, _)| id.clone())
            .collect();
        out.sort();
        out
    }

    /// Total number of `build_scene` calls
    pub fn build_calls(&self) -> u32 {
        self.build_calls
    }
}

impl WorldBuilder for MemoryWorldBuilder {
    fn build_scene(&mut self, config: &SceneConfig) -> SceneHandle {
        self.build_calls += 1;
        let handle = self.ids.next();
        self.scenes.insert(config.id.clone(), handle);
        self.visible.insert(config.id.clone(), false);
        handle
    }

    fn set_visible(&mut self, scene: &SceneId, visible: bool) {
        if let Some(entry) = self.visible.get_mut(scene) {
            *entry = visible;
        }
    }

    fn destroy(&mut self, scene: &SceneId) {
        self.scenes.remove(scene);
        self.visible.remove(scene);
    }
}
