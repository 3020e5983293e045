//! Scene registry and visibility switch

use crate::builder::WorldBuilder;
use crate::scene::{SceneConfig, SceneHandle, SceneId};
use log::debug;
use std::collections::HashMap;
use thiserror::Error;

/// World errors
#[derive(Debug, Clone, Error)]
pub enum WorldError {
    /// A stage referenced a scene that was never registered
    #[error("unknown scene: {0}")]
    UnknownScene(SceneId),
}

/// Result type for world operations
pub type Result<T> = std::result::Result<T, WorldError>;

/// Owns the scene configurations and enforces the one-visible-scene rule.
///
/// Content is built lazily on first show; once built it is kept and merely
/// hidden, so returning to a scene (replay) does not rebuild it.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    configs: HashMap<SceneId, SceneConfig>,
    built: HashMap<SceneId, SceneHandle>,
    visible: Option<SceneId>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene configuration
    pub fn register(&mut self, config: SceneConfig) {
        self.configs.insert(config.id.clone(), config);
    }

    /// Whether a scene id is known
    pub fn contains(&self, scene: &str) -> bool {
        self.configs.contains_key(scene)
    }

    /// The currently visible scene, if any
    pub fn visible(&self) -> Option<&SceneId> {
        self.visible.as_ref()
    }

    /// Show exactly the given scene, hiding every other built scene
    pub fn show_only<W: WorldBuilder>(&mut self, scene: &str, builder: &mut W) -> Result<()> {
        let config = self
            .configs
            .get(scene)
            .ok_or_else(|| WorldError::UnknownScene(scene.to_string()))?;

        if !self.built.contains_key(scene) {
            let handle = builder.build_scene(config);
            self.built.insert(scene.to_string(), handle);
        }

        for id in self.built.keys() {
            if id != scene {
                builder.set_visible(id, false);
            }
        }
        let id = scene.to_string();
        builder.set_visible(&id, true);

        debug!("scene visible: {}", scene);
        self.visible = Some(id);
        Ok(())
    }

    /// Hide everything, e.g. for the terminal completion screen
    pub fn hide_all<W: WorldBuilder>(&mut self, builder: &mut W) {
        for id in self.built.keys() {
            builder.set_visible(id, false);
        }
        self.visible = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MemoryWorldBuilder;

    fn registry_with(ids: &[&str]) -> SceneRegistry {
        let mut registry = SceneRegistry::new();
        for id in ids {
            registry.register(SceneConfig::new(*id));
        }
        registry
    }

    #[test]
    fn test_exactly_one_scene_visible() {
        let mut registry = registry_with(&["forest", "street", "beach"]);
        let mut builder = MemoryWorldBuilder::new();

        registry.show_only("forest", &mut builder).unwrap();
        assert_eq!(builder.visible_scenes(), vec!["forest".to_string()]);

        registry.show_only("street", &mut builder).unwrap();
        assert_eq!(builder.visible_scenes(), vec!["street".to_string()]);
        assert_eq!(registry.visible(), Some(&"street".to_string()));
    }

    #[test]
    fn test_scenes_are_built_once() {
        let mut registry = registry_with(&["forest", "street"]);
        let mut builder = MemoryWorldBuilder::new();

        registry.show_only("forest", &mut builder).unwrap();
        registry.show_only("street", &mut builder).unwrap();
        registry.show_only("forest", &mut builder).unwrap();

        assert_eq!(builder.build_calls(), 2);
    }

    #[test]
    fn test_unknown_scene_is_an_error() {
        let mut registry = registry_with(&["forest"]);
        let mut builder = MemoryWorldBuilder::new();

        assert!(matches!(
            registry.show_only("volcano", &mut builder),
            Err(WorldError::UnknownScene(_))
        ));
    }

    #[test]
    fn test_hide_all() {
        let mut registry = registry_with(&["forest"]);
        let mut builder = MemoryWorldBuilder::new();

        registry.show_only("forest", &mut builder).unwrap();
        registry.hide_all(&mut builder);

        assert!(builder.visible_scenes().is_empty());
        assert!(registry.visible().is_none());
    }
}
