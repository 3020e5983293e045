//! Scene descriptors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stroll_core::Id;

/// Scene identifier
pub type SceneId = String;

/// Opaque handle to built scene content, issued by the world builder
pub type SceneHandle = Id;

/// Static description of one scene's content
///
/// The engine treats the payload as opaque; it is forwarded verbatim to the
/// world builder, which knows how to turn it into geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Scene identifier
    pub id: SceneId,
    /// Display name
    pub name: String,
    /// Builder-specific content description
    pub data: HashMap<String, serde_json::Value>,
}

impl SceneConfig {
    /// Create a new scene config
    pub fn new(id: impl Into<SceneId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            data: HashMap::new(),
        }
    }

    /// Set display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Attach a builder-specific value
    pub fn with_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_config_builder() {
        let config = SceneConfig::new("forest")
            .with_name("Blossom Grove")
            .with_data("tree_count", serde_json::json!(70));

        assert_eq!(config.id, "forest");
        assert_eq!(config.name, "Blossom Grove");
        assert_eq!(config.data["tree_count"], 70);
    }
}
