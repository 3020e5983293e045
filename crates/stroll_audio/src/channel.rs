//! Audio channels for mixing

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Channel identifier
pub type ChannelId = String;

/// Audio channel for grouping and mixing sounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioChannel {
    /// Channel name/ID
    pub name: String,
    /// Volume (0.0 - 1.0)
    pub volume: f32,
    /// Whether channel is muted
    pub muted: bool,
    /// Parent channel (for hierarchical mixing)
    pub parent: Option<ChannelId>,
}

impl AudioChannel {
    /// Create a new channel
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            volume: 1.0,
            muted: false,
            parent: None,
        }
    }

    /// Set volume
    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }

    /// Set parent channel
    pub fn with_parent(mut self, parent: impl Into<ChannelId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Get effective volume (considering mute)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

impl Default for AudioChannel {
    fn default() -> Self {
        Self::new("default")
    }
}

/// Channel manager
#[derive(Debug)]
pub struct ChannelManager {
    /// Registered channels
    channels: HashMap<ChannelId, AudioChannel>,
    /// Master volume
    master_volume: f32,
    /// Master mute
    master_muted: bool,
}

impl ChannelManager {
    /// Create a new channel manager with the engine's default channels
    pub fn new() -> Self {
        let mut manager = Self {
            channels: HashMap::new(),
            master_volume: 1.0,
            master_muted: false,
        };

        manager.register(AudioChannel::new("master"));
        manager.register(AudioChannel::new("ambient").with_parent("master"));
        manager.register(AudioChannel::new("ui").with_parent("master"));

        manager
    }

    /// Register a channel
    pub fn register(&mut self, channel: AudioChannel) {
        self.channels.insert(channel.name.clone(), channel);
    }

    /// Get a channel
    pub fn get(&self, name: &str) -> Option<&AudioChannel> {
        self.channels.get(name)
    }

    /// Set channel volume
    pub fn set_volume(&mut self, name: &str, volume: f32) {
        if let Some(channel) = self.channels.get_mut(name) {
            channel.volume = volume.clamp(0.0, 1.0);
        }
    }

    /// Set channel mute state
    pub fn set_muted(&mut self, name: &str, muted: bool) {
        if let Some(channel) = self.channels.get_mut(name) {
            channel.muted = muted;
        }
    }

    /// Set master volume
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.clamp(0.0, 1.0);
    }

    /// Mute or unmute everything
    pub fn set_master_muted(&mut self, muted: bool) {
        self.master_muted = muted;
    }

    /// Resolve a channel's volume through its parent chain and the master
    pub fn resolved_volume(&self, name: &str) -> f32 {
        if self.master_muted {
            return 0.0;
        }

        let mut volume = self.master_volume;
        let mut current = Some(name.to_string());
        // Parent chains are short; a visited cap guards against cycles
        let mut hops = 0;
        while let Some(id) = current {
            let Some(channel) = self.channels.get(&id) else {
                break;
            };
            volume *= channel.effective_volume();
            current = channel.parent.clone();
            hops += 1;
            if hops > 8 {
                break;
            }
        }
        volume
    }
}

impl Default for ChannelManager {
    fn default() -> Self {
        Self::new()
    }
}
