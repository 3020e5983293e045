//! # stroll_world - Stroll Engine World Interface
//!
//! The engine never touches meshes, materials or markup. Scene content is
//! built and shown through the [`WorldBuilder`] trait, and the
//! [`SceneRegistry`] guarantees that exactly one scene's content is visible
//! at any moment.

pub mod builder;
pub mod registry;
pub mod scene;

pub mod prelude {
    pub use crate::builder::{MemoryWorldBuilder, WorldBuilder};
    pub use crate::registry::{SceneRegistry, WorldError};
    pub use crate::scene::{SceneConfig, SceneHandle, SceneId};
}

pub use prelude::*;
