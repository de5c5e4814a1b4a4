use bevy::gltf::Gltf;
use bevy::prelude::*;
use thiserror::Error;

/// Marker on the root entity of the loaded model.
#[derive(Component, Debug, Default)]
pub struct ScrollModel;

/// Everything the per-frame systems need once the model is set up.
#[derive(Debug, Clone)]
pub struct ModelReady {
    pub entity: Entity,
    /// Shared physical material on every mesh of the model.
    pub material: Handle<StandardMaterial>,
    /// Uniform scale from bounding box normalisation.
    pub scale: f32,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelLoadError {
    #[error("failed to load model asset `{path}`: {reason}")]
    Asset { path: String, reason: String },
    #[error("model `{path}` contains no meshes")]
    NoMeshes { path: String },
    #[error("model `{path}` has a degenerate bounding box (largest extent {max_extent})")]
    DegenerateBounds { path: String, max_extent: f32 },
}

/// Result of the single model load, delivered once.
pub type ModelLoadOutcome = Result<ModelReady, ModelLoadError>;

/// Fired exactly once when the model load settles.
#[derive(Event, Debug, Clone)]
pub struct ModelLoadFinished(pub ModelLoadOutcome);

/// Ownership of the one model. Per-frame systems only act on [`ModelSlot::Ready`].
#[derive(Resource, Debug, Clone, Default)]
pub enum ModelSlot {
    #[default]
    Absent,
    /// Load issued; the staged root exists but stays hidden. `gltf` tracks
    /// the whole file, whose failures never reach the scene sub-asset.
    Loading {
        entity: Entity,
        path: String,
        gltf: Handle<Gltf>,
    },
    Ready(ModelReady),
    /// Permanent: there are no retries.
    Failed(ModelLoadError),
}

impl ModelSlot {
    pub fn ready(&self) -> Option<&ModelReady> {
        match self {
            Self::Ready(ready) => Some(ready),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    /// Move out of `Loading` with the outcome. Settled slots never change again.
    pub fn settle(&mut self, outcome: &ModelLoadOutcome) -> bool {
        if !matches!(self, Self::Loading { .. }) {
            return false;
        }
        *self = match outcome {
            Ok(ready) => Self::Ready(ready.clone()),
            Err(error) => Self::Failed(error.clone()),
        };
        true
    }
}
