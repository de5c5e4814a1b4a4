use bevy::prelude::*;
use constants::camera::MAX_PIXEL_RATIO;
use constants::page::{DEFAULT_MODEL_PATH, HERO_SELECTOR};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How scroll progress drives the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    /// Eased continuous pose only.
    #[default]
    Continuous,
    /// Continuous pose overridden by the entrance / exit / hidden bands.
    Phased,
}

/// Runtime manifest, loaded from `viewer.json`. Mirrors the JSON structure;
/// every field is optional.
#[derive(Asset, TypePath, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerManifest {
    pub model_path: String,
    pub animation_mode: AnimationMode,
    pub hero_selector: String,
    pub orbit_damping: bool,
    pub max_pixel_ratio: f32,
}

impl Default for ViewerManifest {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            animation_mode: AnimationMode::default(),
            hero_selector: HERO_SELECTOR.to_string(),
            orbit_damping: true,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

/// Effective configuration, inserted once the manifest has resolved.
#[derive(Resource, Debug, Clone, PartialEq, Serialize)]
pub struct ViewerConfig {
    pub model_path: String,
    pub animation_mode: AnimationMode,
    pub hero_selector: String,
    pub orbit_damping: bool,
    pub max_pixel_ratio: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::from(ViewerManifest::default())
    }
}

impl From<ViewerManifest> for ViewerConfig {
    fn from(manifest: ViewerManifest) -> Self {
        let defaults = ViewerManifest::default();
        let max_pixel_ratio = if manifest.max_pixel_ratio.is_finite() && manifest.max_pixel_ratio >= 1.0 {
            manifest.max_pixel_ratio
        } else {
            warn!(
                "Ignoring max_pixel_ratio {} from manifest, using {}",
                manifest.max_pixel_ratio, defaults.max_pixel_ratio
            );
            defaults.max_pixel_ratio
        };
        let model_path = if manifest.model_path.trim().is_empty() {
            defaults.model_path
        } else {
            manifest.model_path
        };

        Self {
            model_path,
            animation_mode: manifest.animation_mode,
            hero_selector: manifest.hero_selector,
            orbit_damping: manifest.orbit_damping,
            max_pixel_ratio,
        }
    }
}

impl ViewerConfig {
    pub fn is_phased(&self) -> bool {
        self.animation_mode == AnimationMode::Phased
    }
}

/// Run condition for the banded staging systems.
pub fn phased_animation(config: Option<Res<ViewerConfig>>) -> bool {
    config.is_some_and(|config| config.is_phased())
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("viewer manifest `{path}` failed to load: {reason}")]
    Load { path: String, reason: String },
}
