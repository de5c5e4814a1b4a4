//! Scroll keyframes. Each pair is (value at progress 0, value at progress 1).

use bevy::math::Vec3;

/// Largest model dimension after bounding box normalisation.
pub const MODEL_TARGET_SIZE: f32 = 20.0;

/// Staged start position, below the visible area.
pub const MODEL_STAGED_POSITION: Vec3 = Vec3::new(0.0, -70.0, 50.0);

pub const CAMERA_Z: (f32, f32) = (50.0, 100.0);
pub const MODEL_Y: (f32, f32) = (-20.0, 20.0);
pub const MODEL_Z: (f32, f32) = (0.0, 50.0);
pub const MODEL_SCALE: (f32, f32) = (20.0, 25.0);

/// Rotation per axis at full progress, in radians.
pub const MODEL_ROTATION_TURN: f32 = std::f32::consts::TAU;

/// Phase band boundaries on raw progress.
pub const ENTRANCE_BAND_END: f32 = 0.2;
pub const EXIT_BAND_END: f32 = 0.3;

pub const ENTRANCE_Y: (f32, f32) = (-70.0, 0.0);
pub const ENTRANCE_Z: f32 = 20.0;

pub const EXIT_Y: (f32, f32) = (0.0, 150.0);
pub const EXIT_Z: (f32, f32) = (20.0, 100.0);
pub const EXIT_SCALE: (f32, f32) = (25.0, 5.0);

pub const HIDDEN_Y: f32 = 150.0;
pub const HIDDEN_Z: f32 = 100.0;
pub const HIDDEN_SCALE: f32 = 5.0;

/// Hero fade thresholds on raw progress.
pub const HERO_FADE_START: f32 = 0.1;
pub const HERO_FADE_END: f32 = 0.15;
