use bevy::math::Vec3;

/// Vertical field of view applied to the viewer camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera start position; the scroll animation only ever rewrites `z`.
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 50.0);

/// Point the camera and orbit controller look at.
pub const CAMERA_TARGET: Vec3 = Vec3::ZERO;

/// Exposure chosen so light intensities read roughly as unit-less display values.
pub const CAMERA_EV100: f32 = 0.0;

/// Upper bound for the device pixel ratio used by the renderer.
pub const MAX_PIXEL_RATIO: f32 = 2.0;

/// Fraction of the pending orbit rotation applied each frame when damping is on.
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;

/// Full-height drag equals one full turn at this speed.
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;

/// Keeps the polar angle away from the poles.
pub const ORBIT_POLAR_EPSILON: f32 = 0.000_001;
