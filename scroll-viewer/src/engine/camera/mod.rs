//! Viewer camera and its orbit-style controller.
//!
//! The scroll animation writes the camera depth first each frame; the orbit
//! controller then re-orbits from that position around the origin.

/// Orbit controller with optional damping, driven by left-drag input.
pub mod orbit_controller;

/// Camera spawning, projection recipe and viewport resize handling.
pub mod viewer_camera;
