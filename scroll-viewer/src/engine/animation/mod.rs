//! Scroll-driven animation of the model and camera.
//!
//! Progress is recomputed from page metrics on scroll and the resulting pose
//! is re-applied every frame, so transforms are pure functions of progress.

/// Cubic ease-in-out and eased interpolation helpers.
pub mod easing;

/// Optional banded entrance / fade-out / hidden staging, selected by configuration.
pub mod phases;

/// Scroll progress resource and its guarded computation from page metrics.
pub mod progress;

/// Continuous scroll pose for camera depth and model position, rotation and scale.
pub mod scroll_transform;
