//! Asset-side data for the viewer.
//!
//! Holds the runtime manifest format and the bounding box maths used to
//! normalise the loaded model.

/// Model-space bounding boxes and the uniform-scale normalisation derived from them.
pub mod model_bounds;

/// `viewer.json` manifest, effective configuration and animation mode selection.
pub mod viewer_config;
