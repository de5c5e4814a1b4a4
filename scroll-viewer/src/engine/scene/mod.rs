//! Scene content that is fixed at startup.

/// Four-light rig: ambient, main directional, magenta spot and indigo rim light.
pub mod lighting;

/// Physical material recipe applied to the loaded model.
pub mod material;
