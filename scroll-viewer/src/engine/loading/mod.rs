//! Loading of the runtime manifest and the product model.
//!
//! The manifest resolves first and decides which model is fetched. The model
//! then moves through the [`model_slot::ModelSlot`] states exactly once.

/// Viewer manifest loading and fallback to built-in defaults.
pub mod config_loader;

/// Model fetch, scene instancing, material swap and normalisation.
pub mod model_loader;

/// Model slot state, load outcome and its error type.
pub mod model_slot;
