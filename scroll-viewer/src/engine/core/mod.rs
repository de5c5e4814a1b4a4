//! Core application setup and state management.
//!
//! Handles the viewer lifecycle, window configuration, frame ordering
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with logging, the manifest loader, the host bridge
/// and the per-frame system ordering.
pub mod app_setup;

/// Viewer lifecycle states, frame system sets and the stop request.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Binds the page canvas on web targets and sets vsync.
pub mod window_config;
