//! Lifecycle systems for the render loop.

/// Cancellation of the per-frame loop through `StopViewer`.
pub mod render_loop;
