use bevy::prelude::*;

/// Viewer lifecycle. Frame work that touches the scene only runs in `Running`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum ViewerState {
    /// Waiting for the runtime manifest to resolve.
    #[default]
    Configuring,
    Running,
    /// The render loop was cancelled; the last frame stays on screen.
    Stopped,
}

/// Per-frame ordering: page input, then derived page state, then the scene.
///
/// The orbit controller runs in `Control` after `Animate`, so it starts from
/// the camera depth the scroll animation just wrote.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSet {
    Input,
    Page,
    Model,
    Animate,
    Control,
}

/// Cancellation request for the render loop.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct StopViewer;
