use bevy::prelude::*;

use crate::host::metrics::PageScrolled;

/// Normalised scroll position, `0` at the top of the page and `1` at the bottom.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollProgress(pub f32);

impl ScrollProgress {
    pub fn value(&self) -> f32 {
        self.0
    }
}

/// Scroll offset over the scrollable distance, clamped to `[0, 1]`.
///
/// A page that does not scroll (document no taller than the viewport) or
/// metrics that are not finite yield `0` instead of dividing by zero.
pub fn scroll_progress(scroll_y: f32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = document_height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Recompute progress from the latest page metrics of this frame.
pub fn update_scroll_progress(
    mut scrolled: EventReader<PageScrolled>,
    mut progress: ResMut<ScrollProgress>,
) {
    let Some(PageScrolled(metrics)) = scrolled.read().last() else {
        return;
    };

    let value = scroll_progress(
        metrics.scroll_y,
        metrics.document_height,
        metrics.viewport_height,
    );
    if progress.0 != value {
        progress.0 = value;
    }
}
