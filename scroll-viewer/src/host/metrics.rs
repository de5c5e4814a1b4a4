use bevy::prelude::*;

use crate::engine::animation::progress::scroll_progress;

/// Snapshot of the host page geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageMetrics {
    pub scroll_y: f32,
    pub document_height: f32,
    pub viewport_height: f32,
    pub viewport_width: f32,
    pub device_pixel_ratio: f32,
}

impl PageMetrics {
    pub fn scroll_progress(&self) -> f32 {
        scroll_progress(self.scroll_y, self.document_height, self.viewport_height)
    }
}

/// The page scrolled, or its geometry was sampled for the first time.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PageScrolled(pub PageMetrics);

/// The viewport that hosts the canvas changed size.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewportResized {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl From<PageMetrics> for ViewportResized {
    fn from(metrics: PageMetrics) -> Self {
        Self {
            width: metrics.viewport_width,
            height: metrics.viewport_height,
            device_pixel_ratio: metrics.device_pixel_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_from_metrics() {
        let metrics = PageMetrics {
            scroll_y: 750.0,
            document_height: 4000.0,
            viewport_height: 1000.0,
            viewport_width: 1280.0,
            device_pixel_ratio: 2.0,
        };
        assert_eq!(metrics.scroll_progress(), 0.25);
        assert_eq!(
            ViewportResized::from(metrics),
            ViewportResized {
                width: 1280.0,
                height: 1000.0,
                device_pixel_ratio: 2.0,
            }
        );
    }

    #[test]
    fn unsampled_page_has_zero_progress() {
        assert_eq!(PageMetrics::default().scroll_progress(), 0.0);
    }
}
