use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::page::{VIRTUAL_PAGE_LINE_HEIGHT, VIRTUAL_PAGE_SCREENS};

use crate::host::metrics::{PageMetrics, PageScrolled, ViewportResized};

/// Stand-in for the host document on native builds.
///
/// The page is a fixed number of viewport heights tall and the mouse wheel
/// scrolls it, so the same progress and resize paths run as in the browser.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct VirtualPage {
    pub scroll_y: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub device_pixel_ratio: f32,
    pub screens: f32,
}

impl Default for VirtualPage {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            viewport_width: 0.0,
            viewport_height: 0.0,
            device_pixel_ratio: 1.0,
            screens: VIRTUAL_PAGE_SCREENS,
        }
    }
}

impl VirtualPage {
    pub fn document_height(&self) -> f32 {
        self.viewport_height * self.screens
    }

    pub fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Positive `delta` scrolls towards the bottom. Stops at either end.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_y = (self.scroll_y + delta).clamp(0.0, self.max_scroll());
    }

    /// Resize keeps the relative scroll position.
    pub fn set_viewport(&mut self, width: f32, height: f32, device_pixel_ratio: f32) {
        let progress = self.metrics().scroll_progress();
        self.viewport_width = width;
        self.viewport_height = height;
        self.device_pixel_ratio = device_pixel_ratio;
        self.scroll_y = progress * self.max_scroll();
    }

    pub fn metrics(&self) -> PageMetrics {
        PageMetrics {
            scroll_y: self.scroll_y,
            document_height: self.document_height(),
            viewport_height: self.viewport_height,
            viewport_width: self.viewport_width,
            device_pixel_ratio: self.device_pixel_ratio,
        }
    }
}

/// Size the page from the primary window and report the initial geometry.
pub fn init_virtual_page(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut page: ResMut<VirtualPage>,
    mut scrolled: EventWriter<PageScrolled>,
    mut resized: EventWriter<ViewportResized>,
) {
    let Ok(window) = windows.single() else {
        warn!("No primary window; virtual page stays empty");
        return;
    };

    page.set_viewport(
        window.width(),
        window.height(),
        window.resolution.base_scale_factor(),
    );
    resized.write(ViewportResized::from(page.metrics()));
    scrolled.write(PageScrolled(page.metrics()));
}

pub fn scroll_virtual_page(
    mut wheel: EventReader<MouseWheel>,
    mut page: ResMut<VirtualPage>,
    mut scrolled: EventWriter<PageScrolled>,
) {
    let delta: f32 = wheel
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y * VIRTUAL_PAGE_LINE_HEIGHT,
            MouseScrollUnit::Pixel => event.y,
        })
        .sum();
    if delta == 0.0 {
        return;
    }

    // Wheel up is positive; the page moves the other way.
    page.scroll_by(-delta);
    scrolled.write(PageScrolled(page.metrics()));
}

pub fn resize_virtual_page(
    mut window_resized: EventReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut page: ResMut<VirtualPage>,
    mut scrolled: EventWriter<PageScrolled>,
    mut resized: EventWriter<ViewportResized>,
) {
    let Some(event) = window_resized
        .read()
        .filter(|event| windows.contains(event.window))
        .last()
    else {
        return;
    };
    let device_pixel_ratio = windows
        .get(event.window)
        .map_or(page.device_pixel_ratio, |window| {
            window.resolution.base_scale_factor()
        });

    page.set_viewport(event.width, event.height, device_pixel_ratio);
    resized.write(ViewportResized::from(page.metrics()));
    scrolled.write(PageScrolled(page.metrics()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> VirtualPage {
        let mut page = VirtualPage::default();
        page.set_viewport(1280.0, 720.0, 1.0);
        page
    }

    #[test]
    fn page_is_several_screens_tall() {
        let page = page();
        assert_eq!(page.document_height(), 720.0 * VIRTUAL_PAGE_SCREENS);
        assert_eq!(page.metrics().scroll_progress(), 0.0);
    }

    #[test]
    fn scrolling_stops_at_both_ends() {
        let mut page = page();
        page.scroll_by(-100.0);
        assert_eq!(page.scroll_y, 0.0);

        page.scroll_by(1.0e6);
        assert_eq!(page.scroll_y, page.max_scroll());
        assert_eq!(page.metrics().scroll_progress(), 1.0);
    }

    #[test]
    fn resize_keeps_relative_position() {
        let mut page = page();
        page.scroll_by(page.max_scroll() / 2.0);
        page.set_viewport(800.0, 400.0, 2.0);

        assert!((page.metrics().scroll_progress() - 0.5).abs() < 1e-6);
        assert_eq!(page.metrics().device_pixel_ratio, 2.0);
    }

    #[test]
    fn wheel_scrolls_down_and_reports() {
        let mut app = App::new();
        app.add_event::<MouseWheel>()
            .add_event::<PageScrolled>()
            .insert_resource(page())
            .add_systems(Update, scroll_virtual_page);

        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Line,
            x: 0.0,
            y: -3.0,
            window: Entity::PLACEHOLDER,
        });
        app.update();

        let page = app.world().resource::<VirtualPage>();
        assert_eq!(page.scroll_y, 3.0 * VIRTUAL_PAGE_LINE_HEIGHT);

        let events = app.world().resource::<Events<PageScrolled>>();
        let mut cursor = events.get_cursor();
        let last = cursor.read(events).last().copied();
        assert_eq!(last, Some(PageScrolled(page.metrics())));
    }
}
