use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use crate::host::metrics::{PageMetrics, PageScrolled, ViewportResized};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Page notification captured by a DOM listener, waiting for the next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Scrolled(PageMetrics),
    Resized(PageMetrics),
}

/// Thread-safe queue shared between DOM callbacks and the ECS.
#[derive(Resource, Clone, Default)]
pub struct HostEventQueue(Arc<Mutex<Vec<HostEvent>>>);

impl HostEventQueue {
    #[cfg(any(test, target_arch = "wasm32"))]
    pub fn push(&self, event: HostEvent) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(event);
        }
    }

    fn take(&self) -> Vec<HostEvent> {
        self.0
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

/// Move queued page notifications into ECS events, preserving order.
pub fn drain_host_events(
    queue: Option<Res<HostEventQueue>>,
    mut scrolled: EventWriter<PageScrolled>,
    mut resized: EventWriter<ViewportResized>,
) {
    let Some(queue) = queue else {
        return;
    };

    for event in queue.take() {
        match event {
            HostEvent::Scrolled(metrics) => {
                scrolled.write(PageScrolled(metrics));
            }
            HostEvent::Resized(metrics) => {
                resized.write(ViewportResized::from(metrics));
            }
        }
    }
}

/// Read the live page geometry. `None` outside a browsing context.
#[cfg(target_arch = "wasm32")]
pub fn sample_page_metrics() -> Option<PageMetrics> {
    let window = web_sys::window()?;
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|element| element.scroll_height() as f32)?;

    Some(PageMetrics {
        scroll_y: window.scroll_y().ok()? as f32,
        document_height,
        viewport_height: window.inner_height().ok()?.as_f64()? as f32,
        viewport_width: window.inner_width().ok()?.as_f64()? as f32,
        device_pixel_ratio: window.device_pixel_ratio() as f32,
    })
}

/// Register `scroll` and `resize` listeners on the global window and push an
/// initial sample so a restored scroll position is honoured on the first frame.
#[cfg(target_arch = "wasm32")]
pub fn setup_page_listeners(mut commands: Commands) {
    let queue = HostEventQueue::default();

    let Some(window) = web_sys::window() else {
        warn!("No browser window; page scroll and resize will not be tracked");
        commands.insert_resource(queue);
        return;
    };

    let listeners: [(&str, fn(PageMetrics) -> HostEvent); 2] = [
        ("scroll", HostEvent::Scrolled),
        ("resize", HostEvent::Resized),
    ];

    for (event_name, wrap) in listeners {
        let queue_clone = queue.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            if let Some(metrics) = sample_page_metrics() {
                queue_clone.push(wrap(metrics));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);

        if let Err(error) =
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
        {
            warn!("Failed to register {event_name} listener: {error:?}");
            continue;
        }

        // Ownership moves to JS; the listener lives as long as the page.
        closure.forget();
    }

    if let Some(metrics) = sample_page_metrics() {
        queue.push(HostEvent::Resized(metrics));
        queue.push(HostEvent::Scrolled(metrics));
    } else {
        warn!("Could not sample page metrics at startup");
    }

    info!("Page scroll and resize listeners registered");
    commands.insert_resource(queue);
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn samples_live_page_geometry() {
        let metrics = sample_page_metrics().expect("page metrics in a browser");
        assert!(metrics.viewport_width > 0.0);
        assert!(metrics.viewport_height > 0.0);
        assert!(metrics.device_pixel_ratio > 0.0);
        let progress = metrics.scroll_progress();
        assert!((0.0..=1.0).contains(&progress));
    }
}
