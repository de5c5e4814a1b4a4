use bevy::prelude::*;
use bevy::window::PresentMode;

#[cfg(target_arch = "wasm32")]
use bevy::window::CompositeAlphaMode;
#[cfg(target_arch = "wasm32")]
use constants::page::CANVAS_SELECTOR;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(CANVAS_SELECTOR.into()),
            // Page resize events size the canvas, not bevy.
            fit_canvas_to_parent: false,
            // Scroll and wheel must still reach the page.
            prevent_default_event_handling: false,
            transparent: true,
            composite_alpha_mode: CompositeAlphaMode::PreMultiplied,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Scroll Viewer".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
