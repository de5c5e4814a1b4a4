//! Bridge between the viewer and the page that hosts it.
//!
//! In the browser, DOM `scroll` and `resize` listeners feed a shared queue
//! that is drained into ECS events each frame. Native builds have no page, so
//! a virtual one driven by the mouse wheel and window resizes stands in.
//! Either way the rest of the engine only sees [`metrics::PageScrolled`] and
//! [`metrics::ViewportResized`].

use bevy::prelude::*;

use crate::engine::core::app_state::ViewerSet;

/// DOM listener registration and the queue that carries page events into the ECS.
pub mod dom_bridge;

/// Hero section opacity driven by scroll progress.
pub mod hero_fade;

/// Page geometry snapshot and the events built from it.
pub mod metrics;

/// Native stand-in for the host document.
#[cfg(not(target_arch = "wasm32"))]
pub mod virtual_page;

pub struct HostBridgePlugin;

impl Plugin for HostBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<metrics::PageScrolled>()
            .add_event::<metrics::ViewportResized>()
            .init_resource::<hero_fade::HeroFade>()
            .add_systems(Update, dom_bridge::drain_host_events.in_set(ViewerSet::Input));

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, dom_bridge::setup_page_listeners);

        #[cfg(not(target_arch = "wasm32"))]
        {
            use virtual_page::{
                VirtualPage, init_virtual_page, resize_virtual_page, scroll_virtual_page,
            };

            app.init_resource::<VirtualPage>()
                .add_systems(Startup, init_virtual_page)
                .add_systems(
                    Update,
                    (scroll_virtual_page, resize_virtual_page).in_set(ViewerSet::Input),
                );
        }
    }
}
