use bevy::asset::AssetMetaCheck;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

use crate::engine::animation::phases::apply_phase_bands;
use crate::engine::animation::progress::{ScrollProgress, update_scroll_progress};
use crate::engine::animation::scroll_transform::apply_scroll_animation;
use crate::engine::assets::viewer_config::{ViewerManifest, phased_animation};
use crate::engine::camera::orbit_controller::{orbit_input, update_orbit_controllers};
use crate::engine::camera::viewer_camera::{
    ViewportSize, configure_orbit_damping, handle_viewport_resize, spawn_viewer_camera,
};
use crate::engine::core::app_state::{StopViewer, ViewerSet, ViewerState};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::config_loader::{ConfigLoader, resolve_config, start_loading};
use crate::engine::loading::model_loader::{
    detect_model_load_failure, settle_model_slot, start_model_load,
};
use crate::engine::loading::model_slot::{ModelLoadFinished, ModelSlot};
use crate::engine::scene::lighting::install_light_rig;
use crate::engine::systems::render_loop::handle_stop_requests;
use crate::host::HostBridgePlugin;
use crate::host::hero_fade::apply_hero_fade;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::render_loop::stop_on_escape;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<ViewerState>()
        // Registers ViewerManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerManifest>::new(&["json"]))
        .add_plugins(HostBridgePlugin);

    app.init_resource::<ConfigLoader>()
        .init_resource::<ModelSlot>()
        .init_resource::<ScrollProgress>()
        .init_resource::<ViewportSize>()
        .add_event::<ModelLoadFinished>()
        .add_event::<StopViewer>();

    app.configure_sets(
        Update,
        (
            ViewerSet::Input,
            ViewerSet::Page,
            ViewerSet::Model,
            ViewerSet::Animate,
            ViewerSet::Control,
        )
            .chain(),
    )
    .configure_sets(
        Update,
        (ViewerSet::Model, ViewerSet::Animate, ViewerSet::Control)
            .run_if(in_state(ViewerState::Running)),
    );

    app.add_systems(
        Startup,
        (spawn_viewer_camera, install_light_rig, start_loading),
    )
    .add_systems(
        Update,
        resolve_config.run_if(in_state(ViewerState::Configuring)),
    )
    .add_systems(
        OnEnter(ViewerState::Running),
        (configure_orbit_damping, start_model_load),
    );

    // Page state follows the host in every state so nothing is missed while configuring.
    app.add_systems(
        Update,
        (
            (update_scroll_progress, handle_viewport_resize, apply_hero_fade)
                .chain()
                .in_set(ViewerSet::Page),
            (detect_model_load_failure, settle_model_slot)
                .chain()
                .in_set(ViewerSet::Model),
            (
                apply_scroll_animation,
                apply_phase_bands.run_if(phased_animation),
            )
                .chain()
                .in_set(ViewerSet::Animate),
            (orbit_input, update_orbit_controllers)
                .chain()
                .in_set(ViewerSet::Control),
        ),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, stop_on_escape.before(handle_stop_requests));
    }

    app.add_systems(Update, handle_stop_requests);

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        level: Level::INFO,
        filter: "info,wgpu=error,naga=warn,bevy_render=warn".into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
