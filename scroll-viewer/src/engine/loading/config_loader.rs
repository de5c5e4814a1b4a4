use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::page::VIEWER_MANIFEST_PATH;

use crate::engine::assets::viewer_config::{ConfigError, ViewerConfig, ViewerManifest};
use crate::engine::core::app_state::ViewerState;

#[derive(Resource, Default)]
pub struct ConfigLoader {
    handle: Option<Handle<ViewerManifest>>,
}

// Start the loading process
pub fn start_loading(mut config_loader: ResMut<ConfigLoader>, asset_server: Res<AssetServer>) {
    info!("Loading viewer manifest from {}", VIEWER_MANIFEST_PATH);
    config_loader.handle = Some(asset_server.load(VIEWER_MANIFEST_PATH));
}

/// Insert the effective configuration once the manifest settles, then start running.
/// A missing or malformed manifest falls back to the built-in defaults.
pub fn resolve_config(
    config_loader: Res<ConfigLoader>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<ViewerManifest>>,
    mut commands: Commands,
    mut next_state: ResMut<NextState<ViewerState>>,
) {
    let Some(ref handle) = config_loader.handle else {
        return;
    };

    let config = if let Some(manifest) = manifests.get(handle) {
        ViewerConfig::from(manifest.clone())
    } else if let Some(LoadState::Failed(reason)) = asset_server.get_load_state(handle) {
        let error = ConfigError::Load {
            path: VIEWER_MANIFEST_PATH.to_string(),
            reason: reason.to_string(),
        };
        warn!("{error}; using built-in defaults");
        ViewerConfig::default()
    } else {
        return;
    };

    match serde_json::to_string(&config) {
        Ok(json) => info!("Viewer configuration: {json}"),
        Err(error) => warn!("Could not serialise viewer configuration: {error}"),
    }

    commands.insert_resource(config);
    info!("→ Transitioning to Running state");
    next_state.set(ViewerState::Running);
}
