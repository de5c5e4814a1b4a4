use bevy::asset::LoadState;
use bevy::ecs::system::SystemParam;
use bevy::gltf::Gltf;
use bevy::math::Affine3A;
use bevy::prelude::*;
use bevy::render::mesh::MeshAabb;
use bevy::scene::SceneInstanceReady;
use constants::animation::{MODEL_STAGED_POSITION, MODEL_TARGET_SIZE};

use crate::engine::assets::model_bounds::{ModelBounds, Normalisation};
use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::loading::model_slot::{
    ModelLoadError, ModelLoadFinished, ModelLoadOutcome, ModelReady, ModelSlot, ScrollModel,
};
use crate::engine::scene::material::physical_material;

/// Issue the one model load. The root is staged below the view and hidden
/// until its materials and scale are set up.
pub fn start_model_load(
    mut commands: Commands,
    mut slot: ResMut<ModelSlot>,
    config: Res<ViewerConfig>,
    asset_server: Res<AssetServer>,
) {
    // A second load would duplicate the model in the scene.
    if !matches!(*slot, ModelSlot::Absent) {
        warn!("Model load already issued, ignoring");
        return;
    }

    let path = config.model_path.clone();
    info!("Loading model: {}", path);
    let gltf: Handle<Gltf> = asset_server.load(path.clone());
    let scene: Handle<Scene> = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path.clone()));

    let entity = commands
        .spawn((
            SceneRoot(scene),
            Transform::from_translation(MODEL_STAGED_POSITION),
            Visibility::Hidden,
            ScrollModel,
            Name::new("ScrollModel"),
        ))
        .observe(on_model_instance_ready)
        .id();

    *slot = ModelSlot::Loading { entity, path, gltf };
}

/// Report a failed load. The slot then stays without a model for good.
///
/// A parse error only fails the file handle and a file without scenes never
/// produces `Scene0`, so both the file and its scene are checked.
pub fn detect_model_load_failure(
    slot: Res<ModelSlot>,
    roots: Query<&SceneRoot>,
    asset_server: Res<AssetServer>,
    gltfs: Res<Assets<Gltf>>,
    mut finished: EventWriter<ModelLoadFinished>,
) {
    let ModelSlot::Loading { entity, path, gltf } = &*slot else {
        return;
    };

    let file_failure = failure_reason(asset_server.get_load_state(gltf));
    let scene_failure = roots
        .get(*entity)
        .ok()
        .and_then(|root| failure_reason(asset_server.get_load_state(&root.0)));
    let scene_count = gltfs.get(gltf).map(|gltf| gltf.scenes.len());

    if let Some(reason) = model_load_failure(file_failure, scene_failure, scene_count) {
        finished.write(ModelLoadFinished(Err(ModelLoadError::Asset {
            path: path.clone(),
            reason,
        })));
    }
}

fn failure_reason(state: Option<LoadState>) -> Option<String> {
    match state {
        Some(LoadState::Failed(error)) => Some(error.to_string()),
        _ => None,
    }
}

/// First failure among the file, its scene and a loaded file with no scenes.
fn model_load_failure(
    file_failure: Option<String>,
    scene_failure: Option<String>,
    scene_count: Option<usize>,
) -> Option<String> {
    file_failure
        .or(scene_failure)
        .or_else(|| (scene_count == Some(0)).then(|| "file contains no scenes".to_string()))
}

fn on_model_instance_ready(
    trigger: Trigger<SceneInstanceReady>,
    slot: Res<ModelSlot>,
    mut setup: ModelSetup,
    mut finished: EventWriter<ModelLoadFinished>,
) {
    let root = trigger.target();
    let ModelSlot::Loading { entity, path, .. } = &*slot else {
        return;
    };
    if *entity != root {
        return;
    }

    finished.write(ModelLoadFinished(setup.prepare(root, path)));
}

/// Everything needed to turn a freshly instanced scene into the viewer model.
#[derive(SystemParam)]
pub struct ModelSetup<'w, 's> {
    commands: Commands<'w, 's>,
    mesh_assets: Res<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    children: Query<'w, 's, &'static Children>,
    meshes: Query<'w, 's, &'static Mesh3d>,
    parents: Query<'w, 's, &'static ChildOf>,
    transforms: Query<'w, 's, &'static mut Transform>,
}

impl ModelSetup<'_, '_> {
    /// Swap every mesh material for the shared physical one, then scale the
    /// root so its largest dimension is [`MODEL_TARGET_SIZE`] and centre it
    /// horizontally. Nothing is changed when the model turns out unusable.
    pub fn prepare(&mut self, root: Entity, path: &str) -> ModelLoadOutcome {
        let mut mesh_entities = Vec::new();
        let mut bounds = ModelBounds::default();

        for descendant in self.children.iter_descendants(root) {
            let Ok(mesh) = self.meshes.get(descendant) else {
                continue;
            };
            mesh_entities.push(descendant);

            let Some(aabb) = self.mesh_assets.get(&mesh.0).and_then(Mesh::compute_aabb) else {
                continue;
            };
            let to_root = self.affine_to_root(descendant, root);
            bounds.include_box(aabb.min().into(), aabb.max().into(), &to_root);
        }

        if mesh_entities.is_empty() {
            return Err(ModelLoadError::NoMeshes {
                path: path.to_string(),
            });
        }

        let Some(normalisation) = Normalisation::fit(&bounds, MODEL_TARGET_SIZE) else {
            return Err(ModelLoadError::DegenerateBounds {
                path: path.to_string(),
                max_extent: bounds.max_extent(),
            });
        };

        let material = self.materials.add(physical_material());
        for &mesh_entity in &mesh_entities {
            self.commands
                .entity(mesh_entity)
                .insert(MeshMaterial3d(material.clone()));
        }

        if let Ok(mut transform) = self.transforms.get_mut(root) {
            transform.scale = Vec3::splat(normalisation.scale);
            transform.translation.x += normalisation.offset_x;
        }
        self.commands.entity(root).insert(Visibility::Visible);

        info!(
            "Model prepared: {} meshes, size {:?}, scale {:.4}, x offset {:.3}",
            mesh_entities.len(),
            bounds.size(),
            normalisation.scale,
            normalisation.offset_x
        );

        Ok(ModelReady {
            entity: root,
            material,
            scale: normalisation.scale,
        })
    }

    /// Compose local transforms from `entity` up to, but not including, `root`.
    fn affine_to_root(&self, entity: Entity, root: Entity) -> Affine3A {
        let mut affine = Affine3A::IDENTITY;
        let mut current = entity;
        while current != root {
            if let Ok(transform) = self.transforms.get(current) {
                affine = transform.compute_affine() * affine;
            }
            let Ok(child_of) = self.parents.get(current) else {
                break;
            };
            current = child_of.parent();
        }
        affine
    }
}

/// Record the load outcome in the slot. A failed model is despawned and the
/// viewer carries on without one.
pub fn settle_model_slot(
    mut finished: EventReader<ModelLoadFinished>,
    mut slot: ResMut<ModelSlot>,
    mut commands: Commands,
) {
    for ModelLoadFinished(outcome) in finished.read() {
        let staged = match &*slot {
            ModelSlot::Loading { entity, .. } => Some(*entity),
            _ => None,
        };
        if !slot.settle(outcome) {
            continue;
        }

        match outcome {
            Ok(ready) => info!("✓ Model ready (scale {:.4})", ready.scale),
            Err(error) => {
                error!("{error}; continuing without a model");
                if let Some(entity) = staged {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}
