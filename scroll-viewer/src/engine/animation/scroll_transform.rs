use bevy::prelude::*;
use constants::animation::{CAMERA_Z, MODEL_ROTATION_TURN, MODEL_SCALE, MODEL_Y, MODEL_Z};

use crate::engine::animation::easing::eased_keyframe;
use crate::engine::animation::progress::ScrollProgress;
use crate::engine::camera::viewer_camera::ViewerCamera;
use crate::engine::loading::model_slot::{ModelSlot, ScrollModel};

/// Camera and model placement for one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPose {
    pub camera_z: f32,
    pub model_y: f32,
    pub model_z: f32,
    /// Euler angles (XYZ order), the same turn on every axis.
    pub model_rotation: Vec3,
    pub model_scale: f32,
}

impl ScrollPose {
    pub fn at(progress: f32) -> Self {
        // Rotation follows progress linearly, everything else is eased.
        let turn = progress * MODEL_ROTATION_TURN;
        Self {
            camera_z: eased_keyframe(CAMERA_Z, progress),
            model_y: eased_keyframe(MODEL_Y, progress),
            model_z: eased_keyframe(MODEL_Z, progress),
            model_rotation: Vec3::splat(turn),
            model_scale: eased_keyframe(MODEL_SCALE, progress),
        }
    }

    pub fn model_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.model_rotation.x,
            self.model_rotation.y,
            self.model_rotation.z,
        )
    }

    /// Writes y, z, rotation and scale. `x` keeps its horizontal centring offset.
    pub fn apply_to_model(&self, transform: &mut Transform) {
        transform.translation.y = self.model_y;
        transform.translation.z = self.model_z;
        transform.rotation = self.model_quat();
        transform.scale = Vec3::splat(self.model_scale);
    }
}

/// Re-apply the scroll pose every frame, not only when the page scrolls.
/// Nothing moves until a model is ready.
pub fn apply_scroll_animation(
    progress: Res<ScrollProgress>,
    slot: Res<ModelSlot>,
    mut cameras: Query<&mut Transform, (With<ViewerCamera>, Without<ScrollModel>)>,
    mut models: Query<&mut Transform, (With<ScrollModel>, Without<ViewerCamera>)>,
) {
    let Some(ready) = slot.ready() else {
        return;
    };
    let pose = ScrollPose::at(progress.value());

    if let Ok(mut camera) = cameras.single_mut() {
        camera.translation.z = pose.camera_z;
    }

    if let Ok(mut model) = models.get_mut(ready.entity) {
        pose.apply_to_model(&mut model);
    }
}
