use bevy::prelude::*;
use constants::animation::{
    ENTRANCE_BAND_END, ENTRANCE_Y, ENTRANCE_Z, EXIT_BAND_END, EXIT_SCALE, EXIT_Y, EXIT_Z,
    HIDDEN_SCALE, HIDDEN_Y, HIDDEN_Z, MODEL_ROTATION_TURN,
};

use crate::engine::animation::easing::eased_keyframe;
use crate::engine::animation::progress::ScrollProgress;
use crate::engine::animation::scroll_transform::ScrollPose;
use crate::engine::loading::model_slot::{ModelSlot, ScrollModel};

/// Raw-progress band with the local parameter inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PhaseBand {
    /// `[0, 0.2)`: rise from below to the centre.
    Entrance { t: f32 },
    /// `[0.2, 0.3)`: fly away while fading out.
    Exit { t: f32 },
    /// `>= 0.3`: parked and invisible.
    Hidden,
}

impl PhaseBand {
    pub fn of(progress: f32) -> Self {
        if progress < ENTRANCE_BAND_END {
            Self::Entrance {
                t: progress / ENTRANCE_BAND_END,
            }
        } else if progress < EXIT_BAND_END {
            Self::Exit {
                t: (progress - ENTRANCE_BAND_END) / (EXIT_BAND_END - ENTRANCE_BAND_END),
            }
        } else {
            Self::Hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTransform {
    pub y: f32,
    pub z: f32,
    pub scale: f32,
    pub rotation_y: f32,
    pub opacity: f32,
}

impl PhaseTransform {
    /// The entrance band keeps the scale of the continuous pose.
    pub fn at(progress: f32, continuous_scale: f32) -> Self {
        let rotation_y = progress * MODEL_ROTATION_TURN;
        match PhaseBand::of(progress) {
            PhaseBand::Entrance { t } => Self {
                y: eased_keyframe(ENTRANCE_Y, t),
                z: ENTRANCE_Z,
                scale: continuous_scale,
                rotation_y,
                opacity: 1.0,
            },
            PhaseBand::Exit { t } => Self {
                y: eased_keyframe(EXIT_Y, t),
                z: eased_keyframe(EXIT_Z, t),
                scale: eased_keyframe(EXIT_SCALE, t),
                rotation_y,
                opacity: 1.0 - t,
            },
            PhaseBand::Hidden => Self {
                y: HIDDEN_Y,
                z: HIDDEN_Z,
                scale: HIDDEN_SCALE,
                rotation_y,
                opacity: 0.0,
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Overrides the continuous pose with the banded one. Only scheduled when the
/// viewer runs in phased mode, after [`super::scroll_transform::apply_scroll_animation`].
pub fn apply_phase_bands(
    progress: Res<ScrollProgress>,
    slot: Res<ModelSlot>,
    mut models: Query<(&mut Transform, &mut Visibility), With<ScrollModel>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(ready) = slot.ready() else {
        return;
    };
    let Ok((mut transform, mut visibility)) = models.get_mut(ready.entity) else {
        return;
    };

    let pose = ScrollPose::at(progress.value());
    let phase = PhaseTransform::at(progress.value(), pose.model_scale);

    transform.translation.y = phase.y;
    transform.translation.z = phase.z;
    transform.scale = Vec3::splat(phase.scale);
    transform.rotation = Quat::from_euler(
        EulerRot::XYZ,
        pose.model_rotation.x,
        phase.rotation_y,
        pose.model_rotation.z,
    );

    let target_visibility = if phase.is_visible() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    visibility.set_if_neq(target_visibility);

    set_material_opacity(&mut materials, &ready.material, phase.opacity);
}

/// Switch the shared model material to blending and set its alpha.
/// Untouched when already at the requested opacity, so the asset is not
/// re-uploaded every frame.
pub fn set_material_opacity(
    materials: &mut Assets<StandardMaterial>,
    handle: &Handle<StandardMaterial>,
    opacity: f32,
) {
    let needs_update = materials
        .get(handle)
        .is_some_and(|material| {
            material.base_color.alpha() != opacity
                || !matches!(material.alpha_mode, AlphaMode::Blend)
        });
    if !needs_update {
        return;
    }

    if let Some(material) = materials.get_mut(handle) {
        material.alpha_mode = AlphaMode::Blend;
        material.base_color.set_alpha(opacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::loading::model_slot::ModelReady;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn bands_split_raw_progress() {
        assert_eq!(PhaseBand::of(0.0), PhaseBand::Entrance { t: 0.0 });
        assert!(matches!(PhaseBand::of(0.1), PhaseBand::Entrance { t } if (t - 0.5).abs() < 1e-6));
        assert_eq!(PhaseBand::of(0.2), PhaseBand::Exit { t: 0.0 });
        assert!(matches!(PhaseBand::of(0.25), PhaseBand::Exit { t } if (t - 0.5).abs() < 1e-5));
        assert_eq!(PhaseBand::of(0.3), PhaseBand::Hidden);
        assert_eq!(PhaseBand::of(1.0), PhaseBand::Hidden);
    }

    #[test]
    fn entrance_rises_from_below_at_constant_depth() {
        let start = PhaseTransform::at(0.0, 20.0);
        assert_eq!(start.y, -70.0);
        assert_eq!(start.z, 20.0);
        assert_eq!(start.scale, 20.0);
        assert_eq!(start.opacity, 1.0);

        let middle = PhaseTransform::at(0.1, 21.0);
        assert_close(middle.y, -35.0);
        assert_eq!(middle.scale, 21.0);
    }

    #[test]
    fn exit_fades_linearly() {
        let phase = PhaseTransform::at(0.25, 22.0);
        assert_close(phase.opacity, 0.5);
        assert_close(phase.y, 75.0);
        assert_close(phase.z, 60.0);
        assert_close(phase.scale, 15.0);
        assert!(phase.is_visible());
    }

    #[test]
    fn parked_and_invisible_after_exit() {
        let phase = PhaseTransform::at(0.8, 24.0);
        assert_eq!(phase.y, 150.0);
        assert_eq!(phase.z, 100.0);
        assert_eq!(phase.scale, 5.0);
        assert_eq!(phase.opacity, 0.0);
        assert!(!phase.is_visible());
        assert_close(phase.rotation_y, 0.8 * MODEL_ROTATION_TURN);
    }

    #[test]
    fn opacity_switches_material_to_blending() {
        let mut materials = Assets::<StandardMaterial>::default();
        let handle = materials.add(StandardMaterial::default());

        set_material_opacity(&mut materials, &handle, 0.25);

        let material = materials.get(&handle).unwrap();
        assert!(matches!(material.alpha_mode, AlphaMode::Blend));
        assert_eq!(material.base_color.alpha(), 0.25);
    }

    #[test]
    fn hidden_band_hides_the_model() {
        let mut app = App::new();
        app.init_resource::<Assets<StandardMaterial>>()
            .insert_resource(ScrollProgress(0.5))
            .add_systems(Update, apply_phase_bands);

        let material = app
            .world_mut()
            .resource_mut::<Assets<StandardMaterial>>()
            .add(StandardMaterial::default());
        let model = app
            .world_mut()
            .spawn((ScrollModel, Transform::default(), Visibility::Visible))
            .id();
        app.insert_resource(ModelSlot::Ready(ModelReady {
            entity: model,
            material: material.clone(),
            scale: 1.0,
        }));
        app.update();

        let world = app.world();
        assert_eq!(world.get::<Visibility>(model), Some(&Visibility::Hidden));
        let transform = world.get::<Transform>(model).unwrap();
        assert_eq!(transform.translation.y, 150.0);
        assert_eq!(transform.scale, Vec3::splat(5.0));
        let material = world.resource::<Assets<StandardMaterial>>().get(&material).unwrap();
        assert_eq!(material.base_color.alpha(), 0.0);
    }
}
