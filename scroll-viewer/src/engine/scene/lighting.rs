use std::f32::consts::PI;

use bevy::prelude::*;
use constants::camera::CAMERA_TARGET;
use constants::lighting::{
    AMBIENT_COLOUR, AMBIENT_INTENSITY, DIRECTIONAL_COLOUR, DIRECTIONAL_INTENSITY,
    DIRECTIONAL_POSITION, RIM_COLOUR, RIM_INTENSITY, RIM_POSITION, RIM_RANGE, SPOT_ANGLE,
    SPOT_COLOUR, SPOT_INTENSITY, SPOT_PENUMBRA, SPOT_POSITION,
};

use crate::engine::scene::material::colour_from_hex;

/// Marker on every light spawned by the rig.
#[derive(Component, Debug)]
pub struct RigLight;

/// Point and spot lights take luminous power; the recipe is in candela.
pub fn candela_to_lumens(candela: f32) -> f32 {
    candela * 4.0 * PI
}

/// Remove any existing lights, then install the fixed four-light rig.
/// Running it again leaves exactly one rig in the scene.
pub fn install_light_rig(
    mut commands: Commands,
    existing: Query<
        Entity,
        Or<(With<RigLight>, With<DirectionalLight>, With<PointLight>, With<SpotLight>)>,
    >,
) {
    for entity in &existing {
        commands.entity(entity).despawn();
    }

    commands.insert_resource(AmbientLight {
        color: colour_from_hex(AMBIENT_COLOUR),
        brightness: AMBIENT_INTENSITY,
        ..default()
    });

    // Main light for highlights
    commands.spawn((
        DirectionalLight {
            color: colour_from_hex(DIRECTIONAL_COLOUR),
            illuminance: DIRECTIONAL_INTENSITY,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_POSITION).looking_at(CAMERA_TARGET, Vec3::Y),
        RigLight,
        Name::new("MainLight"),
    ));

    commands.spawn((
        SpotLight {
            color: colour_from_hex(SPOT_COLOUR),
            intensity: candela_to_lumens(SPOT_INTENSITY),
            outer_angle: SPOT_ANGLE,
            inner_angle: SPOT_ANGLE * (1.0 - SPOT_PENUMBRA),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(SPOT_POSITION).looking_at(CAMERA_TARGET, Vec3::Y),
        RigLight,
        Name::new("SpotLight"),
    ));

    // Rim light
    commands.spawn((
        PointLight {
            color: colour_from_hex(RIM_COLOUR),
            intensity: candela_to_lumens(RIM_INTENSITY),
            range: RIM_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(RIM_POSITION),
        RigLight,
        Name::new("RimLight"),
    ));

    debug!("Light rig installed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn count<T: Component>(world: &mut World) -> usize {
        world.query_filtered::<(), With<T>>().iter(world).count()
    }

    #[test]
    fn rig_has_one_light_of_each_kind() {
        let mut world = World::new();
        world.run_system_once(install_light_rig).unwrap();

        assert_eq!(count::<DirectionalLight>(&mut world), 1);
        assert_eq!(count::<SpotLight>(&mut world), 1);
        assert_eq!(count::<PointLight>(&mut world), 1);
        assert_eq!(world.resource::<AmbientLight>().brightness, 0.8);
    }

    #[test]
    fn reinstalling_replaces_previous_lights() {
        let mut world = World::new();
        world.spawn(PointLight::default());
        world.run_system_once(install_light_rig).unwrap();
        world.run_system_once(install_light_rig).unwrap();

        assert_eq!(count::<RigLight>(&mut world), 3);
        assert_eq!(count::<PointLight>(&mut world), 1);
    }

    #[test]
    fn spot_penumbra_softens_inner_cone() {
        let mut world = World::new();
        world.run_system_once(install_light_rig).unwrap();

        let spot = world
            .query::<&SpotLight>()
            .single(&world)
            .unwrap();
        assert_eq!(spot.outer_angle, std::f32::consts::FRAC_PI_4);
        assert_eq!(spot.inner_angle, std::f32::consts::FRAC_PI_8);
        assert!((spot.intensity - 10.0 * 4.0 * PI).abs() < 1e-3);
    }
}
