use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::camera::Exposure;
use bevy::window::PrimaryWindow;
use constants::camera::{
    CAMERA_EV100, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START_POSITION,
    CAMERA_TARGET, MAX_PIXEL_RATIO,
};

use crate::engine::assets::viewer_config::ViewerConfig;
use crate::engine::camera::orbit_controller::OrbitController;
use crate::host::metrics::ViewportResized;

#[derive(Component, Debug, Default)]
pub struct ViewerCamera;

/// Renderer output size in logical pixels plus the pixel ratio in use.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            pixel_ratio: 1.0,
        }
    }
}

/// Device pixel ratio bounded by `max`. Unusable ratios count as 1.
pub fn capped_pixel_ratio(device_pixel_ratio: f32, max: f32) -> f32 {
    if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
        return 1.0;
    }
    device_pixel_ratio.min(max)
}

pub fn viewer_projection() -> PerspectiveProjection {
    PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    }
}

pub fn spawn_viewer_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Camera {
            // Transparent so the page shows through the canvas.
            clear_color: ClearColorConfig::Custom(Color::NONE),
            ..default()
        },
        Projection::Perspective(viewer_projection()),
        Transform::from_translation(CAMERA_START_POSITION).looking_at(CAMERA_TARGET, Vec3::Y),
        Msaa::Sample4,
        Tonemapping::None,
        Exposure { ev100: CAMERA_EV100 },
        OrbitController::new(CAMERA_TARGET),
        ViewerCamera,
        Name::new("ViewerCamera"),
    ));
}

/// Apply damping preference from the resolved configuration.
pub fn configure_orbit_damping(
    config: Res<ViewerConfig>,
    mut controllers: Query<&mut OrbitController, With<ViewerCamera>>,
) {
    for mut controller in &mut controllers {
        controller.damping = config.orbit_damping;
    }
}

/// Only the aspect ratio follows the viewport; field of view and clip planes stay.
pub fn resize_projection(projection: &mut Projection, width: f32, height: f32) {
    if let Projection::Perspective(perspective) = projection {
        perspective.aspect_ratio = width / height;
    }
}

/// Follow viewport changes: camera aspect, renderer size and capped pixel ratio.
pub fn handle_viewport_resize(
    mut resized: EventReader<ViewportResized>,
    config: Option<Res<ViewerConfig>>,
    mut viewport: ResMut<ViewportSize>,
    mut projections: Query<&mut Projection, With<ViewerCamera>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Some(event) = resized.read().last() else {
        return;
    };
    if event.width <= 0.0 || event.height <= 0.0 {
        debug!("Ignoring empty viewport {}x{}", event.width, event.height);
        return;
    }

    let max_pixel_ratio = config.map_or(MAX_PIXEL_RATIO, |config| config.max_pixel_ratio);
    let pixel_ratio = capped_pixel_ratio(event.device_pixel_ratio, max_pixel_ratio);

    for mut projection in &mut projections {
        resize_projection(&mut projection, event.width, event.height);
    }

    viewport.set_if_neq(ViewportSize {
        width: event.width,
        height: event.height,
        pixel_ratio,
    });

    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    if window.resolution.scale_factor_override() != Some(pixel_ratio) {
        window.resolution.set_scale_factor_override(Some(pixel_ratio));
    }

    // The page drives the canvas size; natively the window already has it.
    #[cfg(target_arch = "wasm32")]
    {
        if window.width() != event.width || window.height() != event.height {
            window.resolution.set(event.width, event.height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resize_app() -> App {
        let mut app = App::new();
        app.add_event::<ViewportResized>()
            .init_resource::<ViewportSize>()
            .add_systems(Update, handle_viewport_resize);
        app
    }

    fn spawn_camera(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                ViewerCamera,
                Projection::Perspective(viewer_projection()),
                Transform::from_translation(CAMERA_START_POSITION),
            ))
            .id()
    }

    fn perspective(app: &App, camera: Entity) -> PerspectiveProjection {
        match app.world().get::<Projection>(camera).unwrap() {
            Projection::Perspective(perspective) => perspective.clone(),
            other => panic!("unexpected projection {other:?}"),
        }
    }

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(capped_pixel_ratio(1.0, 2.0), 1.0);
        assert_eq!(capped_pixel_ratio(1.5, 2.0), 1.5);
        assert_eq!(capped_pixel_ratio(3.0, 2.0), 2.0);
        assert_eq!(capped_pixel_ratio(0.0, 2.0), 1.0);
        assert_eq!(capped_pixel_ratio(f32::NAN, 2.0), 1.0);
    }

    #[test]
    fn resize_updates_aspect_and_output_size_only() {
        let mut app = resize_app();
        let camera = spawn_camera(&mut app);
        let before = perspective(&app, camera);

        app.world_mut().send_event(ViewportResized {
            width: 1600.0,
            height: 900.0,
            device_pixel_ratio: 3.0,
        });
        app.update();

        let after = perspective(&app, camera);
        assert_eq!(after.aspect_ratio, 1600.0 / 900.0);
        assert_eq!(after.fov, before.fov);
        assert_eq!(after.near, before.near);
        assert_eq!(after.far, before.far);
        assert_eq!(
            app.world().get::<Transform>(camera).unwrap().translation,
            CAMERA_START_POSITION
        );

        let viewport = *app.world().resource::<ViewportSize>();
        assert_eq!(
            viewport,
            ViewportSize {
                width: 1600.0,
                height: 900.0,
                pixel_ratio: 2.0,
            }
        );
    }

    #[test]
    fn configured_pixel_ratio_cap_applies() {
        let mut app = resize_app();
        app.insert_resource(ViewerConfig {
            max_pixel_ratio: 1.25,
            ..default()
        });
        spawn_camera(&mut app);

        app.world_mut().send_event(ViewportResized {
            width: 800.0,
            height: 600.0,
            device_pixel_ratio: 2.0,
        });
        app.update();

        assert_eq!(app.world().resource::<ViewportSize>().pixel_ratio, 1.25);
    }

    #[test]
    fn empty_viewport_is_ignored() {
        let mut app = resize_app();
        let camera = spawn_camera(&mut app);
        let before = perspective(&app, camera);

        app.world_mut().send_event(ViewportResized {
            width: 800.0,
            height: 0.0,
            device_pixel_ratio: 1.0,
        });
        app.update();

        assert_eq!(perspective(&app, camera).aspect_ratio, before.aspect_ratio);
        assert_eq!(*app.world().resource::<ViewportSize>(), ViewportSize::default());
    }

    #[test]
    fn projection_matches_recipe() {
        let projection = viewer_projection();
        assert_eq!(projection.fov, 45f32.to_radians());
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 1000.0);
    }
}
