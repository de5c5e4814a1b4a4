use std::f32::consts::{PI, TAU};

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use constants::camera::{ORBIT_DAMPING_FACTOR, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED};

use crate::engine::camera::viewer_camera::ViewportSize;

/// Spherical coordinates around a Y-up target: `phi` from +Y, `theta` around Y from +Z.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            theta: offset.x.atan2(offset.z),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep `phi` off the poles where the view direction would be parallel to up.
    pub fn make_safe(mut self) -> Self {
        self.phi = self.phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self
    }
}

/// Orbit-style camera control around a fixed target.
///
/// Drag input accumulates a pending rotation; [`OrbitController::update`]
/// applies it to the camera once per frame. With damping only a fraction is
/// applied each frame and the rest decays, giving the camera inertia.
#[derive(Component, Debug, Clone)]
pub struct OrbitController {
    pub target: Vec3,
    pub enabled: bool,
    pub damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pending_theta: f32,
    pending_phi: f32,
}

impl OrbitController {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            enabled: true,
            damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            pending_theta: 0.0,
            pending_phi: 0.0,
        }
    }

    /// Queue rotation for a pointer drag. A drag the height of the viewport is one full turn.
    pub fn rotate_by_drag(&mut self, delta: Vec2, viewport_height: f32) {
        if !self.enabled || viewport_height <= 0.0 {
            return;
        }
        self.pending_theta -= TAU * delta.x / viewport_height * self.rotate_speed;
        self.pending_phi -= TAU * delta.y / viewport_height * self.rotate_speed;
    }

    #[cfg(test)]
    pub fn pending_rotation(&self) -> Vec2 {
        Vec2::new(self.pending_theta, self.pending_phi)
    }

    /// Re-orbit `transform` around the target from wherever it currently is
    /// and aim it at the target.
    pub fn update(&mut self, transform: &mut Transform) {
        let mut spherical = Spherical::from_offset(transform.translation - self.target);

        if self.damping {
            spherical.theta += self.pending_theta * self.damping_factor;
            spherical.phi += self.pending_phi * self.damping_factor;
        } else {
            spherical.theta += self.pending_theta;
            spherical.phi += self.pending_phi;
        }

        let spherical = spherical.make_safe();
        transform.translation = self.target + spherical.to_offset();
        transform.look_at(self.target, Vec3::Y);

        if self.damping {
            self.pending_theta *= 1.0 - self.damping_factor;
            self.pending_phi *= 1.0 - self.damping_factor;
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }
    }
}

/// Left-drag rotates. The wheel is left to the page, which scrolls.
pub fn orbit_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    viewport: Res<ViewportSize>,
    mut controllers: Query<&mut OrbitController>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if !mouse_button.pressed(MouseButton::Left) || mouse_delta == Vec2::ZERO {
        return;
    }

    for mut controller in &mut controllers {
        controller.rotate_by_drag(mouse_delta, viewport.height);
    }
}

/// Advance every controller by one frame.
pub fn update_orbit_controllers(mut controllers: Query<(&mut OrbitController, &mut Transform)>) {
    for (mut controller, mut transform) in &mut controllers {
        controller.update(&mut transform);
    }
}
