//! Fixed recipe shared by the scroll viewer: camera, light rig, material,
//! animation keyframes and host page identifiers.

pub mod animation;
pub mod camera;
pub mod lighting;
pub mod material;
pub mod page;
