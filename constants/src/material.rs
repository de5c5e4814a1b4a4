//! Physical material recipe applied to every mesh of the loaded model.

/// Bright magenta base.
pub const BASE_COLOUR: u32 = 0xE100FF;
pub const METALLIC: f32 = 1.0;
pub const ROUGHNESS: f32 = 0.2;
pub const CLEARCOAT: f32 = 1.0;
pub const CLEARCOAT_ROUGHNESS: f32 = 0.1;

/// Purple glow.
pub const EMISSIVE_COLOUR: u32 = 0x9400D3;
pub const EMISSIVE_INTENSITY: f32 = 0.3;

pub const REFLECTANCE: f32 = 1.0;
pub const IOR: f32 = 2.0;
