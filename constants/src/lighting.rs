use bevy::math::Vec3;

// Colours are 0xRRGGBB in sRGB.

pub const AMBIENT_COLOUR: u32 = 0xFFFFFF;
pub const AMBIENT_INTENSITY: f32 = 0.8;

/// Main highlight light. Intensity in lux.
pub const DIRECTIONAL_COLOUR: u32 = 0xFFFFFF;
pub const DIRECTIONAL_INTENSITY: f32 = 4.0;
pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(2.0, 5.0, 5.0);

/// Magenta spotlight. Intensity in candela.
pub const SPOT_COLOUR: u32 = 0xFF00FF;
pub const SPOT_INTENSITY: f32 = 10.0;
pub const SPOT_POSITION: Vec3 = Vec3::new(-5.0, 10.0, 5.0);
pub const SPOT_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
pub const SPOT_PENUMBRA: f32 = 0.5;

/// Indigo rim light. Intensity in candela, range in world units.
pub const RIM_COLOUR: u32 = 0x4B0082;
pub const RIM_INTENSITY: f32 = 3.0;
pub const RIM_RANGE: f32 = 100.0;
pub const RIM_POSITION: Vec3 = Vec3::new(5.0, -5.0, -5.0);
