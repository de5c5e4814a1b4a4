use bevy::prelude::*;
use constants::material::{
    BASE_COLOUR, CLEARCOAT, CLEARCOAT_ROUGHNESS, EMISSIVE_COLOUR, EMISSIVE_INTENSITY, IOR,
    METALLIC, REFLECTANCE, ROUGHNESS,
};

/// sRGB colour from a `0xRRGGBB` value.
pub fn colour_from_hex(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// The glossy metallic magenta that replaces every authored material of the model.
pub fn physical_material() -> StandardMaterial {
    let emissive = colour_from_hex(EMISSIVE_COLOUR).to_linear();
    StandardMaterial {
        base_color: colour_from_hex(BASE_COLOUR),
        metallic: METALLIC,
        perceptual_roughness: ROUGHNESS,
        clearcoat: CLEARCOAT,
        clearcoat_perceptual_roughness: CLEARCOAT_ROUGHNESS,
        emissive: LinearRgba::rgb(
            emissive.red * EMISSIVE_INTENSITY,
            emissive.green * EMISSIVE_INTENSITY,
            emissive.blue * EMISSIVE_INTENSITY,
        ),
        reflectance: REFLECTANCE,
        ior: IOR,
        ..default()
    }
}
