use bevy::math::Affine3A;
use bevy::prelude::*;

/// Axis-aligned bounds of a model in its root's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for ModelBounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ModelBounds {
    /// Contains nothing; the first included point becomes both corners.
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    #[cfg(test)]
    pub fn from_corners(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    pub fn include_point(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grow to contain a mesh-space box placed by `to_root`.
    /// All eight corners are transformed so rotated meshes are covered.
    pub fn include_box(&mut self, min: Vec3, max: Vec3, to_root: &Affine3A) {
        for corner_index in 0..8 {
            let corner = Vec3::new(
                if corner_index & 1 == 0 { min.x } else { max.x },
                if corner_index & 2 == 0 { min.y } else { max.y },
                if corner_index & 4 == 0 { min.z } else { max.z },
            );
            self.include_point(to_root.transform_point3(corner));
        }
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::ZERO;
        }
        self.max - self.min
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Largest of width, height and depth.
    pub fn max_extent(&self) -> f32 {
        self.size().max_element()
    }
}

/// Uniform scale and horizontal shift that bring a model to a common size,
/// centred on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalisation {
    pub scale: f32,
    /// Added to the root's x position.
    pub offset_x: f32,
}

impl Normalisation {
    /// `None` when the bounds have no usable extent.
    pub fn fit(bounds: &ModelBounds, target_size: f32) -> Option<Self> {
        let max_extent = bounds.max_extent();
        if bounds.is_empty() || !max_extent.is_finite() || max_extent <= 0.0 {
            return None;
        }
        let scale = target_size / max_extent;
        Some(Self {
            scale,
            offset_x: -bounds.center().x * scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_have_no_extent() {
        let bounds = ModelBounds::default();
        assert!(bounds.is_empty());
        assert_eq!(bounds.size(), Vec3::ZERO);
        assert!(Normalisation::fit(&bounds, 20.0).is_none());
    }

    #[test]
    fn boxes_accumulate_through_their_transforms() {
        let mut bounds = ModelBounds::default();
        bounds.include_box(Vec3::splat(-1.0), Vec3::splat(1.0), &Affine3A::IDENTITY);
        bounds.include_box(
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
            &Affine3A::from_translation(Vec3::new(4.0, 0.0, 0.0)),
        );

        assert_eq!(bounds.min, Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, Vec3::new(5.0, 1.0, 1.0));
        assert_eq!(bounds.center(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(bounds.max_extent(), 6.0);
    }

    #[test]
    fn rotated_boxes_cover_all_corners() {
        let mut bounds = ModelBounds::default();
        let quarter_turn = Affine3A::from_rotation_z(std::f32::consts::FRAC_PI_2);
        bounds.include_box(Vec3::new(0.0, 0.0, 0.0), Vec3::new(4.0, 1.0, 1.0), &quarter_turn);

        let size = bounds.size();
        assert!((size.x - 1.0).abs() < 1e-5);
        assert!((size.y - 4.0).abs() < 1e-5);
    }

    #[test]
    fn scale_maps_largest_extent_to_target() {
        let bounds = ModelBounds::from_corners(Vec3::new(2.0, -1.0, 0.0), Vec3::new(10.0, 3.0, 2.0));
        let normalisation = Normalisation::fit(&bounds, 20.0).unwrap();

        assert_eq!(normalisation.scale, 20.0 / 8.0);
        let centred_x = bounds.center().x * normalisation.scale + normalisation.offset_x;
        assert_eq!(centred_x, 0.0);
    }

    #[test]
    fn flat_model_still_normalises() {
        let bounds = ModelBounds::from_corners(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(5.0, 0.0, 5.0));
        let normalisation = Normalisation::fit(&bounds, 20.0).unwrap();
        assert_eq!(normalisation.scale, 2.0);
        assert_eq!(normalisation.offset_x, 0.0);
    }

    #[test]
    fn point_model_is_degenerate() {
        let bounds = ModelBounds::from_corners(Vec3::ONE, Vec3::ONE);
        assert!(Normalisation::fit(&bounds, 20.0).is_none());
    }
}
