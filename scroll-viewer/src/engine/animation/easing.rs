/// Cubic ease-in-out: `4t³` below the midpoint, `1 - (-2t + 2)³ / 2` from it on.
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Interpolate `start..end` with the eased parameter.
pub fn eased_lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease_in_out_cubic(t)
}

/// Same as [`eased_lerp`] over a `(start, end)` keyframe pair.
pub fn eased_keyframe((start, end): (f32, f32), t: f32) -> f32 {
    eased_lerp(start, end, t)
}
