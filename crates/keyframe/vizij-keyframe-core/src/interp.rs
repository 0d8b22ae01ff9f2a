//! Interpolation helpers:
//! - lerp_f32 / lerp_vec3 (component-wise linear blend)
//! - interpolate (optional keyframes, `None` propagates)

use crate::keyframe::Keyframe;

/// Blend factor used when callers do not pick one.
pub const DEFAULT_BLEND: f32 = 0.5;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

#[inline]
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// Blend two lookup results. Yields `None` if either side is missing.
#[inline]
pub fn interpolate(a: Option<Keyframe>, b: Option<Keyframe>, t: f32) -> Option<Keyframe> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.lerp(&b, t)),
        _ => None,
    }
}

#[inline]
pub fn interpolate_midpoint(a: Option<Keyframe>, b: Option<Keyframe>) -> Option<Keyframe> {
    interpolate(a, b, DEFAULT_BLEND)
}
