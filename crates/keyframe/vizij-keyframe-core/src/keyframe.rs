//! Keyframe value record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interp::{lerp_f32, lerp_vec3};

/// A timed 3D sample.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub time: f32,
}

impl Keyframe {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, time: f32) -> Self {
        Self { x, y, z, time }
    }

    #[inline]
    pub fn position(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Blend every field, `time` included, towards `other`.
    /// `t` outside [0,1] extrapolates.
    #[inline]
    pub fn lerp(&self, other: &Keyframe, t: f32) -> Keyframe {
        let [x, y, z] = lerp_vec3(self.position(), other.position(), t);
        Keyframe {
            x,
            y,
            z,
            time: lerp_f32(self.time, other.time, t),
        }
    }
}

impl fmt::Display for Keyframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(X:{}, Y:{}, Z:{} Time:{})",
            self.x, self.y, self.z, self.time
        )
    }
}
