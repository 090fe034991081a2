/*

    Axis aligned 3D bounding volume, only as much of it
    as is needed to project it onto a Rectangle.

    Corner i picks max on x if bit 0 is set, on y if
    bit 1 is set and on z if bit 2 is set, so corner 0
    is min and corner 7 is max.

    @author: bartu
    @date: 9 Nov, 2025
*/


use crate::prelude::*;
use crate::interval::{Interval};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Bounds {
    #[serde(rename = "Min", deserialize_with = "deser_vec3")]
    pub min: Vector3,
    #[serde(rename = "Max", deserialize_with = "deser_vec3")]
    pub max: Vector3,
}

impl Bounds {

    pub const EMPTY: Self = Self {
        min: Vector3::INFINITY,
        max: Vector3::NEG_INFINITY,
    };

    pub fn new(min: Vector3, max: Vector3) -> Self {
        Self { min, max }
    }

    pub fn new_from(xint: &Interval, yint: &Interval, zint: &Interval) -> Self {
        Self {
            min: Vector3::new(xint.min, yint.min, zint.min),
            max: Vector3::new(xint.max, yint.max, zint.max),
        }
    }

    /// Out of range indices wrap around, only the lowest three bits are read.
    #[inline]
    pub fn corner(&self, index: usize) -> Vector3 {
        Vector3::new(
            if index & 1 == 0 { self.min.x } else { self.max.x },
            if index & 2 == 0 { self.min.y } else { self.max.y },
            if index & 4 == 0 { self.min.z } else { self.max.z },
        )
    }

    pub fn expand(&mut self, p: &Vector3) {
        self.min = self.min.min(*p);
        self.max = self.max.max(*p);
    }

    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Anything that can list the corners of its bounding volume.
pub trait BoundsCorners {
    fn corners(&self) -> [Vector3; 8];
}

impl BoundsCorners for Bounds {
    fn corners(&self) -> [Vector3; 8] {
        std::array::from_fn(|i| self.corner(i))
    }
}
