//! Stacked rings of blocks around the Y axis.

use std::f64::consts::{PI, SQRT_2, TAU};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Blocks of size `block` arranged in `layers` rings of `radius`, stacked upward from
/// `floor_y`. Odd layers are rotated by half a block so the joints interleave.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingLayout {
    pub radius: f64,
    pub layers: usize,
    /// Block extents along X, Y and Z.
    pub block: [f64; 3],
    pub floor_y: f64,
    /// Fraction of extra room left between blocks along the circumference.
    pub spacing: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            radius: 10.0,
            layers: 6,
            block: [2.0, 2.0, 4.0],
            floor_y: -10.0,
            spacing: 0.2,
        }
    }
}

impl RingLayout {
    /// Number of blocks that fit around one ring.
    pub fn blocks_per_layer(&self) -> usize {
        let length = self.block[2] * (1.0 + self.spacing);
        (TAU * self.radius / length).floor() as usize
    }

    /// Height of the blocks' centers on `layer`.
    ///
    /// The bounding sphere of a block reaches `√2 - 1` past its faces, so layers are
    /// spaced by that much extra.
    pub fn layer_y(&self, layer: usize) -> f64 {
        let margin = SQRT_2 - 1.0;
        self.floor_y + self.block[1] * 0.5 + margin + layer as f64 * (self.block[1] + margin)
    }

    /// Angle of block `index` around the ring on `layer`, in radians.
    pub fn angle(&self, index: usize, layer: usize) -> f64 {
        let count = self.blocks_per_layer().max(1) as f64;
        let mut radians = TAU * index as f64 / count;
        if layer % 2 == 1 {
            radians += PI / count;
        }
        radians
    }

    /// Center of block `index` on `layer`.
    pub fn position(&self, index: usize, layer: usize) -> DVec3 {
        let radians = self.angle(index, layer);
        DVec3::new(
            radians.cos() * self.radius,
            self.layer_y(layer),
            radians.sin() * self.radius,
        )
    }
}
