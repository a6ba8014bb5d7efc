//! Row-major grid placement on the XZ plane.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Places equally sized objects in rows of `columns`, starting at `origin`.
///
/// Element `i` goes to column `i % columns` and row `i / columns`. Columns advance
/// along +X by `size_x + gap`, rows along +Z by `size_z + gap`. Every element sits
/// at `origin.y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub origin: [f64; 3],
    pub size_x: f64,
    pub size_z: f64,
    pub gap: f64,
    pub columns: usize,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin: [-22.5, 4.0, -1.9],
            size_x: 1.3,
            size_z: 1.0,
            gap: 0.01,
            columns: 5,
        }
    }
}

impl GridLayout {
    /// Position of the element at `index`.
    pub fn position(&self, index: usize) -> DVec3 {
        let columns = self.columns.max(1);
        let column = (index % columns) as f64;
        let row = (index / columns) as f64;
        let origin = DVec3::from_array(self.origin);

        DVec3::new(
            origin.x + column * (self.size_x + self.gap),
            origin.y,
            origin.z + row * (self.size_z + self.gap),
        )
    }

    /// Positions of the first `count` elements.
    pub fn positions(&self, count: usize) -> impl Iterator<Item = DVec3> + '_ {
        (0..count).map(|i| self.position(i))
    }
}
