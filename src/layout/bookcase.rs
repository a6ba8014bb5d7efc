//! Shelf and book placement for the bookcase scene.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Horizontal shift of the first book on even rows.
pub const EVEN_ROW_SHIFT: f64 = 4.8;
/// Horizontal shift of the first book on odd rows.
pub const ODD_ROW_SHIFT: f64 = 0.6;

/// Orientation of books on even rows.
pub const EVEN_ROW_ORIENTATION: &str = "0 0 -1 0.3";
/// Orientation of books on odd rows.
pub const ODD_ROW_ORIENTATION: &str = "0 0 1 0.3";
/// Every third row stands upright, whatever its parity.
pub const UPRIGHT_ORIENTATION: &str = "0 0 -1 0";

/// Rows of shelves stacked along +Y, with books lined up along +X on each.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelfLayout {
    /// Number of shelves (floors).
    pub rows: usize,
    /// Height of the first shelf.
    pub first_row_y: f64,
    pub row_pitch: f64,
    pub books_per_row: usize,
    /// X of the first book before the row shift is applied.
    pub book_origin_x: f64,
    pub book_pitch: f64,
    /// Distance from a shelf down to the center of the books resting on it.
    pub book_drop: f64,
    pub book_z: f64,
}

impl Default for ShelfLayout {
    fn default() -> Self {
        Self {
            rows: 8,
            first_row_y: 2.5,
            row_pitch: 2.5,
            books_per_row: 12,
            book_origin_x: -45.0,
            book_pitch: 0.42,
            book_drop: 1.39,
            book_z: -10.0,
        }
    }
}

impl ShelfLayout {
    /// Height of shelf `row`.
    pub fn shelf_y(&self, row: usize) -> f64 {
        row as f64 * self.row_pitch + self.first_row_y
    }

    /// Whether books are placed on `row`. The bottom row stays empty.
    pub fn has_books(&self, row: usize) -> bool {
        row > 0
    }

    /// Position of book `book` on `row`.
    pub fn book_position(&self, row: usize, book: usize) -> DVec3 {
        DVec3::new(
            self.book_origin_x + book_shift(row) + self.book_pitch * book as f64,
            self.shelf_y(row) - self.book_drop,
            self.book_z,
        )
    }
}

/// Shift applied to every book on `row`.
pub fn book_shift(row: usize) -> f64 {
    if row % 2 == 0 { EVEN_ROW_SHIFT } else { ODD_ROW_SHIFT }
}

/// Axis-angle orientation of the books on `row`.
pub fn book_orientation(row: usize) -> &'static str {
    if row % 3 == 0 {
        return UPRIGHT_ORIENTATION;
    }
    if row % 2 == 0 { EVEN_ROW_ORIENTATION } else { ODD_ROW_ORIENTATION }
}
