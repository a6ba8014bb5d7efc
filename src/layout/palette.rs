//! Random color selection from a fixed set.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// RGBA colors used for books.
pub const BOOK_COLORS: [&str; 4] = [
    "0.3 0.3 0.3 1.",
    "0.2 0.5 0.2 1.",
    "0.3 0.3 0.5 1.",
    "0.7 0.7 0.5 1.",
];

/// RGB colors used for tower blocks.
pub const BLOCK_COLORS: [&str; 6] = [
    "0.8 0.5 0.5",
    "0.5 0.5 0.8",
    "0.5 0.8 0.5",
    "0.8 0.8 0.5",
    "0.5 0.8 0.8",
    "0.8 0.5 0.8",
];

/// A list of color strings to pick from uniformly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    pub colors: Vec<String>,
}

impl Palette {
    pub fn new<S: Into<String>>(colors: impl IntoIterator<Item = S>) -> Self {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn books() -> Self {
        Self::new(BOOK_COLORS)
    }

    pub fn blocks() -> Self {
        Self::new(BLOCK_COLORS)
    }

    /// Pick a color. Returns `None` for an empty palette.
    pub fn pick(&self, rng: &mut impl Rng) -> Option<&str> {
        if self.colors.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.colors.len());
        Some(self.colors[index].as_str())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
