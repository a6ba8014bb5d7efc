//! Placement arithmetic for generated scenes
//!
//! Everything here is pure: layouts turn an index into a position, and the
//! formatting helpers turn numbers into the space-separated tokens written to
//! body attributes.

pub mod bookcase;
pub mod format;
pub mod grid;
pub mod palette;
pub mod ring;

pub use bookcase::ShelfLayout;
pub use format::{fmt_scalar, fmt_tokens, fmt_vec3};
pub use grid::GridLayout;
pub use palette::Palette;
pub use ring::RingLayout;
