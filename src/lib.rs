//! Bodyscene - rigid-body scene description generator

pub mod core;
pub mod layout;
pub mod scene;
pub mod generation;
