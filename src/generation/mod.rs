//! Scene generation: builds complete documents from a scene config.
//!
//! Each scene module exposes `build(config, rng)`, returning a [`SceneDocument`] ready
//! for export. The RNG is only used to pick colors.
//!
//! [`SceneDocument`]: crate::scene::SceneDocument

pub mod config;
pub mod chariot_venus;
pub mod dense_tower;

pub use config::{
    BookcaseConfig, ChariotConfig, ChariotVenusConfig, DenseTowerConfig, GroundConfig,
    TorsoGridConfig, load_sync, scene_rng,
};
