//! Scene generation configuration.
//!
//! Every struct deserializes from JSON with all fields optional; missing fields take
//! the defaults below, which reproduce the stock scenes.

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::core::Result;
use crate::layout::{GridLayout, Palette, RingLayout, ShelfLayout};

/// Ground plane settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub name: String,
    pub p: String,
    pub n: String,
    pub friction: Option<String>,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            name: "plane".to_string(),
            p: "0 0 0".to_string(),
            n: "0. 1. 0.0".to_string(),
            friction: Some("0.001".to_string()),
        }
    }
}

/// Torso meshes laid out on a grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorsoGridConfig {
    pub count: usize,
    /// Bodies are named `{name_prefix}{index}`.
    pub name_prefix: String,
    pub grid: GridLayout,
    pub scale: String,
    pub obj: String,
    pub st: String,
    pub orientation: String,
    pub friction: String,
    pub density: String,
}

impl Default for TorsoGridConfig {
    fn default() -> Self {
        Self {
            count: 15,
            name_prefix: "venus".to_string(),
            grid: GridLayout::default(),
            scale: "0.23".to_string(),
            obj: "data/scaledtorso10.obj".to_string(),
            st: "data/torso_flux.sph".to_string(),
            orientation: "1 0 0 -2".to_string(),
            friction: "0.6".to_string(),
            density: "0.1".to_string(),
        }
    }
}

/// Root attributes of the chariot composite. The wheel and basket parts are fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChariotConfig {
    pub name: String,
    pub obj: Option<String>,
    pub scale: Option<String>,
    pub position: String,
    pub velocity: Option<String>,
    pub color: Option<String>,
}

impl Default for ChariotConfig {
    fn default() -> Self {
        Self {
            name: "chariot".to_string(),
            obj: Some("data/chariot.obj".to_string()),
            scale: Some("0.1".to_string()),
            position: "-20. 2.7 0.".to_string(),
            velocity: Some("0. 0. 0.".to_string()),
            color: Some("0.7 0. 0. 1.".to_string()),
        }
    }
}

/// Bookcase frame plus the free books resting on its shelves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookcaseConfig {
    pub name: String,
    pub position: String,
    pub color: Option<String>,
    pub shelves: ShelfLayout,
    pub shelf_dim: String,
    pub wall_dim: String,
    /// X offset of the side walls from the bookcase center.
    pub wall_offset: f64,
    /// Height of the side walls' centers.
    pub wall_y: f64,
    pub book_dim: String,
    pub book_friction: String,
    pub book_density: String,
    pub palette: Palette,
}

impl Default for BookcaseConfig {
    fn default() -> Self {
        Self {
            name: "bookCase".to_string(),
            position: "-40. 0. -10.".to_string(),
            color: Some("0.33 0.15 0.05 1.".to_string()),
            shelves: ShelfLayout::default(),
            shelf_dim: "10.2 0.2 4".to_string(),
            wall_dim: "0.2 20 4".to_string(),
            wall_offset: 5.0,
            wall_y: 10.0,
            book_dim: "0.4 2 1.5".to_string(),
            book_friction: "0.3".to_string(),
            book_density: "1".to_string(),
            palette: Palette::books(),
        }
    }
}

/// The chariot, torsos and bookcase scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChariotVenusConfig {
    /// Seed for color selection. `None` picks a fresh seed per run.
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub ground: GroundConfig,
    pub torsos: TorsoGridConfig,
    pub chariot: ChariotConfig,
    pub bookcase: BookcaseConfig,
}

impl Default for ChariotVenusConfig {
    fn default() -> Self {
        Self {
            seed: None,
            output: PathBuf::from("../chariotvenus.xml"),
            ground: GroundConfig::default(),
            torsos: TorsoGridConfig::default(),
            chariot: ChariotConfig::default(),
            bookcase: BookcaseConfig::default(),
        }
    }
}

/// A ring tower of boxes standing on a plane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenseTowerConfig {
    pub seed: Option<u64>,
    pub output: PathBuf,
    pub plane_name: String,
    /// Extra drop of the plane below the ring floor.
    pub plane_gap: f64,
    pub ring: RingLayout,
    /// Density of blocks on even layers.
    pub heavy_density: String,
    /// Density of blocks on odd layers.
    pub light_density: String,
    /// Color of blocks on even layers.
    pub heavy_color: String,
    /// Colors of blocks on odd layers.
    pub palette: Palette,
}

impl Default for DenseTowerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            output: PathBuf::from("scenes3D/denseTower25.xml"),
            plane_name: "plane1".to_string(),
            plane_gap: 0.0,
            ring: RingLayout::default(),
            heavy_density: "100".to_string(),
            light_density: "1".to_string(),
            heavy_color: "0 0 0".to_string(),
            palette: Palette::blocks(),
        }
    }
}

/// Load any scene config from a JSON file (sync).
pub fn load_sync<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// RNG for color selection, seeded when a seed is given.
pub fn scene_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_stock_scene() {
        let config = ChariotVenusConfig::default();
        assert_eq!(config.output, PathBuf::from("../chariotvenus.xml"));
        assert_eq!(config.torsos.count, 15);
        assert_eq!(config.bookcase.palette.len(), 4);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ChariotVenusConfig =
            serde_json::from_str(r#"{ "seed": 3, "torsos": { "count": 4 } }"#).unwrap();
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.torsos.count, 4);
        assert_eq!(config.torsos.name_prefix, "venus");
        assert_eq!(config.chariot, ChariotConfig::default());
    }

    #[test]
    fn test_nested_layout_json() {
        let config: DenseTowerConfig =
            serde_json::from_str(r#"{ "ring": { "layers": 2, "radius": 5.0 } }"#).unwrap();
        assert_eq!(config.ring.layers, 2);
        assert_eq!(config.ring.radius, 5.0);
        assert_eq!(config.ring.block, [2.0, 2.0, 4.0]);
    }

    #[test]
    fn test_load_sync() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("tower.json");
        std::fs::write(&path, r#"{ "plane_name": "ground", "seed": 9 }"#).unwrap();

        let config: DenseTowerConfig = load_sync(&path).expect("load failed");
        assert_eq!(config.plane_name, "ground");
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_load_sync_bad_json() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result: Result<DenseTowerConfig> = load_sync(&path);
        assert!(matches!(result, Err(crate::core::Error::Config(_))));
    }

    #[test]
    fn test_load_sync_missing_file() {
        let result: Result<ChariotVenusConfig> = load_sync(Path::new("/nonexistent/scene.json"));
        assert!(matches!(result, Err(crate::core::Error::Io(_))));
    }
}
