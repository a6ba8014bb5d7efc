//! Dense tower scene: rings of boxes stacked on a plane.
//!
//! Blocks carry their position, rotation and color as text sub-elements (`x`, `R`,
//! `col`) rather than attributes.

use rand::Rng;

use crate::core::Result;
use crate::layout::{fmt_scalar, fmt_tokens, fmt_vec3};
use crate::scene::{BoxConfig, PlaneConfig, SceneDocument, SceneNodeId};

use super::config::DenseTowerConfig;

/// Build the whole scene.
pub fn build(config: &DenseTowerConfig, rng: &mut impl Rng) -> Result<SceneDocument> {
    let mut doc = SceneDocument::new();
    let root = doc.root();
    let ring = &config.ring;

    let plane_y = ring.floor_y - config.plane_gap;
    doc.add_plane(
        root,
        &PlaneConfig {
            name: config.plane_name.clone(),
            p: Some(format!("0 {} 0", fmt_scalar(plane_y))),
            n: Some("0 1 0".to_string()),
            friction: None,
        },
    )?;

    let dim = fmt_tokens(&ring.block);
    let count = ring.blocks_per_layer();
    for layer in 0..ring.layers {
        for i in 0..count {
            add_block(&mut doc, root, config, &dim, i, layer, rng)?;
        }
    }

    log::info!(
        "Built dense tower: {} layers of {} blocks",
        ring.layers,
        count
    );
    Ok(doc)
}

fn add_block(
    doc: &mut SceneDocument,
    parent: SceneNodeId,
    config: &DenseTowerConfig,
    dim: &str,
    index: usize,
    layer: usize,
    rng: &mut impl Rng,
) -> Result<SceneNodeId> {
    let heavy = layer % 2 == 0;
    let density = if heavy { &config.heavy_density } else { &config.light_density };

    let block = doc.add_box(
        parent,
        &BoxConfig {
            name: format!("B{index}L{layer}"),
            dim: Some(dim.to_string()),
            density: Some(density.clone()),
            ..Default::default()
        },
    )?;

    let ring = &config.ring;
    doc.add_text_element(block, "x", fmt_vec3(ring.position(index, layer)));
    // Rotation about -Y by the block's angle around the ring
    doc.add_text_element(block, "R", fmt_tokens(&[0.0, -1.0, 0.0, ring.angle(index, layer)]));

    let color = if heavy {
        Some(config.heavy_color.as_str())
    } else {
        config.palette.pick(rng)
    };
    if let Some(color) = color {
        doc.add_text_element(block, "col", color);
    }

    Ok(block)
}
