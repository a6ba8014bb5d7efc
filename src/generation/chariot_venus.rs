//! Chariot and torsos scene: a ground plane, a grid of torso meshes, a wheeled
//! chariot composite and a bookcase whose shelves hold rows of loose books.

use glam::DVec3;
use rand::Rng;

use crate::core::Result;
use crate::layout::bookcase::book_orientation;
use crate::layout::fmt_vec3;
use crate::scene::{
    BoxConfig, CompositeConfig, MeshConfig, PlaneConfig, SceneDocument, SceneNodeId, SphereConfig,
};

use super::config::{BookcaseConfig, ChariotConfig, ChariotVenusConfig, GroundConfig, TorsoGridConfig};

/// Wheels of the chariot: name and position in the chariot frame. All have radius 1.
const CHARIOT_WHEELS: [(&str, &str); 4] = [
    ("wheel1", " 3.15 -1.7  1.9"),
    ("wheel2", " 3.15 -1.7 -1.9"),
    ("wheel3", "-3.15 -1.7  1.9"),
    ("wheel4", "-3.15 -1.7 -1.9"),
];

const CHARIOT_WHEEL_RADIUS: &str = "1";

/// Basket panels of the chariot: name, position and extents.
const CHARIOT_BASKET: [(&str, &str, &str); 5] = [
    ("panier", "0.2 0.1 0.", "7.2 0.2 4"),
    ("panierb1", "0.2 0.75 -1.9", "7.2 1.5 0.2"),
    ("panierb2", "3.7 0.75 0.", "0.2 1.5 4"),
    ("panierb3", "0.2 0.75 1.9", "7.2 1.5 0.2"),
    ("panierb4", "-3.5 0.75 0.", "0.2 1.5 4"),
];

/// Build the whole scene.
pub fn build(config: &ChariotVenusConfig, rng: &mut impl Rng) -> Result<SceneDocument> {
    let mut doc = SceneDocument::new();
    let root = doc.root();

    add_ground(&mut doc, root, &config.ground)?;
    add_torsos(&mut doc, root, &config.torsos)?;
    add_chariot(&mut doc, root, &config.chariot)?;
    add_bookcase(&mut doc, root, &config.bookcase, rng)?;

    log::info!("Built chariot scene: {} bodies", doc.body_count());
    Ok(doc)
}

pub fn add_ground(doc: &mut SceneDocument, parent: SceneNodeId, ground: &GroundConfig) -> Result<SceneNodeId> {
    doc.add_plane(
        parent,
        &PlaneConfig {
            name: ground.name.clone(),
            p: Some(ground.p.clone()),
            n: Some(ground.n.clone()),
            friction: ground.friction.clone(),
        },
    )
}

pub fn add_torsos(doc: &mut SceneDocument, parent: SceneNodeId, torsos: &TorsoGridConfig) -> Result<()> {
    for (i, position) in torsos.grid.positions(torsos.count).enumerate() {
        doc.add_mesh(
            parent,
            &MeshConfig {
                name: format!("{}{}", torsos.name_prefix, i),
                scale: Some(torsos.scale.clone()),
                obj: Some(torsos.obj.clone()),
                st: Some(torsos.st.clone()),
                position: Some(fmt_vec3(position)),
                orientation: Some(torsos.orientation.clone()),
                friction: Some(torsos.friction.clone()),
                density: Some(torsos.density.clone()),
                ..Default::default()
            },
        )?;
    }
    Ok(())
}

pub fn add_chariot(doc: &mut SceneDocument, parent: SceneNodeId, chariot: &ChariotConfig) -> Result<SceneNodeId> {
    let mut composite = doc.add_composite(
        parent,
        &CompositeConfig {
            name: chariot.name.clone(),
            obj: chariot.obj.clone(),
            scale: chariot.scale.clone(),
            position: Some(chariot.position.clone()),
            velocity: chariot.velocity.clone(),
            color: chariot.color.clone(),
            ..Default::default()
        },
    )?;

    for (name, position) in CHARIOT_WHEELS {
        composite.add_sphere(SphereConfig {
            name: name.to_string(),
            position: Some(position.to_string()),
            radius: Some(CHARIOT_WHEEL_RADIUS.to_string()),
            ..Default::default()
        });
    }
    for (name, position, dim) in CHARIOT_BASKET {
        composite.add_box(BoxConfig {
            name: name.to_string(),
            position: Some(position.to_string()),
            dim: Some(dim.to_string()),
            ..Default::default()
        });
    }

    Ok(composite.id())
}

/// Adds the bookcase frame as one composite and the books as free boxes under `parent`.
pub fn add_bookcase(
    doc: &mut SceneDocument,
    parent: SceneNodeId,
    bookcase: &BookcaseConfig,
    rng: &mut impl Rng,
) -> Result<SceneNodeId> {
    let shelves = &bookcase.shelves;
    let mut frame = doc.add_composite(
        parent,
        &CompositeConfig {
            name: bookcase.name.clone(),
            position: Some(bookcase.position.clone()),
            color: bookcase.color.clone(),
            ..Default::default()
        },
    )?;

    for (name, x) in [("wallL", -bookcase.wall_offset), ("wallR", bookcase.wall_offset)] {
        frame.add_box(BoxConfig {
            name: name.to_string(),
            position: Some(fmt_vec3(DVec3::new(x, bookcase.wall_y, 0.0))),
            dim: Some(bookcase.wall_dim.clone()),
            ..Default::default()
        });
    }
    for row in 0..shelves.rows {
        frame.add_box(BoxConfig {
            name: format!("floor{row}"),
            position: Some(fmt_vec3(DVec3::new(0.0, shelves.shelf_y(row), 0.0))),
            dim: Some(bookcase.shelf_dim.clone()),
            ..Default::default()
        });
    }
    let frame_id = frame.id();

    for row in (0..shelves.rows).filter(|&row| shelves.has_books(row)) {
        for book in 0..shelves.books_per_row {
            doc.add_box(
                parent,
                &BoxConfig {
                    name: format!("book{row}_{book}"),
                    position: Some(fmt_vec3(shelves.book_position(row, book))),
                    orientation: Some(book_orientation(row).to_string()),
                    dim: Some(bookcase.book_dim.clone()),
                    color: bookcase.palette.pick(rng).map(str::to_string),
                    friction: Some(bookcase.book_friction.clone()),
                    density: Some(bookcase.book_density.clone()),
                    ..Default::default()
                },
            )?;
        }
    }

    Ok(frame_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::palette::BOOK_COLORS;
    use crate::scene::{SceneNode, to_xml_string};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn stock_scene(seed: u64) -> SceneDocument {
        let mut rng = StdRng::seed_from_u64(seed);
        build(&ChariotVenusConfig::default(), &mut rng).unwrap()
    }

    fn top_level(doc: &SceneDocument) -> Vec<&SceneNode> {
        doc.children(doc.root()).filter_map(|c| doc.get(c)).collect()
    }

    #[test]
    fn test_top_level_layout() {
        let doc = stock_scene(1);
        let bodies = top_level(&doc);
        // plane + 15 torsos + chariot + bookcase + 7 rows of 12 books
        assert_eq!(bodies.len(), 1 + 15 + 1 + 1 + 7 * 12);
        assert_eq!(bodies[0].attribute("type"), Some("plane"));
        assert_eq!(bodies[16].attribute("name"), Some("chariot"));
        assert_eq!(bodies[17].attribute("name"), Some("bookCase"));
    }

    #[test]
    fn test_plane_friction() {
        let doc = stock_scene(1);
        let plane = doc.find_named(doc.root(), "plane").unwrap();
        let fric: Vec<_> = doc.children_tagged(plane.id, "friction").collect();
        assert_eq!(fric.len(), 1);
        assert_eq!(fric[0].text.as_deref(), Some("0.001"));
    }

    #[test]
    fn test_torso_grid_wraps_rows() {
        let doc = stock_scene(1);
        let venus5 = doc.find_named(doc.root(), "venus5").unwrap();
        assert_eq!(venus5.attribute("position"), Some("-22.5 4 -0.89"));
        assert_eq!(venus5.attribute("obj"), Some("data/scaledtorso10.obj"));
        assert_eq!(venus5.attribute("type"), Some("mesh"));
    }

    #[test]
    fn test_chariot_parts() {
        let doc = stock_scene(1);
        let chariot = doc.find_named(doc.root(), "chariot").unwrap();
        assert_eq!(chariot.attribute("position"), Some("-20. 2.7 0."));

        let parts: Vec<_> = doc.children(chariot.id).filter_map(|c| doc.get(c)).collect();
        assert_eq!(parts.len(), 9);
        let spheres: Vec<_> = parts
            .iter()
            .filter(|p| p.attribute("type") == Some("sphere"))
            .collect();
        assert_eq!(spheres.len(), 4);
        for s in &spheres {
            assert_eq!(s.attribute("radius"), Some("1"));
        }
        assert_eq!(parts[4].attribute("name"), Some("panier"));
        assert_eq!(parts[8].attribute("dim"), Some("0.2 1.5 4"));
    }

    #[test]
    fn test_bookcase_frame() {
        let doc = stock_scene(1);
        let frame = doc.find_named(doc.root(), "bookCase").unwrap();
        assert!(frame.attribute("obj").is_none());

        let wall = doc.find_named(frame.id, "wallL").unwrap();
        assert_eq!(wall.attribute("position"), Some("-5 10 0"));
        let floor = doc.find_named(frame.id, "floor1").unwrap();
        assert_eq!(floor.attribute("position"), Some("0 5 0"));
        assert_eq!(doc.children(frame.id).count(), 2 + 8);
    }

    #[test]
    fn test_books_follow_row_rules() {
        let doc = stock_scene(1);

        let upright = doc.find_named(doc.root(), "book3_0").unwrap();
        assert_eq!(upright.attribute("orientation"), Some("0 0 -1 0"));
        assert_eq!(upright.attribute("position"), Some("-44.4 8.61 -10"));

        let even = doc.find_named(doc.root(), "book2_0").unwrap();
        assert_eq!(even.attribute("orientation"), Some("0 0 -1 0.3"));
        assert_eq!(even.attribute("position"), Some("-40.2 6.11 -10"));

        let color = even.attribute("color").unwrap();
        assert!(BOOK_COLORS.contains(&color));
        assert!(doc.find_named(doc.root(), "book0_0").is_none());
    }

    #[test]
    fn test_same_seed_same_document() {
        let a = to_xml_string(&stock_scene(99)).unwrap();
        let b = to_xml_string(&stock_scene(99)).unwrap();
        assert_eq!(a, b);
    }
}
