//! Composite bodies: one rigid body made of several box/sphere parts.
//!
//! Part positions are written exactly as given. Whether they are relative to the
//! composite frame is up to the engine reading the document.

use crate::core::{Error, Result};

use super::document::SceneDocument;
use super::node::SceneNodeId;
use super::shapes::{BoxConfig, BodyKind, ShapeConfig, SphereConfig, BODY_TAG};

/// Root attributes of a composite body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompositeConfig {
    pub name: String,
    /// Visual geometry for the whole composite.
    pub obj: Option<String>,
    pub scale: Option<String>,
    pub position: Option<String>,
    pub orientation: Option<String>,
    pub velocity: Option<String>,
    pub color: Option<String>,
}

impl CompositeConfig {
    fn attributes(&self) -> [(&'static str, Option<&str>); 7] {
        [
            ("obj", self.obj.as_deref()),
            ("scale", self.scale.as_deref()),
            ("name", Some(self.name.as_str())),
            ("position", self.position.as_deref()),
            ("orientation", self.orientation.as_deref()),
            ("velocity", self.velocity.as_deref()),
            ("color", self.color.as_deref()),
        ]
    }
}

/// Builder for the parts of a composite. Borrows the document until dropped.
pub struct Composite<'d> {
    doc: &'d mut SceneDocument,
    node: SceneNodeId,
}

impl<'d> Composite<'d> {
    /// Node of the composite element.
    pub fn id(&self) -> SceneNodeId {
        self.node
    }

    /// Append a box part. A part without a name is skipped.
    pub fn add_box(&mut self, part: BoxConfig) {
        self.add_part(&part);
    }

    /// Append a sphere part. A part without a name is skipped.
    pub fn add_sphere(&mut self, part: SphereConfig) {
        self.add_part(&part);
    }

    /// Number of parts added so far.
    pub fn part_count(&self) -> usize {
        self.doc.children(self.node).count()
    }

    fn add_part<C: ShapeConfig>(&mut self, part: &C) {
        if part.name().is_empty() {
            log::warn!("Skipping unnamed {} part in composite {:?}", C::KIND, self.node);
            return;
        }
        self.doc.write_body(self.node, part);
    }
}

impl SceneDocument {
    /// Create a composite body under `parent` and return a builder for its parts.
    pub fn add_composite(
        &mut self,
        parent: SceneNodeId,
        config: &CompositeConfig,
    ) -> Result<Composite<'_>> {
        if config.name.is_empty() {
            return Err(Error::MissingName { kind: BodyKind::Composite.as_str() });
        }
        self.check_parent(parent)?;

        let node = self.add_child(parent, BODY_TAG);
        self.set_attribute(node, "type", BodyKind::Composite.as_str());
        for (key, value) in config.attributes() {
            if let Some(value) = value {
                self.set_attribute(node, key, value);
            }
        }
        log::debug!("Added composite body '{}'", config.name);

        Ok(Composite { doc: self, node })
    }
}
