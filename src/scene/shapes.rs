//! Rigid-body shape primitives.
//!
//! Each shape kind has a configuration struct with a fixed set of optional fields.
//! Attribute names are the wire format expected by the downstream engine and are
//! emitted verbatim, in field order, after `type` and `name`. Absent fields are
//! omitted from the output. Values are opaque text: nothing here parses or
//! validates numbers.

use crate::core::{Error, Result};

use super::document::SceneDocument;
use super::node::SceneNodeId;

/// Element tag used for every body.
pub const BODY_TAG: &str = "body";

/// The kind of a body, written as its `type` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Plane,
    Box,
    Sphere,
    Mesh,
    Composite,
}

impl BodyKind {
    /// Value of the `type` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            BodyKind::Plane => "plane",
            BodyKind::Box => "box",
            BodyKind::Sphere => "sphere",
            BodyKind::Mesh => "mesh",
            BodyKind::Composite => "composite",
        }
    }

    /// Parse a `type` attribute value.
    pub fn from_type_attr(s: &str) -> Option<Self> {
        match s {
            "plane" => Some(BodyKind::Plane),
            "box" => Some(BodyKind::Box),
            "sphere" => Some(BodyKind::Sphere),
            "mesh" => Some(BodyKind::Mesh),
            "composite" => Some(BodyKind::Composite),
            _ => None,
        }
    }
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed attribute set for one body kind.
pub trait ShapeConfig {
    const KIND: BodyKind;

    fn name(&self) -> &str;

    /// Kind-specific attributes in emission order, excluding `type` and `name`.
    fn attributes(&self) -> Vec<(&'static str, Option<&str>)>;

    /// Adds nested sub-elements after the body element has been created.
    fn decorate(&self, _doc: &mut SceneDocument, _body: SceneNodeId) {}
}

/// Infinite ground plane through point `p` with normal `n`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaneConfig {
    pub name: String,
    pub p: Option<String>,
    pub n: Option<String>,
    /// Written as a `<friction>` sub-element rather than an attribute.
    pub friction: Option<String>,
}

impl ShapeConfig for PlaneConfig {
    const KIND: BodyKind = BodyKind::Plane;

    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![("p", self.p.as_deref()), ("n", self.n.as_deref())]
    }

    fn decorate(&self, doc: &mut SceneDocument, body: SceneNodeId) {
        if let Some(friction) = &self.friction {
            doc.add_text_element(body, "friction", friction.as_str());
        }
    }
}

/// Box with full extents `dim`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoxConfig {
    pub name: String,
    pub position: Option<String>,
    pub orientation: Option<String>,
    pub dim: Option<String>,
    pub color: Option<String>,
    pub friction: Option<String>,
    pub density: Option<String>,
    pub velocity: Option<String>,
}

impl ShapeConfig for BoxConfig {
    const KIND: BodyKind = BodyKind::Box;

    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("position", self.position.as_deref()),
            ("orientation", self.orientation.as_deref()),
            ("dim", self.dim.as_deref()),
            ("color", self.color.as_deref()),
            ("friction", self.friction.as_deref()),
            ("density", self.density.as_deref()),
            ("velocity", self.velocity.as_deref()),
        ]
    }
}

/// Sphere of the given `radius`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphereConfig {
    pub name: String,
    pub position: Option<String>,
    pub orientation: Option<String>,
    pub radius: Option<String>,
    pub color: Option<String>,
    pub friction: Option<String>,
    pub density: Option<String>,
    pub velocity: Option<String>,
}

impl ShapeConfig for SphereConfig {
    const KIND: BodyKind = BodyKind::Sphere;

    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("position", self.position.as_deref()),
            ("orientation", self.orientation.as_deref()),
            ("radius", self.radius.as_deref()),
            ("color", self.color.as_deref()),
            ("friction", self.friction.as_deref()),
            ("density", self.density.as_deref()),
            ("velocity", self.velocity.as_deref()),
        ]
    }
}

/// Triangle mesh loaded by the engine from `obj`, with an optional signed distance
/// field `st` used for collisions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshConfig {
    pub name: String,
    pub scale: Option<String>,
    pub obj: Option<String>,
    pub st: Option<String>,
    pub position: Option<String>,
    pub orientation: Option<String>,
    pub friction: Option<String>,
    pub density: Option<String>,
    pub color: Option<String>,
    pub velocity: Option<String>,
}

impl ShapeConfig for MeshConfig {
    const KIND: BodyKind = BodyKind::Mesh;

    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            ("scale", self.scale.as_deref()),
            ("obj", self.obj.as_deref()),
            ("st", self.st.as_deref()),
            ("position", self.position.as_deref()),
            ("orientation", self.orientation.as_deref()),
            ("friction", self.friction.as_deref()),
            ("density", self.density.as_deref()),
            ("color", self.color.as_deref()),
            ("velocity", self.velocity.as_deref()),
        ]
    }
}

impl SceneDocument {
    /// Append a body described by `config` under `parent`.
    ///
    /// Returns the new body's node so callers can decorate it further.
    pub fn add_body<C: ShapeConfig>(&mut self, parent: SceneNodeId, config: &C) -> Result<SceneNodeId> {
        if config.name().is_empty() {
            return Err(Error::MissingName { kind: C::KIND.as_str() });
        }
        self.check_parent(parent)?;

        let body = self.write_body(parent, config);
        log::debug!("Added {} body '{}'", C::KIND, config.name());
        Ok(body)
    }

    pub fn add_plane(&mut self, parent: SceneNodeId, config: &PlaneConfig) -> Result<SceneNodeId> {
        self.add_body(parent, config)
    }

    pub fn add_box(&mut self, parent: SceneNodeId, config: &BoxConfig) -> Result<SceneNodeId> {
        self.add_body(parent, config)
    }

    pub fn add_sphere(&mut self, parent: SceneNodeId, config: &SphereConfig) -> Result<SceneNodeId> {
        self.add_body(parent, config)
    }

    pub fn add_mesh(&mut self, parent: SceneNodeId, config: &MeshConfig) -> Result<SceneNodeId> {
        self.add_body(parent, config)
    }

    /// Fails unless `parent` belongs to this document.
    pub(crate) fn check_parent(&self, parent: SceneNodeId) -> Result<()> {
        if self.contains(parent) {
            Ok(())
        } else {
            Err(Error::MalformedDocument(format!("unknown parent node {parent:?}")))
        }
    }

    /// Writes the body element without checking the name.
    pub(crate) fn write_body<C: ShapeConfig>(&mut self, parent: SceneNodeId, config: &C) -> SceneNodeId {
        let body = self.add_child(parent, BODY_TAG);
        self.set_attribute(body, "type", C::KIND.as_str());
        self.set_attribute(body, "name", config.name());
        for (key, value) in config.attributes() {
            if let Some(value) = value {
                self.set_attribute(body, key, value);
            }
        }
        config.decorate(self, body);
        body
    }

    /// Count of `body` elements anywhere in the document, composite children included.
    pub fn body_count(&self) -> usize {
        let mut count = 0;
        self.walk(|node, _| {
            if node.tag == BODY_TAG {
                count += 1;
            }
        });
        count
    }
}
