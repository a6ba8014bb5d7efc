//! Scene documents: body primitives, composites and XML import/export

pub mod composite;
pub mod document;
pub mod export;
pub mod node;
pub mod reader;
pub mod shapes;

pub use composite::{Composite, CompositeConfig};
pub use document::SceneDocument;
pub use export::{export, to_xml_string, write_document, ExportOptions};
pub use node::{Attribute, SceneNode, SceneNodeId};
pub use shapes::{BodyKind, BoxConfig, MeshConfig, PlaneConfig, ShapeConfig, SphereConfig};
