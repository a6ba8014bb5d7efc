//! Scene document node types
//!
//! Core types for the in-memory document tree: node IDs, attributes and elements.

/// Unique identifier for a node in a [`SceneDocument`](super::SceneDocument).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneNodeId(pub usize);

/// A single string-valued attribute. Values are opaque text tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A single element in the document tree.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub id: SceneNodeId,
    /// Element tag, e.g. `body` or `friction`.
    pub tag: String,
    pub parent: Option<SceneNodeId>,
    pub children: Vec<SceneNodeId>,
    /// Attributes in the order they were first set.
    pub attributes: Vec<Attribute>,
    /// Text content, if any.
    pub text: Option<String>,
}

impl SceneNode {
    /// Create a new detached node.
    pub fn new(id: SceneNodeId, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
            text: None,
        }
    }

    /// Look up an attribute value by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute. An existing key keeps its position and gets the new value,
    /// a new key is appended.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.key == key) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute { key, value }),
        }
    }

    /// Attribute keys in order.
    pub fn attribute_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.attributes.iter().map(|a| a.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_node_id_equality() {
        let a = SceneNodeId(1);
        let b = SceneNodeId(1);
        let c = SceneNodeId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scene_node_new() {
        let node = SceneNode::new(SceneNodeId(0), "root");
        assert_eq!(node.id, SceneNodeId(0));
        assert_eq!(node.tag, "root");
        assert!(node.parent.is_none());
        assert!(node.children.is_empty());
        assert!(node.attributes.is_empty());
        assert!(node.text.is_none());
    }

    #[test]
    fn test_set_attribute_keeps_order() {
        let mut node = SceneNode::new(SceneNodeId(0), "body");
        node.set_attribute("type", "box");
        node.set_attribute("name", "a");
        node.set_attribute("dim", "1 1 1");
        let keys: Vec<_> = node.attribute_keys().collect();
        assert_eq!(keys, ["type", "name", "dim"]);
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut node = SceneNode::new(SceneNodeId(0), "body");
        node.set_attribute("type", "box");
        node.set_attribute("name", "a");
        node.set_attribute("type", "sphere");
        assert_eq!(node.attributes.len(), 2);
        assert_eq!(node.attributes[0], Attribute::new("type", "sphere"));
        assert_eq!(node.attribute("name"), Some("a"));
        assert_eq!(node.attribute("missing"), None);
    }
}
