//! Scene document: an ordered element tree with a single root.
//!
//! Nodes live in an arena and are addressed by [`SceneNodeId`]. Children are kept in
//! insertion order and nodes are never removed, so ids stay valid for the lifetime
//! of the document.

use super::node::{SceneNode, SceneNodeId};

/// Tag of the document's root element.
pub const ROOT_TAG: &str = "root";

/// In-memory scene document tree.
#[derive(Clone, Debug)]
pub struct SceneDocument {
    nodes: Vec<SceneNode>,
    root: SceneNodeId,
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneDocument {
    /// Create a new document with an empty `root` element.
    pub fn new() -> Self {
        Self::with_root_tag(ROOT_TAG)
    }

    /// Create a new document with a custom root tag.
    pub fn with_root_tag(tag: impl Into<String>) -> Self {
        let root = SceneNodeId(0);
        Self {
            nodes: vec![SceneNode::new(root, tag)],
            root,
        }
    }

    /// Get the root node ID.
    pub fn root(&self) -> SceneNodeId {
        self.root
    }

    /// Whether `id` names a node of this document.
    pub fn contains(&self, id: SceneNodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Add a child element under `parent`. Returns the new node's ID.
    ///
    /// If `parent` is not in this document the node is still allocated but stays
    /// detached: it is never reached by [`walk`](Self::walk) or the exporter. The body
    /// constructors check the parent first and return an error instead.
    pub fn add_child(&mut self, parent: SceneNodeId, tag: impl Into<String>) -> SceneNodeId {
        let id = SceneNodeId(self.nodes.len());
        let mut node = SceneNode::new(id, tag);
        node.parent = Some(parent);
        self.nodes.push(node);

        // Register as child of parent
        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.push(id);
        }
        id
    }

    /// Add a child element holding only text, e.g. `<friction>0.001</friction>`.
    pub fn add_text_element(
        &mut self,
        parent: SceneNodeId,
        tag: impl Into<String>,
        text: impl Into<String>,
    ) -> SceneNodeId {
        let id = self.add_child(parent, tag);
        self.nodes[id.0].text = Some(text.into());
        id
    }

    /// Set an attribute on a node. See [`SceneNode::set_attribute`].
    pub fn set_attribute(
        &mut self,
        id: SceneNodeId,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.set_attribute(key, value);
        }
    }

    /// Set the text content of a node.
    pub fn set_text(&mut self, id: SceneNodeId, text: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.text = Some(text.into());
        }
    }

    /// Get an immutable reference to a node.
    pub fn get(&self, id: SceneNodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0)
    }

    /// Iterate over the children of a node.
    pub fn children(&self, id: SceneNodeId) -> impl Iterator<Item = SceneNodeId> + '_ {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }

    /// Iterate over the children of a node that carry the given tag.
    pub fn children_tagged<'a>(
        &'a self,
        id: SceneNodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a SceneNode> + 'a {
        self.children(id)
            .filter_map(move |c| self.get(c))
            .filter(move |n| n.tag == tag)
    }

    /// Find the first direct child of `parent` whose `name` attribute matches.
    pub fn find_named(&self, parent: SceneNodeId, name: &str) -> Option<&SceneNode> {
        self.children(parent)
            .filter_map(|c| self.get(c))
            .find(|n| n.attribute("name") == Some(name))
    }

    /// Total number of nodes in the document, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Walk the tree depth-first in document order, calling `visit` with each node and
    /// its depth (root at depth 0).
    pub fn walk(&self, mut visit: impl FnMut(&SceneNode, usize)) {
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id.0];
            visit(node, depth);
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    /// Compare two documents by structure: tags, attributes (in order), text and child
    /// order. Node ids are ignored.
    pub fn same_structure(&self, other: &SceneDocument) -> bool {
        self.subtree_eq(self.root, other, other.root)
    }

    fn subtree_eq(&self, a: SceneNodeId, other: &SceneDocument, b: SceneNodeId) -> bool {
        let (Some(na), Some(nb)) = (self.get(a), other.get(b)) else {
            return false;
        };

        na.tag == nb.tag
            && na.attributes == nb.attributes
            && na.text == nb.text
            && na.children.len() == nb.children.len()
            && na
                .children
                .iter()
                .zip(&nb.children)
                .all(|(&ca, &cb)| self.subtree_eq(ca, other, cb))
    }
}
