//! XML reader for scene documents.
//!
//! Parses a document back into a [`SceneDocument`], keeping element order, attribute
//! order and text content. Text of an element without child elements is kept exactly
//! as written, including surrounding whitespace and empty `<x></x>` pairs. In elements
//! that have children, whitespace-only runs are indentation and are dropped.
//! Declarations, comments and processing instructions are skipped.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::core::{Error, Result};

use super::document::SceneDocument;
use super::node::SceneNodeId;

/// An element whose closing tag has not been seen yet.
struct OpenElement {
    id: SceneNodeId,
    text: String,
    has_children: bool,
}

impl SceneDocument {
    /// Load a document from an XML file.
    pub fn load_sync(path: impl AsRef<Path>) -> Result<Self> {
        let xml = fs::read_to_string(path)?;
        Self::from_xml_str(&xml)
    }

    /// Parse a document from an XML string.
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);

        let mut doc: Option<SceneDocument> = None;
        let mut stack: Vec<OpenElement> = Vec::new();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let id = open_element(&mut doc, &mut stack, &e)?;
                    stack.push(OpenElement {
                        id,
                        text: String::new(),
                        has_children: false,
                    });
                }
                Event::Empty(e) => {
                    open_element(&mut doc, &mut stack, &e)?;
                }
                Event::End(e) => {
                    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();
                    let Some(open) = stack.pop() else {
                        return Err(Error::MalformedDocument(format!(
                            "unexpected closing tag </{tag}>"
                        )));
                    };
                    let Some(doc) = doc.as_mut() else {
                        return Err(Error::MalformedDocument(format!(
                            "unexpected closing tag </{tag}>"
                        )));
                    };
                    if doc.get(open.id).map(|n| n.tag.as_str()) != Some(tag.as_str()) {
                        return Err(Error::MalformedDocument(format!(
                            "unexpected closing tag </{tag}>"
                        )));
                    }
                    close_element(doc, open);
                }
                Event::Text(e) => {
                    let text = e.unescape()?;
                    match stack.last_mut() {
                        Some(open) => open.text.push_str(&text),
                        None if text.trim().is_empty() => {}
                        None => {
                            return Err(Error::MalformedDocument(
                                "text outside of the root element".to_string(),
                            ));
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        if !stack.is_empty() {
            return Err(Error::MalformedDocument("unclosed elements at end of input".to_string()));
        }
        doc.ok_or_else(|| Error::MalformedDocument("document has no root element".to_string()))
    }
}

/// Creates the node for an opening tag, as the root if none exists yet.
fn open_element(
    doc: &mut Option<SceneDocument>,
    stack: &mut [OpenElement],
    e: &BytesStart<'_>,
) -> Result<SceneNodeId> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).to_string();

    let (doc, id) = match doc {
        None => {
            let new_doc = doc.insert(SceneDocument::with_root_tag(tag));
            let root = new_doc.root();
            (new_doc, root)
        }
        Some(existing) => {
            let Some(parent) = stack.last_mut() else {
                return Err(Error::MalformedDocument(format!(
                    "second root element <{tag}>"
                )));
            };
            parent.has_children = true;
            let id = existing.add_child(parent.id, tag);
            (existing, id)
        }
    };

    for attr in e.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
        let value = attr.unescape_value()?;
        doc.set_attribute(id, key, value.as_ref());
    }
    Ok(id)
}

/// Stores the collected text of a closed element.
fn close_element(doc: &mut SceneDocument, open: OpenElement) {
    if !open.has_children {
        doc.set_text(open.id, open.text);
        return;
    }
    let text = open.text.trim();
    if !text.is_empty() {
        doc.set_text(open.id, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::composite::CompositeConfig;
    use crate::scene::export::to_xml_string;
    use crate::scene::shapes::{BoxConfig, MeshConfig, PlaneConfig, SphereConfig};
    use tempfile::TempDir;

    fn sample() -> SceneDocument {
        let mut doc = SceneDocument::new();
        let root = doc.root();
        doc.add_plane(
            root,
            &PlaneConfig {
                name: "plane".into(),
                p: Some("0 0 0".into()),
                n: Some("0. 1. 0.0".into()),
                friction: Some("0.001".into()),
            },
        )
        .unwrap();
        doc.add_mesh(
            root,
            &MeshConfig {
                name: "venus0".into(),
                obj: Some("data/scaledtorso10.obj".into()),
                position: Some("-22.5 4 -1.9".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let mut cart = doc
            .add_composite(
                root,
                &CompositeConfig {
                    name: "cart".into(),
                    color: Some("0.7 0. 0. 1.".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        cart.add_sphere(SphereConfig {
            name: "wheel1".into(),
            radius: Some("1".into()),
            ..Default::default()
        });
        cart.add_box(BoxConfig {
            name: "panier".into(),
            dim: Some("7.2 0.2 4".into()),
            ..Default::default()
        });
        doc
    }

    #[test]
    fn test_roundtrip_is_identical() {
        let doc = sample();
        let xml = to_xml_string(&doc).unwrap();
        let parsed = SceneDocument::from_xml_str(&xml).unwrap();

        assert!(parsed.same_structure(&doc));
        assert_eq!(to_xml_string(&parsed).unwrap(), xml);
    }

    #[test]
    fn test_parse_text_kept_verbatim() {
        let xml = "<root>\n<body type=\"box\" name=\"B0L0\">\n    <x> 1  2 3 </x>\n</body>\n</root>";
        let doc = SceneDocument::from_xml_str(xml).unwrap();
        let body = doc.children(doc.root()).next().unwrap();
        let x: Vec<_> = doc.children_tagged(body, "x").collect();
        assert_eq!(x[0].text.as_deref(), Some(" 1  2 3 "));

        // Indentation between elements is not text
        assert!(doc.get(body).unwrap().text.is_none());
        assert!(doc.get(doc.root()).unwrap().text.is_none());
    }

    #[test]
    fn test_padded_text_roundtrip() {
        let mut doc = SceneDocument::new();
        let root = doc.root();
        let block = doc
            .add_box(root, &BoxConfig { name: "B0L0".into(), ..Default::default() })
            .unwrap();
        doc.add_text_element(block, "x", " 1  2 3 ");
        doc.add_text_element(block, "R", "   ");

        let xml = to_xml_string(&doc).unwrap();
        assert!(xml.contains("<x> 1  2 3 </x>"));
        let parsed = SceneDocument::from_xml_str(&xml).unwrap();
        assert!(parsed.same_structure(&doc));
        assert_eq!(to_xml_string(&parsed).unwrap(), xml);
    }

    #[test]
    fn test_empty_text_roundtrip() {
        let mut doc = SceneDocument::new();
        let root = doc.root();
        doc.add_plane(
            root,
            &PlaneConfig {
                name: "plane".into(),
                friction: Some(String::new()),
                ..Default::default()
            },
        )
        .unwrap();

        let xml = to_xml_string(&doc).unwrap();
        assert!(xml.contains("<friction></friction>"));
        let parsed = SceneDocument::from_xml_str(&xml).unwrap();
        let plane = parsed.children(parsed.root()).next().unwrap();
        let fric: Vec<_> = parsed.children_tagged(plane, "friction").collect();
        assert_eq!(fric[0].text.as_deref(), Some(""));
        assert_eq!(to_xml_string(&parsed).unwrap(), xml);
    }

    #[test]
    fn test_parse_keeps_attribute_order() {
        let xml = r#"<root><body name="b" type="box" dim="1 1 1"/></root>"#;
        let doc = SceneDocument::from_xml_str(xml).unwrap();
        let body = doc.get(doc.children(doc.root()).next().unwrap()).unwrap();
        let keys: Vec<_> = body.attribute_keys().collect();
        assert_eq!(keys, ["name", "type", "dim"]);
    }

    #[test]
    fn test_parse_rejects_mismatched_tags() {
        let result = SceneDocument::from_xml_str("<root><body></root>");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_unclosed() {
        let result = SceneDocument::from_xml_str("<root><body>");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_text_outside_root() {
        let result = SceneDocument::from_xml_str("<root/>stray");
        assert!(matches!(result, Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        let result = SceneDocument::from_xml_str("<?xml version=\"1.0\"?>");
        assert!(matches!(result, Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn test_load_sync() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("scene.xml");
        let doc = sample();
        crate::scene::export::export(&doc, &path).expect("export failed");

        let loaded = SceneDocument::load_sync(&path).expect("load failed");
        assert!(loaded.same_structure(&doc));
        assert_eq!(loaded.body_count(), 5);
    }
}
