//! XML exporter for scene documents.
//!
//! Elements are written in document order and attributes in the order they were set.
//! Output is pretty-printed; an element with neither children nor text is written as
//! an empty tag.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::{Error, Result};

use super::document::SceneDocument;
use super::node::SceneNodeId;

/// Formatting options for [`write_document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub indent_char: u8,
    pub indent_size: usize,
    /// Emit an `<?xml version="1.0"?>` declaration first.
    pub declaration: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 2,
            declaration: true,
        }
    }
}

/// Serialize `doc` and write it to `path`, replacing any existing file.
pub fn export(doc: &SceneDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(File::create(path)?);
    write_document(doc, &mut file, &ExportOptions::default())?;
    file.flush()?;

    log::info!(
        "Wrote {} bodies ({} nodes) to {}",
        doc.body_count(),
        doc.node_count(),
        path.display()
    );
    Ok(())
}

/// Serialize `doc` to a string with default options.
pub fn to_xml_string(doc: &SceneDocument) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(doc, &mut buffer, &ExportOptions::default())?;
    String::from_utf8(buffer).map_err(|e| Error::MalformedDocument(e.to_string()))
}

/// Serialize `doc` into any writer.
pub fn write_document<W: Write>(doc: &SceneDocument, w: W, options: &ExportOptions) -> Result<()> {
    let mut writer = Writer::new_with_indent(w, options.indent_char, options.indent_size);

    if options.declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }
    write_node(&mut writer, doc, doc.root())?;
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

fn write_node<W: Write>(writer: &mut Writer<W>, doc: &SceneDocument, id: SceneNodeId) -> Result<()> {
    let Some(node) = doc.get(id) else {
        return Err(Error::MalformedDocument(format!("dangling node {id:?}")));
    };

    let mut start = BytesStart::new(node.tag.as_str());
    for attr in &node.attributes {
        start.push_attribute((attr.key.as_str(), attr.value.as_str()));
    }

    if node.children.is_empty() && node.text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &node.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for &child in &node.children {
        write_node(writer, doc, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.tag.as_str())))?;
    Ok(())
}
