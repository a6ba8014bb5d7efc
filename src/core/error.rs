//! Error types for scene authoring

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{kind} body requires a non-empty name")]
    MissingName { kind: &'static str },

    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}
