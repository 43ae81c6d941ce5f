//! Error types for scene loading and SVG export

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during an export
#[derive(Debug, Error)]
pub enum ExportError {
    /// No selected object is a 2D curve
    #[error("no 2D curve object selected")]
    NoSelection,

    /// Coordinate precision outside the supported range
    #[error("precision {0} is out of range (0..=21)")]
    InvalidPrecision(u32),

    /// The document tree could not be serialized
    #[error("internal error while serializing SVG: {0}")]
    Serialize(#[from] SerializeError),

    /// The output file could not be written
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failures of the XML backend while writing or re-reading a document
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("write error: {0}")]
    Write(#[from] std::io::Error),
    #[error("document is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur when loading a scene file
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse scene TOML: {0}")]
    Parse(#[from] toml::de::Error),
}
