//! Error types for renderer dispatch and tree construction.

use thiserror::Error;

/// Main error type for the inktree library.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// Renderer requested without an element node.
    #[error("Cannot create a renderer: no element node was supplied")]
    MissingTag,

    /// No renderer constructor registered for a tag name.
    #[error("No renderer registered for element <{tag_name}>")]
    UnmappedTag { tag_name: String },

    /// A registered constructor failed to produce a renderer instance.
    #[error("Could not instantiate renderer for element <{tag_name}>")]
    RendererInstantiation {
        tag_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for inktree operations.
pub type Result<T> = std::result::Result<T, ProcessingError>;
