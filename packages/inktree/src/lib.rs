//! inktree - SVG tag-to-renderer dispatch.
//!
//! This crate is the extensibility seam of an SVG rendering pipeline: it
//! decouples "what tag names exist" from "how each tag is drawn". A
//! [`RendererFactory`] resolves element tags to freshly constructed renderer
//! instances, or reports that a tag should be silently skipped; a
//! [`TreeProcessor`] walks a parsed document and assembles the renderers into
//! a tree. Mapping providers can be swapped at factory construction to
//! override or extend the supported vocabulary.
//!
//! # Example
//!
//! ```
//! use inktree::{RendererFactory, TreeProcessor};
//!
//! let xml = r#"<svg xmlns="http://www.w3.org/2000/svg"><g><rect/></g></svg>"#;
//! let doc = roxmltree::Document::parse(xml).unwrap();
//!
//! let processor = TreeProcessor::new(RendererFactory::new());
//! let tree = processor.process(&doc).unwrap();
//!
//! assert_eq!(tree.len(), 3);
//! let root = tree.root().unwrap();
//! assert_eq!(tree.renderer(root).unwrap().tag_name(), "svg");
//! ```
//!
//! # Architecture
//!
//! - [`renderer`]: renderer capability trait and handle types
//! - [`renderers`]: concrete renderer types for the default vocabulary
//! - [`factory`]: mapping providers and the renderer factory
//! - [`processor`]: document walking and renderer tree assembly
//! - [`error`]: error types and Result alias
//! - [`xml`]: XML navigation utilities
//! - [`cli`]: command-line interface

pub mod cli;
pub mod error;
pub mod factory;
pub mod processor;
pub mod renderer;
pub mod renderers;
pub mod xml;

// Re-export commonly used items
pub use error::{ProcessingError, Result};
pub use factory::{
    constructor_of, ConstructorError, DefaultRendererMapper, RendererConstructor, RendererFactory,
    RendererMapper,
};
pub use processor::{RendererTree, TreeProcessor, TreeSummary};
pub use renderer::{NodeRenderer, RendererId, RendererKind};
