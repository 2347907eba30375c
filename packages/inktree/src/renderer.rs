//! Renderer capability trait and supporting types.

use std::fmt;

use serde::Serialize;

/// Classification of renderer types by the content they draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Geometric and image elements (circle, rect, path, image).
    Shape,
    /// Elements that group or pull in other content (svg, g, use).
    Container,
    /// Text content elements (text, tspan).
    Text,
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RendererKind::Shape => "shape",
            RendererKind::Container => "container",
            RendererKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// Handle standing in for a reference to a renderer owned by the caller.
///
/// Renderer instances pass out of the factory by value; the tree that ends up
/// owning them hands out ids, and a parent link is stored as the parent's id
/// rather than a shared pointer. [`crate::RendererTree`] issues these, but any
/// caller-owned arena can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RendererId(usize);

impl RendererId {
    /// Create a handle from an arena index.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The arena index this handle stands for.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Trait for element renderers.
///
/// A renderer draws one element kind's visual contribution. This crate models
/// only the dispatch surface: which tag a renderer draws, its kind
/// classification, and a settable back-reference to its parent in the
/// caller's renderer tree. Drawing itself lives in downstream crates.
pub trait NodeRenderer: Send + Sync + fmt::Debug {
    /// Tag name this renderer draws.
    fn tag_name(&self) -> &'static str;

    /// Kind classification of this renderer.
    fn kind(&self) -> RendererKind;

    /// Link the parent renderer.
    ///
    /// Establishes the back-reference only; attaching this renderer into the
    /// parent's own child collection is the caller's responsibility.
    fn set_parent(&mut self, parent: RendererId);

    /// Handle of the parent renderer, if one was linked.
    fn parent(&self) -> Option<RendererId>;
}
