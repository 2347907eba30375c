//! Renderers for structural elements that contain or pull in other content.

use crate::renderer::{NodeRenderer, RendererId, RendererKind};

/// Renderer for the `<svg>` root element.
///
/// Establishes the outermost viewport; in a full pipeline it owns the
/// document-level coordinate system its descendants draw into.
#[derive(Debug, Default)]
pub struct SvgRootRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for SvgRootRenderer {
    fn tag_name(&self) -> &'static str {
        "svg"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Container
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<g>` grouping elements.
#[derive(Debug, Default)]
pub struct GroupRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for GroupRenderer {
    fn tag_name(&self) -> &'static str {
        "g"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Container
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<use>` elements, which instantiate referenced content.
#[derive(Debug, Default)]
pub struct UseRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for UseRenderer {
    fn tag_name(&self) -> &'static str {
        "use"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Container
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}
