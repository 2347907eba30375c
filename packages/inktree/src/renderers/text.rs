//! Renderers for text content elements.

use crate::renderer::{NodeRenderer, RendererId, RendererKind};

/// Renderer for `<text>` elements.
#[derive(Debug, Default)]
pub struct TextRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for TextRenderer {
    fn tag_name(&self) -> &'static str {
        "text"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Text
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<tspan>` elements nested inside text runs.
#[derive(Debug, Default)]
pub struct TextSpanRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for TextSpanRenderer {
    fn tag_name(&self) -> &'static str {
        "tspan"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Text
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}
