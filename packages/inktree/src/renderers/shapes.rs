//! Renderers for the basic shape and image elements.
//!
//! These cover the SVG basic shapes (circle, ellipse, line, polygon,
//! polyline, rect), the generic path element, and raster images.

use crate::renderer::{NodeRenderer, RendererId, RendererKind};

/// Renderer for `<circle>` elements.
#[derive(Debug, Default)]
pub struct CircleRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for CircleRenderer {
    fn tag_name(&self) -> &'static str {
        "circle"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Shape
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<ellipse>` elements.
#[derive(Debug, Default)]
pub struct EllipseRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for EllipseRenderer {
    fn tag_name(&self) -> &'static str {
        "ellipse"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Shape
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<line>` elements.
#[derive(Debug, Default)]
pub struct LineRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for LineRenderer {
    fn tag_name(&self) -> &'static str {
        "line"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Shape
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<path>` elements, the general curve primitive.
#[derive(Debug, Default)]
pub struct PathRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for PathRenderer {
    fn tag_name(&self) -> &'static str {
        "path"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Shape
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<polygon>` elements.
#[derive(Debug, Default)]
pub struct PolygonRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for PolygonRenderer {
    fn tag_name(&self) -> &'static str {
        "polygon"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Shape
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<polyline>` elements.
#[derive(Debug, Default)]
pub struct PolylineRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for PolylineRenderer {
    fn tag_name(&self) -> &'static str {
        "polyline"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Shape
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<rect>` elements.
#[derive(Debug, Default)]
pub struct RectRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for RectRenderer {
    fn tag_name(&self) -> &'static str {
        "rect"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Shape
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

/// Renderer for `<image>` elements.
///
/// Draws referenced raster content; classified as a shape since it paints
/// directly rather than grouping children.
#[derive(Debug, Default)]
pub struct ImageRenderer {
    parent: Option<RendererId>,
}

impl NodeRenderer for ImageRenderer {
    fn tag_name(&self) -> &'static str {
        "image"
    }

    fn kind(&self) -> RendererKind {
        RendererKind::Shape
    }

    fn set_parent(&mut self, parent: RendererId) {
        self.parent = Some(parent);
    }

    fn parent(&self) -> Option<RendererId> {
        self.parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_tag_names() {
        assert_eq!(CircleRenderer::default().tag_name(), "circle");
        assert_eq!(EllipseRenderer::default().tag_name(), "ellipse");
        assert_eq!(LineRenderer::default().tag_name(), "line");
        assert_eq!(PathRenderer::default().tag_name(), "path");
        assert_eq!(PolygonRenderer::default().tag_name(), "polygon");
        assert_eq!(PolylineRenderer::default().tag_name(), "polyline");
        assert_eq!(RectRenderer::default().tag_name(), "rect");
        assert_eq!(ImageRenderer::default().tag_name(), "image");
    }

    #[test]
    fn test_parent_linking() {
        let mut renderer = RectRenderer::default();
        assert_eq!(renderer.parent(), None);

        renderer.set_parent(RendererId::new(3));
        assert_eq!(renderer.parent(), Some(RendererId::new(3)));
    }

    #[test]
    fn test_all_shapes_classified_as_shape() {
        let renderers: Vec<Box<dyn NodeRenderer>> = vec![
            Box::new(CircleRenderer::default()),
            Box::new(EllipseRenderer::default()),
            Box::new(LineRenderer::default()),
            Box::new(PathRenderer::default()),
            Box::new(PolygonRenderer::default()),
            Box::new(PolylineRenderer::default()),
            Box::new(RectRenderer::default()),
            Box::new(ImageRenderer::default()),
        ];

        for renderer in renderers {
            assert_eq!(renderer.kind(), RendererKind::Shape);
        }
    }
}
