//! Default mapping configuration for the SVG rendering vocabulary.

use std::collections::{HashMap, HashSet};

use super::mapper::{constructor_of, RendererConstructor, RendererMapper};
use crate::renderers::{
    CircleRenderer, EllipseRenderer, GroupRenderer, ImageRenderer, LineRenderer, PathRenderer,
    PolygonRenderer, PolylineRenderer, RectRenderer, SvgRootRenderer, TextRenderer,
    TextSpanRenderer, UseRenderer,
};

/// The default mapping provider, covering the core SVG 1.1 vocabulary.
///
/// Maps every directly rendered element to its renderer constructor and
/// lists the tags that carry no direct visual contribution. The two sets are
/// kept disjoint.
pub struct DefaultRendererMapper;

impl RendererMapper for DefaultRendererMapper {
    fn mapping(&self) -> HashMap<String, RendererConstructor> {
        let mut mapping: HashMap<String, RendererConstructor> = HashMap::new();

        // Basic shapes
        mapping.insert("circle".to_string(), constructor_of::<CircleRenderer>());
        mapping.insert("ellipse".to_string(), constructor_of::<EllipseRenderer>());
        mapping.insert("line".to_string(), constructor_of::<LineRenderer>());
        mapping.insert("path".to_string(), constructor_of::<PathRenderer>());
        mapping.insert("polygon".to_string(), constructor_of::<PolygonRenderer>());
        mapping.insert("polyline".to_string(), constructor_of::<PolylineRenderer>());
        mapping.insert("rect".to_string(), constructor_of::<RectRenderer>());
        mapping.insert("image".to_string(), constructor_of::<ImageRenderer>());

        // Structural elements
        mapping.insert("svg".to_string(), constructor_of::<SvgRootRenderer>());
        mapping.insert("g".to_string(), constructor_of::<GroupRenderer>());
        mapping.insert("use".to_string(), constructor_of::<UseRenderer>());

        // Text content
        mapping.insert("text".to_string(), constructor_of::<TextRenderer>());
        mapping.insert("tspan".to_string(), constructor_of::<TextSpanRenderer>());

        mapping
    }

    fn ignored_tags(&self) -> HashSet<String> {
        // Tags that never get a renderer of their own:
        //
        // Document metadata:
        //   - title/desc: accessible descriptions
        //   - metadata: embedded RDF or similar
        //
        // Indirectly rendered content (instantiated via use/styling, never
        // painted where it appears):
        //   - defs: definition container
        //   - symbol: reusable template
        //
        // Non-SVG content:
        //   - style: CSS, handled by the styling pass
        //   - script: no scripting support in a static pipeline
        //   - foreignObject: embedded foreign markup
        ["defs", "desc", "foreignObject", "metadata", "script", "style", "symbol", "title"]
            .iter()
            .map(|tag| (*tag).to_string())
            .collect()
    }
}
