//! Concrete renderer types for the default SVG vocabulary.

mod containers;
mod shapes;
mod text;

pub use containers::{GroupRenderer, SvgRootRenderer, UseRenderer};
pub use shapes::{
    CircleRenderer, EllipseRenderer, ImageRenderer, LineRenderer, PathRenderer, PolygonRenderer,
    PolylineRenderer, RectRenderer,
};
pub use text::{TextRenderer, TextSpanRenderer};
