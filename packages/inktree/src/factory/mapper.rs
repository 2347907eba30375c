//! Mapping provider trait and renderer constructor types.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::renderer::NodeRenderer;

/// Error produced by a renderer constructor.
pub type ConstructorError = Box<dyn std::error::Error + Send + Sync>;

/// Invokable zero-argument constructor producing a fresh renderer instance.
///
/// Constructors are shared immutable callables, so copying a mapping into a
/// factory clones handles while the callables themselves stay read-only.
/// Construction is fallible for mappers whose renderers need resources that
/// may be unavailable at dispatch time.
pub type RendererConstructor =
    Arc<dyn Fn() -> std::result::Result<Box<dyn NodeRenderer>, ConstructorError> + Send + Sync>;

/// Trait for mapping providers.
///
/// A mapper supplies the association between tag names and renderer
/// constructors, plus the set of tag names to ignore outright. Both accessors
/// return owned snapshots: a factory seeded from a mapper never aliases the
/// mapper's collections, so later changes on the mapper side cannot leak into
/// an existing factory. Implementations may be swapped at factory
/// construction to customize or extend the supported tags.
pub trait RendererMapper {
    /// Mapping from tag name to renderer constructor.
    fn mapping(&self) -> HashMap<String, RendererConstructor>;

    /// Tag names for which no renderer should ever be constructed.
    fn ignored_tags(&self) -> HashSet<String>;
}

/// Wrap an infallible `Default` renderer type as a [`RendererConstructor`].
pub fn constructor_of<R>() -> RendererConstructor
where
    R: NodeRenderer + Default + 'static,
{
    Arc::new(|| Ok(Box::<R>::default() as Box<dyn NodeRenderer>))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::CircleRenderer;

    #[test]
    fn test_constructor_of_produces_fresh_instances() {
        let constructor = constructor_of::<CircleRenderer>();

        let a = constructor().unwrap();
        let b = constructor().unwrap();
        assert_eq!(a.tag_name(), "circle");
        assert_eq!(b.tag_name(), "circle");

        let a_addr = std::ptr::from_ref(&*a).cast::<()>();
        let b_addr = std::ptr::from_ref(&*b).cast::<()>();
        assert_ne!(a_addr, b_addr);
    }
}
