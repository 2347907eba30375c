//! Renderer factory mapping tag names to fresh renderer instances.

use std::collections::{HashMap, HashSet};

use roxmltree::Node;

use super::config::DefaultRendererMapper;
use super::mapper::{RendererConstructor, RendererMapper};
use crate::error::{ProcessingError, Result};
use crate::renderer::{NodeRenderer, RendererId};
use crate::xml::get_tag_name;

/// Factory resolving element tags to newly constructed renderers.
///
/// The factory owns a copy of a mapper's tag-to-constructor mapping and
/// ignored-tag set, taken once at construction. Both are read-only for the
/// factory's lifetime, so a shared `&RendererFactory` can serve concurrent
/// callers without locking.
pub struct RendererFactory {
    constructors: HashMap<String, RendererConstructor>,
    ignored: HashSet<String>,
}

impl RendererFactory {
    /// Create a factory seeded from the default mapper.
    #[must_use]
    pub fn new() -> Self {
        Self::with_mapper(&DefaultRendererMapper)
    }

    /// Create a factory seeded from a custom mapper.
    ///
    /// The mapper's collections fully replace the defaults; a tag known only
    /// to the default mapper is unmapped in the resulting factory.
    #[must_use]
    pub fn with_mapper(mapper: &dyn RendererMapper) -> Self {
        Self {
            constructors: mapper.mapping(),
            ignored: mapper.ignored_tags(),
        }
    }

    /// Construct a fresh renderer for an element, optionally linked to a parent.
    ///
    /// Every call produces a new instance; nothing is cached or reused. When
    /// `parent` is supplied the new renderer's parent handle is set before
    /// return. The back-reference is all the factory establishes: recording
    /// the new renderer as a child of the parent is the caller's job.
    ///
    /// # Errors
    /// - [`ProcessingError::MissingTag`] if `tag` is `None`.
    /// - [`ProcessingError::UnmappedTag`] if no constructor is registered for
    ///   the element's name.
    /// - [`ProcessingError::RendererInstantiation`] if the registered
    ///   constructor fails; the cause is logged and wrapped.
    pub fn create_renderer_for_tag(
        &self,
        tag: Option<Node<'_, '_>>,
        parent: Option<RendererId>,
    ) -> Result<Box<dyn NodeRenderer>> {
        let node = tag.ok_or(ProcessingError::MissingTag)?;
        let tag_name = get_tag_name(node);

        let constructor =
            self.constructors
                .get(tag_name)
                .ok_or_else(|| ProcessingError::UnmappedTag {
                    tag_name: tag_name.to_string(),
                })?;

        let mut renderer = constructor().map_err(|source| {
            tracing::error!(
                tag = %tag_name,
                error = %source,
                "Renderer construction failed"
            );
            ProcessingError::RendererInstantiation {
                tag_name: tag_name.to_string(),
                source,
            }
        })?;

        if let Some(parent) = parent {
            renderer.set_parent(parent);
        }

        Ok(renderer)
    }

    /// Check whether an element's tag is in the ignored set.
    ///
    /// Independent of [`Self::create_renderer_for_tag`]: the create path
    /// never consults the ignored set, and ignoring a tag does not stop a
    /// caller from attempting to create a renderer for it.
    #[must_use]
    pub fn is_tag_ignored(&self, tag: Node<'_, '_>) -> bool {
        self.ignored.contains(get_tag_name(tag))
    }

    /// Check if a constructor is registered for a tag name.
    #[must_use]
    pub fn has_renderer(&self, tag_name: &str) -> bool {
        self.constructors.contains_key(tag_name)
    }

    /// Return the set of all registered tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.constructors.keys().map(|s| s.as_str()).collect()
    }

    /// Return the set of all ignored tag names.
    #[must_use]
    pub fn ignored_tags(&self) -> HashSet<&str> {
        self.ignored.iter().map(|s| s.as_str()).collect()
    }
}

impl Default for RendererFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::sync::Arc;

    use roxmltree::Document;

    use super::*;
    use crate::factory::mapper::constructor_of;
    use crate::renderer::RendererKind;
    use crate::renderers::CircleRenderer;

    /// Mapper with a single mapped tag and a single ignored tag.
    struct TinyMapper;

    impl RendererMapper for TinyMapper {
        fn mapping(&self) -> HashMap<String, RendererConstructor> {
            let mut mapping: HashMap<String, RendererConstructor> = HashMap::new();
            mapping.insert("circle".to_string(), constructor_of::<CircleRenderer>());
            mapping
        }

        fn ignored_tags(&self) -> HashSet<String> {
            ["title"].iter().map(|tag| (*tag).to_string()).collect()
        }
    }

    /// Mapper whose only constructor always fails.
    struct FailingMapper;

    impl RendererMapper for FailingMapper {
        fn mapping(&self) -> HashMap<String, RendererConstructor> {
            let mut mapping: HashMap<String, RendererConstructor> = HashMap::new();
            let failing: RendererConstructor = Arc::new(|| Err("glyph cache exhausted".into()));
            mapping.insert("rect".to_string(), failing);
            mapping
        }

        fn ignored_tags(&self) -> HashSet<String> {
            HashSet::new()
        }
    }

    fn parse(xml: &str) -> Document<'_> {
        Document::parse(xml).unwrap()
    }

    #[test]
    fn test_create_renderer_for_mapped_tag() {
        let factory = RendererFactory::new();
        let doc = parse("<circle/>");

        let renderer = factory
            .create_renderer_for_tag(Some(doc.root_element()), None)
            .unwrap();
        assert_eq!(renderer.tag_name(), "circle");
        assert_eq!(renderer.kind(), RendererKind::Shape);
        assert_eq!(renderer.parent(), None);
    }

    #[test]
    fn test_create_renderer_links_parent() {
        let factory = RendererFactory::new();
        let doc = parse("<rect/>");
        let parent = RendererId::new(0);

        let renderer = factory
            .create_renderer_for_tag(Some(doc.root_element()), Some(parent))
            .unwrap();
        assert_eq!(renderer.parent(), Some(parent));
    }

    #[test]
    fn test_create_renderer_missing_tag() {
        let factory = RendererFactory::new();

        let err = factory
            .create_renderer_for_tag(None, None)
            .unwrap_err();
        assert!(matches!(err, ProcessingError::MissingTag));

        // The guard fires regardless of the parent argument.
        let err = factory
            .create_renderer_for_tag(None, Some(RendererId::new(9)))
            .unwrap_err();
        assert!(matches!(err, ProcessingError::MissingTag));
    }

    #[test]
    fn test_create_renderer_unmapped_tag() {
        let factory = RendererFactory::new();
        let doc = parse("<blink/>");

        let err = factory
            .create_renderer_for_tag(Some(doc.root_element()), None)
            .unwrap_err();
        match err {
            ProcessingError::UnmappedTag { tag_name } => assert_eq!(tag_name, "blink"),
            other => panic!("expected UnmappedTag, got {other:?}"),
        }
    }

    #[test]
    fn test_create_renderer_instantiation_failure() {
        let factory = RendererFactory::with_mapper(&FailingMapper);
        let doc = parse("<rect/>");

        let err = factory
            .create_renderer_for_tag(Some(doc.root_element()), None)
            .unwrap_err();
        match err {
            ProcessingError::RendererInstantiation { tag_name, source } => {
                assert_eq!(tag_name, "rect");
                assert_eq!(source.to_string(), "glyph cache exhausted");
            }
            other => panic!("expected RendererInstantiation, got {other:?}"),
        }
    }

    #[test]
    fn test_successive_calls_return_distinct_instances() {
        let factory = RendererFactory::new();
        let doc = parse("<g/>");

        let mut first = factory
            .create_renderer_for_tag(Some(doc.root_element()), None)
            .unwrap();
        let second = factory
            .create_renderer_for_tag(Some(doc.root_element()), None)
            .unwrap();

        // Mutating one instance leaves the other untouched.
        first.set_parent(RendererId::new(1));
        assert_eq!(first.parent(), Some(RendererId::new(1)));
        assert_eq!(second.parent(), None);
    }

    #[test]
    fn test_custom_mapper_fully_replaces_default() {
        let factory = RendererFactory::with_mapper(&TinyMapper);
        let doc = parse("<rect/>");

        // rect is mapped by the default mapper but not by TinyMapper.
        let err = factory
            .create_renderer_for_tag(Some(doc.root_element()), None)
            .unwrap_err();
        assert!(matches!(err, ProcessingError::UnmappedTag { .. }));

        assert!(factory.has_renderer("circle"));
        assert!(!factory.has_renderer("svg"));
    }

    #[test]
    fn test_is_tag_ignored() {
        let factory = RendererFactory::with_mapper(&TinyMapper);

        let title = parse("<title/>");
        assert!(factory.is_tag_ignored(title.root_element()));

        let circle = parse("<circle/>");
        assert!(!factory.is_tag_ignored(circle.root_element()));
    }

    #[test]
    fn test_dispatch_scenario() {
        // Registry {"circle"}, ignored {"title"}: circle dispatches to a
        // fresh unparented renderer, title is ignored, unknown names fail.
        let factory = RendererFactory::with_mapper(&TinyMapper);

        let circle = parse("<circle/>");
        let renderer = factory
            .create_renderer_for_tag(Some(circle.root_element()), None)
            .unwrap();
        assert_eq!(renderer.tag_name(), "circle");
        assert_eq!(renderer.parent(), None);

        let title = parse("<title/>");
        assert!(factory.is_tag_ignored(title.root_element()));

        let unknown = parse("<unknown/>");
        let err = factory
            .create_renderer_for_tag(Some(unknown.root_element()), None)
            .unwrap_err();
        match err {
            ProcessingError::UnmappedTag { tag_name } => assert_eq!(tag_name, "unknown"),
            other => panic!("expected UnmappedTag, got {other:?}"),
        }
    }

    #[test]
    fn test_all_default_ignored_tags_are_ignored() {
        let factory = RendererFactory::new();

        for tag in [
            "defs",
            "desc",
            "foreignObject",
            "metadata",
            "script",
            "style",
            "symbol",
            "title",
        ] {
            let xml = format!("<{tag}/>");
            let doc = parse(&xml);
            assert!(
                factory.is_tag_ignored(doc.root_element()),
                "tag '{tag}' should be ignored"
            );
        }
    }

    #[test]
    fn test_default_mapped_tags_are_not_ignored() {
        let factory = RendererFactory::new();

        for tag in ["circle", "rect", "svg", "g", "text"] {
            let xml = format!("<{tag}/>");
            let doc = parse(&xml);
            assert!(
                !factory.is_tag_ignored(doc.root_element()),
                "mapped tag '{tag}' should not be ignored"
            );
        }
    }

    #[test]
    fn test_all_default_tags_construct() {
        let factory = RendererFactory::new();

        for tag in factory.registered_tags().into_iter().collect::<Vec<_>>() {
            let xml = format!("<{tag}/>");
            let doc = parse(&xml);
            let renderer = factory
                .create_renderer_for_tag(Some(doc.root_element()), None)
                .unwrap_or_else(|err| panic!("tag '{tag}' failed to construct: {err}"));
            assert_eq!(renderer.tag_name(), tag);
        }
    }

    #[test]
    fn test_registry_is_a_snapshot() {
        // Two factories from the same mapper do not share mutable state;
        // each holds its own copy of the mapping.
        let a = RendererFactory::with_mapper(&TinyMapper);
        let b = RendererFactory::with_mapper(&TinyMapper);
        assert_eq!(a.registered_tags(), b.registered_tags());
        assert_eq!(a.ignored_tags(), b.ignored_tags());
    }

    #[test]
    fn test_introspection_queries() {
        let factory = RendererFactory::new();

        assert!(factory.has_renderer("path"));
        assert!(!factory.has_renderer("marker"));
        assert_eq!(factory.registered_tags().len(), 13);
        assert_eq!(factory.ignored_tags().len(), 8);
    }

    #[test]
    fn test_factory_is_shareable_across_threads() {
        let factory = RendererFactory::new();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let doc = parse("<path/>");
                    let renderer = factory
                        .create_renderer_for_tag(Some(doc.root_element()), None)
                        .unwrap();
                    assert_eq!(renderer.tag_name(), "path");
                });
            }
        });
    }
}
