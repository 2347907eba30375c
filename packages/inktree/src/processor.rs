//! Tree processor that builds a renderer tree from a parsed document.

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::error::Result;
use crate::factory::RendererFactory;
use crate::renderer::{NodeRenderer, RendererId, RendererKind};
use crate::xml::{element_children, get_tag_name};

/// Arena owning the renderers produced for one document.
///
/// Child linkage lives here: the factory only sets parent back-references,
/// and the tree records which ids hang under which. Ids are stable for the
/// tree's lifetime.
#[derive(Debug, Default)]
pub struct RendererTree {
    entries: Vec<TreeEntry>,
    root: Option<RendererId>,
}

#[derive(Debug)]
struct TreeEntry {
    renderer: Box<dyn NodeRenderer>,
    children: Vec<RendererId>,
}

impl RendererTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a renderer under an optional parent and return its id.
    ///
    /// The first renderer added without a parent becomes the root. A parent
    /// id that does not exist in this tree is left unlinked.
    pub fn push(
        &mut self,
        renderer: Box<dyn NodeRenderer>,
        parent: Option<RendererId>,
    ) -> RendererId {
        let id = RendererId::new(self.entries.len());

        match parent {
            Some(parent) => {
                if let Some(entry) = self.entries.get_mut(parent.index()) {
                    entry.children.push(id);
                }
            }
            None => {
                if self.root.is_none() {
                    self.root = Some(id);
                }
            }
        }

        self.entries.push(TreeEntry {
            renderer,
            children: Vec::new(),
        });
        id
    }

    /// Id of the root renderer, if the tree is non-empty.
    #[must_use]
    pub fn root(&self) -> Option<RendererId> {
        self.root
    }

    /// Look up a renderer by id.
    #[must_use]
    pub fn renderer(&self, id: RendererId) -> Option<&dyn NodeRenderer> {
        self.entries.get(id.index()).map(|e| e.renderer.as_ref())
    }

    /// Child ids of a renderer, in document order.
    #[must_use]
    pub fn children(&self, id: RendererId) -> &[RendererId] {
        self.entries
            .get(id.index())
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of renderers in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree holds no renderers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all renderers in insertion (document) order.
    pub fn iter(&self) -> impl Iterator<Item = (RendererId, &dyn NodeRenderer)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (RendererId::new(index), entry.renderer.as_ref()))
    }

    /// Serializable report of the tree, rooted at the root renderer.
    ///
    /// Returns `None` for an empty tree.
    #[must_use]
    pub fn summary(&self) -> Option<TreeSummary> {
        self.root.map(|root| self.summarize(root))
    }

    fn summarize(&self, id: RendererId) -> TreeSummary {
        let entry = &self.entries[id.index()];
        TreeSummary {
            tag: entry.renderer.tag_name().to_string(),
            kind: entry.renderer.kind(),
            children: entry
                .children
                .iter()
                .map(|&child| self.summarize(child))
                .collect(),
        }
    }
}

/// Serializable report of one renderer subtree.
#[derive(Debug, Serialize)]
pub struct TreeSummary {
    /// Tag name the renderer draws.
    pub tag: String,
    /// Kind classification of the renderer.
    pub kind: RendererKind,
    /// Summaries of child renderers, in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSummary>,
}

/// Processor that walks a parsed document and assembles a renderer tree.
///
/// Ignored tags prune their whole subtree. Every other element is dispatched
/// through the factory; the resulting renderer is parented to the enclosing
/// element's id. Strict by default: the first dispatch failure aborts the
/// walk. In lenient mode failures are logged and the offending subtree is
/// skipped instead.
pub struct TreeProcessor {
    factory: RendererFactory,
    lenient: bool,
}

impl TreeProcessor {
    /// Create a strict processor around a factory.
    #[must_use]
    pub fn new(factory: RendererFactory) -> Self {
        Self {
            factory,
            lenient: false,
        }
    }

    /// Log and skip failed subtrees instead of aborting on the first error.
    #[must_use]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    /// Get a reference to the underlying factory.
    #[must_use]
    pub fn factory(&self) -> &RendererFactory {
        &self.factory
    }

    /// Build the renderer tree for a parsed document.
    ///
    /// # Errors
    /// In strict mode, returns the first dispatch error encountered
    /// ([`crate::ProcessingError::UnmappedTag`] for unsupported elements,
    /// [`crate::ProcessingError::RendererInstantiation`] for constructor
    /// failures). Lenient mode only fails if renderer construction is
    /// impossible for reasons outside dispatch.
    pub fn process(&self, doc: &Document<'_>) -> Result<RendererTree> {
        let mut tree = RendererTree::new();
        self.process_element(doc.root_element(), None, &mut tree)?;
        Ok(tree)
    }

    fn process_element(
        &self,
        node: Node<'_, '_>,
        parent: Option<RendererId>,
        tree: &mut RendererTree,
    ) -> Result<()> {
        // Ignored tags take their whole subtree with them.
        if self.factory.is_tag_ignored(node) {
            return Ok(());
        }

        let renderer = match self.factory.create_renderer_for_tag(Some(node), parent) {
            Ok(renderer) => renderer,
            Err(err) if self.lenient => {
                tracing::warn!(
                    error = %err,
                    tag = %get_tag_name(node),
                    "Skipping element without a renderer"
                );
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let id = tree.push(renderer, parent);

        for child in element_children(node) {
            self.process_element(child, Some(id), tree)?;
        }
        Ok(())
    }
}
