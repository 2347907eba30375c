//! XML utility functions for navigating parsed SVG documents.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// SVG documents usually carry the `http://www.w3.org/2000/svg` namespace;
/// dispatch keys are the local names only, so `svg:circle` and `circle`
/// resolve identically.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use inktree::xml::get_tag_name;
///
/// let xml = r#"<svg xmlns="http://www.w3.org/2000/svg"><circle r="4"/></svg>"#;
/// let doc = Document::parse(xml).unwrap();
/// let circle = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(circle), "circle");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Iterate over the element children of a node, skipping text and comments.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use inktree::xml::element_children;
///
/// let xml = r#"<g><!-- marker --><rect/>stray text<circle/></g>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let children: Vec<_> = element_children(doc.root_element()).collect();
/// assert_eq!(children.len(), 2);
/// ```
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_strips_namespace() {
        let xml = r#"<s:svg xmlns:s="http://www.w3.org/2000/svg"><s:rect/></s:svg>"#;
        let doc = Document::parse(xml).unwrap();

        assert_eq!(get_tag_name(doc.root_element()), "svg");
        let rect = doc.root_element().first_element_child().unwrap();
        assert_eq!(get_tag_name(rect), "rect");
    }

    #[test]
    fn test_element_children_skips_non_elements() {
        let xml = "<g>text<line/><!-- c --><path/></g>";
        let doc = Document::parse(xml).unwrap();

        let names: Vec<_> = element_children(doc.root_element())
            .map(get_tag_name)
            .collect();
        assert_eq!(names, vec!["line", "path"]);
    }
}
