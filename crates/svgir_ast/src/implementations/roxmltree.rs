//! Reading elements of a roxmltree document
//!
//! # Quirks
//!
//! - Only the `xml` and `xlink` prefixes are understood in attribute names, and they're matched
//!   by namespace rather than by the prefix written in the document
//! - Non-element nodes are skipped by [`Element::children`]
use roxmltree::Node;

use crate::element::Element;

/// The namespace of `xlink:*` attributes
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

impl<'a, 'input: 'a> Element for Node<'a, 'input> {
    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        match name.split_once(':') {
            Some(("xlink", local)) => Node::attribute(self, (XLINK_NS, local)),
            Some(("xml", local)) => Node::attribute(self, (roxmltree::NS_XML_URI, local)),
            _ => Node::attribute(self, name),
        }
    }

    fn children(&self) -> Vec<Self> {
        Node::children(self)
            .filter(|node| node.is_element())
            .collect()
    }

    fn text(&self) -> Option<String> {
        let text: String = self
            .descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| Node::text(&node))
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{element::Element, parse::parse};

    #[test]
    fn element() {
        let document = parse(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
    <!-- comment -->
    <text x="1">Hello <tspan>world</tspan></text>
    <image xlink:href="a.png" />
    <image href="b.png" xlink:href="a.png" />
    <g id="empty"></g>
</svg>"#,
        )
        .unwrap();
        let root = document.root_element();
        assert_eq!(Element::local_name(&root), "svg");

        let children = Element::children(&root);
        assert_eq!(children.len(), 4);
        assert_eq!(Element::local_name(&children[0]), "text");
        assert_eq!(Element::attribute(&children[0], "x"), Some("1"));
        assert_eq!(Element::text(&children[0]), Some("Hello world".to_string()));

        assert_eq!(children[1].href(), Some("a.png"));
        assert_eq!(Element::attribute(&children[1], "href"), None);
        assert_eq!(children[2].href(), Some("b.png"));

        assert_eq!(Element::id(&children[3]), Some("empty"));
        assert_eq!(Element::text(&children[3]), None);
        assert!(Element::has_attribute(&children[3], "id"));
        assert!(Element::first_element_child(&children[3]).is_none());
    }
}
