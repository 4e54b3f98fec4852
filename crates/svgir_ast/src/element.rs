//! The read-only view of an element

/// An element of an XML tree.
///
/// Attribute names are qualified, so that `xlink:href` refers to the `href` attribute of the
/// XLink namespace.
pub trait Element: Sized {
    /// Returns the local part of the element's name, such as `rect` or `feOffset`
    fn local_name(&self) -> &str;

    /// Returns the value of an attribute
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Returns the element children, in document order
    fn children(&self) -> Vec<Self>;

    /// Returns the character content of the element and it's descendants, if there is any
    fn text(&self) -> Option<String>;

    /// Returns whether the attribute is present
    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Returns the first element child
    fn first_element_child(&self) -> Option<Self> {
        self.children().into_iter().next()
    }

    /// Returns the `id` attribute
    fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Returns the `href` attribute, falling back to `xlink:href`
    fn href(&self) -> Option<&str> {
        self.attribute("href")
            .or_else(|| self.attribute("xlink:href"))
    }
}
