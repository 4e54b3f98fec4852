/*!
Converts an SVG element tree into toolkit-neutral descriptions of what it draws.

Graphics elements become [`Shape`]s, `<filter>` elements become [`FilterGraph`]s, and the
document as a whole becomes a [`Document`] of groups and graphics. Attributes are resolved into
absolute user-space numbers against the [`Viewport`](svgir_collections::viewport::Viewport) of
each element, so consumers never need to read attribute text.

Any tree can be converted by implementing [`Element`](svgir_ast::element::Element) for it's
nodes. With the `roxmltree` feature, [`roxmltree`](https://docs.rs/roxmltree) nodes are
supported out of the box.

# Examples

```
use svgir::{Document, Node, Options, Shape};

let source = r#"<svg viewBox="0 0 200 100">
    <defs>
        <filter id="shadow">
            <feOffset dx="2" dy="2" result="offset" />
            <feMerge>
                <feMergeNode in="offset" />
                <feMergeNode in="SourceGraphic" />
            </feMerge>
        </filter>
    </defs>
    <rect width="50%" height="50%" filter="url(#shadow)" />
</svg>"#;
let tree = svgir_ast::parse::parse(source).unwrap();
let document = Document::build(&tree.root_element(), &Options::default(), &()).unwrap();

let Node::Graphic(graphic) = &document.children[0] else {
    unreachable!()
};
let Shape::Rect { width, height, .. } = graphic.shape else {
    unreachable!()
};
assert_eq!((width, height), (100.0, 50.0));
assert_eq!(document.filter_of(graphic).map(|filter| filter.len()), Some(2));
```
*/

pub mod document;
pub mod error;
pub mod filter;
pub mod options;
pub mod resource;
pub mod shape;

pub use crate::document::{Document, Graphic, Group, Node};
pub use crate::error::Error;
pub use crate::filter::{FilterEffect, FilterGraph, InputSource, Light, Primitive};
pub use crate::options::Options;
pub use crate::resource::{ImageSource, ResourceProvider};
pub use crate::shape::{Font, Shape};
