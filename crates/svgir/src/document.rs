//! Walks an element tree, building the shapes of it's graphics elements and the graphs of it's
//! filters.
use indexmap::IndexMap;
use svgir_ast::element::Element;
use svgir_collections::{
    element::ElementId,
    length::{resolve_font_size, resolve_length},
    viewport::{Axis, ViewBox, Viewport},
};
use svgir_parse::{error::Error as ParseError, Parse, Parser};

use crate::{
    error::Error,
    filter::{self, FilterGraph},
    options::Options,
    resource::ResourceProvider,
    shape::{self, Context, Shape},
};

#[derive(Debug, Clone, PartialEq)]
/// A node of the converted tree
pub enum Node {
    /// A container, such as `<g>` or a nested `<svg>`
    Group(Group),
    /// Something drawn
    Graphic(Graphic),
}

#[derive(Debug, Clone, PartialEq)]
/// The converted children of a container element
pub struct Group {
    /// The `id` of the container
    pub id: Option<String>,
    /// The viewport established by a nested `<svg>`
    pub viewport: Option<Viewport>,
    /// The converted children, in document order
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
/// A converted graphics element
pub struct Graphic {
    /// The `id` of the element
    pub id: Option<String>,
    /// What's drawn
    pub shape: Shape,
    /// The `id` of the filter referenced by `filter="url(#id)"`
    pub filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// A converted `<svg>` document
pub struct Document {
    /// The viewport of the root element
    pub viewport: Viewport,
    /// The converted children of the root element
    pub children: Vec<Node>,
    /// The filters of the document by `id`, in document order
    pub filters: IndexMap<String, FilterGraph>,
}

impl Document {
    /// Converts the tree of an `<svg>` root element.
    ///
    /// # Errors
    /// If the root isn't an `<svg>` element, or when a path can't be parsed in strict mode
    ///
    /// # Examples
    ///
    /// ```
    /// use svgir::{Document, Node, Options, Shape};
    ///
    /// let source = r#"<svg width="100" height="100"><circle cx="50%" r="25" /></svg>"#;
    /// let tree = svgir_ast::parse::parse(source).unwrap();
    /// let document = Document::build(&tree.root_element(), &Options::default(), &()).unwrap();
    ///
    /// let Node::Graphic(graphic) = &document.children[0] else {
    ///     unreachable!()
    /// };
    /// assert_eq!(graphic.shape, Shape::Circle { cx: 50.0, cy: 0.0, r: 25.0 });
    /// ```
    pub fn build<E: Element>(
        root: &E,
        options: &Options,
        resources: &dyn ResourceProvider,
    ) -> Result<Self, Error> {
        if ElementId::new(root.local_name()) != ElementId::Svg {
            return Err(Error::NotSvg(root.local_name().to_string()));
        }
        let viewport = root_viewport(root, options);
        let mut builder = Builder {
            context: Context { options, resources },
            filters: IndexMap::new(),
        };
        let children = builder.children(root, &viewport)?;
        Ok(Self {
            viewport,
            children,
            filters: builder.filters,
        })
    }

    /// Returns the filter referenced by the graphic
    pub fn filter_of(&self, graphic: &Graphic) -> Option<&FilterGraph> {
        let id = graphic.filter.as_deref()?;
        let filter = self.filters.get(id);
        if filter.is_none() {
            log::debug!("{}", Error::UnresolvedReference(format!("url(#{id})")));
        }
        filter
    }
}

struct Builder<'a> {
    context: Context<'a>,
    filters: IndexMap<String, FilterGraph>,
}

impl Builder<'_> {
    fn children<E: Element>(&mut self, parent: &E, viewport: &Viewport) -> Result<Vec<Node>, Error> {
        let mut nodes = vec![];
        for child in parent.children() {
            if let Some(node) = self.node(&child, viewport)? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    fn node<E: Element>(&mut self, element: &E, viewport: &Viewport) -> Result<Option<Node>, Error> {
        let group = |viewport, children| {
            Node::Group(Group {
                id: element.id().map(String::from),
                viewport,
                children,
            })
        };
        Ok(match ElementId::new(element.local_name()) {
            ElementId::Svg => {
                let nested = viewport.nested(
                    size(element, "width", Axis::Horizontal, viewport),
                    size(element, "height", Axis::Vertical, viewport),
                    view_box(element),
                );
                let children = self.children(element, &nested)?;
                Some(group(Some(nested), children))
            }
            id if id.is_container() => {
                let children = self.children(element, viewport)?;
                Some(group(None, children))
            }
            ElementId::Filter => {
                self.filter(element, viewport);
                None
            }
            id if id.is_graphic() => self.graphic(element, viewport)?.map(Node::Graphic),
            _ => {
                log::debug!("skipping `<{}>`", element.local_name());
                self.collect_filters(element, viewport);
                None
            }
        })
    }

    fn graphic<E: Element>(
        &mut self,
        element: &E,
        viewport: &Viewport,
    ) -> Result<Option<Graphic>, Error> {
        let shape = match shape::build(element, viewport, &self.context) {
            Ok(Some(shape)) => shape,
            Ok(None) => return Ok(None),
            Err(error) if self.context.options.strict => return Err(error),
            Err(error) => {
                log::warn!("skipping `<{}>`: {error}", element.local_name());
                return Ok(None);
            }
        };
        Ok(Some(Graphic {
            id: element.id().map(String::from),
            shape,
            filter: element.attribute("filter").and_then(filter_reference),
        }))
    }

    /// Finds filters within elements that aren't drawn, such as `<defs>`
    fn collect_filters<E: Element>(&mut self, element: &E, viewport: &Viewport) {
        for child in element.children() {
            if ElementId::new(child.local_name()) == ElementId::Filter {
                self.filter(&child, viewport);
            } else {
                self.collect_filters(&child, viewport);
            }
        }
    }

    fn filter<E: Element>(&mut self, element: &E, viewport: &Viewport) {
        let Some(id) = element.id() else {
            log::debug!("skipping `<filter>` without an `id`");
            return;
        };
        if self.filters.contains_key(id) {
            log::debug!("skipping duplicate `<filter id=\"{id}\">`");
            return;
        }
        let graph = filter::build(element, viewport, &self.context);
        self.filters.insert(id.to_string(), graph);
    }
}

fn root_viewport<E: Element>(root: &E, options: &Options) -> Viewport {
    let initial = Viewport::default().with_font_size(options.default_font_size);
    let font_size = root
        .attribute("font-size")
        .and_then(|text| {
            resolve_font_size(text, &initial)
                .map_err(|error| log::warn!("{error}, using {}", initial.font_size))
                .ok()
        })
        .unwrap_or(initial.font_size);
    let initial = initial.with_font_size(font_size);
    Viewport {
        width: size(root, "width", Axis::Horizontal, &initial),
        height: size(root, "height", Axis::Vertical, &initial),
        ..initial
    }
    .with_view_box(view_box(root))
}

fn size<E: Element>(element: &E, name: &str, axis: Axis, viewport: &Viewport) -> Option<f64> {
    let text = element.attribute(name)?;
    resolve_length(text, axis, viewport)
        .map_err(|error| log::warn!("{error}, ignoring `{name}`"))
        .ok()
}

fn view_box<E: Element>(element: &E) -> Option<ViewBox> {
    let text = element.attribute("viewBox")?;
    ViewBox::parse_string(text)
        .map_err(|error| log::warn!("invalid `viewBox=\"{text}\"`: {error}"))
        .ok()
}

/// Reads the id of a `url(#id)` reference
fn filter_reference(text: &str) -> Option<String> {
    match url_id(&mut Parser::new(text)) {
        Ok(id) => Some(id.to_string()),
        Err(_) if text.trim() == "none" => None,
        Err(error) => {
            log::debug!("ignoring `filter=\"{text}\"`: {error}");
            None
        }
    }
}

fn url_id<'input>(input: &mut Parser<'input>) -> Result<&'input str, ParseError<'input>> {
    input.skip_whitespace();
    input.expect_str("url(")?;
    input.skip_whitespace();
    let quote = match input.current()? {
        quote @ ('"' | '\'') => {
            input.advance();
            Some(quote)
        }
        _ => None,
    };
    input.expect_char('#')?;
    let id = input.expect_ident()?;
    if let Some(quote) = quote {
        input.expect_char(quote)?;
    }
    input.skip_whitespace();
    input.expect_char(')')?;
    input.skip_whitespace();
    input.expect_done()?;
    Ok(id)
}
