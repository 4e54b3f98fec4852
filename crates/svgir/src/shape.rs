//! Conversion of graphics elements into shape descriptors
//!
//! Each element is converted by a builder function found through [`builder`]. Builders resolve
//! attributes against the element's viewport, substituting the documented default for any
//! attribute that's missing or invalid.
use svgir_ast::element::Element;
use svgir_collections::{
    element::ElementId,
    length::{resolve_font_size, resolve_length, resolve_length_or, split_list},
    viewport::{Axis, Viewport},
};
use svgir_path::Path;

use crate::{
    error::Error,
    options::Options,
    resource::{load_image, ImageSource, ResourceProvider},
};

#[derive(Debug, Clone, PartialEq)]
/// The font of a text element
pub struct Font {
    /// The font family, with quotes removed
    pub family: String,
    /// The font size in user units
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// A toolkit-neutral description of something drawn by an element
pub enum Shape {
    /// `<rect>`
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Horizontal corner radius
        rx: f64,
        /// Vertical corner radius
        ry: f64,
    },
    /// `<circle>`
    Circle {
        /// Horizontal center
        cx: f64,
        /// Vertical center
        cy: f64,
        /// Radius
        r: f64,
    },
    /// `<ellipse>`
    Ellipse {
        /// Horizontal center
        cx: f64,
        /// Vertical center
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
    },
    /// `<line>`
    Line {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
    },
    /// `<polygon>`, a closed list of points
    Polygon {
        /// The vertices
        points: Vec<[f64; 2]>,
    },
    /// `<polyline>`, an open list of points
    Polyline {
        /// The vertices
        points: Vec<[f64; 2]>,
    },
    /// `<path>`
    Path {
        /// The commands of the `d` attribute
        path: Path,
    },
    /// `<text>`
    Text {
        /// The x of the baseline origin
        x: f64,
        /// The y of the baseline origin
        y: f64,
        /// The character content
        content: String,
        /// The font, when both a family and size are declared
        font: Option<Font>,
    },
    /// `<image>`
    Image {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// The resolved image
        source: ImageSource,
    },
}

/// What builders need besides the element and it's viewport
pub struct Context<'a> {
    /// The conversion options
    pub options: &'a Options,
    /// The provider of linked resources
    pub resources: &'a dyn ResourceProvider,
}

/// Converts an element into a shape, or `None` when there's nothing to draw
pub type Builder<E> = fn(&E, &Viewport, &Context) -> Result<Option<Shape>, Error>;

/// Returns the builder for the element, if it's a graphics element
pub fn builder<E: Element>(id: ElementId) -> Option<Builder<E>> {
    let builder: Builder<E> = match id {
        ElementId::Rect => rect,
        ElementId::Circle => circle,
        ElementId::Ellipse => ellipse,
        ElementId::Line => line,
        ElementId::Polygon => polygon,
        ElementId::Polyline => polyline,
        ElementId::Path => path,
        ElementId::Text => text,
        ElementId::Image => image,
        _ => return None,
    };
    Some(builder)
}

/// Converts a graphics element into a shape.
///
/// Returns `None` for elements that aren't graphics elements, or that have nothing to draw.
///
/// # Errors
/// If the element's path data is invalid
pub fn build<E: Element>(
    element: &E,
    viewport: &Viewport,
    context: &Context,
) -> Result<Option<Shape>, Error> {
    let Some(builder) = builder::<E>(ElementId::new(element.local_name())) else {
        log::debug!("`<{}>` is not a graphics element", element.local_name());
        return Ok(None);
    };
    builder(element, viewport, context)
}

fn length<E: Element>(element: &E, name: &str, axis: Axis, viewport: &Viewport) -> f64 {
    resolve_length_or(element.attribute(name), axis, viewport, 0.0)
}

fn rect<E: Element>(
    element: &E,
    viewport: &Viewport,
    _context: &Context,
) -> Result<Option<Shape>, Error> {
    let width = length(element, "width", Axis::Horizontal, viewport);
    let height = length(element, "height", Axis::Vertical, viewport);
    let radius = |name, axis| {
        element
            .attribute(name)
            .and_then(|text| {
                resolve_length(text, axis, viewport)
                    .map_err(|error| log::warn!("{error}, using `auto`"))
                    .ok()
            })
            .filter(|radius: &f64| *radius >= 0.0)
    };
    let (rx, ry) = match (radius("rx", Axis::Horizontal), radius("ry", Axis::Vertical)) {
        (Some(rx), Some(ry)) => (rx, ry),
        (Some(r), None) | (None, Some(r)) => (r, r),
        (None, None) => (0.0, 0.0),
    };
    Ok(Some(Shape::Rect {
        x: length(element, "x", Axis::Horizontal, viewport),
        y: length(element, "y", Axis::Vertical, viewport),
        width,
        height,
        rx: rx.min(width / 2.0),
        ry: ry.min(height / 2.0),
    }))
}

fn circle<E: Element>(
    element: &E,
    viewport: &Viewport,
    _context: &Context,
) -> Result<Option<Shape>, Error> {
    Ok(Some(Shape::Circle {
        cx: length(element, "cx", Axis::Horizontal, viewport),
        cy: length(element, "cy", Axis::Vertical, viewport),
        r: length(element, "r", Axis::Diagonal, viewport),
    }))
}

fn ellipse<E: Element>(
    element: &E,
    viewport: &Viewport,
    _context: &Context,
) -> Result<Option<Shape>, Error> {
    Ok(Some(Shape::Ellipse {
        cx: length(element, "cx", Axis::Horizontal, viewport),
        cy: length(element, "cy", Axis::Vertical, viewport),
        rx: length(element, "rx", Axis::Horizontal, viewport),
        ry: length(element, "ry", Axis::Vertical, viewport),
    }))
}

/// All four coordinates are required, otherwise nothing is drawn.
fn line<E: Element>(
    element: &E,
    viewport: &Viewport,
    _context: &Context,
) -> Result<Option<Shape>, Error> {
    for attribute in ["x1", "y1", "x2", "y2"] {
        if !element.has_attribute(attribute) {
            log::debug!(
                "{}",
                Error::MissingRequiredGeometry {
                    element: "line",
                    attribute
                }
            );
            return Ok(None);
        }
    }
    Ok(Some(Shape::Line {
        x1: length(element, "x1", Axis::Horizontal, viewport),
        y1: length(element, "y1", Axis::Vertical, viewport),
        x2: length(element, "x2", Axis::Horizontal, viewport),
        y2: length(element, "y2", Axis::Vertical, viewport),
    }))
}

/// Reads a `points` list, pairing coordinates alternately as x and y.
///
/// A trailing unpaired coordinate is dropped and an invalid coordinate is read as `0`.
fn points<E: Element>(
    element: &E,
    name: &'static str,
    viewport: &Viewport,
) -> Option<Vec<[f64; 2]>> {
    let Some(text) = element.attribute("points") else {
        log::debug!(
            "{}",
            Error::MissingRequiredGeometry {
                element: name,
                attribute: "points"
            }
        );
        return None;
    };
    let coordinates: Vec<_> = split_list(text).collect();
    if coordinates.len() % 2 == 1 {
        log::debug!("dropping unpaired coordinate in `{text}`");
    }
    let coordinate = |text, axis| {
        resolve_length(text, axis, viewport).unwrap_or_else(|error| {
            log::warn!("{error}, using 0");
            0.0
        })
    };
    Some(
        coordinates
            .chunks_exact(2)
            .map(|pair| {
                [
                    coordinate(pair[0], Axis::Horizontal),
                    coordinate(pair[1], Axis::Vertical),
                ]
            })
            .collect(),
    )
}

fn polygon<E: Element>(
    element: &E,
    viewport: &Viewport,
    _context: &Context,
) -> Result<Option<Shape>, Error> {
    Ok(points(element, "polygon", viewport).map(|points| Shape::Polygon { points }))
}

fn polyline<E: Element>(
    element: &E,
    viewport: &Viewport,
    _context: &Context,
) -> Result<Option<Shape>, Error> {
    Ok(points(element, "polyline", viewport).map(|points| Shape::Polyline { points }))
}

fn path<E: Element>(
    element: &E,
    _viewport: &Viewport,
    _context: &Context,
) -> Result<Option<Shape>, Error> {
    let Some(definition) = element.attribute("d") else {
        return Ok(None);
    };
    let path = Path::parse(definition)?;
    if path.is_empty() {
        return Ok(None);
    }
    Ok(Some(Shape::Path { path }))
}

fn text<E: Element>(
    element: &E,
    viewport: &Viewport,
    _context: &Context,
) -> Result<Option<Shape>, Error> {
    let Some(content) = element.text().filter(|text| !text.trim().is_empty()) else {
        return Ok(None);
    };
    let font = match (element.attribute("font-family"), element.attribute("font-size")) {
        (Some(family), Some(size)) => resolve_font_size(size, viewport)
            .map(|size| Font {
                family: family.replace('\'', ""),
                size,
            })
            .map_err(|error| log::warn!("{error}, ignoring font"))
            .ok(),
        _ => None,
    };
    Ok(Some(Shape::Text {
        x: length(element, "x", Axis::Horizontal, viewport),
        y: length(element, "y", Axis::Vertical, viewport),
        content,
        font,
    }))
}

/// Resolves the `href` of an `<image>` or `<feImage>`
pub(crate) fn image_source<E: Element>(element: &E, context: &Context) -> Option<ImageSource> {
    let Some(href) = element.href() else {
        log::debug!("`<{}>` has no `href`", element.local_name());
        return None;
    };
    load_image(
        href,
        context.options.base_url.as_ref(),
        context.resources,
    )
    .map_err(|error| log::debug!("{error}"))
    .ok()
}

fn image<E: Element>(
    element: &E,
    viewport: &Viewport,
    context: &Context,
) -> Result<Option<Shape>, Error> {
    let Some(source) = image_source(element, context) else {
        return Ok(None);
    };
    Ok(Some(Shape::Image {
        x: length(element, "x", Axis::Horizontal, viewport),
        y: length(element, "y", Axis::Vertical, viewport),
        width: length(element, "width", Axis::Horizontal, viewport),
        height: length(element, "height", Axis::Vertical, viewport),
        source,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use svgir_ast::parse::parse;
    use url::Url;

    use super::*;

    fn build_one(source: &str, viewport: &Viewport) -> Result<Option<Shape>, Error> {
        let document = parse(source).unwrap();
        let options = Options {
            base_url: Url::parse("https://example.com/drawing.svg").ok(),
            ..Options::default()
        };
        let context = Context {
            options: &options,
            resources: &(),
        };
        build(&document.root_element(), viewport, &context)
    }

    #[test]
    fn rect() {
        let viewport = Viewport::new(200.0, 100.0);
        assert_eq!(
            build_one(r#"<rect x="10" y="50%" width="25%" height="20" />"#, &viewport),
            Ok(Some(Shape::Rect {
                x: 10.0,
                y: 50.0,
                width: 50.0,
                height: 20.0,
                rx: 0.0,
                ry: 0.0,
            }))
        );
        assert_eq!(
            build_one(r#"<rect width="40" height="10" rx="8" />"#, &viewport),
            Ok(Some(Shape::Rect {
                x: 0.0,
                y: 0.0,
                width: 40.0,
                height: 10.0,
                rx: 8.0,
                ry: 5.0,
            }))
        );
        assert_eq!(
            build_one(r#"<rect width="bad" />"#, &viewport),
            Ok(Some(Shape::Rect {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                rx: 0.0,
                ry: 0.0,
            }))
        );
    }

    #[test]
    fn circle_and_ellipse() {
        let viewport = Viewport::new(30.0, 40.0);
        assert_eq!(
            build_one(r#"<circle cx="50%" cy="50%" r="5" />"#, &viewport),
            Ok(Some(Shape::Circle {
                cx: 15.0,
                cy: 20.0,
                r: 5.0,
            }))
        );
        assert_eq!(
            build_one(r#"<ellipse rx="10%" ry="10%" />"#, &viewport),
            Ok(Some(Shape::Ellipse {
                cx: 0.0,
                cy: 0.0,
                rx: 3.0,
                ry: 4.0,
            }))
        );
    }

    #[test]
    fn line() {
        let viewport = Viewport::default();
        assert_eq!(
            build_one(r#"<line x1="0" y1="1" x2="2" y2="3" />"#, &viewport),
            Ok(Some(Shape::Line {
                x1: 0.0,
                y1: 1.0,
                x2: 2.0,
                y2: 3.0,
            }))
        );
        assert_eq!(
            build_one(r#"<line x1="0" y1="1" x2="2" />"#, &viewport),
            Ok(None)
        );
    }

    #[test]
    fn points() {
        let viewport = Viewport::new(100.0, 10.0);
        assert_eq!(
            build_one(r#"<polygon points="0,0 10%,50% 5 x 7" />"#, &viewport),
            Ok(Some(Shape::Polygon {
                points: vec![[0.0, 0.0], [10.0, 5.0], [5.0, 0.0]],
            }))
        );
        assert_eq!(
            build_one(r#"<polyline points="1 2,3 4" />"#, &viewport),
            Ok(Some(Shape::Polyline {
                points: vec![[1.0, 2.0], [3.0, 4.0]],
            }))
        );
        assert_eq!(build_one("<polyline />", &viewport), Ok(None));
    }

    #[test]
    fn path() {
        let viewport = Viewport::default();
        let Ok(Some(Shape::Path { path })) = build_one(
            "<path d=\"M 10 10 90 10 90 90 10 90 Z\" />",
            &viewport,
        ) else {
            panic!("expected a path");
        };
        insta::assert_snapshot!(path, @"M 10.0 10.0 L 90.0 10.0 L 90.0 90.0 L 10.0 90.0 Z");

        assert_eq!(
            build_one("<path d=\"M10 \u{2212}20\" />", &viewport),
            build_one("<path d=\"M10 -20\" />", &viewport)
        );
        assert_eq!(build_one("<path d=\"\" />", &viewport), Ok(None));
        assert_eq!(build_one("<path />", &viewport), Ok(None));
        assert_eq!(
            build_one("<path d=\"L 10 10\" />", &viewport),
            Err(Error::Path(svgir_path::parser::Error::InvalidFirstCommand))
        );
    }

    #[test]
    fn text() {
        let viewport = Viewport::default();
        assert_eq!(
            build_one(
                r#"<text x="5" y="6" font-family="'Open Sans'" font-size="12">Hello</text>"#,
                &viewport
            ),
            Ok(Some(Shape::Text {
                x: 5.0,
                y: 6.0,
                content: "Hello".to_string(),
                font: Some(Font {
                    family: "Open Sans".to_string(),
                    size: 12.0,
                }),
            }))
        );
        assert_eq!(
            build_one(r#"<text font-size="12">Hi</text>"#, &viewport),
            Ok(Some(Shape::Text {
                x: 0.0,
                y: 0.0,
                content: "Hi".to_string(),
                font: None,
            }))
        );
        assert_eq!(build_one("<text x=\"1\"> </text>", &viewport), Ok(None));
    }

    #[test]
    fn image() {
        let viewport = Viewport::default();
        assert_eq!(
            build_one(
                r#"<image href="img/a.png" width="10" height="20" />"#,
                &viewport
            ),
            Ok(Some(Shape::Image {
                x: 0.0,
                y: 0.0,
                width: 10.0,
                height: 20.0,
                source: ImageSource {
                    url: Url::parse("https://example.com/img/a.png").unwrap(),
                    data: None,
                },
            }))
        );

        let Ok(Some(Shape::Image { source, .. })) = build_one(
            r#"<image xmlns:xlink="http://www.w3.org/1999/xlink" xlink:href="data:,abc" />"#,
            &viewport,
        ) else {
            panic!("expected an image");
        };
        assert_eq!(source.data.as_deref(), Some(&b"abc"[..]));

        assert_eq!(build_one("<image />", &viewport), Ok(None));
    }

    #[test]
    fn unknown() {
        assert_eq!(build_one("<marker />", &Viewport::default()), Ok(None));
    }
}
