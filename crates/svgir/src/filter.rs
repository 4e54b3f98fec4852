//! Conversion of `<filter>` elements into graphs of filter primitives
//!
//! [w3 | Filter Effects](https://drafts.fxtf.org/filter-effects/)
use indexmap::IndexMap;
use svgir_ast::element::Element;
use svgir_collections::{
    color::{resolve_color, resolve_opacity, Rgba},
    element::ElementId,
    filter_effect::Input,
    length::{resolve_length_or, resolve_number, resolve_number_or, split_list},
    viewport::{Axis, Viewport},
};
use svgir_parse::Parse;

use crate::{
    resource::ImageSource,
    shape::{image_source, Context},
};

static SOURCE_GRAPHIC: Input = Input::SourceGraphic;

#[derive(Debug, Clone, PartialEq)]
/// The light source of a lighting primitive
pub enum Light {
    /// `<feDistantLight>`, infinitely far away
    Distant {
        /// Direction angle on the XY plane, in degrees
        azimuth: f64,
        /// Direction angle from the XY plane towards the Z axis, in degrees
        elevation: f64,
    },
    /// `<fePointLight>`
    Point {
        /// X position
        x: f64,
        /// Y position
        y: f64,
        /// Z position
        z: f64,
    },
    /// `<feSpotLight>`
    Spot {
        /// X position
        x: f64,
        /// Y position
        y: f64,
        /// Z position
        z: f64,
        /// The point the light is pointing at
        points_at: [f64; 3],
        /// Controls the focus of the light
        specular_exponent: f64,
        /// The angle in degrees beyond which no light is projected
        limiting_cone_angle: Option<f64>,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// The operation of a filter primitive element
pub enum Primitive {
    /// `<feGaussianBlur>`
    GaussianBlur {
        /// The blur radius
        std_deviation: f64,
    },
    /// `<feDropShadow>`
    DropShadow {
        /// Horizontal offset of the shadow
        dx: f64,
        /// Vertical offset of the shadow
        dy: f64,
        /// The blur radius of the shadow
        std_deviation: f64,
        /// The color of the shadow
        color: Rgba,
    },
    /// `<feFlood>`
    Flood {
        /// Left edge of the subregion
        x: f64,
        /// Top edge of the subregion
        y: f64,
        /// Width of the subregion
        width: f64,
        /// Height of the subregion
        height: f64,
        /// The fill color
        color: Rgba,
    },
    /// `<feOffset>`
    Offset {
        /// Horizontal offset
        dx: f64,
        /// Vertical offset
        dy: f64,
    },
    /// `<feImage>`
    Image {
        /// Left edge of the subregion
        x: f64,
        /// Top edge of the subregion
        y: f64,
        /// Width of the subregion
        width: f64,
        /// Height of the subregion
        height: f64,
        /// The image, when the reference could be resolved
        source: Option<ImageSource>,
    },
    /// `<feSpecularLighting>`
    SpecularLighting {
        /// Height of the surface when the input alpha is one
        surface_scale: f64,
        /// The `ks` of the Phong lighting model
        specular_constant: f64,
        /// Controls the shininess of the surface
        specular_exponent: f64,
        /// The color of the light, when declared
        lighting_color: Option<Rgba>,
        /// The light source
        light: Light,
    },
    /// `<feMerge>`
    Merge {
        /// The `in` of each `<feMergeNode>`, in document order
        inputs: Vec<Input>,
    },
}

impl Primitive {
    /// Whether the primitive reads an input image.
    ///
    /// Images draw their own content and merges read their nodes' inputs instead.
    pub fn takes_input(&self) -> bool {
        !matches!(self, Self::Image { .. } | Self::Merge { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// A filter primitive and how it's connected to others in it's filter
pub struct FilterEffect {
    /// The name others may refer to the output of this effect by
    pub result: Option<String>,
    /// The declared input, if any
    pub input: Option<Input>,
    /// The operation
    pub primitive: Primitive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Where an effect reads it's input from
pub enum InputSource<'a> {
    /// A keyword input, such as `SourceGraphic`
    Keyword(&'a Input),
    /// The output of the effect at the index
    Effect(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
/// The primitives of a `<filter>`, in document order
pub struct FilterGraph {
    effects: Vec<FilterEffect>,
    results: IndexMap<String, usize>,
}

impl FilterGraph {
    /// Appends an effect, making it's result the latest one with that name
    pub fn push(&mut self, effect: FilterEffect) {
        if let Some(result) = &effect.result {
            self.results.insert(result.clone(), self.effects.len());
        }
        self.effects.push(effect);
    }

    /// The effects in document order
    pub fn effects(&self) -> &[FilterEffect] {
        &self.effects
    }

    /// Returns the last effect with the `result` name
    pub fn get(&self, result: &str) -> Option<&FilterEffect> {
        self.results
            .get(result)
            .and_then(|index| self.effects.get(*index))
    }

    /// The number of effects
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the filter has no effects
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Returns where the effect at the index reads it's input from.
    ///
    /// A missing `in` reads the previous effect, or `SourceGraphic` for the first. A reference
    /// reads the latest effect before this one with that result. Returns `None` for effects
    /// without input, and for forward or unknown references.
    pub fn input_of(&self, index: usize) -> Option<InputSource<'_>> {
        let effect = self.effects.get(index)?;
        if !effect.primitive.takes_input() {
            return None;
        }
        match &effect.input {
            None => Some(match index.checked_sub(1) {
                Some(previous) => InputSource::Effect(previous),
                None => InputSource::Keyword(&SOURCE_GRAPHIC),
            }),
            Some(input) => self.resolve(input, index),
        }
    }

    /// Returns where each node of the merge at the index reads from, with `None` for forward
    /// or unknown references.
    ///
    /// Returns an empty list if the effect isn't a merge.
    pub fn merge_inputs(&self, index: usize) -> Vec<Option<InputSource<'_>>> {
        let Some(FilterEffect {
            primitive: Primitive::Merge { inputs },
            ..
        }) = self.effects.get(index)
        else {
            return vec![];
        };
        inputs
            .iter()
            .map(|input| self.resolve(input, index))
            .collect()
    }

    fn resolve<'a>(&'a self, input: &'a Input, before: usize) -> Option<InputSource<'a>> {
        let Some(name) = input.reference() else {
            return Some(InputSource::Keyword(input));
        };
        let source = self.effects[..before]
            .iter()
            .rposition(|effect| effect.result.as_deref() == Some(name))
            .map(InputSource::Effect);
        if source.is_none() {
            log::debug!("`{name}` does not refer to a preceding result");
        }
        source
    }
}

/// Converts a filter primitive element, or returns `None` when it has no effect
pub type Builder<E> = fn(&E, &Viewport, &Context) -> Option<Primitive>;

/// Returns the builder for the element, if it's a filter primitive
pub fn builder<E: Element>(id: ElementId) -> Option<Builder<E>> {
    let builder: Builder<E> = match id {
        ElementId::FeGaussianBlur => gaussian_blur,
        ElementId::FeDropShadow => drop_shadow,
        ElementId::FeFlood => flood,
        ElementId::FeOffset => offset,
        ElementId::FeImage => image,
        ElementId::FeSpecularLighting => specular_lighting,
        ElementId::FeMerge => merge,
        _ => return None,
    };
    Some(builder)
}

/// Converts the children of a `<filter>` into a graph of effects
pub fn build<E: Element>(filter: &E, viewport: &Viewport, context: &Context) -> FilterGraph {
    let mut graph = FilterGraph::default();
    for child in filter.children() {
        let Some(builder) = builder::<E>(ElementId::new(child.local_name())) else {
            log::debug!("skipping unsupported primitive `<{}>`", child.local_name());
            continue;
        };
        let Some(primitive) = builder(&child, viewport, context) else {
            continue;
        };
        let input = if primitive.takes_input() {
            child.attribute("in").map(parse_input)
        } else {
            None
        };
        graph.push(FilterEffect {
            result: child
                .attribute("result")
                .map(str::trim)
                .filter(|result| !result.is_empty())
                .map(String::from),
            input,
            primitive,
        });
    }
    graph
}

/// Reads an `in` as a keyword, or else as a reference to a `result` by name.
///
/// A name that isn't a valid ident is kept as written, so it resolves to no input rather than
/// to the previous effect.
fn parse_input(text: &str) -> Input {
    Input::parse_string(text).unwrap_or_else(|error| {
        log::debug!("filter input `{text}` isn't an ident: {error}");
        Input::Reference(text.trim().to_string())
    })
}

/// Only the first number is used when a pair is given
fn std_deviation<E: Element>(element: &E) -> f64 {
    resolve_number_or(
        element
            .attribute("stdDeviation")
            .and_then(|text| split_list(text).next()),
        0.0,
    )
}

fn flood_color<E: Element>(element: &E) -> Rgba {
    let opacity = element
        .attribute("flood-opacity")
        .map_or(1.0, |text| {
            resolve_opacity(text).unwrap_or_else(|error| {
                log::warn!("{error}, using 1");
                1.0
            })
        });
    element
        .attribute("flood-color")
        .and_then(|text| {
            resolve_color(text, Some(opacity))
                .map_err(|error| log::warn!("{error}, using black"))
                .ok()
        })
        .unwrap_or(Rgba::BLACK.with_alpha(opacity))
}

fn length<E: Element>(element: &E, name: &str, axis: Axis, viewport: &Viewport) -> f64 {
    resolve_length_or(element.attribute(name), axis, viewport, 0.0)
}

fn number<E: Element>(element: &E, name: &str, default: f64) -> f64 {
    resolve_number_or(element.attribute(name), default)
}

fn gaussian_blur<E: Element>(
    element: &E,
    _viewport: &Viewport,
    _context: &Context,
) -> Option<Primitive> {
    Some(Primitive::GaussianBlur {
        std_deviation: std_deviation(element),
    })
}

fn drop_shadow<E: Element>(
    element: &E,
    viewport: &Viewport,
    _context: &Context,
) -> Option<Primitive> {
    Some(Primitive::DropShadow {
        dx: length(element, "dx", Axis::Horizontal, viewport),
        dy: length(element, "dy", Axis::Horizontal, viewport),
        std_deviation: std_deviation(element),
        color: flood_color(element),
    })
}

fn flood<E: Element>(element: &E, viewport: &Viewport, _context: &Context) -> Option<Primitive> {
    Some(Primitive::Flood {
        x: length(element, "x", Axis::Horizontal, viewport),
        y: length(element, "y", Axis::Vertical, viewport),
        width: length(element, "width", Axis::Horizontal, viewport),
        height: length(element, "height", Axis::Vertical, viewport),
        color: flood_color(element),
    })
}

fn offset<E: Element>(element: &E, viewport: &Viewport, _context: &Context) -> Option<Primitive> {
    Some(Primitive::Offset {
        dx: length(element, "dx", Axis::Horizontal, viewport),
        dy: length(element, "dy", Axis::Horizontal, viewport),
    })
}

fn image<E: Element>(element: &E, viewport: &Viewport, context: &Context) -> Option<Primitive> {
    Some(Primitive::Image {
        x: length(element, "x", Axis::Horizontal, viewport),
        y: length(element, "y", Axis::Vertical, viewport),
        width: length(element, "width", Axis::Horizontal, viewport),
        height: length(element, "height", Axis::Vertical, viewport),
        source: image_source(element, context),
    })
}

fn light<E: Element>(element: &E) -> Option<Light> {
    match ElementId::new(element.local_name()) {
        ElementId::FeDistantLight => Some(Light::Distant {
            azimuth: number(element, "azimuth", 0.0),
            elevation: number(element, "elevation", 0.0),
        }),
        ElementId::FePointLight => Some(Light::Point {
            x: number(element, "x", 0.0),
            y: number(element, "y", 0.0),
            z: number(element, "z", 0.0),
        }),
        ElementId::FeSpotLight => Some(Light::Spot {
            x: number(element, "x", 0.0),
            y: number(element, "y", 0.0),
            z: number(element, "z", 0.0),
            points_at: [
                number(element, "pointsAtX", 0.0),
                number(element, "pointsAtY", 0.0),
                number(element, "pointsAtZ", 0.0),
            ],
            specular_exponent: number(element, "specularExponent", 1.0),
            limiting_cone_angle: element
                .attribute("limitingConeAngle")
                .and_then(|text| resolve_number(text).ok()),
        }),
        _ => None,
    }
}

fn specular_lighting<E: Element>(
    element: &E,
    _viewport: &Viewport,
    _context: &Context,
) -> Option<Primitive> {
    let Some(light) = element
        .first_element_child()
        .filter(|child| ElementId::new(child.local_name()).is_light_source())
        .and_then(|child| light(&child))
    else {
        log::debug!("`<feSpecularLighting>` has no light source");
        return None;
    };
    Some(Primitive::SpecularLighting {
        surface_scale: number(element, "surfaceScale", 1.5),
        specular_constant: number(element, "specularConstant", 0.3),
        specular_exponent: number(element, "specularExponent", 20.0),
        lighting_color: element.attribute("lighting-color").and_then(|text| {
            resolve_color(text, None)
                .map_err(|error| log::warn!("{error}, ignoring `lighting-color`"))
                .ok()
        }),
        light,
    })
}

fn merge<E: Element>(element: &E, _viewport: &Viewport, _context: &Context) -> Option<Primitive> {
    let inputs = element
        .children()
        .iter()
        .filter(|child| ElementId::new(child.local_name()) == ElementId::FeMergeNode)
        .filter_map(|child| child.attribute("in").map(parse_input))
        .collect();
    Some(Primitive::Merge { inputs })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use svgir_ast::parse::parse;

    use crate::options::Options;

    use super::*;

    fn build_filter(source: &str) -> FilterGraph {
        let document = parse(source).unwrap();
        let options = Options::default();
        let context = Context {
            options: &options,
            resources: &(),
        };
        build(
            &document.root_element(),
            &Viewport::new(200.0, 100.0),
            &context,
        )
    }

    #[test]
    fn offset_then_merge() {
        let graph = build_filter(
            r#"<filter>
                <feOffset dx="5" dy="5" result="offset" />
                <feMerge>
                    <feMergeNode in="offset" />
                    <feMergeNode in="SourceGraphic" />
                    <feMergeNode />
                </feMerge>
            </filter>"#,
        );
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.effects()[0].primitive,
            Primitive::Offset { dx: 5.0, dy: 5.0 }
        );
        assert_eq!(
            graph.input_of(0),
            Some(InputSource::Keyword(&Input::SourceGraphic))
        );
        assert_eq!(graph.input_of(1), None);
        assert_eq!(
            graph.merge_inputs(1),
            vec![
                Some(InputSource::Effect(0)),
                Some(InputSource::Keyword(&Input::SourceGraphic)),
            ]
        );
        assert_eq!(
            graph.get("offset").map(|effect| &effect.primitive),
            Some(&Primitive::Offset { dx: 5.0, dy: 5.0 })
        );
    }

    #[test]
    fn inputs() {
        let graph = build_filter(
            r#"<filter>
                <feGaussianBlur in="later" stdDeviation="2 4" />
                <feOffset in="SourceAlpha" result="later" />
                <feGaussianBlur />
                <feGaussianBlur in="later" />
                <feGaussianBlur in="missing" />
            </filter>"#,
        );
        assert_eq!(
            graph.effects()[0].primitive,
            Primitive::GaussianBlur { std_deviation: 2.0 }
        );
        assert_eq!(graph.input_of(0), None);
        assert_eq!(
            graph.input_of(1),
            Some(InputSource::Keyword(&Input::SourceAlpha))
        );
        assert_eq!(graph.input_of(2), Some(InputSource::Effect(1)));
        assert_eq!(graph.input_of(3), Some(InputSource::Effect(1)));
        assert_eq!(graph.input_of(4), None);
        assert_eq!(graph.input_of(5), None);
    }

    #[test]
    fn inputs_that_are_not_idents() {
        let graph = build_filter(
            r#"<filter>
                <feOffset dx="1" result=" 1a " />
                <feFlood />
                <feGaussianBlur in="1a" />
                <feGaussianBlur in="" />
                <feGaussianBlur in="a b" />
                <feMerge>
                    <feMergeNode in="1a" />
                    <feMergeNode in=" " />
                    <feMergeNode in="SourceGraphic" />
                </feMerge>
            </filter>"#,
        );
        assert_eq!(
            graph.get("1a").map(|effect| &effect.primitive),
            Some(&Primitive::Offset { dx: 1.0, dy: 0.0 })
        );
        assert_eq!(
            graph.effects()[2].input,
            Some(Input::Reference("1a".to_string()))
        );
        assert_eq!(graph.input_of(2), Some(InputSource::Effect(0)));
        assert_eq!(
            graph.effects()[3].input,
            Some(Input::Reference(String::new()))
        );
        assert_eq!(graph.input_of(3), None);
        assert_eq!(graph.input_of(4), None);
        assert_eq!(
            graph.merge_inputs(5),
            vec![
                Some(InputSource::Effect(0)),
                None,
                Some(InputSource::Keyword(&Input::SourceGraphic)),
            ]
        );
    }

    #[test]
    fn flood() {
        let graph = build_filter(
            r#"<filter>
                <feFlood width="50%" height="50%" flood-color="red" flood-opacity="0.5" />
                <feDropShadow dx="2" dy="10%" flood-opacity="0.25" />
                <feFlood flood-color="currentColor" />
            </filter>"#,
        );
        assert_eq!(
            graph.effects()[0].primitive,
            Primitive::Flood {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 50.0,
                color: Rgba {
                    red: 255,
                    green: 0,
                    blue: 0,
                    alpha: 0.5,
                },
            }
        );
        assert_eq!(
            graph.effects()[1].primitive,
            Primitive::DropShadow {
                dx: 2.0,
                dy: 20.0,
                std_deviation: 0.0,
                color: Rgba::BLACK.with_alpha(0.25),
            }
        );
        assert_eq!(
            graph.effects()[2].primitive,
            Primitive::Flood {
                x: 0.0,
                y: 0.0,
                width: 0.0,
                height: 0.0,
                color: Rgba::BLACK,
            }
        );
    }

    #[test]
    fn image() {
        let graph = build_filter(
            r#"<filter>
                <feImage in="SourceAlpha" href="a.png" width="10" result="image" />
            </filter>"#,
        );
        assert_eq!(
            graph.effects()[0],
            FilterEffect {
                result: Some("image".to_string()),
                input: None,
                primitive: Primitive::Image {
                    x: 0.0,
                    y: 0.0,
                    width: 10.0,
                    height: 0.0,
                    source: None,
                },
            }
        );
        assert_eq!(graph.input_of(0), None);
    }

    #[test]
    fn lighting() {
        let graph = build_filter(
            r##"<filter>
                <feSpecularLighting lighting-color="#00f" specularExponent="10">
                    <feDistantLight azimuth="45" elevation="30" />
                </feSpecularLighting>
                <feSpecularLighting>
                    <feSpotLight x="1" y="2" z="3" pointsAtZ="-1" limitingConeAngle="30" />
                </feSpecularLighting>
                <feSpecularLighting>
                    <desc>no light</desc>
                </feSpecularLighting>
            </filter>"##,
        );
        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.effects()[0].primitive,
            Primitive::SpecularLighting {
                surface_scale: 1.5,
                specular_constant: 0.3,
                specular_exponent: 10.0,
                lighting_color: Some(Rgba {
                    red: 0,
                    green: 0,
                    blue: 255,
                    alpha: 1.0,
                }),
                light: Light::Distant {
                    azimuth: 45.0,
                    elevation: 30.0,
                },
            }
        );
        assert_eq!(
            graph.effects()[1].primitive,
            Primitive::SpecularLighting {
                surface_scale: 1.5,
                specular_constant: 0.3,
                specular_exponent: 20.0,
                lighting_color: None,
                light: Light::Spot {
                    x: 1.0,
                    y: 2.0,
                    z: 3.0,
                    points_at: [0.0, 0.0, -1.0],
                    specular_exponent: 1.0,
                    limiting_cone_angle: Some(30.0),
                },
            }
        );
    }

    #[test]
    fn unknown_primitive() {
        let graph = build_filter(
            r#"<filter>
                <feTurbulence result="noise" />
                <feOffset in="noise" />
            </filter>"#,
        );
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.input_of(0), None);
        assert_eq!(graph.get("noise"), None);
    }
}
