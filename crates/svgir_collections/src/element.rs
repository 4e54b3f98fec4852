//! Identifiers for the elements that are converted.
//!
//! [MDN | SVG element reference](https://developer.mozilla.org/en-US/docs/Web/SVG/Reference/Element)

macro_rules! define_elements {
    ($($element:ident: $name:literal,)+) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        /// Identifies an element by it's local-name
        pub enum ElementId {
            $(
                #[doc=concat!("The `", $name, "` element")]
                $element,
            )+
            /// An element that isn't converted
            Unknown,
        }

        impl ElementId {
            /// Identifies an element from it's local-name, which is case-sensitive
            pub fn new(local_name: &str) -> Self {
                match local_name {
                    $($name => Self::$element,)+
                    _ => Self::Unknown,
                }
            }
        }
    };
}

define_elements! {
    Svg: "svg",
    G: "g",
    A: "a",
    Switch: "switch",
    Defs: "defs",
    Filter: "filter",

    Rect: "rect",
    Circle: "circle",
    Ellipse: "ellipse",
    Line: "line",
    Polygon: "polygon",
    Polyline: "polyline",
    Path: "path",
    Text: "text",
    Image: "image",

    FeGaussianBlur: "feGaussianBlur",
    FeDropShadow: "feDropShadow",
    FeFlood: "feFlood",
    FeOffset: "feOffset",
    FeImage: "feImage",
    FeSpecularLighting: "feSpecularLighting",
    FeMerge: "feMerge",
    FeMergeNode: "feMergeNode",
    FeDistantLight: "feDistantLight",
    FePointLight: "fePointLight",
    FeSpotLight: "feSpotLight",
}

impl ElementId {
    /// Whether the element groups it's children without drawing anything itself
    pub fn is_container(self) -> bool {
        matches!(self, Self::Svg | Self::G | Self::A | Self::Switch)
    }

    /// Whether the element is drawn as a shape, text, or image
    pub fn is_graphic(self) -> bool {
        matches!(
            self,
            Self::Rect
                | Self::Circle
                | Self::Ellipse
                | Self::Line
                | Self::Polygon
                | Self::Polyline
                | Self::Path
                | Self::Text
                | Self::Image
        )
    }

    /// Whether the element is a light source of a lighting filter primitive
    pub fn is_light_source(self) -> bool {
        matches!(
            self,
            Self::FeDistantLight | Self::FePointLight | Self::FeSpotLight
        )
    }
}

#[test]
fn element_id() {
    assert_eq!(ElementId::new("rect"), ElementId::Rect);
    assert_eq!(ElementId::new("feGaussianBlur"), ElementId::FeGaussianBlur);
    assert_eq!(ElementId::new("fegaussianblur"), ElementId::Unknown);
    assert_eq!(ElementId::new("marker"), ElementId::Unknown);
    assert!(ElementId::Switch.is_container());
    assert!(ElementId::Image.is_graphic());
    assert!(!ElementId::Defs.is_graphic());
    assert!(ElementId::FePointLight.is_light_source());
}
