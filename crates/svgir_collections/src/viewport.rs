//! The coordinate space lengths are resolved within
//!
//! [w3 | SVG 1.1](https://www.w3.org/TR/2011/REC-SVG11-20110816/coords.html)
use svgir_parse::{error::Error, Parse, Parser};

/// Width used when neither a `viewBox` nor a `width` is known
pub const DEFAULT_WIDTH: f64 = 300.0;
/// Height used when neither a `viewBox` nor a `height` is known
pub const DEFAULT_HEIGHT: f64 = 150.0;
/// Font size used for `em` and `ex` when none is declared
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The direction a length is measured in, which decides the percentage basis
pub enum Axis {
    /// x-like attributes, such as `x`, `cx`, `width`, and `dx`
    Horizontal,
    /// y-like attributes, such as `y`, `cy`, and `height`
    Vertical,
    /// Attributes with no direction, such as a circle's `r`.
    ///
    /// The basis is the normalized diagonal `sqrt(w² + h²) / sqrt(2)`
    Diagonal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
/// The value of a `viewBox` attribute
///
/// [MDN | viewBox](https://developer.mozilla.org/en-US/docs/Web/SVG/Reference/Attribute/viewBox)
pub struct ViewBox {
    /// The left edge of user space
    pub min_x: f64,
    /// The top edge of user space
    pub min_y: f64,
    /// The width of user space
    pub width: f64,
    /// The height of user space
    pub height: f64,
}

impl<'input> Parse<'input> for ViewBox {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.skip_whitespace();
        let min_x = input.expect_number()?;
        input.skip_comma_whitespace();
        let min_y = input.expect_number()?;
        input.skip_comma_whitespace();
        let width = input.expect_number()?;
        input.skip_comma_whitespace();
        let height = input.expect_number()?;
        if width < 0.0 || height < 0.0 {
            return Err(Error::InvalidRange);
        }
        Ok(Self {
            min_x,
            min_y,
            width,
            height,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A uniform scale followed by a translation, mapping user space onto the viewport
pub struct ViewBoxTransform {
    /// The uniform scale factor
    pub scale: f64,
    /// The translation applied after scaling
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
/// The active coordinate space of an element.
///
/// A viewport is never mutated by it's descendants. Nested `<svg>` elements use
/// [`Viewport::nested`] to create a narrowed copy.
pub struct Viewport {
    /// The declared width, absent until a sized element declares one
    pub width: Option<f64>,
    /// The declared height, absent until a sized element declares one
    pub height: Option<f64>,
    /// The user space established by a `viewBox`
    pub view_box: Option<ViewBox>,
    /// The font size used to resolve `em` and `ex` units
    pub font_size: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            view_box: None,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Viewport {
    /// Creates a viewport with a declared size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    #[must_use]
    /// Returns the viewport with the user space of the `viewBox`
    pub fn with_view_box(self, view_box: Option<ViewBox>) -> Self {
        Self { view_box, ..self }
    }

    #[must_use]
    /// Returns the viewport with a different font size
    pub fn with_font_size(self, font_size: f64) -> Self {
        Self { font_size, ..self }
    }

    /// The declared width, else the `viewBox` width, else [`DEFAULT_WIDTH`]
    pub fn best_width(&self) -> f64 {
        self.width
            .or(self.view_box.map(|view_box| view_box.width))
            .unwrap_or(DEFAULT_WIDTH)
    }

    /// The declared height, else the `viewBox` height, else [`DEFAULT_HEIGHT`]
    pub fn best_height(&self) -> f64 {
        self.height
            .or(self.view_box.map(|view_box| view_box.height))
            .unwrap_or(DEFAULT_HEIGHT)
    }

    /// Returns the length that `100%` refers to along the axis.
    ///
    /// The size of the `viewBox` is used when present, otherwise the declared size, otherwise
    /// the fallback size.
    pub fn basis(&self, axis: Axis) -> f64 {
        let (width, height) = match self.view_box {
            Some(view_box) => (view_box.width, view_box.height),
            None => (
                self.width.unwrap_or(DEFAULT_WIDTH),
                self.height.unwrap_or(DEFAULT_HEIGHT),
            ),
        };
        match axis {
            Axis::Horizontal => width,
            Axis::Vertical => height,
            Axis::Diagonal => width.hypot(height) / std::f64::consts::SQRT_2,
        }
    }

    #[must_use]
    /// Creates the viewport of a nested `<svg>`.
    ///
    /// A missing width or height covers the whole of this viewport, as if `100%`. The nested
    /// element's `viewBox` replaces this one, and the font size is kept.
    pub fn nested(
        &self,
        width: Option<f64>,
        height: Option<f64>,
        view_box: Option<ViewBox>,
    ) -> Self {
        Self {
            width: Some(width.unwrap_or_else(|| self.basis(Axis::Horizontal))),
            height: Some(height.unwrap_or_else(|| self.basis(Axis::Vertical))),
            view_box,
            font_size: self.font_size,
        }
    }

    /// Returns the `xMidYMid meet` mapping from the `viewBox` onto the viewport's size.
    ///
    /// Returns `None` without a `viewBox` or when it's size is zero.
    pub fn view_box_transform(&self) -> Option<ViewBoxTransform> {
        let view_box = self.view_box?;
        if view_box.width <= 0.0 || view_box.height <= 0.0 {
            return None;
        }
        let (width, height) = (self.best_width(), self.best_height());
        let scale = (width / view_box.width).min(height / view_box.height);
        Some(ViewBoxTransform {
            scale,
            translate: [
                (width - view_box.width * scale) / 2.0 - view_box.min_x * scale,
                (height - view_box.height * scale) / 2.0 - view_box.min_y * scale,
            ],
        })
    }
}
