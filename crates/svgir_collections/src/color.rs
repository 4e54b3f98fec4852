//! Colors and opacities of attribute values
use lightningcss::values::color::{CssColor, SRGB};
use svgir_parse::{Parse, Parser};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// An sRGB color with straight alpha
pub struct Rgba {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
    /// Opacity, from `0.0` to `1.0`
    pub alpha: f64,
}

impl Rgba {
    /// Opaque black, the initial value of `flood-color`
    pub const BLACK: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
        alpha: 1.0,
    };

    #[must_use]
    /// Returns the color with it's alpha replaced
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

#[allow(clippy::cast_sign_loss)]
fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl TryFrom<&CssColor> for Rgba {
    type Error = ();

    fn try_from(value: &CssColor) -> Result<Self, Self::Error> {
        if let CssColor::RGBA(rgba) = value {
            return Ok(Self {
                red: rgba.red,
                green: rgba.green,
                blue: rgba.blue,
                alpha: f64::from(rgba.alpha) / 255.0,
            });
        }
        if matches!(value, CssColor::CurrentColor) {
            return Err(());
        }
        let srgb = SRGB::try_from(value).map_err(|_| ())?;
        Ok(Self {
            red: channel(srgb.r),
            green: channel(srgb.g),
            blue: channel(srgb.b),
            alpha: f64::from(srgb.alpha.clamp(0.0, 1.0)),
        })
    }
}

/// Resolves a color attribute, such as `flood-color` or `lighting-color`.
///
/// When `opacity` is given it replaces the alpha of the color.
///
/// # Errors
/// If the text isn't a color, or is `currentColor`
pub fn resolve_color(text: &str, opacity: Option<f64>) -> Result<Rgba, Error> {
    let invalid = || Error::InvalidColor(text.to_string());
    let color = CssColor::parse_string(text.trim()).map_err(|_| invalid())?;
    let rgba = Rgba::try_from(&color).map_err(|()| invalid())?;
    Ok(match opacity {
        Some(opacity) => rgba.with_alpha(opacity),
        None => rgba,
    })
}

/// Resolves an opacity attribute, such as `flood-opacity`, as a number or percentage clamped
/// to `0.0..=1.0`.
///
/// # Errors
/// If the text isn't a number or percentage
pub fn resolve_opacity(text: &str) -> Result<f64, Error> {
    let input = &mut Parser::new(text);
    let mut read = || -> Result<f64, svgir_parse::error::Error> {
        let value = f64::parse(input)?;
        let value = if matches!(input.current(), Ok('%')) {
            input.advance();
            value / 100.0
        } else {
            value
        };
        input.skip_whitespace();
        input.expect_done()?;
        Ok(value)
    };
    read()
        .map(|value| value.clamp(0.0, 1.0))
        .map_err(|_| Error::MalformedNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn color() {
        let red = Rgba {
            red: 255,
            green: 0,
            blue: 0,
            alpha: 1.0,
        };
        assert_eq!(resolve_color("red", None), Ok(red));
        assert_eq!(resolve_color("#f00", None), Ok(red));
        assert_eq!(resolve_color(" #ff0000 ", None), Ok(red));
        assert_eq!(resolve_color("rgb(255, 0, 0)", None), Ok(red));
        assert_eq!(
            resolve_color("#00ff00", Some(0.5)),
            Ok(Rgba {
                red: 0,
                green: 255,
                blue: 0,
                alpha: 0.5,
            })
        );
        assert_eq!(
            resolve_color("#0000ff00", Some(1.0)),
            Ok(Rgba {
                red: 0,
                green: 0,
                blue: 255,
                alpha: 1.0,
            })
        );
        assert_eq!(resolve_color("#0000ff00", None).map(|c| c.alpha), Ok(0.0));
    }

    #[test]
    fn invalid_color() {
        assert_eq!(
            resolve_color("currentColor", None),
            Err(Error::InvalidColor("currentColor".to_string()))
        );
        assert_eq!(
            resolve_color("not-a-color", None),
            Err(Error::InvalidColor("not-a-color".to_string()))
        );
        assert!(resolve_color("", None).is_err());
    }

    #[test]
    fn opacity() {
        assert_eq!(resolve_opacity("0.25"), Ok(0.25));
        assert_eq!(resolve_opacity("50%"), Ok(0.5));
        assert_eq!(resolve_opacity("2"), Ok(1.0));
        assert_eq!(resolve_opacity("-1"), Ok(0.0));
        assert!(resolve_opacity("0.5x").is_err());
        assert_eq!(
            resolve_opacity("half"),
            Err(Error::MalformedNumber("half".to_string()))
        );
    }
}
