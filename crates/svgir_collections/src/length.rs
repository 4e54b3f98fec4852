//! Lengths, percentages, and plain numbers of attribute values
//!
//! Absolute units use the CSS ratio of 96 pixels to the inch.
use svgir_parse::{error::Error as ParseError, Parse, Parser};

use crate::{
    error::Error,
    viewport::{Axis, Viewport},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The unit a length is written with
pub enum Unit {
    /// A plain number, in user units
    None,
    /// `px`
    Px,
    /// `pt`, 1/72 of an inch
    Pt,
    /// `pc`, 12 points
    Pc,
    /// `mm`
    Mm,
    /// `cm`
    Cm,
    /// `in`
    In,
    /// `em`, the font size
    Em,
    /// `ex`, half the font size
    Ex,
    /// `%`, relative to the viewport
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// A number with it's unit
pub struct Length {
    /// The number as written
    pub value: f64,
    /// The unit following the number
    pub unit: Unit,
}

impl<'input> Parse<'input> for Length {
    fn parse(input: &mut Parser<'input>) -> Result<Self, ParseError<'input>> {
        let value = f64::parse(input)?;
        let unit = match input.take_matches(|char| char.is_ascii_alphabetic() || char == '%') {
            "" => Unit::None,
            "%" => Unit::Percent,
            unit if unit.eq_ignore_ascii_case("px") => Unit::Px,
            unit if unit.eq_ignore_ascii_case("pt") => Unit::Pt,
            unit if unit.eq_ignore_ascii_case("pc") => Unit::Pc,
            unit if unit.eq_ignore_ascii_case("mm") => Unit::Mm,
            unit if unit.eq_ignore_ascii_case("cm") => Unit::Cm,
            unit if unit.eq_ignore_ascii_case("in") => Unit::In,
            unit if unit.eq_ignore_ascii_case("em") => Unit::Em,
            unit if unit.eq_ignore_ascii_case("ex") => Unit::Ex,
            received => {
                return Err(ParseError::ExpectedIdent {
                    expected: "a length unit",
                    received,
                })
            }
        };
        Ok(Self { value, unit })
    }
}

impl Length {
    /// Returns the length in user units
    pub fn resolve(&self, axis: Axis, viewport: &Viewport) -> f64 {
        let Self { value, unit } = *self;
        match unit {
            Unit::None | Unit::Px => value,
            Unit::Pt => value * 4.0 / 3.0,
            Unit::Pc => value * 16.0,
            Unit::Mm => value * 96.0 / 25.4,
            Unit::Cm => value * 96.0 / 2.54,
            Unit::In => value * 96.0,
            Unit::Em => value * viewport.font_size,
            Unit::Ex => value * viewport.font_size / 2.0,
            Unit::Percent => value / 100.0 * viewport.basis(axis),
        }
    }
}

/// Resolves a length attribute to user units.
///
/// # Errors
/// If the text isn't a number, percentage, or length
pub fn resolve_length(text: &str, axis: Axis, viewport: &Viewport) -> Result<f64, Error> {
    Length::parse_string(text)
        .map(|length| length.resolve(axis, viewport))
        .map_err(|_| Error::InvalidLength(text.to_string()))
}

/// Resolves a length attribute, substituting `default` when it's missing or invalid
pub fn resolve_length_or(
    text: Option<&str>,
    axis: Axis,
    viewport: &Viewport,
    default: f64,
) -> f64 {
    let Some(text) = text else {
        return default;
    };
    resolve_length(text, axis, viewport).unwrap_or_else(|error| {
        log::warn!("{error}, using {default:?}");
        default
    })
}

/// Resolves a `font-size`, where percentages and `em` refer to the inherited font size.
///
/// # Errors
/// If the text isn't a number, percentage, or length
pub fn resolve_font_size(text: &str, viewport: &Viewport) -> Result<f64, Error> {
    let length = Length::parse_string(text).map_err(|_| Error::InvalidLength(text.to_string()))?;
    Ok(match length.unit {
        Unit::Percent => length.value / 100.0 * viewport.font_size,
        _ => length.resolve(Axis::Vertical, viewport),
    })
}

/// Resolves a plain number attribute.
///
/// # Errors
/// If the text isn't a single number
pub fn resolve_number(text: &str) -> Result<f64, Error> {
    f64::parse_string(text).map_err(|_| Error::MalformedNumber(text.to_string()))
}

/// Resolves a plain number attribute, substituting `default` when it's missing or invalid
pub fn resolve_number_or(text: Option<&str>, default: f64) -> f64 {
    let Some(text) = text else {
        return default;
    };
    resolve_number(text).unwrap_or_else(|error| {
        log::warn!("{error}, using {default:?}");
        default
    })
}

/// Splits a list of numbers separated by whitespace and commas, such as `points` or
/// `stdDeviation`
pub fn split_list(text: &str) -> impl Iterator<Item = &str> {
    text.split(|char: char| char.is_whitespace() || char == ',')
        .filter(|token| !token.is_empty())
}
