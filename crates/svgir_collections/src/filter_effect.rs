//! Filter effect attributes as specified in [filter-effects](https://drafts.fxtf.org/filter-effects/)
use svgir_parse::{error::Error, Parse, Parser};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Identifies the input for a filter-primitive
///
/// [w3 | SVG 1.1](https://www.w3.org/TR/2011/REC-SVG11-20110816/filters.html#FilterPrimitiveInAttribute)
/// [w3 | SVG 2](https://drafts.fxtf.org/filter-effects/#element-attrdef-filter-primitive-in)
pub enum Input {
    /// The graphics element that was input into the `filter` element
    SourceGraphic,
    /// Like `SourceGraphic` but only the alpha channel is used
    SourceAlpha,
    /// The backdrop behind the filter region of the `filter` element
    BackgroundImage,
    /// Like `BackgroundImage` but only the alpha is used
    BackgroundAlpha,
    /// The `fill` value of the target element
    FillPaint,
    /// The `stroke` value of the target element
    StrokePaint,
    /// The `result` of some preceding element within the `filter` element
    Reference(String),
}

impl<'input> Parse<'input> for Input {
    fn parse(input: &mut Parser<'input>) -> Result<Self, Error<'input>> {
        input.skip_whitespace();
        let ident = input.expect_ident()?;
        Ok(match ident {
            "SourceGraphic" => Self::SourceGraphic,
            "SourceAlpha" => Self::SourceAlpha,
            "BackgroundImage" => Self::BackgroundImage,
            "BackgroundAlpha" => Self::BackgroundAlpha,
            "FillPaint" => Self::FillPaint,
            "StrokePaint" => Self::StrokePaint,
            reference => Self::Reference(reference.to_string()),
        })
    }
}

impl Input {
    /// Returns the referenced `result` name, if the input isn't a well-known keyword
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::Reference(name) => Some(name),
            _ => None,
        }
    }
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::SourceGraphic => "SourceGraphic",
            Self::SourceAlpha => "SourceAlpha",
            Self::BackgroundImage => "BackgroundImage",
            Self::BackgroundAlpha => "BackgroundAlpha",
            Self::FillPaint => "FillPaint",
            Self::StrokePaint => "StrokePaint",
            Self::Reference(name) => name,
        })
    }
}

#[test]
fn input() {
    assert_eq!(Input::parse_string("SourceGraphic"), Ok(Input::SourceGraphic));
    assert_eq!(Input::parse_string("SourceAlpha"), Ok(Input::SourceAlpha));
    assert_eq!(
        Input::parse_string("BackgroundImage"),
        Ok(Input::BackgroundImage)
    );
    assert_eq!(
        Input::parse_string("BackgroundAlpha"),
        Ok(Input::BackgroundAlpha)
    );
    assert_eq!(Input::parse_string("FillPaint"), Ok(Input::FillPaint));
    assert_eq!(Input::parse_string("StrokePaint"), Ok(Input::StrokePaint));
    assert_eq!(
        Input::parse_string(" filter-primitive-reference"),
        Ok(Input::Reference("filter-primitive-reference".into()))
    );

    assert_eq!(Input::parse_string("trailing "), Ok(Input::Reference("trailing".into())));
    assert_eq!(Input::parse_string("foo bar"), Err(Error::ExpectedDone));
}
