//! SVGIR Path is a library used for parsing and serializing SVG path data.
//!
//! Use the [Path](Path) struct for parsing and serializing. It is made up of individual
//! [commands](command::Command), each keeping the relativity it was written with.
//!
//! Serialization is not minified. Every command is written with its letter and every operand
//! separated by a single space, so that the output reads back as exactly the same commands.
//!
//! For absolute coordinates and control points, use [`Path::positions`].
use std::borrow::Cow;

use svgir_parse::number::UNICODE_MINUS;

pub mod command;
pub mod geometry;
pub mod parser;
pub mod positioned;

use crate::{command::Command, parser::Parser};

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A path is a sequence of commands
///
/// # Example
///
/// ```
/// use svgir_path::Path;
///
/// let path = Path::parse("M10 20 30 40").unwrap();
/// assert_eq!(&path.to_string(), "M 10.0 20.0 L 30.0 40.0");
/// ```
pub struct Path(pub Vec<Command>);

impl Path {
    /// Parses a path definition from a string.
    ///
    /// An empty definition parses to an empty path, and the Unicode minus sign is read as `-`.
    ///
    /// # Errors
    /// If the definition is invalid. Offsets of the error are within `definition`.
    pub fn parse(definition: &str) -> Result<Self, parser::Error> {
        let normalized = if definition.contains(UNICODE_MINUS) {
            Cow::Owned(definition.replace(UNICODE_MINUS, "-"))
        } else {
            Cow::Borrowed(definition)
        };
        Parser::new(&normalized)
            .collect::<Result<_, _>>()
            .map(Self)
            .map_err(|error| error.map_offset(|offset| original_offset(definition, offset)))
    }

    /// Returns whether the path has no commands
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns each command with it's absolute start, end, and control points
    pub fn positions(&self) -> positioned::Path {
        positioned::Path::from(self)
    }

    #[must_use]
    /// Returns the equivalent path where every command is absolute
    pub fn to_absolute(&self) -> Self {
        self.positions().take()
    }
}

/// Maps a byte offset of the normalized definition back to `definition`
fn original_offset(definition: &str, normalized: usize) -> usize {
    let mut shift = 0;
    for (index, char) in definition.char_indices() {
        if index - shift >= normalized {
            break;
        }
        if char == UNICODE_MINUS {
            shift += UNICODE_MINUS.len_utf8() - '-'.len_utf8();
        }
    }
    normalized + shift
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;

        self.0
            .iter()
            .enumerate()
            .try_for_each(|(i, command)| -> std::fmt::Result {
                if i > 0 {
                    f.write_char(' ')?;
                }
                command.fmt(f)
            })
    }
}

impl From<Path> for String {
    fn from(value: Path) -> Self {
        format!("{value}")
    }
}

impl From<&Path> for String {
    fn from(value: &Path) -> Self {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{parser::Error, Path};
    use crate::{
        command::{Arc, Command, Data},
        geometry::Point,
        positioned::Controls,
    };

    #[test]
    fn path_parse() {
        insta::assert_snapshot!(Path::parse("M10 20 30 40").unwrap(), @"M 10.0 20.0 L 30.0 40.0");
        insta::assert_snapshot!(Path::parse("m10 20 30 40").unwrap(), @"m 10.0 20.0 l 30.0 40.0");
        insta::assert_snapshot!(
            Path::parse("M0 0 l10 20 30 40").unwrap(),
            @"M 0.0 0.0 l 10.0 20.0 l 30.0 40.0"
        );
        insta::assert_snapshot!(
            Path::parse("M 10 10 90 10 90 90 10 90 Z").unwrap(),
            @"M 10.0 10.0 L 90.0 10.0 L 90.0 90.0 L 10.0 90.0 Z"
        );
        insta::assert_snapshot!(
            Path::parse("M 10,50 C 20,30 40,50 60,70 S 10,20 30,40").unwrap(),
            @"M 10.0 50.0 C 20.0 30.0 40.0 50.0 60.0 70.0 S 10.0 20.0 30.0 40.0"
        );
        insta::assert_snapshot!(
            Path::parse("M10 50C1 2 3 4 5 6.5.1.2.3.4.5-5").unwrap(),
            @"M 10.0 50.0 C 1.0 2.0 3.0 4.0 5.0 6.5 C 0.1 0.2 0.3 0.4 0.5 -5.0"
        );
        insta::assert_snapshot!(
            Path::parse("M0 0h10v10H0V0zm5 5q1 1 2 2t3 3").unwrap(),
            @"M 0.0 0.0 h 10.0 v 10.0 H 0.0 V 0.0 z m 5.0 5.0 q 1.0 1.0 2.0 2.0 t 3.0 3.0"
        );
    }

    #[test]
    fn path_parse_arc() {
        let path = Path::parse("M0 0A1 1 0 1090 50").unwrap();
        assert_eq!(
            path.0[1],
            Command::absolute(Data::ArcTo(Arc {
                rx: 1.0,
                ry: 1.0,
                x_axis_rotation: 0.0,
                large_arc: true,
                sweep: false,
                x: 90.0,
                y: 50.0,
            }))
        );
        insta::assert_snapshot!(path, @"M 0.0 0.0 A 1.0 1.0 0.0 1 0 90.0 50.0");
        insta::assert_snapshot!(
            Path::parse("m-0,1a 25,25 -30 0,1 0,0 1 1 0 1 0 2 2").unwrap(),
            @"m -0.0 1.0 a 25.0 25.0 -30.0 0 1 0.0 0.0 a 1.0 1.0 0.0 1 0 2.0 2.0"
        );
    }

    #[test]
    fn path_parse_empty() {
        assert!(Path::parse("").unwrap().is_empty());
        assert!(Path::parse(" \n\t ").unwrap().is_empty());
        assert_eq!(Path::default().to_string(), "");
    }

    #[test]
    fn path_parse_unicode_minus() {
        assert_eq!(
            Path::parse("M10 \u{2212}20 l\u{2212}5\u{2212}5"),
            Path::parse("M10 -20 l-5-5")
        );
        assert_eq!(
            Path::parse("M\u{2212}1 \u{2212}2 B"),
            Err(Error::UnknownPathCommand {
                command: 'B',
                offset: 11
            })
        );
        assert_eq!(
            Path::parse("M1 \u{2212}2 L"),
            Err(Error::IncompletePathCommand {
                command: 'L',
                offset: 9
            })
        );
    }

    #[test]
    fn path_parse_errors() {
        assert_eq!(Path::parse("0,0"), Err(Error::NoCommand { offset: 0 }));
        assert_eq!(
            Path::parse("m1"),
            Err(Error::IncompletePathCommand {
                command: 'm',
                offset: 2
            })
        );
        assert_eq!(
            Path::parse("M1 L2 2"),
            Err(Error::IncompletePathCommand {
                command: 'M',
                offset: 3
            })
        );
        assert_eq!(Path::parse("L10 10"), Err(Error::InvalidFirstCommand));
        assert_eq!(
            Path::parse("M10 20 Z 5"),
            Err(Error::NoCommand { offset: 9 })
        );
        assert_eq!(Path::parse("M,10"), Err(Error::UnexpectedComma { offset: 1 }));
        assert_eq!(
            Path::parse("M1 2,,3 4"),
            Err(Error::UnexpectedComma { offset: 4 })
        );
        assert_eq!(
            Path::parse("M10 20-"),
            Err(Error::MalformedNumber { offset: 6 })
        );
        assert_eq!(
            Path::parse("M10 20 B"),
            Err(Error::UnknownPathCommand {
                command: 'B',
                offset: 7
            })
        );
        assert_eq!(
            Path::parse("M1 2 A1 1 0 2 0 5 5"),
            Err(Error::InvalidArcFlag { offset: 12 })
        );
    }

    #[test]
    fn path_round_trip() {
        for definition in [
            "M10 20 30 40",
            "m-0,1a 25,25 -30 0,1 0,0",
            "M10 50C1 2 3 4 5 6.5.1.2.3.4.5-5.176e-7",
            "M0 0h10v10H0V0zm5 5q1 1 2 2t3 3s1 1 2 2",
            "M 0.1 0.2 L 1e21 -1e-7 Z",
        ] {
            let path = Path::parse(definition).unwrap();
            assert_eq!(Path::parse(&path.to_string()), Ok(path));
        }
    }

    #[test]
    fn path_positions() {
        let path = Path::parse("m10 10 l10 0 c0 10 10 10 10 0 s10 -10 10 0 z").unwrap();
        let positions = path.positions();
        let ends: Vec<_> = positions.0.iter().map(|p| p.end).collect();
        assert_eq!(
            ends,
            vec![
                Point([10.0, 10.0]),
                Point([20.0, 10.0]),
                Point([30.0, 10.0]),
                Point([40.0, 10.0]),
                Point([10.0, 10.0]),
            ]
        );
        assert_eq!(
            positions.0[3].controls,
            Controls::Cubic(Point([30.0, 0.0]), Point([40.0, 0.0]))
        );

        insta::assert_snapshot!(
            path.to_absolute(),
            @"M 10.0 10.0 L 20.0 10.0 C 20.0 20.0 30.0 20.0 30.0 10.0 S 40.0 0.0 40.0 10.0 Z"
        );
    }

    #[test]
    fn path_positions_smooth_quadratic() {
        let path = Path::parse("M0 0 Q5 5 10 0 T20 0 L30 0 T40 0").unwrap();
        let positions = path.positions();
        assert_eq!(
            positions.0[2].controls,
            Controls::Quadratic(Point([15.0, -5.0]))
        );
        assert_eq!(
            positions.0[4].controls,
            Controls::Quadratic(Point([30.0, 0.0]))
        );
    }
}
