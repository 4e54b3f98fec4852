//! Definitions for the commands of path data.
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// The operands of an elliptical arc command
pub struct Arc {
    /// The x-axis radius
    pub rx: f64,
    /// The y-axis radius
    pub ry: f64,
    /// The rotation of the ellipse's x-axis, in degrees
    pub x_axis_rotation: f64,
    /// Whether the arc sweeps more than 180 degrees
    pub large_arc: bool,
    /// Whether the arc is drawn in the positive-angle direction
    pub sweep: bool,
    /// The x coordinate of the end point
    pub x: f64,
    /// The y coordinate of the end point
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Data for a path command
pub enum Data {
    /// M or m
    /// Move the current point to coordinate `x`, `y`. Any subsequent coordinate pair(s) are
    /// interpreted as parameter(s) for implicit `LineTo` command(s)
    MoveTo([f64; 2]),
    /// L or l
    LineTo([f64; 2]),
    /// H or h
    HorizontalLineTo([f64; 1]),
    /// V or v
    VerticalLineTo([f64; 1]),
    /// C or c, as `x1 y1 x2 y2 x y`
    CubicCurveTo([f64; 6]),
    /// S or s, as `x2 y2 x y`
    SmoothCubicCurveTo([f64; 4]),
    /// Q or q, as `x1 y1 x y`
    QuadraticCurveTo([f64; 4]),
    /// T or t
    SmoothQuadraticCurveTo([f64; 2]),
    /// A or a
    ArcTo(Arc),
    /// Z or z
    ClosePath,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A single command of path data, as written in the source
pub struct Command {
    /// Whether the operands are relative to the current point (lowercase letter)
    pub relative: bool,
    /// The command and it's operands
    pub data: Data,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A type of path command, regardless of relativity.
pub enum ID {
    /// M or m
    MoveTo,
    /// L or l
    LineTo,
    /// H or h
    HorizontalLineTo,
    /// V or v
    VerticalLineTo,
    /// C or c
    CubicCurveTo,
    /// S or s
    SmoothCubicCurveTo,
    /// Q or q
    QuadraticCurveTo,
    /// T or t
    SmoothQuadraticCurveTo,
    /// A or a
    ArcTo,
    /// Z or z
    ClosePath,
}

impl Command {
    /// Creates an absolute command
    pub fn absolute(data: Data) -> Self {
        Self {
            relative: false,
            data,
        }
    }

    /// Creates a relative command
    pub fn relative(data: Data) -> Self {
        Self {
            relative: true,
            data,
        }
    }

    /// Returns the id for the command
    pub fn id(&self) -> ID {
        self.data.id()
    }

    /// Returns the letter the command is written with
    pub fn letter(&self) -> char {
        self.id().letter(self.relative)
    }
}

impl Data {
    /// Returns the id for the command
    pub fn id(&self) -> ID {
        match self {
            Self::MoveTo(..) => ID::MoveTo,
            Self::LineTo(..) => ID::LineTo,
            Self::HorizontalLineTo(..) => ID::HorizontalLineTo,
            Self::VerticalLineTo(..) => ID::VerticalLineTo,
            Self::CubicCurveTo(..) => ID::CubicCurveTo,
            Self::SmoothCubicCurveTo(..) => ID::SmoothCubicCurveTo,
            Self::QuadraticCurveTo(..) => ID::QuadraticCurveTo,
            Self::SmoothQuadraticCurveTo(..) => ID::SmoothQuadraticCurveTo,
            Self::ArcTo(..) => ID::ArcTo,
            Self::ClosePath => ID::ClosePath,
        }
    }

    /// Builds the command from the operands read by the parser.
    ///
    /// Arc flags are read as `0.0` or `1.0`.
    ///
    /// # Panics
    /// If fewer operands than [`ID::args`] are given
    pub fn from_args(id: ID, args: &[f64]) -> Self {
        assert!(args.len() >= id.args(), "Too few operands for path command");
        match id {
            ID::MoveTo => Self::MoveTo([args[0], args[1]]),
            ID::LineTo => Self::LineTo([args[0], args[1]]),
            ID::HorizontalLineTo => Self::HorizontalLineTo([args[0]]),
            ID::VerticalLineTo => Self::VerticalLineTo([args[0]]),
            ID::CubicCurveTo => {
                Self::CubicCurveTo([args[0], args[1], args[2], args[3], args[4], args[5]])
            }
            ID::SmoothCubicCurveTo => {
                Self::SmoothCubicCurveTo([args[0], args[1], args[2], args[3]])
            }
            ID::QuadraticCurveTo => Self::QuadraticCurveTo([args[0], args[1], args[2], args[3]]),
            ID::SmoothQuadraticCurveTo => Self::SmoothQuadraticCurveTo([args[0], args[1]]),
            ID::ArcTo => Self::ArcTo(Arc {
                rx: args[0],
                ry: args[1],
                x_axis_rotation: args[2],
                large_arc: args[3] != 0.0,
                sweep: args[4] != 0.0,
                x: args[5],
                y: args[6],
            }),
            ID::ClosePath => Self::ClosePath,
        }
    }

    /// Returns the coordinate the command ends at, if it has one of it's own
    pub fn end(&self) -> Option<[f64; 2]> {
        match self {
            Self::MoveTo([x, y]) | Self::LineTo([x, y]) | Self::SmoothQuadraticCurveTo([x, y]) => {
                Some([*x, *y])
            }
            Self::CubicCurveTo([.., x, y])
            | Self::SmoothCubicCurveTo([.., x, y])
            | Self::QuadraticCurveTo([.., x, y]) => Some([*x, *y]),
            Self::ArcTo(arc) => Some([arc.x, arc.y]),
            Self::HorizontalLineTo(_) | Self::VerticalLineTo(_) | Self::ClosePath => None,
        }
    }
}

impl ID {
    /// Returns the length of a command's arguments
    pub fn args(self) -> usize {
        match self {
            Self::ClosePath => 0,
            Self::HorizontalLineTo | Self::VerticalLineTo => 1,
            Self::MoveTo | Self::LineTo | Self::SmoothQuadraticCurveTo => 2,
            Self::SmoothCubicCurveTo | Self::QuadraticCurveTo => 4,
            Self::CubicCurveTo => 6,
            Self::ArcTo => 7,
        }
    }

    #[must_use]
    /// Returns the command repeated when operands follow without a new command letter
    pub fn next_implicit(self) -> Self {
        match self {
            Self::MoveTo => Self::LineTo,
            c => c,
        }
    }

    /// Returns whether the operand at `index` is a single-digit arc flag
    pub fn is_flag(self, index: usize) -> bool {
        matches!(self, Self::ArcTo) && (3..=4).contains(&index)
    }

    /// Returns the letter for the command, lowercase when relative
    pub fn letter(self, relative: bool) -> char {
        let letter = match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CubicCurveTo => 'C',
            Self::SmoothCubicCurveTo => 'S',
            Self::QuadraticCurveTo => 'Q',
            Self::SmoothQuadraticCurveTo => 'T',
            Self::ArcTo => 'A',
            Self::ClosePath => 'Z',
        };
        if relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }
}

impl TryFrom<char> for ID {
    type Error = ();

    /// Converts a command letter into it's id, ignoring case
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'M' => Ok(Self::MoveTo),
            'L' => Ok(Self::LineTo),
            'H' => Ok(Self::HorizontalLineTo),
            'V' => Ok(Self::VerticalLineTo),
            'C' => Ok(Self::CubicCurveTo),
            'S' => Ok(Self::SmoothCubicCurveTo),
            'Q' => Ok(Self::QuadraticCurveTo),
            'T' => Ok(Self::SmoothQuadraticCurveTo),
            'A' => Ok(Self::ArcTo),
            'Z' => Ok(Self::ClosePath),
            _ => Err(()),
        }
    }
}

/// Writes an operand so that it reads back as the same value, e.g. `10.0` or `-0.5`
fn write_number(f: &mut std::fmt::Formatter<'_>, n: f64) -> std::fmt::Result {
    write!(f, "{n:?}")
}

fn write_flag(f: &mut std::fmt::Formatter<'_>, flag: bool) -> std::fmt::Result {
    f.write_char(if flag { '1' } else { '0' })
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.letter())?;
        let args: &[f64] = match &self.data {
            Data::ClosePath => return Ok(()),
            Data::ArcTo(arc) => {
                for n in [arc.rx, arc.ry, arc.x_axis_rotation] {
                    f.write_char(' ')?;
                    write_number(f, n)?;
                }
                f.write_char(' ')?;
                write_flag(f, arc.large_arc)?;
                f.write_char(' ')?;
                write_flag(f, arc.sweep)?;
                for n in [arc.x, arc.y] {
                    f.write_char(' ')?;
                    write_number(f, n)?;
                }
                return Ok(());
            }
            Data::MoveTo(a) | Data::LineTo(a) | Data::SmoothQuadraticCurveTo(a) => a,
            Data::HorizontalLineTo(a) | Data::VerticalLineTo(a) => a,
            Data::SmoothCubicCurveTo(a) | Data::QuadraticCurveTo(a) => a,
            Data::CubicCurveTo(a) => a,
        };
        args.iter().try_for_each(|n| {
            f.write_char(' ')?;
            write_number(f, *n)
        })
    }
}

#[test]
fn command_letters() {
    for letter in "MmLlHhVvCcSsQqTtAaZz".chars() {
        let id = ID::try_from(letter).unwrap();
        assert_eq!(id.letter(letter.is_ascii_lowercase()), letter);
    }
    assert!(ID::try_from('e').is_err());
    assert!(ID::try_from('B').is_err());
    assert_eq!(ID::MoveTo.next_implicit(), ID::LineTo);
    assert_eq!(ID::ArcTo.next_implicit(), ID::ArcTo);
}

#[test]
fn command_display() {
    let arc = Command::relative(Data::ArcTo(Arc {
        rx: 25.0,
        ry: 25.0,
        x_axis_rotation: -30.0,
        large_arc: false,
        sweep: true,
        x: 50.0,
        y: -25.5,
    }));
    assert_eq!(arc.to_string(), "a 25.0 25.0 -30.0 0 1 50.0 -25.5");
    assert_eq!(Command::absolute(Data::ClosePath).to_string(), "Z");
    assert_eq!(
        Command::absolute(Data::HorizontalLineTo([0.5])).to_string(),
        "H 0.5"
    );
}
