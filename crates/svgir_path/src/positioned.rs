//! Path representations with positional information
//!
//! Positioning folds over the commands, tracking the current point, the start of the current
//! subpath, and the control point of the previous curve so smooth curves can be reflected.
use crate::{
    command::{Arc, Command, Data},
    geometry::Point,
};

#[derive(Debug, Clone, Copy, PartialEq)]
/// The absolute control points of a curve
pub enum Controls {
    /// The command isn't a curve
    None,
    /// A quadratic curve's control point
    Quadratic(Point),
    /// A cubic curve's control points
    Cubic(Point, Point),
}

#[derive(Debug, Clone, PartialEq)]
/// A command with it's absolute positional information
pub struct Position {
    /// The absolute equivalent of the command
    pub command: Command,
    /// The base point of the command
    pub start: Point,
    /// The coords the the command goes to
    pub end: Point,
    /// The control points, with smooth curves' implied control points reflected
    pub controls: Controls,
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct State {
    current: Point,
    subpath_start: Point,
    last_controls: Option<Controls>,
}

impl State {
    /// Positions the command against the state, returning the next state
    pub(crate) fn step(self, command: &Command) -> (Self, Position) {
        let start = self.current;
        let base = if command.relative {
            start
        } else {
            Point::default()
        };
        let at = |x: f64, y: f64| base + Point([x, y]);

        let (data, end, controls) = match command.data {
            Data::MoveTo([x, y]) => {
                let end = at(x, y);
                (Data::MoveTo(end.0), end, Controls::None)
            }
            Data::LineTo([x, y]) => {
                let end = at(x, y);
                (Data::LineTo(end.0), end, Controls::None)
            }
            Data::HorizontalLineTo([x]) => {
                let x = if command.relative { start.x() + x } else { x };
                (
                    Data::HorizontalLineTo([x]),
                    Point([x, start.y()]),
                    Controls::None,
                )
            }
            Data::VerticalLineTo([y]) => {
                let y = if command.relative { start.y() + y } else { y };
                (
                    Data::VerticalLineTo([y]),
                    Point([start.x(), y]),
                    Controls::None,
                )
            }
            Data::CubicCurveTo([x1, y1, x2, y2, x, y]) => {
                let (c1, c2, end) = (at(x1, y1), at(x2, y2), at(x, y));
                (
                    Data::CubicCurveTo([c1.x(), c1.y(), c2.x(), c2.y(), end.x(), end.y()]),
                    end,
                    Controls::Cubic(c1, c2),
                )
            }
            Data::SmoothCubicCurveTo([x2, y2, x, y]) => {
                let c1 = match self.last_controls {
                    Some(Controls::Cubic(_, previous)) => previous.reflect(start),
                    _ => start,
                };
                let (c2, end) = (at(x2, y2), at(x, y));
                (
                    Data::SmoothCubicCurveTo([c2.x(), c2.y(), end.x(), end.y()]),
                    end,
                    Controls::Cubic(c1, c2),
                )
            }
            Data::QuadraticCurveTo([x1, y1, x, y]) => {
                let (c1, end) = (at(x1, y1), at(x, y));
                (
                    Data::QuadraticCurveTo([c1.x(), c1.y(), end.x(), end.y()]),
                    end,
                    Controls::Quadratic(c1),
                )
            }
            Data::SmoothQuadraticCurveTo([x, y]) => {
                let c1 = match self.last_controls {
                    Some(Controls::Quadratic(previous)) => previous.reflect(start),
                    _ => start,
                };
                let end = at(x, y);
                (
                    Data::SmoothQuadraticCurveTo(end.0),
                    end,
                    Controls::Quadratic(c1),
                )
            }
            Data::ArcTo(arc) => {
                let end = at(arc.x, arc.y);
                (
                    Data::ArcTo(Arc {
                        x: end.x(),
                        y: end.y(),
                        ..arc
                    }),
                    end,
                    Controls::None,
                )
            }
            Data::ClosePath => (Data::ClosePath, self.subpath_start, Controls::None),
        };

        let subpath_start = if matches!(data, Data::MoveTo(_)) {
            end
        } else {
            self.subpath_start
        };
        let state = Self {
            current: end,
            subpath_start,
            last_controls: match controls {
                Controls::None => None,
                controls => Some(controls),
            },
        };
        let position = Position {
            command: Command::absolute(data),
            start,
            end,
            controls,
        };
        (state, position)
    }
}

#[derive(Debug, Clone)]
/// Equivalent of a [Path](crate::Path), with positional information
pub struct Path(pub Vec<Position>);

impl Path {
    /// Converts self into a [Path](crate::Path) of absolute commands
    pub fn take(self) -> crate::Path {
        crate::Path(self.0.into_iter().map(|p| p.command).collect())
    }
}

impl From<&crate::Path> for Path {
    fn from(value: &crate::Path) -> Self {
        let positions = value
            .0
            .iter()
            .scan(State::default(), |state, command| {
                let (next, position) = state.step(command);
                *state = next;
                Some(position)
            })
            .collect();
        Self(positions)
    }
}

impl From<Path> for crate::Path {
    fn from(value: Path) -> Self {
        value.take()
    }
}
