//! Geometric primitives used when positioning path commands
use std::ops::Add;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A point in user space
pub struct Point(pub [f64; 2]);

impl Point {
    /// The x coordinate
    pub fn x(self) -> f64 {
        self.0[0]
    }

    /// The y coordinate
    pub fn y(self) -> f64 {
        self.0[1]
    }

    #[must_use]
    /// Reflects the point about `center`
    pub fn reflect(self, center: Point) -> Self {
        Self([2.0 * center.x() - self.x(), 2.0 * center.y() - self.y()])
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self([self.x() + rhs.x(), self.y() + rhs.y()])
    }
}

impl From<[f64; 2]> for Point {
    fn from(value: [f64; 2]) -> Self {
        Self(value)
    }
}
