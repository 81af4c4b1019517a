//! Geometry primitives
//!
//! Positions are signed so that draw offsets may point above or left of a
//! canvas. Sizes are unsigned.

use std::fmt;

/// A position on (or off) a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Column
    pub x: isize,
    /// Row
    pub y: isize,
}

impl Point {
    /// The top-left corner
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Translate the point by `dx`, `dy`
    #[must_use]
    pub const fn offset(self, dx: isize, dy: isize) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A sub-region request against a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner of the region
    pub origin: Point,
    /// Width in columns
    pub width: usize,
    /// Height in rows
    pub height: usize,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: isize, y: isize, width: usize, height: usize) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }
}

/// Canvas or terminal dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Convert a size to a signed coordinate, saturating on overflow
pub fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}
