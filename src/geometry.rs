//! Integer points and sizes in logical (designer) units.
//!
//! Designer coordinates are whole device-independent units, which keeps the
//! page arithmetic exact: a page either covers a pixel or it doesn't.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign};

/// A location in logical or layout space.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    From,
    Into,
    Display,
)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Move the point by `dx` horizontally and `dy` vertically
    pub fn offset(self, dx: i32, dy: i32) -> Point {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<Size> for Point {
    fn from(s: Size) -> Self {
        Point {
            x: s.width,
            y: s.height,
        }
    }
}

/// A width and height pair. Sizes are allowed to go negative during
/// intermediate arithmetic; use [`Size::at_least`] to clamp them.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    From,
    Into,
    Display,
)]
#[display("{width}x{height}")]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const EMPTY: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Size {
        Size { width, height }
    }

    /// A size with both components equal
    pub const fn square(value: i32) -> Size {
        Size {
            width: value,
            height: value,
        }
    }

    /// True if either dimension is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clamp each component to be at least `min`
    pub fn at_least(self, min: i32) -> Size {
        Size {
            width: self.width.max(min),
            height: self.height.max(min),
        }
    }

    /// Component-wise maximum
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Swap width and height
    pub fn transposed(self) -> Size {
        Size {
            width: self.height,
            height: self.width,
        }
    }
}

impl From<Point> for Size {
    fn from(p: Point) -> Self {
        Size {
            width: p.x,
            height: p.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_add_and_subtract() {
        let p = Point::new(10, 20) + Point::new(1, 2);
        assert_eq!(p, Point::new(11, 22));
        assert_eq!(p - Point::new(11, 22), Point::ORIGIN);
        assert_eq!(p.offset(-1, -2), Point::new(10, 20));
    }

    #[test]
    fn sizes_clamp_to_minimum() {
        assert_eq!(Size::new(-5, 0).at_least(1), Size::new(1, 1));
        assert_eq!(Size::new(3, 7).at_least(1), Size::new(3, 7));
        assert!(Size::new(0, 10).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    #[test]
    fn displays_readably() {
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
        assert_eq!(Size::new(850, 1100).to_string(), "850x1100");
    }
}
