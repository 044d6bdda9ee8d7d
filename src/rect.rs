use crate::geometry::{Point, Size};

/// A rectangle, specified by two opposite corners.
///
/// Rectangles are half-open: a rectangle contains its top-left corner but not
/// its bottom-right one, so pages laid edge to edge never share a point.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x1: i32,
    /// The y-coordinate of the top-left corner.
    pub y1: i32,
    /// The x-coordinate of the bottom-right corner (exclusive).
    pub x2: i32,
    /// The y-coordinate of the bottom-right corner (exclusive).
    pub y2: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size. The far corner
    /// saturates at the edge of the coordinate space.
    pub fn new(origin: Point, size: Size) -> Rect {
        Rect {
            x1: origin.x,
            y1: origin.y,
            x2: origin.x.saturating_add(size.width),
            y2: origin.y.saturating_add(size.height),
        }
    }

    /// Create a rectangle from a location and dimensions
    pub fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect::new(Point::new(x, y), Size::new(width, height))
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// A rectangle with no area covers nothing
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x1 && p.x < self.x2 && p.y >= self.y1 && p.y < self.y2
    }

    /// True if the two rectangles share some area
    pub fn intersects(&self, other: &Rect) -> bool {
        other.x1 < self.x2 && self.x1 < other.x2 && other.y1 < self.y2 && self.y1 < other.y2
    }

    /// The overlapping area of two rectangles, if they share any
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let r = Rect {
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
            x2: self.x2.min(other.x2),
            y2: self.y2.min(other.y2),
        };
        (!r.is_empty()).then_some(r)
    }

    /// The smallest rectangle containing both rectangles
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
            x2: self.x2.max(other.x2),
            y2: self.y2.max(other.y2),
        }
    }

    /// Move the rectangle without changing its size
    pub fn translate(&self, delta: Point) -> Rect {
        Rect {
            x1: self.x1 + delta.x,
            y1: self.y1 + delta.y,
            x2: self.x2 + delta.x,
            y2: self.y2 + delta.y,
        }
    }

    /// Grow the rectangle by `dx` on the left and right and `dy` on the top and bottom
    pub fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            x1: self.x1 - dx,
            y1: self.y1 - dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_half_open() {
        let r = Rect::from_xywh(10, 10, 5, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(14, 14)));
        assert!(!r.contains(Point::new(15, 10)));
        assert!(!r.contains(Point::new(10, 15)));
    }

    #[test]
    fn touching_rectangles_do_not_intersect() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn intersection_and_union() {
        let a = Rect::from_xywh(0, 0, 10, 10);
        let b = Rect::from_xywh(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), Some(Rect::from_xywh(5, 5, 5, 5)));
        assert_eq!(a.union(&b), Rect::from_xywh(0, 0, 15, 15));
    }

    #[test]
    fn inflate_grows_every_side() {
        let r = Rect::from_xywh(10, 10, 4, 4).inflate(3, 2);
        assert_eq!(r, Rect::from_xywh(7, 8, 10, 8));
    }
}
