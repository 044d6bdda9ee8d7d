//! 2D affine transformations between layout space and the screen.

use crate::geometry::{Point, Size};
use crate::rect::Rect;

/// An affine transformation matrix, used both as the canvas' current transform
/// and to move rectangles between layout and bitmap coordinates.
///
/// Points are row vectors multiplied on the left, so `[x y 1] * M` with
/// `M = [[a, b, 0], [c, d, 0], [e, f, 1]]`. Chaining with [`then`](Transform::then),
/// [`with_translate`](Transform::with_translate) or [`with_scale`](Transform::with_scale)
/// applies the receiver first.
///
/// ```
/// use designer_layout::{Point, Transform};
///
/// // zoom to 50%, then scroll 100 units to the right
/// let transform = Transform::scale(0.5, 0.5).with_translate(-100.0, 0.0);
/// assert_eq!(transform.apply(Point::new(400, 40)), Point::new(100, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Transform {
            e: x,
            f: y,
            ..Transform::identity()
        }
    }

    /// Create a scaling transform
    pub fn scale(sx: f32, sy: f32) -> Self {
        Transform {
            a: sx,
            d: sy,
            ..Transform::identity()
        }
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: f32, y: f32) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Add a scale to this transform
    pub fn with_scale(self, sx: f32, sy: f32) -> Self {
        self.then(Transform::scale(sx, sy))
    }

    /// The inverse transform, or [None] if the matrix is singular
    pub fn invert(&self) -> Option<Transform> {
        let det = self.a * self.d - self.b * self.c;
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Transform {
            a,
            b,
            c,
            d,
            e: -(self.e * a + self.f * c),
            f: -(self.e * b + self.f * d),
        })
    }

    /// True if the transform is only a scale and translation
    pub fn is_axis_aligned(&self) -> bool {
        self.b == 0.0 && self.c == 0.0
    }

    /// Transform a point, rounding to the nearest unit
    pub fn apply(&self, p: Point) -> Point {
        let (x, y) = self.apply_f32(p.x as f32, p.y as f32);
        Point::new(x.round() as i32, y.round() as i32)
    }

    pub fn apply_f32(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * self.a + y * self.c + self.e,
            x * self.b + y * self.d + self.f,
        )
    }

    /// Transform a size, ignoring the translation part
    pub fn apply_size(&self, s: Size) -> Size {
        let w = s.width as f32 * self.a + s.height as f32 * self.c;
        let h = s.width as f32 * self.b + s.height as f32 * self.d;
        Size::new(w.round() as i32, h.round() as i32)
    }

    /// Transform a rectangle by its origin and size
    pub fn apply_rect(&self, r: Rect) -> Rect {
        Rect::new(self.apply(r.origin()), self.apply_size(r.size()))
    }
}
