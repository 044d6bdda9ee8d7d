use crate::geometry::Size;

/// Page margins in logical units (hundredths of an inch for paper). The margins
/// are applied to each page of a print preview to separate the printable area
/// from the page edge.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Margins {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: i32, right: i32, bottom: i32, left: i32) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: i32) -> Margins {
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins where all values are 0
    pub fn empty() -> Margins {
        Margins::default()
    }

    /// Total horizontal and vertical space taken by the margins
    pub fn total(&self) -> Size {
        Size::new(self.left + self.right, self.top + self.bottom)
    }

    /// Margins as seen once the paper is turned to landscape: left and right
    /// swap, as do top and bottom.
    pub fn landscape(&self) -> Margins {
        Margins {
            top: self.bottom,
            right: self.left,
            bottom: self.top,
            left: self.right,
        }
    }

    /// Component-wise maximum, used to keep margins outside the printer's
    /// unprintable area
    pub fn at_least(&self, hard: &Margins) -> Margins {
        Margins {
            top: self.top.max(hard.top),
            right: self.right.max(hard.right),
            bottom: self.bottom.max(hard.bottom),
            left: self.left.max(hard.left),
        }
    }

    /// Divide every component by `scaling`, truncating towards zero
    pub fn unscaled(&self, scaling: f32) -> Margins {
        let f = |v: i32| (v as f32 / scaling) as i32;
        Margins {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }
}
