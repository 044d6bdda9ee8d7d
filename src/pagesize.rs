//! Pre-defined paper sizes for common formats.
//!
//! Sizes are in hundredths of an inch, the unit printers report paper in, and
//! are given in portrait orientation (width ≤ height). Use the
//! [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape.
//!
//! # Example
//!
//! ```
//! use designer_layout::pagesize::{LETTER, A4, PageOrientation};
//!
//! assert_eq!(LETTER.width, 850);
//! let landscape = A4.landscape();
//! assert!(landscape.width > landscape.height);
//! ```

use crate::geometry::Size;

/// Paper dimensions in hundredths of an inch.
pub type PaperSize = Size;

const fn millimetres(w: i32, h: i32) -> PaperSize {
    // rounded to the nearest hundredth of an inch
    Size::new((w * 1000 + 127) / 254, (h * 1000 + 127) / 254)
}

// north american sizes
pub const LETTER: PaperSize = Size::new(850, 1100);
pub const HALF_LETTER: PaperSize = Size::new(550, 850);
pub const LEGAL: PaperSize = Size::new(850, 1400);
pub const TABLOID: PaperSize = Size::new(1100, 1700);
pub const LEDGER: PaperSize = Size::new(1700, 1100);

// iso a-series
pub const A3: PaperSize = millimetres(297, 420);
pub const A4: PaperSize = millimetres(210, 297);
pub const A5: PaperSize = millimetres(148, 210);

/// Convert paper sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PaperSize {
    fn portrait(self) -> Self {
        if self.width <= self.height {
            self
        } else {
            self.transposed()
        }
    }

    fn landscape(self) -> PaperSize {
        if self.width >= self.height {
            self
        } else {
            self.transposed()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_sizes_round_to_hundredths() {
        assert_eq!(A4, Size::new(827, 1169));
        assert_eq!(LETTER, Size::new(850, 1100));
    }

    #[test]
    fn orientation_is_idempotent() {
        assert_eq!(LEDGER.portrait(), TABLOID);
        assert_eq!(TABLOID.landscape().landscape(), LEDGER);
    }
}
