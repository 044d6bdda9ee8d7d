//! Translating between designer (logical) coordinates and the paged layout.
//!
//! Pages are searched in row-major order and the first match wins. Points
//! that fall on no page (the separators between pages, for instance) pass
//! through unchanged.

use crate::geometry::{Point, Size};
use crate::page::PageGrid;
use crate::rect::Rect;

impl PageGrid {
    /// Map a point on the paged surface to the designer coordinate printed
    /// there. Points in a page's margin map to just outside that page's
    /// logical bounds.
    pub fn map_in_coord(&self, point: Point) -> Point {
        self.iter()
            .find(|page| page.page_bounds.contains(point))
            .map(|page| {
                let delta = point - page.viewable_page_bounds.origin();
                page.logical_bounds.origin() + delta
            })
            .unwrap_or(point)
    }

    /// Map a designer coordinate to where it is printed on the paged surface
    pub fn map_out_coord(&self, point: Point) -> Point {
        self.iter()
            .find(|page| page.logical_bounds.contains(point))
            .map(|page| {
                let delta = point - page.logical_bounds.origin();
                page.viewable_page_bounds.origin() + delta
            })
            .unwrap_or(point)
    }

    /// Map an area of the paged surface to the designer area printed in it.
    /// Every page the rectangle touches contributes; the result is the union,
    /// or an empty rectangle if no printable area is touched.
    pub fn map_in_rect(&self, rect: Rect) -> Rect {
        self.iter()
            .filter_map(|page| {
                let visible = rect.intersection(&page.viewable_page_bounds)?;
                Some(reanchor(visible, page.viewable_page_bounds, page.logical_bounds))
            })
            .reduce(|acc, r| acc.union(&r))
            .unwrap_or_default()
    }

    /// Map a designer area to the parts of the paged surface it is printed on
    pub fn map_out_rect(&self, rect: Rect) -> Rect {
        self.iter()
            .filter_map(|page| {
                let visible = rect.intersection(&page.logical_bounds)?;
                Some(reanchor(visible, page.logical_bounds, page.viewable_page_bounds))
            })
            .reduce(|acc, r| acc.union(&r))
            .unwrap_or_default()
    }

    /// Whether a point of the paged surface lies in some page's printable area
    pub fn is_coord_in_layout(&self, point: Point) -> bool {
        self.iter()
            .any(|page| page.viewable_page_bounds.contains(point))
    }
}

/// Move `part` of `from` to the matching place in `to`, keeping its distance
/// from every edge of the enclosing rectangle.
fn reanchor(part: Rect, from: Rect, to: Rect) -> Rect {
    let lead = part.origin() - from.origin();
    let trail = (from.size() - part.size()) - Size::from(lead);
    Rect::from_xywh(
        to.x1 + lead.x,
        to.y1 + lead.y,
        to.width() - lead.x - trail.width,
        to.height() - lead.y - trail.height,
    )
}
