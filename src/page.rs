use crate::geometry::{Point, Size};
use crate::grid::{ScalingState, MAX_PAGES_ALONG};
use crate::rect::Rect;

/// Most pages a grid holds
const MAX_PAGES: usize = (MAX_PAGES_ALONG as usize) * (MAX_PAGES_ALONG as usize);

/// Offset of the `index`th page along one axis, after the leading separator
fn offset_along(index: i32, page: i32, separator: i32) -> i32 {
    index
        .saturating_mul(page)
        .saturating_add((index + 1).saturating_mul(separator))
}

/// Where one page of a print preview sits, in both coordinate spaces.
///
/// ```text
///   |-----------------------|
///   |page_bounds            |
///   |   |---------------|.......... maps to logical_bounds
///   |   |viewable_page  |   |
///   |   |_bounds        |   |
///   |   |---------------|..........
///   |                       |
///   -------------------------
/// ```
///
/// `page_bounds` and `viewable_page_bounds` are in layout (paged) space;
/// `logical_bounds` is the part of the designer content printed on the page,
/// tiling the designer from (0, 0) with no gaps.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PageLayout {
    pub logical_bounds: Rect,
    /// The complete page, margins included
    pub page_bounds: Rect,
    /// The printable area of the page, margins excluded
    pub viewable_page_bounds: Rect,
    /// Column and row of the page in the grid
    pub position: Point,
}

impl PageLayout {
    /// The logical bounds clipped to the designer content. The last page of
    /// a row or column is usually only partly covered.
    pub fn content_bounds(&self, content_size: Size) -> Option<Rect> {
        self.logical_bounds
            .intersection(&Rect::new(Point::ORIGIN, content_size))
    }

    pub fn column(&self) -> i32 {
        self.position.x
    }

    pub fn row(&self) -> i32 {
        self.position.y
    }
}

/// All pages of a print preview, in row-major order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageGrid {
    pages: Vec<PageLayout>,
    row_columns: Size,
}

impl PageGrid {
    /// Lay out one page per grid cell of `state`
    pub fn build(state: &ScalingState) -> PageGrid {
        let ScalingState {
            page_size,
            page_separator: separator,
            page_margins: margins,
            viewable_page_size: viewable,
            row_columns,
            ..
        } = *state;

        let count = (row_columns.width.max(0) as usize)
            .saturating_mul(row_columns.height.max(0) as usize);
        let mut pages = Vec::with_capacity(count.min(MAX_PAGES));
        for row in 0..row_columns.height {
            for column in 0..row_columns.width {
                if pages.len() == MAX_PAGES {
                    log::warn!("page grid {} truncated to {} pages", row_columns, MAX_PAGES);
                    return PageGrid { pages, row_columns };
                }
                let page_location = Point::new(
                    offset_along(column, page_size.width, separator.width),
                    offset_along(row, page_size.height, separator.height),
                );
                let viewable_location = page_location.offset(margins.left, margins.top);

                pages.push(PageLayout {
                    logical_bounds: Rect::from_xywh(
                        column.saturating_mul(viewable.width),
                        row.saturating_mul(viewable.height),
                        viewable.width,
                        viewable.height,
                    ),
                    page_bounds: Rect::new(page_location, page_size),
                    viewable_page_bounds: Rect::new(viewable_location, viewable),
                    position: Point::new(column, row),
                });
            }
        }

        PageGrid { pages, row_columns }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageLayout> {
        self.pages.iter()
    }

    pub fn pages(&self) -> &[PageLayout] {
        &self.pages
    }

    /// Width = columns, height = rows
    pub fn row_columns(&self) -> Size {
        self.row_columns
    }

    /// The page at a given column and row
    pub fn get(&self, column: i32, row: i32) -> Option<&PageLayout> {
        if column < 0 || row < 0 || column >= self.row_columns.width {
            return None;
        }
        let index = (row as usize)
            .checked_mul(self.row_columns.width as usize)?
            .checked_add(column as usize)?;
        self.pages.get(index)
    }
}

impl<'a> IntoIterator for &'a PageGrid {
    type Item = &'a PageLayout;
    type IntoIter = std::slice::Iter<'a, PageLayout>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
