//! Page grid calculation: how many pages a print preview needs and how large
//! each of them is in layout units.
//!
//! Every size here is *reverse scaled*: the paper, separator and margins are
//! divided by the print scaling, so that when the view later scales the
//! layout by that factor the pages come out at exactly their paper size.

use crate::geometry::Size;
use crate::margins::Margins;
use crate::setup::ScalePolicy;

/// Smallest scaling a grid is computed with, the finest step that survives
/// truncation to three decimal digits
pub const MIN_SCALING: f32 = 0.001;

/// Most pages laid out along either axis. Content that would need more is
/// cut off at the last page.
pub const MAX_PAGES_ALONG: i32 = 256;

/// Inputs to a page grid computation. The paper is already turned to the
/// requested orientation and the margins already adjusted for the printer.
#[derive(Debug, Clone, PartialEq)]
pub struct GridInput {
    /// Size of the content being paginated
    pub content_size: Size,
    pub paper_size: Size,
    pub margins: Margins,
    pub scale: ScalePolicy,
    /// Gap between pages, before reverse scaling
    pub separator: Size,
    pub header_margin: i32,
    pub footer_margin: i32,
}

/// The derived geometry of a page grid
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScalingState {
    pub scaling: f32,
    pub page_size: Size,
    pub page_separator: Size,
    pub page_margins: Margins,
    /// Only `top` (header) and `bottom` (footer) are used
    pub header_footer_margins: Margins,
    /// The printable part of a page
    pub viewable_page_size: Size,
    /// Width = columns, height = rows
    pub row_columns: Size,
}

impl Default for ScalingState {
    fn default() -> Self {
        ScalingState {
            scaling: 1.0,
            page_size: Size::EMPTY,
            page_separator: Size::EMPTY,
            page_margins: Margins::empty(),
            header_footer_margins: Margins::empty(),
            viewable_page_size: Size::square(1),
            row_columns: Size::square(1),
        }
    }
}

impl ScalingState {
    /// Lay out a page grid for `input`. Never fails: degenerate sizes are
    /// clamped so that at least one page of at least one unit results.
    ///
    /// ```
    /// use designer_layout::{GridInput, Margins, ScalePolicy, ScalingState, Size};
    ///
    /// let state = ScalingState::compute(&GridInput {
    ///     content_size: Size::new(2000, 500),
    ///     paper_size: Size::new(850, 1100),
    ///     margins: Margins::all(20),
    ///     scale: ScalePolicy::Percent(100),
    ///     separator: Size::new(30, 30),
    ///     header_margin: 0,
    ///     footer_margin: 0,
    /// });
    /// assert_eq!(state.viewable_page_size, Size::new(810, 1060));
    /// assert_eq!(state.row_columns, Size::new(3, 1));
    /// ```
    pub fn compute(input: &GridInput) -> ScalingState {
        let paper = input.paper_size.at_least(1);
        let scaling = scaling_for(input, paper);

        let page_size = unscale_ceil(paper, scaling).at_least(1);
        let page_separator = unscale_ceil(input.separator, scaling);
        let page_margins = input.margins.unscaled(scaling);
        let header_footer_margins = Margins {
            top: (input.header_margin as f32 / scaling) as i32,
            bottom: (input.footer_margin as f32 / scaling) as i32,
            ..Margins::empty()
        };

        let viewable_page_size = (page_size - page_margins.total()).at_least(1);
        let content = input.content_size.at_least(0);
        let row_columns = Size::new(
            pages_along(content.width, viewable_page_size.width),
            pages_along(content.height, viewable_page_size.height),
        );
        if row_columns.width > MAX_PAGES_ALONG || row_columns.height > MAX_PAGES_ALONG {
            log::warn!(
                "{} pages of {} needed for {}, keeping at most {} along each axis",
                row_columns,
                viewable_page_size,
                content,
                MAX_PAGES_ALONG
            );
        }
        let row_columns = Size::new(
            row_columns.width.min(MAX_PAGES_ALONG),
            row_columns.height.min(MAX_PAGES_ALONG),
        );

        ScalingState {
            scaling,
            page_size,
            page_separator,
            page_margins,
            header_footer_margins,
            viewable_page_size,
            row_columns,
        }
    }

    /// Size of the whole grid including the separators around every page
    pub fn extent(&self) -> Size {
        let along = |pages: i32, page: i32, separator: i32| {
            pages
                .saturating_mul(page)
                .saturating_add((pages + 1).saturating_mul(separator))
        };
        Size::new(
            along(self.row_columns.width, self.page_size.width, self.page_separator.width),
            along(self.row_columns.height, self.page_size.height, self.page_separator.height),
        )
    }

    /// Printable area over all pages
    pub fn total_printable_area(&self) -> Size {
        let per_page = self.page_size - self.page_margins.total();
        Size::new(
            self.row_columns.width.saturating_mul(per_page.width),
            self.row_columns.height.saturating_mul(per_page.height),
        )
    }
}

fn scaling_for(input: &GridInput, paper: Size) -> f32 {
    let scaling = match input.scale {
        ScalePolicy::Percent(percent) => percent as f32 / 100.0,
        ScalePolicy::FitToPages { wide, tall } => {
            let printable = (paper - input.margins.total()).at_least(1);
            let content = input.content_size.at_least(1);
            let scale_x = wide.max(1) as f32 * printable.width as f32 / content.width as f32;
            let scale_y = tall.max(1) as f32 * printable.height as f32 / content.height as f32;
            // keep three digits so a page count of 3.0000001 doesn't become 4
            let scaling = scale_x.min(scale_y) as f64;
            ((scaling * 1000.0).floor() / 1000.0) as f32
        }
    };

    if !scaling.is_finite() {
        log::warn!("non-finite print scaling for {:?}, using 1.0", input.scale);
        1.0
    } else {
        scaling.max(MIN_SCALING)
    }
}

fn unscale_ceil(size: Size, scaling: f32) -> Size {
    let f = |v: i32| (v as f32 / scaling).ceil() as i32;
    Size::new(f(size.width), f(size.height))
}

/// Pages needed to cover `content` units with pages of `viewable` units. A
/// remainder of a single unit is rounding noise and doesn't start a page.
fn pages_along(content: i32, viewable: i32) -> i32 {
    let mut pages = content / viewable;
    if content % viewable > 1 {
        pages += 1;
    }
    pages.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(content: Size, scale: ScalePolicy) -> GridInput {
        GridInput {
            content_size: content,
            paper_size: Size::new(850, 1100),
            margins: Margins::all(20),
            scale,
            separator: Size::new(30, 30),
            header_margin: 50,
            footer_margin: 40,
        }
    }

    #[test]
    fn letter_paper_at_full_scale() {
        let s = ScalingState::compute(&input(Size::new(2000, 500), ScalePolicy::Percent(100)));
        assert_eq!(s.scaling, 1.0);
        assert_eq!(s.page_size, Size::new(850, 1100));
        assert_eq!(s.page_separator, Size::new(30, 30));
        assert_eq!(s.page_margins, Margins::all(20));
        assert_eq!(s.viewable_page_size, Size::new(810, 1060));
        assert_eq!(s.row_columns, Size::new(3, 1));
        assert_eq!(s.header_footer_margins.top, 50);
        assert_eq!(s.header_footer_margins.bottom, 40);
    }

    #[test]
    fn exact_fit_is_one_page() {
        let s = ScalingState::compute(&input(Size::new(810, 1060), ScalePolicy::Percent(100)));
        assert_eq!(s.row_columns, Size::new(1, 1));
    }

    #[test]
    fn one_unit_over_does_not_add_a_page() {
        let s = ScalingState::compute(&input(Size::new(811, 1061), ScalePolicy::Percent(100)));
        assert_eq!(s.row_columns, Size::new(1, 1));
    }

    #[test]
    fn two_units_over_adds_a_page_on_that_axis_only() {
        let s = ScalingState::compute(&input(Size::new(812, 1060), ScalePolicy::Percent(100)));
        assert_eq!(s.row_columns, Size::new(2, 1));
    }

    #[test]
    fn half_scale_doubles_page_size() {
        let s = ScalingState::compute(&input(Size::new(100, 100), ScalePolicy::Percent(50)));
        assert_eq!(s.scaling, 0.5);
        assert_eq!(s.page_size, Size::new(1700, 2200));
        assert_eq!(s.page_separator, Size::new(60, 60));
        assert_eq!(s.page_margins, Margins::all(40));
        assert_eq!(s.viewable_page_size, Size::new(1620, 2120));
        assert_eq!(s.header_footer_margins.top, 100);
    }

    #[test]
    fn fit_to_pages_uses_smaller_axis_and_truncates() {
        // printable 810x1060; fitting 3000x1000 on one page wide
        let s = ScalingState::compute(&input(
            Size::new(3000, 1000),
            ScalePolicy::FitToPages { wide: 1, tall: 1 },
        ));
        // 810 / 3000 = 0.27, 1060 / 1000 = 1.06
        assert_eq!(s.scaling, 0.27);
        assert_eq!(s.row_columns.width, 1);
        assert_eq!(s.row_columns.height, 1);
    }

    #[test]
    fn fit_to_pages_truncates_rather_than_rounds() {
        // 810 / 2430 = 0.33333.. -> 0.333
        let s = ScalingState::compute(&input(
            Size::new(2430, 100),
            ScalePolicy::FitToPages { wide: 1, tall: 1 },
        ));
        assert_eq!(s.scaling, 0.333);
    }

    #[test]
    fn two_pages_wide_fits_across_two_columns() {
        let s = ScalingState::compute(&input(
            Size::new(3240, 100),
            ScalePolicy::FitToPages { wide: 2, tall: 1 },
        ));
        assert_eq!(s.scaling, 0.5);
        assert_eq!(s.row_columns, Size::new(2, 1));
    }

    #[test]
    fn degenerate_inputs_still_produce_a_page() {
        let mut i = input(Size::EMPTY, ScalePolicy::FitToPages { wide: 0, tall: 0 });
        i.paper_size = Size::new(-10, 0);
        let s = ScalingState::compute(&i);
        assert!(s.scaling > 0.0 && s.scaling.is_finite());
        assert_eq!(s.row_columns, Size::new(1, 1));
        assert!(!s.page_size.is_empty());
        assert!(!s.viewable_page_size.is_empty());

        let s = ScalingState::compute(&input(Size::new(500, 500), ScalePolicy::Percent(0)));
        assert_eq!(s.scaling, MIN_SCALING);
        assert_eq!(s.row_columns, Size::new(1, 1));
    }

    #[test]
    fn margins_wider_than_the_page_leave_one_unit() {
        let mut i = input(Size::new(10, 10), ScalePolicy::Percent(100));
        i.margins = Margins::all(1000);
        let s = ScalingState::compute(&i);
        assert_eq!(s.viewable_page_size, Size::new(1, 1));
        assert_eq!(s.row_columns, Size::new(10, 10));
    }

    #[test]
    fn page_count_is_capped_along_each_axis() {
        let mut i = input(Size::new(50_000, 50_000), ScalePolicy::Percent(100));
        i.margins = Margins::all(1000);
        let s = ScalingState::compute(&i);
        assert_eq!(s.viewable_page_size, Size::new(1, 1));
        assert_eq!(s.row_columns, Size::square(MAX_PAGES_ALONG));
        assert_eq!(
            s.extent().width,
            MAX_PAGES_ALONG * 850 + (MAX_PAGES_ALONG + 1) * 30
        );

        let s = ScalingState::compute(&input(Size::new(i32::MAX, 10), ScalePolicy::Percent(0)));
        assert_eq!(s.row_columns, Size::new(MAX_PAGES_ALONG, 1));
        assert!(s.extent().width > 0);
    }

    #[test]
    fn extent_includes_leading_and_trailing_separators() {
        let s = ScalingState::compute(&input(Size::new(2000, 500), ScalePolicy::Percent(100)));
        assert_eq!(s.extent(), Size::new(3 * 850 + 4 * 30, 1100 + 2 * 30));
        assert_eq!(s.total_printable_area(), Size::new(3 * 810, 1060));
    }
}
