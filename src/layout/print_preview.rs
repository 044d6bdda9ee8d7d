use super::{Layout, UpdateReason};
use crate::canvas::Canvas;
use crate::error::LayoutError;
use crate::geometry::{Point, Size};
use crate::grid::{GridInput, ScalingState};
use crate::margins::Margins;
use crate::page::PageGrid;
use crate::paint::PagePainter;
use crate::pagesize::PaperSize;
use crate::rect::Rect;
use crate::setup::{PageSetup, PrintDocument, PrinterContext};
use crate::view::{LayoutServices, ViewportData};
use chrono::{DateTime, Local};
use std::rc::Rc;

/// Gap between pages when the designer options don't set one
pub const DEFAULT_PAGE_SEPARATOR: Size = Size::new(30, 30);

/// Everything a print preview computes in one update
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub state: ScalingState,
    pub grid: PageGrid,
    /// When the pages were laid out, printed by the `{Date}` and `{Time}`
    /// header and footer fields
    pub preview_time: DateTime<Local>,
}

/// Print preview: the designer is spread over a grid of pages, each page
/// showing the part of the designer it would print.
///
/// Nothing is laid out until the first [`Layout::update`]; until then the
/// preview has no pages and every point maps to itself.
pub struct PaginatedLayout {
    services: LayoutServices,
    print_document: Rc<dyn PrintDocument>,
    pagination: Pagination,
}

impl PaginatedLayout {
    /// Fails if `services` has no print document
    pub fn new(services: LayoutServices) -> Result<PaginatedLayout, LayoutError> {
        let print_document = services.require_print_document()?;
        Ok(PaginatedLayout {
            services,
            print_document,
            pagination: Pagination {
                state: ScalingState::default(),
                grid: PageGrid::default(),
                preview_time: Local::now(),
            },
        })
    }

    pub fn state(&self) -> &ScalingState {
        &self.pagination.state
    }

    pub fn grid(&self) -> &PageGrid {
        &self.pagination.grid
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    fn paginate(&self, context: &dyn PrinterContext) -> Pagination {
        let setup = self.print_document.page_setup();
        let theme = &self.services.theme;

        let mut content_size = self.services.view.root_designer_size();
        if !content_size.is_empty() {
            // leave room for the selection adornments around the designer
            content_size += Size::new(
                3 * theme.selection_size.width,
                3 * theme.selection_size.height,
            );
        }

        let separator = self
            .services
            .options
            .as_ref()
            .and_then(|options| options.page_separator())
            .unwrap_or(DEFAULT_PAGE_SEPARATOR);

        let state = ScalingState::compute(&GridInput {
            content_size,
            paper_size: oriented_paper(self.print_document.paper_size(), setup.landscape),
            margins: adjusted_margins(&setup, context),
            scale: setup.scale,
            separator,
            header_margin: setup.header_margin,
            footer_margin: setup.footer_margin,
        });

        Pagination {
            state,
            grid: PageGrid::build(&state),
            preview_time: Local::now(),
        }
    }

    fn painter(&self) -> PagePainter<'_> {
        PagePainter {
            state: &self.pagination.state,
            grid: &self.pagination.grid,
            theme: &self.services.theme,
            print_document: self.print_document.as_ref(),
            zoom: self.services.view.zoom(),
            preview_time: self.pagination.preview_time,
            file_name: self.services.file_name.as_deref().unwrap_or_default(),
        }
    }
}

/// The paper turned to the requested orientation, at least one unit each way
fn oriented_paper(portrait: PaperSize, landscape: bool) -> Size {
    let paper = if landscape {
        portrait.transposed()
    } else {
        portrait
    };
    paper.at_least(1)
}

/// The page setup's margins, turned with the paper and widened to what the
/// printer can actually reach
fn adjusted_margins(setup: &PageSetup, context: &dyn PrinterContext) -> Margins {
    let margins = if setup.landscape {
        setup.margins.landscape()
    } else {
        setup.margins
    };
    margins.at_least(&context.hard_margins())
}

impl Layout for PaginatedLayout {
    fn scaling(&self) -> f32 {
        self.pagination.state.scaling
    }

    fn extent(&self) -> Size {
        self.pagination.state.extent()
    }

    /// Where the designer starts on the combined printable area of all pages,
    /// optionally centred, and never closer to the edge than its selection
    /// adornments need
    fn root_alignment(&self) -> Point {
        let setup = self.print_document.page_setup();
        let printable = self.pagination.state.total_printable_area();
        let root = self.services.view.root_designer_size();
        let selection = self.services.theme.selection_size;

        let mut alignment = Point::ORIGIN;
        if setup.center_horizontally {
            alignment.x = (printable.width - root.width) / 2;
        }
        alignment.x = alignment.x.max(selection.width + selection.width / 2);

        if setup.center_vertically {
            alignment.y = (printable.height - root.height) / 2;
        }
        alignment.y = alignment.y.max(selection.height + selection.height / 2);

        alignment
    }

    fn is_coord_in_layout(&self, point: Point) -> bool {
        self.pagination.grid.is_coord_in_layout(point)
    }

    fn map_in_rect(&self, rect: Rect) -> Rect {
        self.pagination.grid.map_in_rect(rect)
    }

    fn map_out_rect(&self, rect: Rect) -> Rect {
        self.pagination.grid.map_out_rect(rect)
    }

    fn map_in_coord(&self, point: Point) -> Point {
        self.pagination.grid.map_in_coord(point)
    }

    fn map_out_coord(&self, point: Point) -> Point {
        self.pagination.grid.map_out_coord(point)
    }

    fn paint(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        self.painter().paint_background(canvas, viewport)
    }

    fn paint_content(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        self.painter().paint_pages(canvas, viewport)
    }

    /// Lay the pages out again. Zoom changes keep the current pages since the
    /// view scales them itself.
    fn update(
        &mut self,
        context: Option<&dyn PrinterContext>,
        reason: UpdateReason,
    ) -> Result<(), LayoutError> {
        if reason == UpdateReason::ZoomChanged {
            log::trace!("zoom changed, keeping {} pages", self.pagination.grid.len());
            return Ok(());
        }

        let context = context.ok_or(LayoutError::MissingDrawingContext)?;
        let pagination = self.paginate(context);

        log::debug!(
            "laid out {} pages ({} x {}) at scaling {}, page size {}",
            pagination.grid.len(),
            pagination.state.row_columns.width,
            pagination.state.row_columns.height,
            pagination.state.scaling,
            pagination.state.page_size,
        );
        for page in pagination.grid.iter() {
            log::trace!(
                "page ({}, {}): {:?} prints {:?}",
                page.column(),
                page.row(),
                page.page_bounds,
                page.logical_bounds
            );
        }

        self.pagination = pagination;
        Ok(())
    }
}
