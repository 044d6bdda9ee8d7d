//! Layouts place the root designer on the view's surface and translate
//! between the designer's logical coordinates and the surface.
//!
//! A view picks one layout for its lifetime:
//!
//! - [`DefaultLayout`] - the designer as-is, with a fixed margin around it
//! - [`ActivityRootLayout`] - the default layout with a framed, shadowed root
//! - [`CenteredLayout`] - the default layout, kept centred in the viewport
//! - [`PaginatedLayout`] - print preview: the designer split over pages
//!
//! All of them implement [`Layout`], and [`WorkflowLayout`] wraps whichever
//! was chosen so the view never needs to know which one it holds.
//!
//! # Example
//!
//! ```
//! use designer_layout::{
//!     BorderlessPrinter, DesignerView, Layout, LayoutServices, Point, Rect, Size,
//!     StaticPrintDocument, UpdateReason, WorkflowLayout,
//! };
//! use std::rc::Rc;
//!
//! struct View;
//! impl DesignerView for View {
//!     fn root_designer_bounds(&self) -> Option<Rect> {
//!         Some(Rect::from_xywh(0, 0, 1988, 488))
//!     }
//!     fn viewport_size(&self) -> Size { Size::new(1024, 768) }
//!     fn zoom(&self) -> i32 { 100 }
//! }
//!
//! let services = LayoutServices::builder()
//!     .view(Rc::new(View))
//!     .print_document(Rc::new(StaticPrintDocument::default()))
//!     .build()
//!     .expect("all services present");
//!
//! let mut layout = WorkflowLayout::print_preview(services).expect("has a print document");
//! layout
//!     .update(Some(&BorderlessPrinter), UpdateReason::LayoutChanged)
//!     .expect("has a printer");
//!
//! // letter paper with one inch margins prints 650 units per page
//! let on_page = layout.map_out_coord(Point::new(700, 10));
//! assert!(layout.is_coord_in_layout(on_page));
//! assert_eq!(layout.map_in_coord(on_page), Point::new(700, 10));
//! ```

mod default;
mod print_preview;

pub use default::*;
pub use print_preview::*;

use crate::canvas::Canvas;
use crate::error::LayoutError;
use crate::geometry::{Point, Size};
use crate::rect::Rect;
use crate::setup::PrinterContext;
use crate::view::{LayoutServices, ViewportData};

/// Why the host asks a layout to update
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UpdateReason {
    /// The content, the paper or the page setup changed
    LayoutChanged,
    /// Only the zoom level changed
    ZoomChanged,
}

/// The contract between a designer view and its layout. All coordinates and
/// sizes are logical unless stated otherwise.
pub trait Layout {
    /// Factor the layout scales the designer by (the print scaling)
    fn scaling(&self) -> f32;

    /// Size of the whole scrollable surface
    fn extent(&self) -> Size;

    /// Where the root designer's top-left corner goes
    fn root_alignment(&self) -> Point;

    /// Whether a point of the surface shows designer content
    fn is_coord_in_layout(&self, point: Point) -> bool;

    /// Surface rectangle to the designer rectangle shown in it
    fn map_in_rect(&self, rect: Rect) -> Rect;

    /// Designer rectangle to the surface rectangle showing it
    fn map_out_rect(&self, rect: Rect) -> Rect;

    /// Surface point to the designer point shown there
    fn map_in_coord(&self, point: Point) -> Point;

    /// Designer point to the surface point showing it
    fn map_out_coord(&self, point: Point) -> Point;

    /// Paint everything behind the designer content
    fn paint(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>);

    /// Paint the designer content, as cached in the viewport's bitmap
    fn paint_content(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>);

    /// Recompute the layout. `context` measures the printer and is only
    /// required by layouts that paginate.
    fn update(
        &mut self,
        context: Option<&dyn PrinterContext>,
        reason: UpdateReason,
    ) -> Result<(), LayoutError>;
}

/// The layout a view was created with
pub enum WorkflowLayout {
    Default(DefaultLayout),
    ActivityRoot(ActivityRootLayout),
    Centered(CenteredLayout),
    Paginated(PaginatedLayout),
}

impl WorkflowLayout {
    pub fn default_layout(services: LayoutServices) -> WorkflowLayout {
        WorkflowLayout::Default(DefaultLayout::new(services))
    }

    pub fn activity_root(services: LayoutServices) -> WorkflowLayout {
        WorkflowLayout::ActivityRoot(ActivityRootLayout::new(services))
    }

    pub fn centered(services: LayoutServices) -> WorkflowLayout {
        WorkflowLayout::Centered(CenteredLayout::new(services))
    }

    /// Fails if `services` has no print document
    pub fn print_preview(services: LayoutServices) -> Result<WorkflowLayout, LayoutError> {
        Ok(WorkflowLayout::Paginated(PaginatedLayout::new(services)?))
    }

    fn inner(&self) -> &dyn Layout {
        match self {
            WorkflowLayout::Default(l) => l,
            WorkflowLayout::ActivityRoot(l) => l,
            WorkflowLayout::Centered(l) => l,
            WorkflowLayout::Paginated(l) => l,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Layout {
        match self {
            WorkflowLayout::Default(l) => l,
            WorkflowLayout::ActivityRoot(l) => l,
            WorkflowLayout::Centered(l) => l,
            WorkflowLayout::Paginated(l) => l,
        }
    }
}

impl Layout for WorkflowLayout {
    fn scaling(&self) -> f32 {
        self.inner().scaling()
    }

    fn extent(&self) -> Size {
        self.inner().extent()
    }

    fn root_alignment(&self) -> Point {
        self.inner().root_alignment()
    }

    fn is_coord_in_layout(&self, point: Point) -> bool {
        self.inner().is_coord_in_layout(point)
    }

    fn map_in_rect(&self, rect: Rect) -> Rect {
        self.inner().map_in_rect(rect)
    }

    fn map_out_rect(&self, rect: Rect) -> Rect {
        self.inner().map_out_rect(rect)
    }

    fn map_in_coord(&self, point: Point) -> Point {
        self.inner().map_in_coord(point)
    }

    fn map_out_coord(&self, point: Point) -> Point {
        self.inner().map_out_coord(point)
    }

    fn paint(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        self.inner().paint(canvas, viewport)
    }

    fn paint_content(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        self.inner().paint_content(canvas, viewport)
    }

    fn update(
        &mut self,
        context: Option<&dyn PrinterContext>,
        reason: UpdateReason,
    ) -> Result<(), LayoutError> {
        self.inner_mut().update(context, reason)
    }
}
