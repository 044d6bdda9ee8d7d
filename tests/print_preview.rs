use designer_layout::{
    BorderlessPrinter, DesignerView, GridInput, Layout, LayoutError, LayoutServices, Margins,
    PageGrid, PageSetup, Point, Rect, ScalePolicy, ScalingState, Size, StaticPrintDocument,
    UpdateReason, WorkflowLayout,
};
use std::rc::Rc;

struct View {
    root: Option<Rect>,
}

impl DesignerView for View {
    fn root_designer_bounds(&self) -> Option<Rect> {
        self.root
    }

    fn viewport_size(&self) -> Size {
        Size::new(1024, 768)
    }

    fn zoom(&self) -> i32 {
        100
    }
}

fn services(root: Size, margins: i32) -> LayoutServices {
    let mut page_setup = PageSetup::new();
    page_setup.margins(Margins::all(margins));
    LayoutServices::builder()
        .view(Rc::new(View {
            root: Some(Rect::new(Point::ORIGIN, root)),
        }))
        .print_document(Rc::new(StaticPrintDocument {
            paper_size: Size::new(850, 1100),
            page_setup,
        }))
        .build()
        .expect("view is set")
}

fn grid(content: Size) -> PageGrid {
    PageGrid::build(&ScalingState::compute(&GridInput {
        content_size: content,
        paper_size: Size::new(850, 1100),
        margins: Margins::all(20),
        scale: ScalePolicy::Percent(100),
        separator: Size::new(30, 30),
        header_margin: 0,
        footer_margin: 0,
    }))
}

#[test]
fn every_grid_has_at_least_one_page() {
    for content in [Size::EMPTY, Size::new(-10, 5), Size::new(1, 1), Size::new(811, 1)] {
        let grid = grid(content);
        assert!(grid.row_columns().width >= 1);
        assert!(grid.row_columns().height >= 1);
        assert_eq!(grid.len() as i32, grid.row_columns().width * grid.row_columns().height);
    }
}

#[test]
fn a_single_unit_of_overflow_is_ignored() {
    assert_eq!(grid(Size::new(810, 1060)).len(), 1);
    assert_eq!(grid(Size::new(811, 1060)).len(), 1);
    assert_eq!(grid(Size::new(812, 1060)).len(), 2);
}

#[test]
fn wide_content_on_letter_paper() {
    let content = Size::new(2000, 500);
    let grid = grid(content);
    assert_eq!(grid.len(), 3);

    let lefts: Vec<i32> = grid.iter().map(|p| p.logical_bounds.x1).collect();
    assert_eq!(lefts, vec![0, 810, 1620]);
    let last = grid.pages().last().expect("three pages");
    assert_eq!(last.content_bounds(content).map(|r| r.x2), Some(2000));
}

#[test]
fn printable_points_round_trip() {
    let grid = grid(Size::new(2500, 2500));
    for page in grid.iter() {
        let v = page.viewable_page_bounds;
        for p in [v.origin(), Point::new(v.x2 - 1, v.y1 + 100), Point::new(v.x1 + 400, v.y2 - 1)] {
            assert!(grid.is_coord_in_layout(p));
            assert_eq!(grid.map_out_coord(grid.map_in_coord(p)), p);
        }
    }
}

#[test]
fn separators_are_outside_the_layout() {
    let grid = grid(Size::new(2000, 2000));
    // between the columns, and between the rows
    assert!(!grid.is_coord_in_layout(Point::new(895, 300)));
    assert!(!grid.is_coord_in_layout(Point::new(300, 1145)));
    assert_eq!(grid.map_in_coord(Point::new(895, 300)), Point::new(895, 300));
}

#[test]
fn default_layout_is_the_identity() {
    let layout = WorkflowLayout::default_layout(services(Size::new(300, 200), 100));
    for p in [Point::ORIGIN, Point::new(-4, 9), Point::new(5000, 5000)] {
        assert_eq!(layout.map_in_coord(p), p);
        assert_eq!(layout.map_out_coord(p), p);
        assert!(layout.is_coord_in_layout(p));
    }
}

#[test]
fn print_preview_updates_are_idempotent() {
    let mut layout = WorkflowLayout::print_preview(services(Size::new(1900, 2900), 100))
        .expect("has a print document");
    layout
        .update(Some(&BorderlessPrinter), UpdateReason::LayoutChanged)
        .expect("has a printer");
    let (extent, alignment) = (layout.extent(), layout.root_alignment());
    let selection = Rect::from_xywh(600, 800, 300, 300);
    let mapped = layout.map_out_rect(selection);

    layout
        .update(Some(&BorderlessPrinter), UpdateReason::LayoutChanged)
        .expect("has a printer");
    assert_eq!(layout.extent(), extent);
    assert_eq!(layout.root_alignment(), alignment);
    assert_eq!(layout.map_out_rect(selection), mapped);
}

#[test]
fn print_preview_needs_a_print_document_and_a_printer() {
    let services = LayoutServices::builder()
        .view(Rc::new(View { root: None }))
        .build()
        .expect("view is set");
    assert!(matches!(
        WorkflowLayout::print_preview(services),
        Err(LayoutError::MissingService(_))
    ));

    let mut layout = WorkflowLayout::print_preview(services_without_root())
        .expect("has a print document");
    assert!(matches!(
        layout.update(None, UpdateReason::LayoutChanged),
        Err(LayoutError::MissingDrawingContext)
    ));
    assert!(layout.update(None, UpdateReason::ZoomChanged).is_ok());
}

fn services_without_root() -> LayoutServices {
    LayoutServices::builder()
        .view(Rc::new(View { root: None }))
        .print_document(Rc::new(StaticPrintDocument::default()))
        .build()
        .expect("view is set")
}

#[test]
fn an_empty_designer_still_gets_a_page() {
    let mut layout =
        WorkflowLayout::print_preview(services_without_root()).expect("has a print document");
    layout
        .update(Some(&BorderlessPrinter), UpdateReason::LayoutChanged)
        .expect("has a printer");
    // one letter page and a separator on each side
    assert_eq!(layout.extent(), Size::new(850 + 60, 1100 + 60));
}
