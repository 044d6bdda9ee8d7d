use designer_layout::pagesize::{PageOrientation, LETTER};
use designer_layout::{
    BorderlessPrinter, Bitmap, Colour, DesignerView, ImageCanvas, Layout, LayoutServices, Margins,
    PageSetup, Point, Rect, ScalePolicy, Size, StaticPrintDocument, UpdateReason, ViewportData,
    WorkflowLayout,
};
use std::rc::Rc;

/// A designer of 2400x900 units viewed at 50%
struct Designer;

impl DesignerView for Designer {
    fn root_designer_bounds(&self) -> Option<Rect> {
        Some(Rect::from_xywh(0, 0, 2400, 900))
    }

    fn viewport_size(&self) -> Size {
        Size::new(1600, 700)
    }

    fn zoom(&self) -> i32 {
        50
    }
}

fn main() {
    env_logger::init();

    let mut page_setup = PageSetup::new();
    page_setup
        .scale(ScalePolicy::FitToPages { wide: 2, tall: 1 })
        .margins(Margins::all(50))
        .landscape(true)
        .header("{FileName}")
        .footer("Page {#} of {##}");

    let services = LayoutServices::builder()
        .view(Rc::new(Designer))
        .print_document(Rc::new(StaticPrintDocument {
            paper_size: LETTER.portrait(),
            page_setup,
        }))
        .file_name("order-processing.xoml")
        .build()
        .unwrap();

    let mut layout = WorkflowLayout::print_preview(services).unwrap();
    layout
        .update(Some(&BorderlessPrinter), UpdateReason::LayoutChanged)
        .unwrap();

    let extent = layout.extent();
    println!("scaling {:.3}, extent {}", layout.scaling(), extent);

    // render the whole surface at the print scaling
    let scaling = layout.scaling();
    let scaled = |size: Size| {
        Size::new(
            (size.width as f32 * scaling).ceil() as i32,
            (size.height as f32 * scaling).ceil() as i32,
        )
    };

    // stand-in for the rendered designer: a checkerboard of 100 unit squares
    let content = Size::new(2400, 900);
    let mut designer = Bitmap::new(scaled(content));
    for (x, y, pixel) in designer.enumerate_pixels_mut() {
        let (x, y) = ((x as f32 / scaling) as u32, (y as f32 / scaling) as u32);
        let colour = if (x / 100 + y / 100) % 2 == 0 {
            Colour::new_rgb_bytes(200, 220, 255)
        } else {
            Colour::new_rgb_bytes(80, 120, 200)
        };
        *pixel = colour.into();
    }

    let screen = scaled(extent);
    let viewport = ViewportData {
        memory_bitmap: &designer,
        logical_viewport: Rect::new(Point::ORIGIN, content),
        scaling: (scaling, scaling),
        translation: Point::ORIGIN,
        viewport_size: screen,
        shadow_depth: Size::EMPTY,
    };

    let mut canvas = ImageCanvas::new(Bitmap::new(screen));
    layout.paint(&mut canvas, &viewport);
    layout.paint_content(&mut canvas, &viewport);

    canvas.into_bitmap().save("print-preview.png").unwrap();
}
