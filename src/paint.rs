//! Painting a print preview: page chrome, watermarks, headers and footers,
//! and the designer bitmap spliced across the pages.
//!
//! The host renders the visible part of the designer once, unpaginated, into
//! the viewport's memory bitmap. Each visible page then copies the slice of
//! that bitmap it prints onto its own printable area.

use crate::canvas::{Canvas, ImageBlit, LightSource};
use crate::colour::colours;
use crate::geometry::Point;
use crate::grid::ScalingState;
use crate::header_footer::HeaderFooterData;
use crate::image::ContentAlignment;
use crate::page::PageGrid;
use crate::rect::Rect;
use crate::setup::PrintDocument;
use crate::theme::AmbientTheme;
use crate::transform::Transform;
use crate::view::{zoom_factor, ViewportData};
use chrono::{DateTime, Local};

/// Outline drawn around the printable area, outside it by this much
const PRINTABLE_OUTLINE_GAP: i32 = 3;

/// Everything needed to paint one laid out print preview
pub struct PagePainter<'a> {
    pub state: &'a ScalingState,
    pub grid: &'a PageGrid,
    pub theme: &'a AmbientTheme,
    pub print_document: &'a dyn PrintDocument,
    /// Zoom level in percent
    pub zoom: i32,
    pub preview_time: DateTime<Local>,
    pub file_name: &'a str,
}

impl PagePainter<'_> {
    /// Clear the surface and draw the watermark onto every visible page
    pub fn paint_background(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        canvas.set_transform(Transform::identity());
        canvas.fill_rect(viewport.memory_bitmap.bounds(), colours::WHITE);

        let Some(watermark) = self.theme.watermark.as_deref() else {
            return;
        };

        let physical_viewport = viewport.physical_viewport();

        // the watermark keeps its size relative to the page at any zoom: the
        // canvas scales up by the zoom while the page areas are scaled down
        let zoom = zoom_factor(self.zoom);
        let to_bitmap = Transform::scale(viewport.scaling.0 / zoom, viewport.scaling.1 / zoom);
        canvas.set_transform(Transform::scale(zoom, zoom));

        for page in self.grid.iter() {
            if !page.page_bounds.intersects(&physical_viewport) {
                continue;
            }

            let area = page
                .logical_bounds
                .translate(Point::ORIGIN - viewport.logical_viewport.origin());
            canvas.draw_image(ImageBlit {
                image: watermark,
                dest: to_bitmap.apply_rect(area),
                src: watermark.bounds(),
                alignment: self.theme.watermark_alignment,
                alpha: self.theme.watermark_transparency,
                grayscale: false,
            });
        }

        canvas.set_transform(Transform::identity());
    }

    /// Draw every visible page with its slice of the designer bitmap
    pub fn paint_pages(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        canvas.set_transform(Transform::identity());
        canvas.fill_rect(viewport.memory_bitmap.bounds(), self.theme.workspace_colour);

        let physical_viewport = viewport.physical_viewport();
        let layout_to_screen = viewport.layout_to_screen();
        let scale = viewport.scale_transform();

        let mut header_footer = HeaderFooterData {
            page_bounds: Rect::default(),
            page_bounds_without_margin: Rect::default(),
            header_footer_margins: self.state.header_footer_margins,
            current_page: 0,
            total_pages: self.grid.len(),
            print_time: self.preview_time,
            scaling: self.state.scaling,
            font_size: self.theme.font_size / self.state.scaling,
            file_name: self.file_name.to_string(),
        };
        let setup = self.print_document.page_setup();

        for (index, page) in self.grid.iter().enumerate() {
            if !page.page_bounds.intersects(&physical_viewport) || page.page_bounds.is_empty() {
                log::trace!("page {} is outside the viewport", index + 1);
                continue;
            }

            // page sheet
            canvas.set_transform(layout_to_screen);
            canvas.fill_rect(page.page_bounds, colours::WHITE);
            canvas.draw_drop_shadow(
                page.page_bounds,
                colours::BLACK,
                self.theme.drop_shadow_width,
                LightSource::TopLeft,
                0.2,
            );

            // splice in the part of the designer this page prints
            if let Some(visible) = page.logical_bounds.intersection(&viewport.logical_viewport) {
                canvas.set_transform(Transform::identity());

                let inset = visible.origin() - page.logical_bounds.origin();
                let target = page
                    .viewable_page_bounds
                    .origin()
                    .offset(inset.x.abs(), inset.y.abs());
                let target = scale.apply(target) - viewport.translation;

                let source = visible.translate(Point::ORIGIN - viewport.logical_viewport.origin());
                let source = scale.apply_rect(source);

                canvas.draw_image(ImageBlit {
                    image: viewport.memory_bitmap,
                    dest: Rect::new(target, source.size()),
                    src: source,
                    alignment: ContentAlignment::Fill,
                    alpha: 1.0,
                    grayscale: self.theme.draw_grayscale,
                });
            }

            // page outline and printable area outline
            canvas.set_transform(layout_to_screen);
            canvas.draw_rect(page.page_bounds, colours::BLACK);
            canvas.draw_rect(
                page.viewable_page_bounds
                    .inflate(PRINTABLE_OUTLINE_GAP, PRINTABLE_OUTLINE_GAP),
                self.theme.foreground_colour,
            );

            header_footer.page_bounds = page.page_bounds;
            header_footer.page_bounds_without_margin = page.viewable_page_bounds;
            header_footer.current_page = index + 1;

            if !setup.header_template.is_empty() {
                self.print_document
                    .print_header_footer(canvas, true, &header_footer);
            }
            if !setup.footer_template.is_empty() {
                self.print_document
                    .print_header_footer(canvas, false, &header_footer);
            }
        }

        canvas.set_transform(Transform::identity());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};
    use crate::geometry::Size;
    use crate::grid::GridInput;
    use crate::image::Bitmap;
    use crate::margins::Margins;
    use crate::setup::{ScalePolicy, StaticPrintDocument};
    use std::rc::Rc;

    /// Three letter pages across for 2000x500 of content
    fn wide_grid() -> (ScalingState, PageGrid) {
        let state = ScalingState::compute(&GridInput {
            content_size: Size::new(2000, 500),
            paper_size: Size::new(850, 1100),
            margins: Margins::all(20),
            scale: ScalePolicy::Percent(100),
            separator: Size::new(30, 30),
            header_margin: 0,
            footer_margin: 0,
        });
        let grid = PageGrid::build(&state);
        (state, grid)
    }

    /// Shown at half size, scrolled 100 screen units right. The visible area
    /// is [200, 1600) in layout units, so the third page is off screen.
    fn half_size_viewport(bitmap: &Bitmap) -> ViewportData<'_> {
        ViewportData {
            memory_bitmap: bitmap,
            logical_viewport: Rect::from_xywh(0, 0, 2000, 500),
            scaling: (0.5, 0.5),
            translation: Point::new(100, 0),
            viewport_size: Size::new(700, 600),
            shadow_depth: Size::EMPTY,
        }
    }

    fn image_blits(canvas: &RecordingCanvas) -> Vec<(Rect, Rect, Transform)> {
        canvas
            .images()
            .filter_map(|c| match c {
                DrawCommand::Image {
                    dest,
                    src,
                    transform,
                    ..
                } => Some((*dest, *src, *transform)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn splices_scaled_and_scrolled_slices() {
        let (state, grid) = wide_grid();
        let theme = AmbientTheme::default();
        let document = StaticPrintDocument::default();
        let painter = PagePainter {
            state: &state,
            grid: &grid,
            theme: &theme,
            print_document: &document,
            zoom: 50,
            preview_time: Local::now(),
            file_name: "",
        };
        let bitmap = Bitmap::new(Size::new(1000, 250));
        let mut canvas = RecordingCanvas::new();
        painter.paint_pages(&mut canvas, &half_size_viewport(&bitmap));

        let blits = image_blits(&canvas);
        assert_eq!(blits.len(), 2);

        // first page: printable area at (50, 50) lands at (25, 25) - (100, 0)
        assert_eq!(blits[0].0, Rect { x1: -75, y1: 25, x2: 330, y2: 275 });
        assert_eq!(blits[0].1, Rect { x1: 0, y1: 0, x2: 405, y2: 250 });

        // second page: printable area at (930, 50)
        assert_eq!(blits[1].0, Rect { x1: 365, y1: 25, x2: 770, y2: 275 });
        assert_eq!(blits[1].1, Rect { x1: 405, y1: 0, x2: 810, y2: 250 });
        assert_eq!(blits[1].2, Transform::identity());

        // page sheets are drawn through the layout to screen transform
        let sheet = grid.get(1, 0).expect("second page").page_bounds;
        assert!(canvas.commands.contains(&DrawCommand::Fill {
            rect: sheet,
            colour: colours::WHITE,
            transform: Transform::scale(0.5, 0.5).with_translate(-100.0, 0.0),
            clip: Default::default(),
        }));
    }

    #[test]
    fn watermarks_every_visible_page() {
        let (state, grid) = wide_grid();
        let mut theme = AmbientTheme::default();
        theme.watermark(Bitmap::new(Size::new(10, 10)), ContentAlignment::Center);
        let document = StaticPrintDocument::default();
        let bitmap = Bitmap::new(Size::new(1000, 250));
        let viewport = half_size_viewport(&bitmap);

        let paint = |zoom: i32| {
            let painter = PagePainter {
                state: &state,
                grid: &grid,
                theme: &theme,
                print_document: &document,
                zoom,
                preview_time: Local::now(),
                file_name: "",
            };
            let mut canvas = RecordingCanvas::new();
            painter.paint_background(&mut canvas, &viewport);
            canvas
        };

        // zoom matches the viewport scaling: watermarks fill the logical areas
        let canvas = paint(50);
        let blits = image_blits(&canvas);
        assert_eq!(blits.len(), 2);
        assert_eq!(blits[0].0, Rect::from_xywh(0, 0, 810, 1060));
        assert_eq!(blits[1].0, Rect::from_xywh(810, 0, 810, 1060));
        assert_eq!(blits[1].1, Rect::from_xywh(0, 0, 10, 10));
        assert_eq!(blits[1].2, Transform::scale(0.5, 0.5));
        assert!(canvas.images().all(|c| matches!(
            c,
            DrawCommand::Image { alpha, alignment: ContentAlignment::Center, .. } if *alpha == 0.25
        )));

        // at full zoom the areas are scaled down by the viewport scaling
        let blits = image_blits(&paint(100));
        assert_eq!(blits[1].0, Rect::from_xywh(405, 0, 405, 530));
        assert_eq!(blits[1].2, Transform::identity());
    }

    #[test]
    fn no_watermark_only_clears() {
        let (state, grid) = wide_grid();
        let theme = AmbientTheme {
            watermark: None,
            ..AmbientTheme::default()
        };
        let document: Rc<dyn PrintDocument> = Rc::new(StaticPrintDocument::default());
        let painter = PagePainter {
            state: &state,
            grid: &grid,
            theme: &theme,
            print_document: document.as_ref(),
            zoom: 100,
            preview_time: Local::now(),
            file_name: "",
        };
        let bitmap = Bitmap::new(Size::new(1000, 250));
        let mut canvas = RecordingCanvas::new();
        painter.paint_background(&mut canvas, &half_size_viewport(&bitmap));
        assert_eq!(canvas.commands.len(), 1);
    }
}
