use crate::canvas::{Canvas, TextAlignment, TextRun};
use crate::colour::colours;
use crate::margins::Margins;
use crate::rect::Rect;
use chrono::{DateTime, Local};

/// Everything a header or footer may show about the page it is drawn on.
/// Rectangles are in layout units, like the page grid.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderFooterData {
    /// The whole page, including margins
    pub page_bounds: Rect,
    /// The printable area of the page
    pub page_bounds_without_margin: Rect,
    /// Distance of the header from the top edge and of the footer from the
    /// bottom edge, already divided by the print scaling
    pub header_footer_margins: Margins,
    /// 1-based number of the page
    pub current_page: usize,
    pub total_pages: usize,
    /// When the preview was laid out
    pub print_time: DateTime<Local>,
    pub scaling: f32,
    /// Font size divided by the print scaling, so text prints at its nominal size
    pub font_size: f32,
    pub file_name: String,
}

impl HeaderFooterData {
    /// Height of one line of header/footer text, in layout units
    pub fn line_height(&self) -> i32 {
        // points to hundredths of an inch (100/72) with 20% leading
        (self.font_size * 5.0 / 3.0).ceil().max(1.0) as i32
    }

    /// Where the header (or footer) line sits on the page
    pub fn text_bounds(&self, header: bool) -> Rect {
        let line = self.line_height();
        let (y1, y2) = if header {
            let top = self.page_bounds.y1 + self.header_footer_margins.top;
            (top, top + line)
        } else {
            let bottom = self.page_bounds.y2 - self.header_footer_margins.bottom;
            (bottom - line, bottom)
        };
        Rect {
            x1: self.page_bounds_without_margin.x1,
            y1,
            x2: self.page_bounds_without_margin.x2,
            y2,
        }
    }

    /// Expand `template` and draw it as the header or footer of this page.
    /// Empty templates draw nothing.
    pub fn draw(
        &self,
        canvas: &mut dyn Canvas,
        template: &str,
        alignment: TextAlignment,
        header: bool,
    ) {
        if template.is_empty() {
            return;
        }
        let text = expand_template(template, self);
        canvas.draw_text(TextRun {
            text: &text,
            font_size: self.font_size,
            bounds: self.text_bounds(header),
            alignment,
            colour: colours::BLACK,
        });
    }
}

/// Replace the placeholders of a header/footer template:
///
/// * `{#}` => the current page number
/// * `{##}` => the total number of pages
/// * `{Date}` => the preview date, as `YYYY-MM-DD`
/// * `{Time}` => the preview time, as `HH:MM`
/// * `{FileName}` => the name of the file being designed
///
/// ```
/// use designer_layout::{expand_template, HeaderFooterData, Margins, Rect};
///
/// let data = HeaderFooterData {
///     page_bounds: Rect::default(),
///     page_bounds_without_margin: Rect::default(),
///     header_footer_margins: Margins::empty(),
///     current_page: 2,
///     total_pages: 5,
///     print_time: chrono::Local::now(),
///     scaling: 1.0,
///     font_size: 9.0,
///     file_name: "order.xoml".to_string(),
/// };
/// assert_eq!(expand_template("{FileName}: page {#} of {##}", &data), "order.xoml: page 2 of 5");
/// ```
pub fn expand_template(template: &str, data: &HeaderFooterData) -> String {
    template
        .replace("{##}", &data.total_pages.to_string())
        .replace("{#}", &data.current_page.to_string())
        .replace("{Date}", &data.print_time.format("%Y-%m-%d").to_string())
        .replace("{Time}", &data.print_time.format("%H:%M").to_string())
        .replace("{FileName}", &data.file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use chrono::TimeZone;

    fn data() -> HeaderFooterData {
        HeaderFooterData {
            page_bounds: Rect::from_xywh(30, 30, 850, 1100),
            page_bounds_without_margin: Rect::from_xywh(130, 130, 650, 900),
            header_footer_margins: Margins::trbl(50, 0, 50, 0),
            current_page: 3,
            total_pages: 4,
            print_time: Local.with_ymd_and_hms(2024, 2, 29, 13, 5, 0).unwrap(),
            scaling: 1.0,
            font_size: 9.0,
            file_name: "flow.xoml".to_string(),
        }
    }

    #[test]
    fn expands_dates_and_times() {
        assert_eq!(expand_template("{Date} {Time}", &data()), "2024-02-29 13:05");
        assert_eq!(expand_template("no placeholders", &data()), "no placeholders");
    }

    #[test]
    fn header_hangs_below_top_and_footer_sits_above_bottom() {
        let d = data();
        let line = d.line_height();
        assert_eq!(line, 15);
        assert_eq!(d.text_bounds(true), Rect::from_xywh(130, 80, 650, line));
        assert_eq!(d.text_bounds(false), Rect::from_xywh(130, 1080 - line, 650, line));
    }

    #[test]
    fn empty_template_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        data().draw(&mut canvas, "", TextAlignment::Center, true);
        assert!(canvas.commands.is_empty());
        data().draw(&mut canvas, "Page {#}", TextAlignment::Center, true);
        assert_eq!(canvas.texts().collect::<Vec<_>>(), vec!["Page 3"]);
    }
}
