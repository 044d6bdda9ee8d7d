//! Page setup: the printing configuration a print preview is laid out against,
//! and the host services that supply it.

use crate::canvas::{Canvas, TextAlignment};
use crate::geometry::Size;
use crate::header_footer::HeaderFooterData;
use crate::margins::Margins;
use crate::pagesize::{self, PaperSize};

/// How the designer content is scaled onto paper
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScalePolicy {
    /// Print at a fixed percentage of the designer's size
    Percent(u32),
    /// Shrink or grow the content to fit the given number of pages
    FitToPages { wide: u32, tall: u32 },
}

impl Default for ScalePolicy {
    fn default() -> Self {
        ScalePolicy::Percent(100)
    }
}

/// Printing options chosen by the user. Units are hundredths of an inch.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    /// Defaults to [`ScalePolicy::Percent(100)`](ScalePolicy::Percent).
    pub scale: ScalePolicy,
    /// Margins around the printable area of each page, as specified for a
    /// portrait sheet.
    ///
    /// Defaults to one inch on every side.
    pub margins: Margins,
    pub landscape: bool,
    pub center_horizontally: bool,
    pub center_vertically: bool,
    /// Header text, empty for no header. See
    /// [`expand_template`](crate::expand_template) for the placeholders.
    pub header_template: String,
    pub footer_template: String,
    /// Distance from the top edge of the paper to the header.
    ///
    /// Defaults to `50`.
    pub header_margin: i32,
    /// Distance from the bottom edge of the paper to the footer.
    ///
    /// Defaults to `50`.
    pub footer_margin: i32,
    pub header_alignment: TextAlignment,
    pub footer_alignment: TextAlignment,
}

impl Default for PageSetup {
    fn default() -> Self {
        PageSetup {
            scale: ScalePolicy::default(),
            margins: Margins::all(100),
            landscape: false,
            center_horizontally: false,
            center_vertically: false,
            header_template: String::new(),
            footer_template: String::new(),
            header_margin: 50,
            footer_margin: 50,
            header_alignment: TextAlignment::Center,
            footer_alignment: TextAlignment::Center,
        }
    }
}

impl PageSetup {
    /// Create a page setup with all options at their defaults
    pub fn new() -> PageSetup {
        PageSetup::default()
    }

    /// Set the scale policy, modifying `self`
    pub fn scale(&mut self, scale: ScalePolicy) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Set the margins, modifying `self`
    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    /// Turn the paper to landscape, modifying `self`
    pub fn landscape(&mut self, landscape: bool) -> &mut Self {
        self.landscape = landscape;
        self
    }

    /// Centre the content within the printable area, modifying `self`
    pub fn centered(&mut self, horizontally: bool, vertically: bool) -> &mut Self {
        self.center_horizontally = horizontally;
        self.center_vertically = vertically;
        self
    }

    /// Set the header template, modifying `self`
    pub fn header<S: ToString>(&mut self, template: S) -> &mut Self {
        self.header_template = template.to_string();
        self
    }

    /// Set the footer template, modifying `self`
    pub fn footer<S: ToString>(&mut self, template: S) -> &mut Self {
        self.footer_template = template.to_string();
        self
    }
}

/// Measures the printer. Passed to a layout update as its drawing context.
pub trait PrinterContext {
    /// The unprintable area along each edge of the paper
    fn hard_margins(&self) -> Margins;
}

/// A printer with no unprintable area, for previews without a physical device
#[derive(Debug, Default, Copy, Clone)]
pub struct BorderlessPrinter;

impl PrinterContext for BorderlessPrinter {
    fn hard_margins(&self) -> Margins {
        Margins::empty()
    }
}

/// The document being printed: supplies paper, page setup and header/footer
/// drawing to the print preview
pub trait PrintDocument {
    /// Paper size in portrait orientation; landscape is applied by the layout
    fn paper_size(&self) -> PaperSize;

    fn page_setup(&self) -> PageSetup;

    /// Draw the header (`header == true`) or footer of one page
    fn print_header_footer(&self, canvas: &mut dyn Canvas, header: bool, data: &HeaderFooterData) {
        let setup = self.page_setup();
        let (template, alignment) = if header {
            (&setup.header_template, setup.header_alignment)
        } else {
            (&setup.footer_template, setup.footer_alignment)
        };
        data.draw(canvas, template, alignment, header);
    }
}

/// A print document with fixed paper and page setup
#[derive(Debug, Clone)]
pub struct StaticPrintDocument {
    pub paper_size: PaperSize,
    pub page_setup: PageSetup,
}

impl Default for StaticPrintDocument {
    fn default() -> Self {
        StaticPrintDocument {
            paper_size: pagesize::LETTER,
            page_setup: PageSetup::default(),
        }
    }
}

impl PrintDocument for StaticPrintDocument {
    fn paper_size(&self) -> PaperSize {
        self.paper_size
    }

    fn page_setup(&self) -> PageSetup {
        self.page_setup.clone()
    }
}

/// User-configurable designer options
pub trait DesignerOptions {
    /// Gap between pages of the print preview; [None] keeps the default
    fn page_separator(&self) -> Option<Size> {
        None
    }
}
