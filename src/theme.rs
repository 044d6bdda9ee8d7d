use crate::colour::{colours, Colour};
use crate::geometry::Size;
use crate::image::{Bitmap, ContentAlignment};
use std::rc::Rc;

/// Ambient appearance settings shared by every layout. The theme is owned by
/// the host; layouts only read it while computing alignment and painting.
#[derive(Debug, Clone)]
pub struct AmbientTheme {
    /// Size of the selection handles drawn around designers. The print preview
    /// reserves room for them around the root designer.
    ///
    /// Defaults to 4x4.
    pub selection_size: Size,
    /// Width of the drop shadow drawn under pages and framed roots.
    ///
    /// Defaults to `4`.
    pub drop_shadow_width: i32,
    /// Point size of the ambient font, used for header and footer text.
    ///
    /// Defaults to `9.0`.
    pub font_size: f32,
    /// Fill behind the pages of a print preview and around the root designer
    pub workspace_colour: Colour,
    /// Fill of a framed root designer's surroundings
    pub background_colour: Colour,
    /// Outline of a page's printable area
    pub foreground_colour: Colour,
    /// Border of a framed root designer
    pub border_colour: Colour,
    /// Optional image painted behind the designer content
    pub watermark: Option<Rc<Bitmap>>,
    pub watermark_alignment: ContentAlignment,
    /// Opacity of the watermark, from 0.0 to 1.0.
    ///
    /// Defaults to `0.25`.
    pub watermark_transparency: f32,
    /// Blit the designer content in shades of grey
    pub draw_grayscale: bool,
}

impl Default for AmbientTheme {
    fn default() -> Self {
        AmbientTheme {
            selection_size: Size::square(4),
            drop_shadow_width: 4,
            font_size: 9.0,
            workspace_colour: colours::WORKSPACE,
            background_colour: colours::WHITE,
            foreground_colour: colours::FOREGROUND,
            border_colour: colours::WORKFLOW_BORDER,
            watermark: None,
            watermark_alignment: ContentAlignment::BottomRight,
            watermark_transparency: 0.25,
            draw_grayscale: false,
        }
    }
}

impl AmbientTheme {
    /// Set the watermark, modifying `self`
    pub fn watermark(&mut self, watermark: Bitmap, alignment: ContentAlignment) -> &mut Self {
        self.watermark = Some(Rc::new(watermark));
        self.watermark_alignment = alignment;
        self
    }
}
