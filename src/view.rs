//! The host side of a layout: the view it lays out for, the state of the
//! viewport during a paint, and the services a layout is constructed with.

use crate::error::LayoutError;
use crate::geometry::{Point, Size};
use crate::image::Bitmap;
use crate::rect::Rect;
use crate::setup::{DesignerOptions, PrintDocument};
use crate::theme::AmbientTheme;
use crate::transform::Transform;
use std::rc::Rc;

/// The scrollable, zoomable view hosting the designer surface
pub trait DesignerView {
    /// Bounds of the root designer in logical coordinates, [None] while
    /// nothing is loaded
    fn root_designer_bounds(&self) -> Option<Rect>;

    /// Size of the visible client area, in screen units
    fn viewport_size(&self) -> Size;

    /// Zoom level in percent
    fn zoom(&self) -> i32;

    /// Convert a size in screen units to logical units at the current zoom
    fn client_size_to_logical(&self, size: Size) -> Size {
        let zoom = zoom_factor(self.zoom());
        Size::new(
            (size.width as f32 / zoom) as i32,
            (size.height as f32 / zoom) as i32,
        )
    }

    fn root_designer_size(&self) -> Size {
        self.root_designer_bounds()
            .map(|r| r.size())
            .unwrap_or(Size::EMPTY)
    }
}

/// Zoom percent as a multiplier; zero or negative zoom is treated as 1%
pub(crate) fn zoom_factor(zoom: i32) -> f32 {
    zoom.max(1) as f32 / 100.0
}

/// The viewport state of one paint pass
#[derive(Debug, Copy, Clone)]
pub struct ViewportData<'a> {
    /// The designer content, already rendered scaled and scrolled
    pub memory_bitmap: &'a Bitmap,
    /// The part of the designer (logical space) rendered into the bitmap
    pub logical_viewport: Rect,
    /// Layout to screen scale factor along each axis
    pub scaling: (f32, f32),
    /// Scroll offset, in screen units
    pub translation: Point,
    pub viewport_size: Size,
    /// Offset the designers are rendered at to leave room for their shadows
    pub shadow_depth: Size,
}

impl ViewportData<'_> {
    /// Layout space to screen: scale, then scroll
    pub fn layout_to_screen(&self) -> Transform {
        Transform::scale(self.scaling.0, self.scaling.1)
            .with_translate(-self.translation.x as f32, -self.translation.y as f32)
    }

    /// Layout space to screen without scrolling
    pub fn scale_transform(&self) -> Transform {
        Transform::scale(self.scaling.0, self.scaling.1)
    }

    /// The visible area in layout units. Computed from the screen rather than
    /// from `logical_viewport`, which can be empty at very high zoom.
    pub fn physical_viewport(&self) -> Rect {
        let unscale = self
            .scale_transform()
            .invert()
            .unwrap_or_default();
        Rect::new(
            unscale.apply(self.translation),
            unscale.apply_size(self.viewport_size),
        )
    }
}

/// Host services a layout is constructed with
#[derive(Clone)]
pub struct LayoutServices {
    pub view: Rc<dyn DesignerView>,
    pub theme: Rc<AmbientTheme>,
    pub print_document: Option<Rc<dyn PrintDocument>>,
    pub options: Option<Rc<dyn DesignerOptions>>,
    /// Name of the file being designed, shown in headers and footers
    pub file_name: Option<String>,
}

impl LayoutServices {
    pub fn builder() -> LayoutServicesBuilder {
        LayoutServicesBuilder::default()
    }

    pub(crate) fn require_print_document(&self) -> Result<Rc<dyn PrintDocument>, LayoutError> {
        self.print_document
            .clone()
            .ok_or(LayoutError::MissingService("print document"))
    }
}

/// Collects the services for a [`LayoutServices`]. Only the view is required.
///
/// ```
/// use designer_layout::{DesignerView, LayoutError, LayoutServices, Rect, Size};
/// use std::rc::Rc;
///
/// struct View;
/// impl DesignerView for View {
///     fn root_designer_bounds(&self) -> Option<Rect> { None }
///     fn viewport_size(&self) -> Size { Size::new(640, 480) }
///     fn zoom(&self) -> i32 { 100 }
/// }
///
/// assert!(matches!(
///     LayoutServices::builder().build(),
///     Err(LayoutError::MissingService(_))
/// ));
/// let services = LayoutServices::builder().view(Rc::new(View)).build().expect("has a view");
/// assert!(services.print_document.is_none());
/// ```
#[derive(Default)]
pub struct LayoutServicesBuilder {
    view: Option<Rc<dyn DesignerView>>,
    theme: Option<Rc<AmbientTheme>>,
    print_document: Option<Rc<dyn PrintDocument>>,
    options: Option<Rc<dyn DesignerOptions>>,
    file_name: Option<String>,
}

impl LayoutServicesBuilder {
    pub fn view(mut self, view: Rc<dyn DesignerView>) -> Self {
        self.view = Some(view);
        self
    }

    pub fn theme(mut self, theme: Rc<AmbientTheme>) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn print_document(mut self, document: Rc<dyn PrintDocument>) -> Self {
        self.print_document = Some(document);
        self
    }

    pub fn options(mut self, options: Rc<dyn DesignerOptions>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn file_name<S: ToString>(mut self, file_name: S) -> Self {
        self.file_name = Some(file_name.to_string());
        self
    }

    pub fn build(self) -> Result<LayoutServices, LayoutError> {
        Ok(LayoutServices {
            view: self.view.ok_or(LayoutError::MissingService("designer view"))?,
            theme: self.theme.unwrap_or_default(),
            print_document: self.print_document,
            options: self.options,
            file_name: self.file_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_viewport_undoes_zoom() {
        let bitmap = Bitmap::new(Size::new(1, 1));
        let viewport = ViewportData {
            memory_bitmap: &bitmap,
            logical_viewport: Rect::default(),
            scaling: (0.5, 0.5),
            translation: Point::new(100, 40),
            viewport_size: Size::new(400, 300),
            shadow_depth: Size::EMPTY,
        };
        assert_eq!(viewport.physical_viewport(), Rect::from_xywh(200, 80, 800, 600));
        assert_eq!(
            viewport.layout_to_screen().apply(Point::new(200, 80)),
            Point::ORIGIN
        );
    }
}
