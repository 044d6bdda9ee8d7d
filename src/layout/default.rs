use super::{Layout, UpdateReason};
use crate::canvas::{Canvas, Clip, ImageBlit, LightSource};
use crate::colour::colours;
use crate::error::LayoutError;
use crate::geometry::{Point, Size};
use crate::image::ContentAlignment;
use crate::rect::Rect;
use crate::setup::PrinterContext;
use crate::transform::Transform;
use crate::view::{zoom_factor, LayoutServices, ViewportData};

/// Space left around the root designer, and the root designer's position
pub const DEFAULT_SEPARATOR: Size = Size::new(30, 30);

/// Alpha of the drop shadow around a framed root designer
const ROOT_SHADOW_ALPHA: f32 = 0.2;

/// The designer laid out as-is: logical and layout coordinates coincide.
pub struct DefaultLayout {
    services: LayoutServices,
}

impl DefaultLayout {
    pub fn new(services: LayoutServices) -> DefaultLayout {
        DefaultLayout { services }
    }

    /// The root designer bounds, if there is a root designer worth painting
    fn root_bounds(&self) -> Option<Rect> {
        self.services
            .view
            .root_designer_bounds()
            .filter(|r| r.width() >= 0 && r.height() >= 0)
    }

    /// Extent for a given client area: the root designer plus a separator on
    /// every side, at least as large as the client area
    fn extent_within(&self, client: Size) -> Size {
        let root = self.services.view.root_designer_size();
        (root + DEFAULT_SEPARATOR + DEFAULT_SEPARATOR).max(client)
    }
}

/// Logical space to the memory bitmap, which is rendered scaled, scrolled to
/// the logical viewport and offset by the shadow depth
fn designer_transform(viewport: &ViewportData<'_>) -> Transform {
    let scale = viewport.scale_transform();
    let origin = scale.apply(viewport.logical_viewport.origin());
    scale.with_translate(
        (viewport.shadow_depth.width - origin.x) as f32,
        (viewport.shadow_depth.height - origin.y) as f32,
    )
}

impl Layout for DefaultLayout {
    fn scaling(&self) -> f32 {
        1.0
    }

    fn extent(&self) -> Size {
        self.extent_within(self.services.view.viewport_size())
    }

    fn root_alignment(&self) -> Point {
        Point::from(DEFAULT_SEPARATOR)
    }

    fn is_coord_in_layout(&self, _point: Point) -> bool {
        true
    }

    fn map_in_rect(&self, rect: Rect) -> Rect {
        rect
    }

    fn map_out_rect(&self, rect: Rect) -> Rect {
        rect
    }

    fn map_in_coord(&self, point: Point) -> Point {
        point
    }

    fn map_out_coord(&self, point: Point) -> Point {
        point
    }

    fn paint(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        let theme = &self.services.theme;

        canvas.set_transform(Transform::identity());
        canvas.fill_rect(viewport.memory_bitmap.bounds(), theme.workspace_colour);

        let Some(root) = self.root_bounds() else {
            return;
        };

        canvas.set_transform(designer_transform(viewport));
        canvas.set_clip(Clip::Include(root));
        canvas.fill_rect(root, colours::WHITE);
        if let Some(watermark) = theme.watermark.as_deref() {
            canvas.draw_image(ImageBlit {
                image: watermark,
                dest: root,
                src: watermark.bounds(),
                alignment: theme.watermark_alignment,
                alpha: theme.watermark_transparency,
                grayscale: false,
            });
        }
        canvas.set_clip(Clip::None);
        canvas.set_transform(Transform::identity());
    }

    fn paint_content(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        let area = viewport.memory_bitmap.bounds();
        canvas.set_transform(Transform::identity());
        canvas.draw_image(ImageBlit {
            image: viewport.memory_bitmap,
            dest: area,
            src: area,
            alignment: ContentAlignment::Fill,
            alpha: 1.0,
            grayscale: self.services.theme.draw_grayscale,
        });
    }

    fn update(
        &mut self,
        _context: Option<&dyn PrinterContext>,
        _reason: UpdateReason,
    ) -> Result<(), LayoutError> {
        Ok(())
    }
}

/// The default layout for a root designer that does not fill the view: the
/// designer is framed with a border and a drop shadow.
pub struct ActivityRootLayout {
    base: DefaultLayout,
}

impl ActivityRootLayout {
    pub fn new(services: LayoutServices) -> ActivityRootLayout {
        ActivityRootLayout {
            base: DefaultLayout::new(services),
        }
    }
}

impl Layout for ActivityRootLayout {
    fn scaling(&self) -> f32 {
        self.base.scaling()
    }

    /// The client area is measured at the current zoom, since the designer
    /// does not stretch to fill it
    fn extent(&self) -> Size {
        let view = &self.base.services.view;
        let zoom = zoom_factor(view.zoom());
        let client = view.viewport_size();
        self.base.extent_within(Size::new(
            (client.width as f32 / zoom) as i32,
            (client.height as f32 / zoom) as i32,
        ))
    }

    fn root_alignment(&self) -> Point {
        self.base.root_alignment()
    }

    fn is_coord_in_layout(&self, point: Point) -> bool {
        self.base.is_coord_in_layout(point)
    }

    fn map_in_rect(&self, rect: Rect) -> Rect {
        self.base.map_in_rect(rect)
    }

    fn map_out_rect(&self, rect: Rect) -> Rect {
        self.base.map_out_rect(rect)
    }

    fn map_in_coord(&self, point: Point) -> Point {
        self.base.map_in_coord(point)
    }

    fn map_out_coord(&self, point: Point) -> Point {
        self.base.map_out_coord(point)
    }

    fn paint(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        self.base.paint(canvas, viewport);

        let Some(root) = self.base.root_bounds() else {
            return;
        };
        let theme = &self.base.services.theme;

        canvas.set_transform(designer_transform(viewport));
        canvas.set_clip(Clip::Exclude(root));

        let frame = root.inflate(DEFAULT_SEPARATOR.width / 2, DEFAULT_SEPARATOR.height / 2);
        canvas.draw_drop_shadow(
            frame,
            theme.border_colour,
            theme.drop_shadow_width,
            LightSource::TopLeft,
            ROOT_SHADOW_ALPHA,
        );
        canvas.fill_rect(frame, theme.background_colour);
        canvas.draw_rect(frame, theme.border_colour);

        canvas.set_clip(Clip::None);
        canvas.set_transform(Transform::identity());
    }

    fn paint_content(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        self.base.paint_content(canvas, viewport)
    }

    fn update(
        &mut self,
        context: Option<&dyn PrinterContext>,
        reason: UpdateReason,
    ) -> Result<(), LayoutError> {
        self.base.update(context, reason)
    }
}

/// The default layout, with the root designer kept centred whenever the view
/// is larger than the layout's extent.
pub struct CenteredLayout {
    base: DefaultLayout,
}

impl CenteredLayout {
    pub fn new(services: LayoutServices) -> CenteredLayout {
        CenteredLayout {
            base: DefaultLayout::new(services),
        }
    }

    /// How far the layout is shifted to centre it in the view
    pub fn offset(&self) -> Size {
        let view = &self.base.services.view;
        let extent = self.base.extent();
        let total = view.client_size_to_logical(view.viewport_size()).max(extent);
        Size::new(
            ((total.width - extent.width) / 2).max(0),
            ((total.height - extent.height) / 2).max(0),
        )
    }
}

impl Layout for CenteredLayout {
    fn scaling(&self) -> f32 {
        self.base.scaling()
    }

    fn extent(&self) -> Size {
        self.base.extent()
    }

    fn root_alignment(&self) -> Point {
        self.base.root_alignment()
    }

    fn is_coord_in_layout(&self, point: Point) -> bool {
        self.base.is_coord_in_layout(point)
    }

    fn map_in_rect(&self, rect: Rect) -> Rect {
        rect.translate(Point::ORIGIN - Point::from(self.offset()))
    }

    fn map_out_rect(&self, rect: Rect) -> Rect {
        rect.translate(Point::from(self.offset()))
    }

    fn map_in_coord(&self, point: Point) -> Point {
        point - Point::from(self.offset())
    }

    fn map_out_coord(&self, point: Point) -> Point {
        point + Point::from(self.offset())
    }

    fn paint(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        self.base.paint(canvas, viewport)
    }

    fn paint_content(&self, canvas: &mut dyn Canvas, viewport: &ViewportData<'_>) {
        self.base.paint_content(canvas, viewport)
    }

    fn update(
        &mut self,
        context: Option<&dyn PrinterContext>,
        reason: UpdateReason,
    ) -> Result<(), LayoutError> {
        self.base.update(context, reason)
    }
}
