//! A software [`Canvas`] over an in-memory RGBA image, used to render previews
//! off-screen (thumbnails, snapshot tests) without a windowing system.

use crate::canvas::{Canvas, Clip, ImageBlit, LightSource, TextRun};
use crate::colour::{colours, Colour};
use crate::geometry::Point;
use crate::image::Bitmap;
use crate::rect::Rect;
use crate::transform::Transform;
use image::Rgba;

/// Rasterises drawing calls into a [`Bitmap`]. Only axis-aligned transforms are
/// supported; images are resampled nearest-neighbour. Text needs a font
/// engine and is left to the host, so text runs are skipped.
#[derive(Debug)]
pub struct ImageCanvas {
    target: Bitmap,
    transform: Transform,
    clip: Clip,
}

impl ImageCanvas {
    pub fn new(target: Bitmap) -> ImageCanvas {
        ImageCanvas {
            target,
            transform: Transform::identity(),
            clip: Clip::None,
        }
    }

    pub fn target(&self) -> &Bitmap {
        &self.target
    }

    pub fn into_bitmap(self) -> Bitmap {
        self.target
    }

    fn device_rect(&self, rect: Rect) -> Rect {
        let r = self.transform.apply_rect(rect);
        // negative scales flip the corners
        Rect {
            x1: r.x1.min(r.x2),
            y1: r.y1.min(r.y2),
            x2: r.x1.max(r.x2),
            y2: r.y1.max(r.y2),
        }
    }

    /// Device rectangle clamped to the target
    fn visible(&self, device: Rect) -> Option<Rect> {
        device.intersection(&self.target.bounds())
    }

    fn blend(&mut self, x: i32, y: i32, colour: Colour) {
        if colour.a == 0 || !self.clip.allows(x, y) {
            return;
        }
        let dst = self.target.get_pixel_mut(x as u32, y as u32);
        *dst = over(colour, Colour::from(*dst)).into();
    }

    fn fill_device(&mut self, device: Rect, colour: Colour) {
        let Some(area) = self.visible(device) else {
            return;
        };
        for y in area.y1..area.y2 {
            for x in area.x1..area.x2 {
                self.blend(x, y, colour);
            }
        }
    }
}

/// Nearest source offset for a destination offset, scaling `from` units onto
/// `to` units
fn resample(offset: i32, from: i32, to: i32) -> i32 {
    (offset as i64 * from as i64 / to as i64) as i32
}

/// Porter-Duff source-over with straight alpha
fn over(src: Colour, dst: Colour) -> Colour {
    let sa = src.a as f32 / 255.0;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return colours::TRANSPARENT;
    }
    let channel = |s: u8, d: u8| {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };
    Colour::new_rgba_bytes(
        channel(src.r, dst.r),
        channel(src.g, dst.g),
        channel(src.b, dst.b),
        (out_a * 255.0).round() as u8,
    )
}

impl Canvas for ImageCanvas {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        if !transform.is_axis_aligned() {
            log::warn!("rotation and skew are not rasterised: {:?}", transform);
        }
        self.transform = transform;
    }

    fn set_clip(&mut self, clip: Clip) {
        // clips are captured in device space, like a graphics context does
        self.clip = match clip {
            Clip::None => Clip::None,
            Clip::Include(r) => Clip::Include(self.device_rect(r)),
            Clip::Exclude(r) => Clip::Exclude(self.device_rect(r)),
        };
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        let device = self.device_rect(rect);
        self.fill_device(device, colour);
    }

    fn draw_rect(&mut self, rect: Rect, colour: Colour) {
        let d = self.device_rect(rect);
        if d.is_empty() {
            return;
        }
        self.fill_device(Rect { y2: d.y1 + 1, ..d }, colour);
        self.fill_device(Rect { y1: d.y2 - 1, ..d }, colour);
        self.fill_device(Rect { x2: d.x1 + 1, ..d }, colour);
        self.fill_device(Rect { x1: d.x2 - 1, ..d }, colour);
    }

    fn draw_drop_shadow(
        &mut self,
        rect: Rect,
        colour: Colour,
        width: i32,
        light: LightSource,
        alpha: f32,
    ) {
        let d = self.device_rect(rect);
        if d.is_empty() || width <= 0 {
            return;
        }
        let (sx, sy) = match light {
            LightSource::TopLeft => (1, 1),
            LightSource::TopRight => (-1, 1),
            LightSource::BottomLeft => (1, -1),
            LightSource::BottomRight => (-1, -1),
        };
        let previous = self.clip;
        self.clip = Clip::Exclude(d);
        // each step adds a little more shadow nearer the casting rectangle
        let step_colour = colour.with_alpha(alpha / width as f32);
        for step in 1..=width {
            let shifted = d.translate(Point::new(sx * step, sy * step));
            self.fill_device(shifted, step_colour);
        }
        self.clip = previous;
    }

    fn draw_image(&mut self, blit: ImageBlit<'_>) {
        let Some(src) = blit.src.intersection(&blit.image.bounds()) else {
            return;
        };
        let placed = blit.alignment.place(src.size(), blit.dest);
        let dest = self.device_rect(placed);
        let Some(area) = self.visible(dest) else {
            return;
        };

        let alpha = blit.alpha.clamp(0.0, 1.0);
        for y in area.y1..area.y2 {
            let v = src.y1 + resample(y - dest.y1, src.height(), dest.height());
            for x in area.x1..area.x2 {
                let u = src.x1 + resample(x - dest.x1, src.width(), dest.width());
                let Rgba([r, g, b, a]) = *blit.image.get_pixel(u as u32, v as u32);
                let mut colour = Colour::new_rgba_bytes(r, g, b, (a as f32 * alpha).round() as u8);
                if blit.grayscale {
                    colour = colour.to_grayscale();
                }
                self.blend(x, y, colour);
            }
        }
    }

    fn draw_text(&mut self, run: TextRun<'_>) {
        log::trace!("skipping text run {:?}: no font engine", run.text);
    }
}
