//! The drawing surface the layouts paint onto.
//!
//! Layouts never rasterise anything themselves: they issue a small set of
//! drawing primitives against a [`Canvas`] supplied by the host. Coordinates
//! passed to a canvas are transformed by its current [`Transform`] first.

use crate::colour::Colour;
use crate::geometry::{Point, Size};
use crate::image::{Bitmap, ContentAlignment};
use crate::rect::Rect;
use crate::transform::Transform;

/// Restricts where subsequent drawing may land
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Clip {
    /// Draw anywhere
    #[default]
    None,
    /// Only draw inside the rectangle
    Include(Rect),
    /// Draw anywhere except inside the rectangle
    Exclude(Rect),
}

impl Clip {
    /// Whether a device-space pixel may be painted under this clip
    pub fn allows(&self, x: i32, y: i32) -> bool {
        let p = Point::new(x, y);
        match self {
            Clip::None => true,
            Clip::Include(r) => r.contains(p),
            Clip::Exclude(r) => !r.contains(p),
        }
    }
}

/// The corner a drop shadow's light falls from; the shadow lands on the
/// opposite sides
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LightSource {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Horizontal placement of text within its bounds
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    Near,
    #[default]
    Center,
    Far,
}

/// An image blit: the `src` region of an image copied into `dest`
#[derive(Debug, Copy, Clone)]
pub struct ImageBlit<'a> {
    pub image: &'a Bitmap,
    pub dest: Rect,
    pub src: Rect,
    pub alignment: ContentAlignment,
    /// Opacity from 0.0 to 1.0
    pub alpha: f32,
    pub grayscale: bool,
}

/// A text run positioned inside `bounds`
#[derive(Debug, Copy, Clone)]
pub struct TextRun<'a> {
    pub text: &'a str,
    pub font_size: f32,
    pub bounds: Rect,
    pub alignment: TextAlignment,
    pub colour: Colour,
}

/// Drawing primitives the layouts need from the host
pub trait Canvas {
    fn transform(&self) -> Transform;
    fn set_transform(&mut self, transform: Transform);
    fn set_clip(&mut self, clip: Clip);
    fn fill_rect(&mut self, rect: Rect, colour: Colour);
    /// Outline a rectangle with a one unit wide line
    fn draw_rect(&mut self, rect: Rect, colour: Colour);
    fn draw_drop_shadow(
        &mut self,
        rect: Rect,
        colour: Colour,
        width: i32,
        light: LightSource,
        alpha: f32,
    );
    fn draw_image(&mut self, blit: ImageBlit<'_>);
    fn draw_text(&mut self, run: TextRun<'_>);
}

/// A single recorded drawing call
#[derive(Clone, PartialEq, Debug)]
pub enum DrawCommand {
    Fill {
        rect: Rect,
        colour: Colour,
        transform: Transform,
        clip: Clip,
    },
    Outline {
        rect: Rect,
        colour: Colour,
        transform: Transform,
    },
    DropShadow {
        rect: Rect,
        width: i32,
        transform: Transform,
    },
    Image {
        image_size: Size,
        dest: Rect,
        src: Rect,
        alignment: ContentAlignment,
        alpha: f32,
        grayscale: bool,
        transform: Transform,
    },
    Text {
        text: String,
        bounds: Rect,
        alignment: TextAlignment,
        transform: Transform,
    },
}

/// A canvas that remembers every call instead of drawing, for tests and
/// for hosts that replay paint passes onto another backend
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    transform: Transform,
    clip: Clip,
}

impl RecordingCanvas {
    pub fn new() -> RecordingCanvas {
        RecordingCanvas::default()
    }

    pub fn images(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn transform(&self) -> Transform {
        self.transform
    }

    fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    fn set_clip(&mut self, clip: Clip) {
        self.clip = clip;
    }

    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.commands.push(DrawCommand::Fill {
            rect,
            colour,
            transform: self.transform,
            clip: self.clip,
        });
    }

    fn draw_rect(&mut self, rect: Rect, colour: Colour) {
        self.commands.push(DrawCommand::Outline {
            rect,
            colour,
            transform: self.transform,
        });
    }

    fn draw_drop_shadow(
        &mut self,
        rect: Rect,
        _colour: Colour,
        width: i32,
        _light: LightSource,
        _alpha: f32,
    ) {
        self.commands.push(DrawCommand::DropShadow {
            rect,
            width,
            transform: self.transform,
        });
    }

    fn draw_image(&mut self, blit: ImageBlit<'_>) {
        self.commands.push(DrawCommand::Image {
            image_size: blit.image.size(),
            dest: blit.dest,
            src: blit.src,
            alignment: blit.alignment,
            alpha: blit.alpha,
            grayscale: blit.grayscale,
            transform: self.transform,
        });
    }

    fn draw_text(&mut self, run: TextRun<'_>) {
        self.commands.push(DrawCommand::Text {
            text: run.text.to_string(),
            bounds: run.bounds,
            alignment: run.alignment,
            transform: self.transform,
        });
    }
}
