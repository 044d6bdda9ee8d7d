//! Bitmaps handed to the layouts: the host's cached rendering of the designer
//! surface, and the optional watermark painted behind it.

use crate::error::LayoutError;
use crate::geometry::{Point, Size};
use crate::rect::Rect;
use derive_more::{Deref, DerefMut, From};
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// An RGBA bitmap. Dereferences to the underlying [`image::RgbaImage`] so the
/// host can render into it directly.
#[derive(Debug, Clone, PartialEq, Deref, DerefMut, From)]
pub struct Bitmap(RgbaImage);

impl Bitmap {
    /// Create a fully transparent bitmap of the given size; non-positive
    /// dimensions are clamped to 1
    pub fn new(size: Size) -> Bitmap {
        let size = size.at_least(1);
        Bitmap(RgbaImage::new(size.width as u32, size.height as u32))
    }

    /// Load a bitmap from disk, guessing the format from its contents. TGA files
    /// carry no magic number, so they are recognised by extension instead.
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Bitmap, LayoutError> {
        let path = path.as_ref();
        let is_tga = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("tga"))
            .unwrap_or(false);

        let data = std::fs::read(path).map_err(image::ImageError::IoError)?;
        let format = if is_tga {
            image::ImageFormat::Tga
        } else {
            image::guess_format(&data)?
        };
        let image = image::load_from_memory_with_format(&data, format)?;
        Ok(Self::from_dynamic(image))
    }

    /// Decode a bitmap from an in-memory encoded image
    pub fn from_memory(data: &[u8]) -> Result<Bitmap, LayoutError> {
        Ok(Self::from_dynamic(image::load_from_memory(data)?))
    }

    pub fn from_dynamic(image: DynamicImage) -> Bitmap {
        Bitmap(image.to_rgba8())
    }

    pub fn size(&self) -> Size {
        Size::new(self.0.width() as i32, self.0.height() as i32)
    }

    /// The whole bitmap as a rectangle at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(Point::ORIGIN, self.size())
    }

    pub fn into_inner(self) -> RgbaImage {
        self.0
    }
}

/// Where an image is placed inside its destination rectangle
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ContentAlignment {
    /// Stretch the image over the whole destination
    #[default]
    Fill,
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ContentAlignment {
    /// The rectangle an image of `image_size` occupies when aligned in `dest`.
    /// Only [`ContentAlignment::Fill`] rescales the image.
    pub fn place(&self, image_size: Size, dest: Rect) -> Rect {
        use ContentAlignment::*;

        if *self == Fill {
            return dest;
        }

        let free = dest.size() - image_size;
        let x = match self {
            TopLeft | CenterLeft | BottomLeft => 0,
            TopCenter | Center | BottomCenter => free.width / 2,
            _ => free.width,
        };
        let y = match self {
            TopLeft | TopCenter | TopRight => 0,
            CenterLeft | Center | CenterRight => free.height / 2,
            _ => free.height,
        };
        Rect::new(dest.origin().offset(x, y), image_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bitmap_is_never_empty() {
        let b = Bitmap::new(Size::new(0, -4));
        assert_eq!(b.size(), Size::new(1, 1));
    }

    #[test]
    fn alignment_places_image_in_destination() {
        let dest = Rect::from_xywh(100, 100, 50, 40);
        let img = Size::new(10, 10);
        assert_eq!(ContentAlignment::Fill.place(img, dest), dest);
        assert_eq!(
            ContentAlignment::Center.place(img, dest),
            Rect::from_xywh(120, 115, 10, 10)
        );
        assert_eq!(
            ContentAlignment::BottomRight.place(img, dest),
            Rect::from_xywh(140, 130, 10, 10)
        );
    }

    #[test]
    fn loads_encoded_images() {
        let mut encoded = Vec::new();
        let source = RgbaImage::from_pixel(3, 2, image::Rgba([1, 2, 3, 255]));
        DynamicImage::ImageRgba8(source)
            .write_to(
                &mut std::io::Cursor::new(&mut encoded),
                image::ImageOutputFormat::Png,
            )
            .expect("can encode png");

        let bitmap = Bitmap::from_memory(&encoded).expect("can decode png");
        assert_eq!(bitmap.size(), Size::new(3, 2));
        assert_eq!(bitmap.get_pixel(2, 1), &image::Rgba([1, 2, 3, 255]));
    }
}
