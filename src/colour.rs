/// An sRGB colour with straight (non-premultiplied) alpha
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new opaque colour, r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour with an alpha channel, all components range from 0 to 255
    pub const fn new_rgba_bytes(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new opaque colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::new_rgb_bytes(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    /// Create a new opaque grey, g ranges from 0 to 255
    pub const fn new_grey_bytes(g: u8) -> Colour {
        Colour::new_rgb_bytes(g, g, g)
    }

    /// The same colour with its alpha replaced; `alpha` ranges from 0.0 to 1.0
    pub fn with_alpha(self, alpha: f32) -> Colour {
        Colour {
            a: unit_to_byte(alpha),
            ..self
        }
    }

    /// Luma-weighted grey of this colour, keeping alpha
    pub fn to_grayscale(self) -> Colour {
        let l = (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32).round();
        let l = l.clamp(0.0, 255.0) as u8;
        Colour { r: l, g: l, b: l, a: self.a }
    }
}

fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb_bytes(c.0, c.1, c.2)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<image::Rgba<u8>> for Colour {
    fn from(p: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Colour { r, g, b, a }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_grey_bytes(0);
    pub const WHITE: Colour = Colour::new_grey_bytes(255);
    pub const TRANSPARENT: Colour = Colour::new_rgba_bytes(0, 0, 0, 0);
    /// Behind the pages of a print preview
    pub const WORKSPACE: Colour = Colour::new_rgb_bytes(234, 234, 236);
    /// Outline drawn around the printable area of a page
    pub const FOREGROUND: Colour = Colour::new_grey_bytes(128);
    /// Border around a framed root designer
    pub const WORKFLOW_BORDER: Colour = Colour::new_rgb_bytes(127, 157, 185);
}
