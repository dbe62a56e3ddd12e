//! Colors and Pixels

use crate::math::pin_unit;
use crate::math::round_to_int;

/// Unpremultiplied color as Alpha, Red, Green, and Blue
///
/// Components are nominally in [0,1]; out of range values are allowed and
/// pinned when the color is converted to a [Pixel].
///
/// [Pixel]: struct.Pixel.html
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Color {
    /// Alpha
    pub a: f32,
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Color {
    /// Create new color from alpha, red, green and blue
    pub fn argb(a: f32, r: f32, g: f32, b: f32) -> Self {
        Self { a, r, g, b }
    }
    /// Opaque Black (1,0,0,0)
    pub fn black() -> Self {
        Self::argb(1.0, 0.0, 0.0, 0.0)
    }
    /// Opaque White (1,1,1,1)
    pub fn white() -> Self {
        Self::argb(1.0, 1.0, 1.0, 1.0)
    }
    /// Fully transparent (0,0,0,0)
    pub fn transparent() -> Self {
        Self::argb(0.0, 0.0, 0.0, 0.0)
    }
    /// Copy of the color with every component clamped to [0,1]
    pub fn pin_to_unit(&self) -> Self {
        Self::argb(pin_unit(self.a), pin_unit(self.r),
                   pin_unit(self.g), pin_unit(self.b))
    }
    /// Pin, premultiply, scale to 8 bits and round
    ///
    ///     use scancanvas::{Color,Pixel};
    ///     let p = Color::argb(0.5, 1.0, 0.0, 0.0).to_pixel();
    ///     assert_eq!(p, Pixel::pack_argb(128, 128, 0, 0));
    ///
    pub fn to_pixel(&self) -> Pixel {
        let c = self.pin_to_unit();
        let a = round_to_int(c.a * 255.0);
        let r = round_to_int(c.a * c.r * 255.0);
        let g = round_to_int(c.a * c.g * 255.0);
        let b = round_to_int(c.a * c.b * 255.0);
        Pixel::pack_argb(a as u8, r as u8, g as u8, b as u8)
    }
    /// Component-wise interpolation from `self` to `other`
    pub fn lerp(&self, other: &Color, t: f32) -> Self {
        Self::argb(crate::math::lerp(self.a, other.a, t),
                   crate::math::lerp(self.r, other.r, t),
                   crate::math::lerp(self.g, other.g, t),
                   crate::math::lerp(self.b, other.b, t))
    }
    /// True if alpha is at least 1
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
}

const A_SHIFT: u32 = 24;
const R_SHIFT: u32 = 16;
const G_SHIFT: u32 = 8;
const B_SHIFT: u32 = 0;

/// Premultiplied pixel packed as 32-bit ARGB
///
/// Color channels are expected to be no larger than the alpha channel.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Pixel(u32);

impl Pixel {
    /// Pack 8-bit components into a pixel
    pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        debug_assert!(r <= a && g <= a && b <= a,
                      "pixel not premultiplied: a {} r {} g {} b {}", a, r, g, b);
        Self::from_raw(u32::from(a) << A_SHIFT | u32::from(r) << R_SHIFT |
                       u32::from(g) << G_SHIFT | u32::from(b) << B_SHIFT)
    }
    /// Wrap a raw packed value without checking premultiplication
    pub const fn from_raw(v: u32) -> Self {
        Pixel(v)
    }
    /// Raw packed value
    pub const fn raw(self) -> u32 {
        self.0
    }
    /// Transparent black
    pub const fn zero() -> Self {
        Pixel(0)
    }
    /// Alpha
    pub fn a(self) -> u8 { (self.0 >> A_SHIFT) as u8 }
    /// Red
    pub fn r(self) -> u8 { (self.0 >> R_SHIFT) as u8 }
    /// Green
    pub fn g(self) -> u8 { (self.0 >> G_SHIFT) as u8 }
    /// Blue
    pub fn b(self) -> u8 { (self.0 >> B_SHIFT) as u8 }

    /// Components as u32 in (a,r,g,b) order, handy for blend arithmetic
    pub(crate) fn components(self) -> (u32, u32, u32, u32) {
        (u32::from(self.a()), u32::from(self.r()),
         u32::from(self.g()), u32::from(self.b()))
    }
    /// Pack without the premultiplication check
    ///
    /// Blend formulas can produce channels above alpha when fed
    /// non-premultiplied input; values are masked to 8 bits.
    pub(crate) fn pack_unchecked(a: u32, r: u32, g: u32, b: u32) -> Self {
        Self::from_raw((a & 0xFF) << A_SHIFT | (r & 0xFF) << R_SHIFT |
                       (g & 0xFF) << G_SHIFT | (b & 0xFF) << B_SHIFT)
    }
    /// Undo premultiplication, returning (r,g,b,a) 8-bit components
    pub fn unpremultiply(self) -> [u8; 4] {
        let (a, r, g, b) = self.components();
        if a == 0 {
            return [0, 0, 0, 0];
        }
        let un = |c: u32| ((c * 255 + a / 2) / a).min(255) as u8;
        [un(r), un(g), un(b), a as u8]
    }
    /// Premultiply unpremultiplied (r,g,b,a) 8-bit components
    pub fn premultiply(r: u8, g: u8, b: u8, a: u8) -> Self {
        let a32 = u32::from(a);
        let pre = |c: u8| ((u32::from(c) * a32 + 127) / 255) as u8;
        Self::pack_argb(a, pre(r), pre(g), pre(b))
    }
}

impl From<Color> for Pixel {
    fn from(c: Color) -> Pixel {
        c.to_pixel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack() {
        let p = Pixel::pack_argb(0xFF, 0x80, 0x40, 0x20);
        assert_eq!(p.raw(), 0xFF80_4020);
        assert_eq!((p.a(), p.r(), p.g(), p.b()), (0xFF, 0x80, 0x40, 0x20));
    }

    #[test]
    fn color_to_pixel_pins() {
        assert_eq!(Color::argb(2.0, -1.0, 0.5, 3.0).to_pixel(),
                   Pixel::pack_argb(255, 0, 128, 255));
        assert_eq!(Color::argb(-1.0, 1.0, 0.0, 0.0).to_pixel(), Pixel::zero());
        assert_eq!(Color::argb(0.00001, 1.0, 0.0, 0.0).to_pixel(), Pixel::zero());
        assert_eq!(Color::white().to_pixel().raw(), 0xFFFF_FFFF);
    }

    #[test]
    fn premultiply_roundtrip_opaque() {
        let p = Pixel::premultiply(10, 20, 30, 255);
        assert_eq!(p.unpremultiply(), [10, 20, 30, 255]);
        assert_eq!(Pixel::zero().unpremultiply(), [0, 0, 0, 0]);
    }
}
