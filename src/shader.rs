//! Bitmap Shader

use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::transform::Transform;
use crate::Shader;

use std::cell::Cell;

/// How coordinates outside the unit interval are brought back into it
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum TileMode {
    /// Pin to the nearest edge
    Clamp,
    /// Wrap around
    Repeat,
    /// Wrap around, reversing every other tile
    Mirror,
}

impl Default for TileMode {
    fn default() -> Self {
        TileMode::Clamp
    }
}

impl TileMode {
    /// Map `t` into [0,1]
    ///
    ///     use scancanvas::TileMode;
    ///     assert_eq!(TileMode::Clamp.apply(1.25), 1.0);
    ///     assert_eq!(TileMode::Repeat.apply(1.25), 0.25);
    ///     assert_eq!(TileMode::Mirror.apply(1.25), 0.75);
    ///
    pub fn apply(self, t: f32) -> f32 {
        match self {
            TileMode::Clamp => crate::math::pin_unit(t),
            TileMode::Repeat => t - t.floor(),
            TileMode::Mirror => {
                let t = t - 2.0 * (t * 0.5).floor();
                if t > 1.0 { 2.0 - t } else { t }
            },
        }
    }
    /// Map a coordinate onto a pixel index in `0 .. n`
    fn index(self, v: f32, n: usize) -> usize {
        let t = self.apply(v / n as f32);
        ((t * n as f32) as usize).min(n - 1)
    }
}

/// Shader sampling a Bitmap
///
/// Pixels are sampled at the nearest source pixel, without filtering.
#[derive(Debug)]
pub struct BitmapShader {
    bitmap: Bitmap,
    local: Transform,
    tile: TileMode,
    /// Device to bitmap coordinates, set by `set_context`
    inverse: Cell<Option<Transform>>,
}

impl BitmapShader {
    /// Create a shader drawing `bitmap` placed by `local`
    ///
    /// `local` maps bitmap coordinates into the coordinates of the draw.
    pub fn new(bitmap: Bitmap, local: Transform, tile: TileMode) -> Self {
        Self { bitmap, local, tile, inverse: Cell::new(None) }
    }
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }
}

impl Shader for BitmapShader {
    fn is_opaque(&self) -> bool {
        self.bitmap.is_opaque()
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        if !self.bitmap.is_valid() {
            self.inverse.set(None);
            return false;
        }
        let inv = (*ctm * self.local).invert();
        self.inverse.set(inv);
        inv.is_some()
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let inv = match self.inverse.get() {
            Some(m) => m,
            None => {
                row.iter_mut().for_each(|p| *p = Pixel::zero());
                return;
            },
        };
        let (w, h) = (self.bitmap.width(), self.bitmap.height());
        let mut loc = inv.map_xy(x as f32 + 0.5, y as f32 + 0.5);
        for p in row.iter_mut() {
            let ix = self.tile.index(loc.x, w);
            let iy = self.tile.index(loc.y, h);
            *p = self.bitmap.get(ix, iy);
            loc.x += inv.sx;
            loc.y += inv.shy;
        }
    }
}
