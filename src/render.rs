//! Renderer
//!
//! Turns spans into pixels: a [RowFiller] produces source pixels from a
//! [Paint] and blends them into a [Bitmap] one row at a time, and
//! [composite_layer] blends a finished layer onto its parent.
//!
//! [RowFiller]: struct.RowFiller.html
//! [Paint]: ../paint/struct.Paint.html
//! [Bitmap]: ../buffer/struct.Bitmap.html
//! [composite_layer]: fn.composite_layer.html

use crate::blend::BlendProc;
use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::paint::Paint;
use crate::raster::Span;
use crate::transform::Transform;

/// Row filler for one draw call
///
/// The shader context is set once, from the device transform of the
/// draw. If it cannot be set every row is skipped.
pub struct RowFiller<'p, 'a> {
    paint: &'p Paint<'a>,
    blend: BlendProc,
    /// Flat source pixel, already filtered; unused with a shader
    flat: Pixel,
    /// False if the shader rejected the transform
    ready: bool,
    shaded: Vec<Pixel>,
    filtered: Vec<Pixel>,
}

impl<'p, 'a> RowFiller<'p, 'a> {
    /// Prepare to fill rows with `paint` under the device transform `ctm`
    pub fn new(paint: &'p Paint<'a>, ctm: &Transform) -> Self {
        let blend = paint.blend_mode().proc();
        let mut flat = paint.color().to_pixel();
        let ready = match paint.shader() {
            Some(shader) => {
                let ok = shader.set_context(ctm);
                if !ok {
                    log::trace!("fill: shader context rejected {:?}, skipping rows", ctm);
                }
                ok
            },
            None => {
                if let Some(filter) = paint.filter() {
                    let mut out = [Pixel::zero()];
                    filter.filter(&mut out, &[flat]);
                    flat = out[0];
                }
                true
            },
        };
        Self { paint, blend, flat, ready, shaded: vec![], filtered: vec![] }
    }
    /// Fill pixels `left .. right` of row `y`
    ///
    /// The range is clamped to the bitmap. Rows past the bottom land on
    /// the last row; rows above the top are ignored.
    pub fn fill_row(&mut self, dst: &mut Bitmap, left: i32, right: i32, y: i32) {
        if left == right || !self.ready {
            return;
        }
        if y < 0 || dst.height() == 0 {
            return;
        }
        let y = y.min(dst.height() as i32 - 1);
        let left = left.max(0);
        let right = right.min(dst.width() as i32);
        if right <= left {
            return;
        }
        let count = (right - left) as usize;
        let row = &mut dst.row_mut(y as usize)[left as usize .. right as usize];
        let blend = self.blend;

        let shader = match self.paint.shader() {
            None => {
                let src = self.flat;
                row.iter_mut().for_each(|d| *d = blend(src, *d));
                return;
            },
            Some(shader) => shader,
        };
        self.shaded.resize(count, Pixel::zero());
        shader.shade_row(left, y, &mut self.shaded);
        let src = match self.paint.filter() {
            Some(filter) => {
                self.filtered.resize(count, Pixel::zero());
                filter.filter(&mut self.filtered, &self.shaded);
                &self.filtered
            },
            None => &self.shaded,
        };
        for (d, s) in row.iter_mut().zip(src.iter()) {
            *d = blend(*s, *d);
        }
    }
    /// Fill a span produced by the scan converter
    pub fn fill_span(&mut self, dst: &mut Bitmap, span: Span) {
        self.fill_row(dst, span.left, span.right, span.y);
    }
}

/// Fill pixels `left .. right` of row `y` of `dst` with `paint`
///
///     use scancanvas::{fill_row,Bitmap,Color,Paint,Pixel,Transform};
///     let mut bm = Bitmap::new(4, 2).unwrap();
///     let paint = Paint::new(Color::white());
///     fill_row(&mut bm, &Transform::identity(), -3, 2, 1, &paint);
///     assert_eq!(bm.row(1), &[Pixel::from_raw(0xFFFF_FFFF), Pixel::from_raw(0xFFFF_FFFF),
///                              Pixel::zero(), Pixel::zero()]);
///     assert_eq!(bm.get(0, 0), Pixel::zero());
///
pub fn fill_row(dst: &mut Bitmap, ctm: &Transform, left: i32, right: i32, y: i32, paint: &Paint) {
    RowFiller::new(paint, ctm).fill_row(dst, left, right, y);
}

/// Blend `layer` onto `dst` with its top-left corner at (ox,oy)
///
/// Each layer pixel is passed through the paint's filter, if any, then
/// blended with the paint's blend mode. The paint's color and shader
/// are not used. Parts outside `dst` are dropped.
pub fn composite_layer(dst: &mut Bitmap, layer: &Bitmap, ox: i32, oy: i32, paint: &Paint) {
    let blend = paint.blend_mode().proc();
    let x0 = ox.max(0);
    let x1 = (ox + layer.width() as i32).min(dst.width() as i32);
    if x1 <= x0 {
        return;
    }
    let (lx0, lx1) = ((x0 - ox) as usize, (x1 - ox) as usize);
    let mut filtered = vec![];
    for ly in 0 .. layer.height() {
        let y = oy + ly as i32;
        if y < 0 || y as usize >= dst.height() {
            continue;
        }
        let src = &layer.row(ly)[lx0 .. lx1];
        let src = match paint.filter() {
            Some(filter) => {
                filtered.resize(src.len(), Pixel::zero());
                filter.filter(&mut filtered, src);
                &filtered[..]
            },
            None => src,
        };
        let row = &mut dst.row_mut(y as usize)[x0 as usize .. x1 as usize];
        for (d, s) in row.iter_mut().zip(src.iter()) {
            *d = blend(*s, *d);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blend::BlendMode;
    use crate::color::Color;

    #[test]
    fn clamps_to_bitmap() {
        let mut bm = Bitmap::new(3, 3).unwrap();
        let paint = Paint::new(Color::white());
        let id = Transform::identity();
        fill_row(&mut bm, &id, -5, 10, 1, &paint);
        fill_row(&mut bm, &id, 0, 3, -1, &paint);
        fill_row(&mut bm, &id, 2, 2, 0, &paint);
        let white = Color::white().to_pixel();
        for y in 0 .. 3 {
            for x in 0 .. 3 {
                let want = if y == 1 { white } else { Pixel::zero() };
                assert_eq!(bm.get(x, y), want, "{} {}", x, y);
            }
        }
    }

    #[test]
    fn rows_below_land_on_last_row() {
        let mut bm = Bitmap::new(3, 3).unwrap();
        let paint = Paint::new(Color::white());
        fill_row(&mut bm, &Transform::identity(), 0, 3, 5, &paint);
        let white = Color::white().to_pixel();
        assert!(bm.row(2).iter().all(|p| *p == white));
        assert!(bm.row(0).iter().chain(bm.row(1)).all(|p| *p == Pixel::zero()));

        let mut empty = Bitmap::default();
        fill_row(&mut empty, &Transform::identity(), 0, 3, 5, &paint);
        assert_eq!(empty.height(), 0);
    }

    #[test]
    fn uses_blend_mode() {
        let mut bm = Bitmap::new(2, 1).unwrap();
        bm.fill(Color::white().to_pixel());
        let paint = Paint::new(Color::argb(0.5, 1.0, 0.0, 0.0)).with_blend_mode(BlendMode::Src);
        fill_row(&mut bm, &Transform::identity(), 0, 1, 0, &paint);
        assert_eq!(bm.get(0, 0), Pixel::pack_argb(128, 128, 0, 0));
        assert_eq!(bm.get(1, 0), Color::white().to_pixel());
    }

    #[test]
    fn composite_with_offset() {
        let mut dst = Bitmap::new(4, 4).unwrap();
        let mut layer = Bitmap::new(3, 3).unwrap();
        layer.fill(Color::black().to_pixel());
        composite_layer(&mut dst, &layer, 2, -1, &Paint::default());
        let black = Color::black().to_pixel();
        for y in 0 .. 4 {
            for x in 0 .. 4 {
                let want = if x >= 2 && y < 2 { black } else { Pixel::zero() };
                assert_eq!(dst.get(x, y), want, "{} {}", x, y);
            }
        }
    }
}
