//! Canvas
//!
//! # Example
//!
//!     use scancanvas::{create_canvas,Bitmap,Canvas,Color,Rect};
//!
//!     let mut bm = Bitmap::new(3, 3).unwrap();
//!     {
//!         let mut canvas = create_canvas(&mut bm).unwrap();
//!         canvas.clear(Color::black());
//!         canvas.fill_rect(&Rect::ltrb(1.0, 1.0, 2.0, 2.0), Color::white());
//!     }
//!     assert_eq!(bm.get(1, 1), Color::white().to_pixel());
//!     assert_eq!(bm.get(0, 1), Color::black().to_pixel());
//!

use crate::blend::BlendMode;
use crate::buffer::Bitmap;
use crate::clip::clip;
use crate::clip::EdgeList;
use crate::clip::Rect;
use crate::color::Color;
use crate::curve::flatten_path;
use crate::math::round_to_int;
use crate::paint::Paint;
use crate::path::Path;
use crate::path::Point;
use crate::raster::sweep_convex;
use crate::raster::sweep_winding;
use crate::render::composite_layer;
use crate::render::RowFiller;
use crate::transform::Transform;

use smallvec::SmallVec;

/// Drawing surface with a transform stack and offscreen layers
///
/// `'a` is the lifetime of shaders and filters captured by
/// [save_layer](#tymethod.save_layer); paints given to draw calls are only
/// borrowed for the call.
pub trait Canvas<'a> {
    /// Save the current transform; undone by [restore](#tymethod.restore)
    fn save(&mut self);
    /// Save the current transform and redirect drawing to a new layer
    ///
    /// The layer covers `bounds`, mapped by the current transform and
    /// limited to the current target, or the whole target if `bounds` is
    /// None. On [restore](#tymethod.restore) the layer is passed through
    /// the filter of `paint` and blended onto the target with its blend
    /// mode. If the bounds do not overlap the target, drawing continues
    /// on the current target and the restore composites nothing.
    fn save_layer(&mut self, bounds: Option<&Rect>, paint: &Paint<'a>);
    /// Undo the most recent save or save_layer
    ///
    /// # Panics
    ///
    /// Panics if there is no matching save.
    fn restore(&mut self);
    /// Apply `m` to geometry before the current transform
    fn concat(&mut self, m: &Transform);
    /// Fill the whole target with `paint`
    fn draw_paint(&mut self, paint: &Paint);
    /// Fill a rectangle
    ///
    /// Pixels are covered if their centres are inside the rectangle,
    /// excluding its left and top edges and including its right and
    /// bottom edges.
    fn draw_rect(&mut self, rect: &Rect, paint: &Paint);
    /// Fill a convex polygon; fewer than 3 points draws nothing
    fn draw_convex_polygon(&mut self, pts: &[Point], paint: &Paint);
    /// Fill a path with the non-zero winding rule
    fn draw_path(&mut self, path: &Path, paint: &Paint);

    /// Translate by (tx,ty) before the current transform
    fn translate(&mut self, tx: f32, ty: f32) {
        self.concat(&Transform::translate(tx, ty));
    }
    /// Scale by (sx,sy) before the current transform
    fn scale(&mut self, sx: f32, sy: f32) {
        self.concat(&Transform::scale(sx, sy));
    }
    /// Rotate by `radians` before the current transform, clockwise on screen
    fn rotate(&mut self, radians: f32) {
        self.concat(&Transform::rotate(radians));
    }
    /// Replace every pixel of the target with `color`
    fn clear(&mut self, color: Color) {
        self.draw_paint(&Paint::new(color).with_blend_mode(BlendMode::Src));
    }
    /// Fill a rectangle with a flat color
    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.draw_rect(rect, &Paint::new(color));
    }
}

/// Offscreen target created by save_layer
#[derive(Debug)]
struct Layer<'a> {
    bitmap: Bitmap,
    /// Top-left corner in root device coordinates
    x: i32,
    y: i32,
    paint: Paint<'a>,
}

/// One entry of the save stack
#[derive(Debug)]
struct Frame<'a> {
    ctm: Transform,
    layer: Option<Layer<'a>>,
}

/// Canvas drawing into a caller's Bitmap
#[derive(Debug)]
pub struct BitmapCanvas<'a> {
    root: &'a mut Bitmap,
    ctm: Transform,
    frames: Vec<Frame<'a>>,
}

/// Create a canvas drawing into `bitmap`
///
/// None if the bitmap cannot be drawn into.
pub fn create_canvas(bitmap: &mut Bitmap) -> Option<BitmapCanvas<'_>> {
    if !bitmap.is_valid() {
        log::debug!("create_canvas: invalid bitmap {}x{} stride {}",
                    bitmap.width(), bitmap.height(), bitmap.stride());
        return None;
    }
    Some(BitmapCanvas { root: bitmap, ctm: Transform::identity(), frames: vec![] })
}

impl<'a> BitmapCanvas<'a> {
    /// Current transform
    pub fn ctm(&self) -> Transform {
        self.ctm
    }
    /// The bitmap being drawn into
    ///
    /// Drawing inside an unrestored layer is not visible here yet.
    pub fn bitmap(&self) -> &Bitmap {
        &*self.root
    }
    /// Number of saves not yet restored
    pub fn save_count(&self) -> usize {
        self.frames.len()
    }
    /// Current target and its top-left corner in root device coordinates
    fn target(&mut self) -> (&mut Bitmap, i32, i32) {
        match self.frames.iter_mut().rev().find_map(|f| f.layer.as_mut()) {
            Some(layer) => (&mut layer.bitmap, layer.x, layer.y),
            None => (&mut *self.root, 0, 0),
        }
    }
    /// Transform from local to current target coordinates, with the target's bounds
    fn device(&mut self) -> (Transform, Rect) {
        let ctm = self.ctm;
        let (bm, x, y) = self.target();
        let m = Transform::translate(-x as f32, -y as f32) * ctm;
        (m, Rect::wh(bm.width() as f32, bm.height() as f32))
    }
}

impl<'a> Canvas<'a> for BitmapCanvas<'a> {
    fn save(&mut self) {
        self.frames.push(Frame { ctm: self.ctm, layer: None });
    }

    fn save_layer(&mut self, bounds: Option<&Rect>, paint: &Paint<'a>) {
        let ctm = self.ctm;
        let (bm, tx, ty) = self.target();
        let extent = Rect::xywh(tx as f32, ty as f32, bm.width() as f32, bm.height() as f32);
        let area = match bounds {
            None => Some(extent),
            Some(b) => {
                let mut corners = b.corners();
                ctm.map_points_in_place(&mut corners);
                Rect::bounding(&corners).and_then(|r| r.intersect(&extent))
            },
        };
        let layer = area.and_then(|r| {
            let (x, y) = (round_to_int(r.left), round_to_int(r.top));
            let w = round_to_int(r.right) - x;
            let h = round_to_int(r.bottom) - y;
            if w <= 0 || h <= 0 {
                return None;
            }
            let bitmap = Bitmap::new(w as usize, h as usize).ok()?;
            Some(Layer { bitmap, x, y, paint: *paint })
        });
        match layer {
            Some(ref l) => log::debug!("save_layer: {}x{} at ({},{}) {:?}",
                                       l.bitmap.width(), l.bitmap.height(), l.x, l.y,
                                       l.paint.blend_mode()),
            None => log::debug!("save_layer: {:?} misses the target, drawing through", bounds),
        }
        self.frames.push(Frame { ctm, layer });
    }

    fn restore(&mut self) {
        let frame = match self.frames.pop() {
            Some(f) => f,
            None => panic!("restore() called without a matching save() or save_layer()"),
        };
        if let Some(layer) = frame.layer {
            let (dst, x, y) = self.target();
            log::debug!("restore: compositing {}x{} layer at ({},{})",
                        layer.bitmap.width(), layer.bitmap.height(), layer.x, layer.y);
            composite_layer(dst, &layer.bitmap, layer.x - x, layer.y - y, &layer.paint);
        }
        self.ctm = frame.ctm;
    }

    fn concat(&mut self, m: &Transform) {
        self.ctm.pre_concat(m);
    }

    fn draw_paint(&mut self, paint: &Paint) {
        let (m, _) = self.device();
        let (dst, _, _) = self.target();
        let mut filler = RowFiller::new(paint, &m);
        let w = dst.width() as i32;
        for y in 0 .. dst.height() as i32 {
            filler.fill_row(dst, 0, w, y);
        }
    }

    fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        self.draw_convex_polygon(&rect.corners(), paint);
    }

    fn draw_convex_polygon(&mut self, pts: &[Point], paint: &Paint) {
        if pts.len() < 3 {
            return;
        }
        let (m, bounds) = self.device();
        let mut dev : SmallVec<[Point; 8]> = SmallVec::from_slice(pts);
        m.map_points_in_place(&mut dev);

        let mut edges = EdgeList::new();
        for i in 0 .. dev.len() {
            clip(dev[i], dev[(i + 1) % dev.len()], &bounds, &mut edges);
        }
        log::trace!("draw_convex_polygon: {} points -> {} edges", pts.len(), edges.len());
        let (dst, _, _) = self.target();
        let mut filler = RowFiller::new(paint, &m);
        sweep_convex(&mut edges, |span| filler.fill_span(dst, span));
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let (m, bounds) = self.device();
        let mut edges = flatten_path(&path.transformed(&m), &bounds);
        let (dst, _, _) = self.target();
        let mut filler = RowFiller::new(paint, &m);
        sweep_winding(&mut edges, dst.height() as i32, |span| filler.fill_span(dst, span));
    }
}
