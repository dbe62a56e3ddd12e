//! Scanline Canvas
//!
//! A software 2D renderer drawing into premultiplied 32-bit ARGB bitmaps.
//!
//! # How does this work
//!
//! ```text
//! canvas = create_canvas( bitmap )
//!   draw_rect / draw_convex_polygon / draw_path / draw_paint
//!     geometry mapped by the current transform
//!     clip()                 -- segments to edges inside the target
//!     flatten_path()         -- curves to chords, then clip()
//!     sweep_convex()         -- two active edges
//!     sweep_winding()        -- active edge table, non-zero winding
//!       RowFiller::fill_row()  -- shader / color, filter, blend
//!   save_layer / restore
//!     composite_layer()      -- filter, blend onto the parent
//! ```
//!
//! # Example
//!
//!     use scancanvas::*;
//!
//!     let mut bm = Bitmap::new(16, 16).unwrap();
//!     let mut canvas = create_canvas(&mut bm).unwrap();
//!     canvas.clear(Color::white());
//!
//!     let mut path = Path::new();
//!     path.add_circle(Point::new(8.0, 8.0), 6.0, Direction::Clockwise);
//!     canvas.draw_path(&path, &Paint::new(Color::argb(1.0, 1.0, 0.0, 0.0)));
//!     drop(canvas);
//!
//!     assert_eq!(bm.get(8, 8), Pixel::pack_argb(255, 255, 0, 0));
//!     assert_eq!(bm.get(0, 0), Pixel::pack_argb(255, 255, 255, 255));
//!

pub mod math;
pub mod color;
pub mod error;
pub mod buffer;
pub mod io;
pub mod transform;
pub mod path;
pub mod clip;
pub mod curve;
pub mod raster;
pub mod blend;
pub mod paint;
pub mod render;
pub mod canvas;
pub mod shader;
pub mod gradient;
pub mod filter;
pub mod stroke;

pub use math::round_to_int;
pub use color::*;
pub use error::Error;
pub use buffer::*;
pub use transform::*;
pub use path::*;
pub use clip::*;
pub use curve::*;
pub use raster::*;
pub use blend::*;
pub use paint::*;
pub use render::*;
pub use canvas::*;
pub use shader::*;
pub use gradient::*;
pub use filter::*;
pub use stroke::*;

/// Source of pixels for a draw, used in place of a flat color
///
/// Shaders are shared by reference, so implementations keep the state
/// set by `set_context` in interior-mutable fields.
pub trait Shader {
    /// True if every pixel this shader produces is opaque
    fn is_opaque(&self) -> bool;
    /// Prepare for drawing under the device transform `ctm`
    ///
    /// Returns false if the shader cannot draw with this transform,
    /// typically because it is not invertible.
    fn set_context(&self, ctm: &Transform) -> bool;
    /// Produce premultiplied pixels for device pixels
    /// `(x, y) .. (x + row.len(), y)`
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]);
}

/// Pixel post-processing, applied to source pixels before blending
pub trait Filter {
    /// True if each output pixel has the alpha of its input pixel
    fn preserves_alpha(&self) -> bool;
    /// Filter each `input[i]` into `output[i]`
    fn filter(&self, output: &mut [Pixel], input: &[Pixel]);
}
