//! Gradient Shaders
//!
//! Colors are interpolated unpremultiplied and premultiplied when packed.
//! All gradients sample at pixel centres.

use crate::color::Color;
use crate::color::Pixel;
use crate::path::Point;
use crate::shader::TileMode;
use crate::transform::Transform;
use crate::Shader;

use std::cell::Cell;

/// Color at `t` in [0,1] along evenly spaced `colors`
fn color_at(colors: &[Color], t: f32) -> Color {
    let n = colors.len();
    if n == 1 {
        return colors[0];
    }
    let pos = t * (n - 1) as f32;
    let i = (pos.floor().max(0.0) as usize).min(n - 2);
    colors[i].lerp(&colors[i + 1], pos - i as f32)
}

/// Fill `row` with zeros when no context is available
fn shade_row_with<F>(inverse: Option<Transform>, x: i32, y: i32, row: &mut [Pixel], f: F)
    where F: Fn(Point) -> Pixel
{
    let inv = match inverse {
        Some(m) => m,
        None => {
            row.iter_mut().for_each(|p| *p = Pixel::zero());
            return;
        },
    };
    let mut loc = inv.map_xy(x as f32 + 0.5, y as f32 + 0.5);
    for p in row.iter_mut() {
        *p = f(loc);
        loc.x += inv.sx;
        loc.y += inv.shy;
    }
}

/// Linear gradient from p0 to p1
#[derive(Debug)]
pub struct LinearGradient {
    colors: Vec<Color>,
    tile: TileMode,
    /// Maps the unit x axis onto p0 -> p1
    local: Transform,
    inverse: Cell<Option<Transform>>,
}

impl LinearGradient {
    /// Create a linear gradient with `colors` evenly spaced from p0 to p1
    ///
    /// None if `colors` is empty. A single color fills flat.
    pub fn new(p0: Point, p1: Point, colors: &[Color], tile: TileMode) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);
        let local = Transform::new(dx, -dy, p0.x,
                                   dy,  dx, p0.y);
        Some(Self { colors: colors.to_vec(), tile, local, inverse: Cell::new(None) })
    }
}

impl Shader for LinearGradient {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.is_opaque())
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        let inv = (*ctm * self.local).invert();
        self.inverse.set(inv);
        inv.is_some()
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        shade_row_with(self.inverse.get(), x, y, row, |p| {
            color_at(&self.colors, self.tile.apply(p.x)).to_pixel()
        });
    }
}

/// Radial gradient from a center out to a radius
#[derive(Debug)]
pub struct RadialGradient {
    colors: Vec<Color>,
    /// Maps the unit circle onto the gradient circle
    local: Transform,
    inverse: Cell<Option<Transform>>,
}

impl RadialGradient {
    /// Create a radial gradient, `colors[0]` at `center`
    ///
    /// Past `radius` the last color is used. None for fewer than 2
    /// colors or a radius that is not positive.
    pub fn new(center: Point, radius: f32, colors: &[Color]) -> Option<Self> {
        if colors.len() < 2 || !(radius > 0.0) {
            return None;
        }
        let local = Transform::translate(center.x, center.y) * Transform::scale(radius, radius);
        Some(Self { colors: colors.to_vec(), local, inverse: Cell::new(None) })
    }
}

impl Shader for RadialGradient {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.is_opaque())
    }
    fn set_context(&self, ctm: &Transform) -> bool {
        let inv = (*ctm * self.local).invert();
        self.inverse.set(inv);
        inv.is_some()
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        shade_row_with(self.inverse.get(), x, y, row, |p| {
            let t = crate::math::pin_unit(crate::math::length(p.x, p.y));
            color_at(&self.colors, t).to_pixel()
        });
    }
}

/// Gradient blending three colors across a triangle
///
/// Each pixel gets the barycentric mix of the vertex colors. Outside the
/// triangle the mix is extrapolated and pinned.
#[derive(Debug)]
pub struct TriangleGradient {
    colors: [Color; 3],
    /// Maps (u,v) onto p0 + u * (p1 - p0) + v * (p2 - p0)
    local: Transform,
    inverse: Cell<Option<Transform>>,
}

impl TriangleGradient {
    pub fn new(pts: [Point; 3], colors: [Color; 3]) -> Self {
        let (e1, e2) = ((pts[1].x - pts[0].x, pts[1].y - pts[0].y),
                        (pts[2].x - pts[0].x, pts[2].y - pts[0].y));
        let local = Transform::new(e1.0, e2.0, pts[0].x,
                                   e1.1, e2.1, pts[0].y);
        Self { colors, local, inverse: Cell::new(None) }
    }
}

impl Shader for TriangleGradient {
    fn is_opaque(&self) -> bool {
        self.colors.iter().all(|c| c.is_opaque())
    }
    /// Fails for a degenerate triangle
    fn set_context(&self, ctm: &Transform) -> bool {
        let inv = (*ctm * self.local).invert();
        self.inverse.set(inv);
        inv.is_some()
    }
    fn shade_row(&self, x: i32, y: i32, row: &mut [Pixel]) {
        let [c0, c1, c2] = self.colors;
        shade_row_with(self.inverse.get(), x, y, row, |p| {
            let (u, v) = (p.x, p.y);
            let w = 1.0 - u - v;
            Color::argb(w * c0.a + u * c1.a + v * c2.a,
                        w * c0.r + u * c1.r + v * c2.r,
                        w * c0.g + u * c1.g + v * c2.g,
                        w * c0.b + u * c1.b + v * c2.b).to_pixel()
        });
    }
}
