//! Transformations

use crate::path::Point;

use std::ops::Mul;

/// 2x3 Affine Transformation
///
/// ```text
/// x' = sx  * x + shx * y + tx
/// y' = shy * x + sy  * y + ty
/// ```
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    /// Scale in x
    pub sx: f32,
    /// Skew in x; contribution of y to x'
    pub shx: f32,
    /// Translation in x
    pub tx: f32,
    /// Skew in y; contribution of x to y'
    pub shy: f32,
    /// Scale in y
    pub sy: f32,
    /// Translation in y
    pub ty: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create a Transform from its six values, in row order
    pub fn new(sx: f32, shx: f32, tx: f32, shy: f32, sy: f32, ty: f32) -> Self {
        Self { sx, shx, tx, shy, sy, ty }
    }
    /// Identity Transform
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0,
                  0.0, 1.0, 0.0)
    }
    /// Translate by (tx,ty)
    pub fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, tx,
                  0.0, 1.0, ty)
    }
    /// Scale by (sx,sy)
    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx,  0.0, 0.0,
                  0.0, sy,  0.0)
    }
    /// Rotate by `radians`
    ///
    /// Positive y points down, so a small positive angle moves points on
    /// the +x axis towards +y.
    pub fn rotate(radians: f32) -> Self {
        let (sa, ca) = radians.sin_cos();
        Self::new(ca, -sa, 0.0,
                  sa,  ca, 0.0)
    }
    /// Concatenation `outer * inner`
    ///
    /// The result maps points through `inner` first and then `outer`.
    pub fn concat(outer: &Transform, inner: &Transform) -> Self {
        let (a, b) = (outer, inner);
        Self::new(a.sx  * b.sx + a.shx * b.shy,
                  a.sx  * b.shx + a.shx * b.sy,
                  a.sx  * b.tx + a.shx * b.ty + a.tx,
                  a.shy * b.sx + a.sy  * b.shy,
                  a.shy * b.shx + a.sy  * b.sy,
                  a.shy * b.tx + a.sy  * b.ty + a.ty)
    }
    /// Replace self with `self * m`, so `m` applies to points first
    pub fn pre_concat(&mut self, m: &Transform) {
        *self = Self::concat(self, m);
    }
    /// Replace self with `m * self`, so `m` applies to points last
    pub fn post_concat(&mut self, m: &Transform) {
        *self = Self::concat(m, self);
    }
    /// Determinant of the linear part
    pub fn determinant(&self) -> f32 {
        self.sx * self.sy - self.shx * self.shy
    }
    /// Inverse Transform, None if the determinant is zero
    ///
    ///     use scancanvas::Transform;
    ///     let m = Transform::scale(4.0, 4.0);
    ///     assert_eq!(m.invert(), Some(Transform::scale(0.25, 0.25)));
    ///     assert_eq!(Transform::scale(0.0, 1.0).invert(), None);
    ///
    pub fn invert(&self) -> Option<Transform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let d = 1.0 / det;
        let (a, b, c) = (self.sx, self.shx, self.tx);
        let (e, f, g) = (self.shy, self.sy, self.ty);
        Some(Self::new( f * d, -b * d, (b * g - c * f) * d,
                       -e * d,  a * d, (c * e - a * g) * d))
    }
    /// Map a single point
    pub fn map_xy(&self, x: f32, y: f32) -> Point {
        Point::new(self.sx  * x + self.shx * y + self.tx,
                   self.shy * x + self.sy  * y + self.ty)
    }
    /// Map a single point
    pub fn map_point(&self, p: Point) -> Point {
        self.map_xy(p.x, p.y)
    }
    /// Map `src` into `dst`; `dst` must be at least as long as `src`
    pub fn map_points(&self, dst: &mut [Point], src: &[Point]) {
        assert!(dst.len() >= src.len(), "map_points: dst {} < src {}", dst.len(), src.len());
        for (d, s) in dst.iter_mut().zip(src.iter()) {
            *d = self.map_point(*s);
        }
    }
    /// Map points in place
    pub fn map_points_in_place(&self, pts: &mut [Point]) {
        for p in pts.iter_mut() {
            *p = self.map_point(*p);
        }
    }
    /// True if this is exactly the identity
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

/// Matrix product; `a * b` applies `b` to points first
impl Mul<Transform> for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Self {
        Transform::concat(&self, &rhs)
    }
}
