//! Clipping Region
//!
//! Directed segments are clipped against a device rectangle and turned
//! into [Edge]s for the scan converter. Geometry left or right of the
//! rectangle is not discarded; it is pinned to the boundary so its
//! winding still counts on the scanlines it spans.
//!
//! [Edge]: struct.Edge.html

use crate::math::round_to_int;
use crate::path::Point;

use smallvec::SmallVec;

use std::cmp::Ordering;

/// Rectangle, stored by its edges
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rect {
    /// Minimum x value
    pub left: f32,
    /// Minimum y value
    pub top: f32,
    /// Maximum x value
    pub right: f32,
    /// Maximum y value
    pub bottom: f32,
}

impl Rect {
    /// Create a Rectangle from its left, top, right and bottom edges
    pub fn ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Create a Rectangle from an origin and a size
    pub fn xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::ltrb(x, y, x + w, y + h)
    }
    /// Create a Rectangle at the origin
    pub fn wh(w: f32, h: f32) -> Self {
        Self::ltrb(0.0, 0.0, w, h)
    }
    /// Width
    pub fn width(&self) -> f32 {
        self.right - self.left
    }
    /// Height
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
    /// True if the width or height is not positive
    pub fn is_empty(&self) -> bool {
        !(self.left < self.right && self.top < self.bottom)
    }
    /// Overlap of two rectangles, None if they do not overlap
    ///
    ///     use scancanvas::Rect;
    ///     let a = Rect::ltrb(0.0, 0.0, 10.0, 10.0);
    ///     let b = Rect::ltrb(5.0, -5.0, 15.0, 5.0);
    ///     assert_eq!(a.intersect(&b), Some(Rect::ltrb(5.0, 0.0, 10.0, 5.0)));
    ///     assert_eq!(a.intersect(&Rect::ltrb(10.0, 0.0, 20.0, 10.0)), None);
    ///
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let r = Rect::ltrb(self.left.max(other.left), self.top.max(other.top),
                           self.right.min(other.right), self.bottom.min(other.bottom));
        if r.is_empty() { None } else { Some(r) }
    }
    /// Expand if the point (x,y) is outside
    pub fn expand(&mut self, x: f32, y: f32) {
        if x < self.left   { self.left = x; }
        if x > self.right  { self.right = x; }
        if y < self.top    { self.top = y; }
        if y > self.bottom { self.bottom = y; }
    }
    /// Smallest rectangle containing all `pts`, None if `pts` is empty
    pub fn bounding(pts: &[Point]) -> Option<Rect> {
        let first = pts.first()?;
        let mut r = Rect::ltrb(first.x, first.y, first.x, first.y);
        for p in &pts[1..] {
            r.expand(p.x, p.y);
        }
        Some(r)
    }
    /// Corners in clockwise order from the top-left
    pub fn corners(&self) -> [Point; 4] {
        [Point::new(self.left, self.top), Point::new(self.right, self.top),
         Point::new(self.right, self.bottom), Point::new(self.left, self.bottom)]
    }
}

/// Directed boundary segment ready for scan conversion
///
/// Covers scanlines `top_y .. bot_y`. `cur_x` starts at the x of the upper
/// end point and advances by `slope` each row.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    /// First scanline
    pub top_y: i32,
    /// One past the last scanline
    pub bot_y: i32,
    /// x on the current scanline
    pub cur_x: f32,
    /// Change in x per scanline
    pub slope: f32,
    /// +1 if the segment heads down, -1 if it heads up
    pub winding: i32,
}

impl Edge {
    /// Create an Edge from p0 to p1
    ///
    /// Points are ordered top to bottom; `winding` is negated if they
    /// had to be swapped.
    pub fn new(p0: Point, p1: Point, winding: i32) -> Self {
        let (p0, p1, winding) = if p0.y > p1.y {
            (p1, p0, -winding)
        } else {
            (p0, p1, winding)
        };
        let dy = p1.y - p0.y;
        let slope = if dy != 0.0 { (p1.x - p0.x) / dy } else { 0.0 };
        let top_y = round_to_int(p0.y);
        let bot_y = round_to_int(p1.y);
        Self { top_y, bot_y, cur_x: p0.x, slope, winding }
    }
    /// Number of scanlines covered
    pub fn rows(&self) -> i32 {
        self.bot_y - self.top_y
    }
    /// True if the edge covers at least one scanline
    pub fn is_valid(&self) -> bool {
        self.bot_y > self.top_y
    }
}

/// Edges produced for a single draw call
///
/// Most shapes produce only a handful of edges, which stay on the stack.
pub type EdgeList = SmallVec<[Edge; 16]>;

/// Order edges by top scanline, then x, then slope
pub fn edge_order(a: &Edge, b: &Edge) -> Ordering {
    a.top_y.cmp(&b.top_y)
        .then_with(|| a.cur_x.partial_cmp(&b.cur_x).unwrap_or(Ordering::Equal))
        .then_with(|| a.slope.partial_cmp(&b.slope).unwrap_or(Ordering::Equal))
}

/// Sort edges with [edge_order]
///
/// [edge_order]: fn.edge_order.html
pub fn sort_edges(edges: &mut [Edge]) {
    edges.sort_by(edge_order);
}

/// Clip the directed segment p0 -> p1 to `rect`, appending Edges
///
/// Up to three edges are produced: the visible part, plus a vertical
/// edge on the left and/or right boundary for any part outside.
///
///     use scancanvas::{clip,EdgeList,Point,Rect};
///     let mut edges = EdgeList::new();
///     let r = Rect::wh(10.0, 10.0);
///     // entirely left of the rectangle, pinned to x = 0
///     clip(Point::new(-5.0, 2.0), Point::new(-1.0, 8.0), &r, &mut edges);
///     assert_eq!(edges.len(), 1);
///     assert_eq!(edges[0].cur_x, 0.0);
///     assert_eq!((edges[0].top_y, edges[0].bot_y), (2, 8));
///
pub fn clip(p0: Point, p1: Point, rect: &Rect, edges: &mut EdgeList) {
    if round_to_int(p0.y) == round_to_int(p1.y) {
        return;
    }
    let mut winding = 1;
    let (mut p0, mut p1) = (p0, p1);
    if p0.y > p1.y {
        std::mem::swap(&mut p0, &mut p1);
        winding = -winding;
    }
    if p1.y <= rect.top || p0.y >= rect.bottom {
        return;
    }
    let slope = (p1.x - p0.x) / (p1.y - p0.y);

    // Vertical clipping
    if p0.y < rect.top {
        p0.x += slope * (rect.top - p0.y);
        p0.y = rect.top;
    }
    if p1.y > rect.bottom {
        p1.x += slope * (rect.bottom - p1.y);
        p1.y = rect.bottom;
    }

    // Horizontal clipping, working left to right
    if p0.x > p1.x {
        std::mem::swap(&mut p0, &mut p1);
        winding = -winding;
    }
    if p1.x <= rect.left {
        p0.x = rect.left;
        p1.x = rect.left;
        push(edges, p0, p1, winding);
        return;
    }
    if p0.x >= rect.right {
        p0.x = rect.right;
        p1.x = rect.right;
        push(edges, p0, p1, winding);
        return;
    }
    if p0.x < rect.left {
        let y = p0.y + (rect.left - p0.x) / slope;
        push(edges, Point::new(rect.left, p0.y), Point::new(rect.left, y), winding);
        p0 = Point::new(rect.left, y);
    }
    if p1.x > rect.right {
        let y = p0.y + (rect.right - p0.x) / slope;
        push(edges, Point::new(rect.right, y), Point::new(rect.right, p1.y), winding);
        p1 = Point::new(rect.right, y);
    }
    push(edges, p0, p1, winding);
}

// Edges that cover no scanline are dropped
fn push(edges: &mut EdgeList, p0: Point, p1: Point, winding: i32) {
    let e = Edge::new(p0, p1, winding);
    if e.is_valid() {
        edges.push(e);
    }
}
