//! Path Storage
//!
//! # Example
//!
//!     use scancanvas::{Path,Point,Verb};
//!
//!     let mut path = Path::new();
//!     path.move_to(Point::new(0.0, 0.0));
//!     path.line_to(Point::new(10.0, 0.0));
//!     path.quad_to(Point::new(10.0, 10.0), Point::new(0.0, 10.0));
//!
//!     // Contours are closed implicitly
//!     let verbs : Vec<_> = path.edger().map(|seg| seg.verb).collect();
//!     assert_eq!(verbs, vec![Verb::Line, Verb::Quad, Verb::Line]);
//!

use crate::clip::Rect;
use crate::transform::Transform;

use std::f32::consts::FRAC_1_SQRT_2;
use std::f32::consts::PI;

/// Point in local or device coordinates
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new Point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f32 {
        crate::math::length(self.x - other.x, self.y - other.y)
    }
}

impl From<(f32,f32)> for Point {
    fn from(v: (f32, f32)) -> Self {
        Point::new(v.0, v.1)
    }
}

/// Path Verbs
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Verb {
    /// Start a new contour; 1 point
    Move,
    /// Straight segment; 1 point
    Line,
    /// Quadratic Bezier; 2 points
    Quad,
    /// Cubic Bezier; 3 points
    Cubic,
}

impl Verb {
    /// Number of points stored for this verb
    pub fn point_count(self) -> usize {
        match self {
            Verb::Move | Verb::Line => 1,
            Verb::Quad => 2,
            Verb::Cubic => 3,
        }
    }
}

/// Contour direction for the shape helpers
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Sequence of contours made of lines and curves
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    pts: Vec<Point>,
    verbs: Vec<Verb>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self { pts: vec![], verbs: vec![] }
    }
    /// Remove all contours
    pub fn reset(&mut self) {
        self.pts.clear();
        self.verbs.clear();
    }
    /// Control points of the path
    pub fn points(&self) -> &[Point] {
        &self.pts
    }
    /// Verbs of the path
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }
    /// True if the path has no points
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }
    /// Start a new contour at `p`
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.pts.push(p);
        self.verbs.push(Verb::Move);
        self
    }
    /// Add a line from the last point to `p`
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.pts.push(p);
        self.verbs.push(Verb::Line);
        self
    }
    /// Add a quadratic from the last point through control `p1` to `p2`
    pub fn quad_to(&mut self, p1: Point, p2: Point) -> &mut Self {
        self.pts.push(p1);
        self.pts.push(p2);
        self.verbs.push(Verb::Quad);
        self
    }
    /// Add a cubic from the last point through controls `p1`, `p2` to `p3`
    pub fn cubic_to(&mut self, p1: Point, p2: Point, p3: Point) -> &mut Self {
        self.pts.push(p1);
        self.pts.push(p2);
        self.pts.push(p3);
        self.verbs.push(Verb::Cubic);
        self
    }
    /// Add a closed rectangle contour starting at the top-left corner
    pub fn add_rect(&mut self, rect: &Rect, dir: Direction) -> &mut Self {
        let lt = Point::new(rect.left, rect.top);
        let rt = Point::new(rect.right, rect.top);
        let rb = Point::new(rect.right, rect.bottom);
        let lb = Point::new(rect.left, rect.bottom);
        self.move_to(lt);
        match dir {
            Direction::Clockwise => {
                self.line_to(rt).line_to(rb).line_to(lb);
            },
            Direction::CounterClockwise => {
                self.line_to(lb).line_to(rb).line_to(rt);
            },
        }
        self
    }
    /// Add a polygon contour; fewer than 2 points is ignored
    pub fn add_polygon(&mut self, pts: &[Point]) -> &mut Self {
        if pts.len() < 2 {
            return self;
        }
        self.move_to(pts[0]);
        for &p in &pts[1..] {
            self.line_to(p);
        }
        self
    }
    /// Add a circle as 8 quadratic segments, starting at (cx + radius, cy)
    pub fn add_circle(&mut self, center: Point, radius: f32, dir: Direction) -> &mut Self {
        let sign = match dir {
            Direction::Clockwise => 1.0,
            Direction::CounterClockwise => -1.0,
        };
        // One eighth of the unit circle: control point and end point
        let arc = [Point::new(1.0, sign * (PI / 8.0).tan()),
                   Point::new(FRAC_1_SQRT_2, sign * FRAC_1_SQRT_2)];
        let place = Transform::new(radius, 0.0, center.x,
                                   0.0, radius, center.y);
        self.move_to(place.map_xy(1.0, 0.0));
        for i in 0 .. 8 {
            let angle = sign * i as f32 * PI / 4.0;
            let m = place * Transform::rotate(angle);
            let c = m.map_point(arc[0]);
            let p = m.map_point(arc[1]);
            self.quad_to(c, p);
        }
        self
    }
    /// Bounds of all control points; all zeros for an empty path
    pub fn bounds(&self) -> Rect {
        let first = match self.pts.first() {
            None => return Rect::ltrb(0.0, 0.0, 0.0, 0.0),
            Some(p) => *p,
        };
        let mut r = Rect::ltrb(first.x, first.y, first.x, first.y);
        for p in &self.pts {
            r.expand(p.x, p.y);
        }
        r
    }
    /// Transform every point in place
    pub fn transform(&mut self, m: &Transform) {
        m.map_points_in_place(&mut self.pts);
    }
    /// Copy of the path mapped through `m`
    pub fn transformed(&self, m: &Transform) -> Path {
        let mut out = self.clone();
        out.transform(m);
        out
    }
    /// Iterate over the segments, closing each contour
    pub fn edger(&self) -> Edger<'_> {
        Edger { path: self, verb: 0, pt: 0, start: None, last: Point::default() }
    }
}

/// One segment produced by an [Edger]
///
/// `pts[0]` is the start point; the number of valid points is
/// `verb.point_count() + 1`.
///
/// [Edger]: struct.Edger.html
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Segment {
    pub verb: Verb,
    pub pts: [Point; 4],
}

impl Segment {
    /// Valid points of the segment, including its start
    pub fn points(&self) -> &[Point] {
        &self.pts[.. self.verb.point_count() + 1]
    }
}

/// Segment iterator over a [Path]
///
/// A line back to the contour start is produced before each new
/// contour and at the end of the path, unless already closed.
///
/// [Path]: struct.Path.html
#[derive(Debug)]
pub struct Edger<'a> {
    path: &'a Path,
    verb: usize,
    pt: usize,
    start: Option<Point>,
    last: Point,
}

impl<'a> Edger<'a> {
    fn close(&mut self) -> Option<Segment> {
        let start = self.start.take()?;
        if start == self.last {
            return None;
        }
        let mut pts = [Point::default(); 4];
        pts[0] = self.last;
        pts[1] = start;
        Some(Segment { verb: Verb::Line, pts })
    }
}

impl<'a> Iterator for Edger<'a> {
    type Item = Segment;
    fn next(&mut self) -> Option<Segment> {
        loop {
            let verb = match self.path.verbs.get(self.verb) {
                Some(v) => *v,
                None => return self.close(),
            };
            let n = verb.point_count();
            if verb == Verb::Move {
                if let Some(seg) = self.close() {
                    // Revisit this move after emitting the closing line
                    return Some(seg);
                }
                let p = self.path.pts[self.pt];
                self.start = Some(p);
                self.last = p;
                self.verb += 1;
                self.pt += n;
                continue;
            }
            if self.start.is_none() {
                // Segment without a leading move starts from the origin
                self.start = Some(self.last);
            }
            let mut pts = [Point::default(); 4];
            pts[0] = self.last;
            pts[1 ..= n].copy_from_slice(&self.path.pts[self.pt .. self.pt + n]);
            self.last = pts[n];
            self.verb += 1;
            self.pt += n;
            return Some(Segment { verb, pts });
        }
    }
}

/// Split the quadratic `src` at `t`
///
/// `[0..=2]` holds the 0..t half and `[2..=4]` the t..1 half.
pub fn chop_quad_at(src: &[Point; 3], t: f32) -> [Point; 5] {
    let ab = lerp_pt(src[0], src[1], t);
    let bc = lerp_pt(src[1], src[2], t);
    let abc = lerp_pt(ab, bc, t);
    [src[0], ab, abc, bc, src[2]]
}

/// Split the cubic `src` at `t`
///
/// `[0..=3]` holds the 0..t half and `[3..=6]` the t..1 half.
pub fn chop_cubic_at(src: &[Point; 4], t: f32) -> [Point; 7] {
    let ab = lerp_pt(src[0], src[1], t);
    let bc = lerp_pt(src[1], src[2], t);
    let cd = lerp_pt(src[2], src[3], t);
    let abc = lerp_pt(ab, bc, t);
    let bcd = lerp_pt(bc, cd, t);
    let abcd = lerp_pt(abc, bcd, t);
    [src[0], ab, abc, abcd, bcd, cd, src[3]]
}

fn lerp_pt(a: Point, b: Point, t: f32) -> Point {
    Point::new(crate::math::lerp(a.x, b.x, t), crate::math::lerp(a.y, b.y, t))
}
