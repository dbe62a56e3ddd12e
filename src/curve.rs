//! Curve Flattening
//!
//! Quadratic and cubic segments are approximated by chords. The number
//! of chords is chosen from the second differences of the control
//! points so that the chords stay within [FLATNESS_TOLERANCE] of the
//! curve, in device pixels.
//!
//! [FLATNESS_TOLERANCE]: constant.FLATNESS_TOLERANCE.html

use crate::clip::clip;
use crate::clip::EdgeList;
use crate::clip::Rect;
use crate::path::Path;
use crate::path::Point;
use crate::path::Verb;

/// Largest allowed distance between a curve and its chords, in pixels
pub const FLATNESS_TOLERANCE : f32 = 0.25;

/// Upper bound on the chords used for a single curve
pub const MAX_CURVE_SEGMENTS : usize = 1024;

fn second_difference(p0: Point, p1: Point, p2: Point) -> f32 {
    crate::math::length(p0.x - 2.0 * p1.x + p2.x, p0.y - 2.0 * p1.y + p2.y)
}

fn segments_for(deviation: f32) -> usize {
    // NaN casts to 0, infinity saturates
    ((deviation / FLATNESS_TOLERANCE).sqrt().ceil() as usize).min(MAX_CURVE_SEGMENTS)
}

/// Number of chords needed for the quadratic `pts`
///
/// Zero for a degenerate curve whose control points are collinear and
/// evenly spaced.
pub fn quad_segments(pts: &[Point; 3]) -> usize {
    segments_for(second_difference(pts[0], pts[1], pts[2]) / 4.0)
}

/// Number of chords needed for the cubic `pts`
pub fn cubic_segments(pts: &[Point; 4]) -> usize {
    let d0 = second_difference(pts[0], pts[1], pts[2]);
    let d1 = second_difference(pts[1], pts[2], pts[3]);
    segments_for(0.75 * d0.max(d1))
}

/// Evaluate the quadratic `pts` at `t`
pub fn eval_quad(pts: &[Point; 3], t: f32) -> Point {
    let s = 1.0 - t;
    let (a, b, c) = (s * s, 2.0 * s * t, t * t);
    Point::new(a * pts[0].x + b * pts[1].x + c * pts[2].x,
               a * pts[0].y + b * pts[1].y + c * pts[2].y)
}

/// Evaluate the cubic `pts` at `t`
pub fn eval_cubic(pts: &[Point; 4], t: f32) -> Point {
    let s = 1.0 - t;
    let (a, b, c, d) = (s * s * s, 3.0 * s * s * t, 3.0 * s * t * t, t * t * t);
    Point::new(a * pts[0].x + b * pts[1].x + c * pts[2].x + d * pts[3].x,
               a * pts[0].y + b * pts[1].y + c * pts[2].y + d * pts[3].y)
}

/// Clip the chords of `eval` over `n` uniform steps; a straight line when `n` is 0
///
/// A curve lies inside the hull of its control points `hull`; if that is
/// wholly above or below `rect` no chord can contribute.
fn clip_chords<F>(hull: &[Point], n: usize, eval: F, rect: &Rect, edges: &mut EdgeList)
    where F: Fn(f32) -> Point
{
    if hull.iter().all(|p| p.y <= rect.top) || hull.iter().all(|p| p.y >= rect.bottom) {
        return;
    }
    let (start, end) = match (hull.first(), hull.last()) {
        (Some(s), Some(e)) => (*s, *e),
        _ => return,
    };
    if n == 0 {
        clip(start, end, rect, edges);
        return;
    }
    let dt = 1.0 / n as f32;
    let mut prev = start;
    for i in 1 ..= n {
        // Land exactly on the end point
        let next = if i == n { end } else { eval(i as f32 * dt) };
        clip(prev, next, rect, edges);
        prev = next;
    }
}

/// Flatten every segment of a device-space `path` and clip it to `rect`
///
/// Contours are closed implicitly.
///
///     use scancanvas::{flatten_path,Direction,Path,Point,Rect};
///     let mut path = Path::new();
///     path.add_circle(Point::new(5.0, 5.0), 4.0, Direction::Clockwise);
///     let edges = flatten_path(&path, &Rect::wh(10.0, 10.0));
///     assert!(edges.len() > 8);
///
pub fn flatten_path(path: &Path, rect: &Rect) -> EdgeList {
    let mut edges = EdgeList::new();
    for seg in path.edger() {
        let p = seg.pts;
        match seg.verb {
            Verb::Move => {},
            Verb::Line => clip(p[0], p[1], rect, &mut edges),
            Verb::Quad => {
                let q = [p[0], p[1], p[2]];
                clip_chords(&q, quad_segments(&q), |t| eval_quad(&q, t), rect, &mut edges);
            },
            Verb::Cubic => {
                let c = [p[0], p[1], p[2], p[3]];
                clip_chords(&c, cubic_segments(&c), |t| eval_cubic(&c, t), rect, &mut edges);
            },
        }
    }
    log::trace!("flatten_path: {} verbs -> {} edges", path.verbs().len(), edges.len());
    edges
}
