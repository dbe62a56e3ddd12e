//! Scan Conversion
//!
//! Edges from the [clipper](../clip/index.html) are turned into
//! horizontal spans, one scanline at a time.
//!
//! Two sweeps are provided:
//!   - [sweep_convex] keeps exactly two edges active, enough for any
//!     convex polygon including rectangles
//!   - [sweep_winding] keeps an active edge table and fills with the
//!     non-zero winding rule, for concave shapes, holes and multiple
//!     contours
//!
//! [sweep_convex]: fn.sweep_convex.html
//! [sweep_winding]: fn.sweep_winding.html

use crate::clip::sort_edges;
use crate::clip::Edge;
use crate::math::round_to_int;

/// Horizontal run of pixels `left .. right` on scanline `y`
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub left: i32,
    pub right: i32,
    pub y: i32,
}

impl Span {
    /// Span between two x positions, in either order
    fn between(x0: f32, x1: f32, y: i32) -> Self {
        Span { left: round_to_int(x0.min(x1)), right: round_to_int(x0.max(x1)), y }
    }
    /// Number of pixels in the span
    pub fn len(&self) -> i32 {
        self.right - self.left
    }
    /// True if the span covers no pixels
    pub fn is_empty(&self) -> bool {
        self.right <= self.left
    }
}

/// Fill a convex shape by walking its left and right boundaries
///
/// `edges` are sorted in place. Nothing is emitted for fewer than 2 edges.
pub fn sweep_convex<F>(edges: &mut [Edge], mut emit: F)
    where F: FnMut(Span)
{
    if edges.len() < 2 {
        return;
    }
    sort_edges(edges);
    let bottom = edges.iter().map(|e| e.bot_y).max().unwrap_or(0);
    let mut queue = edges.iter().copied();
    let (mut left, mut right) = match (queue.next(), queue.next()) {
        (Some(l), Some(r)) => (l, r),
        _ => return,
    };
    let mut y = left.top_y;
    while y < bottom {
        emit(Span::between(left.cur_x, right.cur_x, y));
        y += 1;
        left = match advance(left, y, &mut queue) {
            Some(e) => e,
            None => break,
        };
        right = match advance(right, y, &mut queue) {
            Some(e) => e,
            None => break,
        };
    }
}

/// Step an edge to scanline `y`, or replace it with the next queued edge
/// once exhausted
fn advance<I>(mut e: Edge, y: i32, queue: &mut I) -> Option<Edge>
    where I: Iterator<Item = Edge>
{
    if y < e.bot_y {
        e.cur_x += e.slope;
        return Some(e);
    }
    queue.find(|next| next.bot_y > y)
}

/// Fill an arbitrary shape with the non-zero winding rule
///
/// Scanlines at or below `bottom` are not visited. `edges` are sorted in
/// place. Nothing is emitted for fewer than 2 edges.
pub fn sweep_winding<F>(edges: &mut [Edge], bottom: i32, mut emit: F)
    where F: FnMut(Span)
{
    if edges.len() < 2 {
        return;
    }
    sort_edges(edges);
    let mut pending = edges.iter().copied().peekable();
    let mut active : Vec<Edge> = Vec::with_capacity(edges.len());
    let mut y = edges[0].top_y;

    while y < bottom {
        while let Some(e) = pending.next_if(|e| e.top_y <= y) {
            active.push(e);
        }
        if active.is_empty() {
            match pending.peek() {
                Some(e) => { y = e.top_y; continue; },
                None => break,
            }
        }
        // Active edges are nearly sorted from the previous scanline
        insertion_sort_by_x(&mut active);

        let mut winding = 0;
        let mut x0 = 0.0;
        for e in &active {
            let prev = winding;
            winding += e.winding;
            if prev == 0 && winding != 0 {
                x0 = e.cur_x;
            } else if prev != 0 && winding == 0 {
                emit(Span::between(x0, e.cur_x, y));
            }
        }

        active.retain_mut(|e| {
            if e.bot_y <= y + 1 {
                return false;
            }
            e.cur_x += e.slope;
            true
        });
        y += 1;
    }
}

fn insertion_sort_by_x(edges: &mut [Edge]) {
    for i in 1 .. edges.len() {
        let mut j = i;
        while j > 0 && edges[j - 1].cur_x > edges[j].cur_x {
            edges.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::{clip,EdgeList,Rect};
    use crate::path::Point;

    fn edges_of(pts: &[(f32,f32)], w: f32, h: f32) -> EdgeList {
        let r = Rect::wh(w, h);
        let mut edges = EdgeList::new();
        for i in 0 .. pts.len() {
            let (a, b) = (pts[i], pts[(i + 1) % pts.len()]);
            clip(Point::new(a.0, a.1), Point::new(b.0, b.1), &r, &mut edges);
        }
        edges
    }

    fn collect_convex(edges: &mut [Edge]) -> Vec<Span> {
        let mut spans = vec![];
        sweep_convex(edges, |s| spans.push(s));
        spans
    }

    fn collect_winding(edges: &mut [Edge], bottom: i32) -> Vec<Span> {
        let mut spans = vec![];
        sweep_winding(edges, bottom, |s| spans.push(s));
        spans
    }

    #[test]
    fn convex_rect() {
        let mut e = edges_of(&[(1.,1.), (3.,1.), (3.,3.), (1.,3.)], 4., 4.);
        let spans = collect_convex(&mut e);
        assert_eq!(spans, vec![Span { left: 1, right: 3, y: 1 },
                               Span { left: 1, right: 3, y: 2 }]);
    }

    #[test]
    fn convex_triangle_spans_shrink() {
        let mut e = edges_of(&[(0.,0.), (8.,0.), (0.,8.)], 8., 8.);
        let spans = collect_convex(&mut e);
        assert_eq!(spans.len(), 8);
        for (y, s) in spans.iter().enumerate() {
            assert_eq!(s.y, y as i32);
            assert_eq!(s.left, 0);
            // hypotenuse x = 8 - y at the top of the row
            assert_eq!(s.right, round_to_int(8.0 - y as f32));
        }
    }

    #[test]
    fn rows_sample_the_top_of_each_scanline() {
        let mut e = edges_of(&[(0.,0.), (4.,4.), (0.,4.)], 4., 4.);
        let mut w = e.clone();
        let widths : Vec<_> = collect_convex(&mut e).iter().map(|s| s.right - s.left).collect();
        assert_eq!(widths, vec![0, 1, 2, 3]);
        let widths : Vec<_> = collect_winding(&mut w, 4).iter()
            .filter(|s| !s.is_empty())
            .map(|s| (s.y, s.right - s.left))
            .collect();
        assert_eq!(widths, vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn too_few_edges() {
        let mut e = edges_of(&[(0.,0.), (8.,8.)], 8., 8.);
        // the two directions of one segment still form a zero-width shape
        assert!(collect_convex(&mut e).iter().all(|s| s.is_empty()));
        let mut none = EdgeList::new();
        assert!(collect_convex(&mut none).is_empty());
        assert!(collect_winding(&mut none, 8).is_empty());
    }

    #[test]
    fn winding_matches_convex_for_convex_shapes() {
        let pts = [(0.5,0.2), (7.3,1.1), (6.2,6.8), (1.4,5.9)];
        let mut a = edges_of(&pts, 8., 8.);
        let mut b = a.clone();
        let convex : Vec<_> = collect_convex(&mut a).into_iter().filter(|s| !s.is_empty()).collect();
        let winding : Vec<_> = collect_winding(&mut b, 8).into_iter().filter(|s| !s.is_empty()).collect();
        assert_eq!(convex, winding);
    }

    #[test]
    fn winding_fills_overlap() {
        // Two overlapping squares with the same orientation
        let mut e = edges_of(&[(0.,0.), (4.,0.), (4.,4.), (0.,4.)], 8., 8.);
        e.extend(edges_of(&[(2.,2.), (6.,2.), (6.,6.), (2.,6.)], 8., 8.));
        let spans = collect_winding(&mut e, 8);
        let row3 : Vec<_> = spans.iter().filter(|s| s.y == 3).collect();
        assert_eq!(row3, vec![&Span { left: 0, right: 6, y: 3 }]);
    }

    #[test]
    fn winding_hole_with_opposite_orientation() {
        let mut e = edges_of(&[(0.,0.), (6.,0.), (6.,6.), (0.,6.)], 8., 8.);
        e.extend(edges_of(&[(2.,2.), (2.,4.), (4.,4.), (4.,2.)], 8., 8.));
        let spans = collect_winding(&mut e, 8);
        let row3 : Vec<_> = spans.iter().filter(|s| s.y == 3).collect();
        assert_eq!(row3, vec![&Span { left: 0, right: 2, y: 3 },
                              &Span { left: 4, right: 6, y: 3 }]);
    }

    #[test]
    fn winding_stops_at_bottom() {
        let mut e = edges_of(&[(0.,0.), (4.,0.), (4.,8.), (0.,8.)], 8., 8.);
        assert_eq!(collect_winding(&mut e, 3).len(), 3);
    }
}
