//! Line Stroking
//!
//! # Example
//!
//!     use scancanvas::{add_stroked_line,Path,Point,Verb};
//!
//!     let mut path = Path::new();
//!     add_stroked_line(&mut path, Point::new(0.0, 0.0), Point::new(100.0, 0.0), 4.0, false);
//!
//!     // A single rectangle
//!     assert_eq!(path.verbs(), &[Verb::Move, Verb::Line, Verb::Line, Verb::Line]);
//!     assert_eq!(path.bounds().height(), 4.0);
//!

use crate::path::Direction;
use crate::path::Path;
use crate::path::Point;

/// Append the outline of a line from p0 to p1 with the given width
///
/// The line is a rectangle centred on p0 -> p1. With `round_cap`, circles
/// of radius `width / 2` are added at both ends; a zero length line then
/// becomes a single dot. All contours share one orientation so the
/// overlaps fill solid under the non-zero winding rule.
pub fn add_stroked_line(path: &mut Path, p0: Point, p1: Point, width: f32, round_cap: bool) {
    let radius = width * 0.5;
    let (dx, dy) = (p1.x - p0.x, p1.y - p0.y);
    let len = crate::math::length(dx, dy);
    if len > 0.0 {
        // Normal to the line, half the width long
        let (nx, ny) = (-dy / len * radius, dx / len * radius);
        path.add_polygon(&[Point::new(p0.x - nx, p0.y - ny),
                           Point::new(p1.x - nx, p1.y - ny),
                           Point::new(p1.x + nx, p1.y + ny),
                           Point::new(p0.x + nx, p0.y + ny)]);
    }
    if round_cap {
        path.add_circle(p0, radius, Direction::Clockwise);
        if len > 0.0 {
            path.add_circle(p1, radius, Direction::Clockwise);
        }
    }
}
