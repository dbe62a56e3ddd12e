//! Small numeric helpers shared by the rasterizer and the compositor
//!
//! Only [round_to_int] is re-exported at the crate root; the rest are
//! reached through this module.
//!
//! ```compile_fail
//! use scancanvas::lerp;
//! ```
//!
//!     use scancanvas::math::{lerp, length};
//!     assert_eq!(lerp(0.0, 4.0, 0.25), 1.0);
//!     assert_eq!(length(3.0, 4.0), 5.0);
//!
//! [round_to_int]: fn.round_to_int.html

/// Round a float to the nearest integer, halves rounding up
///
/// Unlike `f32::round`, which rounds halves away from zero, this always
/// rounds towards positive infinity so that `-0.5` maps to `0` and pixel
/// centres line up the same way on both sides of the origin.
///
///     use scancanvas::round_to_int;
///     assert_eq!(round_to_int(0.5), 1);
///     assert_eq!(round_to_int(-0.5), 0);
///     assert_eq!(round_to_int(2.49), 2);
///
pub fn round_to_int(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Clamp a value to the unit interval [0,1]
///
/// NaN maps to 0.
pub fn pin_unit(v: f32) -> f32 {
    if v > 0.0 {
        v.min(1.0)
    } else {
        0.0
    }
}

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Length of the vector (dx,dy)
pub fn length(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}
