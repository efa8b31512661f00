//! Rotation about an arbitrary center.
//!
//! For a rotation by angle θ about center `(cx, cy)`:
//! ```text
//! x' = (x - cx) * cos(θ) - (y - cy) * sin(θ) + cx
//! y' = (x - cx) * sin(θ) + (y - cy) * cos(θ) + cy
//! ```
//!
//! The angle is not normalized; any real value is accepted and periodicity is
//! left to the trigonometric functions.

use crate::Point;

/// Rotate a point by `angle_degrees` (positive = counter-clockwise) about `(cx, cy)`.
pub fn rotate(point: Point, angle_degrees: f64, cx: f64, cy: f64) -> Point {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();

    // Translate to origin at center
    let dx = point.x - cx;
    let dy = point.y - cy;

    Point::new(dx * cos - dy * sin + cx, dx * sin + dy * cos + cy)
}
