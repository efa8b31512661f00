//! Dilation (uniform scaling) relative to a center.
//!
//! `P' = C + k(P - C)`. Any real `k` is accepted: a negative factor also
//! reflects through the center and `k = 0` collapses every point onto it.

use crate::Point;

/// Scale a point by factor `k` relative to `(cx, cy)`.
pub fn dilate(point: Point, k: f64, cx: f64, cy: f64) -> Point {
    Point::new((point.x - cx) * k + cx, (point.y - cy) * k + cy)
}
