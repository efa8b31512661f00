//! Translation by a constant offset.

use crate::Point;

/// Shift a point by `(tx, ty)`.
#[inline]
pub fn translate(point: Point, tx: f64, ty: f64) -> Point {
    Point::new(point.x + tx, point.y + ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        assert_eq!(translate(Point::new(1.0, 2.0), 2.0, 1.0), Point::new(3.0, 3.0));
    }

    #[test]
    fn test_translate_negative_offset() {
        assert_eq!(translate(Point::new(1.0, 2.0), -4.0, -0.5), Point::new(-3.0, 1.5));
    }

    #[test]
    fn test_translate_zero_offset() {
        let p = Point::new(-7.25, 3.5);
        assert_eq!(translate(p, 0.0, 0.0), p);
    }
}
