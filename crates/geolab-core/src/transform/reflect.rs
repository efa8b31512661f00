//! Reflection across the coordinate axes and the two diagonals.

use crate::Point;
use serde::{Deserialize, Serialize};

/// Line of reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionAxis {
    /// `(x, y) -> (x, -y)`
    #[default]
    XAxis,
    /// `(x, y) -> (-x, y)`
    YAxis,
    /// `(x, y) -> (y, x)`
    LineYEqualsX,
    /// `(x, y) -> (-y, -x)`
    LineYEqualsNegX,
}

impl ReflectionAxis {
    /// All axes in picker order.
    pub const ALL: [ReflectionAxis; 4] = [
        ReflectionAxis::XAxis,
        ReflectionAxis::YAxis,
        ReflectionAxis::LineYEqualsX,
        ReflectionAxis::LineYEqualsNegX,
    ];

    /// Display label shown in the axis picker.
    pub fn label(self) -> &'static str {
        match self {
            ReflectionAxis::XAxis => "sumbu x",
            ReflectionAxis::YAxis => "sumbu y",
            ReflectionAxis::LineYEqualsX => "garis y = x",
            ReflectionAxis::LineYEqualsNegX => "garis y = -x",
        }
    }

    /// Parse a display label.
    ///
    /// Surrounding whitespace is ignored; otherwise the label must match
    /// exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|axis| axis.label() == label)
    }
}

/// Mirror a point across `axis`.
#[inline]
pub fn reflect(point: Point, axis: ReflectionAxis) -> Point {
    let Point { x, y } = point;
    match axis {
        ReflectionAxis::XAxis => Point::new(x, -y),
        ReflectionAxis::YAxis => Point::new(-x, y),
        ReflectionAxis::LineYEqualsX => Point::new(y, x),
        ReflectionAxis::LineYEqualsNegX => Point::new(-y, -x),
    }
}

/// Mirror a point across the axis named by a display label.
///
/// An unrecognized label leaves the point unchanged. Callers that need to
/// detect bad labels should use [`ReflectionAxis::from_label`] instead.
pub fn reflect_labeled(point: Point, label: &str) -> Point {
    match ReflectionAxis::from_label(label) {
        Some(axis) => reflect(point, axis),
        None => point,
    }
}
