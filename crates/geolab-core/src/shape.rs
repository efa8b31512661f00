//! Point sequences and plotting bounds.
//!
//! A [`PointSequence`] stores the vertices a student entered plus a `closed`
//! flag. The closing point that makes a rendered polygon connect back to its
//! start is never stored; it is produced on demand by
//! [`PointSequence::boundary`].

use crate::Point;

/// Relative padding added around the furthest coordinate when plotting.
const BOUNDS_SCALE: f64 = 1.2;
/// Absolute padding added after scaling, so a shape at the origin is still visible.
const BOUNDS_MARGIN: f64 = 1.0;

/// An ordered list of vertices, optionally closed into a polygon.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSequence {
    vertices: Vec<Point>,
    closed: bool,
}

impl PointSequence {
    /// Build a sequence from user-entered vertices.
    ///
    /// More than one vertex makes a closed shape; a lone point stays open.
    pub fn from_vertices(vertices: Vec<Point>) -> Self {
        let closed = vertices.len() > 1;
        Self { vertices, closed }
    }

    /// Rebuild a sequence from a plotted point list.
    ///
    /// A list of more than one point whose last point repeats the first is
    /// closed, and the repeated point is dropped. Any other list is kept as an
    /// open sequence of vertices.
    pub fn from_boundary(mut points: Vec<Point>) -> Self {
        let closed = points.len() > 1 && points.first() == points.last();
        if closed {
            points.pop();
        }
        Self {
            vertices: points,
            closed,
        }
    }

    /// The logical vertices, without the closing duplicate.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Whether the rendered boundary connects back to the first vertex.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of logical vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The points to plot, in order.
    ///
    /// For a closed sequence this is the vertex list followed by a copy of the
    /// first vertex.
    pub fn boundary(&self) -> Vec<Point> {
        let mut points = self.vertices.clone();
        if self.closed {
            if let Some(&first) = self.vertices.first() {
                points.push(first);
            }
        }
        points
    }

    /// Apply `f` to every vertex, keeping order and closure.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(&Point) -> Point,
    {
        Self {
            vertices: self.vertices.iter().map(f).collect(),
            closed: self.closed,
        }
    }
}

/// Symmetric axis limits for plotting an original shape and its image.
///
/// Both axes span `[-limit, limit]` so the origin stays at the center of an
/// equal-aspect figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub limit: f64,
}

impl PlotBounds {
    /// Compute the bounds enclosing every point of both point lists.
    pub fn enclosing(original: &[Point], transformed: &[Point]) -> Self {
        let max_coord = original
            .iter()
            .chain(transformed)
            .map(|p| p.x.abs().max(p.y.abs()))
            .fold(0.0f64, f64::max);

        Self {
            limit: max_coord * BOUNDS_SCALE + BOUNDS_MARGIN,
        }
    }
}
