//! The four elementary 2D transformations.
//!
//! Each transformation maps one point to one point and has no state. Applying
//! a transformation to a [`PointSequence`] maps every vertex in order, so the
//! closing point of the plotted boundary is transformed exactly like the
//! vertex it duplicates.
//!
//! # Coordinate System
//!
//! - Standard Cartesian axes, y pointing up
//! - Rotation angles are in degrees, positive = counter-clockwise
//! - Rotation and dilation take an explicit center point

mod dilate;
mod reflect;
mod rotate;
mod translate;

pub use dilate::dilate;
pub use reflect::{reflect, reflect_labeled, ReflectionAxis};
pub use rotate::rotate;
pub use translate::translate;

use crate::shape::PointSequence;
use crate::Point;
use serde::{Deserialize, Serialize};

/// The kind of a transformation, as offered in the transformation picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    #[default]
    Translation,
    Rotation,
    Dilation,
    Reflection,
}

impl TransformKind {
    /// All kinds in picker order.
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Translation,
        TransformKind::Rotation,
        TransformKind::Dilation,
        TransformKind::Reflection,
    ];

    /// Display name shown to students.
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Translation => "Translasi",
            TransformKind::Rotation => "Rotasi",
            TransformKind::Dilation => "Dilatasi",
            TransformKind::Reflection => "Refleksi",
        }
    }

    /// Look up a kind by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name.trim())
    }
}

/// A transformation together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transformation {
    /// Shift by the offset `(tx, ty)`.
    Translation { tx: f64, ty: f64 },
    /// Rotate by `angle` degrees about `(cx, cy)`.
    Rotation { angle: f64, cx: f64, cy: f64 },
    /// Scale by factor `k` relative to `(cx, cy)`.
    Dilation { k: f64, cx: f64, cy: f64 },
    /// Mirror across `axis`.
    Reflection { axis: ReflectionAxis },
}

impl Transformation {
    pub fn kind(&self) -> TransformKind {
        match self {
            Transformation::Translation { .. } => TransformKind::Translation,
            Transformation::Rotation { .. } => TransformKind::Rotation,
            Transformation::Dilation { .. } => TransformKind::Dilation,
            Transformation::Reflection { .. } => TransformKind::Reflection,
        }
    }

    /// Map a single point.
    pub fn apply(&self, point: Point) -> Point {
        match *self {
            Transformation::Translation { tx, ty } => translate(point, tx, ty),
            Transformation::Rotation { angle, cx, cy } => rotate(point, angle, cx, cy),
            Transformation::Dilation { k, cx, cy } => dilate(point, k, cx, cy),
            Transformation::Reflection { axis } => reflect(point, axis),
        }
    }

    /// Map every vertex of a sequence, preserving order and closure.
    pub fn apply_to(&self, shape: &PointSequence) -> PointSequence {
        shape.map(|&p| self.apply(p))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-6;

    fn point_strategy() -> impl Strategy<Value = Point> {
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| Point::new(x, y))
    }

    fn axis_strategy() -> impl Strategy<Value = ReflectionAxis> {
        prop::sample::select(ReflectionAxis::ALL.to_vec())
    }

    proptest! {
        /// Property: translating by (tx, ty) then (-tx, -ty) is the identity.
        #[test]
        fn prop_translation_round_trip(
            p in point_strategy(),
            tx in -1000.0f64..1000.0,
            ty in -1000.0f64..1000.0,
        ) {
            let back = translate(translate(p, tx, ty), -tx, -ty);
            prop_assert!(back.approx_eq(&p, EPS), "{:?} != {:?}", back, p);
        }

        /// Property: rotation about any center preserves distances.
        #[test]
        fn prop_rotation_is_isometry(
            a in point_strategy(),
            b in point_strategy(),
            c in point_strategy(),
            angle in -1080.0f64..1080.0,
        ) {
            let ra = rotate(a, angle, c.x, c.y);
            let rb = rotate(b, angle, c.x, c.y);
            prop_assert!((ra.distance(&rb) - a.distance(&b)).abs() < EPS);
        }

        /// Property: full turns are the identity.
        #[test]
        fn prop_rotation_full_turn_identity(
            p in point_strategy(),
            c in point_strategy(),
            turns in -3i32..=3,
        ) {
            let angle = 360.0 * turns as f64;
            let r = rotate(p, angle, c.x, c.y);
            prop_assert!(r.approx_eq(&p, EPS), "{:?} != {:?}", r, p);
        }

        /// Property: dilating by k then 1/k returns the original point.
        #[test]
        fn prop_dilation_inverse(
            p in point_strategy(),
            c in point_strategy(),
            k in prop_oneof![-10.0f64..-0.1, 0.1f64..10.0],
        ) {
            let back = dilate(dilate(p, k, c.x, c.y), 1.0 / k, c.x, c.y);
            prop_assert!(back.approx_eq(&p, EPS), "{:?} != {:?}", back, p);
        }

        /// Property: dilation by 1 is the identity.
        #[test]
        fn prop_dilation_unit_identity(p in point_strategy(), c in point_strategy()) {
            let d = dilate(p, 1.0, c.x, c.y);
            prop_assert!(d.approx_eq(&p, EPS));
        }

        /// Property: every reflection is an involution.
        #[test]
        fn prop_reflection_involution(p in point_strategy(), axis in axis_strategy()) {
            prop_assert_eq!(reflect(reflect(p, axis), axis), p);
        }

        /// Property: applying to a sequence matches applying per vertex.
        #[test]
        fn prop_apply_to_matches_per_point(
            points in prop::collection::vec(point_strategy(), 1..10),
            tx in -10.0f64..10.0,
            ty in -10.0f64..10.0,
        ) {
            let t = Transformation::Translation { tx, ty };
            let shape = PointSequence::from_vertices(points.clone());
            let image = t.apply_to(&shape);
            let expected: Vec<Point> = shape.boundary().into_iter().map(|p| t.apply(p)).collect();
            prop_assert_eq!(image.boundary(), expected);
        }
    }
}
