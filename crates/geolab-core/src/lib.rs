//! GeoLab Core - 2D geometric transformation library
//!
//! This crate provides the core functionality behind the GeoLab virtual lab:
//! parsing user-entered point lists, applying the four elementary
//! transformations (translation, rotation, dilation, reflection), and
//! assembling the labeled coordinate table and plot bounds shown to students.
//!
//! Every operation is a pure function over plain values. The presentation
//! layer calls in with primitive inputs and gets coordinate lists and label
//! strings back.

pub mod assemble;
pub mod config;
pub mod describe;
pub mod parse;
pub mod shape;
pub mod transform;

pub use assemble::{assemble_results, visualize, AssembleError, ResultRecord, TransformationResult};
pub use config::{LabConfig, PageLayout, ParameterRange};
pub use parse::{parse_points, ParseError};
pub use shape::{PlotBounds, PointSequence};
pub use transform::{
    dilate, reflect, reflect_labeled, rotate, translate, ReflectionAxis, TransformKind,
    Transformation,
};

use thiserror::Error;

/// A point in the 2D plane.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Check whether both coordinates are within `tolerance` of `other`.
    pub fn approx_eq(&self, other: &Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Errors produced by the one-shot [`visualize`] pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum LabError {
    /// The point list text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The original and transformed sequences could not be paired.
    #[error(transparent)]
    Assemble(#[from] AssembleError),
}
