//! Result assembly: pairing each original vertex with its image.
//!
//! The coordinate table lists every logical vertex once, labeled `A1`, `A2`,
//! ... for the original and `A1′`, `A2′`, ... for the image. The closing
//! point of a closed shape is plotted but never listed, so for a triangle the
//! table has three rows while each plotted boundary has four points.

use crate::describe::format_point;
use crate::parse::parse_points;
use crate::shape::{PlotBounds, PointSequence};
use crate::transform::Transformation;
use crate::{LabError, Point};
use thiserror::Error;

/// Prime mark appended to the label of a transformed vertex.
const PRIME: char = '\u{2032}';

/// Error raised when original and transformed sequences cannot be paired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error("Sequence length mismatch: {original} original points, {transformed} transformed points")]
    LengthMismatch { original: usize, transformed: usize },
}

/// One row of the coordinate table.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResultRecord {
    /// Vertex label without the prime, e.g. `A1`.
    pub name: String,
    /// Original vertex formatted as `A1 (1.0, 2.0)`.
    pub original_label: String,
    /// Transformed vertex formatted as `A1′ (3.0, 3.0)`.
    pub transformed_label: String,
    pub original: Point,
    pub transformed: Point,
}

impl ResultRecord {
    fn new(index: usize, original: Point, transformed: Point) -> Self {
        let name = format!("A{}", index + 1);
        Self {
            original_label: format!("{} {}", name, format_point(&original)),
            transformed_label: format!("{}{} {}", name, PRIME, format_point(&transformed)),
            name,
            original,
            transformed,
        }
    }
}

/// Build the coordinate table for an original shape and its image.
///
/// # Errors
///
/// Returns `AssembleError::LengthMismatch` if the plotted boundaries of the
/// two sequences differ in length.
pub fn assemble_results(
    original: &PointSequence,
    transformed: &PointSequence,
) -> Result<Vec<ResultRecord>, AssembleError> {
    let (original_len, transformed_len) = (original.boundary().len(), transformed.boundary().len());
    if original_len != transformed_len {
        return Err(AssembleError::LengthMismatch {
            original: original_len,
            transformed: transformed_len,
        });
    }

    Ok(original
        .vertices()
        .iter()
        .zip(transformed.vertices())
        .enumerate()
        .map(|(i, (&o, &t))| ResultRecord::new(i, o, t))
        .collect())
}

/// Everything the presentation layer needs to show one transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformationResult {
    pub transformation: Transformation,
    pub original: PointSequence,
    pub transformed: PointSequence,
    pub records: Vec<ResultRecord>,
    pub bounds: PlotBounds,
    pub title: String,
    pub formula: String,
    pub description: String,
}

impl TransformationResult {
    /// Apply `transformation` to an already parsed shape.
    pub fn compute(
        original: PointSequence,
        transformation: Transformation,
    ) -> Result<Self, AssembleError> {
        let transformed = transformation.apply_to(&original);
        let records = assemble_results(&original, &transformed)?;
        let bounds = PlotBounds::enclosing(&original.boundary(), &transformed.boundary());

        Ok(Self {
            title: transformation.title(),
            formula: transformation.formula(),
            description: transformation.description(),
            transformation,
            original,
            transformed,
            records,
            bounds,
        })
    }
}

/// Parse `text`, apply `transformation` and assemble the result.
///
/// # Errors
///
/// Returns `LabError::Parse` if the point list is malformed.
pub fn visualize(text: &str, transformation: &Transformation) -> Result<TransformationResult, LabError> {
    let original = parse_points(text)?;
    Ok(TransformationResult::compute(original, *transformation)?)
}
