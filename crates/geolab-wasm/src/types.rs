//! WASM-compatible wrapper types for points and transformation results.
//!
//! Coordinates cross the boundary as parallel `Float64Array`s (`x` and `y`),
//! which is what plotting libraries take directly. Structured rows such as
//! the coordinate table go through serde_wasm_bindgen.

use geolab_core::{Point, PointSequence, TransformationResult};
use wasm_bindgen::prelude::*;

/// A single point for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsPoint {
    x: f64,
    y: f64,
}

#[wasm_bindgen]
impl JsPoint {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> JsPoint {
        JsPoint { x, y }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<Point> for JsPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Split a point list into parallel x and y vectors.
fn split_coords(points: &[Point]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}

/// A parsed point list for JavaScript.
///
/// `x`/`y` hold the plotted boundary, including the closing point of a
/// closed shape.
#[wasm_bindgen]
pub struct JsPointSequence {
    inner: PointSequence,
}

#[wasm_bindgen]
impl JsPointSequence {
    /// Boundary x coordinates.
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> Vec<f64> {
        split_coords(&self.inner.boundary()).0
    }

    /// Boundary y coordinates.
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> Vec<f64> {
        split_coords(&self.inner.boundary()).1
    }

    /// Whether the boundary ends with a copy of the first vertex.
    #[wasm_bindgen(getter)]
    pub fn closed(&self) -> bool {
        self.inner.is_closed()
    }

    /// Number of logical vertices (without the closing point).
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.inner.len()
    }

    /// Number of plotted points (with the closing point).
    #[wasm_bindgen(getter)]
    pub fn boundary_length(&self) -> usize {
        self.inner.boundary().len()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPointSequence {
    pub(crate) fn from_sequence(inner: PointSequence) -> Self {
        Self { inner }
    }
}

/// The outcome of one transformation, ready for plotting.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const result = visualize_translation("1,2; 3,4; 5,1", 2, 1);
/// chart.line(result.original_x, result.original_y, { label: 'Asli' });
/// chart.line(result.transformed_x, result.transformed_y, { label: 'Transformasi' });
/// chart.limits(-result.limit, result.limit);
/// ```
#[wasm_bindgen]
pub struct JsTransformationResult {
    inner: TransformationResult,
}

#[wasm_bindgen]
impl JsTransformationResult {
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.inner.title.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn formula(&self) -> String {
        self.inner.formula.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn description(&self) -> String {
        self.inner.description.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn original_x(&self) -> Vec<f64> {
        split_coords(&self.inner.original.boundary()).0
    }

    #[wasm_bindgen(getter)]
    pub fn original_y(&self) -> Vec<f64> {
        split_coords(&self.inner.original.boundary()).1
    }

    #[wasm_bindgen(getter)]
    pub fn transformed_x(&self) -> Vec<f64> {
        split_coords(&self.inner.transformed.boundary()).0
    }

    #[wasm_bindgen(getter)]
    pub fn transformed_y(&self) -> Vec<f64> {
        split_coords(&self.inner.transformed.boundary()).1
    }

    /// Axis limit; both axes span `[-limit, limit]`.
    #[wasm_bindgen(getter)]
    pub fn limit(&self) -> f64 {
        self.inner.bounds.limit
    }

    /// Table labels for the original vertices, e.g. `A1 (1.0, 2.0)`.
    #[wasm_bindgen(getter)]
    pub fn original_labels(&self) -> Vec<String> {
        self.inner
            .records
            .iter()
            .map(|r| r.original_label.clone())
            .collect()
    }

    /// Table labels for the transformed vertices, e.g. `A1′ (3.0, 3.0)`.
    #[wasm_bindgen(getter)]
    pub fn transformed_labels(&self) -> Vec<String> {
        self.inner
            .records
            .iter()
            .map(|r| r.transformed_label.clone())
            .collect()
    }

    /// The coordinate table as an array of record objects.
    ///
    /// # Errors
    /// Returns error if the records cannot be serialized
    pub fn records(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.records)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize records: {}", e)))
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsTransformationResult {
    pub(crate) fn from_result(inner: TransformationResult) -> Self {
        Self { inner }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &TransformationResult {
        &self.inner
    }
}
