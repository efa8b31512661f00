//! Coordinate table bindings.

use geolab_core::assemble::assemble_results as core_assemble;
use geolab_core::{Point, PointSequence};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Helper struct for deserializing JS points via serde.
#[derive(Deserialize)]
struct PointJs {
    x: f64,
    y: f64,
}

fn to_sequence(points: Vec<PointJs>) -> PointSequence {
    PointSequence::from_boundary(points.into_iter().map(|p| Point::new(p.x, p.y)).collect())
}

/// Build the coordinate table from plotted original and transformed points.
///
/// Both arrays are plotted boundaries: when an array's last point repeats its
/// first, that closing duplicate gets no table row. Unclosed arrays keep a row
/// for every point.
///
/// # Arguments
/// * `original` - Array of `{x: number, y: number}` objects
/// * `transformed` - Array of `{x: number, y: number}` objects, same length
///
/// # Returns
/// Array of `{ name, original_label, transformed_label, original, transformed }`
///
/// # Errors
/// Returns error if the arrays cannot be deserialized or differ in length
///
/// # Example (TypeScript)
/// ```typescript
/// const rows = assemble_results(
///   [{ x: 1, y: 2 }, { x: 3, y: 4 }, { x: 1, y: 2 }],
///   [{ x: 3, y: 3 }, { x: 5, y: 5 }, { x: 3, y: 3 }],
/// );
/// // rows.length === 2
/// ```
#[wasm_bindgen]
pub fn assemble_results(original: JsValue, transformed: JsValue) -> Result<JsValue, JsValue> {
    let original: Vec<PointJs> = serde_wasm_bindgen::from_value(original)
        .map_err(|e| JsValue::from_str(&format!("Invalid points: {}", e)))?;
    let transformed: Vec<PointJs> = serde_wasm_bindgen::from_value(transformed)
        .map_err(|e| JsValue::from_str(&format!("Invalid points: {}", e)))?;

    let records = core_assemble(&to_sequence(original), &to_sequence(transformed))
        .map_err(|e| JsValue::from_str(&format!("Invalid result: {}", e)))?;

    serde_wasm_bindgen::to_value(&records)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize records: {}", e)))
}
