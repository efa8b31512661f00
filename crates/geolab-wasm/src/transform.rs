//! WASM bindings for the transform engine.
//!
//! Two levels are exposed: per-point functions that mirror the core
//! operations, and `visualize_*` calls that run parse, transform and assembly
//! in one step for the lab page.

use crate::log;
use crate::parse::{parse_error_to_js, parse_logged};
use crate::types::{JsPoint, JsTransformationResult};
use geolab_core::transform::{
    dilate as core_dilate, reflect_labeled, rotate as core_rotate, translate as core_translate,
};
use geolab_core::{AssembleError, Point, ReflectionAxis, TransformationResult, Transformation};
use wasm_bindgen::prelude::*;

/// Translate a point by `(tx, ty)`.
#[wasm_bindgen]
pub fn translate(x: f64, y: f64, tx: f64, ty: f64) -> JsPoint {
    core_translate(Point::new(x, y), tx, ty).into()
}

/// Rotate a point by `angle_degrees` (positive = counter-clockwise) about `(cx, cy)`.
#[wasm_bindgen]
pub fn rotate(x: f64, y: f64, angle_degrees: f64, cx: f64, cy: f64) -> JsPoint {
    core_rotate(Point::new(x, y), angle_degrees, cx, cy).into()
}

/// Dilate a point by factor `k` relative to `(cx, cy)`.
#[wasm_bindgen]
pub fn dilate(x: f64, y: f64, k: f64, cx: f64, cy: f64) -> JsPoint {
    core_dilate(Point::new(x, y), k, cx, cy).into()
}

/// Reflect a point across the axis named by `axis`.
///
/// Accepted labels are those returned by `reflection_axes()`: `"sumbu x"`,
/// `"sumbu y"`, `"garis y = x"` and `"garis y = -x"`. Any other label returns
/// the point unchanged and logs a console warning.
///
/// # Example (TypeScript)
/// ```typescript
/// const p = reflect(3, 5, "garis y = x"); // { x: 5, y: 3 }
/// ```
#[wasm_bindgen]
pub fn reflect(x: f64, y: f64, axis: &str) -> JsPoint {
    if ReflectionAxis::from_label(axis).is_none() {
        log::warn(&format!("Unknown reflection axis {:?}, point left unchanged", axis));
    }
    reflect_labeled(Point::new(x, y), axis).into()
}

/// Errors from the one-shot visualize calls.
#[derive(Debug)]
enum VisualizeError {
    Parse(geolab_core::ParseError),
    Assemble(AssembleError),
    UnknownAxis(String),
}

impl From<VisualizeError> for JsValue {
    fn from(err: VisualizeError) -> Self {
        match err {
            VisualizeError::Parse(e) => parse_error_to_js(e),
            VisualizeError::Assemble(e) => JsValue::from_str(&format!("Invalid result: {}", e)),
            VisualizeError::UnknownAxis(label) => {
                JsValue::from_str(&format!("Invalid reflection axis: {:?}", label))
            }
        }
    }
}

fn run(text: &str, transformation: Transformation) -> Result<TransformationResult, VisualizeError> {
    let original = parse_logged(text).map_err(VisualizeError::Parse)?;
    TransformationResult::compute(original, transformation).map_err(VisualizeError::Assemble)
}

fn reflection_for(label: &str) -> Result<Transformation, VisualizeError> {
    ReflectionAxis::from_label(label)
        .map(|axis| Transformation::Reflection { axis })
        .ok_or_else(|| {
            log::warn(&format!("Unknown reflection axis {:?}", label));
            VisualizeError::UnknownAxis(label.to_string())
        })
}

/// Parse `points` and translate the shape by `(tx, ty)`.
///
/// # Errors
/// Returns an `Invalid point list: ...` error string if `points` is malformed
#[wasm_bindgen]
pub fn visualize_translation(points: &str, tx: f64, ty: f64) -> Result<JsTransformationResult, JsValue> {
    let result = run(points, Transformation::Translation { tx, ty })?;
    Ok(JsTransformationResult::from_result(result))
}

/// Parse `points` and rotate the shape by `angle` degrees about `(cx, cy)`.
///
/// # Errors
/// Returns an `Invalid point list: ...` error string if `points` is malformed
#[wasm_bindgen]
pub fn visualize_rotation(
    points: &str,
    angle: f64,
    cx: f64,
    cy: f64,
) -> Result<JsTransformationResult, JsValue> {
    let result = run(points, Transformation::Rotation { angle, cx, cy })?;
    Ok(JsTransformationResult::from_result(result))
}

/// Parse `points` and dilate the shape by `k` relative to `(cx, cy)`.
///
/// # Errors
/// Returns an `Invalid point list: ...` error string if `points` is malformed
#[wasm_bindgen]
pub fn visualize_dilation(
    points: &str,
    k: f64,
    cx: f64,
    cy: f64,
) -> Result<JsTransformationResult, JsValue> {
    let result = run(points, Transformation::Dilation { k, cx, cy })?;
    Ok(JsTransformationResult::from_result(result))
}

/// Parse `points` and reflect the shape across the axis labeled `axis`.
///
/// # Errors
/// Returns an error string if `points` is malformed or `axis` is not one of
/// the labels returned by `reflection_axes()`
#[wasm_bindgen]
pub fn visualize_reflection(points: &str, axis: &str) -> Result<JsTransformationResult, JsValue> {
    let result = run(points, reflection_for(axis)?)?;
    Ok(JsTransformationResult::from_result(result))
}

/// Parse `points` and apply a transformation described by a JS object.
///
/// # Arguments
/// * `points` - Point list text
/// * `params` - One of:
///   `{ kind: "translation", tx, ty }`,
///   `{ kind: "rotation", angle, cx, cy }`,
///   `{ kind: "dilation", k, cx, cy }`,
///   `{ kind: "reflection", axis: "x_axis" | "y_axis" | "line_y_equals_x" | "line_y_equals_neg_x" }`
///
/// # Errors
/// Returns error if `params` cannot be deserialized or `points` is malformed
///
/// # Example (TypeScript)
/// ```typescript
/// const result = visualize("1,2; 3,4; 5,1", { kind: "rotation", angle: 90, cx: 0, cy: 0 });
/// ```
#[wasm_bindgen]
pub fn visualize(points: &str, params: JsValue) -> Result<JsTransformationResult, JsValue> {
    let transformation: Transformation = serde_wasm_bindgen::from_value(params)
        .map_err(|e| JsValue::from_str(&format!("Invalid transformation: {}", e)))?;
    let result = run(points, transformation)?;
    Ok(JsTransformationResult::from_result(result))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_visualize_with_params_object() {
        let params = serde_wasm_bindgen::to_value(&Transformation::Rotation {
            angle: 180.0,
            cx: 0.0,
            cy: 0.0,
        })
        .unwrap();

        let result = visualize("1,2; 3,4; 5,1", params).unwrap();
        assert_eq!(result.transformed_x().len(), 4);
        assert!((result.transformed_x()[0] + 1.0).abs() < 1e-9);
    }

    #[wasm_bindgen_test]
    fn test_visualize_invalid_params() {
        let result = visualize("1,2", JsValue::from_str("spin"));
        let err = result.err().and_then(|e| e.as_string()).unwrap_or_default();
        assert!(
            err.contains("Invalid transformation"),
            "Error should mention invalid transformation, got: {}",
            err
        );
    }

    #[wasm_bindgen_test]
    fn test_visualize_reflection_unknown_axis() {
        let result = visualize_reflection("1,2", "garis y = 2x");
        let err = result.err().and_then(|e| e.as_string()).unwrap_or_default();
        assert!(err.contains("Invalid reflection axis"), "got: {}", err);
    }

    #[wasm_bindgen_test]
    fn test_visualize_malformed_points() {
        let result = visualize_translation("1,2,3; 4,5", 1.0, 1.0);
        let err = result.err().and_then(|e| e.as_string()).unwrap_or_default();
        assert!(err.starts_with("Invalid point list"), "got: {}", err);
    }
}
