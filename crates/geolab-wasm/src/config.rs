//! Start-up configuration and picker options for the lab page.

use geolab_core::{LabConfig, ReflectionAxis, TransformKind};
use wasm_bindgen::prelude::*;

/// Get the default lab configuration as a JS object.
///
/// Called once when the page starts; the UI builds its controls from the
/// returned page title, layout, default point list and parameter ranges.
///
/// # Errors
/// Returns error if the configuration cannot be serialized
///
/// # Example (TypeScript)
/// ```typescript
/// const config = default_config();
/// document.title = config.page_title;
/// slider.min = config.rotation.angle.min;
/// ```
#[wasm_bindgen]
pub fn default_config() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&LabConfig::default())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize config: {}", e)))
}

/// Display names for the transformation picker, in order.
#[wasm_bindgen]
pub fn transform_kinds() -> js_sys::Array {
    TransformKind::ALL
        .iter()
        .map(|kind| JsValue::from_str(kind.name()))
        .collect()
}

/// Labels for the reflection axis picker, in order.
///
/// These are the labels accepted by `reflect` and `visualize_reflection`.
#[wasm_bindgen]
pub fn reflection_axes() -> js_sys::Array {
    ReflectionAxis::ALL
        .iter()
        .map(|axis| JsValue::from_str(axis.label()))
        .collect()
}
