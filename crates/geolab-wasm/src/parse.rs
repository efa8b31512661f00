//! Point list parsing bindings.

use crate::log;
use crate::types::JsPointSequence;
use geolab_core::parse::{parse_points as core_parse, ParseError};
use geolab_core::PointSequence;
use wasm_bindgen::prelude::*;

/// Parse point list text, logging rejected input to the console.
pub(crate) fn parse_logged(text: &str) -> Result<PointSequence, ParseError> {
    core_parse(text).inspect_err(|e| log::warn(&format!("Rejected point list {:?}: {}", text, e)))
}

/// Convert a parse error into the message shown by the UI.
pub(crate) fn parse_error_to_js(err: ParseError) -> JsValue {
    JsValue::from_str(&format!("Invalid point list: {}", err))
}

/// Parse a `X1,Y1; X2,Y2; ...` point list.
///
/// # Arguments
/// * `text` - Semicolon-separated groups of two comma-separated numbers
///
/// # Returns
/// The parsed sequence; more than one point is closed into a polygon.
///
/// # Errors
/// Returns an `Invalid point list: ...` error string if the text is malformed
///
/// # Example (TypeScript)
/// ```typescript
/// try {
///   const shape = parse_points("1,2; 3,4; 5,1");
///   console.log(shape.x, shape.y); // 4 points each, closed
/// } catch (e) {
///   showError(e);
/// }
/// ```
#[wasm_bindgen]
pub fn parse_points(text: &str) -> Result<JsPointSequence, JsValue> {
    parse_logged(text)
        .map(JsPointSequence::from_sequence)
        .map_err(parse_error_to_js)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_parse_points_invalid() {
        let result = parse_points("1,2; x,4");
        let err = result.err().and_then(|e| e.as_string()).unwrap_or_default();
        assert!(
            err.starts_with("Invalid point list"),
            "Error should mention invalid point list, got: {}",
            err
        );
    }

    #[wasm_bindgen_test]
    fn test_parse_points_empty() {
        assert!(parse_points("   ").is_err());
    }
}
