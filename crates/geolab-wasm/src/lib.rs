//! GeoLab WASM - WebAssembly bindings for GeoLab
//!
//! This crate exposes the geolab-core transformation functions to the
//! browser UI that renders the lab page and plots.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for points and results
//! - `parse` - Point list parsing bindings
//! - `transform` - Per-point transforms and the one-shot visualize calls
//! - `assemble` - Coordinate table bindings
//! - `config` - Start-up configuration and picker options
//!
//! # Usage
//!
//! ```typescript
//! import init, { visualize_rotation } from '@geolab/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const result = visualize_rotation("1,2; 3,4; 5,1", 90, 0, 0);
//! plot(result.original_x, result.original_y, result.transformed_x, result.transformed_y);
//! console.log(result.formula);
//! ```

use wasm_bindgen::prelude::*;

mod assemble;
mod config;
mod log;
mod parse;
mod transform;
mod types;

// Re-export public types
pub use assemble::assemble_results;
pub use config::{default_config, reflection_axes, transform_kinds};
pub use parse::parse_points;
pub use transform::{
    dilate, reflect, rotate, translate, visualize, visualize_dilation, visualize_reflection,
    visualize_rotation, visualize_translation,
};
pub use types::{JsPoint, JsPointSequence, JsTransformationResult};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    log::debug(&format!("GeoLab WASM {} loaded", version()));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_init_on_native() {
        // Console logging is compiled out off-wasm
        init();
    }
}
