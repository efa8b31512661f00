//! Browser console logging.
//!
//! Console calls are only compiled for wasm32; on native targets (unit tests)
//! these functions do nothing.

#[cfg(target_arch = "wasm32")]
pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn warn(_message: &str) {}

#[cfg(target_arch = "wasm32")]
pub(crate) fn debug(message: &str) {
    web_sys::console::debug_1(&message.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn debug(_message: &str) {}
