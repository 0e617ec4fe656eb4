//! alphabox WASM - WebAssembly bindings for alphabox
//!
//! This crate exposes the alphabox-core bounding box scanner to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for the result rectangle
//! - `scan` - Bounding box bindings for premultiplied words and canvas RGBA data
//! - `console` - `log` backend that writes to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { find_bounding_box_rgba } from '@alphabox/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const bbox = find_bounding_box_rgba(data.data, data.width, data.height);
//! if (!bbox.is_empty) {
//!   console.log(`content at ${bbox.x},${bbox.y} ${bbox.width}x${bbox.height}`);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod console;
mod scan;
mod types;

pub use scan::{find_bounding_box, find_bounding_box_rgba, find_bounding_box_with};
pub use types::JsRect;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console::init();
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
}
