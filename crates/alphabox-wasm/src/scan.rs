//! Bounding box WASM bindings.
//!
//! Two input forms are supported:
//!
//! - premultiplied alpha-first `u32` words (alpha in the low byte), with an
//!   explicit row stride, as produced by alphabox-core bitmaps
//! - straight RGBA8 bytes as returned by `CanvasRenderingContext2D.getImageData`
//!
//! The bindings always declare `PixelLayout::PREMULTIPLIED_FIRST`, so the
//! scanner's layout assertion cannot fire from JavaScript. Invalid buffer
//! geometry is reported as a thrown error instead.

use crate::types::JsRect;
use alphabox_core::{
    find_bounding_box_with as core_find, Bitmap, BufferError, PixelBuffer, PixelLayout, Rect,
    Strategy,
};
use wasm_bindgen::prelude::*;

fn to_js_error(err: BufferError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn scan_words(
    pixels: &[u32],
    width: u32,
    height: u32,
    stride: u32,
    strategy: Strategy,
) -> Result<Rect, BufferError> {
    let buffer = PixelBuffer::new(pixels, width, height, stride, PixelLayout::PREMULTIPLIED_FIRST)?;
    Ok(core_find(&buffer, strategy))
}

fn scan_rgba(rgba: &[u8], width: u32, height: u32) -> Result<Rect, BufferError> {
    let bitmap = Bitmap::from_rgba8(width, height, rgba)?;
    Ok(core_find(&bitmap.as_buffer(), Strategy::default()))
}

/// Find the bounding box of all pixels with non-zero alpha.
///
/// # Arguments
/// * `pixels` - Premultiplied alpha-first words as Uint32Array (alpha in the low byte)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `stride` - Pixels per row, at least `width`
///
/// # Errors
/// Throws if `stride < width` or `pixels` is shorter than `stride * height`.
#[wasm_bindgen]
pub fn find_bounding_box(
    pixels: &[u32],
    width: u32,
    height: u32,
    stride: u32,
) -> Result<JsRect, JsValue> {
    scan_words(pixels, width, height, stride, Strategy::default())
        .map(JsRect::from)
        .map_err(to_js_error)
}

/// Same as `find_bounding_box` with an explicit scan strategy.
///
/// # Arguments
/// * `strategy` - One of `"early_exit"`, `"counted"` or `"wide"`
///
/// # Example (TypeScript)
/// ```typescript
/// const bbox = find_bounding_box_with(words, 1000, 1000, 1000, "wide");
/// ```
#[wasm_bindgen]
pub fn find_bounding_box_with(
    pixels: &[u32],
    width: u32,
    height: u32,
    stride: u32,
    strategy: JsValue,
) -> Result<JsRect, JsValue> {
    let strategy: Strategy = serde_wasm_bindgen::from_value(strategy)
        .map_err(|e| JsValue::from_str(&format!("Invalid strategy: {}", e)))?;

    scan_words(pixels, width, height, stride, strategy)
        .map(JsRect::from)
        .map_err(to_js_error)
}

/// Find the bounding box of canvas `ImageData`.
///
/// # Arguments
/// * `pixels` - Straight RGBA8 bytes (4 bytes per pixel, row-major)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
/// Throws if `pixels.length != width * height * 4`.
#[wasm_bindgen]
pub fn find_bounding_box_rgba(pixels: &[u8], width: u32, height: u32) -> Result<JsRect, JsValue> {
    scan_rgba(pixels, width, height)
        .map(JsRect::from)
        .map_err(to_js_error)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn single_pixel_words() -> Vec<u32> {
        let mut words = vec![0u32; 25];
        words[4 * 5 + 4] = 0xff;
        words
    }

    #[wasm_bindgen_test]
    fn test_strategy_from_string() {
        let words = single_pixel_words();
        for name in ["early_exit", "counted", "wide"] {
            let strategy = serde_wasm_bindgen::to_value(name).unwrap();
            let rect = find_bounding_box_with(&words, 5, 5, 5, strategy).unwrap();
            assert_eq!(rect.to_rect(), Rect::new(4, 4, 1, 1));
        }
    }

    #[wasm_bindgen_test]
    fn test_unknown_strategy_rejected() {
        let words = single_pixel_words();
        let strategy = serde_wasm_bindgen::to_value("diagonal").unwrap();
        assert!(find_bounding_box_with(&words, 5, 5, 5, strategy).is_err());
    }

    #[wasm_bindgen_test]
    fn test_bad_stride_throws() {
        let words = single_pixel_words();
        assert!(find_bounding_box(&words, 5, 5, 4).is_err());
    }
}
