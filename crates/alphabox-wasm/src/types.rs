//! WASM-compatible wrapper types.

use alphabox_core::Rect;
use wasm_bindgen::prelude::*;

/// A bounding box result for JavaScript.
///
/// An empty rectangle (all fields zero) means the image has no visible
/// pixels. It does not mean "the whole image".
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsRect {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

#[wasm_bindgen]
impl JsRect {
    /// Left edge in pixels
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Top edge in pixels
    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u32 {
        self.y
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when no pixel with non-zero alpha was found
    #[wasm_bindgen(getter)]
    pub fn is_empty(&self) -> bool {
        self.to_rect().is_empty()
    }
}

impl JsRect {
    pub(crate) fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<Rect> for JsRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}
