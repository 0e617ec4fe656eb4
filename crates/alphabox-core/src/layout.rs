//! Pixel layout configuration.
//!
//! A bitmap producer declares how its 32-bit words are laid out with a
//! [`PixelLayout`] value at construction time. The scanner only understands
//! one layout: premultiplied alpha-first in the default byte order, which
//! places the alpha channel in the least significant byte of each word.
//!
//! Everything else is rejected by [`check_layout`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mask selecting the alpha channel of a pixel word.
pub const ALPHA_MASK: u32 = 0xff;

/// Position and meaning of the alpha channel within a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaInfo {
    /// No alpha channel.
    None,
    /// Premultiplied alpha stored after the color channels.
    PremultipliedLast,
    /// Premultiplied alpha stored before the color channels.
    PremultipliedFirst,
    /// Straight alpha stored after the color channels.
    Last,
    /// Straight alpha stored before the color channels.
    First,
    /// Unused padding channel after the color channels.
    NoneSkipLast,
    /// Unused padding channel before the color channels.
    NoneSkipFirst,
    /// Alpha only, no color channels.
    Only,
}

/// Byte order of the 32-bit pixel words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteOrder {
    /// Host default order; the first channel lands in the lowest byte.
    #[default]
    Default,
    Little16,
    Little32,
    Big16,
    Big32,
}

/// Layout of a 32-bit pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelLayout {
    pub alpha: AlphaInfo,
    pub byte_order: ByteOrder,
}

impl PixelLayout {
    /// Premultiplied alpha-first in the default byte order.
    ///
    /// This is the only layout accepted by the scanner.
    pub const PREMULTIPLIED_FIRST: PixelLayout = PixelLayout {
        alpha: AlphaInfo::PremultipliedFirst,
        byte_order: ByteOrder::Default,
    };

    pub const fn new(alpha: AlphaInfo, byte_order: ByteOrder) -> Self {
        Self { alpha, byte_order }
    }

    /// Check whether the alpha channel occupies the lowest byte of each word.
    #[inline]
    pub fn has_low_byte_alpha(&self) -> bool {
        *self == Self::PREMULTIPLIED_FIRST
    }
}

impl Default for PixelLayout {
    fn default() -> Self {
        Self::PREMULTIPLIED_FIRST
    }
}

/// Error returned when a buffer does not use the scanner's layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    Mismatch {
        expected: PixelLayout,
        actual: PixelLayout,
    },
}

/// Verify that `layout` stores alpha in the low byte of each pixel.
pub fn check_layout(layout: PixelLayout) -> Result<(), LayoutError> {
    if layout.has_low_byte_alpha() {
        Ok(())
    } else {
        Err(LayoutError::Mismatch {
            expected: PixelLayout::PREMULTIPLIED_FIRST,
            actual: layout,
        })
    }
}

/// Extract the alpha channel of a premultiplied alpha-first pixel.
#[inline]
pub fn alpha_of(pixel: u32) -> u8 {
    (pixel & ALPHA_MASK) as u8
}
