//! Borrowed pixel buffer views.
//!
//! A [`PixelBuffer`] is a read-only window over 32-bit pixel words. Rows are
//! `stride` pixels apart and only the first `width` pixels of each row are
//! part of the image; padding after them is never read.

use crate::layout::{alpha_of, PixelLayout};
use thiserror::Error;

/// Error types for buffer construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Rows would overlap.
    #[error("Invalid stride {stride} for width {width}")]
    InvalidStride { width: u32, stride: u32 },

    /// The slice cannot hold `stride * height` pixels.
    #[error("Pixel buffer too short: expected at least {expected} pixels, got {actual}")]
    TooShort { expected: usize, actual: usize },

    /// `stride * height` does not fit in memory.
    #[error("Pixel buffer size overflows usize")]
    SizeOverflow,

    /// RGBA byte data does not match `width * height * 4`.
    #[error("RGBA data length mismatch: expected {expected} bytes, got {actual}")]
    RgbaLengthMismatch { expected: usize, actual: usize },
}

/// Minimum number of pixels needed for a `stride x height` buffer.
pub(crate) fn required_len(stride: u32, height: u32) -> Result<usize, BufferError> {
    (stride as usize)
        .checked_mul(height as usize)
        .ok_or(BufferError::SizeOverflow)
}

/// Immutable, strided view over premultiplied 32-bit pixels.
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    pixels: &'a [u32],
    width: u32,
    height: u32,
    stride: u32,
    layout: PixelLayout,
}

impl<'a> PixelBuffer<'a> {
    /// Create a view over `pixels`.
    ///
    /// # Errors
    ///
    /// Fails when `stride < width` or when `pixels` holds fewer than
    /// `stride * height` words. Zero `width` or `height` is accepted.
    pub fn new(
        pixels: &'a [u32],
        width: u32,
        height: u32,
        stride: u32,
        layout: PixelLayout,
    ) -> Result<Self, BufferError> {
        if stride < width {
            return Err(BufferError::InvalidStride { width, stride });
        }

        let expected = required_len(stride, height)?;
        if pixels.len() < expected {
            return Err(BufferError::TooShort {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
            stride,
            layout,
        })
    }

    /// Create a view over tightly packed rows (`stride == width`).
    pub fn packed(
        pixels: &'a [u32],
        width: u32,
        height: u32,
        layout: PixelLayout,
    ) -> Result<Self, BufferError> {
        Self::new(pixels, width, height, width, layout)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Check if the view covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The `width` visible pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u32] {
        assert!(y < self.height as usize, "row index out of bounds");
        let start = y * self.stride as usize;
        &self.pixels[start..start + self.width as usize]
    }

    /// Pixel word at `(row, col)`, or `None` outside the image.
    pub fn pixel_at(&self, row: u32, col: u32) -> Option<u32> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let idx = row as usize * self.stride as usize + col as usize;
        self.pixels.get(idx).copied()
    }

    /// Alpha channel at `(row, col)`, or `None` outside the image.
    pub fn alpha_at(&self, row: u32, col: u32) -> Option<u8> {
        self.pixel_at(row, col).map(alpha_of)
    }
}
