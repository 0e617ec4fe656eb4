//! Owned bitmaps that produce [`PixelBuffer`] views.
//!
//! A [`Bitmap`] allocates its pixel storage and records the [`PixelLayout`]
//! it was created with. Layout is chosen by the caller at construction time;
//! there is no process-wide color space or bitmap configuration.
//!
//! Only solid fills are supported. They exist to set up backgrounds and
//! test content, not as a drawing API.
//!
//! # Pixel Format
//!
//! Each pixel is one `u32` in premultiplied alpha-first order:
//!
//! ```text
//! bits 0..8   alpha
//! bits 8..16  red   (premultiplied)
//! bits 16..24 green (premultiplied)
//! bits 24..32 blue  (premultiplied)
//! ```

use crate::buffer::{required_len, BufferError, PixelBuffer};
use crate::layout::PixelLayout;
use crate::rect::Rect;

/// Pack straight (non-premultiplied) RGBA8 into an alpha-first pixel word.
///
/// Color channels are scaled by alpha and rounded to nearest.
#[inline]
pub fn pack_premultiplied(r: u8, g: u8, b: u8, a: u8) -> u32 {
    let premul = |c: u8| (c as u32 * a as u32 + 127) / 255;
    a as u32 | premul(r) << 8 | premul(g) << 16 | premul(b) << 24
}

/// An owned 32-bit pixel bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    stride: u32,
    layout: PixelLayout,
    pixels: Vec<u32>,
}

impl Bitmap {
    /// Fully transparent pixel.
    pub const TRANSPARENT: u32 = 0;

    /// Fully opaque black pixel.
    pub const OPAQUE_BLACK: u32 = 0x0000_00ff;

    /// Create a fully transparent bitmap with packed rows.
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Self {
        Self::with_background(width, height, layout, Self::TRANSPARENT)
    }

    /// Create a bitmap with every pixel set to `background`.
    pub fn with_background(width: u32, height: u32, layout: PixelLayout, background: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            stride: width,
            layout,
            pixels: vec![background; len],
        }
    }

    /// Create a fully transparent bitmap whose rows are `stride` pixels apart.
    ///
    /// # Errors
    ///
    /// Fails if `stride < width` or the buffer size overflows.
    pub fn with_stride(
        width: u32,
        height: u32,
        stride: u32,
        layout: PixelLayout,
    ) -> Result<Self, BufferError> {
        if stride < width {
            return Err(BufferError::InvalidStride { width, stride });
        }
        let len = required_len(stride, height)?;
        Ok(Self {
            width,
            height,
            stride,
            layout,
            pixels: vec![Self::TRANSPARENT; len],
        })
    }

    /// Take ownership of existing pixel words.
    ///
    /// # Errors
    ///
    /// Fails if `stride < width` or `pixels` holds fewer than
    /// `stride * height` words.
    pub fn from_pixels(
        pixels: Vec<u32>,
        width: u32,
        height: u32,
        stride: u32,
        layout: PixelLayout,
    ) -> Result<Self, BufferError> {
        PixelBuffer::new(&pixels, width, height, stride, layout)?;
        Ok(Self {
            width,
            height,
            stride,
            layout,
            pixels,
        })
    }

    /// Pack straight RGBA8 bytes (4 bytes per pixel, row-major) into a
    /// premultiplied alpha-first bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::RgbaLengthMismatch`] if `rgba` is not exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self, BufferError> {
        let expected = required_len(width, height)?
            .checked_mul(4)
            .ok_or(BufferError::SizeOverflow)?;
        if rgba.len() != expected {
            return Err(BufferError::RgbaLengthMismatch {
                expected,
                actual: rgba.len(),
            });
        }

        log::debug!("packing {width}x{height} RGBA8 image into premultiplied bitmap");

        let pixels = rgba
            .chunks_exact(4)
            .map(|px| pack_premultiplied(px[0], px[1], px[2], px[3]))
            .collect();

        Ok(Self {
            width,
            height,
            stride: width,
            layout: PixelLayout::PREMULTIPLIED_FIRST,
            pixels,
        })
    }

    /// Convert an `image::RgbaImage` into a premultiplied alpha-first bitmap.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        log::debug!("packing {width}x{height} RgbaImage into premultiplied bitmap");

        let pixels = img
            .pixels()
            .map(|&image::Rgba([r, g, b, a])| pack_premultiplied(r, g, b, a))
            .collect();

        Self {
            width,
            height,
            stride: width,
            layout: PixelLayout::PREMULTIPLIED_FIRST,
            pixels,
        }
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

    /// Raw pixel storage, including row padding.
    pub fn data(&self) -> &[u32] {
        &self.pixels
    }

    /// Borrow the bitmap as a scanner input.
    pub fn as_buffer(&self) -> PixelBuffer<'_> {
        // Construction already guarantees stride >= width and the length.
        PixelBuffer::new(&self.pixels, self.width, self.height, self.stride, self.layout)
            .unwrap_or_else(|err| unreachable!("bitmap invariants violated: {err}"))
    }

    /// Pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    /// Set the pixel at `(x, y)`. Writes outside the bitmap are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: u32) {
        if let Some(idx) = self.index(x, y) {
            self.pixels[idx] = pixel;
        }
    }

    /// Replace every pixel inside `rect` with `pixel` (copy blend mode).
    ///
    /// The rectangle is clipped to the bitmap bounds.
    pub fn fill_rect(&mut self, rect: Rect, pixel: u32) {
        let x0 = rect.x.min(self.width) as usize;
        let y0 = rect.y.min(self.height) as usize;
        let x1 = rect.right().min(self.width) as usize;
        let y1 = rect.bottom().min(self.height) as usize;
        let stride = self.stride as usize;

        for y in y0..y1 {
            let start = y * stride;
            self.pixels[start + x0..start + x1].fill(pixel);
        }
    }

    /// Fill the whole bitmap with `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.fill_rect(Rect::new(0, 0, self.width, self.height), pixel);
    }

    /// Write `pixel` into every padding slot past `width` in each row.
    pub fn fill_padding(&mut self, pixel: u32) {
        let width = self.width as usize;
        let stride = self.stride as usize;
        if stride == width || stride == 0 {
            return;
        }
        for row in self.pixels.chunks_exact_mut(stride) {
            row[width..].fill(pixel);
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.stride as usize + x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{AlphaInfo, ByteOrder};

    #[test]
    fn test_new_is_transparent() {
        let bmp = Bitmap::new(8, 4, PixelLayout::default());
        assert_eq!(bmp.data().len(), 32);
        assert!(bmp.data().iter().all(|&p| p == Bitmap::TRANSPARENT));
        assert_eq!(bmp.stride(), 8);
    }

    #[test]
    fn test_background_fill() {
        let bmp = Bitmap::with_background(3, 3, PixelLayout::default(), Bitmap::OPAQUE_BLACK);
        assert!(bmp.data().iter().all(|&p| p == Bitmap::OPAQUE_BLACK));
    }

    #[test]
    fn test_layout_is_carried_to_buffer() {
        let layout = PixelLayout::new(AlphaInfo::PremultipliedLast, ByteOrder::Big32);
        let bmp = Bitmap::new(2, 2, layout);
        assert_eq!(bmp.layout(), layout);
        assert_eq!(bmp.as_buffer().layout(), layout);
    }

    #[test]
    fn test_fill_rect_region() {
        let mut bmp = Bitmap::new(10, 10, PixelLayout::default());
        bmp.fill_rect(Rect::new(2, 3, 4, 5), Bitmap::OPAQUE_BLACK);

        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..6).contains(&x) && (3..8).contains(&y);
                let expected = if inside { Bitmap::OPAQUE_BLACK } else { 0 };
                assert_eq!(bmp.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut bmp = Bitmap::new(4, 4, PixelLayout::default());
        bmp.fill_rect(Rect::new(2, 2, 100, 100), Bitmap::OPAQUE_BLACK);
        assert_eq!(bmp.pixel(3, 3), Some(Bitmap::OPAQUE_BLACK));
        assert_eq!(bmp.pixel(1, 1), Some(0));

        // Entirely outside: no-op
        bmp.fill_rect(Rect::new(10, 10, 5, 5), 0x42);
        assert!(!bmp.data().contains(&0x42));
    }

    #[test]
    fn test_set_pixel_outside_ignored() {
        let mut bmp = Bitmap::new(2, 2, PixelLayout::default());
        bmp.set_pixel(2, 0, 0xff);
        bmp.set_pixel(0, 2, 0xff);
        assert!(bmp.data().iter().all(|&p| p == 0));

        bmp.set_pixel(1, 1, 0xff);
        assert_eq!(bmp.pixel(1, 1), Some(0xff));
        assert_eq!(bmp.pixel(5, 5), None);
    }

    #[test]
    fn test_with_stride_and_padding() {
        let mut bmp = Bitmap::with_stride(3, 2, 5, PixelLayout::default()).unwrap();
        assert_eq!(bmp.data().len(), 10);

        bmp.fill_padding(0xff);
        assert_eq!(bmp.data(), &[0, 0, 0, 0xff, 0xff, 0, 0, 0, 0xff, 0xff]);

        // Visible pixels untouched, padding not part of rows
        let buf = bmp.as_buffer();
        assert_eq!(buf.row(0), &[0, 0, 0]);
        assert_eq!(buf.row(1), &[0, 0, 0]);
    }

    #[test]
    fn test_with_stride_rejects_narrow_stride() {
        let err = Bitmap::with_stride(4, 2, 3, PixelLayout::default()).unwrap_err();
        assert_eq!(err, BufferError::InvalidStride { width: 4, stride: 3 });
    }

    #[test]
    fn test_pack_premultiplied() {
        assert_eq!(pack_premultiplied(0, 0, 0, 255), Bitmap::OPAQUE_BLACK);
        assert_eq!(pack_premultiplied(255, 255, 255, 255), 0xffff_ffff);
        assert_eq!(pack_premultiplied(255, 255, 255, 0), 0);
        // 200 * 128 / 255 = 100.39 -> 100
        assert_eq!(pack_premultiplied(200, 0, 0, 128), 0x0000_6480);
    }

    #[test]
    fn test_from_rgba8() {
        let rgba = [
            255, 0, 0, 255, // opaque red
            10, 20, 30, 0, // transparent with stray color
        ];
        let bmp = Bitmap::from_rgba8(2, 1, &rgba).unwrap();
        assert_eq!(bmp.layout(), PixelLayout::PREMULTIPLIED_FIRST);
        assert_eq!(bmp.pixel(0, 0), Some(0x0000_ffff));
        assert_eq!(bmp.pixel(1, 0), Some(0));
    }

    #[test]
    fn test_from_rgba8_length_mismatch() {
        let err = Bitmap::from_rgba8(2, 2, &[0u8; 15]).unwrap_err();
        assert_eq!(
            err,
            BufferError::RgbaLengthMismatch {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_from_rgba_image_matches_raw() {
        let mut img = image::RgbaImage::new(3, 2);
        img.put_pixel(1, 1, image::Rgba([40, 80, 120, 200]));

        let from_image = Bitmap::from_rgba_image(&img);
        let from_raw = Bitmap::from_rgba8(3, 2, img.as_raw()).unwrap();
        assert_eq!(from_image, from_raw);
        assert_eq!(from_image.pixel(1, 1), Some(pack_premultiplied(40, 80, 120, 200)));
    }
}
