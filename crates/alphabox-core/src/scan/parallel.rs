//! Row scans split across the rayon thread pool.
//!
//! `top` and `bottom` use ordered searches (`position_first` and
//! `position_last`), and the column bounds are a min/min reduction over the
//! row band, so the result never depends on scheduling.

use super::{EarlyExit, RowScanner};
use crate::buffer::PixelBuffer;
use crate::rect::Rect;
use rayon::prelude::*;

pub(super) fn scan_rows(buffer: &PixelBuffer<'_>) -> Rect {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;
    let non_empty = |y: usize| !EarlyExit::is_empty_row(buffer.row(y));

    let Some(top) = (0..height).into_par_iter().position_first(non_empty) else {
        return Rect::EMPTY;
    };

    let last = (top..height)
        .into_par_iter()
        .position_last(non_empty)
        .map_or(top, |i| top + i);
    let bottom = height - 1 - last;

    let (left, right) = (top..height - bottom)
        .into_par_iter()
        .map(|y| {
            let row = buffer.row(y);
            let left = EarlyExit::first_opaque(row).unwrap_or(width);
            let right = EarlyExit::last_opaque(row).map_or(width, |x| width - 1 - x);
            (left, right)
        })
        .reduce(
            || (width, width),
            |(l1, r1), (l2, r2)| (l1.min(l2), r1.min(r2)),
        );

    Rect::new(
        left as u32,
        top as u32,
        (width - left - right) as u32,
        (height - top - bottom) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::Bitmap;
    use crate::layout::PixelLayout;

    #[test]
    fn test_matches_sequential_on_tall_image() {
        let mut bmp = Bitmap::new(300, 2000, PixelLayout::PREMULTIPLIED_FIRST);
        bmp.set_pixel(150, 17, 0xff);
        bmp.set_pixel(3, 900, 0xff);
        bmp.set_pixel(299, 1500, 0xff);
        bmp.set_pixel(40, 1999, 0xff);

        let buf = bmp.as_buffer();
        assert_eq!(scan_rows(&buf), super::super::scan_rows::<EarlyExit>(&buf));
        assert_eq!(scan_rows(&buf), Rect::new(3, 17, 297, 1983));
    }

    #[test]
    fn test_transparent_image() {
        let bmp = Bitmap::new(64, 64, PixelLayout::PREMULTIPLIED_FIRST);
        assert_eq!(scan_rows(&bmp.as_buffer()), Rect::EMPTY);
    }
}
