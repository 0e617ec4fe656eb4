//! Content bounding box scanning.
//!
//! [`find_bounding_box`] returns the smallest rectangle containing every
//! pixel whose alpha byte is non-zero. The bounds are found in four steps:
//!
//! 1. `top`: first non-empty row, scanning down from row 0
//! 2. `bottom`: number of empty rows at the end, scanning up
//! 3. `left`: smallest first-opaque column over the row band
//! 4. `right`: smallest distance from the last opaque column to the edge
//!
//! A fully transparent image is detected in step 1 and returns
//! [`Rect::EMPTY`] without touching the column bounds.
//!
//! # Strategies
//!
//! The row scans come in interchangeable flavors selected by [`Strategy`].
//! They differ only in how a row is walked and always return the same
//! rectangle for the same buffer.

mod counted;
mod early_exit;
#[cfg(feature = "parallel")]
mod parallel;
mod wide;

use crate::buffer::PixelBuffer;
use crate::layout::check_layout;
use crate::rect::Rect;
use serde::{Deserialize, Serialize};

pub use counted::Counted;
pub use early_exit::EarlyExit;
pub use wide::Wide;

/// Per-row search used by the sequential scanners.
///
/// `row` holds only the visible pixels of one image row.
pub trait RowScanner {
    /// Column of the first pixel with non-zero alpha.
    fn first_opaque(row: &[u32]) -> Option<usize>;

    /// Column of the last pixel with non-zero alpha.
    fn last_opaque(row: &[u32]) -> Option<usize>;

    /// Check whether every pixel in `row` is fully transparent.
    #[inline]
    fn is_empty_row(row: &[u32]) -> bool {
        Self::first_opaque(row).is_none()
    }
}

/// Row scan implementation used by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Iterator search that stops at the first opaque pixel.
    #[default]
    EarlyExit,
    /// Explicit bounded counter loops.
    Counted,
    /// Tests several pixels at once before narrowing down.
    Wide,
    /// Splits row searches across the rayon thread pool.
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Strategy {
    /// Every strategy compiled into this build.
    #[cfg(not(feature = "parallel"))]
    pub const ALL: &'static [Strategy] = &[Strategy::EarlyExit, Strategy::Counted, Strategy::Wide];

    /// Every strategy compiled into this build.
    #[cfg(feature = "parallel")]
    pub const ALL: &'static [Strategy] = &[
        Strategy::EarlyExit,
        Strategy::Counted,
        Strategy::Wide,
        Strategy::Parallel,
    ];
}

/// Find the content bounding box of `buffer` with the default strategy.
///
/// Returns [`Rect::EMPTY`] for zero-sized or fully transparent buffers.
///
/// # Panics
///
/// Panics if the buffer's layout does not store alpha in the low byte of
/// each pixel (see [`check_layout`]). Scanning such a buffer would produce
/// a wrong box, so this is treated as a caller bug.
pub fn find_bounding_box(buffer: &PixelBuffer<'_>) -> Rect {
    find_bounding_box_with(buffer, Strategy::default())
}

/// Find the content bounding box of `buffer` using `strategy`.
///
/// # Panics
///
/// Same as [`find_bounding_box`].
pub fn find_bounding_box_with(buffer: &PixelBuffer<'_>, strategy: Strategy) -> Rect {
    if let Err(err) = check_layout(buffer.layout()) {
        panic!("{err}");
    }

    if buffer.is_empty() {
        return Rect::EMPTY;
    }

    let rect = match strategy {
        Strategy::EarlyExit => scan_rows::<EarlyExit>(buffer),
        Strategy::Counted => scan_rows::<Counted>(buffer),
        Strategy::Wide => scan_rows::<Wide>(buffer),
        #[cfg(feature = "parallel")]
        Strategy::Parallel => parallel::scan_rows(buffer),
    };

    log::trace!(
        "{strategy:?} scan of {}x{} buffer (stride {}): {rect:?}",
        buffer.width(),
        buffer.height(),
        buffer.stride()
    );

    rect
}

/// Sequential four-bound scan shared by every [`RowScanner`].
fn scan_rows<S: RowScanner>(buffer: &PixelBuffer<'_>) -> Rect {
    let width = buffer.width() as usize;
    let height = buffer.height() as usize;

    let Some(top) = (0..height).find(|&y| !S::is_empty_row(buffer.row(y))) else {
        return Rect::EMPTY;
    };

    // Row `top` is non-empty, so the upward search stops there at the latest.
    let last = (top..height)
        .rev()
        .find(|&y| !S::is_empty_row(buffer.row(y)))
        .unwrap_or(top);
    let bottom = height - 1 - last;

    let band = top..height - bottom;

    let left = band
        .clone()
        .filter_map(|y| S::first_opaque(buffer.row(y)))
        .min()
        .unwrap_or(width);

    let right = band
        .filter_map(|y| S::last_opaque(buffer.row(y)))
        .map(|x| width - 1 - x)
        .min()
        .unwrap_or(width);

    Rect::new(
        left as u32,
        top as u32,
        (width - left - right) as u32,
        (height - top - bottom) as u32,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
