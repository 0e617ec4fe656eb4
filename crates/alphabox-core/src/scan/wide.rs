//! Chunked row scan.
//!
//! Rows are tested [`LANES`] pixels at a time by OR-ing the words of a chunk
//! and checking the alpha byte of the result. Only the first chunk with a hit
//! is searched pixel by pixel. The fixed-size chunk loop is a good target for
//! auto-vectorization and stays in safe, bounds-checked slice code.

use super::RowScanner;
use crate::layout::ALPHA_MASK;

/// Number of pixels tested per step.
const LANES: usize = 8;

/// Tests whole chunks before narrowing down to a single pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wide;

#[inline]
fn any_alpha(chunk: &[u32]) -> bool {
    chunk.iter().fold(0, |acc, &pixel| acc | pixel) & ALPHA_MASK != 0
}

#[inline]
fn has_alpha(pixel: &u32) -> bool {
    pixel & ALPHA_MASK != 0
}

impl RowScanner for Wide {
    fn first_opaque(row: &[u32]) -> Option<usize> {
        let mut chunks = row.chunks_exact(LANES);
        for (i, chunk) in chunks.by_ref().enumerate() {
            if any_alpha(chunk) {
                return chunk.iter().position(has_alpha).map(|x| i * LANES + x);
            }
        }

        let tail = chunks.remainder();
        let base = row.len() - tail.len();
        tail.iter().position(has_alpha).map(|x| base + x)
    }

    fn last_opaque(row: &[u32]) -> Option<usize> {
        // rchunks leave the remainder at the start of the row
        let mut chunks = row.rchunks_exact(LANES);
        for (i, chunk) in chunks.by_ref().enumerate() {
            if any_alpha(chunk) {
                let base = row.len() - (i + 1) * LANES;
                return chunk.iter().rposition(has_alpha).map(|x| base + x);
            }
        }

        chunks.remainder().iter().rposition(has_alpha)
    }

    #[inline]
    fn is_empty_row(row: &[u32]) -> bool {
        !any_alpha(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::EarlyExit;

    #[test]
    fn test_every_single_pixel_position() {
        // Cover full chunks and remainders on both sides
        for len in [1, 7, 8, 9, 15, 16, 17, 33] {
            for pos in 0..len {
                let mut row = vec![0xffff_ff00u32; len];
                row[pos] = 0x01;
                assert_eq!(Wide::first_opaque(&row), Some(pos), "len {len} pos {pos}");
                assert_eq!(Wide::last_opaque(&row), Some(pos), "len {len} pos {pos}");
            }
        }
    }

    #[test]
    fn test_matches_early_exit_with_two_hits() {
        for len in [2, 9, 16, 21] {
            for a in 0..len {
                for b in a..len {
                    let mut row = vec![0u32; len];
                    row[a] = 0x10;
                    row[b] = 0x20;
                    assert_eq!(Wide::first_opaque(&row), EarlyExit::first_opaque(&row));
                    assert_eq!(Wide::last_opaque(&row), EarlyExit::last_opaque(&row));
                }
            }
        }
    }

    #[test]
    fn test_empty_row_detection() {
        assert!(Wide::is_empty_row(&[]));
        assert!(Wide::is_empty_row(&[0xffff_ff00; 20]));
        let mut row = [0u32; 20];
        row[19] = 0x01;
        assert!(!Wide::is_empty_row(&row));
    }
}
