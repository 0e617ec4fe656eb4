//! Counter-loop row scan.
//!
//! Walks each row with an explicit bounded counter. The backward search
//! counts the pixels still to visit, so `x` runs from `row.len()` down to 1
//! and the pixel under test is `row[x - 1]`.

use super::RowScanner;
use crate::layout::ALPHA_MASK;

/// Bounded `while` loops with a break on the first hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct Counted;

impl RowScanner for Counted {
    fn first_opaque(row: &[u32]) -> Option<usize> {
        let width = row.len();
        let mut x = 0;
        while x < width {
            if row[x] & ALPHA_MASK != 0 {
                return Some(x);
            }
            x += 1;
        }
        None
    }

    fn last_opaque(row: &[u32]) -> Option<usize> {
        let mut x = row.len();
        while x > 0 {
            if row[x - 1] & ALPHA_MASK != 0 {
                return Some(x - 1);
            }
            x -= 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_pixel_of_row() {
        let mut row = [0u32; 16];
        row[15] = 0x01;
        assert_eq!(Counted::last_opaque(&row), Some(15));
        assert_eq!(Counted::first_opaque(&row), Some(15));
    }

    #[test]
    fn test_first_pixel_of_row() {
        let mut row = [0u32; 16];
        row[0] = 0xff;
        assert_eq!(Counted::last_opaque(&row), Some(0));
        assert_eq!(Counted::first_opaque(&row), Some(0));
    }

    #[test]
    fn test_single_pixel_rows() {
        assert_eq!(Counted::first_opaque(&[0xff]), Some(0));
        assert_eq!(Counted::last_opaque(&[0xff]), Some(0));
        assert_eq!(Counted::last_opaque(&[0xff00]), None);
        assert_eq!(Counted::last_opaque(&[]), None);
    }
}
