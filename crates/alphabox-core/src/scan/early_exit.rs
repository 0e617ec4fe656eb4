//! Iterator-based row scan.

use super::RowScanner;
use crate::layout::ALPHA_MASK;

/// Stops at the first (or last) opaque pixel using `position`/`rposition`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarlyExit;

impl RowScanner for EarlyExit {
    #[inline]
    fn first_opaque(row: &[u32]) -> Option<usize> {
        row.iter().position(|&pixel| pixel & ALPHA_MASK != 0)
    }

    #[inline]
    fn last_opaque(row: &[u32]) -> Option<usize> {
        row.iter().rposition(|&pixel| pixel & ALPHA_MASK != 0)
    }
}
