use rayon::prelude::*;

use super::UpcEanFormat;
use crate::decoder::config::{max_rows, row_step_shift};
use crate::error::{DecodeError, Result};
use crate::models::{BitMatrix, UpcEanResult};

/// Rows to try, alternating outward from the middle of the image
pub fn scan_order(height: usize) -> Vec<usize> {
    if height == 0 {
        return Vec::new();
    }
    let step = (height >> row_step_shift()).max(1);
    let middle = height / 2;
    let limit = max_rows().unwrap_or(usize::MAX);

    let mut rows = vec![middle];
    for steps_away in 1usize.. {
        if rows.len() >= limit {
            break;
        }
        let offset = step * steps_away;
        let above = middle.checked_sub(offset);
        let below = middle.checked_add(offset).filter(|&y| y < height);
        // Keep going on one side after the other runs off the image
        if above.is_none() && below.is_none() {
            break;
        }
        rows.extend(above);
        rows.extend(below);
    }
    rows.truncate(limit);
    rows
}

/// Decode the first row that yields a symbol.
///
/// Rows are tried in parallel; the result is the one nearest the middle in
/// scan order, independent of thread scheduling.
pub fn decode_rows(matrix: &BitMatrix, format: UpcEanFormat) -> Result<UpcEanResult> {
    let rows = scan_order(matrix.height());
    rows.par_iter()
        .find_map_first(|&y| format.decode_row(y, &matrix.row(y)).ok())
        .ok_or_else(|| {
            log::debug!("no {format:?} symbol in {} scanned rows", rows.len());
            DecodeError::NotFound("no decodable row")
        })
}
