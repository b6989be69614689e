use std::ops::Range;

use super::upc_ean::{MIDDLE_PATTERN, PatternSet, decode_digit, digit_char, find_guard_pattern};
use crate::error::Result;
use crate::models::BitArray;

/// Decode four L digits, the center guard and four more L digits
pub fn decode_middle(row: &BitArray, start_range: &Range<usize>, result: &mut String) -> Result<usize> {
    let mut counters = [0u32; 4];
    let mut row_offset = start_range.end;

    for _ in 0..4 {
        let best_match = decode_digit(row, &mut counters, row_offset, PatternSet::L)?;
        result.push(digit_char(best_match));
        row_offset += counters.iter().sum::<u32>() as usize;
    }

    let middle = find_guard_pattern(row, row_offset, true, &MIDDLE_PATTERN)?;
    row_offset = middle.end;

    for _ in 0..4 {
        let best_match = decode_digit(row, &mut counters, row_offset, PatternSet::L)?;
        result.push(digit_char(best_match));
        row_offset += counters.iter().sum::<u32>() as usize;
    }

    Ok(row_offset)
}
