use std::ops::Range;

use super::upc_ean::{
    MIDDLE_PATTERN, PatternSet, decode_digit, digit_char, find_guard_pattern,
};
use crate::error::{DecodeError, Result};
use crate::models::BitArray;

/// Left-half parity masks indexed by the implied first digit.
///
/// Bit `5 - x` is set when left digit `x` uses the even ("G") encoding.
pub const FIRST_DIGIT_ENCODINGS: [u32; 10] =
    [0x00, 0x0B, 0x0D, 0x0E, 0x13, 0x19, 0x1C, 0x15, 0x16, 0x1A];

/// Decode six mixed-parity digits, the center guard and six L digits.
///
/// The first digit is prepended from the parity mask of the left half.
pub fn decode_middle(row: &BitArray, start_range: &Range<usize>, result: &mut String) -> Result<usize> {
    let mut counters = [0u32; 4];
    let mut row_offset = start_range.end;
    let mut lg_pattern_found = 0u32;

    for x in 0..6 {
        let best_match = decode_digit(row, &mut counters, row_offset, PatternSet::LAndG)?;
        result.push(digit_char(best_match));
        row_offset += counters.iter().sum::<u32>() as usize;
        if best_match >= 10 {
            lg_pattern_found |= 1 << (5 - x);
        }
    }

    determine_first_digit(result, lg_pattern_found)?;

    let middle = find_guard_pattern(row, row_offset, true, &MIDDLE_PATTERN)?;
    row_offset = middle.end;

    for _ in 0..6 {
        let best_match = decode_digit(row, &mut counters, row_offset, PatternSet::L)?;
        result.push(digit_char(best_match));
        row_offset += counters.iter().sum::<u32>() as usize;
    }

    Ok(row_offset)
}

fn determine_first_digit(result: &mut String, lg_pattern_found: u32) -> Result<()> {
    let first = FIRST_DIGIT_ENCODINGS
        .iter()
        .position(|&mask| mask == lg_pattern_found)
        .ok_or(DecodeError::NotFound("left-half parity matches no first digit"))?;
    result.insert(0, digit_char(first));
    Ok(())
}
